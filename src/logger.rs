//! A minimal backend for the `log` facade. Library crates only use the macros,
//! and the binary decides what to print with `--verbose`.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn verbosity_to_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

// It's okay to call it more than once: only the first call installs the logger,
// but every call updates the level.
pub fn init_logger(verbosity: u8) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(verbosity_to_level(verbosity));
}

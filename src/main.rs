#![deny(unused_imports)]

use fraction::logger::init_logger;
use fraction::run;
use fraction_clap::parse_cli_args;

fn main() {
    let option = match parse_cli_args() {
        Ok(option) => option,
        Err(e) => {
            // `--no-color` may not have been parsed yet
            let color = !std::env::args().any(|arg| arg == "--no-color");

            eprintln!("{}", e.render_error(color));
            std::process::exit(1);
        },
    };

    init_logger(option.verbosity);

    match run(&option) {
        Ok(output) => {
            println!("{output}");
        },
        Err(e) => {
            eprintln!("{}", e.render_error(option.color));
            std::process::exit(1);
        },
    }
}

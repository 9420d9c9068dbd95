use crate::FractionError;
use colored::Colorize;
use std::fmt;

impl fmt::Display for FractionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.kind.msg())?;

        if !self.operands.is_empty() {
            write!(
                fmt,
                " (operands: {})",
                self.operands.iter().map(
                    |(n, d)| render_pair(*n, *d)
                ).collect::<Vec<String>>().join(", "),
            )?;
        }

        Ok(())
    }
}

impl FractionError {
    pub fn render_error(&self, color: bool) -> String {
        let title = if color {
            format!("{}", "[Error]".red())
        } else {
            String::from("[Error]")
        };
        let msg = format!("E{:04}: {self}", self.kind.index());
        let help = match self.kind.help() {
            s if s.is_empty() => String::new(),
            s => format!("\nHelp: {s}"),
        };
        let note = match &self.note {
            Some(s) => format!("\nNote: {s}"),
            None => String::new(),
        };

        format!("{title}\n{msg}{help}{note}")
    }
}

// It has to render exactly the same way as `Fraction`'s `Display`,
// but this crate cannot see `Fraction`.
pub fn render_pair(numer: i32, denom: i32) -> String {
    if numer == 0 || denom == 1 {
        format!("{numer}")
    }

    else {
        format!("{numer}/{denom}")
    }
}

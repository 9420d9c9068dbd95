#![deny(unused_imports)]

use fraction_clap::help_message;
use fraction_config::{BinaryOp, Command, FractionOption};
use fraction_core::{
    Fraction,
    FractionError,
    egyptian_fraction,
};
use log::info;

pub mod logger;

#[cfg(test)]
mod tests;

pub use fraction_core;
pub use fraction_error;

/// Returns what the command line tool prints.
pub fn run(option: &FractionOption) -> Result<String, FractionError> {
    info!("fraction::run(), command: {:?}", option.command);

    let command = match &option.command {
        Some(command) => command,
        None => {
            return Ok(help_message());
        },
    };

    match command {
        Command::Help => Ok(help_message()),
        Command::Version => Ok(format!("fraction {}", env!("CARGO_PKG_VERSION"))),
        Command::Eval { lhs, op, rhs } => {
            let lhs = parse_operand(lhs)?;
            let rhs = parse_operand(rhs)?;

            eval(&lhs, *op, &rhs, option.reduce_results)
        },
        Command::Reduce(f) => {
            let f = parse_operand(f)?;

            Ok(format!("{f} => {}", f.irreducible()))
        },
        Command::Inverse(f) => {
            let f = parse_operand(f)?;

            Ok(format!("1 / ({f}) = {}", f.inverse()?))
        },
        Command::Abs(f) => {
            let f = parse_operand(f)?;

            Ok(format!("|{f}| = {}", f.abs()?))
        },
        Command::Info(f) => {
            let f = parse_operand(f)?;

            Ok(render_info(&f))
        },
        Command::Decimal(n) => {
            let f = Fraction::from_decimal(*n)?;

            Ok(format!("{n} = {f}"))
        },
        Command::Repeating { number, repetend_length } => {
            let f = Fraction::from_repeating_decimal(*number, *repetend_length)?;

            Ok(format!("{number} (repetend length {repetend_length}) = {f}"))
        },
        Command::Egyptian(f) => {
            let f = parse_operand(f)?;
            let terms = egyptian_fraction(&f)?;

            Ok(format!(
                "{f} = {}",
                if terms.is_empty() {
                    String::from("0")
                } else {
                    terms.iter().map(|t| t.to_string()).collect::<Vec<String>>().join(" + ")
                },
            ))
        },
    }
}

// The library only takes `N/D`, but on the command line `3` is much nicer than `3/1`.
fn parse_operand(s: &str) -> Result<Fraction, FractionError> {
    if s.contains('/') {
        Fraction::from_string(s)
    }

    else {
        Fraction::from_string(&format!("{s}/1"))
    }
}

fn eval(lhs: &Fraction, op: BinaryOp, rhs: &Fraction, reduce_results: bool) -> Result<String, FractionError> {
    let (lhs, rhs) = (*lhs, *rhs);
    let op_str = op.render();

    if op.is_comparison() {
        let result = match op {
            BinaryOp::Eq => lhs == rhs,
            BinaryOp::Ne => lhs != rhs,
            BinaryOp::Lt => lhs < rhs,
            BinaryOp::Gt => lhs > rhs,
            BinaryOp::Le => lhs <= rhs,
            BinaryOp::Ge => lhs >= rhs,
            _ => unreachable!(),
        };

        return Ok(format!("{lhs} {op_str} {rhs} = {result}"));
    }

    let mut result = match op {
        BinaryOp::Add => (lhs + rhs)?,
        BinaryOp::Sub => (lhs - rhs)?,
        BinaryOp::Mul => (lhs * rhs)?,
        BinaryOp::Div => (lhs / rhs)?,
        _ => unreachable!(),
    };

    if reduce_results {
        result.to_irreducible();
    }

    Ok(format!("{lhs} {op_str} {rhs} = {result}"))
}

fn render_info(f: &Fraction) -> String {
    let lines = vec![
        format!("fraction: {f}"),
        format!("numerator: {}", f.numerator()),
        format!("denominator: {}", f.denominator()),
        format!("irreducible: {}", f.irreducible()),
        format!("is an integer: {}", f.is_an_integer()),
        format!("is proper: {}", f.is_proper()),
        format!("is unit: {}", f.is_unit()),
        format!("is reducible: {}", f.is_reducible()),
        format!("value: {}", f.to_f64()),
    ];

    lines.join("\n")
}

#![deny(unused_imports)]
//! Command Line Argument Parser
//!
//! Errors are `FractionError`s, so that they're rendered like any other error.

use fraction_config::{
    BinaryOp,
    Command,
    FractionOption,
    MAX_VERBOSITY,
};
use fraction_error::{FractionError, InvalidArgument};
use log::debug;

mod flag;


pub use flag::{FLAGS, Flag, ParamKind};

pub fn parse_cli_args() -> Result<FractionOption, FractionError> {
    let args = std::env::args().skip(1).collect::<Vec<String>>();

    parse_args(&args)
}

pub fn parse_args(args: &[String]) -> Result<FractionOption, FractionError> {
    debug!("fraction_clap::parse_args(), args: {args:?}");

    let mut result = FractionOption::default();
    let mut positionals = vec![];
    let mut index = 0;

    while let Some(arg) = args.get(index) {
        index += 1;

        if !looks_like_flag(arg) {
            positionals.push(arg.to_string());
            continue;
        }

        let flag = match Flag::from_arg(arg) {
            Some(flag) => flag,
            None => {
                return Err(FractionError::invalid_argument(InvalidArgument::UnknownFlag(arg.to_string())));
            },
        };

        let command = match flag.param_kind() {
            ParamKind::None => {
                match flag {
                    Flag::Help => Some(Command::Help),
                    Flag::Version => Some(Command::Version),
                    Flag::Verbose => {
                        result.verbosity = (result.verbosity + 1).min(MAX_VERBOSITY);
                        None
                    },
                    Flag::NoColor => {
                        result.color = false;
                        None
                    },
                    Flag::Reduce => {
                        result.reduce_results = true;
                        None
                    },
                    _ => unreachable!(),
                }
            },
            ParamKind::Fraction => {
                let param = take_param(args, &mut index, flag, "a fraction")?;

                Some(match flag {
                    Flag::Irreducible => Command::Reduce(param),
                    Flag::Inverse => Command::Inverse(param),
                    Flag::Abs => Command::Abs(param),
                    Flag::Info => Command::Info(param),
                    Flag::Egyptian => Command::Egyptian(param),
                    _ => unreachable!(),
                })
            },
            ParamKind::Number => {
                let param = take_param(args, &mut index, flag, "a number")?;

                Some(Command::Decimal(parse_f64(&param)?))
            },
            ParamKind::NumberAndLength => {
                let number = take_param(args, &mut index, flag, "a number")?;
                let length = take_param(args, &mut index, flag, "a repetend length")?;

                Some(Command::Repeating {
                    number: parse_f64(&number)?,
                    repetend_length: length.trim().parse::<i32>().map_err(
                        |_| FractionError::parse_error(length.to_string())
                    )?,
                })
            },
        };

        if let Some(command) = command {
            set_command(&mut result, command, arg)?;
        }
    }

    match positionals.len() {
        0 => {},
        1 => {
            let command = Command::Info(positionals[0].to_string());
            set_command(&mut result, command, &positionals[0])?;
        },
        3 => {
            let op = match BinaryOp::from_str(&positionals[1]) {
                Some(op) => op,
                None => {
                    return Err(FractionError::invalid_argument(InvalidArgument::UnknownOperator(positionals[1].to_string())));
                },
            };
            let command = Command::Eval {
                lhs: positionals[0].to_string(),
                op,
                rhs: positionals[2].to_string(),
            };

            set_command(&mut result, command, &positionals[0])?;
        },
        _ => {
            return Err(FractionError::invalid_argument(InvalidArgument::UnexpectedArgument(positionals.join(" "))));
        },
    }

    Ok(result)
}

// `-1/2` and `-0.5` are values, and `-` is an operator
fn looks_like_flag(arg: &str) -> bool {
    match arg.strip_prefix('-') {
        Some(rest) => !rest.is_empty() && !rest.starts_with(|c: char| c.is_ascii_digit() || c == '.'),
        None => false,
    }
}

fn take_param(
    args: &[String],
    index: &mut usize,
    flag: Flag,
    expected: &'static str,
) -> Result<String, FractionError> {
    match args.get(*index) {
        Some(arg) => {
            *index += 1;
            Ok(arg.to_string())
        },
        None => Err(FractionError::invalid_argument(InvalidArgument::MissingArgument {
            flag: flag.long().to_string(),
            expected,
        })),
    }
}

fn parse_f64(s: &str) -> Result<f64, FractionError> {
    s.trim().parse::<f64>().map_err(|_| FractionError::parse_error(s.to_string()))
}

// only one command at a time
fn set_command(option: &mut FractionOption, command: Command, arg: &str) -> Result<(), FractionError> {
    if option.command.is_some() {
        return Err(FractionError::invalid_argument(InvalidArgument::UnexpectedArgument(arg.to_string())));
    }

    option.command = Some(command);
    Ok(())
}

pub fn help_message() -> String {
    let flags = FLAGS.iter().map(
        |flag| {
            let name = match flag.short() {
                Some(short) => format!("{short}, {}{}", flag.long(), flag.render_param()),
                None => format!("    {}{}", flag.long(), flag.render_param()),
            };

            format!("    {name:<36}{}", flag.describe())
        }
    ).collect::<Vec<String>>().join("\n");

    format!(
"Usage: fraction [FLAGS] <N/D> [<OP> <N/D>]

Examples:
    fraction 1/2 + 1/3
    fraction 4/6 == 2/3
    fraction --egyptian 21/97
    fraction --repeating 1.0123 3

Operators: + - * / == != < > <= >=

Flags:
{flags}"
    )
}

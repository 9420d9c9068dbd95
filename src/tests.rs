use super::*;
use crate::logger::verbosity_to_level;
use fraction_clap::parse_args;
use fraction_core::FractionErrorKind;
use log::LevelFilter;

fn run_args(s: &str) -> Result<String, FractionError> {
    let args = s.split_whitespace().map(|s| s.to_string()).collect::<Vec<String>>();

    run(&parse_args(&args)?)
}

#[test]
fn run_test() {
    let samples = vec![
        ("1/2 + 1/3", "1/2 + 1/3 = 5/6"),
        ("1/2 - 1/3", "1/2 - 1/3 = 1/6"),
        ("1/2 * 1/3", "1/2 * 1/3 = 1/6"),
        ("1/2 / 1/3", "1/2 / 1/3 = 3/2"),
        ("1/2 * 2/3", "1/2 * 2/3 = 2/6"),
        ("--reduce 1/2 * 2/3", "1/2 * 2/3 = 1/3"),
        ("1/3 == 2/6", "1/3 == 2/6 = true"),
        ("1/3 != 2/6", "1/3 != 2/6 = false"),
        ("1/2 > 1/3", "1/2 > 1/3 = true"),
        ("1/2 < 1/3", "1/2 < 1/3 = false"),
        ("3 + 1/2", "3 + 1/2 = 7/2"),
        ("--irreducible 4/6", "4/6 => 2/3"),
        ("--inverse -2/3", "1 / (-2/3) = -3/2"),
        ("--abs -2/3", "|-2/3| = 2/3"),
        ("--decimal 0.7", "0.7 = 7/10"),
        ("--repeating 1.0123 3", "1.0123 (repetend length 3) = 10113/9990"),
        ("--egyptian 21/97", "21/97 = 1/5 + 1/61 + 1/9862 + 1/291767270"),
        ("--egyptian 0/3", "0 = 0"),
    ];

    for (s, expected) in samples.into_iter() {
        assert_eq!(run_args(s).unwrap(), expected, "running {s:?}");
    }
}

#[test]
fn run_info_test() {
    let output = run_args("10/10").unwrap();

    assert!(output.contains("is an integer: true"));
    assert!(output.contains("is proper: false"));
    assert!(output.contains("is reducible: true"));
    assert!(output.contains("irreducible: 1"));
    assert!(output.contains("value: 1"));
}

#[test]
fn run_help_test() {
    assert_eq!(run_args("").unwrap(), help_message());
    assert_eq!(run_args("--help").unwrap(), help_message());
    assert!(run_args("--version").unwrap().starts_with("fraction "));
}

#[test]
fn run_error_test() {
    let samples = vec![
        ("1/2 / 0/3", FractionErrorKind::DivideByZero),
        ("--inverse 0/3", FractionErrorKind::DivideByZero),
        ("1/0 + 1/2", FractionErrorKind::DivideByZero),
        ("2147483647 + 1", FractionErrorKind::Overflow),
        ("1/65536 * 1/65536", FractionErrorKind::Overflow),
        ("1/2 + x", FractionErrorKind::ParseError(String::from("x/1"))),
    ];

    for (s, expected) in samples.into_iter() {
        assert_eq!(run_args(s).unwrap_err().kind, expected, "running {s:?}");
    }

    let e = run_args("--repeating 1.0123 5").unwrap_err();
    assert!(e.render_error(false).starts_with("[Error]\nE0010: repetend length 5 is invalid"));
}

#[test]
fn run_random_test() {
    for _ in 0..256 {
        let a = rand::random::<i16>() as i32;
        let b = (rand::random::<u8>() as i32) + 1;
        let c = rand::random::<i16>() as i32;
        let d = (rand::random::<u8>() as i32) + 1;
        let lhs = Fraction::new(a, b).unwrap();
        let rhs = Fraction::new(c, d).unwrap();

        let output = run_args(&format!("{a}/{b} + {c}/{d}")).unwrap();
        let expected = (lhs + rhs).unwrap();

        assert_eq!(output, format!("{lhs} + {rhs} = {expected}"));
    }
}

#[test]
fn verbosity_test() {
    assert_eq!(verbosity_to_level(0), LevelFilter::Error);
    assert_eq!(verbosity_to_level(1), LevelFilter::Info);
    assert_eq!(verbosity_to_level(2), LevelFilter::Debug);
}

#[derive(Clone, Debug, PartialEq)]
pub enum FractionErrorKind {
    /// A zero denominator is given, or a zero is inverted.
    DivideByZero,

    /// A result (or an intermediate) does not fit in `i32`.
    Overflow,

    InvalidArgument(InvalidArgument),

    // the text that's failed to parse
    ParseError(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum InvalidArgument {
    RepetendLength {
        repetend_length: i32,

        // number of digits after the decimal point
        digits: usize,
    },

    // printed form of `NaN` or an infinity
    NonFiniteNumber(String),

    // from here, the command line
    UnknownFlag(String),
    MissingArgument {
        flag: String,
        expected: &'static str,
    },
    UnexpectedArgument(String),
    UnknownOperator(String),
}

impl FractionErrorKind {
    // main explanation of this error
    // no capital letters, no dot
    pub fn msg(&self) -> String {
        match self {
            FractionErrorKind::DivideByZero => String::from("denominator cannot be zero"),
            FractionErrorKind::Overflow => String::from("the result does not fit in a 32-bit signed integer"),
            FractionErrorKind::InvalidArgument(a) => a.msg(),
            FractionErrorKind::ParseError(s) => format!("cannot parse `{s}` as a fraction"),
        }
    }

    // extra sentences that explain the error
    // if the help msg is empty, it's ignored
    pub fn help(&self) -> String {
        match self {
            FractionErrorKind::DivideByZero => String::from("You cannot invert a fraction whose numerator is 0."),
            FractionErrorKind::Overflow => String::from("Try reducing the operands first."),
            FractionErrorKind::InvalidArgument(a) => a.help(),
            FractionErrorKind::ParseError(_) => String::from("A fraction looks like `N/D`, where N and D are integers."),
        }
    }

    /// identifier of this error kind
    pub fn index(&self) -> u32 {
        match self {
            FractionErrorKind::DivideByZero => 0,
            FractionErrorKind::Overflow => 1,
            FractionErrorKind::InvalidArgument(a) => 10 + a.index(),
            FractionErrorKind::ParseError(_) => 2,
        }
    }
}

impl InvalidArgument {
    fn msg(&self) -> String {
        match self {
            InvalidArgument::RepetendLength { repetend_length, digits } => format!(
                "repetend length {repetend_length} is invalid for a number with {digits} digit{} after the decimal point",
                if *digits == 1 { "" } else { "s" },
            ),
            InvalidArgument::NonFiniteNumber(n) => format!("`{n}` is not a finite number"),
            InvalidArgument::UnknownFlag(f) => format!("unknown flag `{f}`"),
            InvalidArgument::MissingArgument { flag, expected } => format!("`{flag}` expects {expected}, but got nothing"),
            InvalidArgument::UnexpectedArgument(a) => format!("unexpected argument `{a}`"),
            InvalidArgument::UnknownOperator(op) => format!("unknown operator `{op}`"),
        }
    }

    fn help(&self) -> String {
        match self {
            InvalidArgument::RepetendLength { .. } => String::from(
                "The repetend length must be at least 1, and cannot be longer than the digits after the decimal point."
            ),
            InvalidArgument::UnknownFlag(_) | InvalidArgument::UnexpectedArgument(_) => String::from(
                "Run `fraction --help` to see the usage."
            ),
            InvalidArgument::UnknownOperator(_) => String::from(
                "Available operators are `+`, `-`, `*`, `/`, `==`, `!=`, `<`, `>`, `<=` and `>=`."
            ),
            _ => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            InvalidArgument::RepetendLength { .. } => 0,
            InvalidArgument::NonFiniteNumber(_) => 1,
            InvalidArgument::UnknownFlag(_) => 2,
            InvalidArgument::MissingArgument { .. } => 3,
            InvalidArgument::UnexpectedArgument(_) => 4,
            InvalidArgument::UnknownOperator(_) => 5,
        }
    }
}

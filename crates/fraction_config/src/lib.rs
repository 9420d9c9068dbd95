#![deny(unused_imports)]

pub const MIN_VERBOSITY: u8 = 0;
pub const MAX_VERBOSITY: u8 = 2;

#[derive(Clone, Debug, PartialEq)]
pub struct FractionOption {
    // `None` when there's nothing to do, and the help message is shown.
    pub command: Option<Command>,

    // 0: errors only, 1: info, 2: debug
    pub verbosity: u8,

    // colors in error messages
    pub color: bool,

    // reduces the results of arithmetic operations before printing them
    pub reduce_results: bool,
}

impl FractionOption {
    pub fn help_message() -> Self {
        FractionOption::do_this(Command::Help)
    }

    pub fn version_info() -> Self {
        FractionOption::do_this(Command::Version)
    }

    pub fn do_this(command: Command) -> Self {
        FractionOption {
            command: Some(command),
            ..FractionOption::default()
        }
    }
}

impl Default for FractionOption {
    fn default() -> Self {
        FractionOption {
            command: None,
            verbosity: MIN_VERBOSITY,
            color: true,
            reduce_results: false,
        }
    }
}

// Fractions are kept as strings until `run` parses them,
// so that the parse errors come from the library.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Eval {
        lhs: String,
        op: BinaryOp,
        rhs: String,
    },
    Reduce(String),
    Inverse(String),
    Abs(String),

    // predicates and the float value
    Info(String),

    Decimal(f64),
    Repeating {
        number: f64,
        repetend_length: i32,
    },
    Egyptian(String),
    Help,
    Version,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinaryOp {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" | "x" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "==" => Some(BinaryOp::Eq),
            "!=" => Some(BinaryOp::Ne),
            "<" => Some(BinaryOp::Lt),
            ">" => Some(BinaryOp::Gt),
            "<=" => Some(BinaryOp::Le),
            ">=" => Some(BinaryOp::Ge),
            _ => None,
        }
    }

    pub fn render(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
        }
    }

    pub fn is_comparison(&self) -> bool {
        !matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div)
    }
}

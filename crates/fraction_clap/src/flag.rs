#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flag {
    Help,
    Version,
    Verbose,
    NoColor,
    Reduce,
    Irreducible,
    Inverse,
    Abs,
    Info,
    Decimal,
    Repeating,
    Egyptian,
}

pub const FLAGS: [Flag; 12] = [
    Flag::Help,
    Flag::Version,
    Flag::Verbose,
    Flag::NoColor,
    Flag::Reduce,
    Flag::Irreducible,
    Flag::Inverse,
    Flag::Abs,
    Flag::Info,
    Flag::Decimal,
    Flag::Repeating,
    Flag::Egyptian,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamKind {
    None,
    Fraction,
    Number,

    // a number and a repetend length
    NumberAndLength,
}

impl Flag {
    /// what kind of param this flag takes
    pub fn param_kind(&self) -> ParamKind {
        match self {
            Flag::Help
            | Flag::Version
            | Flag::Verbose
            | Flag::NoColor
            | Flag::Reduce => ParamKind::None,
            Flag::Irreducible
            | Flag::Inverse
            | Flag::Abs
            | Flag::Info
            | Flag::Egyptian => ParamKind::Fraction,
            Flag::Decimal => ParamKind::Number,
            Flag::Repeating => ParamKind::NumberAndLength,
        }
    }

    pub fn short(&self) -> Option<&'static str> {
        match self {
            Flag::Help => Some("-h"),
            Flag::Verbose => Some("-v"),
            Flag::Egyptian => Some("-e"),
            Flag::Version
            | Flag::NoColor
            | Flag::Reduce
            | Flag::Irreducible
            | Flag::Inverse
            | Flag::Abs
            | Flag::Info
            | Flag::Decimal
            | Flag::Repeating => None,
        }
    }

    pub fn long(&self) -> &'static str {
        match self {
            Flag::Help => "--help",
            Flag::Version => "--version",
            Flag::Verbose => "--verbose",
            Flag::NoColor => "--no-color",
            Flag::Reduce => "--reduce",
            Flag::Irreducible => "--irreducible",
            Flag::Inverse => "--inverse",
            Flag::Abs => "--abs",
            Flag::Info => "--info",
            Flag::Decimal => "--decimal",
            Flag::Repeating => "--repeating",
            Flag::Egyptian => "--egyptian",
        }
    }

    pub fn from_arg(arg: &str) -> Option<Flag> {
        FLAGS.iter().find(
            |flag| flag.long() == arg || flag.short() == Some(arg)
        ).copied()
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Flag::Help => "show this message",
            Flag::Version => "show the version",
            Flag::Verbose => "print logs (repeat it for more)",
            Flag::NoColor => "no colors in error messages",
            Flag::Reduce => "reduce the results of arithmetic",
            Flag::Irreducible => "reduce a fraction to its lowest terms",
            Flag::Inverse => "invert a fraction",
            Flag::Abs => "absolute value of a fraction",
            Flag::Info => "show the properties of a fraction",
            Flag::Decimal => "convert a terminating decimal",
            Flag::Repeating => "convert a repeating decimal, given the repetend length",
            Flag::Egyptian => "decompose a fraction into unit fractions",
        }
    }

    pub fn render_param(&self) -> &'static str {
        match self.param_kind() {
            ParamKind::None => "",
            ParamKind::Fraction => " <N/D>",
            ParamKind::Number => " <NUMBER>",
            ParamKind::NumberAndLength => " <NUMBER> <LENGTH>",
        }
    }
}

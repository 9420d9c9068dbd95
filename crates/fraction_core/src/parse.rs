use crate::Fraction;
use fraction_error::FractionError;
use std::num::IntErrorKind;
use std::str::FromStr;

impl Fraction {
    /// It only accepts `N/D`. Whitespace around `N` and `D` is okay.
    pub fn from_string(s: &str) -> Result<Self, FractionError> {
        let mut tokens = s.split('/');

        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(numer), Some(denom), None) => {
                let numer = parse_i32_token(numer, s)?;
                let denom = parse_i32_token(denom, s)?;

                Fraction::new(numer, denom)
            },
            _ => Err(FractionError::parse_error(s.to_string())),
        }
    }
}

fn parse_i32_token(token: &str, whole: &str) -> Result<i32, FractionError> {
    let token = token.trim();

    token.parse::<i32>().map_err(
        |e| match e.kind() {
            IntErrorKind::PosOverflow
            | IntErrorKind::NegOverflow => FractionError::overflow(&[]).with_note(format!(
                "`{token}` does not fit in a 32-bit integer",
            )),
            _ => FractionError::parse_error(whole.to_string()),
        }
    )
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, FractionError> {
        Fraction::from_string(s)
    }
}

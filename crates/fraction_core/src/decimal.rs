use crate::Fraction;
use fraction_error::{FractionError, InvalidArgument};
use fraction_number::{parse_digits, pow10};
use log::{debug, info};

// A float, as it's printed by `Display`.
// `Display` for `f64` never uses an exponent, so it's always `-?\d+(\.\d+)?`.
struct PrintedDecimal {
    is_neg: bool,
    integer: String,

    // digits after the decimal point
    frac: String,
}

impl PrintedDecimal {
    fn new(number: f64) -> Result<Self, FractionError> {
        if !number.is_finite() {
            return Err(FractionError::invalid_argument(
                InvalidArgument::NonFiniteNumber(number.to_string()),
            ));
        }

        let s = number.to_string();
        let (is_neg, s) = match s.strip_prefix('-') {
            Some(s) => (true, s),
            None => (false, s.as_str()),
        };

        let (integer, frac) = match s.split_once('.') {
            Some((integer, frac)) => (integer.to_string(), frac.to_string()),
            None => (s.to_string(), String::new()),
        };

        Ok(PrintedDecimal { is_neg, integer, frac })
    }

    /// `number * 10^frac_digits`, truncated toward zero.
    /// It's exact because it reads the printed digits instead of multiplying floats.
    fn scaled(&self, frac_digits: usize) -> Result<i128, FractionError> {
        let digits = format!(
            "{}{}{}",
            if self.is_neg { "-" } else { "" },
            self.integer,
            &self.frac[..frac_digits],
        );

        parse_digits(&digits)
    }
}

impl Fraction {
    /// `0.7` becomes `7/10`. It's not reduced: `0.5` becomes `5/10`.
    pub fn from_decimal(number: f64) -> Result<Self, FractionError> {
        info!("fraction_core::Fraction::from_decimal(), number: {number}");

        let printed = PrintedDecimal::new(number)?;
        let digits = printed.frac.len();
        let denom = pow10(digits as u32)?;
        let numer = printed.scaled(digits)?;

        Fraction::from_wide(numer, denom)
    }

    /// `number` must show one full repetend after the decimal point.
    /// For example, `1.0123123...` is `from_repeating_decimal(1.0123, 3)`, which is `10113/9990`.
    ///
    /// Let `d` be the number of digits after the decimal point and `r` be `repetend_length`.
    /// Then `number * 10^d - number * 10^(d - r)` cancels the infinite tail, which gives
    /// `numer / (10^d - 10^(d - r))`.
    pub fn from_repeating_decimal(number: f64, repetend_length: i32) -> Result<Self, FractionError> {
        info!("fraction_core::Fraction::from_repeating_decimal(), number: {number}, repetend_length: {repetend_length}");

        let printed = PrintedDecimal::new(number)?;
        let digits = printed.frac.len();

        if repetend_length <= 0 || repetend_length as usize > digits {
            debug!("fraction_core::Fraction::from_repeating_decimal(), invalid repetend: {repetend_length} / {digits}");

            return Err(FractionError::invalid_argument(
                InvalidArgument::RepetendLength { repetend_length, digits },
            ));
        }

        let non_repetend_length = digits - repetend_length as usize;
        let p = pow10(digits as u32)?;
        let q = pow10(non_repetend_length as u32)?;

        let denom = p - q;
        let numer = printed.scaled(digits)? - printed.scaled(non_repetend_length)?;

        Fraction::from_wide(numer, denom)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(number: f64) -> Result<Self, FractionError> {
        Fraction::from_decimal(number)
    }
}

use crate::Fraction;
use fraction_error::FractionError;
use fraction_number::lcm;
use std::ops::{Add, Div, Mul, Neg, Sub};

// Both numerators rewritten over `denom`, the lcm of the two denominators.
// Every value here fits in `i64`: `|numer| <= 2^31` and `denom / old_denom < 2^31`.
pub(crate) struct CommonDenominator {
    pub lhs: i64,
    pub rhs: i64,
    pub denom: i64,
}

/// Shared by every comparison, addition and subtraction.
/// It cannot fail, because it stays in the wide domain.
pub(crate) fn common_denominator(lhs: &Fraction, rhs: &Fraction) -> CommonDenominator {
    let denom = lcm(lhs.denom, rhs.denom);

    CommonDenominator {
        lhs: lhs.numer as i64 * (denom / lhs.denom as i64),
        rhs: rhs.numer as i64 * (denom / rhs.denom as i64),
        denom,
    }
}

pub fn reduction_to_common_denominator(lhs: &Fraction, rhs: &Fraction) -> Result<(Fraction, Fraction), FractionError> {
    let c = common_denominator(lhs, rhs);
    let operands = [lhs.as_pair(), rhs.as_pair()];

    Ok((
        Fraction::from_wide(c.lhs as i128, c.denom as i128).map_err(|e| e.with_operands(&operands))?,
        Fraction::from_wide(c.rhs as i128, c.denom as i128).map_err(|e| e.with_operands(&operands))?,
    ))
}

pub fn add_fraction(lhs: &Fraction, rhs: &Fraction) -> Result<Fraction, FractionError> {
    let c = common_denominator(lhs, rhs);

    Fraction::from_wide(c.lhs as i128 + c.rhs as i128, c.denom as i128)
        .map_err(|e| e.with_operands(&[lhs.as_pair(), rhs.as_pair()]))
}

pub fn sub_fraction(lhs: &Fraction, rhs: &Fraction) -> Result<Fraction, FractionError> {
    let c = common_denominator(lhs, rhs);

    Fraction::from_wide(c.lhs as i128 - c.rhs as i128, c.denom as i128)
        .map_err(|e| e.with_operands(&[lhs.as_pair(), rhs.as_pair()]))
}

/// The result is not reduced: `1/2 * 2/3` is `2/6`.
pub fn mul_fraction(lhs: &Fraction, rhs: &Fraction) -> Result<Fraction, FractionError> {
    Fraction::from_wide(
        lhs.numer as i128 * rhs.numer as i128,
        lhs.denom as i128 * rhs.denom as i128,
    ).map_err(|e| e.with_operands(&[lhs.as_pair(), rhs.as_pair()]))
}

/// `lhs * rhs.inverse()`
pub fn div_fraction(lhs: &Fraction, rhs: &Fraction) -> Result<Fraction, FractionError> {
    let operands = [lhs.as_pair(), rhs.as_pair()];
    let rhs = rhs.inverse().map_err(|e| e.with_operands(&operands))?;

    mul_fraction(lhs, &rhs).map_err(|e| e.with_operands(&operands))
}

// Rust has no unary `+`, so this is all there is to it.
pub fn pos_fraction(f: &Fraction) -> Fraction {
    *f
}

pub fn neg_fraction(f: &Fraction) -> Result<Fraction, FractionError> {
    match f.numer.checked_neg() {
        Some(numer) => Ok(Fraction { numer, denom: f.denom }),
        None => Err(FractionError::overflow(&[f.as_pair()])),
    }
}

/// An empty iterator sums to 0.
pub fn sum_fractions<I: IntoIterator<Item = Fraction>>(fractions: I) -> Result<Fraction, FractionError> {
    let mut result = Fraction::zero();

    for f in fractions.into_iter() {
        result = add_fraction(&result, &f)?;
    }

    Ok(result)
}

impl Add for Fraction {
    type Output = Result<Fraction, FractionError>;

    fn add(self, rhs: Fraction) -> Self::Output {
        add_fraction(&self, &rhs)
    }
}

impl Sub for Fraction {
    type Output = Result<Fraction, FractionError>;

    fn sub(self, rhs: Fraction) -> Self::Output {
        sub_fraction(&self, &rhs)
    }
}

impl Mul for Fraction {
    type Output = Result<Fraction, FractionError>;

    fn mul(self, rhs: Fraction) -> Self::Output {
        mul_fraction(&self, &rhs)
    }
}

impl Div for Fraction {
    type Output = Result<Fraction, FractionError>;

    fn div(self, rhs: Fraction) -> Self::Output {
        div_fraction(&self, &rhs)
    }
}

impl Neg for Fraction {
    type Output = Result<Fraction, FractionError>;

    fn neg(self) -> Self::Output {
        neg_fraction(&self)
    }
}

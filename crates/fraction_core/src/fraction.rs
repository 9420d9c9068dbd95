use fraction_error::FractionError;
use fraction_number::{gcd, narrow};

pub mod cmp;
pub mod op;

/// An exact fraction of two `i32`s.
///
/// `denom` is always greater than 0, so the sign lives in `numer`.
/// It's NOT always in lowest terms: `4/6` and `2/3` are different
/// representations of the same value, and they're equal to each other.
/// Use `irreducible` or `to_irreducible` to reduce it.
#[derive(Clone, Copy, Debug)]
pub struct Fraction {
    pub(crate) numer: i32,
    pub(crate) denom: i32,
}

impl Fraction {
    pub fn new(numer: i32, denom: i32) -> Result<Self, FractionError> {
        Fraction::from_wide(numer as i128, denom as i128)
    }

    /// Every constructor ends up here. It takes both halves at once, so
    /// the sign normalization always sees the numerator the caller gave.
    pub(crate) fn from_wide(numer: i128, denom: i128) -> Result<Self, FractionError> {
        if denom == 0 {
            return Err(FractionError::divide_by_zero(&[]).with_note(format!(
                "tried to create `{numer}/0`",
            )));
        }

        // negating an `i128` that came from `i32`s or from 10^k (k <= 38) never overflows
        let (numer, denom) = if denom < 0 {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        match (narrow(numer), narrow(denom)) {
            (Ok(numer), Ok(denom)) => Ok(Fraction { numer, denom }),
            _ => Err(FractionError::overflow(&[]).with_note(format!(
                "`{numer}/{denom}` does not fit in 32-bit integers",
            ))),
        }
    }

    pub fn from_int(n: i32) -> Self {
        Fraction { numer: n, denom: 1 }
    }

    pub fn zero() -> Self {
        Fraction::from_int(0)
    }

    pub fn one() -> Self {
        Fraction::from_int(1)
    }

    pub fn numerator(&self) -> i32 {
        self.numer
    }

    /// It's always positive.
    pub fn denominator(&self) -> i32 {
        self.denom
    }

    pub(crate) fn as_pair(&self) -> (i32, i32) {
        (self.numer, self.denom)
    }

    /// Divides both by their gcd. `self` is not changed.
    pub fn irreducible(&self) -> Self {
        // `denom` is never 0, so `r` is at least 1
        let r = gcd(self.numer as i64, self.denom as i64);

        // the quotients are never larger (in magnitude) than the inputs
        Fraction {
            numer: (self.numer as i64 / r) as i32,
            denom: (self.denom as i64 / r) as i32,
        }
    }

    /// The only method that mutates a `Fraction`.
    pub fn to_irreducible(&mut self) {
        *self = self.irreducible();
    }

    pub fn abs(&self) -> Result<Self, FractionError> {
        match self.numer.checked_abs() {
            Some(numer) => Ok(Fraction { numer, denom: self.denom }),
            None => Err(FractionError::overflow(&[self.as_pair()])),
        }
    }

    /// 0 cannot be inverted.
    pub fn inverse(&self) -> Result<Self, FractionError> {
        if self.numer == 0 {
            return Err(FractionError::divide_by_zero(&[self.as_pair()]));
        }

        Fraction::from_wide(self.denom as i128, self.numer as i128)
            .map_err(|e| e.with_operands(&[self.as_pair()]))
    }

    /// It only checks the representation, not the value: `5/5` is an integer but `10/5` is not.
    /// Call `irreducible` first if you want to know whether the value is an integer.
    pub fn is_an_integer(&self) -> bool {
        self.numer == self.denom
    }

    pub fn is_proper(&self) -> bool {
        self.numer < self.denom
    }

    pub fn is_unit(&self) -> bool {
        self.numer == 1
    }

    pub fn is_reducible(&self) -> bool {
        gcd(self.numer as i64, self.denom as i64) > 1
    }

    pub fn is_zero(&self) -> bool {
        self.numer == 0
    }

    pub fn is_negative(&self) -> bool {
        self.numer < 0
    }

    pub fn to_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Rewrites both fractions over the lcm of their denominators.
    pub fn reduction_to_common_denominator(lhs: &Fraction, rhs: &Fraction) -> Result<(Fraction, Fraction), FractionError> {
        op::reduction_to_common_denominator(lhs, rhs)
    }

    pub fn get_egyptian_fraction(fraction: &Fraction) -> Result<Vec<Fraction>, FractionError> {
        crate::egyptian_fraction(fraction)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction::zero()
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Fraction::from_int(n)
    }
}

impl From<Fraction> for f64 {
    fn from(f: Fraction) -> f64 {
        f.to_f64()
    }
}

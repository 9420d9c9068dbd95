use super::op::common_denominator;
use crate::Fraction;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

// The common denominator is always positive, so comparing the numerators is enough.
pub fn cmp_fraction(lhs: &Fraction, rhs: &Fraction) -> Ordering {
    let c = common_denominator(lhs, rhs);
    c.lhs.cmp(&c.rhs)
}

pub fn eq_fraction(lhs: &Fraction, rhs: &Fraction) -> bool {
    let c = common_denominator(lhs, rhs);
    c.lhs == c.rhs
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Fraction) -> bool {
        eq_fraction(self, other)
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Fraction) -> Ordering {
        cmp_fraction(self, other)
    }
}

// `4/6` and `2/3` are equal, so they must have the same hash.
impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.irreducible().as_pair().hash(state);
    }
}

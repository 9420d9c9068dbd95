use crate::Fraction;
use fraction_error::render_pair;
use std::fmt;

// `0/7` is rendered as `0` and `3/1` as `3`.
impl fmt::Display for Fraction {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}", render_pair(self.numer, self.denom))
    }
}

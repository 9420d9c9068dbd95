#![deny(unused_imports)]

mod decimal;
mod egyptian;
mod fmt;
mod fraction;
mod parse;


pub use egyptian::egyptian_fraction;
pub use fraction::Fraction;
pub use fraction::cmp::{cmp_fraction, eq_fraction};
pub use fraction::op::{
    add_fraction,
    div_fraction,
    mul_fraction,
    neg_fraction,
    pos_fraction,
    sub_fraction,
    sum_fractions,
};
pub use fraction_error::{FractionError, FractionErrorKind, InvalidArgument};

use crate::{Fraction, neg_fraction, sub_fraction};
use fraction_error::FractionError;
use fraction_number::narrow;
use log::{debug, info};

/// Greedily decomposes `fraction` into unit fractions whose sum is `fraction`.
///
/// Each step takes the largest unit fraction `1/k` that is not larger than
/// what's remaining, with `k` strictly increasing, and stops when the remainder
/// itself is a unit fraction. The number of terms is not guaranteed to be minimal.
///
/// - 0 decomposes to an empty list.
/// - A negative fraction decomposes its absolute value, then every term is negated.
/// - A value greater than or equal to 1 starts from `1/2`, like the others.
pub fn egyptian_fraction(fraction: &Fraction) -> Result<Vec<Fraction>, FractionError> {
    info!("fraction_core::egyptian_fraction(), fraction: {fraction}");

    let target = fraction.irreducible();

    if target.is_zero() {
        return Ok(vec![]);
    }

    if target.is_negative() {
        let terms = egyptian_fraction(&neg_fraction(&target)?)?;
        return terms.iter().map(neg_fraction).collect();
    }

    let mut result = vec![];
    let mut remaining = target;
    let mut last_denom: i64 = 1;

    // `remaining` is always positive and reduced, so the numerator never hits 0
    while !remaining.is_unit() {
        // the smallest `k` with `1/k <= n/d` is `ceil(d/n)`
        let k = ceil_div(remaining.denom as i64, remaining.numer as i64).max(last_denom + 1);
        let unit = Fraction::new(1, narrow(k)?)?;

        debug!("fraction_core::egyptian_fraction(), remaining: {remaining}, next term: {unit}");

        remaining = sub_fraction(&remaining, &unit)?.irreducible();
        result.push(unit);
        last_denom = k;
    }

    result.push(remaining);
    Ok(result)
}

// both are positive
fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

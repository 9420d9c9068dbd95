#![deny(unused_imports)]

use fraction_error::FractionError;

#[cfg(test)]
mod tests;

/// `10^38` is the largest power of ten that fits in `i128`.
pub const MAX_POW10_EXP: u32 = 38;

// It's always non-negative, even if the inputs are negative.
// `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();

    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }

    // `a` is at most `2^63`, which only happens for `gcd(i64::MIN, 0)`
    // and we never call it with those inputs
    a as i64
}

/// `lcm(a, b) = |a * b| / gcd(a, b)`
///
/// The lcm of two `i32`s always fits in `i64`, so it cannot fail.
/// Callers narrow it back to `i32` when they need to.
/// Both inputs must be non-zero.
pub fn lcm(a: i32, b: i32) -> i64 {
    let (a, b) = (a as i64, b as i64);

    // divides before multiplying
    (a / gcd(a, b) * b).abs()
}

/// Every wide intermediate comes back to the bounded domain through this function.
pub fn narrow<T: TryInto<i32>>(n: T) -> Result<i32, FractionError> {
    n.try_into().map_err(|_| FractionError::overflow(&[]))
}

pub fn pow10(exp: u32) -> Result<i128, FractionError> {
    10i128.checked_pow(exp).ok_or_else(
        || FractionError::overflow(&[]).with_note(format!("10^{exp} is too large"))
    )
}

/// Reads an optionally signed run of decimal digits into `i128`.
/// It's used for the digits of a printed float, so it doesn't accept `+`, `_` or whitespace.
pub fn parse_digits(s: &str) -> Result<i128, FractionError> {
    let (is_neg, digits) = match s.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, s),
    };

    if digits.is_empty() {
        return Err(FractionError::parse_error(s.to_string()));
    }

    let mut result: i128 = 0;

    for c in digits.bytes() {
        match c {
            b'0'..=b'9' => {
                result = result.checked_mul(10)
                    .and_then(|n| n.checked_add((c - b'0') as i128))
                    .ok_or_else(|| FractionError::overflow(&[]))?;
            },
            _ => {
                return Err(FractionError::parse_error(s.to_string()));
            },
        }
    }

    Ok(if is_neg { -result } else { result })
}

use super::*;
use fraction_error::FractionErrorKind;

#[test]
fn gcd_test() {
    let samples = vec![
        (12, 18, 6),
        (-12, 18, 6),
        (12, -18, 6),
        (-12, -18, 6),
        (7, 13, 1),
        (0, 5, 5),
        (5, 0, 5),
        (0, 0, 0),
        (i32::MIN as i64, 2, 2),
    ];

    for (a, b, expected) in samples.into_iter() {
        assert_eq!(gcd(a, b), expected, "gcd({a}, {b})");
        assert_eq!(gcd(b, a), expected, "gcd({b}, {a})");
    }
}

#[test]
fn lcm_test() {
    let samples = vec![
        (2, 3, 6),
        (4, 6, 12),
        (-4, 6, 12),
        (1, 97, 97),
        (29585, 9862, 291767270),
        (i32::MAX, i32::MAX - 1, i32::MAX as i64 * (i32::MAX as i64 - 1)),
        (i32::MIN, 3, -(i32::MIN as i64) * 3),
    ];

    for (a, b, expected) in samples.into_iter() {
        assert_eq!(lcm(a, b), expected, "lcm({a}, {b})");
        assert_eq!(lcm(b, a), expected, "lcm({b}, {a})");
    }

    // the caller decides whether it fits
    assert_eq!(narrow(lcm(i32::MAX, i32::MAX - 1)).unwrap_err().kind, FractionErrorKind::Overflow);
}

#[test]
fn lcm_random_test() {
    for _ in 0..1024 {
        let a = (rand::random::<u32>() % 100_000 + 1) as i32;
        let b = (rand::random::<u32>() % 100_000 + 1) as i32;
        let l = lcm(a, b);

        assert_eq!(l % a as i64, 0);
        assert_eq!(l % b as i64, 0);
        assert_eq!(l * gcd(a as i64, b as i64), a as i64 * b as i64);
    }
}

#[test]
fn narrow_test() {
    assert_eq!(narrow(3i64).unwrap(), 3);
    assert_eq!(narrow(i32::MIN as i128).unwrap(), i32::MIN);
    assert_eq!(narrow(i32::MAX as i64 + 1).unwrap_err().kind, FractionErrorKind::Overflow);
    assert_eq!(narrow(i32::MIN as i64 - 1).unwrap_err().kind, FractionErrorKind::Overflow);
}

#[test]
fn pow10_test() {
    assert_eq!(pow10(0).unwrap(), 1);
    assert_eq!(pow10(4).unwrap(), 10_000);
    assert!(pow10(MAX_POW10_EXP).is_ok());
    assert_eq!(pow10(MAX_POW10_EXP + 1).unwrap_err().kind, FractionErrorKind::Overflow);
}

#[test]
fn parse_digits_test() {
    assert_eq!(parse_digits("10123").unwrap(), 10123);
    assert_eq!(parse_digits("-0016").unwrap(), -16);
    assert_eq!(parse_digits("0").unwrap(), 0);
    assert_eq!(parse_digits("").unwrap_err().kind, FractionErrorKind::ParseError(String::new()));
    assert_eq!(parse_digits("1e5").unwrap_err().kind, FractionErrorKind::ParseError(String::from("1e5")));
    assert_eq!(
        parse_digits(&"9".repeat(40)).unwrap_err().kind,
        FractionErrorKind::Overflow,
    );
}

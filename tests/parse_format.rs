use longnum::num::NarrowError;
use longnum::Int;

use num_bigint::{BigInt, BigUint, RandomBits};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn random_int(prng: &mut ChaCha20Rng, bits: u64) -> Int {
    let mag: BigUint = prng.sample(RandomBits::new(bits));
    let value = BigInt::from(mag);
    let value = if prng.gen_bool(0.5) { -value } else { value };
    Int::from_hex(&value.to_str_radix(16))
}

#[test]
fn rendering_round_trips_through_parsing() {
    let mut prng = ChaCha20Rng::seed_from_u64(30);
    for bits in [1, 17, 32, 33, 64, 200, 1024] {
        for _ in 0..10 {
            let value = random_int(&mut prng, bits);
            let reparsed = Int::from_hex(&value.to_string());
            assert_eq!(reparsed, value);
        }
    }
}

#[test]
fn parsing_is_case_insensitive() {
    assert_eq!(Int::from_hex("abcdef"), Int::from_hex("ABCDEF"));
    assert_eq!(Int::from_hex("aBcDeF").to_string(), "ABCDEF");
}

#[test]
fn leading_zero_digits_are_canonicalized() {
    let padded = Int::from_hex("000000000A");
    assert_eq!(padded, Int::from_hex("A"));
    assert_eq!(padded.to_string(), "A");
}

#[test]
fn malformed_text_parses_to_nan() {
    for text in ["", "-", "0x12", "12G3", " 1", "--5", "A B"] {
        assert!(Int::from_hex(text).is_nan(), "expected NaN for {text:?}");
    }
}

#[test]
fn zero_renders_canonically() {
    assert_eq!(Int::from_hex("0000").to_string(), "0");
    assert_eq!(Int::from_hex("-0").to_string(), "0");
    assert_eq!(Int::from_hex("-0"), Int::from_hex("0"));
    assert_eq!((-Int::zero()).to_string(), "0");
}

#[test]
fn nan_absorbs_through_arithmetic() {
    let nan = Int::nan();
    let five = Int::from_hex("5");
    assert!((&nan + &five).is_nan());
    assert!((&five - &nan).is_nan());
    assert!((&nan * &five).is_nan());
    assert!((&five / &nan).is_nan());
    assert!((&five % &nan).is_nan());
    assert!((-&nan).is_nan());
    assert!(nan.isqrt().is_nan());
    assert_eq!(nan.to_string(), "NaN");
}

#[test]
fn nan_is_unordered() {
    let nan = Int::nan();
    let five = Int::from_hex("5");
    assert!(!(nan == five));
    assert!(!(nan < five));
    assert!(!(nan <= five));
    assert!(!(nan > five));
    assert!(!(nan >= five));
    assert!(nan != five);
    assert!(Int::nan() != Int::nan());
}

#[test]
fn comparisons_order_signed_values() {
    let cases = [
        ("-5", "3"),
        ("-5", "-3"),
        ("0", "1"),
        ("-1", "0"),
        ("A", "B"),
        ("FFFFFFFF", "100000000"),
    ];
    for (small, large) in cases {
        let small = Int::from_hex(small);
        let large = Int::from_hex(large);
        assert!(small < large);
        assert!(large > small);
        assert!(small != large);
    }
}

#[test]
fn boolean_conversion_is_inverted() {
    assert!(bool::from(&Int::from_hex("0")));
    assert!(!bool::from(&Int::from_hex("1")));
    assert!(!bool::from(&Int::from_hex("-1")));
    // NaN carries no magnitude, so it also reads true.
    assert!(bool::from(&Int::nan()));
}

#[test]
fn narrowing_to_i64_enforces_the_domain() {
    assert_eq!(
        i64::try_from(&Int::from_hex("7FFFFFFFFFFFFFFF")),
        Ok(i64::MAX)
    );
    assert_eq!(
        i64::try_from(&Int::from_hex("-8000000000000000")),
        Ok(i64::MIN)
    );
    assert_eq!(
        i64::try_from(&Int::from_hex("8000000000000000")),
        Err(NarrowError::Overflow)
    );
    assert_eq!(
        i64::try_from(&Int::from_hex("-8000000000000001")),
        Err(NarrowError::Overflow)
    );
    assert_eq!(
        i64::try_from(&Int::from_hex("10000000000000000")),
        Err(NarrowError::Overflow)
    );
    assert_eq!(i64::try_from(&Int::nan()), Err(NarrowError::Nan));
    assert_eq!(i64::try_from(Int::from_hex("-A")), Ok(-10));
}

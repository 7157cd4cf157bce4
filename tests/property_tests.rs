//! Property-based tests for the format parser and renderer, verifying the
//! structural laws that hold across generated inputs.

use proptest::prelude::*;
use to_char::{format_number, parse_format, validate_format, NumericValue};

proptest! {
    // Validation succeeds exactly when parsing succeeds, and is pure:
    // running it twice yields the same outcome.
    #[test]
    fn prop_validate_matches_parse(format in "[09SX.,DVGMIPRBCLEFT$]{0,12}") {
        let first = validate_format(&format);
        let parsed = parse_format(&format);
        prop_assert_eq!(first.is_ok(), parsed.is_ok());

        let second = validate_format(&format);
        prop_assert_eq!(first, second);
    }

    // The digit placeholders of a decimal format split exactly into integer
    // digits and scale.
    #[test]
    fn prop_digit_placeholder_split(
        int_digits in 1usize..=8,
        frac_digits in 0usize..=6,
    ) {
        let format = format!("{}.{}", "9".repeat(int_digits), "9".repeat(frac_digits));
        let parsed = parse_format(&format).unwrap();
        prop_assert_eq!(parsed.num_integer_digit, int_digits);
        prop_assert_eq!(parsed.scale, frac_digits);
        prop_assert_eq!(
            parsed.num_integer_digit + parsed.scale,
            int_digits + frac_digits
        );
    }

    // Without an explicit sign element, negating the value changes exactly
    // one character of the output: the default ' ' sign becomes '-'.
    #[test]
    fn prop_sign_symmetry(v in 1i64..=999_999_999) {
        let positive = format_number(&NumericValue::from(v), "999999999").unwrap();
        let negative = format_number(&NumericValue::from(-v), "999999999").unwrap();
        prop_assert_eq!(positive.len(), negative.len());

        let diffs: Vec<(char, char)> = positive
            .chars()
            .zip(negative.chars())
            .filter(|(p, n)| p != n)
            .collect();
        prop_assert_eq!(diffs, vec![(' ', '-')]);
    }

    // A single "9" renders one digit behind the default sign slot.
    #[test]
    fn prop_single_digit(d in 0i64..=9) {
        let out = format_number(&NumericValue::from(d), "9").unwrap();
        prop_assert_eq!(out, format!(" {d}"));
    }

    #[test]
    fn prop_single_digit_negative(d in 1i64..=9) {
        let out = format_number(&NumericValue::from(-d), "9").unwrap();
        prop_assert_eq!(out, format!("-{d}"));
    }

    // Integer rendering through a wide-enough format is the plain decimal
    // spelling behind the sign slot.
    #[test]
    fn prop_integer_roundtrip(v in 0i64..=99_999_999) {
        let out = format_number(&NumericValue::from(v), "99999999").unwrap();
        prop_assert_eq!(out.trim_start().to_string(), v.to_string());
    }
}

use crate::parser::*;
use crate::types::*;

#[test]
fn test_simple_decimal() {
    let result = parse_format("9.99").unwrap();
    assert_eq!(result.output_type, OutputType::Decimal);
    assert_eq!(
        result.elements,
        vec![
            FormatElement::Digit9,
            FormatElement::DecimalPointDot,
            FormatElement::Digit9,
            FormatElement::Digit9,
        ]
    );
    assert_eq!(result.decimal_point_index, 1);
    assert_eq!(result.decimal_point, Some(FormatElement::DecimalPointDot));
    assert_eq!(result.num_integer_digit, 1);
    assert_eq!(result.scale, 2);
    assert!(result.sign.is_none());
    assert!(result.currency.is_none());
    assert!(!result.has_exponent);
}

#[test]
fn test_no_decimal_point() {
    let result = parse_format("9999").unwrap();
    assert_eq!(result.elements.len(), 4);
    // Without a decimal point, the integer part covers all elements.
    assert_eq!(result.decimal_point_index, 4);
    assert!(result.decimal_point.is_none());
    assert_eq!(result.num_integer_digit, 4);
    assert_eq!(result.scale, 0);
}

#[test]
fn test_group_separators() {
    let result = parse_format("9,999").unwrap();
    assert_eq!(
        result.elements,
        vec![
            FormatElement::Digit9,
            FormatElement::GroupSeparatorComma,
            FormatElement::Digit9,
            FormatElement::Digit9,
            FormatElement::Digit9,
        ]
    );
    assert_eq!(result.num_integer_digit, 4);

    let result = parse_format("9g999").unwrap();
    assert_eq!(result.elements[1], FormatElement::GroupSeparatorG);
}

#[test]
fn test_index_of_first_zero() {
    let result = parse_format("9909").unwrap();
    assert_eq!(result.index_of_first_zero, Some(2));

    let result = parse_format("9999").unwrap();
    assert_eq!(result.index_of_first_zero, None);
}

#[test]
fn test_decimal_point_variants() {
    let result = parse_format("9D99").unwrap();
    assert_eq!(result.decimal_point, Some(FormatElement::DecimalPointD));
    assert_eq!(result.scale, 2);

    let result = parse_format("9V99").unwrap();
    assert_eq!(result.decimal_point, Some(FormatElement::ElementV));
    assert_eq!(result.scale, 2);
}

#[test]
fn test_leading_decimal_point() {
    let result = parse_format(".99").unwrap();
    assert_eq!(result.decimal_point_index, 0);
    assert_eq!(result.num_integer_digit, 0);
    assert_eq!(result.scale, 2);
}

#[test]
fn test_flags_are_not_render_elements() {
    let result = parse_format("B$9MI").unwrap();
    assert_eq!(result.elements, vec![FormatElement::Digit9]);
    assert!(result.has_b);
    assert_eq!(result.currency, Some(FormatElement::CurrencyDollar));
    assert_eq!(result.sign, Some(FormatElement::SignMi));
}

#[test]
fn test_sign_positions() {
    let result = parse_format("S9").unwrap();
    assert_eq!(result.sign, Some(FormatElement::SignS));
    assert!(result.sign_at_front);

    let result = parse_format("9S").unwrap();
    assert_eq!(result.sign, Some(FormatElement::SignS));
    assert!(!result.sign_at_front);

    let result = parse_format("9PR").unwrap();
    assert_eq!(result.sign, Some(FormatElement::SignPr));
}

#[test]
fn test_currency_variants() {
    let result = parse_format("c9").unwrap();
    assert_eq!(
        result.currency,
        Some(FormatElement::CurrencyC(ElementCase::Lower))
    );

    let result = parse_format("9C").unwrap();
    assert_eq!(
        result.currency,
        Some(FormatElement::CurrencyC(ElementCase::Upper))
    );

    let result = parse_format("L9").unwrap();
    assert_eq!(result.currency, Some(FormatElement::CurrencyL));
}

#[test]
fn test_exponent_sets_decimal_point_index() {
    let result = parse_format("9EEEE").unwrap();
    assert!(result.has_exponent);
    assert_eq!(
        result.elements,
        vec![
            FormatElement::Digit9,
            FormatElement::ExponentEeee(ElementCase::Upper),
        ]
    );
    assert_eq!(result.decimal_point_index, 1);
}

#[test]
fn test_exponent_drops_extra_integer_digits() {
    // "999.99EEEE" keeps a single integer digit: "9.99EEEE".
    let result = parse_format("999.99EEEE").unwrap();
    assert_eq!(
        result.elements,
        vec![
            FormatElement::Digit9,
            FormatElement::DecimalPointDot,
            FormatElement::Digit9,
            FormatElement::Digit9,
            FormatElement::ExponentEeee(ElementCase::Upper),
        ]
    );
    assert_eq!(result.decimal_point_index, 1);
    assert_eq!(result.num_integer_digit, 3);
    assert_eq!(result.scale, 2);

    let result = parse_format("99EEEE").unwrap();
    assert_eq!(
        result.elements,
        vec![
            FormatElement::Digit9,
            FormatElement::ExponentEeee(ElementCase::Upper),
        ]
    );
    assert_eq!(result.decimal_point_index, 1);
}

#[test]
fn test_exponent_case_is_preserved() {
    let result = parse_format("9.9eeee").unwrap();
    assert_eq!(
        result.elements.last(),
        Some(&FormatElement::ExponentEeee(ElementCase::Lower))
    );
}

#[test]
fn test_hexadecimal_output_type() {
    let result = parse_format("0X0x").unwrap();
    assert_eq!(result.output_type, OutputType::Hexadecimal);
    assert_eq!(
        result.elements,
        vec![
            FormatElement::Digit0,
            FormatElement::DigitX(ElementCase::Upper),
            FormatElement::Digit0,
            FormatElement::DigitX(ElementCase::Lower),
        ]
    );

    // 16 hexadecimal digits is the maximum.
    assert!(parse_format("XXXXXXXXXXXXXXXX").is_ok());
}

#[test]
fn test_roman_numeral_output_type() {
    let result = parse_format("RN").unwrap();
    assert_eq!(result.output_type, OutputType::RomanNumeral);
    assert_eq!(
        result.roman_numeral,
        Some(FormatElement::RomanNumeral(ElementCase::Upper))
    );

    let result = parse_format("rn").unwrap();
    assert_eq!(
        result.roman_numeral,
        Some(FormatElement::RomanNumeral(ElementCase::Lower))
    );

    // FM is a flag, so "RNFM" stays a valid Roman numeral format.
    let result = parse_format("RNFM").unwrap();
    assert!(result.has_fm);
}

#[test]
fn test_text_minimal_output_type() {
    let result = parse_format("TM").unwrap();
    assert_eq!(result.output_type, OutputType::TextMinimal);
    assert_eq!(result.tm, Some(FormatElement::Tm(ElementCase::Upper)));

    let result = parse_format("TM9").unwrap();
    assert_eq!(result.tm, Some(FormatElement::Tm9(ElementCase::Upper)));

    let result = parse_format("tme").unwrap();
    assert_eq!(result.tm, Some(FormatElement::Tme(ElementCase::Lower)));
}

#[test]
fn test_validate_matches_parse() {
    for format in ["9.99", "S9,999", "XX", "RN", "TM9", "", "9X", "abc"] {
        assert_eq!(
            validate_format(format).is_ok(),
            parse_format(format).is_ok(),
            "mismatch for {format:?}"
        );
    }
}

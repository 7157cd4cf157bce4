use winnow::ascii::Caseless;
use winnow::combinator::alt;
use winnow::error::ErrMode;
use winnow::token::{literal, one_of};
use winnow::{ModalResult, Parser};

use crate::types::*;

fn element_case(c: char) -> ElementCase {
    if c.is_ascii_lowercase() {
        ElementCase::Lower
    } else {
        ElementCase::Upper
    }
}

fn leading_case(s: &str) -> ElementCase {
    element_case(s.chars().next().unwrap())
}

pub fn parse_sign_mi(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("MI"))
        .value(FormatElement::SignMi)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_sign_pr(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("PR"))
        .value(FormatElement::SignPr)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_roman_numeral(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("RN"))
        .map(|s: &str| FormatElement::RomanNumeral(leading_case(s)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_exponent_eeee(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("EEEE"))
        .map(|s: &str| FormatElement::ExponentEeee(leading_case(s)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_compact_mode(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("FM"))
        .value(FormatElement::CompactMode)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_tm9(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("TM9"))
        .map(|s: &str| FormatElement::Tm9(leading_case(s)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_tme(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("TME"))
        .map(|s: &str| FormatElement::Tme(leading_case(s)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_tm(input: &mut &str) -> ModalResult<FormatElement> {
    literal(Caseless("TM"))
        .map(|s: &str| FormatElement::Tm(leading_case(s)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_currency_dollar(input: &mut &str) -> ModalResult<FormatElement> {
    literal("$")
        .value(FormatElement::CurrencyDollar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_zero(input: &mut &str) -> ModalResult<FormatElement> {
    literal("0")
        .value(FormatElement::Digit0)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_nine(input: &mut &str) -> ModalResult<FormatElement> {
    literal("9")
        .value(FormatElement::Digit9)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_x(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('X', 'x'))
        .map(|c: char| FormatElement::DigitX(element_case(c)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point_dot(input: &mut &str) -> ModalResult<FormatElement> {
    literal(".")
        .value(FormatElement::DecimalPointDot)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point_d(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('D', 'd'))
        .value(FormatElement::DecimalPointD)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_group_separator_comma(input: &mut &str) -> ModalResult<FormatElement> {
    literal(",")
        .value(FormatElement::GroupSeparatorComma)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_group_separator_g(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('G', 'g'))
        .value(FormatElement::GroupSeparatorG)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_sign_s(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('S', 's'))
        .value(FormatElement::SignS)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_element_b(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('B', 'b'))
        .value(FormatElement::ElementB)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_element_v(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('V', 'v'))
        .value(FormatElement::ElementV)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_currency_c(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('C', 'c'))
        .map(|c: char| FormatElement::CurrencyC(element_case(c)))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_currency_l(input: &mut &str) -> ModalResult<FormatElement> {
    one_of(('L', 'l'))
        .value(FormatElement::CurrencyL)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a single format element from the format string.
///
/// Multi-character elements are tried before the single-character elements
/// that share their prefixes, so "MI" never tokenizes as anything else, and
/// "TM9"/"TME" win over "TM". Matching is case-insensitive; the case of the
/// first character is preserved for the elements where it affects output.
pub fn parse_format_element(input: &mut &str) -> ModalResult<FormatElement> {
    let multi_char = alt((
        parse_sign_mi,
        parse_sign_pr,
        parse_roman_numeral,
        parse_exponent_eeee,
        parse_compact_mode,
        parse_tm9,
        parse_tme,
        parse_tm,
    ));

    let digits_and_separators = alt((
        parse_digit_zero,
        parse_digit_nine,
        parse_digit_x,
        parse_decimal_point_dot,
        parse_decimal_point_d,
        parse_group_separator_comma,
        parse_group_separator_g,
    ));

    let signs_and_marks = alt((
        parse_currency_dollar,
        parse_sign_s,
        parse_element_b,
        parse_element_v,
        parse_currency_c,
        parse_currency_l,
    ));

    alt((multi_char, digits_and_separators, signs_and_marks)).parse_next(input)
}

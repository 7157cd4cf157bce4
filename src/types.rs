//! Type definitions for numeric format strings
//!
//! This module defines the type system used to represent the parsed results of format strings.
//! Includes format elements, the parsed format record, and the canonical number record
//! consumed by the renderer.

use std::fmt;

/// Letter case of a format element, for the elements where case affects output.
///
/// `EEEE` written lowercase emits `e`, uppercase emits `E`; `C` emits `usd` or `USD`.
/// The case of `X`, `RN` and the `TM` family is preserved as parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCase {
    /// The element was written in uppercase
    Upper,
    /// The element was written in lowercase
    Lower,
}

/// Represents a single format element parsed from the format string
#[derive(Debug, Clone, PartialEq)]
pub enum FormatElement {
    /// Digit placeholder (9); leading positions render as spaces
    Digit9,
    /// Digit placeholder (0); forces leading zeros
    Digit0,
    /// Hexadecimal digit placeholder (X or x)
    DigitX(ElementCase),
    /// Decimal point (.), rendered as "."
    DecimalPointDot,
    /// Decimal point (D), rendered as "."
    DecimalPointD,
    /// Invisible decimal point (V); generates no output
    ElementV,
    /// Group separator (,)
    GroupSeparatorComma,
    /// Group separator (G), rendered as ","
    GroupSeparatorG,
    /// Sign element (S): explicit "+" or "-" before or after the number
    SignS,
    /// Sign element (MI): trailing "-" for negatives, space otherwise
    SignMi,
    /// Sign element (PR): angle brackets around negative numbers
    SignPr,
    /// Exponent marker (EEEE), switching to scientific notation
    ExponentEeee(ElementCase),
    /// Roman numeral output mode (RN)
    RomanNumeral(ElementCase),
    /// Text-minimal output mode (TM)
    Tm(ElementCase),
    /// Text-minimal output mode with scientific notation (TME)
    Tme(ElementCase),
    /// Text-minimal output mode with decimal notation (TM9)
    Tm9(ElementCase),
    /// Compact mode (FM): suppresses padding and trailing zeros
    CompactMode,
    /// Blank element (B): renders zero as blanks
    ElementB,
    /// Currency mark ($)
    CurrencyDollar,
    /// Currency mark (C): ISO currency code
    CurrencyC(ElementCase),
    /// Currency mark (L): local currency symbol
    CurrencyL,
}

impl fmt::Display for FormatElement {
    /// Writes the uppercase spelling of the element, regardless of the case it
    /// was written in. Error messages use this so the same diagnostic is
    /// produced for upper- and lowercase format strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormatElement::Digit9 => "9",
            FormatElement::Digit0 => "0",
            FormatElement::DigitX(_) => "X",
            FormatElement::DecimalPointDot => ".",
            FormatElement::DecimalPointD => "D",
            FormatElement::ElementV => "V",
            FormatElement::GroupSeparatorComma => ",",
            FormatElement::GroupSeparatorG => "G",
            FormatElement::SignS => "S",
            FormatElement::SignMi => "MI",
            FormatElement::SignPr => "PR",
            FormatElement::ExponentEeee(_) => "EEEE",
            FormatElement::RomanNumeral(_) => "RN",
            FormatElement::Tm(_) => "TM",
            FormatElement::Tme(_) => "TME",
            FormatElement::Tm9(_) => "TM9",
            FormatElement::CompactMode => "FM",
            FormatElement::ElementB => "B",
            FormatElement::CurrencyDollar => "$",
            FormatElement::CurrencyC(_) => "C",
            FormatElement::CurrencyL => "L",
        };
        f.write_str(s)
    }
}

impl FormatElement {
    /// Checks if the element is a digit placeholder (0, 9 or X)
    pub fn is_digit(&self) -> bool {
        matches!(
            self,
            FormatElement::Digit9 | FormatElement::Digit0 | FormatElement::DigitX(_)
        )
    }

    /// Checks if the element survives into [`ParsedFormat::elements`]: digits,
    /// decimal points, group separators and the exponent marker. Sign,
    /// currency and mode flags are stored separately.
    pub fn is_render_element(&self) -> bool {
        matches!(
            self,
            FormatElement::Digit9
                | FormatElement::Digit0
                | FormatElement::DigitX(_)
                | FormatElement::DecimalPointDot
                | FormatElement::DecimalPointD
                | FormatElement::ElementV
                | FormatElement::GroupSeparatorComma
                | FormatElement::GroupSeparatorG
                | FormatElement::ExponentEeee(_)
        )
    }
}

/// The output mode selected by a format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// Ordinary decimal output, e.g. "9,999.00"
    Decimal,
    /// Hexadecimal output, e.g. "0X0X"
    Hexadecimal,
    /// Roman numeral output, e.g. "RN"
    RomanNumeral,
    /// Text-minimal output, e.g. "TM", "TM9", "TME"
    TextMinimal,
}

/// The normalized description of a format string, produced by the parser.
///
/// Immutable once parsed; it can be cached and shared across threads and
/// rendered against any number of values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFormat {
    /// The output mode of the format string
    pub output_type: OutputType,
    /// The render-significant elements in order: digits, decimal points,
    /// group separators and the exponent marker
    pub elements: Vec<FormatElement>,
    /// Index into `elements` of the element terminating the integer part.
    /// Equals `elements.len()` when the format has no decimal point, and the
    /// index of `EEEE` when an exponent appears without an explicit decimal
    /// point.
    pub decimal_point_index: usize,
    /// The decimal point element seen, if any
    pub decimal_point: Option<FormatElement>,
    /// Index into `elements` of the first `0` placeholder; controls how far
    /// leading zeros are generated
    pub index_of_first_zero: Option<usize>,
    /// Count of digit placeholders before the decimal point
    pub num_integer_digit: usize,
    /// Count of digit placeholders after the decimal point
    pub scale: usize,
    /// The sign element (`S`, `MI` or `PR`), if any
    pub sign: Option<FormatElement>,
    /// Whether the sign element appeared before the digits
    pub sign_at_front: bool,
    /// The currency element (`$`, `C` or `L`), if any
    pub currency: Option<FormatElement>,
    /// The `RN` element, with its case, if present
    pub roman_numeral: Option<FormatElement>,
    /// The `TM`/`TME`/`TM9` element, with its case, if present
    pub tm: Option<FormatElement>,
    /// Whether `FM` was specified
    pub has_fm: bool,
    /// Whether `B` was specified
    pub has_b: bool,
    /// Whether `EEEE` was specified
    pub has_exponent: bool,
}

/// A numeric value broken into the parts the renderer consumes, derived from
/// a canonical printf-style rendering of the form
/// `-?[0-9]+\.[0-9]*(e[+-][0-9]+)?`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedNumber {
    /// Whether the value is negative
    pub negative: bool,
    /// Whether the value is infinite
    pub is_infinity: bool,
    /// Whether the value is NaN
    pub is_nan: bool,
    /// Digits of the integer part; empty if the integer part is zero
    pub integer_part: String,
    /// Digits of the fractional part, possibly empty
    pub fractional_part: String,
    /// The exponent digits including an explicit sign (e.g. "+07", "-04"),
    /// or empty when the rendering has no exponent
    pub exponent: String,
}

//! Number rendering module
//!
//! This module renders numeric values according to parsed format strings.
//! The main entry point is the [`format_number`] function; [`format_parsed`]
//! renders through an already parsed (and possibly cached) format.

use crate::error::{FormatError, Result};
use crate::options::FormatOptions;
use crate::parser::parse_format_with_options;
use crate::types::{OutputType, ParsedFormat};
use crate::value::NumericValue;

mod decimal;
mod prenormalize;

/// Render a numeric value according to a format string.
///
/// # Arguments
/// * `value` - The numeric value to render
/// * `format` - The format string, e.g. `"$9,999.00"`
///
/// # Returns
/// * `Result<String>` - The rendered text, or an error for an invalid
///   format string or an unsupported output mode
///
/// # Examples
/// ```
/// use to_char::{format_number, NumericValue};
///
/// let out = format_number(&NumericValue::from(1.2), "9.99").unwrap();
/// assert_eq!(out, " 1.20");
/// ```
pub fn format_number(value: &NumericValue, format: &str) -> Result<String> {
    format_number_with_options(value, format, &FormatOptions::default())
}

/// Render a numeric value according to a format string, with explicit
/// [`FormatOptions`].
pub fn format_number_with_options(
    value: &NumericValue,
    format: &str,
    options: &FormatOptions,
) -> Result<String> {
    let parsed = parse_format_with_options(format, options)?;
    format_parsed(value, &parsed)
}

/// Render a numeric value through an already parsed format.
///
/// [`ParsedFormat`] is immutable, so callers formatting many values with the
/// same pattern can parse once and share the result freely.
pub fn format_parsed(value: &NumericValue, parsed: &ParsedFormat) -> Result<String> {
    match parsed.output_type {
        OutputType::Decimal => {
            let n = prenormalize::prenormalize(parsed, value)?;
            decimal::format_as_decimal(parsed, &n)
        }
        OutputType::TextMinimal => Err(FormatError::Unimplemented(
            "Text minimal output is not supported yet".into(),
        )),
        OutputType::Hexadecimal => Err(FormatError::Unimplemented(
            "Hexadecimal output is not supported yet".into(),
        )),
        OutputType::RomanNumeral => Err(FormatError::Unimplemented(
            "Roman numeral output is not supported yet".into(),
        )),
    }
}

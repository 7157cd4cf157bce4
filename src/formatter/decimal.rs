//! Rendering of decimal output: fractional part, integer part, currency,
//! sign and left padding.

use crate::error::{FormatError, Result};
use crate::types::{ElementCase, FormatElement, ParsedFormat, ParsedNumber};

/// The integer part of the output, plus the number of spaces to pad on the
/// left. For input 12.3 and format "9999.99" this is
/// `{ text: "12", left_padding_size: 2 }`.
struct IntegerPart {
    text: String,
    left_padding_size: usize,
}

/// The output generated for the sign: `prefix` goes before the number,
/// `suffix` after it.
struct SignOutput {
    prefix: &'static str,
    suffix: &'static str,
}

fn internal(element: &FormatElement, format_index: usize) -> FormatError {
    FormatError::Internal(format!(
        "unexpected format element at index {format_index}: {element}"
    ))
}

fn overflows(parsed: &ParsedFormat, n: &ParsedNumber) -> bool {
    n.integer_part.len() > parsed.num_integer_digit
}

/// Generates the fractional part of the output, walking the elements forward
/// from the decimal point. On overflow every digit slot renders as '#' and
/// the exponent as "####".
fn generate_fractional_part(parsed: &ParsedFormat, n: &ParsedNumber) -> Result<String> {
    let mut result = String::new();
    let overflow = overflows(parsed, n);
    let fractional: &[u8] = n.fractional_part.as_bytes();
    let mut fractional_part_index = 0usize;

    for format_index in parsed.decimal_point_index..parsed.elements.len() {
        match &parsed.elements[format_index] {
            FormatElement::DecimalPointDot | FormatElement::DecimalPointD => {
                result.push('.');
            }
            FormatElement::ElementV => {
                // 'V' generates no output
            }
            FormatElement::Digit9 | FormatElement::Digit0 => {
                if overflow {
                    result.push('#');
                } else if fractional_part_index < fractional.len() {
                    result.push(fractional[fractional_part_index] as char);
                } else {
                    // The prenormalizer zero-pads the fractional part to the
                    // format's scale, so a missing digit only occurs under FM
                    // where trailing zeros are suppressed. Nothing is emitted.
                }
                fractional_part_index += 1;
            }
            FormatElement::ExponentEeee(case) => {
                if overflow {
                    result.push_str("####");
                } else {
                    result.push(match case {
                        ElementCase::Upper => 'E',
                        ElementCase::Lower => 'e',
                    });
                    result.push_str(&n.exponent);
                }
            }
            other => return Err(internal(other, format_index)),
        }
    }

    Ok(result)
}

/// Generates the integer part of the output, walking the elements backward
/// from the decimal point.
///
/// The walk stops early once all input digits are consumed, unless a '0'
/// placeholder at or before the current position forces leading zeros; the
/// positions left unvisited become left padding.
fn generate_integer_part(parsed: &ParsedFormat, n: &ParsedNumber) -> Result<IntegerPart> {
    let mut result = String::with_capacity(parsed.decimal_point_index);
    let overflow = overflows(parsed, n);

    let integer_part: &str = if n.integer_part.is_empty() {
        "0"
    } else {
        &n.integer_part
    };
    let digits = integer_part.as_bytes();

    // The output is generated backward and reversed at the end.
    let mut integer_part_index = digits.len() as isize - 1;
    let mut format_index = parsed.decimal_point_index as isize - 1;
    while format_index >= 0 {
        if integer_part_index < 0 {
            let forces_leading_zero = matches!(
                parsed.index_of_first_zero,
                Some(first_zero) if format_index >= first_zero as isize
            );
            if !forces_leading_zero {
                break;
            }
        }

        match &parsed.elements[format_index as usize] {
            FormatElement::Digit0 | FormatElement::Digit9 => {
                if overflow {
                    result.push('#');
                } else if integer_part_index >= 0 {
                    result.push(digits[integer_part_index as usize] as char);
                } else {
                    result.push('0');
                }
                integer_part_index -= 1;
            }
            FormatElement::GroupSeparatorComma | FormatElement::GroupSeparatorG => {
                result.push(',');
            }
            other => return Err(internal(other, format_index as usize)),
        }

        format_index -= 1;
    }

    Ok(IntegerPart {
        text: result.chars().rev().collect(),
        left_padding_size: (format_index + 1) as usize,
    })
}

fn generate_currency_output(parsed: &ParsedFormat) -> Result<String> {
    let result = match &parsed.currency {
        None => "",
        Some(FormatElement::CurrencyDollar) | Some(FormatElement::CurrencyL) => "$",
        Some(FormatElement::CurrencyC(ElementCase::Lower)) => "usd",
        Some(FormatElement::CurrencyC(ElementCase::Upper)) => "USD",
        Some(other) => {
            return Err(FormatError::Internal(format!(
                "unexpected currency element: {other}"
            )));
        }
    };
    Ok(result.to_string())
}

fn generate_sign_output(negative: bool, parsed: &ParsedFormat) -> Result<SignOutput> {
    let output = match &parsed.sign {
        Some(FormatElement::SignS) => {
            if parsed.sign_at_front {
                SignOutput {
                    prefix: if negative { "-" } else { "+" },
                    suffix: "",
                }
            } else {
                SignOutput {
                    prefix: "",
                    suffix: if negative { "-" } else { "+" },
                }
            }
        }
        Some(FormatElement::SignMi) => SignOutput {
            prefix: "",
            suffix: if negative { "-" } else { " " },
        },
        Some(FormatElement::SignPr) => SignOutput {
            prefix: if negative { "<" } else { " " },
            suffix: if negative { ">" } else { " " },
        },
        Some(other) => {
            return Err(FormatError::Internal(format!(
                "unexpected sign element: {other}"
            )));
        }
        // Sign not specified in the format string.
        None => SignOutput {
            prefix: if negative { "-" } else { " " },
            suffix: "",
        },
    };
    Ok(output)
}

/// Assembles the decimal output for an already prenormalized number.
pub(crate) fn format_as_decimal(parsed: &ParsedFormat, n: &ParsedNumber) -> Result<String> {
    if n.is_infinity || n.is_nan {
        return Err(FormatError::Unimplemented(
            "INF and NAN are not supported yet".into(),
        ));
    }

    if parsed.has_b || parsed.has_fm {
        return Err(FormatError::Unimplemented(
            "'B' and 'FM' are not implemented yet".into(),
        ));
    }

    let fractional_part = generate_fractional_part(parsed, n)?;

    let mut integer_part = IntegerPart {
        text: String::new(),
        left_padding_size: parsed.decimal_point_index,
    };

    if parsed.num_integer_digit > 0 {
        // The integer part is suppressed when the value has no integer
        // digits and nothing forces them: for value 0.12 and format "9.99"
        // the output is " .12".
        let generate = !n.integer_part.is_empty()
            || parsed.has_exponent
            || matches!(
                parsed.index_of_first_zero,
                Some(first_zero) if first_zero < parsed.decimal_point_index
            )
            || n.fractional_part.is_empty();

        if generate {
            integer_part = generate_integer_part(parsed, n)?;
        }
    }

    let currency_output = generate_currency_output(parsed)?;
    let sign_output = generate_sign_output(n.negative, parsed)?;
    let left_padding = " ".repeat(integer_part.left_padding_size);

    Ok(format!(
        "{left_padding}{}{currency_output}{}{fractional_part}{}",
        sign_output.prefix, integer_part.text, sign_output.suffix
    ))
}

//! Conversion of numeric values to the canonical form consumed by the renderer.
//!
//! Values are first rendered through a printf-style conversion, `%#.<scale>f`
//! or `%#.<scale>e` depending on whether the format has an exponent. The `#`
//! flag keeps the decimal point even at scale 0, so the canonical string
//! always matches `-?[0-9]+\.[0-9]*(e[+-][0-9]+)?` (or is one of `inf`,
//! `-inf`, `nan`). That string is then split into [`ParsedNumber`].

use bigdecimal::num_bigint::Sign;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use winnow::combinator::{opt, preceded};
use winnow::token::{literal, one_of, take_while};
use winnow::{ModalResult, Parser};

use crate::error::{FormatError, Result};
use crate::types::{ParsedFormat, ParsedNumber};
use crate::value::NumericValue;

/// Produce the canonical [`ParsedNumber`] for `value` under `parsed`.
///
/// Integer values are widened losslessly to [`BigDecimal`] before conversion.
pub(crate) fn prenormalize(parsed: &ParsedFormat, value: &NumericValue) -> Result<ParsedNumber> {
    let exponent_form = parsed.has_exponent;
    let canonical = match value {
        NumericValue::Int64(i) => {
            decimal_canonical(&BigDecimal::from(*i), parsed.scale, exponent_form)
        }
        NumericValue::Uint64(u) => {
            decimal_canonical(&BigDecimal::from(*u), parsed.scale, exponent_form)
        }
        NumericValue::Decimal(d) => decimal_canonical(d, parsed.scale, exponent_form),
        NumericValue::Double(f) => double_canonical(*f, parsed.scale, exponent_form),
    };
    parse_number_string(&canonical)
}

/// printf-style `%#.<scale>f` / `%#.<scale>e` for binary floating point.
///
/// `f64` formatting with an explicit precision is already the correctly
/// rounded decimal expansion of the binary value; only the exponent spelling
/// needs to be canonicalized into the signed two-digit form.
fn double_canonical(v: f64, scale: usize, exponent_form: bool) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    if exponent_form {
        let formatted = format!("{v:.scale$e}");
        let (mantissa, exponent) = formatted
            .split_once('e')
            .expect("float exponent formatting always contains 'e'");
        let exponent: i64 = exponent
            .parse()
            .expect("float exponent is a decimal integer");
        let point = if mantissa.contains('.') { "" } else { "." };
        format!("{mantissa}{point}e{exponent:+03}")
    } else {
        let mut formatted = format!("{v:.scale$}");
        if scale == 0 {
            formatted.push('.');
        }
        formatted
    }
}

/// printf-style `%#.<scale>f` / `%#.<scale>e` for arbitrary-precision
/// decimals, rounding half away from zero.
fn decimal_canonical(d: &BigDecimal, scale: usize, exponent_form: bool) -> String {
    let negative = d.sign() == Sign::Minus;
    let magnitude = d.abs();

    if exponent_form {
        decimal_exponent_canonical(&magnitude, negative, scale)
    } else {
        let rounded = magnitude.with_scale_round(scale as i64, RoundingMode::HalfUp);
        let (unscaled, _) = rounded.as_bigint_and_exponent();
        let mut digits = unscaled.to_string();
        if digits.len() <= scale {
            let padding = "0".repeat(scale + 1 - digits.len());
            digits.insert_str(0, &padding);
        }
        digits.insert(digits.len() - scale, '.');
        if negative {
            digits.insert(0, '-');
        }
        digits
    }
}

fn decimal_exponent_canonical(magnitude: &BigDecimal, negative: bool, scale: usize) -> String {
    if magnitude.is_zero() {
        return format!("0.{}e+00", "0".repeat(scale));
    }

    // The decimal exponent is the position of the most significant digit.
    // Round the value so that exactly `scale` digits survive behind it, then
    // recompute: rounding can carry into a new leading digit (9.99 -> 10.0).
    let (unscaled, unscaled_scale) = magnitude.as_bigint_and_exponent();
    let exponent = unscaled.to_string().len() as i64 - unscaled_scale - 1;
    let rounded = magnitude.with_scale_round(scale as i64 - exponent, RoundingMode::HalfUp);

    let (rounded_unscaled, rounded_scale) = rounded.as_bigint_and_exponent();
    let digits = rounded_unscaled.to_string();
    let exponent = digits.len() as i64 - rounded_scale - 1;

    let mut fractional = digits[1..].to_string();
    if fractional.len() > scale {
        fractional.truncate(scale);
    } else {
        let padding = "0".repeat(scale - fractional.len());
        fractional.push_str(&padding);
    }

    let sign = if negative { "-" } else { "" };
    let leading = &digits[..1];
    format!("{sign}{leading}.{fractional}e{exponent:+03}")
}

fn parse_real_number(input: &mut &str) -> ModalResult<ParsedNumber> {
    let negative = opt(literal("-")).parse_next(input)?.is_some();
    let integer_part: &str = take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    literal(".").parse_next(input)?;
    let fractional_part: &str = take_while(0.., |c: char| c.is_ascii_digit()).parse_next(input)?;
    let exponent = opt(preceded(
        one_of(('e', 'E')),
        (
            one_of(('+', '-')),
            take_while(1.., |c: char| c.is_ascii_digit()),
        ),
    ))
    .parse_next(input)?;

    Ok(ParsedNumber {
        negative,
        is_infinity: false,
        is_nan: false,
        integer_part: integer_part.to_string(),
        fractional_part: fractional_part.to_string(),
        exponent: exponent
            .map(|(sign, digits): (char, &str)| format!("{sign}{digits}"))
            .unwrap_or_default(),
    })
}

/// Split a canonical numeric string into [`ParsedNumber`].
///
/// The input comes from the in-crate printf conversions, so anything outside
/// the canonical grammar is an internal invariant violation rather than a
/// user error.
pub(crate) fn parse_number_string(number_string: &str) -> Result<ParsedNumber> {
    match number_string {
        "inf" => {
            return Ok(ParsedNumber {
                is_infinity: true,
                ..ParsedNumber::default()
            });
        }
        "-inf" => {
            return Ok(ParsedNumber {
                negative: true,
                is_infinity: true,
                ..ParsedNumber::default()
            });
        }
        "nan" => {
            return Ok(ParsedNumber {
                is_nan: true,
                ..ParsedNumber::default()
            });
        }
        _ => {}
    }

    let mut input = number_string;
    let parsed = parse_real_number(&mut input);
    let mut number = match parsed {
        Ok(number) if input.is_empty() => number,
        _ => {
            return Err(FormatError::Internal(format!(
                "unexpected numeric string '{number_string}'"
            )));
        }
    };

    // A zero integer part is treated as absent integer digits.
    if number.integer_part == "0" {
        number.integer_part.clear();
    }

    Ok(number)
}

use crate::error::{FormatError, Result};
use crate::options::FormatOptions;
use crate::parser::tokens::parse_format_element;
use crate::types::*;

/// Parse a numeric format string into its normalized description.
///
/// This is the main entry point of the parsing stage. The returned
/// [`ParsedFormat`] is immutable and can be cached and reused across calls
/// and threads; pass it to [`crate::format_parsed`] to render values.
///
/// # Arguments
/// * `format` - The format string, e.g. `"S9,999.00"`
///
/// # Returns
/// * `Result<ParsedFormat>` - The parse result, or the first error found
///
/// # Examples
/// ```
/// use to_char::parse_format;
///
/// let parsed = parse_format("9,999.00").unwrap();
/// assert_eq!(parsed.num_integer_digit, 4);
/// assert_eq!(parsed.scale, 2);
/// ```
pub fn parse_format(format: &str) -> Result<ParsedFormat> {
    parse_format_with_options(format, &FormatOptions::default())
}

/// Parse a numeric format string, with explicit [`FormatOptions`].
pub fn parse_format_with_options(format: &str, options: &FormatOptions) -> Result<ParsedFormat> {
    if format.len() > options.max_format_width {
        return Err(FormatError::FormatTooLong(options.max_format_width));
    }

    let mut parser = FormatParser::default();
    let mut input = format;
    while !input.is_empty() {
        let Ok(element) = parse_format_element(&mut input) else {
            let offending: String = input.chars().take(1).collect();
            return Err(FormatError::InvalidFormatElement(offending));
        };
        parser.process_element(element)?;
    }

    parser.finish()
}

/// Check a format string for validity without keeping the parse result.
///
/// Succeeds exactly when [`parse_format`] succeeds.
pub fn validate_format(format: &str) -> Result<()> {
    parse_format(format).map(|_| ())
}

/// Check a format string for validity, with explicit [`FormatOptions`].
pub fn validate_format_with_options(format: &str, options: &FormatOptions) -> Result<()> {
    parse_format_with_options(format, options).map(|_| ())
}

/// There are 4 kinds of format strings:
/// 1. Text minimal, e.g. "TM", "TM9"
/// 2. Roman numeral, e.g. "RN", "RNFM"
/// 3. Hexadecimal, e.g. "00X0X0"
/// 4. Decimal, e.g. "9.999"
///
/// A decimal format string has the shape
///
///   front_sign integer_part decimal_point fractional_part exponent back_sign
///
/// where "S" is allowed as front_sign; "0", "9" and group separators in the
/// integer part; one of ".", "D" or "V" as the decimal point; "0" and "9" in
/// the fractional part; "EEEE" as the exponent; and "S", "MI" or "PR" as
/// back_sign. The states below track which of these regions the parser is in.
/// Flag elements ("FM", "B", "$", "C", "L") can appear anywhere and do not
/// advance the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Start,
    IntegerPart,
    FractionalPart,
    AfterExponent,
    Hexadecimal,
    AfterBackSign,
    RomanNumeral,
    TextMinimal,
}

#[derive(Default)]
struct FormatParser {
    state: State,
    has_x: bool,
    has_9: bool,
    has_group_separator: bool,
    digit_count: usize,
    elements: Vec<FormatElement>,
    decimal_point: Option<FormatElement>,
    decimal_point_index: Option<usize>,
    index_of_first_zero: Option<usize>,
    scale: usize,
    sign: Option<FormatElement>,
    sign_at_front: bool,
    currency: Option<FormatElement>,
    roman_numeral: Option<FormatElement>,
    tm: Option<FormatElement>,
    has_fm: bool,
    has_b: bool,
    has_exponent: bool,
}

fn combination(msg: String) -> FormatError {
    FormatError::InvalidCombination(msg)
}

impl FormatParser {
    fn process_element(&mut self, element: FormatElement) -> Result<()> {
        // Flag elements can appear anywhere; they do not advance the state
        // and are not appended to `elements`.
        match element {
            FormatElement::CompactMode => {
                if self.has_fm {
                    return Err(combination("'FM' cannot be repeated".into()));
                }
                self.has_fm = true;
                return Ok(());
            }
            FormatElement::CurrencyDollar
            | FormatElement::CurrencyC(_)
            | FormatElement::CurrencyL => {
                if self.currency.is_some() {
                    return Err(combination(
                        "There can be at most one of '$', 'C' or 'L'".into(),
                    ));
                }
                self.currency = Some(element);
                return Ok(());
            }
            FormatElement::ElementB => {
                if self.has_b {
                    return Err(combination("There can be at most one 'B'".into()));
                }
                self.has_b = true;
                return Ok(());
            }
            _ => {}
        }

        if element.is_render_element() {
            self.elements.push(element.clone());
            if element == FormatElement::Digit0 && self.index_of_first_zero.is_none() {
                self.index_of_first_zero = Some(self.elements.len() - 1);
            }
        }

        if element.is_digit() {
            self.digit_count += 1;
        }

        match self.state {
            State::Start => self.on_start(element),
            State::IntegerPart => self.on_integer_part(element),
            State::FractionalPart => self.on_fractional_part(element),
            State::AfterExponent => self.on_after_exponent(element),
            State::AfterBackSign => self.on_after_back_sign(element),
            State::Hexadecimal => self.on_hexadecimal(element),
            State::TextMinimal => Err(combination(
                "'TM', 'TM9' or 'TME' cannot be combined with other format elements".into(),
            )),
            State::RomanNumeral => Err(combination(format!(
                "'RN' cannot appear together with '{element}'"
            ))),
        }
    }

    fn on_start(&mut self, element: FormatElement) -> Result<()> {
        match element {
            FormatElement::SignS => {
                self.sign = Some(element);
                self.sign_at_front = true;
                self.state = State::IntegerPart;
            }
            FormatElement::SignMi | FormatElement::SignPr => {
                return Err(combination(format!(
                    "'{element}' can only appear after all digits and 'EEEE'"
                )));
            }
            FormatElement::Digit9 => {
                self.has_9 = true;
                self.state = State::IntegerPart;
            }
            FormatElement::Digit0 => {
                self.state = State::IntegerPart;
            }
            FormatElement::DigitX(_) => {
                self.has_x = true;
                self.state = State::Hexadecimal;
            }
            FormatElement::RomanNumeral(_) => {
                self.roman_numeral = Some(element);
                self.state = State::RomanNumeral;
            }
            FormatElement::DecimalPointDot
            | FormatElement::DecimalPointD
            | FormatElement::ElementV => {
                self.decimal_point = Some(element);
                self.decimal_point_index = Some(self.elements.len() - 1);
                self.state = State::FractionalPart;
            }
            FormatElement::Tm(_) | FormatElement::Tme(_) | FormatElement::Tm9(_) => {
                self.tm = Some(element);
                self.state = State::TextMinimal;
            }
            _ => {
                return Err(combination(format!("Unexpected '{element}'")));
            }
        }
        Ok(())
    }

    fn on_integer_part(&mut self, element: FormatElement) -> Result<()> {
        match element {
            FormatElement::SignS | FormatElement::SignMi | FormatElement::SignPr => {
                self.set_back_sign(element)?;
            }
            FormatElement::ExponentEeee(_) => {
                if self.has_group_separator {
                    return Err(combination(
                        "',' or 'G' cannot appear together with 'EEEE'".into(),
                    ));
                }
                self.has_exponent = true;
                self.decimal_point_index = Some(self.elements.len() - 1);
                self.state = State::AfterExponent;
            }
            FormatElement::DigitX(_) => {
                if self.has_9 {
                    return Err(combination("'X' cannot appear together with '9'".into()));
                }
                if self.has_group_separator {
                    return Err(combination(
                        "'X' cannot appear together with ',' or 'G'".into(),
                    ));
                }
                // Reached when the format starts with something like "0X".
                self.has_x = true;
                self.state = State::Hexadecimal;
            }
            FormatElement::Digit9 => {
                self.has_9 = true;
            }
            FormatElement::Digit0 => {}
            FormatElement::GroupSeparatorComma | FormatElement::GroupSeparatorG => {
                self.has_group_separator = true;
            }
            FormatElement::DecimalPointDot
            | FormatElement::DecimalPointD
            | FormatElement::ElementV => {
                // A decimal point seen before this state would have moved the
                // parser to FractionalPart already.
                debug_assert!(self.decimal_point.is_none());
                self.decimal_point = Some(element);
                self.decimal_point_index = Some(self.elements.len() - 1);
                self.state = State::FractionalPart;
            }
            FormatElement::Tm(_) | FormatElement::Tme(_) | FormatElement::Tm9(_) => {
                return Err(combination(
                    "'TM', 'TM9' or 'TME' cannot be combined with other format elements".into(),
                ));
            }
            _ => {
                return Err(combination(format!("Unexpected '{element}'")));
            }
        }
        Ok(())
    }

    fn on_fractional_part(&mut self, element: FormatElement) -> Result<()> {
        match element {
            FormatElement::Digit0 | FormatElement::Digit9 => {
                self.scale += 1;
            }
            FormatElement::DigitX(_) => {
                let decimal_point = self
                    .decimal_point
                    .as_ref()
                    .expect("fractional part implies a decimal point");
                return Err(combination(format!(
                    "'X' cannot appear together with '{decimal_point}'"
                )));
            }
            FormatElement::ExponentEeee(_) => {
                if self.has_group_separator {
                    return Err(combination(
                        "',' or 'G' cannot appear together with 'EEEE'".into(),
                    ));
                }
                self.has_exponent = true;
                self.state = State::AfterExponent;
            }
            FormatElement::SignS | FormatElement::SignMi | FormatElement::SignPr => {
                self.set_back_sign(element)?;
            }
            FormatElement::DecimalPointDot
            | FormatElement::DecimalPointD
            | FormatElement::ElementV => {
                return Err(combination(
                    "There can be at most one of '.', 'D', or 'V'".into(),
                ));
            }
            FormatElement::GroupSeparatorComma | FormatElement::GroupSeparatorG => {
                return Err(combination(
                    "',' or 'G' cannot appear after '.', 'D' or 'V'".into(),
                ));
            }
            _ => {
                return Err(combination(format!("Unexpected '{element}'")));
            }
        }
        Ok(())
    }

    fn on_after_exponent(&mut self, element: FormatElement) -> Result<()> {
        match element {
            FormatElement::SignS | FormatElement::SignMi | FormatElement::SignPr => {
                self.set_back_sign(element)?;
            }
            FormatElement::GroupSeparatorComma | FormatElement::GroupSeparatorG => {
                return Err(combination(
                    "',' or 'G' cannot appear together with 'EEEE'".into(),
                ));
            }
            _ => {
                return Err(combination(format!(
                    "'{element}' cannot appear after 'EEEE'"
                )));
            }
        }
        Ok(())
    }

    fn on_after_back_sign(&mut self, element: FormatElement) -> Result<()> {
        match element {
            FormatElement::Digit0
            | FormatElement::Digit9
            | FormatElement::DigitX(_)
            | FormatElement::ExponentEeee(_) => {
                let sign = self.sign.as_ref().expect("back sign state implies a sign");
                if *sign == FormatElement::SignS {
                    Err(combination(
                        "'S' can only appear before or after all digits and 'EEEE'".into(),
                    ))
                } else {
                    Err(combination(format!(
                        "'{sign}' can only appear after all digits and 'EEEE'"
                    )))
                }
            }
            _ => Err(combination(format!(
                "Unexpected format element '{element}'"
            ))),
        }
    }

    fn on_hexadecimal(&mut self, element: FormatElement) -> Result<()> {
        match element {
            FormatElement::Digit0 | FormatElement::DigitX(_) => {}
            FormatElement::SignS | FormatElement::SignMi | FormatElement::SignPr => {
                self.set_back_sign(element)?;
            }
            _ => {
                return Err(combination(format!(
                    "'X' cannot appear together with '{element}'"
                )));
            }
        }
        Ok(())
    }

    fn set_back_sign(&mut self, element: FormatElement) -> Result<()> {
        if self.sign.is_some() {
            return Err(combination(
                "There can be at most one of 'S', 'MI', or 'PR'".into(),
            ));
        }
        self.sign = Some(element);
        self.state = State::AfterBackSign;
        Ok(())
    }

    fn final_validate(&self) -> Result<()> {
        if let Some(currency) = &self.currency {
            if self.tm.is_some() {
                return Err(combination(
                    "'TM', 'TM9' or 'TME' cannot be combined with other format elements".into(),
                ));
            } else if self.has_x {
                return Err(combination(format!(
                    "'X' cannot appear together with '{currency}'"
                )));
            } else if self.roman_numeral.is_some() {
                return Err(combination(format!(
                    "'RN' cannot appear together with '{currency}'"
                )));
            }
        }

        if self.has_b {
            if self.tm.is_some() {
                return Err(combination(
                    "'TM', 'TM9' or 'TME' cannot be combined with other format elements".into(),
                ));
            } else if self.has_x {
                return Err(combination("'X' cannot appear together with 'B'".into()));
            } else if self.roman_numeral.is_some() {
                return Err(combination("'RN' cannot appear together with 'B'".into()));
            }
        }

        if self.has_fm && self.tm.is_some() {
            return Err(combination(
                "'TM', 'TM9' or 'TME' cannot be combined with other format elements".into(),
            ));
        }

        if self.tm.is_some() || self.roman_numeral.is_some() {
            return Ok(());
        }

        if self.digit_count == 0 {
            return Err(FormatError::EmptyDigits);
        }

        if self.has_x && self.digit_count > 16 {
            return Err(FormatError::HexTooLong);
        }

        Ok(())
    }

    fn finish(mut self) -> Result<ParsedFormat> {
        self.final_validate()?;

        let output_type = if self.tm.is_some() {
            OutputType::TextMinimal
        } else if self.roman_numeral.is_some() {
            OutputType::RomanNumeral
        } else if self.has_x {
            OutputType::Hexadecimal
        } else {
            OutputType::Decimal
        };

        let mut num_integer_digit = 0;
        if output_type == OutputType::Decimal {
            num_integer_digit = self.digit_count - self.scale;

            // A format like "9999" has no decimal point; the integer part
            // then covers the whole element list.
            if self.decimal_point_index.is_none() {
                self.decimal_point_index = Some(self.elements.len());
            }

            if self.has_exponent {
                // At most one integer digit is kept when an exponent is
                // specified: "999.99EEEE" is normalized to "9.99EEEE". Group
                // separators cannot appear together with the exponent, so
                // everything before the decimal point is a digit and
                // decimal_point_index counts the integer digits.
                let decimal_point_index =
                    self.decimal_point_index.expect("set for decimal output");
                if decimal_point_index >= 2 {
                    self.elements.drain(..decimal_point_index - 1);
                    self.decimal_point_index = Some(1);
                }
            }
        }

        let decimal_point_index = self.decimal_point_index.unwrap_or(self.elements.len());

        Ok(ParsedFormat {
            output_type,
            elements: self.elements,
            decimal_point_index,
            decimal_point: self.decimal_point,
            index_of_first_zero: self.index_of_first_zero,
            num_integer_digit,
            scale: self.scale,
            sign: self.sign,
            sign_at_front: self.sign_at_front,
            currency: self.currency,
            roman_numeral: self.roman_numeral,
            tm: self.tm,
            has_fm: self.has_fm,
            has_b: self.has_b,
            has_exponent: self.has_exponent,
        })
    }
}

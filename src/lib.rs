//! Render numeric values as text driven by Oracle `TO_CHAR`-style format
//! strings, e.g. `"S9,999.00"`, `"9.99EEEE"` or `"$999"`.

pub mod error;
pub mod formatter;
pub mod options;
pub mod parser;
pub mod types;
pub mod value;

pub use error::{FormatError, Result};
pub use formatter::{format_number, format_number_with_options, format_parsed};
pub use options::FormatOptions;
pub use parser::{
    parse_format, parse_format_with_options, validate_format, validate_format_with_options,
};
pub use types::*;
pub use value::NumericValue;

#[cfg(test)]
mod tests;

//! Error types for format-string parsing and rendering.
//!
//! Every failure is returned as a value; the parser stops at the first error.
//! Diagnostics for malformed format strings carry the `Error in format
//! string:` prefix, and element names inside messages are always spelled in
//! uppercase regardless of the case used in the format string.

use thiserror::Error;

/// Represents all possible errors from parsing a format string or rendering
/// a number through it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// A character in the format string that is not part of any format element
    #[error("Error in format string: Invalid format element '{0}'")]
    InvalidFormatElement(String),

    /// Valid format elements in an illegal arrangement (duplicate sign,
    /// 'X' with '9', a group separator with 'EEEE', and so on)
    #[error("Error in format string: {0}")]
    InvalidCombination(String),

    /// The format string exceeds the configured maximum width
    #[error("Error in format string: Format string too long; limit {0}")]
    FormatTooLong(usize),

    /// The format string contains no digit placeholder and is not a
    /// text-minimal or Roman numeral format
    #[error("Error in format string: Format string must contain at least one of 'X', '0' or '9'")]
    EmptyDigits,

    /// A hexadecimal format with more than 16 digit placeholders
    #[error("Error in format string: Max number of 'X' is 16")]
    HexTooLong,

    /// A recognised but unsupported mode ('B', 'FM', INF/NaN input, or the
    /// text-minimal, hexadecimal and Roman numeral output types)
    #[error("Unimplemented: {0}")]
    Unimplemented(String),

    /// An internal invariant violation, e.g. the prenormalizer produced a
    /// string outside the canonical grammar
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;

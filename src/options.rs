//! Configuration options for format-string processing.
//!
//! ## Examples
//!
//! ```rust
//! use to_char::{validate_format_with_options, FormatOptions};
//!
//! let options = FormatOptions::new().with_max_format_width(16);
//! assert!(validate_format_with_options("9,999.00", &options).is_ok());
//! assert!(validate_format_with_options("99999999999999999", &options).is_err());
//! ```

/// Configuration options for parsing and rendering.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Maximum accepted length of a format string, in bytes. Longer format
    /// strings are rejected with a "Format string too long" error.
    pub max_format_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_format_width: 1024,
        }
    }
}

impl FormatOptions {
    /// Creates the default options (format strings up to 1024 bytes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum accepted format string length.
    #[must_use]
    pub fn with_max_format_width(mut self, width: usize) -> Self {
        self.max_format_width = width;
        self
    }
}

//! Format string parsing module
//!
//! This module tokenizes numeric format strings and validates them with a
//! state machine, producing the normalized [`crate::types::ParsedFormat`].
//! The main entry points are [`parse_format`] and [`validate_format`].

mod format;
mod tokens;

pub use format::{
    parse_format, parse_format_with_options, validate_format, validate_format_with_options,
};

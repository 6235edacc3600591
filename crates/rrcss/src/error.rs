//! Error types for CSS value handling.
//!
//! Grid tables store their values as plain strings. These errors surface when
//! one of those strings has to be read back as a typed value, for example when
//! validation checks that a rack width is a percentage.

use thiserror::Error;

/// Errors that can occur while reading CSS values.
///
/// # Examples
///
/// ```rust
/// use rrcss::{CssError, Length};
///
/// let result: Result<Length, CssError> = "wide".parse();
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssError {
    /// The string is not a number followed by a supported unit.
    #[error("Invalid CSS length: {0}")]
    InvalidLength(String),

    /// The string is not a `var(--name)` / `var(--name, fallback)` expression.
    #[error("Invalid var() reference: {0}")]
    InvalidVarReference(String),

    /// A selector list was empty or had unbalanced brackets.
    #[error("Invalid selector list: {0}")]
    InvalidSelector(String),
}

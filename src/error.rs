// File: src/error.rs
//! Error types for the gematria library.

use thiserror::Error;

/// Errors produced while encoding a word or analysing its value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GematriaError {
    /// A letter whose uppercase form is not a single code point (e.g. `ß` -> `SS`).
    #[error("cannot encode letter '{0}': its uppercase form is not a single character")]
    UnencodableLetter(char),

    /// A character in a decimal rendering that is not a digit.
    #[error("invalid digit '{0}' in decimal representation")]
    InvalidDigit(char),

    #[error("{operation} of {value} overflows")]
    Overflow { value: i64, operation: &'static str },
}

pub type Result<T> = std::result::Result<T, GematriaError>;

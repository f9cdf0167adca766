// fieldmask/src/errors.rs
//! Custom error types for the fieldmask library.
//!
//! Masking and validation themselves never fail; an unacceptable value is an
//! `Invalid` outcome, not an error. These errors exist only at the
//! configuration boundary: a form file that cannot be read or parsed, a form
//! whose shape is inconsistent, or an engine call naming a field the form
//! does not declare.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `fieldmask` library.
///
/// `#[non_exhaustive]` signals that new variants may be added in future
/// versions, so consumers cannot match exhaustively and break on upgrade.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FieldmaskError {
    #[error("Form declares no field with id '{0}'")]
    UnknownField(String),

    #[error("Form declares field id '{0}' more than once")]
    DuplicateFieldId(String),

    #[error("Field '{0}' confirms against '{1}', which the form does not declare")]
    UnknownConfirmationTarget(String, String),

    #[error("Failed to parse form file: {0}")]
    ParseError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

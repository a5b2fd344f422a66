/// Domain module containing core business logic and data types
///
/// This module defines the core entities (SymptomRecord and the raw
/// SymptomInput it is validated from) together with their validation rules.
/// Records are immutable value objects: an edit replaces the record at an
/// id, it never mutates one in place.

pub mod input;
pub mod record;
pub mod types;

// Re-export public types for easy access
pub use input::*;
pub use record::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur while validating user input
///
/// Each variant names the offending field so callers can surface the
/// message inline next to it.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid symptom name: {0}")]
    InvalidName(String),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("invalid intensity: {0}")]
    InvalidIntensity(String),

    #[error("invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },
}

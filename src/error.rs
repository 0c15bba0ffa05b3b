//! Crate error type.

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("malformed input at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("invalid campaign batch: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    #[error("execution time overflowed while {0}")]
    Overflow(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Whether this error is the duplicate-name rejection reported as
    /// `InvalidCampaigns`.
    pub fn is_invalid_campaigns(&self) -> bool {
        match self {
            Self::Invalid(errors) => errors
                .iter()
                .any(|e| e.kind == ValidationErrorKind::DuplicateName),
            _ => false,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

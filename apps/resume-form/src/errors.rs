use thiserror::Error;

use crate::analysis::AnalysisError;

/// Controller-level misuse. Collaborator failures never show up here; they are
/// caught and turned into a [`SubmissionError`].
#[derive(Debug, Error)]
pub enum FormError {
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// The single error kind surfaced to the user after a failed analyze attempt.
/// Carries only the message; no classification survives the catch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmissionError {
    pub message: String,
}

impl From<AnalysisError> for SubmissionError {
    fn from(err: AnalysisError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// The text the user has entered so far. Both fields start empty and are
/// edited independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub resume_text: String,
    pub job_description_text: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Resume => &self.resume_text,
            Field::JobDescription => &self.job_description_text,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Resume => self.resume_text = value,
            Field::JobDescription => self.job_description_text = value,
        }
    }
}

/// An addressable input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Resume,
    JobDescription,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Resume, Field::JobDescription];

    /// Name used by renderers to address the input (`"resume"`, `"jobDescription"`).
    pub fn name(self) -> &'static str {
        match self {
            Field::Resume => "resume",
            Field::JobDescription => "jobDescription",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resume" => Ok(Field::Resume),
            "jobDescription" => Ok(Field::JobDescription),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Lifecycle of a single analyze attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "camelCase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// The message to display, present only after a failed attempt.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Everything a renderer reads: the current field values and the submission status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub form: FormState,
    pub status: SubmissionStatus,
}

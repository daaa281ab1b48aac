#![allow(dead_code)]

//! Analysis collaborator: the boundary the form submits to.
//!
//! The form only knows the `AnalysisService` trait. The comparison logic itself lives
//! behind it and is not part of this crate; `PlaceholderAnalysisService` is the default
//! backend and only logs what it receives.
//!
//! The controller holds an `Arc<dyn AnalysisService>`, swapped at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod placeholder;

pub use placeholder::PlaceholderAnalysisService;

/// Whatever the backend produced. The shape is owned by the backend, so the form
/// treats it as an opaque JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub payload: Value,
}

/// Failures a backend may report. The display text is what the user ends up seeing.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// The analysis backend trait. Implement this to swap backends without touching the
/// controller or the renderer.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<AnalysisResult, AnalysisError>;
}

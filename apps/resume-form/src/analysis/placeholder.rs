use async_trait::async_trait;
use tracing::{debug, info};

use super::{AnalysisError, AnalysisResult, AnalysisService};

/// Default backend. Logs the submitted form and resolves with an empty result.
/// Nothing is compared or scored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalysisService;

#[async_trait]
impl AnalysisService for PlaceholderAnalysisService {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description_text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        info!(
            resume_chars = resume_text.chars().count(),
            job_description_chars = job_description_text.chars().count(),
            "Submitting form to placeholder analysis backend"
        );
        debug!(resume_text, job_description_text, "Submitted form contents");

        Ok(AnalysisResult::default())
    }
}

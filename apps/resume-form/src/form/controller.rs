#![allow(dead_code)]

//! Form controller. Owns the form's state and runs the submission lifecycle.
//!
//! State lives in a `watch` channel so renderers can subscribe and redraw on every
//! change. Idle/Failed → Submitting is a check-and-set inside the channel, so at most
//! one attempt is in flight no matter who calls `submit`.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::analysis::{AnalysisResult, AnalysisService};
use crate::errors::{FormError, SubmissionError};
use crate::models::form::{Field, FormSnapshot, FormState, SubmissionStatus};

/// How a settled attempt ended. Failures are also recorded in the status.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed(AnalysisResult),
    Failed(SubmissionError),
}

pub struct FormController {
    state: watch::Sender<FormSnapshot>,
    analysis: Arc<dyn AnalysisService>,
}

impl FormController {
    pub fn new(analysis: Arc<dyn AnalysisService>) -> Self {
        let (state, _) = watch::channel(FormSnapshot::default());
        Self { state, analysis }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver woken on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.state.subscribe()
    }

    /// Replaces one field. No validation; allowed while a submission is in flight.
    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|snapshot| snapshot.form.set(field, value));
    }

    /// Same as [`update_field`](Self::update_field), addressed by input name.
    pub fn update_named_field(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let field = name.parse::<Field>()?;
        self.update_field(field, value);
        Ok(())
    }

    /// Runs one analyze attempt over the values present when it starts.
    ///
    /// Collaborator failures are caught here and never returned as `Err`; the only
    /// error is a rejected re-entry.
    pub async fn submit(&self) -> Result<SubmitOutcome, FormError> {
        let form = self.begin_submission()?;
        let submission_id = Uuid::new_v4();

        async move {
            let mut in_flight = InFlight::new(&self.state);
            info!("Submitting form for analysis");

            let outcome = match self
                .analysis
                .analyze(&form.resume_text, &form.job_description_text)
                .await
            {
                Ok(result) => {
                    info!("Analysis completed");
                    in_flight.settle(SubmissionStatus::Idle);
                    SubmitOutcome::Completed(result)
                }
                Err(err) => {
                    let err = SubmissionError::from(err);
                    warn!(error = %err, "Analysis failed");
                    in_flight.settle(SubmissionStatus::Failed(err.message.clone()));
                    SubmitOutcome::Failed(err)
                }
            };

            Ok(outcome)
        }
        .instrument(info_span!("submission", %submission_id))
        .await
    }

    /// Claims the in-flight slot and captures the form to submit.
    fn begin_submission(&self) -> Result<FormState, FormError> {
        let mut claimed = None;
        self.state.send_if_modified(|snapshot| {
            if snapshot.status.is_submitting() {
                return false;
            }
            snapshot.status = SubmissionStatus::Submitting;
            claimed = Some(snapshot.form.clone());
            true
        });

        claimed.ok_or_else(|| {
            warn!("Rejected submit while another submission is in flight");
            FormError::SubmissionInFlight
        })
    }
}

/// Leaves Submitting when the attempt ends, including when the future is dropped.
struct InFlight<'a> {
    state: &'a watch::Sender<FormSnapshot>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(state: &'a watch::Sender<FormSnapshot>) -> Self {
        Self {
            state,
            settled: false,
        }
    }

    fn settle(&mut self, status: SubmissionStatus) {
        self.settled = true;
        self.state.send_modify(|snapshot| snapshot.status = status);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Submission dropped before it settled");
            self.state
                .send_modify(|snapshot| snapshot.status = SubmissionStatus::Idle);
        }
    }
}

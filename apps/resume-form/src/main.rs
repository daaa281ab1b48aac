mod analysis;
mod config;
mod errors;
mod form;
mod models;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::PlaceholderAnalysisService;
use crate::config::Config;
use crate::form::{FormController, FormView, SubmitOutcome};
use crate::models::form::{Field, FormSnapshot};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume form v{}", env!("CARGO_PKG_VERSION"));

    let resume = config.resume_seed()?;
    let job_description = config.job_description_seed()?;

    // Placeholder backend until a real analysis service is wired in
    let controller = FormController::new(Arc::new(PlaceholderAnalysisService));
    let renderer = tokio::spawn(render_loop(controller.subscribe()));

    controller.update_field(Field::Resume, resume);
    controller.update_field(Field::JobDescription, job_description);

    match controller.submit().await? {
        SubmitOutcome::Completed(result) => info!(payload = %result.payload, "Analysis finished"),
        SubmitOutcome::Failed(err) => warn!(error = %err, "Analysis failed"),
    }

    // Dropping the controller closes the channel and ends the render loop.
    drop(controller);
    renderer.await?
}

/// Stand-in renderer: prints the view as JSON whenever the form state changes.
async fn render_loop(mut rx: watch::Receiver<FormSnapshot>) -> Result<()> {
    loop {
        let view = FormView::from_snapshot(&rx.borrow_and_update());
        println!("{}", serde_json::to_string_pretty(&view)?);

        if rx.changed().await.is_err() {
            return Ok(());
        }
    }
}

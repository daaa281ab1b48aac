use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; unreadable seed files fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_file: Option<PathBuf>,
    pub job_description_file: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resume_file: optional_path("RESUME_FILE"),
            job_description_file: optional_path("JOB_DESCRIPTION_FILE"),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Initial resume text, empty when no file is configured.
    pub fn resume_seed(&self) -> Result<String> {
        read_seed("RESUME_FILE", self.resume_file.as_deref())
    }

    /// Initial job description text, empty when no file is configured.
    pub fn job_description_seed(&self) -> Result<String> {
        read_seed("JOB_DESCRIPTION_FILE", self.job_description_file.as_deref())
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn read_seed(key: &str, path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {key} at '{}'", path.display())),
        None => Ok(String::new()),
    }
}

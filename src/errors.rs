use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the audit pipeline. Almost everything propagates to
/// the single top-level handler in `main`; only config and history loads
/// degrade locally (warn and continue).
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to launch browser `{binary}`: {source}")]
    BrowserLaunch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lighthouse failed for {url}: {stderr}")]
    LighthouseFailed { url: String, stderr: String },

    #[error("failed to parse lighthouse report {path}: {source}")]
    ReportParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("trend report requires at least 2 history entries, got {0}")]
    NotEnoughHistory(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

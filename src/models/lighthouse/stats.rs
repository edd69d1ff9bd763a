use crate::config::DeviceKind;
use crate::models::lighthouse::category::CategoryScores;
use crate::models::lighthouse::metrics::MetricsRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// One audit execution. Created once per run, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub url: String,
    pub device: DeviceKind,
    pub timestamp: DateTime<Utc>,
    pub scores: CategoryScores,
    pub metrics: MetricsRecord,
}

/// The per-URL outcome after N sequential runs.
///
/// `scores` holds the per-category mean across the runs in which the
/// category was present; `metrics` is the record of the final run only,
/// not an average. That asymmetry is inherited behavior -- kept on purpose,
/// do not even it out without product input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub url: String,
    pub device: DeviceKind,
    pub timestamp: DateTime<Utc>,
    pub runs: usize,
    pub scores: CategoryScores,
    pub metrics: MetricsRecord,
}

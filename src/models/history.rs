use crate::config::DeviceKind;
use crate::models::lighthouse::category::CategoryScores;
use crate::models::lighthouse::metrics::MetricsRecord;
use crate::models::lighthouse::stats::AggregatedResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// One persisted aggregation, append-only once written. Trend reports are
// built from these, sorted ascending by `timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub url: String,
    pub device: DeviceKind,
    pub timestamp: DateTime<Utc>,
    pub runs: usize,
    pub scores: CategoryScores,
    pub metrics: MetricsRecord,
}

impl HistoryEntry {
    pub fn from_aggregated(aggregated: &AggregatedResult) -> Self {
        HistoryEntry {
            id: Uuid::new_v4(),
            url: aggregated.url.clone(),
            device: aggregated.device,
            timestamp: aggregated.timestamp,
            runs: aggregated.runs,
            scores: aggregated.scores.clone(),
            metrics: aggregated.metrics.clone(),
        }
    }
}

use crate::models::lighthouse::metrics::{MetricsRecord, WebVital};
use crate::models::lighthouse::status::Band;

// One present metric with its classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricAssessment {
    pub vital: WebVital,
    pub value: f64,
    pub band: Band,
}

/// Band a single value. Both bounds compare strictly: a value exactly on
/// the good bound is needs-improvement, exactly on the poor bound is poor.
pub fn classify(vital: WebVital, value: f64) -> Band {
    let thresholds = vital.thresholds();
    if value < thresholds.good {
        Band::Good
    } else if value < thresholds.poor {
        Band::NeedsImprovement
    } else {
        Band::Poor
    }
}

/// Classify every present metric, in fixed vital order. Absent metrics are
/// omitted, never defaulted.
pub fn evaluate_metrics(metrics: &MetricsRecord) -> Vec<MetricAssessment> {
    WebVital::ALL
        .iter()
        .filter_map(|&vital| {
            metrics.get(vital).map(|value| MetricAssessment {
                vital,
                value,
                band: classify(vital, value),
            })
        })
        .collect()
}

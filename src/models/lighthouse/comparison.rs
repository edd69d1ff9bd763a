use crate::models::lighthouse::metrics::WebVital;
use crate::models::lighthouse::status::Verdict;
use serde::{Deserialize, Serialize};

// Score delta for one category, present only when both sides had a score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDelta {
    pub category: String,
    pub baseline: f64,
    pub current: f64,
    pub delta: f64,
    pub verdict: Verdict,
}

// Delta for one web vital, present only when both sides had a value.
// `improved` is simply delta < 0: lower is better for every vital, CLS
// included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricDelta {
    pub vital: WebVital,
    pub baseline: f64,
    pub current: f64,
    pub delta: f64,
    pub percentage: f64,
    pub improved: bool,
}

/// Headline counts for the comparison report.
///
/// Categories count by the dead-zone verdict while metrics count by the
/// improved flag (improvements) and by percentage magnitude (regressions).
/// The two rules are intentionally different and are not to be unified.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComparisonSummary {
    pub category_improvements: usize,
    pub category_regressions: usize,
    pub metric_improvements: usize,
    pub metric_regressions: usize,
}

// Read-only view over a (baseline, current) pair of aggregated results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub baseline_url: String,
    pub current_url: String,
    pub categories: Vec<CategoryDelta>,
    pub metrics: Vec<MetricDelta>,
    pub summary: ComparisonSummary,
}

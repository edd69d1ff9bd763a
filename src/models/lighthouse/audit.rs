use serde::{Deserialize, Serialize};

// pub struct for individual audit results as Lighthouse emits them.
// `numericValue` is the raw measurement (ms, or unitless for CLS), `score`
// is Lighthouse's own [0,1] grade and may be null for informational audits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[allow(non_snake_case)]
pub struct Audit {
    pub score: Option<f64>,
    pub numericValue: Option<f64>,
    pub title: Option<String>,
    pub description: Option<String>,
}

// A failing accessibility audit, persisted per run when any are found
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct AccessibilityIssue {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub score: f64,
}

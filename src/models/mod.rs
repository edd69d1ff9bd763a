// src/models/mod.rs

pub mod history;
pub mod lighthouse;

pub use history::HistoryEntry;
pub use lighthouse::{
    AccessibilityIssue, AggregatedResult, Audit, AuditRef, Band, Categories, Category,
    CategoryDelta, CategoryScores, ComparisonResult, ComparisonSummary, MetricDelta,
    MetricsRecord, Root, RunResult, Thresholds, Verdict, WebVital,
};

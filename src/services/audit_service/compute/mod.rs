pub mod compare;
pub mod evaluate;
pub mod extract;
pub mod recommend;
pub mod stats;

pub use compare::compare_results;
pub use evaluate::{classify, evaluate_metrics, MetricAssessment};
pub use extract::extract_metrics;
pub use recommend::{build_recommendations, recommendations_for};
pub use stats::{accumulate_scores, compute_averages, scale_scores};

use crate::models::lighthouse::comparison::{
    CategoryDelta, ComparisonResult, ComparisonSummary, MetricDelta,
};
use crate::models::lighthouse::metrics::WebVital;
use crate::models::lighthouse::stats::AggregatedResult;
use crate::models::lighthouse::status::Verdict;

// Category deltas within +-1 point are noise, not movement.
const CATEGORY_DEAD_ZONE: f64 = 1.0;
// A metric only counts as a regression when it moved by more than 1%.
const METRIC_REGRESSION_PCT: f64 = 1.0;

/// Compare two aggregated results, baseline against current.
///
/// A category or metric produces a delta only when both sides carry a
/// value. Every metric uses lower-is-better semantics, CLS included. The
/// summary's category counts use the dead-zone verdict while its metric
/// counts use the improved flag and percentage magnitude -- two different
/// rules, kept different on purpose.
pub fn compare_results(
    baseline: &AggregatedResult,
    current: &AggregatedResult,
) -> ComparisonResult {
    let mut categories = Vec::new();
    for ((key, baseline_score), (_, current_score)) in baseline
        .scores
        .fields()
        .into_iter()
        .zip(current.scores.fields())
    {
        if let (Some(before), Some(after)) = (baseline_score, current_score) {
            let delta = after - before;
            let verdict = if delta > CATEGORY_DEAD_ZONE {
                Verdict::Improvement
            } else if delta < -CATEGORY_DEAD_ZONE {
                Verdict::Regression
            } else {
                Verdict::Neutral
            };
            categories.push(CategoryDelta {
                category: key.to_string(),
                baseline: before,
                current: after,
                delta,
                verdict,
            });
        }
    }

    let mut metrics = Vec::new();
    for vital in WebVital::ALL {
        if let (Some(before), Some(after)) =
            (baseline.metrics.get(vital), current.metrics.get(vital))
        {
            let delta = after - before;
            let percentage = if before == 0.0 {
                0.0
            } else {
                delta / before * 100.0
            };
            metrics.push(MetricDelta {
                vital,
                baseline: before,
                current: after,
                delta,
                percentage,
                improved: delta < 0.0,
            });
        }
    }

    let summary = ComparisonSummary {
        category_improvements: categories
            .iter()
            .filter(|c| c.verdict == Verdict::Improvement)
            .count(),
        category_regressions: categories
            .iter()
            .filter(|c| c.verdict == Verdict::Regression)
            .count(),
        metric_improvements: metrics.iter().filter(|m| m.improved).count(),
        metric_regressions: metrics
            .iter()
            .filter(|m| !m.improved && m.percentage.abs() > METRIC_REGRESSION_PCT)
            .count(),
    };

    ComparisonResult {
        baseline_url: baseline.url.clone(),
        current_url: current.url.clone(),
        categories,
        metrics,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceKind;
    use crate::models::lighthouse::category::CategoryScores;
    use crate::models::lighthouse::metrics::MetricsRecord;
    use chrono::Utc;

    fn aggregated(scores: CategoryScores, metrics: MetricsRecord) -> AggregatedResult {
        AggregatedResult {
            url: "https://example.com".to_string(),
            device: DeviceKind::Desktop,
            timestamp: Utc::now(),
            runs: 3,
            scores,
            metrics,
        }
    }

    #[test]
    fn lcp_improvement_delta_and_percentage() {
        let baseline = aggregated(
            CategoryScores::default(),
            MetricsRecord {
                lcp: Some(4000.0),
                ..Default::default()
            },
        );
        let current = aggregated(
            CategoryScores::default(),
            MetricsRecord {
                lcp: Some(2500.0),
                ..Default::default()
            },
        );
        let comparison = compare_results(&baseline, &current);
        assert_eq!(comparison.metrics.len(), 1);
        let lcp = &comparison.metrics[0];
        assert_eq!(lcp.delta, -1500.0);
        assert_eq!(lcp.percentage, -37.5);
        assert!(lcp.improved);
    }

    #[test]
    fn small_category_delta_is_neutral() {
        let baseline = aggregated(
            CategoryScores {
                performance: Some(70.0),
                ..Default::default()
            },
            MetricsRecord::default(),
        );
        let current = aggregated(
            CategoryScores {
                performance: Some(70.5),
                ..Default::default()
            },
            MetricsRecord::default(),
        );
        let comparison = compare_results(&baseline, &current);
        assert_eq!(comparison.categories.len(), 1);
        assert_eq!(comparison.categories[0].verdict, Verdict::Neutral);
        assert_eq!(comparison.summary.category_improvements, 0);
        assert_eq!(comparison.summary.category_regressions, 0);
    }

    #[test]
    fn zero_baseline_metric_has_zero_percentage() {
        let baseline = aggregated(
            CategoryScores::default(),
            MetricsRecord {
                cls: Some(0.0),
                ..Default::default()
            },
        );
        let current = aggregated(
            CategoryScores::default(),
            MetricsRecord {
                cls: Some(5.0),
                ..Default::default()
            },
        );
        let comparison = compare_results(&baseline, &current);
        let cls = &comparison.metrics[0];
        assert_eq!(cls.percentage, 0.0);
        assert!(!cls.improved);
        // percentage stayed inside the 1% magnitude bar, so no regression
        assert_eq!(comparison.summary.metric_regressions, 0);
    }

    #[test]
    fn metric_present_on_one_side_only_is_skipped() {
        let baseline = aggregated(
            CategoryScores::default(),
            MetricsRecord {
                fcp: Some(1000.0),
                ..Default::default()
            },
        );
        let current = aggregated(CategoryScores::default(), MetricsRecord::default());
        let comparison = compare_results(&baseline, &current);
        assert!(comparison.metrics.is_empty());
    }

    #[test]
    fn cls_increase_counts_as_regression_like_any_metric() {
        let baseline = aggregated(
            CategoryScores::default(),
            MetricsRecord {
                cls: Some(0.1),
                ..Default::default()
            },
        );
        let current = aggregated(
            CategoryScores::default(),
            MetricsRecord {
                cls: Some(0.2),
                ..Default::default()
            },
        );
        let comparison = compare_results(&baseline, &current);
        let cls = &comparison.metrics[0];
        assert!(!cls.improved);
        assert_eq!(comparison.summary.metric_regressions, 1);
    }

    #[test]
    fn summary_counting_rules_stay_asymmetric() {
        let baseline = aggregated(
            CategoryScores {
                performance: Some(50.0),
                seo: Some(90.0),
                ..Default::default()
            },
            MetricsRecord {
                fcp: Some(2000.0),
                tbt: Some(500.0),
                ..Default::default()
            },
        );
        let current = aggregated(
            CategoryScores {
                performance: Some(60.0),
                seo: Some(85.0),
                ..Default::default()
            },
            MetricsRecord {
                // improvement by flag, regardless of magnitude
                fcp: Some(1999.0),
                // +0.5% worse: not improved, but under the 1% magnitude bar
                tbt: Some(502.5),
                ..Default::default()
            },
        );
        let comparison = compare_results(&baseline, &current);
        assert_eq!(comparison.summary.category_improvements, 1);
        assert_eq!(comparison.summary.category_regressions, 1);
        assert_eq!(comparison.summary.metric_improvements, 1);
        assert_eq!(comparison.summary.metric_regressions, 0);
    }
}

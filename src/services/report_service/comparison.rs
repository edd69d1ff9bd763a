use serde_json::json;

use crate::models::lighthouse::comparison::{ComparisonResult, MetricDelta};
use crate::models::lighthouse::metrics::WebVital;
use crate::models::lighthouse::stats::AggregatedResult;
use crate::models::lighthouse::status::Verdict;
use crate::services::report_service::assets::{
    chart_block, footer, format_metric, format_score, html_escape, page, verdict_class,
};
use crate::models::lighthouse::category::CategoryScores;

/// Render the A/B comparison report: headline counts, the full category and
/// metric tables, a grouped score bar chart, and a radar over the shared
/// metrics.
pub fn render_comparison_report(
    baseline: &AggregatedResult,
    current: &AggregatedResult,
    comparison: &ComparisonResult,
) -> String {
    let header = format!(
        r#"<header class="report-header">
    <h1>Comparison report</h1>
    <p class="meta">baseline {baseline} &middot; current {current}</p>
</header>"#,
        baseline = html_escape(&comparison.baseline_url),
        current = html_escape(&comparison.current_url),
    );

    let body = format!(
        "{header}\n{summary}\n{categories}\n{metrics}\n{bars}\n{radar}\n{footer}",
        header = header,
        summary = render_summary(comparison),
        categories = render_category_table(comparison),
        metrics = render_metric_table(comparison),
        bars = chart_block(
            "score-bars-chart",
            "Category scores, side by side",
            &bar_chart_config(baseline, current),
        ),
        radar = chart_block(
            "vitals-radar-chart",
            "Web Vitals goodness (higher is better)",
            &radar_chart_config(comparison),
        ),
        footer = footer(),
    );

    page("Comparison report", &body)
}

fn render_summary(comparison: &ComparisonResult) -> String {
    let summary = &comparison.summary;
    format!(
        r#"<section>
<h2>Summary</h2>
<p class="summary-line">Categories: <span class="verdict-improvement">{ci} improved</span>, <span class="verdict-regression">{cr} regressed</span>.</p>
<p class="summary-line">Metrics: <span class="verdict-improvement">{mi} improved</span>, <span class="verdict-regression">{mr} regressed</span>.</p>
</section>"#,
        ci = summary.category_improvements,
        cr = summary.category_regressions,
        mi = summary.metric_improvements,
        mr = summary.metric_regressions,
    )
}

fn render_category_table(comparison: &ComparisonResult) -> String {
    let rows: String = comparison
        .categories
        .iter()
        .map(|delta| {
            format!(
                r#"<tr>
    <td>{label}</td>
    <td class="num">{baseline}</td>
    <td class="num">{current}</td>
    <td class="num {class}">{delta:+.1}</td>
    <td class="{class}">{verdict}</td>
</tr>"#,
                label = CategoryScores::label(&delta.category),
                baseline = format_score(Some(delta.baseline)),
                current = format_score(Some(delta.current)),
                delta = delta.delta,
                class = verdict_class(delta.verdict),
                verdict = delta.verdict,
            )
        })
        .collect();

    format!(
        r#"<section>
<h2>Categories</h2>
<table>
<tr><th>Category</th><th class="num">Baseline</th><th class="num">Current</th><th class="num">Delta</th><th>Verdict</th></tr>
{rows}
</table>
</section>"#
    )
}

// Row coloring follows the summary's metric rule: improved wins, otherwise
// a move of more than 1% is a regression, anything smaller is neutral.
fn metric_verdict(delta: &MetricDelta) -> Verdict {
    if delta.improved {
        Verdict::Improvement
    } else if delta.percentage.abs() > 1.0 {
        Verdict::Regression
    } else {
        Verdict::Neutral
    }
}

fn render_metric_table(comparison: &ComparisonResult) -> String {
    let rows: String = comparison
        .metrics
        .iter()
        .map(|delta| {
            let verdict = metric_verdict(delta);
            format!(
                r#"<tr>
    <td>{label}</td>
    <td class="num">{baseline}</td>
    <td class="num">{current}</td>
    <td class="num {class}">{delta:+.1}</td>
    <td class="num {class}">{percentage:+.1}%</td>
</tr>"#,
                label = delta.vital.label(),
                baseline = format_metric(delta.vital, delta.baseline),
                current = format_metric(delta.vital, delta.current),
                delta = delta.delta,
                percentage = delta.percentage,
                class = verdict_class(verdict),
            )
        })
        .collect();

    format!(
        r#"<section>
<h2>Web Vitals</h2>
<table>
<tr><th>Metric</th><th class="num">Baseline</th><th class="num">Current</th><th class="num">Delta</th><th class="num">Delta %</th></tr>
{rows}
</table>
</section>"#
    )
}

fn bar_chart_config(baseline: &AggregatedResult, current: &AggregatedResult) -> String {
    let labels: Vec<&str> = baseline
        .scores
        .fields()
        .iter()
        .map(|(key, _)| CategoryScores::label(key))
        .collect();
    let baseline_data: Vec<Option<f64>> = baseline
        .scores
        .fields()
        .iter()
        .map(|(_, value)| *value)
        .collect();
    let current_data: Vec<Option<f64>> = current
        .scores
        .fields()
        .iter()
        .map(|(_, value)| *value)
        .collect();

    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [
                { "label": "Baseline", "data": baseline_data, "backgroundColor": "#94a3b8" },
                { "label": "Current", "data": current_data, "backgroundColor": "#2563eb" }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "min": 0, "max": 100 } }
        }
    })
    .to_string()
}

/// Map a metric value onto a 0-100 "goodness" scale against the vital's
/// fixed reference ceiling, so the radar reads higher-is-better for every
/// metric regardless of its native direction.
pub fn goodness(vital: WebVital, value: f64) -> f64 {
    ((1.0 - value / vital.radar_ceiling()) * 100.0).clamp(0.0, 100.0)
}

fn radar_chart_config(comparison: &ComparisonResult) -> String {
    let labels: Vec<&str> = comparison
        .metrics
        .iter()
        .map(|delta| delta.vital.short_label())
        .collect();
    let baseline_data: Vec<f64> = comparison
        .metrics
        .iter()
        .map(|delta| goodness(delta.vital, delta.baseline))
        .collect();
    let current_data: Vec<f64> = comparison
        .metrics
        .iter()
        .map(|delta| goodness(delta.vital, delta.current))
        .collect();

    json!({
        "type": "radar",
        "data": {
            "labels": labels,
            "datasets": [
                {
                    "label": "Baseline",
                    "data": baseline_data,
                    "borderColor": "#94a3b8",
                    "backgroundColor": "rgba(148, 163, 184, 0.2)"
                },
                {
                    "label": "Current",
                    "data": current_data,
                    "borderColor": "#2563eb",
                    "backgroundColor": "rgba(37, 99, 235, 0.2)"
                }
            ]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "r": { "min": 0, "max": 100 } }
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceKind;
    use crate::models::lighthouse::metrics::MetricsRecord;
    use crate::services::audit_service::compute::compare::compare_results;
    use chrono::Utc;

    fn aggregated(performance: f64, lcp: f64) -> AggregatedResult {
        AggregatedResult {
            url: "https://example.com".to_string(),
            device: DeviceKind::Desktop,
            timestamp: Utc::now(),
            runs: 3,
            scores: CategoryScores {
                performance: Some(performance),
                ..Default::default()
            },
            metrics: MetricsRecord {
                lcp: Some(lcp),
                ..Default::default()
            },
        }
    }

    #[test]
    fn goodness_is_clamped_to_the_scale() {
        assert_eq!(goodness(WebVital::Tbt, 0.0), 100.0);
        assert_eq!(goodness(WebVital::Tbt, 600.0), 0.0);
        assert_eq!(goodness(WebVital::Tbt, 1200.0), 0.0);
        assert_eq!(goodness(WebVital::Cls, 0.125), 50.0);
    }

    #[test]
    fn report_carries_summary_counts_and_tables() {
        let baseline = aggregated(70.0, 4000.0);
        let current = aggregated(85.0, 2500.0);
        let comparison = compare_results(&baseline, &current);
        let html = render_comparison_report(&baseline, &current, &comparison);
        assert!(html.contains("1 improved"));
        assert!(html.contains("Largest Contentful Paint"));
        assert!(html.contains("-37.5%"));
        assert!(html.contains("score-bars-chart"));
        assert!(html.contains("vitals-radar-chart"));
    }
}

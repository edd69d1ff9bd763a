use serde_json::json;

use crate::models::lighthouse::category::CategoryScores;
use crate::models::lighthouse::metrics::WebVital;
use crate::models::lighthouse::stats::{AggregatedResult, RunResult};
use crate::services::audit_service::compute::evaluate::evaluate_metrics;
use crate::services::audit_service::compute::recommend::recommendations_for;
use crate::models::lighthouse::status::Band;
use crate::services::report_service::assets::{
    band_class, chart_block, footer, format_metric, format_score, html_escape, page, score_class,
};

const MS_SERIES: [(WebVital, &str); 4] = [
    (WebVital::Fcp, "#2563eb"),
    (WebVital::Lcp, "#7c3aed"),
    (WebVital::Tti, "#0d9488"),
    (WebVital::Tbt, "#dc2626"),
];

/// Render the detailed report for one aggregation: score cards, the
/// Web-Vitals grid with recommendations, and two per-run charts. CLS gets
/// its own chart -- its range is orders of magnitude below the millisecond
/// metrics and would flatline next to them.
pub fn render_detailed_report(aggregated: &AggregatedResult, runs: &[RunResult]) -> String {
    let header = format!(
        r#"<header class="report-header">
    <h1>Audit report: {url}</h1>
    <p class="meta">{device} &middot; {runs} runs &middot; {timestamp}</p>
</header>"#,
        url = html_escape(&aggregated.url),
        device = aggregated.device,
        runs = aggregated.runs,
        timestamp = aggregated.timestamp.to_rfc3339(),
    );

    let body = format!(
        "{header}\n{scores}\n{vitals}\n{ms_chart}\n{cls_chart}\n{footer}",
        header = header,
        scores = render_score_cards(&aggregated.scores),
        vitals = render_vitals_grid(aggregated),
        ms_chart = chart_block(
            "ms-metrics-chart",
            "Timing metrics across runs",
            &ms_chart_config(runs),
        ),
        cls_chart = chart_block(
            "cls-chart",
            "Cumulative Layout Shift across runs",
            &cls_chart_config(runs),
        ),
        footer = footer(),
    );

    page(&format!("Audit report - {}", aggregated.url), &body)
}

fn render_score_cards(scores: &CategoryScores) -> String {
    let cards: String = scores
        .fields()
        .iter()
        .map(|(key, value)| {
            format!(
                r#"<div class="card">
    <div class="label">{label}</div>
    <div class="value {class}">{score}</div>
</div>"#,
                label = CategoryScores::label(key),
                class = score_class(*value),
                score = format_score(*value),
            )
        })
        .collect();

    format!(
        "<section>\n<h2>Category scores (mean across runs)</h2>\n<div class=\"card-grid\">\n{cards}</div>\n</section>"
    )
}

fn render_vitals_grid(aggregated: &AggregatedResult) -> String {
    let assessments = evaluate_metrics(&aggregated.metrics);
    if assessments.is_empty() {
        return String::new();
    }

    let cards: String = assessments
        .iter()
        .map(|assessment| {
            let advice = if assessment.band == Band::Good {
                String::new()
            } else {
                let items: String = recommendations_for(assessment.vital)
                    .iter()
                    .map(|item| format!("<li>{}</li>", html_escape(item)))
                    .collect();
                format!("<ul class=\"advice\">{items}</ul>")
            };
            format!(
                r#"<div class="card">
    <div class="label">{label}</div>
    <div class="value">{value}</div>
    <span class="badge {class}">{band}</span>
    {advice}
</div>"#,
                label = assessment.vital.label(),
                value = format_metric(assessment.vital, assessment.value),
                class = band_class(assessment.band),
                band = assessment.band,
                advice = advice,
            )
        })
        .collect();

    format!(
        "<section>\n<h2>Web Vitals (final run)</h2>\n<div class=\"card-grid\">\n{cards}</div>\n</section>"
    )
}

fn run_labels(runs: &[RunResult]) -> Vec<String> {
    (1..=runs.len()).map(|index| format!("Run {index}")).collect()
}

fn ms_chart_config(runs: &[RunResult]) -> String {
    let datasets: Vec<serde_json::Value> = MS_SERIES
        .iter()
        .map(|(vital, color)| {
            json!({
                "label": vital.short_label(),
                "data": runs.iter().map(|run| run.metrics.get(*vital)).collect::<Vec<_>>(),
                "borderColor": color,
                "backgroundColor": color,
                "spanGaps": true,
                "tension": 0.3,
            })
        })
        .collect();

    json!({
        "type": "line",
        "data": { "labels": run_labels(runs), "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "title": { "display": true, "text": "ms" } } }
        }
    })
    .to_string()
}

fn cls_chart_config(runs: &[RunResult]) -> String {
    json!({
        "type": "line",
        "data": {
            "labels": run_labels(runs),
            "datasets": [{
                "label": "CLS",
                "data": runs.iter().map(|run| run.metrics.cls).collect::<Vec<_>>(),
                "borderColor": "#ea580c",
                "backgroundColor": "#ea580c",
                "spanGaps": true,
                "tension": 0.3,
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "beginAtZero": true } }
        }
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceKind;
    use crate::models::lighthouse::metrics::MetricsRecord;
    use chrono::Utc;

    fn sample() -> (AggregatedResult, Vec<RunResult>) {
        let metrics = MetricsRecord {
            fcp: Some(1200.0),
            lcp: Some(2600.0),
            cls: Some(0.05),
            ..Default::default()
        };
        let run = RunResult {
            url: "https://example.com".to_string(),
            device: DeviceKind::Desktop,
            timestamp: Utc::now(),
            scores: CategoryScores {
                performance: Some(91.0),
                ..Default::default()
            },
            metrics: metrics.clone(),
        };
        let aggregated = AggregatedResult {
            url: "https://example.com".to_string(),
            device: DeviceKind::Desktop,
            timestamp: Utc::now(),
            runs: 2,
            scores: run.scores.clone(),
            metrics,
        };
        (aggregated, vec![run.clone(), run])
    }

    #[test]
    fn report_contains_scores_and_vitals() {
        let (aggregated, runs) = sample();
        let html = render_detailed_report(&aggregated, &runs);
        assert!(html.contains("91.0"));
        assert!(html.contains("Largest Contentful Paint"));
        // LCP 2600 sits in the needs-improvement band
        assert!(html.contains("band-needs-improvement"));
        assert!(html.contains("ms-metrics-chart"));
        assert!(html.contains("cls-chart"));
    }

    #[test]
    fn absent_vitals_are_not_rendered() {
        let (mut aggregated, runs) = sample();
        aggregated.metrics = MetricsRecord::default();
        let html = render_detailed_report(&aggregated, &runs);
        assert!(!html.contains("Web Vitals (final run)"));
    }
}

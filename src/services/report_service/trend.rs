use serde_json::json;

use crate::errors::AuditError;
use crate::models::history::HistoryEntry;
use crate::models::lighthouse::category::CategoryScores;
use crate::models::lighthouse::metrics::WebVital;
use crate::services::report_service::assets::{chart_block, footer, html_escape, page};

const SCORE_SERIES: [(&str, &str); 4] = [
    ("performance", "#2563eb"),
    ("accessibility", "#0d9488"),
    ("best_practices", "#7c3aed"),
    ("seo", "#b45309"),
];

/// Render the trend report over persisted history. Entries are re-sorted
/// ascending by timestamp here, whatever order they arrived in; fewer than
/// two entries is an error -- one point has no trend.
pub fn render_trend_report(entries: &[HistoryEntry]) -> Result<String, AuditError> {
    if entries.len() < 2 {
        return Err(AuditError::NotEnoughHistory(entries.len()));
    }

    let mut sorted: Vec<&HistoryEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.timestamp);

    let url = &sorted[0].url;
    let header = format!(
        r#"<header class="report-header">
    <h1>Trend report: {url}</h1>
    <p class="meta">{count} aggregations &middot; {from} &rarr; {to}</p>
</header>"#,
        url = html_escape(url),
        count = sorted.len(),
        from = sorted[0].timestamp.format("%Y-%m-%d %H:%M"),
        to = sorted[sorted.len() - 1]
            .timestamp
            .format("%Y-%m-%d %H:%M"),
    );

    let body = format!(
        "{header}\n{scores}\n{paint}\n{interactivity}\n{cls}\n{footer}",
        header = header,
        scores = chart_block(
            "score-trend-chart",
            "Category scores over time",
            &score_chart_config(&sorted),
        ),
        paint = chart_block(
            "paint-trend-chart",
            "FCP / LCP over time",
            &vitals_chart_config(&sorted, &[(WebVital::Fcp, "#2563eb"), (WebVital::Lcp, "#7c3aed")]),
        ),
        interactivity = chart_block(
            "interactivity-trend-chart",
            "TTI / TBT over time",
            &vitals_chart_config(&sorted, &[(WebVital::Tti, "#0d9488"), (WebVital::Tbt, "#dc2626")]),
        ),
        cls = chart_block(
            "cls-trend-chart",
            "CLS over time",
            &vitals_chart_config(&sorted, &[(WebVital::Cls, "#ea580c")]),
        ),
        footer = footer(),
    );

    Ok(page(&format!("Trend report - {}", url), &body))
}

fn labels(entries: &[&HistoryEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| entry.timestamp.format("%Y-%m-%d %H:%M").to_string())
        .collect()
}

fn score_chart_config(entries: &[&HistoryEntry]) -> String {
    let datasets: Vec<serde_json::Value> = SCORE_SERIES
        .iter()
        .map(|(key, color)| {
            let data: Vec<Option<f64>> = entries
                .iter()
                .map(|entry| entry.scores.get(key))
                .collect();
            json!({
                "label": CategoryScores::label(key),
                "data": data,
                "borderColor": color,
                "backgroundColor": color,
                "spanGaps": true,
                "tension": 0.3,
            })
        })
        .collect();

    json!({
        "type": "line",
        "data": { "labels": labels(entries), "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "min": 0, "max": 100 } }
        }
    })
    .to_string()
}

fn vitals_chart_config(entries: &[&HistoryEntry], series: &[(WebVital, &str)]) -> String {
    let datasets: Vec<serde_json::Value> = series
        .iter()
        .map(|(vital, color)| {
            json!({
                "label": vital.short_label(),
                "data": entries
                    .iter()
                    .map(|entry| entry.metrics.get(*vital))
                    .collect::<Vec<_>>(),
                "borderColor": color,
                "backgroundColor": color,
                "spanGaps": true,
                "tension": 0.3,
            })
        })
        .collect();

    json!({
        "type": "line",
        "data": { "labels": labels(entries), "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": { "y": { "beginAtZero": true } }
        }
    })
    .to_string()
}

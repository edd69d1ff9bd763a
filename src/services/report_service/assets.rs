//! Shared pieces of the generated reports: page skeleton, inline CSS,
//! chart scaffolding and small formatting helpers. Everything here returns
//! strings; nothing touches the filesystem.

use crate::models::lighthouse::metrics::WebVital;
use crate::models::lighthouse::status::{Band, Verdict};

pub const CHART_JS_TAG: &str =
    r#"<script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>"#;

/// Wrap a rendered body into the full document with inline styles and the
/// chart library tag.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
    {chart_js}
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>"#,
        title = html_escape(title),
        css = inline_css(),
        chart_js = CHART_JS_TAG,
        body = body,
    )
}

pub fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Emit one chart: a fixed-height canvas plus the script that draws on it.
/// `config` must already be serialized Chart.js configuration JSON.
pub fn chart_block(canvas_id: &str, heading: &str, config: &str) -> String {
    format!(
        r#"<section class="chart-section">
    <h2>{heading}</h2>
    <div class="chart-wrap"><canvas id="{canvas_id}"></canvas></div>
    <script>new Chart(document.getElementById('{canvas_id}'), {config});</script>
</section>"#,
        heading = html_escape(heading),
        canvas_id = canvas_id,
        config = config,
    )
}

pub fn band_class(band: Band) -> &'static str {
    match band {
        Band::Good => "band-good",
        Band::NeedsImprovement => "band-needs-improvement",
        Band::Poor => "band-poor",
    }
}

pub fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Improvement => "verdict-improvement",
        Verdict::Regression => "verdict-regression",
        Verdict::Neutral => "verdict-neutral",
    }
}

/// Human form of a metric value: milliseconds rounded to whole numbers,
/// CLS with three decimals and no unit.
pub fn format_metric(vital: WebVital, value: f64) -> String {
    match vital {
        WebVital::Cls => format!("{:.3}", value),
        _ => format!("{:.0} ms", value),
    }
}

pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) => format!("{:.1}", value),
        None => "\u{2013}".to_string(),
    }
}

/// Score card color bucket, mirroring Lighthouse's 0-49/50-89/90-100 split.
pub fn score_class(score: Option<f64>) -> &'static str {
    match score {
        Some(value) if value >= 90.0 => "score-high",
        Some(value) if value >= 50.0 => "score-mid",
        Some(_) => "score-low",
        None => "score-missing",
    }
}

/// Inline CSS styles
pub fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #f9fafb;
}

.container { max-width: 1100px; margin: 0 auto; padding: 32px 24px; }

header.report-header { margin-bottom: 32px; }
header.report-header h1 { font-size: 1.6rem; margin-bottom: 4px; }
header.report-header .meta { color: #6b7280; font-size: 0.9rem; }

h2 { font-size: 1.15rem; margin: 32px 0 12px; }

.card-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
    gap: 16px;
}

.card {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 10px;
    padding: 16px;
}

.card .label { color: #6b7280; font-size: 0.85rem; }
.card .value { font-size: 1.7rem; font-weight: 600; }

.score-high { color: #15803d; }
.score-mid { color: #b45309; }
.score-low { color: #b91c1c; }
.score-missing { color: #9ca3af; }

.badge {
    display: inline-block;
    padding: 2px 10px;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 600;
}

.band-good { background: #dcfce7; color: #15803d; }
.band-needs-improvement { background: #fef3c7; color: #b45309; }
.band-poor { background: #fee2e2; color: #b91c1c; }

.verdict-improvement { color: #15803d; }
.verdict-regression { color: #b91c1c; }
.verdict-neutral { color: #6b7280; }

ul.advice { margin: 8px 0 0 18px; font-size: 0.85rem; color: #374151; }

table {
    width: 100%;
    border-collapse: collapse;
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 10px;
    overflow: hidden;
}

th, td { text-align: left; padding: 10px 14px; font-size: 0.9rem; }
th { background: #f3f4f6; color: #374151; }
tr + tr td { border-top: 1px solid #f3f4f6; }
td.num, th.num { text-align: right; font-variant-numeric: tabular-nums; }

.summary-line { font-size: 1rem; margin-bottom: 8px; }

.chart-section { margin-top: 32px; }
.chart-wrap {
    background: #ffffff;
    border: 1px solid #e5e7eb;
    border-radius: 10px;
    padding: 16px;
    height: 340px;
}

footer {
    margin-top: 40px;
    color: #9ca3af;
    font-size: 0.8rem;
    border-top: 1px solid #e5e7eb;
    padding-top: 12px;
}
"#
}

pub fn footer() -> String {
    "<footer>Generated by lightrun</footer>".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_html_significant_chars() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn cls_formats_without_unit() {
        assert_eq!(format_metric(WebVital::Cls, 0.1234), "0.123");
        assert_eq!(format_metric(WebVital::Lcp, 2499.6), "2500 ms");
    }
}

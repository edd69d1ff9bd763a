use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use log::info;

use crate::config::AuditConfig;
use crate::errors::AuditError;
use crate::models::lighthouse::stats::{AggregatedResult, RunResult};
use crate::progress::Reporter;
use crate::services::audit_service::accessibility::collect_accessibility_issues;
use crate::services::audit_service::browser::BrowserSession;
use crate::services::audit_service::compute::extract::extract_metrics;
use crate::services::audit_service::compute::stats::{
    accumulate_scores, compute_averages, scale_scores,
};
use crate::services::audit_service::lighthouse::run_lighthouse;
use crate::utils::file_utils::{sanitize_filename, write_json};

// Everything one aggregation produced: the summary plus the per-run trail
// the detailed report charts from.
pub struct AuditOutcome {
    pub aggregated: AggregatedResult,
    pub runs: Vec<RunResult>,
}

impl AuditOutcome {
    pub fn run_dir(config: &AuditConfig, url: &str) -> PathBuf {
        config.output_dir.join(sanitize_filename(url))
    }
}

/// Run the audit engine N times, strictly in sequence, against one URL
/// through the shared browser session.
///
/// Per run this extracts the metrics record, rescales category scores into
/// per-category series, and writes the per-run artifacts (the engine's own
/// JSON/HTML reports, a metrics JSON, and an accessibility-issues JSON when
/// any audit failed). Scores are averaged per category over the runs that
/// carried the category; the aggregated metrics record is the final run's,
/// not an average. A failed run aborts the whole aggregation -- the session
/// itself is cleaned up by its owner regardless.
pub async fn run_audits(
    config: &AuditConfig,
    url: &str,
    session: &BrowserSession,
    reporter: &Reporter,
) -> Result<AuditOutcome, AuditError> {
    let run_dir = AuditOutcome::run_dir(config, url);
    tokio::fs::create_dir_all(&run_dir).await?;

    let mut series: HashMap<&'static str, Vec<f64>> = HashMap::new();
    let mut runs: Vec<RunResult> = Vec::with_capacity(config.count);

    for run_index in 1..=config.count {
        reporter.begin_run(run_index, config.count, url);

        let report = run_lighthouse(url, run_index, config, session.port(), &run_dir).await?;

        let scores = scale_scores(&report.categories);
        accumulate_scores(&mut series, &scores);

        let metrics = extract_metrics(&report);
        write_json(
            &run_dir.join(format!("run-{}.metrics.json", run_index)),
            &metrics,
        )
        .await?;

        let issues = collect_accessibility_issues(&report);
        if !issues.is_empty() {
            write_json(
                &run_dir.join(format!("run-{}.accessibility.json", run_index)),
                &issues,
            )
            .await?;
        }

        runs.push(RunResult {
            url: url.to_string(),
            device: config.device,
            timestamp: Utc::now(),
            scores,
            metrics,
        });

        reporter.complete_run(run_index, config.count);
    }

    let scores = compute_averages(&series);
    // Last run's metrics, deliberately not averaged (see AggregatedResult).
    let metrics = runs
        .last()
        .map(|run| run.metrics.clone())
        .unwrap_or_default();

    let aggregated = AggregatedResult {
        url: url.to_string(),
        device: config.device,
        timestamp: Utc::now(),
        runs: runs.len(),
        scores,
        metrics,
    };

    info!("✅ {} runs aggregated for {}", runs.len(), url);
    Ok(AuditOutcome { aggregated, runs })
}

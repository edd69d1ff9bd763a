use anyhow::Context;
use clap::Parser;
use log::{error, info};

use lightrun::cli::Cli;
use lightrun::config::{load_config, AuditConfig};
use lightrun::errors::AuditError;
use lightrun::models::history::HistoryEntry;
use lightrun::progress::Reporter;
use lightrun::services::audit_service::compute::compare_results;
use lightrun::services::audit_service::{run_audits, BrowserSession};
use lightrun::services::history_service;
use lightrun::services::report_service::{
    render_comparison_report, render_detailed_report, render_trend_report,
};
use lightrun::utils::file_utils::write_string;
use lightrun::utils::log_utils::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging first, anchored to the flag-level output dir, so the config
    // overlay's own warnings have somewhere to go.
    if let Err(err) = std::fs::create_dir_all(&cli.output_dir) {
        eprintln!("cannot create output directory {}: {}", cli.output_dir.display(), err);
        std::process::exit(1);
    }
    if let Err(err) = init_logging(&cli.output_dir) {
        eprintln!("cannot initialize logging: {}", err);
        std::process::exit(1);
    }

    let config = load_config(&cli);
    let total_runs = config.count * if config.compare_url.is_some() { 2 } else { 1 };
    let reporter = if cli.quiet {
        Reporter::silent()
    } else {
        Reporter::new(total_runs as u64)
    };

    // Everything funnels into this one handler: log, exit non-zero.
    if let Err(err) = run(config, &reporter).await {
        error!("❌ {:#}", err);
        std::process::exit(1);
    }
}

async fn run(config: AuditConfig, reporter: &Reporter) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("creating output directory {}", config.output_dir.display()))?;

    info!("🚀 auditing {} on {} ({} runs)", config.url, config.device, config.count);

    // One browser session for every run, primary and comparison alike.
    // Dropping it kills the process whether or not the loops succeeded.
    let session = BrowserSession::launch().await?;
    let primary = run_audits(&config, &config.url, &session, reporter).await?;
    let comparison_outcome = match &config.compare_url {
        Some(compare_url) => Some(run_audits(&config, compare_url, &session, reporter).await?),
        None => None,
    };
    drop(session);
    reporter.finish("all audit runs complete");

    let detailed = render_detailed_report(&primary.aggregated, &primary.runs);
    let detailed_path = config.output_dir.join("detailed_report.html");
    write_string(&detailed_path, &detailed).await?;
    info!("✅ detailed report written to {}", detailed_path.display());

    if let Some(current) = &comparison_outcome {
        let comparison = compare_results(&primary.aggregated, &current.aggregated);
        let html = render_comparison_report(&primary.aggregated, &current.aggregated, &comparison);
        let path = config.output_dir.join("comparison_report.html");
        write_string(&path, &html).await?;
        info!("✅ comparison report written to {}", path.display());
    }

    let history_dir = config.output_dir.join("history");
    if config.save_history {
        let entry = HistoryEntry::from_aggregated(&primary.aggregated);
        history_service::save_entry(&history_dir, &entry).await?;
        if let Some(current) = &comparison_outcome {
            let entry = HistoryEntry::from_aggregated(&current.aggregated);
            history_service::save_entry(&history_dir, &entry).await?;
        }
    }

    // Trend over the primary URL only; comparison entries belong to their
    // own URL's trend.
    let entries: Vec<_> = history_service::load_entries(&history_dir)
        .await?
        .into_iter()
        .filter(|entry| entry.url == config.url)
        .collect();
    match render_trend_report(&entries) {
        Ok(html) => {
            let path = config.output_dir.join("trend_report.html");
            write_string(&path, &html).await?;
            info!("✅ trend report written to {}", path.display());
        }
        Err(AuditError::NotEnoughHistory(count)) => {
            info!("skipping trend report: {} history entries, need at least 2", count);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

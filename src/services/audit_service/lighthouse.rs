use std::path::{Path, PathBuf};
use std::process::Stdio;

use log::debug;
use tokio::process::Command;

use crate::config::{AuditConfig, DeviceKind};
use crate::errors::AuditError;
use crate::models::lighthouse::report::Root;

// Function to run Lighthouse once against a URL through the shared browser
// session, leaving the engine's own JSON and HTML reports on disk and
// returning the parsed JSON.
pub async fn run_lighthouse(
    url: &str,
    run_index: usize,
    config: &AuditConfig,
    port: u16,
    output_dir: &Path,
) -> Result<Root, AuditError> {
    let base_path = output_dir.join(format!("run-{}", run_index));

    let mut command = Command::new("lighthouse");
    command
        .arg(url)
        .arg("--output")
        .arg("json")
        .arg("--output")
        .arg("html")
        .arg("--output-path")
        .arg(&base_path)
        .arg(format!("--port={}", port))
        .arg("--quiet")
        .arg("--no-enable-error-reporting")
        .arg("--max-wait-for-load=120000")
        .arg(format!("--only-categories={}", config.categories.join(",")));

    if config.device == DeviceKind::Desktop {
        command.arg("--preset=desktop");
    }

    let throttling = &config.throttling;
    command
        .arg(format!(
            "--throttling.cpuSlowdownMultiplier={}",
            throttling.cpu_slowdown_multiplier
        ))
        .arg(format!(
            "--throttling.downloadThroughputKbps={}",
            throttling.download_throughput_kbps
        ))
        .arg(format!(
            "--throttling.uploadThroughputKbps={}",
            throttling.upload_throughput_kbps
        ))
        .arg(format!("--throttling.rttMs={}", throttling.rtt_ms));

    debug!("spawning lighthouse for {} (run {})", url, run_index);
    let output = command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        return Err(AuditError::LighthouseFailed {
            url: url.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    // Lighthouse appends ".report.json" / ".report.html" to the output path
    let report_path = PathBuf::from(format!("{}.report.json", base_path.display()));
    let contents = tokio::fs::read(&report_path).await?;
    let report =
        serde_json::from_slice::<Root>(&contents).map_err(|source| AuditError::ReportParse {
            path: report_path,
            source,
        })?;

    Ok(report)
}

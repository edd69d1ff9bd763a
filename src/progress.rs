use indicatif::{ProgressBar, ProgressStyle};
use log::info;

/// Progress reporting for the run loop. Constructed once in `main` and
/// passed down, so orchestration code never touches ambient console state
/// and tests can run against `Reporter::silent()`.
pub struct Reporter {
    bar: Option<ProgressBar>,
}

impl Reporter {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::with_template(
            "{spinner} run {pos}/{len} [{elapsed_precise} elapsed, {eta} left] {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Reporter { bar: Some(bar) }
    }

    /// No console output; log records still flow through `log`.
    pub fn silent() -> Self {
        Reporter { bar: None }
    }

    pub fn begin_run(&self, index: usize, total: usize, url: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("auditing {url}"));
        }
        info!("run {index}/{total} started for {url}");
    }

    pub fn complete_run(&self, index: usize, total: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
        info!("run {index}/{total} complete");
    }

    pub fn finish(&self, message: &str) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message(message.to_string());
        }
        info!("{message}");
    }
}

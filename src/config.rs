use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;

/// Device profile handed to the audit engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Mobile,
    Desktop,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceKind::Mobile => write!(f, "mobile"),
            DeviceKind::Desktop => write!(f, "desktop"),
        }
    }
}

// Network/CPU throttling handed to the audit engine. Defaults approximate
// a 3G connection on mid-tier hardware.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrottlingProfile {
    pub cpu_slowdown_multiplier: f64,
    pub download_throughput_kbps: f64,
    pub upload_throughput_kbps: f64,
    pub rtt_ms: f64,
}

impl Default for ThrottlingProfile {
    fn default() -> Self {
        ThrottlingProfile {
            cpu_slowdown_multiplier: 4.0,
            download_throughput_kbps: 1600.0,
            upload_throughput_kbps: 750.0,
            rtt_ms: 150.0,
        }
    }
}

pub fn default_categories() -> Vec<String> {
    vec![
        "performance".to_string(),
        "accessibility".to_string(),
        "best-practices".to_string(),
        "seo".to_string(),
    ]
}

/// Fully resolved runtime configuration: CLI flags as the base, optionally
/// overlaid by a JSON config file whose values win.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditConfig {
    pub url: String,
    pub count: usize,
    pub device: DeviceKind,
    pub compare_url: Option<String>,
    pub save_history: bool,
    pub categories: Vec<String>,
    pub throttling: ThrottlingProfile,
    pub output_dir: PathBuf,
}

impl AuditConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        AuditConfig {
            url: cli.url.clone(),
            count: cli.count as usize,
            device: cli.device,
            compare_url: cli.compare_url.clone(),
            save_history: cli.save_history,
            categories: if cli.categories.is_empty() {
                default_categories()
            } else {
                cli.categories.clone()
            },
            throttling: ThrottlingProfile {
                cpu_slowdown_multiplier: cli.cpu_slowdown,
                download_throughput_kbps: cli.download_kbps,
                upload_throughput_kbps: cli.upload_kbps,
                rtt_ms: cli.rtt_ms,
            },
            output_dir: cli.output_dir.clone(),
        }
    }
}

// Partial file config: every field optional so a file only overrides what
// it actually sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigOverlay {
    pub url: Option<String>,
    pub count: Option<usize>,
    pub device: Option<DeviceKind>,
    pub compare_url: Option<String>,
    pub save_history: Option<bool>,
    pub categories: Option<Vec<String>>,
    pub throttling: Option<ThrottlingProfile>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverlay {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let overlay = serde_json::from_str(&contents)?;
        Ok(overlay)
    }

    pub fn apply(self, config: &mut AuditConfig) {
        if let Some(url) = self.url {
            config.url = url;
        }
        if let Some(count) = self.count {
            config.count = count.max(1);
        }
        if let Some(device) = self.device {
            config.device = device;
        }
        if let Some(compare_url) = self.compare_url {
            config.compare_url = Some(compare_url);
        }
        if let Some(save_history) = self.save_history {
            config.save_history = save_history;
        }
        if let Some(categories) = self.categories {
            config.categories = categories;
        }
        if let Some(throttling) = self.throttling {
            config.throttling = throttling;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
    }
}

/// Resolve the runtime config from flags plus the optional JSON file. A
/// missing or invalid file logs a warning and leaves the flag values as-is.
pub fn load_config(cli: &Cli) -> AuditConfig {
    let mut config = AuditConfig::from_cli(cli);
    if let Some(path) = &cli.config {
        match ConfigOverlay::load(path) {
            Ok(overlay) => overlay.apply(&mut config),
            Err(err) => {
                warn!(
                    "failed to load config file {}: {err}; continuing with flag values",
                    path.display()
                );
            }
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base_cli() -> Cli {
        Cli::parse_from(["lightrun"])
    }

    #[test]
    fn overlay_values_win_over_flags() {
        let cli = base_cli();
        let mut config = AuditConfig::from_cli(&cli);
        let overlay = ConfigOverlay {
            url: Some("https://overlaid.example".to_string()),
            count: Some(3),
            save_history: Some(false),
            ..Default::default()
        };
        overlay.apply(&mut config);

        assert_eq!(config.url, "https://overlaid.example");
        assert_eq!(config.count, 3);
        assert!(!config.save_history);
        // untouched fields keep the flag defaults
        assert_eq!(config.device, DeviceKind::Desktop);
        assert_eq!(config.categories, default_categories());
    }

    #[test]
    fn overlay_parses_camel_case_fields() {
        let json = r#"{
            "compareUrl": "https://b.example",
            "saveHistory": false,
            "throttling": {
                "cpuSlowdownMultiplier": 2.0,
                "downloadThroughputKbps": 5000.0,
                "uploadThroughputKbps": 1000.0,
                "rttMs": 40.0
            }
        }"#;
        let overlay: ConfigOverlay = serde_json::from_str(json).unwrap();
        assert_eq!(overlay.compare_url.as_deref(), Some("https://b.example"));
        assert_eq!(overlay.save_history, Some(false));
        let throttling = overlay.throttling.unwrap();
        assert_eq!(throttling.cpu_slowdown_multiplier, 2.0);
        assert_eq!(throttling.rtt_ms, 40.0);
    }

    #[test]
    fn zero_count_from_file_is_clamped() {
        let cli = base_cli();
        let mut config = AuditConfig::from_cli(&cli);
        let overlay = ConfigOverlay {
            count: Some(0),
            ..Default::default()
        };
        overlay.apply(&mut config);
        assert_eq!(config.count, 1);
    }
}

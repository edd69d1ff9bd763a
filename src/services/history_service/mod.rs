// src/services/history_service/mod.rs

use std::path::{Path, PathBuf};

use futures::StreamExt;
use log::{info, warn};
use tokio_stream::wrappers::ReadDirStream;

use crate::errors::AuditError;
use crate::models::history::HistoryEntry;
use crate::utils::file_utils::{sanitize_filename, write_json};

/// Persist one aggregation to the history directory. Entries are
/// append-only: a new file per aggregation, never rewritten.
pub async fn save_entry(history_dir: &Path, entry: &HistoryEntry) -> Result<PathBuf, AuditError> {
    tokio::fs::create_dir_all(history_dir).await?;
    let filename = format!(
        "history_{}_{}.json",
        sanitize_filename(&entry.url),
        entry.timestamp.timestamp_millis()
    );
    let path = history_dir.join(filename);
    write_json(&path, entry).await?;
    info!("✅ history entry saved at {}", path.display());
    Ok(path)
}

/// Load every readable history entry, sorted ascending by timestamp. A
/// file that cannot be read or parsed is logged and skipped; it never
/// aborts the load.
pub async fn load_entries(history_dir: &Path) -> Result<Vec<HistoryEntry>, AuditError> {
    if !history_dir.exists() {
        return Ok(Vec::new());
    }

    let dir = tokio::fs::read_dir(history_dir).await?;
    let mut stream = ReadDirStream::new(dir);
    let mut entries = Vec::new();

    while let Some(dir_entry) = stream.next().await {
        let dir_entry = dir_entry?;
        let path = dir_entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        match tokio::fs::read(&path).await {
            Ok(contents) => match serde_json::from_slice::<HistoryEntry>(&contents) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    warn!("skipping unparsable history file {}: {}", path.display(), err);
                }
            },
            Err(err) => {
                warn!("skipping unreadable history file {}: {}", path.display(), err);
            }
        }
    }

    entries.sort_by_key(|entry| entry.timestamp);
    Ok(entries)
}

use chrono::{Duration, Utc};
use tempfile::TempDir;
use uuid::Uuid;

use lightrun::config::DeviceKind;
use lightrun::models::history::HistoryEntry;
use lightrun::models::lighthouse::category::CategoryScores;
use lightrun::models::lighthouse::metrics::MetricsRecord;
use lightrun::services::history_service::{load_entries, save_entry};

fn entry(offset_minutes: i64) -> HistoryEntry {
    HistoryEntry {
        id: Uuid::new_v4(),
        url: "https://example.com".to_string(),
        device: DeviceKind::Mobile,
        timestamp: Utc::now() + Duration::minutes(offset_minutes),
        runs: 5,
        scores: CategoryScores {
            performance: Some(88.5),
            accessibility: Some(97.0),
            best_practices: None,
            seo: Some(100.0),
        },
        metrics: MetricsRecord {
            fcp: Some(1450.0),
            lcp: Some(2890.5),
            cls: Some(0.043),
            fid: None,
            tti: Some(5100.0),
            tbt: Some(310.0),
            ttfb: Some(620.0),
        },
    }
}

#[tokio::test]
async fn round_trip_preserves_every_field() {
    let dir = TempDir::new().unwrap();
    let original = entry(0);
    save_entry(dir.path(), &original).await.unwrap();

    let loaded = load_entries(dir.path()).await.unwrap();
    assert_eq!(loaded.len(), 1);
    let restored = &loaded[0];
    assert_eq!(restored.id, original.id);
    assert_eq!(restored.url, original.url);
    assert_eq!(restored.device, original.device);
    assert_eq!(restored.timestamp, original.timestamp);
    assert_eq!(restored.runs, original.runs);
    assert_eq!(restored.scores, original.scores);
    assert_eq!(restored.metrics, original.metrics);
}

#[tokio::test]
async fn entries_come_back_sorted_by_timestamp() {
    let dir = TempDir::new().unwrap();
    let newest = entry(30);
    let oldest = entry(-30);
    let middle = entry(0);
    // saved newest-first on purpose
    save_entry(dir.path(), &newest).await.unwrap();
    save_entry(dir.path(), &oldest).await.unwrap();
    save_entry(dir.path(), &middle).await.unwrap();

    let loaded = load_entries(dir.path()).await.unwrap();
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[0].id, oldest.id);
    assert_eq!(loaded[1].id, middle.id);
    assert_eq!(loaded[2].id, newest.id);
}

#[tokio::test]
async fn unreadable_file_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    save_entry(dir.path(), &entry(0)).await.unwrap();
    tokio::fs::write(dir.path().join("broken.json"), b"{ not json")
        .await
        .unwrap();
    // non-json files are ignored outright
    tokio::fs::write(dir.path().join("notes.txt"), b"hello")
        .await
        .unwrap();

    let loaded = load_entries(dir.path()).await.unwrap();
    assert_eq!(loaded.len(), 1);
}

#[tokio::test]
async fn missing_directory_means_no_entries() {
    let dir = TempDir::new().unwrap();
    let loaded = load_entries(&dir.path().join("never_created"))
        .await
        .unwrap();
    assert!(loaded.is_empty());
}

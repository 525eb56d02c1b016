use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DownloadLog<'a> {
    pub timestamp: String,
    pub images_downloaded: usize,
    pub images: &'a IndexMap<String, String>,
}

impl<'a> DownloadLog<'a> {
    pub fn new(images: &'a IndexMap<String, String>) -> Self {
        DownloadLog {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            images_downloaded: images.len(),
            images,
        }
    }
}

/// Writes the run summary to `log_file` as pretty JSON, replacing any
/// previous log.
pub async fn save_download_log(log_file: &Path, images: &IndexMap<String, String>) -> Result<()> {
    let log = DownloadLog::new(images);
    let json = serde_json::to_string_pretty(&log).context("Failed to serialize download log")?;

    tokio::fs::write(log_file, json)
        .await
        .with_context(|| format!("Failed to write download log {}", log_file.display()))?;

    Ok(())
}

use std::path::Path;

use anyhow::{Context, Result};

/// Replaces every literal occurrence of `old_url` in the file with `new_url`,
/// rewriting the file in place.
pub async fn replace_url_in_file(file_path: &Path, old_url: &str, new_url: &str) -> Result<()> {
    let content = tokio::fs::read_to_string(file_path)
        .await
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    let updated_content = content.replace(old_url, new_url);

    tokio::fs::write(file_path, updated_content)
        .await
        .with_context(|| format!("Failed to write {}", file_path.display()))?;

    Ok(())
}

//! Delivery of finished documents: file naming and writing to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::text::normalize;

/// `<FullName>_CV_<YYYY-MM-DD>.pdf`.
///
/// Path separators and control characters in the name become `_`, so the
/// result is always a single file name.
pub fn delivery_file_name(full_name: &str, date: NaiveDate) -> String {
    let name: String = normalize(full_name)
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("{name}_CV_{}.pdf", date.format("%Y-%m-%d"))
}

/// Writes `bytes` to `dir/file_name`, creating `dir` if needed.
pub async fn write_document(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = bytes.len(), "document written");
    Ok(path)
}

// ============================================================
// Layer 6 — Report Writer
// ============================================================
// Saves any serialisable summary as pretty-printed JSON,
// creating parent directories on the way. The pipeline uses
// it for its RunReport; trained models are never persisted.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json crate documentation

use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

/// Writes reports to disk.
pub struct ReportWriter;

impl ReportWriter {
    /// Save `report` as pretty JSON, creating parent directories.
    pub fn save<T: Serialize>(path: impl AsRef<Path>, report: &T) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(report)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::debug!("Saved run report to '{}'", path.display());
        Ok(())
    }
}

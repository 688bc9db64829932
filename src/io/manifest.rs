//! Run manifest JSON.
//!
//! The manifest records what a `generate` run produced: for every rating, how
//! it was split, which value and tier it resolved to, and where the SVG went
//! (or why it did not).

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;

use crate::badge::RenderedBadge;
use crate::error::AppError;
use crate::report::ItemFailure;

#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub tool: &'static str,
    pub generated_at: String,
    pub entries: Vec<ManifestEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ManifestEntry<'a> {
    #[serde(flatten)]
    pub badge: &'a RenderedBadge,
    pub svg: Option<&'a Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a str>,
}

impl<'a> Manifest<'a> {
    pub fn new(outcomes: &'a [(RenderedBadge, Result<PathBuf, ItemFailure>)]) -> Self {
        let entries = outcomes
            .iter()
            .map(|(badge, outcome)| ManifestEntry {
                badge,
                svg: outcome.as_ref().ok().map(PathBuf::as_path),
                error: outcome.as_ref().err().map(|f| f.message.as_str()),
            })
            .collect();
        Self {
            tool: "rating-badge",
            generated_at: Local::now().to_rfc3339(),
            entries,
        }
    }
}

/// Write the manifest as pretty-printed JSON.
pub fn write_manifest_json(path: &Path, manifest: &Manifest<'_>) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create manifest '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(BufWriter::new(file), manifest)
        .map_err(|e| AppError::new(2, format!("Failed to write manifest JSON: {e}")))?;

    Ok(())
}

//! Formatted terminal output.
//!
//! Formatting lives here so the pipeline code only deals in data and output
//! changes stay localized.

use std::collections::BTreeMap;
use std::path::Path;

use crate::badge::RenderedBadge;
use crate::domain::GradientTier;
use crate::report::BatchReport;

/// One-block summary of a pipeline stage.
pub fn format_stage_summary(stage: &str, report: &BatchReport) -> String {
    let mut out = format!(
        "{stage}: {} written, {} failed\n",
        report.written.len(),
        report.failed.len()
    );
    for failure in &report.failed {
        out.push_str(&format!("  ! {}: {}\n", failure.item, failure.message));
    }
    out
}

/// How many badges landed in each tier (catalog order, empty tiers skipped).
pub fn format_tier_breakdown(badges: &[RenderedBadge]) -> String {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for badge in badges {
        *counts.entry(badge.tier.index()).or_default() += 1;
    }

    let parts: Vec<String> = counts
        .into_iter()
        .map(|(idx, n)| format!("{}={n}", GradientTier::ALL[idx].display_name()))
        .collect();
    if parts.is_empty() {
        "Tiers: (none)".to_string()
    } else {
        format!("Tiers: {}", parts.join(", "))
    }
}

/// Final line for the archive stage.
pub fn format_archive_summary(path: &Path, entries: usize, bytes: u64) -> String {
    format!("Archive: {} ({entries} entries, {bytes} bytes)", path.display())
}

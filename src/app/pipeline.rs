//! Pipeline stages shared by the individual subcommands and `build`.
//!
//! generate -> convert -> archive
//!
//! Each stage fans out over independent inputs and collects per-item failures
//! into a `BatchReport`; only stage-level setup problems are returned as errors.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::badge::{RenderedBadge, render_rating};
use crate::domain::BadgeConfig;
use crate::error::AppError;
use crate::io::{
    ArchiveSummary, Manifest, Rasterizer, collect_ratings, create_archive, ensure_dir, list_svg_files,
    write_badge_svg, write_manifest_json,
};
use crate::report::{BatchReport, ItemFailure};

/// Outputs of the generate stage.
#[derive(Debug, Clone, Default)]
pub struct GenerateOutput {
    pub badges: Vec<RenderedBadge>,
    pub report: BatchReport,
}

/// Render and write one SVG per rating.
///
/// Returns an empty output (not an error) when there is nothing to render.
pub fn run_generate(config: &BadgeConfig) -> Result<GenerateOutput, AppError> {
    let (ratings, source) = collect_ratings(&config.ratings, &config.ratings_file);
    if ratings.is_empty() {
        info!(%source, "no ratings to process");
        return Ok(GenerateOutput::default());
    }
    info!(%source, count = ratings.len(), dir = %config.svg_dir.display(), "rendering badges");

    ensure_dir(&config.svg_dir)?;

    let outcomes: Vec<(RenderedBadge, Result<PathBuf, ItemFailure>)> = ratings
        .par_iter()
        .map(|rating| {
            let badge = render_rating(rating);
            if badge.value.is_none() {
                warn!(rating = %rating, "rating is not numeric; using the default gradient");
            }
            let written = write_badge_svg(&config.svg_dir, &badge);
            (badge, written)
        })
        .collect();

    if let Some(path) = &config.manifest {
        write_manifest_json(path, &Manifest::new(&outcomes))?;
        info!(path = %path.display(), "wrote manifest");
    }

    let mut badges = Vec::with_capacity(outcomes.len());
    let mut results = Vec::with_capacity(outcomes.len());
    for (badge, written) in outcomes {
        badges.push(badge);
        results.push(written);
    }

    Ok(GenerateOutput {
        badges,
        report: BatchReport::from_results(results),
    })
}

/// Rasterize every SVG in the SVG directory into the PNG directory.
pub fn run_convert(config: &BadgeConfig) -> Result<BatchReport, AppError> {
    let rasterizer = Rasterizer::new(config.scale)?;
    ensure_dir(&config.png_dir)?;

    let svg_files = list_svg_files(&config.svg_dir)?;
    if svg_files.is_empty() {
        info!(dir = %config.svg_dir.display(), "no SVG files to convert");
        return Ok(BatchReport::default());
    }

    info!(count = svg_files.len(), "converting SVG files");
    Ok(rasterizer.convert_all(&svg_files, &config.png_dir))
}

/// Zip the PNG directory.
pub fn run_archive(config: &BadgeConfig) -> Result<ArchiveSummary, AppError> {
    create_archive(&config.png_dir, &config.zip_path)
}

/// All three stages. Archiving only starts once every conversion finished.
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub generate: GenerateOutput,
    pub convert: BatchReport,
    pub archive: Option<ArchiveSummary>,
}

pub fn run_build(config: &BadgeConfig) -> Result<BuildOutput, AppError> {
    let generate = run_generate(config)?;
    if generate.badges.is_empty() {
        return Ok(BuildOutput {
            generate,
            convert: BatchReport::default(),
            archive: None,
        });
    }

    let convert = run_convert(config)?;
    let archive = run_archive(config)?;
    Ok(BuildOutput {
        generate,
        convert,
        archive: Some(archive),
    })
}

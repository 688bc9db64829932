//! Command-line parsing for the rating badge generator.
//!
//! Argument parsing and command dispatch stay here; nothing in this module
//! touches the filesystem. Every path option can also be set through a
//! `RATING_BADGE_*` environment variable (a `.env` file is honored).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rating-badge", version, about = "Render rating strings into SVG/PNG badges")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render rating strings into SVG files.
    Generate(GenerateArgs),
    /// Rasterize every SVG in the SVG directory to PNG.
    Convert(ConvertArgs),
    /// Package every PNG into a single ZIP archive.
    Archive(ArchiveArgs),
    /// Run generate, convert and archive in sequence.
    Build(BuildArgs),
}

/// Options for SVG generation.
#[derive(Debug, Parser, Clone)]
pub struct GenerateArgs {
    /// Rating strings to render (e.g. 17.555). When omitted, the ratings file is read.
    #[arg(value_name = "RATING")]
    pub ratings: Vec<String>,

    /// Newline-delimited ratings file; blank lines and `#` comments are skipped.
    #[arg(long, env = "RATING_BADGE_RATINGS_FILE", default_value = "ratings.txt")]
    pub ratings_file: PathBuf,

    /// Output directory for SVG files.
    #[arg(long, env = "RATING_BADGE_SVG_DIR", default_value = "output/svg")]
    pub svg_dir: PathBuf,

    /// Also write a JSON manifest describing every rendered rating.
    #[arg(long, value_name = "JSON")]
    pub manifest: Option<PathBuf>,
}

/// Options for PNG conversion.
#[derive(Debug, Parser, Clone)]
pub struct ConvertArgs {
    /// Directory to read SVG files from.
    #[arg(long, env = "RATING_BADGE_SVG_DIR", default_value = "output/svg")]
    pub svg_dir: PathBuf,

    #[command(flatten)]
    pub raster: RasterArgs,
}

/// PNG output options shared by `convert` and `build`.
#[derive(Debug, Parser, Clone)]
pub struct RasterArgs {
    /// Output directory for PNG files.
    #[arg(long, env = "RATING_BADGE_PNG_DIR", default_value = "output/png")]
    pub png_dir: PathBuf,

    /// Raster scale relative to the 160x160 badge (2.0 -> 320x320 px).
    #[arg(long, env = "RATING_BADGE_SCALE", default_value_t = 1.0)]
    pub scale: f32,
}

/// Options for archiving.
#[derive(Debug, Parser, Clone)]
pub struct ArchiveArgs {
    /// Directory whose files are archived.
    #[arg(long, env = "RATING_BADGE_PNG_DIR", default_value = "output/png")]
    pub png_dir: PathBuf,

    #[command(flatten)]
    pub zip: ZipArgs,
}

/// ZIP output options shared by `archive` and `build`.
#[derive(Debug, Parser, Clone)]
pub struct ZipArgs {
    /// Archive file to create (parent directories are created as needed).
    #[arg(long, env = "RATING_BADGE_ZIP_PATH", default_value = "output/zip/rating-emojis.zip")]
    pub zip_path: PathBuf,
}

/// Options for the full pipeline.
#[derive(Debug, Parser, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(flatten)]
    pub raster: RasterArgs,

    #[command(flatten)]
    pub zip: ZipArgs,
}

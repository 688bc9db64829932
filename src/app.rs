//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initializes logging
//! - parses CLI arguments into a `BadgeConfig`
//! - runs the requested pipeline stage(s)
//! - prints the stage summaries

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{ArchiveArgs, BuildArgs, Command, ConvertArgs, GenerateArgs};
use crate::domain::BadgeConfig;
use crate::error::AppError;
use crate::report::{format_archive_summary, format_stage_summary, format_tier_breakdown};

pub mod pipeline;

/// Entry point for the `rating-badge` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    // `rating-badge` and `rating-badge 17.555 18` behave like `rating-badge build ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Generate(args) => handle_generate(args),
        Command::Convert(args) => handle_convert(args),
        Command::Archive(args) => handle_archive(args),
        Command::Build(args) => handle_build(args),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Keep whichever subscriber was installed first.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn handle_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = BadgeConfig {
        ratings: args.ratings,
        ratings_file: args.ratings_file,
        svg_dir: args.svg_dir,
        manifest: args.manifest,
        ..BadgeConfig::default()
    };
    let out = pipeline::run_generate(&config)?;

    if out.badges.is_empty() {
        println!("No ratings to process.");
        return Ok(());
    }
    print!("{}", format_stage_summary("SVG", &out.report));
    println!("{}", format_tier_breakdown(&out.badges));
    Ok(())
}

fn handle_convert(args: ConvertArgs) -> Result<(), AppError> {
    let config = BadgeConfig {
        svg_dir: args.svg_dir,
        png_dir: args.raster.png_dir,
        scale: args.raster.scale,
        ..BadgeConfig::default()
    };
    let report = pipeline::run_convert(&config)?;
    print!("{}", format_stage_summary("PNG", &report));
    Ok(())
}

fn handle_archive(args: ArchiveArgs) -> Result<(), AppError> {
    let config = BadgeConfig {
        png_dir: args.png_dir,
        zip_path: args.zip.zip_path,
        ..BadgeConfig::default()
    };
    let summary = pipeline::run_archive(&config)?;
    print_archive(&summary);
    Ok(())
}

fn handle_build(args: BuildArgs) -> Result<(), AppError> {
    let config = build_config_from_args(&args);
    let out = pipeline::run_build(&config)?;

    if out.generate.badges.is_empty() {
        println!("No ratings to process.");
        return Ok(());
    }
    print!("{}", format_stage_summary("SVG", &out.generate.report));
    println!("{}", format_tier_breakdown(&out.generate.badges));
    print!("{}", format_stage_summary("PNG", &out.convert));
    if let Some(summary) = &out.archive {
        print_archive(summary);
    }
    Ok(())
}

fn print_archive(summary: &crate::io::ArchiveSummary) {
    if !summary.report.is_clean() {
        print!("{}", format_stage_summary("ZIP", &summary.report));
    }
    println!(
        "{}",
        format_archive_summary(&summary.path, summary.report.written.len(), summary.bytes)
    );
}

pub fn build_config_from_args(args: &BuildArgs) -> BadgeConfig {
    BadgeConfig {
        ratings: args.generate.ratings.clone(),
        ratings_file: args.generate.ratings_file.clone(),
        svg_dir: args.generate.svg_dir.clone(),
        png_dir: args.raster.png_dir.clone(),
        zip_path: args.zip.zip_path.clone(),
        scale: args.raster.scale,
        manifest: args.generate.manifest.clone(),
    }
}

/// Rewrite argv so `rating-badge` defaults to `rating-badge build`.
///
/// Rules:
/// - `rating-badge`                   -> `rating-badge build`
/// - `rating-badge 17.555 18`         -> `rating-badge build 17.555 18`
/// - `rating-badge --svg-dir x ...`   -> `rating-badge build --svg-dir x ...`
/// - `rating-badge --help/--version`  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("build".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    let is_subcommand = matches!(arg1.as_str(), "generate" | "convert" | "archive" | "build");
    if is_top_level_help_or_version || is_subcommand {
        return argv;
    }

    argv.insert(1, "build".to_string());
    argv
}

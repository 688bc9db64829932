//! End-to-end pipeline tests: ratings in, SVG/PNG files and a ZIP out.

use std::fs::{self, File};
use std::path::Path;
use std::process::Command;

use rating_badge::app::pipeline::run_build;
use rating_badge::domain::BadgeConfig;

fn rating_badge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_rating-badge")
}

fn zip_entry_names(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

#[test]
fn build_produces_svgs_pngs_and_archive() {
    let dir = tempfile::tempdir().unwrap();
    let config = BadgeConfig {
        ratings: vec!["17.555".into(), "22.000".into(), ".5".into(), "x".into()],
        ratings_file: dir.path().join("ratings.txt"),
        svg_dir: dir.path().join("output/svg"),
        png_dir: dir.path().join("output/png"),
        zip_path: dir.path().join("output/zip/rating-emojis.zip"),
        scale: 1.0,
        manifest: None,
    };

    let out = run_build(&config).unwrap();
    assert!(out.generate.report.is_clean());
    assert_eq!(out.generate.report.written.len(), 4);
    assert!(out.convert.is_clean(), "{:?}", out.convert.failed);
    assert_eq!(out.convert.written.len(), 4);

    let svg = fs::read_to_string(config.svg_dir.join("17.555.svg")).unwrap();
    assert!(svg.contains(r#"id="gold""#));
    assert!(svg.contains(r#"<tspan dx="5">555</tspan>"#));

    let archive = out.archive.expect("archive stage ran");
    assert_eq!(archive.path, config.zip_path);
    assert_eq!(
        zip_entry_names(&config.zip_path),
        vec![".5.png", "17.555.png", "22.000.png", "x.png"]
    );
}

#[test]
fn cli_generate_writes_requested_ratings() {
    let dir = tempfile::tempdir().unwrap();
    let svg_dir = dir.path().join("svg");
    let manifest = dir.path().join("manifest.json");

    let output = Command::new(rating_badge_bin())
        .current_dir(dir.path())
        .env_remove("RATING_BADGE_SVG_DIR")
        .args(["generate", "--svg-dir"])
        .arg(&svg_dir)
        .arg("--manifest")
        .arg(&manifest)
        .args(["17.000", "3"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SVG: 2 written, 0 failed"), "{stdout}");
    assert!(stdout.contains("GOLD=1"), "{stdout}");
    assert!(svg_dir.join("17.000.svg").is_file());
    assert!(svg_dir.join("3.svg").is_file());
    assert!(manifest.is_file());
}

#[test]
fn cli_generate_without_ratings_file_succeeds_with_nothing_to_do() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(rating_badge_bin())
        .current_dir(dir.path())
        .env_remove("RATING_BADGE_RATINGS_FILE")
        .env_remove("RATING_BADGE_SVG_DIR")
        .arg("generate")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No ratings to process."));
    assert!(!dir.path().join("output").exists());
}

#[test]
fn cli_archive_without_png_dir_exits_with_config_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(rating_badge_bin())
        .current_dir(dir.path())
        .env_remove("RATING_BADGE_PNG_DIR")
        .env_remove("RATING_BADGE_ZIP_PATH")
        .arg("archive")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("run `convert` first"));
}

//! SVG -> PNG rasterization via `resvg`.
//!
//! System fonts are loaded once per run and shared by every worker; each file
//! is parsed and rendered independently so one bad file only costs itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use resvg::{tiny_skia, usvg};
use tracing::{error, info};

use crate::error::AppError;
use crate::report::{BatchReport, ItemFailure};

/// Renders SVG documents to PNG at a fixed scale.
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    scale: f32,
}

impl Rasterizer {
    pub fn new(scale: f32) -> Result<Self, AppError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(AppError::new(2, format!("Raster scale must be a positive number (got {scale}).")));
        }

        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        info!(faces = fontdb.len(), "loaded system fonts");

        Ok(Self {
            fontdb: Arc::new(fontdb),
            scale,
        })
    }

    /// Render one SVG document to PNG bytes.
    pub fn render_png(&self, svg: &[u8]) -> Result<Vec<u8>, String> {
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_data(svg, &options).map_err(|e| format!("invalid SVG: {e}"))?;

        let size = tree.size();
        let width = (size.width() * self.scale).ceil() as u32;
        let height = (size.height() * self.scale).ceil() as u32;
        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| format!("cannot allocate a {width}x{height} pixmap"))?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(self.scale, self.scale),
            &mut pixmap.as_mut(),
        );
        pixmap.encode_png().map_err(|e| format!("PNG encoding failed: {e}"))
    }

    /// Convert `svg_path` into `<png_dir>/<stem>.png`.
    pub fn convert_file(&self, svg_path: &Path, png_dir: &Path) -> Result<PathBuf, ItemFailure> {
        let item = svg_path.display().to_string();
        let fail = |message: String| {
            error!(file = %item, "{message}");
            ItemFailure {
                item: item.clone(),
                message,
            }
        };

        let stem = svg_path
            .file_stem()
            .ok_or_else(|| fail("file has no name".to_string()))?;
        let mut png_name = stem.to_os_string();
        png_name.push(".png");
        let out_path = png_dir.join(png_name);

        let svg = fs::read(svg_path).map_err(|e| fail(format!("failed to read: {e}")))?;
        let png = self.render_png(&svg).map_err(&fail)?;
        fs::write(&out_path, png).map_err(|e| fail(format!("failed to write '{}': {e}", out_path.display())))?;

        info!(from = %svg_path.display(), to = %out_path.display(), "converted");
        Ok(out_path)
    }

    /// Convert every file in parallel; failures are collected, not propagated.
    pub fn convert_all(&self, svg_paths: &[PathBuf], png_dir: &Path) -> BatchReport {
        let results: Vec<_> = svg_paths
            .par_iter()
            .map(|path| self.convert_file(path, png_dir))
            .collect();
        BatchReport::from_results(results)
    }
}

/// `*.svg` files directly inside `dir`, sorted by name.
pub fn list_svg_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let entries = fs::read_dir(dir).map_err(|e| AppError::directory("read SVG", dir, e))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        })
        .collect();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::badge::render_rating;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        let w = u32::from_be_bytes(png[16..20].try_into().unwrap());
        let h = u32::from_be_bytes(png[20..24].try_into().unwrap());
        (w, h)
    }

    #[test]
    fn rejects_non_positive_scale() {
        assert_eq!(Rasterizer::new(0.0).err().map(|e| e.exit_code()), Some(2));
        assert!(Rasterizer::new(f32::NAN).is_err());
    }

    #[test]
    fn renders_badge_at_viewbox_size() {
        let raster = Rasterizer::new(1.0).unwrap();
        let png = raster.render_png(render_rating("17.555").svg.as_bytes()).unwrap();
        assert_eq!(png[..8], PNG_SIGNATURE);
        assert_eq!(png_dimensions(&png), (160, 160));
    }

    #[test]
    fn scale_multiplies_output_size() {
        let raster = Rasterizer::new(2.0).unwrap();
        let png = raster.render_png(render_rating("9").svg.as_bytes()).unwrap();
        assert_eq!(png_dimensions(&png), (320, 320));
    }

    #[test]
    fn broken_svg_fails_only_that_file() {
        let dir = tempfile::tempdir().unwrap();
        let svg_dir = dir.path().join("svg");
        let png_dir = dir.path().join("png");
        fs::create_dir_all(&svg_dir).unwrap();
        fs::create_dir_all(&png_dir).unwrap();
        fs::write(svg_dir.join("17.555.svg"), render_rating("17.555").svg).unwrap();
        fs::write(svg_dir.join("bad.svg"), "<svg").unwrap();

        let raster = Rasterizer::new(1.0).unwrap();
        let files = list_svg_files(&svg_dir).unwrap();
        let report = raster.convert_all(&files, &png_dir);

        assert_eq!(report.written, vec![png_dir.join("17.555.png")]);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].item.ends_with("bad.svg"));
        assert!(!png_dir.join("bad.png").exists());
    }

    #[test]
    fn lists_only_svg_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.svg", "a.SVG", "notes.txt", "c.svg.bak"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let names: Vec<_> = list_svg_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.SVG", "b.svg"]);
    }

    #[test]
    fn missing_svg_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_svg_files(&dir.path().join("nope")).is_err());
    }
}

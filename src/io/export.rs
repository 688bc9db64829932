//! SVG file output.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::badge::RenderedBadge;
use crate::error::AppError;
use crate::report::ItemFailure;

/// Create `dir` (and parents) if it does not exist yet.
pub fn ensure_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|e| AppError::directory("create", dir, e))?;
    debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}

/// File name for a rating's badge, or `None` when the rating cannot be used
/// as a single path component.
pub fn badge_file_name(rating: &str, extension: &str) -> Option<String> {
    let usable = !rating.is_empty()
        && rating != "."
        && rating != ".."
        && !rating.contains(['/', '\\', '\0']);
    usable.then(|| format!("{rating}.{extension}"))
}

/// Write one rendered badge as `<dir>/<rating>.svg`.
pub fn write_badge_svg(dir: &Path, badge: &RenderedBadge) -> Result<PathBuf, ItemFailure> {
    let fail = |message: String| {
        error!(rating = %badge.rating, "{message}");
        ItemFailure {
            item: badge.rating.clone(),
            message,
        }
    };

    let name = badge_file_name(&badge.rating, "svg")
        .ok_or_else(|| fail("rating cannot be used as a file name".to_string()))?;
    let path = dir.join(name);
    fs::write(&path, &badge.svg).map_err(|e| fail(format!("failed to write '{}': {e}", path.display())))?;

    info!(path = %path.display(), tier = badge.tier.display_name(), "wrote SVG");
    Ok(path)
}

//! Rating string ingest.
//!
//! Ratings come either from the command line or from a newline-delimited
//! ratings file. Either way the pipeline receives trimmed, non-empty strings.
//! A missing or unreadable ratings file is not fatal: it just means there is
//! nothing to generate.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{error, info, warn};

/// Where the ratings for a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSource {
    Args,
    File,
}

impl fmt::Display for RatingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RatingSource::Args => "args",
            RatingSource::File => "file",
        })
    }
}

/// Resolve the rating list for a run.
///
/// Command-line ratings win; the ratings file is only consulted when none
/// were given.
pub fn collect_ratings(args: &[String], ratings_file: &Path) -> (Vec<String>, RatingSource) {
    if !args.is_empty() {
        let ratings: Vec<String> = args
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        info!(count = ratings.len(), "using ratings from command line");
        return (ratings, RatingSource::Args);
    }

    info!(file = %ratings_file.display(), "no ratings given; reading ratings file");
    (read_ratings_file(ratings_file), RatingSource::File)
}

/// Read a ratings file, logging (not propagating) failures.
pub fn read_ratings_file(path: &Path) -> Vec<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(file = %path.display(), "ratings file not found; no badges will be generated");
            return Vec::new();
        }
        Err(e) => {
            error!(file = %path.display(), error = %e, "failed to read ratings file");
            return Vec::new();
        }
    };

    let ratings = parse_ratings(&content);
    if ratings.is_empty() {
        warn!(file = %path.display(), "ratings file has no usable ratings");
    } else {
        info!(file = %path.display(), count = ratings.len(), "loaded ratings");
    }
    ratings
}

/// Split file content into ratings: one per line, `#` comments and blank
/// lines skipped. `str::lines` already handles both `\n` and `\r\n`.
///
/// A leading UTF-8 byte order mark is dropped; `str::trim` does not treat
/// U+FEFF as whitespace.
pub fn parse_ratings(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

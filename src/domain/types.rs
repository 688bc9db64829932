//! Shared domain types.
//!
//! These are kept small and `Copy`/borrowed where possible so the rendering
//! core can stay allocation-light and trivially shareable across rayon workers.

use std::path::PathBuf;

use serde::Serialize;

/// A rating string split at its first decimal point.
///
/// `upper` never contains the dot; `lower` is either empty or starts with it,
/// so `upper + lower` always reproduces the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedRating<'a> {
    pub upper: &'a str,
    pub lower: &'a str,
}

/// Numeric rating used only to pick a gradient tier.
///
/// Construction rejects NaN, so every `RatingValue` lands in exactly one tier.
/// "No value" is expressed as `Option::<RatingValue>::None`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct RatingValue(f64);

impl RatingValue {
    pub fn new(value: f64) -> Option<Self> {
        if value.is_nan() { None } else { Some(Self(value)) }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Visual style bucket; each tier owns exactly one gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradientTier {
    Default,
    Kiwami,
    AuraUra,
    Aura,
    Rainbow,
    Platinum,
    Gold,
    Silver,
    Bronze,
    Purple,
    Red,
    Orange,
    Green,
    Blue,
}

impl GradientTier {
    /// Every tier, in catalog order.
    pub const ALL: [GradientTier; 14] = [
        GradientTier::Default,
        GradientTier::Kiwami,
        GradientTier::AuraUra,
        GradientTier::Aura,
        GradientTier::Rainbow,
        GradientTier::Platinum,
        GradientTier::Gold,
        GradientTier::Silver,
        GradientTier::Bronze,
        GradientTier::Purple,
        GradientTier::Red,
        GradientTier::Orange,
        GradientTier::Green,
        GradientTier::Blue,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            GradientTier::Default => "DEFAULT",
            GradientTier::Kiwami => "KIWAMI",
            GradientTier::AuraUra => "AURA_URA",
            GradientTier::Aura => "AURA",
            GradientTier::Rainbow => "RAINBOW",
            GradientTier::Platinum => "PLATINUM",
            GradientTier::Gold => "GOLD",
            GradientTier::Silver => "SILVER",
            GradientTier::Bronze => "BRONZE",
            GradientTier::Purple => "PURPLE",
            GradientTier::Red => "RED",
            GradientTier::Orange => "ORANGE",
            GradientTier::Green => "GREEN",
            GradientTier::Blue => "BLUE",
        }
    }

    /// Position in `ALL` (and in the gradient table).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Resolved run configuration (CLI flags + environment).
#[derive(Debug, Clone)]
pub struct BadgeConfig {
    /// Ratings given on the command line; when empty, `ratings_file` is read.
    pub ratings: Vec<String>,
    pub ratings_file: PathBuf,
    pub svg_dir: PathBuf,
    pub png_dir: PathBuf,
    pub zip_path: PathBuf,
    /// Raster scale relative to the 160x160 viewBox.
    pub scale: f32,
    pub manifest: Option<PathBuf>,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            ratings: Vec::new(),
            ratings_file: PathBuf::from("ratings.txt"),
            svg_dir: PathBuf::from("output/svg"),
            png_dir: PathBuf::from("output/png"),
            zip_path: PathBuf::from("output/zip/rating-emojis.zip"),
            scale: 1.0,
            manifest: None,
        }
    }
}

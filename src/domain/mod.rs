//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the parsed form of a rating string (`ParsedRating`)
//! - the NaN-free numeric value used for tier selection (`RatingValue`)
//! - the closed set of gradient tiers (`GradientTier`)
//! - resolved run configuration (`BadgeConfig`)

pub mod types;

pub use types::*;

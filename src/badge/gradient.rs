//! Gradient tiers: the fixed color table and the value -> tier ladder.
//!
//! Every gradient is a vertical (top-to-bottom) `<linearGradient>` with one to
//! four stops. The stop data below is part of the badge's visual identity and
//! the generated markup must stay byte-stable across releases.

use std::sync::LazyLock;

use crate::domain::{GradientTier, RatingValue};

/// One `(offset %, #rrggbb)` gradient stop.
type Stop = (u8, &'static str);

/// A renderable gradient: its fragment id and the `<linearGradient>` markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientDefinition {
    pub id: &'static str,
    pub markup: String,
}

/// Immutable tier -> gradient table, built once per process.
#[derive(Debug)]
pub struct GradientCatalog {
    definitions: Vec<GradientDefinition>,
}

static CATALOG: LazyLock<GradientCatalog> = LazyLock::new(GradientCatalog::build);

impl GradientCatalog {
    /// Shared catalog instance.
    pub fn get() -> &'static GradientCatalog {
        &CATALOG
    }

    fn build() -> Self {
        let definitions = GradientTier::ALL
            .iter()
            .map(|&tier| {
                let (id, stops) = palette(tier);
                GradientDefinition {
                    id,
                    markup: linear_gradient(id, stops),
                }
            })
            .collect();
        Self { definitions }
    }

    /// Definition for `tier`. Total: the table holds one entry per tier.
    pub fn lookup(&self, tier: GradientTier) -> &GradientDefinition {
        &self.definitions[tier.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (GradientTier, &GradientDefinition)> {
        GradientTier::ALL.into_iter().zip(self.definitions.iter())
    }
}

/// Look up a tier in the shared catalog.
pub fn lookup(tier: GradientTier) -> &'static GradientDefinition {
    GradientCatalog::get().lookup(tier)
}

/// Pick the tier for a rating value. Thresholds are inclusive lower bounds,
/// checked from the highest down.
pub fn select_tier(value: Option<RatingValue>) -> GradientTier {
    let Some(value) = value else {
        return GradientTier::Default;
    };
    let v = value.get();

    if v >= 22.0 {
        GradientTier::Kiwami
    } else if v >= 21.0 {
        GradientTier::AuraUra
    } else if v >= 20.0 {
        GradientTier::Aura
    } else if v >= 19.0 {
        GradientTier::Rainbow
    } else if v >= 18.0 {
        GradientTier::Platinum
    } else if v >= 17.0 {
        GradientTier::Gold
    } else if v >= 15.0 {
        GradientTier::Silver
    } else if v >= 13.0 {
        GradientTier::Bronze
    } else if v >= 11.0 {
        GradientTier::Purple
    } else if v >= 9.0 {
        GradientTier::Red
    } else if v >= 7.0 {
        GradientTier::Orange
    } else if v >= 4.0 {
        GradientTier::Green
    } else {
        GradientTier::Blue
    }
}

fn palette(tier: GradientTier) -> (&'static str, &'static [Stop]) {
    match tier {
        GradientTier::Default => ("defaultGradient", &[(0, "#ffffff")]),
        GradientTier::Kiwami => ("kiwami", &[(20, "#fffc00"), (40, "#ff00d8"), (75, "#4cf593")]),
        GradientTier::AuraUra => ("auraUra", &[(20, "#61b2ff"), (40, "#1cfb4a"), (75, "#ffdc34")]),
        GradientTier::Aura => ("aura", &[(20, "#f7fe12"), (40, "#00ffff"), (75, "#fe70d3")]),
        GradientTier::Rainbow => ("rainbow", &[(20, "#f7fe12"), (40, "#00ffff"), (75, "#fe70d3")]),
        GradientTier::Platinum => (
            "platinum",
            &[(28, "#ffe387"), (50, "#fff8c9"), (51, "#ffce68"), (80, "#fff8c9")],
        ),
        GradientTier::Gold => (
            "gold",
            &[(28, "#efba00"), (50, "#fff8c9"), (51, "#cd7200"), (75, "#fff8c9")],
        ),
        GradientTier::Silver => (
            "silver",
            &[(30, "#828181"), (50, "#cbc9c9"), (51, "#cbc9c9"), (60, "#828181")],
        ),
        GradientTier::Bronze => (
            "bronze",
            &[(25, "#ffa200"), (50, "#c64000"), (51, "#ffa200"), (75, "#c64000")],
        ),
        GradientTier::Purple => ("purple", &[(0, "#ba00ef")]),
        GradientTier::Red => ("red", &[(0, "#ef2d00")]),
        GradientTier::Orange => ("orange", &[(0, "#ef9d00")]),
        GradientTier::Green => ("green", &[(0, "#00d747")]),
        GradientTier::Blue => ("blue", &[(0, "#00b6bd")]),
    }
}

fn linear_gradient(id: &str, stops: &[Stop]) -> String {
    let mut out = format!(r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="0%" y2="100%">"#);
    for (offset, color) in stops {
        out.push_str(&format!("\n  <stop offset=\"{offset}%\" stop-color=\"{color}\" />"));
    }
    out.push_str("\n</linearGradient>");
    out
}

//! SVG badge composition.
//!
//! A badge is two stacked text segments on a transparent 160x160 canvas: the
//! integer part large and left-anchored on top, the fractional part smaller
//! and right-anchored below. Each segment is drawn twice (black outline
//! first, gradient fill on top) so the text stays legible on any background.

use serde::Serialize;

use crate::badge::gradient::{lookup, select_tier};
use crate::badge::parser::{parse, parse_rating_value};
use crate::domain::{GradientTier, ParsedRating, RatingValue};

pub const VIEWBOX_WIDTH: u32 = 160;
pub const VIEWBOX_HEIGHT: u32 = 160;
pub const FONT_FAMILY: &str = "'M PLUS 1p', sans-serif";
pub const FONT_WEIGHT: &str = "900";
pub const DOMINANT_BASELINE: &str = "middle";
pub const STROKE_COLOR: &str = "black";

/// Horizontal nudge applied to a leading dot (and undone for the rest).
pub const DOT_DX: i32 = -5;
/// Dot glyph size relative to its segment.
pub const DOT_FONT_SCALE: f64 = 0.4;

/// Placement and stroke settings for one text segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentStyle {
    pub anchor: &'static str,
    pub x: &'static str,
    pub y: u32,
    pub font_size: u32,
    pub stroke_width: u32,
    pub letter_spacing: Option<u32>,
}

pub const UPPER_STYLE: SegmentStyle = SegmentStyle {
    anchor: "start",
    x: "3.5%",
    y: 58,
    font_size: 110,
    stroke_width: 12,
    letter_spacing: Some(4),
};

pub const LOWER_STYLE: SegmentStyle = SegmentStyle {
    anchor: "end",
    x: "102%",
    y: 134,
    font_size: 70,
    stroke_width: 8,
    letter_spacing: None,
};

/// Render a parsed rating into a complete SVG document.
pub fn render(rating: &ParsedRating<'_>, value: Option<RatingValue>) -> String {
    let gradient = lookup(select_tier(value));

    let mut out = String::with_capacity(gradient.markup.len() + 1024);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEWBOX_WIDTH} {VIEWBOX_HEIGHT}"><defs>{}</defs>"#,
        gradient.markup
    ));
    push_segment(&mut out, rating.upper, &UPPER_STYLE, gradient.id);
    push_segment(&mut out, rating.lower, &LOWER_STYLE, gradient.id);
    out.push_str("</svg>");
    out
}

/// A rendered badge plus the facts that went into it.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedBadge {
    pub rating: String,
    pub upper: String,
    pub lower: String,
    pub value: Option<RatingValue>,
    pub tier: GradientTier,
    pub gradient_id: &'static str,
    #[serde(skip)]
    pub svg: String,
}

/// Parse, value-normalize, and render one raw rating string.
pub fn render_rating(input: &str) -> RenderedBadge {
    let parsed = parse(input);
    let value = parse_rating_value(input);
    let tier = select_tier(value);
    RenderedBadge {
        rating: input.to_string(),
        upper: parsed.upper.to_string(),
        lower: parsed.lower.to_string(),
        value,
        tier,
        gradient_id: lookup(tier).id,
        svg: render(&parsed, value),
    }
}

fn push_segment(out: &mut String, text: &str, style: &SegmentStyle, gradient_id: &str) {
    if text.is_empty() {
        return;
    }

    let content = segment_content(text, style.font_size);
    let spacing = style
        .letter_spacing
        .map(|ls| format!(r#" letter-spacing="{ls}""#))
        .unwrap_or_default();
    let common = format!(
        r#"x="{}" y="{}" font-family="{FONT_FAMILY}" font-size="{}px" font-weight="{FONT_WEIGHT}" text-anchor="{}" dominant-baseline="{DOMINANT_BASELINE}""#,
        style.x, style.y, style.font_size, style.anchor
    );

    out.push_str(&format!(
        r#"<text {common} stroke="{STROKE_COLOR}" stroke-width="{}" fill="none"{spacing}>{content}</text>"#,
        style.stroke_width
    ));
    out.push_str(&format!(
        r#"<text {common} fill="url(#{gradient_id})"{spacing}>{content}</text>"#
    ));
}

/// Text body for a segment; a leading dot is shrunk and tucked left.
fn segment_content(text: &str, font_size: u32) -> String {
    match text.strip_prefix('.') {
        Some(rest) => {
            let dot_size = (f64::from(font_size) * DOT_FONT_SCALE).round() as u32;
            format!(
                r#"<tspan dx="{DOT_DX}" font-size="{dot_size}px">.</tspan><tspan dx="{}">{}</tspan>"#,
                -DOT_DX,
                escape_text(rest)
            )
        }
        None => escape_text(text),
    }
}

fn escape_text(text: &str) -> String {
    if !text.contains(['&', '<', '>']) {
        return text.to_string();
    }
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

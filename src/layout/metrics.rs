//! Text measurement and word wrapping.

use crate::layout::{FontFamily, FontSpec, FontStyle};

/// Width measurement for a run of text in a given font.
///
/// The layout engine is generic over this trait so a drawing backend with
/// real glyph metrics can drive the same layout code; [`ApproxMetrics`] is
/// the built-in backend-free implementation.
pub trait TextMetrics {
    /// Rendered width of `text` in canvas units.
    fn text_width(&self, text: &str, font: &FontSpec) -> f32;
}

/// Point-to-canvas-unit scale (points to millimeters).
const PT_TO_UNIT: f32 = 25.4 / 72.0;

/// Average-advance text measurement.
///
/// Approximates each glyph as a fixed fraction of the font size. Good enough
/// for stable pagination; not a substitute for real font metrics when exact
/// line breaks against a specific face matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMetrics;

impl TextMetrics for ApproxMetrics {
    fn text_width(&self, text: &str, font: &FontSpec) -> f32 {
        let advance = match font.family {
            FontFamily::Monospace => 0.60,
            FontFamily::Proportional => match font.style {
                FontStyle::Bold => 0.54,
                _ => 0.50,
            },
        };
        text.chars().count() as f32 * font.size * advance * PT_TO_UNIT
    }
}

/// Greedy word wrap of `text` against `max_width`.
///
/// Source newlines are preserved as line boundaries. A word wider than the
/// full line width is split at character granularity so no input can stall
/// the wrapper.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font: &FontSpec,
    metrics: &impl TextMetrics,
) -> Vec<String> {
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut current = String::new();

        for word in raw.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };

            if metrics.text_width(&candidate, font) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }

            // The word alone may still exceed the line; break it by chars.
            let mut piece = String::new();
            for ch in word.chars() {
                piece.push(ch);
                if metrics.text_width(&piece, font) > max_width && piece.chars().count() > 1 {
                    let overflow = piece.pop().unwrap();
                    lines.push(std::mem::take(&mut piece));
                    piece.push(overflow);
                }
            }
            current = piece;
        }

        lines.push(current);
    }

    lines
}

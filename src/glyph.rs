//! Capabilities the pipeline needs from a font backend.
//!
//! The layout code only ever talks to these traits. The font itself is chosen
//! when the backend is built, so none of the methods take a font argument.

use euclid::default::Point2D;

use crate::renderer::{Bitmap, PackedColor};

/// Measures characters with the backend's font.
pub trait GlyphMetricsProvider {
    /// Returns one advance width per character in `text`.
    fn measure(&self, text: &[char], font_size: f32) -> Vec<f32>;

    /// Distance between consecutive baselines.
    fn font_spacing(&self, font_size: f32) -> f32;

    /// Distance from the baseline to the top of the line.
    ///
    /// Follows the y-down convention, so the value is usually negative.
    fn ascent(&self, font_size: f32) -> f32;
}

/// Paints text into a bitmap.
pub trait GlyphRasterizer {
    /// Draws `text` with its first pen position at `baseline_origin`.
    ///
    /// `baseline_origin.y` is the baseline, not the top of the line.
    fn draw_text(
        &self,
        bitmap: &mut Bitmap,
        text: &[char],
        baseline_origin: Point2D<f32>,
        color: PackedColor,
        font_size: f32,
    );
}

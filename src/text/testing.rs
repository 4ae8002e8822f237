//! Deterministic glyph backend for tests.

use std::collections::HashMap;

use euclid::default::Point2D;
use parking_lot::Mutex;

use crate::{
    glyph::{GlyphMetricsProvider, GlyphRasterizer},
    renderer::{Bitmap, PackedColor},
};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub text: String,
    pub origin: Point2D<f32>,
    pub color: PackedColor,
    pub font_size: f32,
}

/// Every character advances by the same amount unless overridden, and is
/// painted as a solid block from the ascent line down to the baseline.
pub struct FixedAdvance {
    advance: f32,
    spacing: f32,
    overrides: HashMap<char, f32, fxhash::FxBuildHasher>,
    calls: Mutex<Vec<DrawCall>>,
}

impl FixedAdvance {
    pub fn new(advance: f32, spacing: f32) -> Self {
        Self {
            advance,
            spacing,
            overrides: HashMap::default(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_width(mut self, ch: char, width: f32) -> Self {
        self.overrides.insert(ch, width);
        self
    }

    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.lock().clone()
    }

    fn width_of(&self, ch: char) -> f32 {
        self.overrides.get(&ch).copied().unwrap_or(self.advance)
    }
}

impl GlyphMetricsProvider for FixedAdvance {
    fn measure(&self, text: &[char], _font_size: f32) -> Vec<f32> {
        text.iter().map(|&ch| self.width_of(ch)).collect()
    }

    fn font_spacing(&self, _font_size: f32) -> f32 {
        self.spacing
    }

    fn ascent(&self, _font_size: f32) -> f32 {
        -0.75 * self.spacing
    }
}

impl GlyphRasterizer for FixedAdvance {
    fn draw_text(
        &self,
        bitmap: &mut Bitmap,
        text: &[char],
        baseline_origin: Point2D<f32>,
        color: PackedColor,
        font_size: f32,
    ) {
        self.calls.lock().push(DrawCall {
            text: text.iter().collect(),
            origin: baseline_origin,
            color,
            font_size,
        });

        let top = (baseline_origin.y + self.ascent(font_size)).floor().max(0.0) as usize;
        let bottom = baseline_origin.y.floor().max(0.0) as usize;
        let mut pen_x = baseline_origin.x;
        for &ch in text {
            let advance = self.width_of(ch);
            if !ch.is_whitespace() {
                let left = pen_x.floor().max(0.0) as usize;
                let right = (pen_x + advance).floor().max(0.0) as usize;
                for y in top..bottom {
                    for x in left..right {
                        bitmap.blend(x, y, color, 255);
                    }
                }
            }
            pen_x += advance;
        }
    }
}

use std::sync::Arc;

use euclid::default::Point2D;

use crate::{
    glyph::{GlyphMetricsProvider, GlyphRasterizer},
    renderer::{Bitmap, PackedColor},
};

/// Glyph metrics and rasterization backed by a single `fontdue` font.
///
/// The font is chosen once when the backend is built and is only read
/// afterwards, so one backend can serve any number of threads.
#[derive(Clone)]
pub struct FontdueBackend {
    font: Arc<fontdue::Font>,
}

impl FontdueBackend {
    pub fn new(font: Arc<fontdue::Font>) -> Self {
        Self { font }
    }

    pub fn font(&self) -> &Arc<fontdue::Font> {
        &self.font
    }

    fn line_metrics(&self, font_size: f32) -> Option<fontdue::LineMetrics> {
        let metrics = self.font.horizontal_line_metrics(font_size);
        if metrics.is_none() {
            log::warn!("font has no horizontal line metrics; using font size");
        }
        metrics
    }
}

impl GlyphMetricsProvider for FontdueBackend {
    fn measure(&self, text: &[char], font_size: f32) -> Vec<f32> {
        text.iter()
            .map(|&ch| self.font.metrics(ch, font_size).advance_width)
            .collect()
    }

    fn font_spacing(&self, font_size: f32) -> f32 {
        self.line_metrics(font_size)
            .map(|metrics| metrics.new_line_size)
            .unwrap_or(font_size)
    }

    fn ascent(&self, font_size: f32) -> f32 {
        // fontdue measures ascent upwards.
        self.line_metrics(font_size)
            .map(|metrics| -metrics.ascent)
            .unwrap_or(-font_size)
    }
}

impl GlyphRasterizer for FontdueBackend {
    fn draw_text(
        &self,
        bitmap: &mut Bitmap,
        text: &[char],
        baseline_origin: Point2D<f32>,
        color: PackedColor,
        font_size: f32,
    ) {
        let mut pen_x = baseline_origin.x;

        for &ch in text {
            let (metrics, coverage) = self.font.rasterize(ch, font_size);

            if metrics.width > 0 && metrics.height > 0 {
                let origin_x = pen_x + metrics.xmin as f32;
                let origin_y = baseline_origin.y - (metrics.ymin as f32 + metrics.height as f32);
                paint_coverage(
                    bitmap,
                    &coverage,
                    metrics.width,
                    metrics.height,
                    Point2D::new(origin_x, origin_y),
                    color,
                );
            }

            pen_x += metrics.advance_width;
        }
    }
}

/// Blends an 8-bit coverage mask with its top-left corner at `origin`.
fn paint_coverage(
    bitmap: &mut Bitmap,
    coverage: &[u8],
    glyph_width: usize,
    glyph_height: usize,
    origin: Point2D<f32>,
    color: PackedColor,
) {
    for row in 0..glyph_height {
        let y = (origin.y + row as f32).floor();
        if y < 0.0 || y as usize >= bitmap.height {
            continue;
        }

        for col in 0..glyph_width {
            let alpha = coverage[row * glyph_width + col];
            if alpha == 0 {
                continue;
            }

            let x = (origin.x + col as f32).floor();
            if x < 0.0 {
                continue;
            }

            bitmap.blend(x as usize, y as usize, color, alpha);
        }
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coverage_is_clipped_to_bitmap() {
        let mut bitmap = Bitmap::new(3, 3);
        let mask = [255u8; 4];
        paint_coverage(
            &mut bitmap,
            &mask,
            2,
            2,
            Point2D::new(-1.0, 2.0),
            PackedColor(0xFFFFFFFF),
        );
        assert_eq!(bitmap.pixel(0, 2).unwrap(), PackedColor(0xFFFFFFFF));
        assert_eq!(bitmap.pixel(1, 2).unwrap(), PackedColor::TRANSPARENT);
        assert_eq!(bitmap.pixel(0, 1).unwrap(), PackedColor::TRANSPARENT);
    }

    #[test]
    fn zero_coverage_leaves_pixels_alone() {
        let mut bitmap = Bitmap::new(2, 1);
        paint_coverage(
            &mut bitmap,
            &[0, 255],
            2,
            1,
            Point2D::new(0.0, 0.0),
            PackedColor(0xFF0000FF),
        );
        assert_eq!(bitmap.pixel(0, 0).unwrap(), PackedColor::TRANSPARENT);
        assert_eq!(bitmap.pixel(1, 0).unwrap(), PackedColor(0xFF0000FF));
    }
}

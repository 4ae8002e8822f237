use crate::{
    error::{Result, TextDrawError},
    glyph::GlyphMetricsProvider,
};

/// Per-character advances plus the line metrics of the font that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterMetrics {
    widths: Vec<f32>,
    line_spacing: f32,
    ascent: f32,
}

impl CharacterMetrics {
    /// Wraps measurements for `char_count` characters.
    ///
    /// Fails when the widths do not line up with the text or the spacing
    /// could never fit a line.
    pub fn new(
        char_count: usize,
        widths: Vec<f32>,
        line_spacing: f32,
        ascent: f32,
    ) -> Result<Self> {
        if widths.len() != char_count {
            return Err(TextDrawError::MetricsLengthMismatch {
                expected: char_count,
                actual: widths.len(),
            });
        }
        if !(line_spacing.is_finite() && line_spacing > 0.0) {
            return Err(TextDrawError::InvalidLineSpacing(line_spacing));
        }

        Ok(Self {
            widths,
            line_spacing,
            ascent,
        })
    }

    /// Asks `provider` for everything the layout needs about `text`.
    pub fn measure<P>(provider: &P, text: &[char], font_size: f32) -> Result<Self>
    where
        P: GlyphMetricsProvider + ?Sized,
    {
        Self::new(
            text.len(),
            provider.measure(text, font_size),
            provider.font_spacing(font_size),
            provider.ascent(font_size),
        )
    }

    pub fn widths(&self) -> &[f32] {
        &self.widths
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Number of whole lines that fit vertically in `height` pixels.
    pub fn max_lines(&self, height: u32) -> usize {
        max_lines_for(height as f32, self.line_spacing)
    }
}

/// `floor(height / line_spacing)`, saturating at zero.
pub(crate) fn max_lines_for(height: f32, line_spacing: f32) -> usize {
    if line_spacing <= 0.0 {
        return 0;
    }
    (height / line_spacing).floor().max(0.0) as usize
}

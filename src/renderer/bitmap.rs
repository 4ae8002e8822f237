/// A color packed as `0xAABBGGRR`.
///
/// Read as little-endian bytes, a packed value is laid out as R, G, B, A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedColor(pub u32);

impl PackedColor {
    pub const TRANSPARENT: Self = Self(0);

    /// Packs normalized channels, rounding each one to the nearest byte.
    pub fn from_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self(
            (channel_to_byte(alpha) << 24)
                | (channel_to_byte(blue) << 16)
                | (channel_to_byte(green) << 8)
                | channel_to_byte(red),
        )
    }

    pub fn from_channels([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self(u32::from_le_bytes([red, green, blue, alpha]))
    }

    /// Returns `[red, green, blue, alpha]`.
    pub fn channels(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl From<crate::text::Rgba> for PackedColor {
    fn from(color: crate::text::Rgba) -> Self {
        Self::from_rgba(color.red, color.green, color.blue, color.alpha)
    }
}

/// `round(255 * channel) & 0xFF`
pub(crate) fn channel_to_byte(channel: f32) -> u32 {
    ((255.0 * channel).round() as i64 & 0xFF) as u32
}

/// RGBA bitmap the rasterizer paints into.
///
/// Pixels are row-major with the origin at the top-left and start out fully
/// transparent.
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    pixels: Vec<u32>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width.saturating_mul(height);
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<PackedColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(PackedColor(self.pixels[y * self.width + x]))
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Blends `color` over the pixel at `(x, y)` with the given glyph coverage.
    ///
    /// Uses straight (non-premultiplied) source-over blending. Out of bounds
    /// coordinates are ignored.
    pub fn blend(&mut self, x: usize, y: usize, color: PackedColor, coverage: u8) {
        if x >= self.width || y >= self.height || coverage == 0 {
            return;
        }

        let idx = y * self.width + x;
        let [r, g, b, a] = color.channels();
        let [bg_r, bg_g, bg_b, bg_a] = PackedColor(self.pixels[idx]).channels();

        let src_a = (a as f32 / 255.0) * (coverage as f32 / 255.0);
        let dst_a = bg_a as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        let mix = |src: u8, dst: u8| {
            let value = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };

        self.pixels[idx] = PackedColor::from_channels([
            mix(r, bg_r),
            mix(g, bg_g),
            mix(b, bg_b),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        ])
        .0;
    }

    /// Reads the bitmap back as a [`PixelBuffer`].
    pub fn into_pixel_buffer(self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels,
        }
    }
}

/// Finished `width * height` image handed to the completion notifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    /// Packed `0xAABBGGRR` pixels, row-major, top-left origin.
    pub pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn pixel(&self, x: usize, y: usize) -> Option<PackedColor> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(PackedColor(self.pixels[y * self.width + x]))
    }

    /// Flattens the pixels to `R, G, B, A` bytes for texture upload.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| PackedColor(p).alpha() == 0)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_alpha_high_red_low() {
        let color = PackedColor::from_rgba(1.0, 0.0, 0.0, 1.0);
        assert_eq!(color.0, 0xFF0000FF);
        let color = PackedColor::from_rgba(0.0, 0.0, 1.0, 0.5);
        assert_eq!(color.0, 0x80FF0000);
        assert_eq!(color.channels(), [0, 0, 255, 128]);
    }

    #[test]
    fn channel_rounding_is_stable() {
        for step in 0..=1000 {
            let c = step as f32 / 1000.0;
            let byte = channel_to_byte(c);
            let again = channel_to_byte(byte as f32 / 255.0);
            assert_eq!(byte, again, "channel {c}");
        }
    }

    #[test]
    fn rounds_rather_than_truncates() {
        // 0.5 * 255 = 127.5
        assert_eq!(channel_to_byte(0.5), 128);
        assert_eq!(channel_to_byte(0.002), 1);
        assert_eq!(channel_to_byte(0.001), 0);
    }

    #[test]
    fn new_bitmap_is_transparent() {
        let bitmap = Bitmap::new(4, 3);
        assert_eq!(bitmap.pixels().len(), 12);
        assert!(bitmap.into_pixel_buffer().is_blank());
    }

    #[test]
    fn full_coverage_copies_color() {
        let mut bitmap = Bitmap::new(2, 2);
        let color = PackedColor::from_rgba(0.2, 0.4, 0.6, 1.0);
        bitmap.blend(1, 0, color, 255);
        assert_eq!(bitmap.pixel(1, 0).unwrap(), color);
        assert_eq!(bitmap.pixel(0, 0).unwrap(), PackedColor::TRANSPARENT);
    }

    #[test]
    fn partial_coverage_scales_alpha_only() {
        let mut bitmap = Bitmap::new(1, 1);
        let color = PackedColor::from_rgba(1.0, 1.0, 1.0, 1.0);
        bitmap.blend(0, 0, color, 128);
        assert_eq!(bitmap.pixel(0, 0).unwrap().channels(), [255, 255, 255, 128]);
    }

    #[test]
    fn out_of_bounds_blend_is_ignored() {
        let mut bitmap = Bitmap::new(2, 2);
        bitmap.blend(2, 0, PackedColor(0xFFFFFFFF), 255);
        bitmap.blend(0, 5, PackedColor(0xFFFFFFFF), 255);
        assert!(bitmap.into_pixel_buffer().is_blank());
    }

    #[test]
    fn rgba8_bytes_are_red_first() {
        let buffer = PixelBuffer {
            width: 1,
            height: 1,
            pixels: vec![PackedColor::from_rgba(1.0, 0.0, 0.0, 1.0).0],
        };
        assert_eq!(buffer.to_rgba8(), vec![255, 0, 0, 255]);
    }
}

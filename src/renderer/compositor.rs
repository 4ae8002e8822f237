use crate::{
    glyph::GlyphRasterizer,
    renderer::{Bitmap, PackedColor, PixelBuffer},
    text::{LayoutPlan, LineOffsets, TextRequest},
};

/// Paints every drawable line of `plan` and reads the result back.
///
/// The bitmap is exactly `request.width x request.height` and starts fully
/// transparent. `text` must be the characters of `request.text`.
pub fn render<R>(
    rasterizer: &R,
    text: &[char],
    plan: &LayoutPlan,
    offsets: &LineOffsets,
    request: &TextRequest,
) -> PixelBuffer
where
    R: GlyphRasterizer + ?Sized,
{
    let mut bitmap = Bitmap::new(request.width as usize, request.height as usize);
    let color = PackedColor::from(request.color);

    for line in offsets.rendered_lines(plan) {
        if line.span.is_empty() {
            continue;
        }
        rasterizer.draw_text(
            &mut bitmap,
            &text[line.span.range()],
            line.origin,
            color,
            request.font_size,
        );
    }

    bitmap.into_pixel_buffer()
}

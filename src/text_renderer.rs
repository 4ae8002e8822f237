use crate::{
    error::Result,
    glyph::{GlyphMetricsProvider, GlyphRasterizer},
    renderer::{self, CompletionNotifier, PixelBuffer},
    text::{CharacterMetrics, LayoutPlan, LineOffsets, TextRequest, compute_offsets, plan_lines},
};

/// Runs the whole text drawing pipeline with one glyph backend.
///
/// The backend (and with it the font) is fixed at construction. Drawing only
/// reads it, so a renderer can be shared across threads whenever the backend
/// allows.
pub struct TextRenderer<B> {
    backend: B,
}

/// Layout computed for a request, before any pixels are painted.
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedText {
    pub text: Vec<char>,
    pub plan: LayoutPlan,
    pub offsets: LineOffsets,
}

impl<B> TextRenderer<B>
where
    B: GlyphMetricsProvider + GlyphRasterizer,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Plans the lines of `request` and aligns them in the target box.
    pub fn layout(&self, request: &TextRequest) -> Result<PlannedText> {
        request.validate()?;

        let text: Vec<char> = request.text.chars().collect();
        let metrics = CharacterMetrics::measure(&self.backend, &text, request.font_size)?;

        let plan = plan_lines(
            &text,
            metrics.widths(),
            request.width as f32,
            metrics.max_lines(request.height),
        );
        let offsets = compute_offsets(
            &plan,
            request.width as f32,
            request.height as f32,
            metrics.ascent(),
            metrics.line_spacing(),
            request.horizontal_align,
            request.vertical_align,
        );

        if plan.consumed() < text.len() {
            log::debug!(
                "Truncated text to {} of {} characters.",
                plan.consumed(),
                text.len()
            );
        }
        log::debug!(
            "Laid out {} line(s) in a {}x{} box.",
            offsets.drawn_lines(),
            request.width,
            request.height
        );

        Ok(PlannedText {
            text,
            plan,
            offsets,
        })
    }

    /// Lays out and paints `request`, returning the finished pixels.
    pub fn render(&self, request: &TextRequest) -> Result<PixelBuffer> {
        let planned = self.layout(request)?;
        Ok(renderer::render(
            &self.backend,
            &planned.text,
            &planned.plan,
            &planned.offsets,
            request,
        ))
    }

    /// Renders `request` and hands the pixels to `notifier` with the
    /// request's destination handle.
    ///
    /// Nothing is delivered when the request violates a precondition.
    pub fn draw<N>(&self, request: &TextRequest, notifier: &N) -> Result<()>
    where
        N: CompletionNotifier + ?Sized,
    {
        let pixels = self.render(request)?;
        notifier.notify(pixels, request.destination);
        Ok(())
    }
}

/// Alignment of planned lines inside the target box.
pub mod align;
/// The greedy line planner.
pub mod layout;
/// Per-character measurements handed to the planner.
pub mod metrics;
/// Input description of a text-draw request.
pub mod request;

#[cfg(test)]
pub(crate) mod testing;

pub use align::{LineOffsets, RenderedLine, compute_offsets};
pub use layout::{LINE_BREAK, LayoutPlan, LineSpan, plan_lines};
pub use metrics::CharacterMetrics;
pub use request::{
    DEFAULT_FONT_SIZE, DestinationHandle, HorizontalAlign, Rgba, TextRequest, VerticalAlign,
};

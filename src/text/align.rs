use euclid::default::Point2D;

use crate::text::{
    HorizontalAlign, LayoutPlan, LineSpan, VerticalAlign, metrics::max_lines_for,
};

/// Placement of the drawable lines of a [`LayoutPlan`] inside the target box.
#[derive(Clone, Debug, PartialEq)]
pub struct LineOffsets {
    /// Baseline of the first line.
    pub vertical_offset: f32,
    pub line_spacing: f32,
    /// One x offset per drawn line; its length is the drawn line count.
    pub horizontal_offsets: Vec<f32>,
}

impl LineOffsets {
    pub fn drawn_lines(&self) -> usize {
        self.horizontal_offsets.len()
    }

    /// Baseline of line `index`.
    pub fn baseline(&self, index: usize) -> f32 {
        self.vertical_offset + index as f32 * self.line_spacing
    }

    /// Pairs each drawn line with its pen position.
    pub fn rendered_lines<'a>(
        &'a self,
        plan: &'a LayoutPlan,
    ) -> impl Iterator<Item = RenderedLine> + 'a {
        plan.lines
            .iter()
            .zip(&self.horizontal_offsets)
            .enumerate()
            .map(|(index, (span, &x))| RenderedLine {
                span: *span,
                origin: Point2D::new(x, self.baseline(index)),
            })
    }
}

/// A line span with its baseline origin, ready to be painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderedLine {
    pub span: LineSpan,
    pub origin: Point2D<f32>,
}

/// Computes the first baseline and the per-line x offsets.
///
/// Only lines that fit vertically are kept, even if the plan holds more. The
/// first baseline starts at `-ascent` and is then shifted down for bottom and
/// center alignment by the unused height of the box.
pub fn compute_offsets(
    plan: &LayoutPlan,
    box_width: f32,
    box_height: f32,
    ascent: f32,
    line_spacing: f32,
    horizontal_align: HorizontalAlign,
    vertical_align: VerticalAlign,
) -> LineOffsets {
    let drawn_lines = plan.len().min(max_lines_for(box_height, line_spacing));
    let free_height = box_height - line_spacing * drawn_lines as f32;

    let vertical_offset = -ascent
        + match vertical_align {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Bottom => free_height,
            VerticalAlign::Center => free_height / 2.0,
        };

    let horizontal_offsets = plan.lines[..drawn_lines]
        .iter()
        .map(|line| match horizontal_align {
            HorizontalAlign::Left => 0.0,
            HorizontalAlign::Right => box_width - line.width,
            HorizontalAlign::Center => (box_width - line.width) / 2.0,
        })
        .collect();

    LineOffsets {
        vertical_offset,
        line_spacing,
        horizontal_offsets,
    }
}

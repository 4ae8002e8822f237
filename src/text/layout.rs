use std::ops::Range;

/// Character that always ends the current line.
pub const LINE_BREAK: char = '\n';

/// One line of the plan: a half-open character range into the source text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSpan {
    pub start: usize,
    pub end: usize,
    /// Sum of the advances of the characters in `start..end`.
    pub width: f32,
    /// Whether the whitespace (or line break) right after `end` was skipped
    /// instead of starting the next line.
    pub consumed_break: bool,
}

impl LineSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Ordered, non-overlapping lines covering a prefix of the text.
///
/// Text that does not fit into `max_lines` is dropped without error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutPlan {
    pub lines: Vec<LineSpan>,
}

impl LayoutPlan {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index one past the last character consumed by the plan.
    pub fn consumed(&self) -> usize {
        self.lines
            .last()
            .map(|line| line.end + usize::from(line.consumed_break))
            .unwrap_or(0)
    }
}

/// Breaks `text` into at most `max_lines` lines no wider than `target_width`.
///
/// Lines break at the last whitespace that still fits. A word longer than the
/// whole line is split where it overflows, and a single character wider than
/// the line is still placed on a line of its own so the scan always advances.
/// Reaching `target_width` exactly does not break; only a strict excess does.
pub fn plan_lines(
    text: &[char],
    widths: &[f32],
    target_width: f32,
    max_lines: usize,
) -> LayoutPlan {
    debug_assert_eq!(text.len(), widths.len());

    let len = text.len().min(widths.len());
    let mut lines = Vec::new();
    let mut end = 0usize;

    while lines.len() < max_lines && end < len {
        let start = end;
        let mut text_width = 0.0f32;
        // Last whitespace seen on this line and the width before it. Equal to
        // `start` while the line has no break opportunity yet.
        let mut best = start;
        let mut best_width = 0.0f32;

        while end < len {
            let ch = text[end];
            if ch == LINE_BREAK {
                break;
            }

            if text_width + widths[end] > target_width {
                if start == end {
                    text_width += widths[end];
                    end += 1;
                } else if best > start {
                    end = best;
                    text_width = best_width;
                }
                break;
            }

            if ch.is_whitespace() {
                best = end;
                best_width = text_width;
            }

            text_width += widths[end];
            end += 1;
        }

        let consumed_break = end < len && text[end].is_whitespace();
        let span = LineSpan {
            start,
            end,
            width: text_width,
            consumed_break,
        };
        log::trace!("line {}: {:?}", lines.len(), span);
        lines.push(span);

        if consumed_break {
            end += 1;
        }
    }

    LayoutPlan { lines }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn uniform(text: &[char], width: f32) -> Vec<f32> {
        vec![width; text.len()]
    }

    fn spans(plan: &LayoutPlan) -> Vec<(usize, usize)> {
        plan.lines.iter().map(|l| (l.start, l.end)).collect()
    }

    #[test]
    fn fits_on_one_line() {
        let text = chars("hello world");
        let plan = plan_lines(&text, &uniform(&text, 10.0), 1000.0, 5);
        assert_eq!(spans(&plan), vec![(0, 11)]);
        assert_eq!(plan.lines[0].width, 110.0);
        assert!(!plan.lines[0].consumed_break);
    }

    #[test]
    fn newline_splits_and_is_excluded() {
        let text = chars("hello\nworld");
        let plan = plan_lines(&text, &uniform(&text, 10.0), 1000.0, 5);
        assert_eq!(spans(&plan), vec![(0, 5), (6, 11)]);
        assert!(plan.lines[0].consumed_break);
        assert_eq!(plan.lines[0].width, 50.0);
        assert_eq!(plan.lines[1].width, 50.0);
    }

    #[test]
    fn long_run_is_split_and_truncated() {
        let text = chars("aaaaaaaaaa");
        let plan = plan_lines(&text, &uniform(&text, 10.0), 35.0, 2);
        assert_eq!(spans(&plan), vec![(0, 3), (3, 6)]);
        assert!(plan.lines.iter().all(|l| l.width == 30.0));
        assert_eq!(plan.consumed(), 6);
    }

    #[test]
    fn wraps_at_last_whitespace() {
        let text = chars("the quick brown fox");
        // 10 characters fit per line.
        let plan = plan_lines(&text, &uniform(&text, 10.0), 100.0, 10);
        assert_eq!(spans(&plan), vec![(0, 9), (10, 19)]);
        assert_eq!(plan.lines[0].width, 90.0);
        assert!(plan.lines[0].consumed_break);
        assert!(!plan.lines[1].consumed_break);
    }

    #[test]
    fn exact_fit_does_not_break() {
        let text = chars("abcd");
        let plan = plan_lines(&text, &uniform(&text, 10.0), 40.0, 3);
        assert_eq!(spans(&plan), vec![(0, 4)]);

        let plan = plan_lines(&text, &uniform(&text, 10.0), 39.9, 3);
        assert_eq!(spans(&plan), vec![(0, 3), (3, 4)]);
    }

    #[test]
    fn oversized_character_gets_its_own_line() {
        let text = chars("aWb");
        let widths = vec![10.0, 500.0, 10.0];
        let plan = plan_lines(&text, &widths, 100.0, 10);
        assert_eq!(spans(&plan), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(plan.lines[1].width, 500.0);
    }

    #[test]
    fn every_character_too_wide_still_terminates() {
        let text = chars("WWWW");
        let plan = plan_lines(&text, &uniform(&text, 50.0), 10.0, 100);
        assert_eq!(spans(&plan), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn empty_text_gives_empty_plan() {
        let plan = plan_lines(&[], &[], 100.0, 4);
        assert!(plan.is_empty());
        assert_eq!(plan.consumed(), 0);
    }

    #[test]
    fn zero_max_lines_drops_everything() {
        let text = chars("hello");
        let plan = plan_lines(&text, &uniform(&text, 10.0), 100.0, 0);
        assert!(plan.is_empty());
    }

    #[test]
    fn blank_line_between_breaks_is_kept() {
        let text = chars("a\n\nb");
        let plan = plan_lines(&text, &uniform(&text, 10.0), 100.0, 5);
        assert_eq!(spans(&plan), vec![(0, 1), (2, 2), (3, 4)]);
        assert!(plan.lines[1].is_empty());
    }

    #[test]
    fn whitespace_break_skips_only_one_character() {
        let text = chars("ab  cd");
        // "ab " fits and the 4th char overflows, so the line ends before index 2.
        let plan = plan_lines(&text, &uniform(&text, 10.0), 35.0, 5);
        assert_eq!(spans(&plan)[0], (0, 2));
        assert_eq!(plan.lines[0].width, 20.0);
        // Only the first space is skipped; the second one leads the next line.
        assert_eq!(spans(&plan)[1], (3, 6));
    }

    #[test]
    fn line_count_never_exceeds_cap_and_spans_are_ordered() {
        let text = chars("lorem ipsum dolor sit amet consectetur adipiscing elit sed do");
        for max_lines in 0..8 {
            for target in [15.0, 37.0, 60.0, 95.0] {
                let plan = plan_lines(&text, &uniform(&text, 7.0), target, max_lines);
                assert!(plan.len() <= max_lines);

                let mut cursor = 0;
                for line in &plan.lines {
                    assert!(line.start < line.end);
                    assert!(line.start >= cursor);
                    let gap = line.start - cursor;
                    assert!(gap <= 1, "at most one skipped break between lines");
                    cursor = line.end;
                }
            }
        }
    }
}

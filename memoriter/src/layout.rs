//! Line layout engine.
//!
//! Computes the wrapped-line spans used to render a passage. Layout only
//! looks at the character sequence, never at typing state, so for a given
//! (text, width) pair the result is deterministic and can be cached across
//! renders. Lines are greedy: as many whole words (plus the whitespace
//! separating them) as fit within the width, breaking at the last word
//! boundary that still fits. A word wider than the whole line is placed
//! alone on a line rather than split. An explicit newline always forces a
//! break.
//!
//! The produced spans partition the character indices exactly: no gaps, no
//! overlaps, ascending order. Whitespace absorbed at a break stays on the
//! line it follows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounded::Bounded;
use crate::text::CharId;

/// Default maximum line width, in characters.
pub const DEFAULT_LINE_WIDTH: usize = 35;

#[derive(Debug, Error)]
pub enum LayoutError {
    /// The caller-supplied line capacity cannot hold the result. Retry
    /// with at least `required` lines.
    #[error("line buffer too small: {required} line(s) required, capacity {capacity}")]
    BufferTooSmall { required: usize, capacity: usize },
}

/// A contiguous run of characters assigned to one rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutLine {
    /// Starting character index.
    pub index: CharId,
    /// Number of characters on the line.
    pub length: usize,
}

impl LayoutLine {
    pub fn end(&self) -> CharId {
        self.index + self.length
    }
}

/// Greedy word-wrap layout with a configurable line width.
#[derive(Debug, Clone)]
pub struct LineLayout {
    line_width: usize,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_WIDTH)
    }
}

impl LineLayout {
    pub fn new(line_width: usize) -> Self {
        Self { line_width }
    }

    pub fn set_line_width(&mut self, line_width: usize) {
        self.line_width = line_width;
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }

    /// Computes the line spans for the given text.
    pub fn layout(&self, text: &str) -> Vec<LayoutLine> {
        let mut lines = Vec::new();
        self.scan(text, |line| lines.push(line));
        lines
    }

    /// Computes line spans into a caller-sized buffer.
    ///
    /// Fails, reporting the required count, when the result does not fit;
    /// the caller can retry once with that capacity.
    pub fn layout_capped(
        &self,
        text: &str,
        max_lines: usize,
    ) -> Result<Vec<LayoutLine>, LayoutError> {
        let mut lines = Bounded::with_capacity(max_lines);
        self.scan(text, |line| {
            lines.push(line);
        });

        if lines.is_truncated() {
            return Err(LayoutError::BufferTooSmall {
                required: lines.required(),
                capacity: max_lines,
            });
        }
        Ok(lines.into_vec())
    }

    /// Single pass over the characters, emitting one span per line.
    fn scan(&self, text: &str, mut emit: impl FnMut(LayoutLine)) {
        let chars: Vec<char> = text.chars().collect();
        let total = chars.len();

        let mut line_start = 0;
        let mut line_has_word = false;
        let mut position = 0;

        while position < total {
            let char = chars[position];

            if char == '\n' {
                // The newline itself belongs to the line it terminates.
                emit(LayoutLine {
                    index: line_start,
                    length: position + 1 - line_start,
                });
                line_start = position + 1;
                line_has_word = false;
                position += 1;
                continue;
            }

            if char.is_whitespace() {
                position += 1;
                continue;
            }

            // A whole word: decide whether it fits on the current line.
            let word_start = position;
            while position < total && !chars[position].is_whitespace() {
                position += 1;
            }
            let word_end = position;

            let fits = word_end - line_start <= self.line_width;
            if fits || !line_has_word {
                // Accept, including an oversized word on an otherwise
                // empty line.
                line_has_word = true;
            } else {
                // Break before the word; separating whitespace stays on
                // the previous line.
                emit(LayoutLine {
                    index: line_start,
                    length: word_start - line_start,
                });
                line_start = word_start;
                line_has_word = true;
            }
        }

        if line_start < total {
            emit(LayoutLine {
                index: line_start,
                length: total - line_start,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The spans must cover every character index exactly once, ascending.
    fn assert_layout_partition(text: &str, lines: &[LayoutLine]) {
        let total = text.chars().count();
        let mut next = 0;
        for line in lines {
            assert_eq!(line.index, next, "gap or overlap at {next}");
            assert!(line.length > 0, "empty line span");
            next = line.end();
        }
        assert_eq!(next, total, "spans do not cover the text");
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(LineLayout::default().layout("").is_empty());
    }

    #[test]
    fn short_text_fits_on_one_line() {
        let lines = LineLayout::new(35).layout("one two three");
        assert_eq!(lines, vec![LayoutLine { index: 0, length: 13 }]);
        assert_layout_partition("one two three", &lines);
    }

    #[test]
    fn oversized_word_is_not_split() {
        let lines = LineLayout::new(2).layout("cat");
        assert_eq!(lines, vec![LayoutLine { index: 0, length: 3 }]);
    }

    #[test]
    fn breaks_at_the_last_fitting_word_boundary() {
        // Width 7 fits "one two" but not "one two three".
        let text = "one two three";
        let lines = LineLayout::new(7).layout(text);
        assert_eq!(
            lines,
            vec![
                LayoutLine { index: 0, length: 8 },
                LayoutLine { index: 8, length: 5 },
            ]
        );
        assert_layout_partition(text, &lines);
    }

    #[test]
    fn separator_whitespace_stays_on_the_broken_line() {
        let text = "hello  world";
        let lines = LineLayout::new(5).layout(text);
        assert_eq!(
            lines,
            vec![
                LayoutLine { index: 0, length: 7 },
                LayoutLine { index: 7, length: 5 },
            ]
        );
        assert_layout_partition(text, &lines);
    }

    #[test]
    fn newline_forces_a_break_regardless_of_width() {
        let text = "ab\ncd ef";
        let lines = LineLayout::new(35).layout(text);
        assert_eq!(
            lines,
            vec![
                LayoutLine { index: 0, length: 3 },
                LayoutLine { index: 3, length: 5 },
            ]
        );
        assert_layout_partition(text, &lines);
    }

    #[test]
    fn oversized_word_between_fitting_words() {
        let text = "a extraordinarily b";
        let lines = LineLayout::new(4).layout(text);
        assert_layout_partition(text, &lines);
        // The long word sits alone on its line.
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].index, 2);
        assert_eq!(lines[2].index, 18);
    }

    #[test]
    fn layout_is_deterministic() {
        let text = "The Lord is my shepherd; I shall not want.";
        let layout = LineLayout::new(16);
        assert_eq!(layout.layout(text), layout.layout(text));
        assert_layout_partition(text, &layout.layout(text));
    }

    #[test]
    fn capped_layout_reports_the_required_count() {
        let text = "one two three four five six seven";
        let layout = LineLayout::new(8);
        let required = layout.layout(text).len();
        assert!(required > 2);

        let result = layout.layout_capped(text, 2);
        match result {
            Err(LayoutError::BufferTooSmall {
                required: reported,
                capacity,
            }) => {
                assert_eq!(reported, required);
                assert_eq!(capacity, 2);
            }
            other => panic!("expected BufferTooSmall, got {other:?}"),
        }

        // Retrying with the reported capacity succeeds.
        let lines = layout.layout_capped(text, required).unwrap();
        assert_eq!(lines.len(), required);
        assert_layout_partition(text, &lines);
    }

    #[test]
    fn trailing_newline_closes_the_final_line() {
        let text = "one two\n";
        let lines = LineLayout::new(35).layout(text);
        assert_eq!(lines, vec![LayoutLine { index: 0, length: 8 }]);
        assert_layout_partition(text, &lines);
    }
}

//! Read-only snapshot of the typing state for view layers.
//!
//! Frontends paint the passage from per-character contexts rather than
//! reaching into the engine: each context borrows the character, its owning
//! word (absent for whitespace), and says whether the caret sits on it.

use crate::state::TypingState;
use crate::text::{Character, Word};

pub struct RenderContext<'a> {
    pub character: &'a Character,
    pub word: Option<&'a Word>,
    pub has_caret: bool,
    pub index: usize,
}

/// Iterator over the per-character render contexts of a state.
pub struct RenderIterator<'a> {
    state: &'a TypingState,
    index: usize,
    caret: usize,
}

impl<'a> From<&'a TypingState> for RenderIterator<'a> {
    fn from(state: &'a TypingState) -> Self {
        Self {
            state,
            index: 0,
            caret: state.cursor(),
        }
    }
}

impl<'a> Iterator for RenderIterator<'a> {
    type Item = RenderContext<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let character = self.state.get_character(self.index)?;
        let word = self.state.word_containing(self.index);

        let context = RenderContext {
            character,
            word,
            has_caret: self.index == self.caret,
            index: self.index,
        };

        self.index += 1;
        Some(context)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.state.text_len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RenderIterator<'_> {}

impl std::iter::FusedIterator for RenderIterator<'_> {}

impl TypingState {
    /// Iterates the render contexts of every character, in passage order.
    pub fn render_iter(&self) -> RenderIterator<'_> {
        RenderIterator::from(self)
    }
}

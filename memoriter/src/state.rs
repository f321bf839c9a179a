//! Typing state machine.
//!
//! [`TypingState`] owns the segmented passage and applies keystrokes to it.
//! Input arrives in batches (one or more characters since the previous
//! call); each character is matched against the character at the cursor,
//! and the cursor advances. Whitespace and newline characters are owned by
//! no word and auto-complete as correct without consuming input, so input
//! need only contain typeable characters.
//!
//! Batches are all-or-nothing: a batch that cannot fully complete leaves
//! the state untouched. The cursor never rewinds implicitly; callers that
//! want to retype use [`TypingState::backspace`] or [`TypingState::reset`],
//! both of which clear the previously recorded keystrokes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::segment::{Segmented, SegmentError, segment, segment_bytes};
use crate::text::{CharId, Character, Sentence, Word, WordId};

#[derive(Debug, Error)]
pub enum TypingError {
    /// Input was submitted past the end of the passage, or the batch was
    /// longer than the remaining typeable characters. The state is
    /// unchanged.
    #[error("typing input out of range: {submitted} character(s) submitted, {remaining} remaining")]
    OutOfRange { submitted: usize, remaining: usize },
}

/// The aggregate state of one practice session's passage.
///
/// Owns the character, word, and sentence sequences plus the cursor (the
/// index of the next character expected to be typed). Mutated by
/// [`process_line`](Self::process_line) and by the reveal policy; one
/// calling context owns and drives a given `TypingState` at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypingState {
    characters: Vec<Character>,
    words: Vec<Word>,
    sentences: Vec<Sentence>,
    cursor: CharId,
}

impl TypingState {
    /// Segments the passage text and prepares it for typing.
    ///
    /// Empty text is valid and yields a state that is already complete.
    pub fn new(text: &str) -> Self {
        Self::from_segmented(segment(text))
    }

    /// Segments raw passage bytes, failing on malformed encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SegmentError> {
        Ok(Self::from_segmented(segment_bytes(bytes)?))
    }

    pub fn from_segmented(segmented: Segmented) -> Self {
        Self {
            characters: segmented.characters,
            words: segmented.words,
            sentences: segmented.sentences,
            cursor: 0,
        }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn text_len(&self) -> usize {
        self.characters.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Index of the next character expected to be typed.
    pub fn cursor(&self) -> CharId {
        self.cursor
    }

    /// The character currently under the cursor, if the passage is not yet
    /// complete.
    pub fn current_character(&self) -> Option<&Character> {
        self.characters.get(self.cursor)
    }

    pub fn get_character(&self, id: CharId) -> Option<&Character> {
        self.characters.get(id)
    }

    pub fn get_word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    /// The word owning the character at the given index, if any.
    pub fn word_containing(&self, char_id: CharId) -> Option<&Word> {
        let word_id = self.characters.get(char_id)?.word?;
        self.words.get(word_id)
    }

    /// The word the cursor currently sits in, or the next word ahead of it
    /// when the cursor is on whitespace.
    pub fn active_word(&self) -> Option<WordId> {
        self.characters[self.cursor..]
            .iter()
            .find_map(|character| character.word)
    }

    /// True once the cursor has advanced past the last character.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.characters.len()
    }

    /// Typeable characters remaining at or after the cursor.
    pub fn remaining(&self) -> usize {
        self.characters[self.cursor..]
            .iter()
            .filter(|character| character.word.is_some())
            .count()
    }

    /// Applies a batch of keystrokes.
    ///
    /// Each input character is recorded on the character at the cursor
    /// (`typed` plus the equality-derived `correct`), the owning word is
    /// marked touched, and the cursor advances. Unowned whitespace and
    /// newline characters auto-complete as correct without consuming input.
    /// When the cursor leaves a word, the word is finalized: it becomes
    /// `behind` if any of its characters were not typed correctly.
    ///
    /// Fails without mutating the state if the passage is already complete
    /// or the batch is longer than the remaining typeable characters.
    pub fn process_line(&mut self, input: &str) -> Result<(), TypingError> {
        let submitted = input.chars().count();
        let remaining = self.remaining();

        if self.is_complete() || submitted > remaining {
            return Err(TypingError::OutOfRange {
                submitted,
                remaining,
            });
        }

        for key in input.chars() {
            self.skip_unowned();
            self.apply_key(key);
        }

        // Trailing whitespace needs no input of its own.
        self.skip_unowned();

        Ok(())
    }

    /// Records one keystroke at the cursor. The cursor is guaranteed to sit
    /// on an owned character when this is called.
    fn apply_key(&mut self, key: char) {
        let character = &mut self.characters[self.cursor];
        character.typed = Some(key);
        character.correct = key == character.char;

        // Owned characters always carry a word id.
        let word_id = character.word.expect("owned character");
        let word = &mut self.words[word_id];
        word.touched = true;
        let at_word_end = word.last_character() == Some(self.cursor);

        self.cursor += 1;

        if at_word_end {
            self.finalize_word(word_id);
        }
    }

    /// Auto-completes unowned characters under the cursor as correct.
    fn skip_unowned(&mut self) {
        while let Some(character) = self.characters.get_mut(self.cursor) {
            if character.word.is_some() {
                break;
            }
            character.typed = Some(character.char);
            character.correct = true;
            self.cursor += 1;
        }
    }

    /// Marks a word the cursor has passed as behind unless every character
    /// was typed correctly.
    fn finalize_word(&mut self, word_id: WordId) {
        let incorrect = self.words[word_id]
            .characters
            .iter()
            .any(|&char_id| !self.characters[char_id].is_correct());
        if incorrect {
            self.words[word_id].behind = true;
        }
    }

    /// Steps the cursor back one character, erasing its keystroke.
    ///
    /// The owning word's `behind` flag is cleared, giving the caller a
    /// chance to retype it. Returns false at the beginning of the passage.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        let character = &mut self.characters[self.cursor];
        character.typed = None;
        character.correct = false;

        if let Some(word_id) = character.word {
            self.words[word_id].behind = false;
        }

        true
    }

    /// Clears all typing progress, restoring the state a fresh segmentation
    /// of the same text would produce. Visibility flags are untouched;
    /// callers reapply their reveal level afterwards.
    pub fn reset(&mut self) {
        for character in &mut self.characters {
            character.typed = None;
            character.correct = false;
            character.rendered = false;
        }
        for word in &mut self.words {
            word.touched = false;
            word.behind = false;
        }
        self.cursor = 0;
    }

    /// Flags a character as emitted to the view layer. Advisory only.
    pub fn mark_rendered(&mut self, char_id: CharId) {
        if let Some(character) = self.characters.get_mut(char_id) {
            character.rendered = true;
        }
    }

    /// Shows or hides a word together with its member characters. Unowned
    /// whitespace stays visible; only the reveal policy calls this.
    pub(crate) fn set_word_visible(&mut self, word_id: WordId, visible: bool) {
        let Some(word) = self.words.get_mut(word_id) else {
            return;
        };
        word.visible = visible;
        for char_id in word.characters.clone() {
            self.characters[char_id].visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_a_word_advances_past_trailing_whitespace() {
        let mut state = TypingState::new("GO UP");

        state.process_line("GO").unwrap();

        for id in 0..=2 {
            let character = state.get_character(id).unwrap();
            assert!(character.has_typed());
            assert!(character.is_correct());
        }
        // The space at index 2 auto-completed, leaving the cursor on 'U'.
        assert_eq!(state.cursor(), 3);
        assert!(!state.get_character(3).unwrap().has_typed());
    }

    #[test]
    fn finishing_the_passage_completes_the_state() {
        let mut state = TypingState::new("GO UP");
        state.process_line("GOUP").unwrap();
        assert!(state.is_complete());
        assert!(!state.words()[0].behind);
        assert!(!state.words()[1].behind);
    }

    #[test]
    fn incorrect_character_marks_the_word_behind() {
        let mut state = TypingState::new("cat sat");

        state.process_line("cut").unwrap();

        let word = &state.words()[0];
        assert!(word.touched);
        assert!(word.behind);

        let miss = state.get_character(1).unwrap();
        assert_eq!(miss.typed, Some('u'));
        assert!(!miss.is_correct());
    }

    #[test]
    fn word_is_touched_before_it_is_finalized() {
        let mut state = TypingState::new("cat");
        state.process_line("c").unwrap();
        assert!(state.words()[0].touched);
        assert!(!state.words()[0].behind);
    }

    #[test]
    fn batches_may_span_word_boundaries() {
        let mut state = TypingState::new("one two three");
        state.process_line("onetwo").unwrap();
        assert_eq!(state.cursor(), 8);
        assert_eq!(state.active_word(), Some(2));
    }

    #[test]
    fn newlines_auto_complete_like_spaces() {
        let mut state = TypingState::new("up\ndown");
        state.process_line("up").unwrap();
        assert_eq!(state.cursor(), 3);
        assert!(state.get_character(2).unwrap().is_correct());
    }

    #[test]
    fn overlong_batch_is_rejected_without_mutation() {
        let mut state = TypingState::new("hi");
        let before = state.clone();

        let result = state.process_line("hiya");
        assert!(matches!(
            result,
            Err(TypingError::OutOfRange {
                submitted: 4,
                remaining: 2
            })
        ));
        assert_eq!(state.cursor(), before.cursor());
        assert!(!state.get_character(0).unwrap().has_typed());
    }

    #[test]
    fn input_after_completion_is_an_error() {
        let mut state = TypingState::new("hi");
        state.process_line("hi").unwrap();
        assert!(state.is_complete());
        assert!(matches!(
            state.process_line("x"),
            Err(TypingError::OutOfRange { remaining: 0, .. })
        ));
    }

    #[test]
    fn typing_is_deterministic() {
        let run = || {
            let mut state = TypingState::new("He leads me beside still waters.");
            state.process_line("He").unwrap();
            state.process_line("lends").unwrap();
            state.process_line("me").unwrap();
            state
        };

        let first = run();
        let second = run();
        assert_eq!(first.cursor(), second.cursor());
        assert_eq!(first.characters(), second.characters());
        assert_eq!(first.words(), second.words());
    }

    #[test]
    fn backspace_erases_the_keystroke_and_behind_flag() {
        let mut state = TypingState::new("cat");
        state.process_line("cut").unwrap();
        assert!(state.words()[0].behind);

        // Step back over 't' and the wrong 'u'.
        assert!(state.backspace());
        assert!(state.backspace());

        assert_eq!(state.cursor(), 1);
        assert!(!state.words()[0].behind);
        assert!(!state.get_character(1).unwrap().has_typed());

        state.process_line("at").unwrap();
        assert!(!state.words()[0].behind);
        assert!(state.is_complete());
    }

    #[test]
    fn backspace_at_the_beginning_is_a_no_op() {
        let mut state = TypingState::new("cat");
        assert!(!state.backspace());
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn reset_restores_a_fresh_state() {
        let mut state = TypingState::new("GO UP");
        state.process_line("GX").unwrap();
        state.reset();

        let fresh = TypingState::new("GO UP");
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.characters(), fresh.characters());
        assert_eq!(state.words(), fresh.words());
    }

    #[test]
    fn empty_passage_is_complete_and_rejects_input() {
        let mut state = TypingState::new("");
        assert!(state.is_complete());
        assert!(state.process_line("a").is_err());
    }

    #[test]
    fn leading_whitespace_auto_completes_on_first_batch() {
        let mut state = TypingState::new("  hi");
        state.process_line("h").unwrap();
        assert!(state.get_character(0).unwrap().is_correct());
        assert!(state.get_character(1).unwrap().is_correct());
        assert_eq!(state.cursor(), 3);
    }
}

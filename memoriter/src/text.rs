//! Shared model types for the typing engine.
//!
//! A passage is decomposed into three synchronized sequences: characters,
//! words, and sentences. Ids are dense, zero-based indices into those
//! sequences, assigned once at segmentation time and never reused for the
//! lifetime of a [`TypingState`](crate::TypingState).
//!
//! Data layout example: `"GO UP"`
//! ```text
//! Characters: [G][O][ ][U][P]
//! Words:      [-w0-]   [-w1-]
//! Ownership:  [0][0][∅][1][1]
//! ```
//!
//! Whitespace and newline characters are kept in the character sequence so
//! layout stays faithful to the source text, but they are not owned by any
//! word.

use serde::{Deserialize, Serialize};

/// Index of a character within a segmented passage.
pub type CharId = usize;

/// Index of a word within a segmented passage.
pub type WordId = usize;

/// Index of a sentence within a segmented passage.
pub type SentenceId = usize;

/// A single character of the passage with its typing and visibility state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharId,
    /// The literal code point from the source text.
    pub char: char,
    pub is_whitespace: bool,
    pub is_newline: bool,
    /// Owning word, absent for whitespace and newline characters.
    pub word: Option<WordId>,
    /// Reveal-policy output: whether the character is currently shown.
    pub visible: bool,
    /// The code point actually entered, if any.
    pub typed: Option<char>,
    /// Whether `typed` matched `char`. Meaningful only while `typed` is
    /// `Some`; consumers must ignore it otherwise.
    pub correct: bool,
    /// Advisory flag for view layers, set once the character has been
    /// emitted for painting. Never consulted by the engine itself.
    pub rendered: bool,
}

impl Character {
    /// Creates an untyped, visible character with the given id.
    pub fn with_id_and_char(id: CharId, char: char) -> Self {
        Self {
            id,
            char,
            is_whitespace: char.is_whitespace(),
            is_newline: char == '\n',
            word: None,
            visible: true,
            typed: None,
            correct: false,
            rendered: false,
        }
    }

    /// Returns true once a keystroke has been recorded for this character.
    pub fn has_typed(&self) -> bool {
        self.typed.is_some()
    }

    /// Returns true if the character was typed and matched.
    pub fn is_correct(&self) -> bool {
        self.has_typed() && self.correct
    }
}

/// A contiguous run of non-whitespace characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    /// The literal text of the word.
    pub word: String,
    /// Member characters, in passage order.
    pub characters: Vec<CharId>,
    pub visible: bool,
    /// True once any of the word's characters has received a keystroke.
    pub touched: bool,
    /// True if the cursor has advanced past this word without every
    /// character being correct.
    pub behind: bool,
}

impl Word {
    /// Creates an empty word with the given id.
    pub fn with_id(id: WordId) -> Self {
        Self {
            id,
            word: String::new(),
            characters: Vec::new(),
            visible: true,
            touched: false,
            behind: false,
        }
    }

    /// Appends a character to the word and records the ownership on both
    /// sides of the relationship.
    pub fn push(&mut self, character: &mut Character) {
        character.word = Some(self.id);
        self.characters.push(character.id);
        self.word.push(character.char);
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// The id of the word's last character. Empty words never escape the
    /// segmenter, so membership is guaranteed.
    pub fn last_character(&self) -> Option<CharId> {
        self.characters.last().copied()
    }
}

/// An ordered group of words ending at sentence-terminal punctuation or a
/// forced line break. Sentences partition the word sequence in document
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub words: Vec<WordId>,
}

impl Sentence {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

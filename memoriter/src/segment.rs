//! Passage segmentation.
//!
//! Splits raw passage text into the character, word, and sentence sequences
//! the rest of the engine operates on. Segmentation is a single pass over
//! the input and is idempotent: identical text always yields an identical
//! id-to-content mapping, so callers may diff word lists across edits.

use thiserror::Error;

use crate::text::{Character, Sentence, Word};

/// Punctuation that closes a sentence when it ends a word.
const SENTENCE_DELIMITERS: &str = ".:;?!";

#[derive(Debug, Error)]
pub enum SegmentError {
    /// The input bytes were not valid UTF-8.
    #[error("malformed passage encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}

/// The three synchronized sequences produced by segmentation.
///
/// Every character appears exactly once; every non-whitespace character is
/// owned by exactly one word; every word belongs to exactly one sentence,
/// in document order.
#[derive(Debug, Clone, Default)]
pub struct Segmented {
    pub characters: Vec<Character>,
    pub words: Vec<Word>,
    pub sentences: Vec<Sentence>,
}

/// Segments passage text into characters, words, and sentences.
///
/// Whitespace and newline characters are retained in the character sequence
/// but owned by no word. A run of non-whitespace characters forms exactly
/// one word. A sentence boundary is emitted after a word ending in
/// sentence-terminal punctuation, or at a forced line break.
///
/// Empty input is a valid terminal state and yields empty sequences.
pub fn segment(text: &str) -> Segmented {
    let mut segmented = Segmented {
        characters: Vec::with_capacity(text.len()),
        words: Vec::new(),
        sentences: Vec::new(),
    };

    let mut current_word: Option<Word> = None;
    let mut current_sentence = Sentence::default();

    for (id, char) in text.chars().enumerate() {
        let mut character = Character::with_id_and_char(id, char);

        if character.is_whitespace {
            finish_word(&mut segmented, &mut current_word, &mut current_sentence);
            if character.is_newline {
                finish_sentence(&mut segmented, &mut current_sentence);
            }
        } else {
            current_word
                .get_or_insert_with(|| Word::with_id(segmented.words.len()))
                .push(&mut character);
        }

        segmented.characters.push(character);
    }

    finish_word(&mut segmented, &mut current_word, &mut current_sentence);
    finish_sentence(&mut segmented, &mut current_sentence);

    segmented
}

/// Segments raw passage bytes, failing on malformed encoding.
///
/// This is the boundary for callers that receive passage text from outside
/// the process and cannot guarantee its encoding.
pub fn segment_bytes(bytes: &[u8]) -> Result<Segmented, SegmentError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(segment(text))
}

/// Closes the in-flight word, assigning it to the current sentence. Closes
/// the sentence as well when the word ends in terminal punctuation.
fn finish_word(
    segmented: &mut Segmented,
    current_word: &mut Option<Word>,
    current_sentence: &mut Sentence,
) {
    let Some(word) = current_word.take() else {
        return;
    };

    let terminal = word
        .word
        .chars()
        .next_back()
        .is_some_and(|char| SENTENCE_DELIMITERS.contains(char));

    current_sentence.words.push(word.id);
    segmented.words.push(word);

    if terminal {
        finish_sentence(segmented, current_sentence);
    }
}

fn finish_sentence(segmented: &mut Segmented, current_sentence: &mut Sentence) {
    if !current_sentence.is_empty() {
        segmented.sentences.push(std::mem::take(current_sentence));
    }
}

//! Verses and passage assembly.

use memoriter::Bounded;
use serde::{Deserialize, Serialize};

use crate::book::Book;
use crate::source::{PassageSource, SourceError};

/// One verse of text, keyed by its reference within the chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Reference key, e.g. "Phil 1:21".
    pub key: String,
    pub text: String,
}

impl Verse {
    pub fn new(key: &str, text: &str) -> Self {
        Self {
            key: key.to_owned(),
            text: text.to_owned(),
        }
    }
}

/// Fetches the verses of a chapter into a caller-sized buffer.
///
/// The bounded result reports the required count when the capacity was too
/// small, so callers can retry once with a larger buffer.
pub fn find_by_book_and_chapter(
    source: &dyn PassageSource,
    book: Book,
    chapter: u16,
    max_verses: usize,
) -> Result<Bounded<Verse>, SourceError> {
    let mut view = Bounded::with_capacity(max_verses);
    view.extend(source.verses(book, chapter)?);
    Ok(view)
}

/// Joins fetched verses into the raw passage text the typing engine
/// consumes.
///
/// Square brackets found in some translations are stripped, because they
/// are very awkward to type.
pub fn assemble_passage(verses: &[Verse]) -> String {
    let joined = verses
        .iter()
        .map(|verse| verse.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    joined.replace(['[', ']'], "")
}

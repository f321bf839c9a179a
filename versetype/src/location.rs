//! Scripture addressing: a location within a translation, and the range a
//! session practices.

use serde::{Deserialize, Serialize};

use crate::book::Book;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Translation code, uppercase letters, usually 3 to 4 long.
    pub translation: String,
    pub book: Book,
    /// Chapter number, starting at 1.
    pub chapter: u16,
    /// Index of the sentence as it appears in the chapter.
    pub sentence: u16,
    /// Verse number the sentence belongs to, starting at 1.
    pub verse: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Location,
    pub end: Location,
}

impl Default for Range {
    /// The whole canon in the ESV translation.
    fn default() -> Self {
        Range {
            start: Location {
                translation: "ESV".to_owned(),
                book: Book::Genesis,
                chapter: 1,
                sentence: 0,
                verse: 1,
            },
            end: Location {
                translation: "ESV".to_owned(),
                book: Book::Revelation,
                chapter: 22,
                sentence: 29,
                verse: 21,
            },
        }
    }
}

impl Range {
    /// A single-chapter range, the common case for practice sessions.
    pub fn chapter(translation: &str, book: Book, chapter: u16) -> Self {
        let start = Location {
            translation: translation.to_owned(),
            book,
            chapter,
            sentence: 0,
            verse: 1,
        };
        let end = start.clone();
        Range { start, end }
    }
}

//! Passage sources.
//!
//! The engine consumes raw passage text and has no dependency on where it
//! came from. A [`PassageSource`] has exactly one capability: fetch the
//! verses of a (book, chapter). Each content provider implements the trait;
//! fetching over the network or scraping is out of scope here, so the crate
//! ships an in-memory source for corpora loaded by other means.

use std::collections::HashMap;

use thiserror::Error;

use crate::book::Book;
use crate::verse::Verse;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no text available for {book} {chapter}")]
    ChapterMissing { book: Book, chapter: u16 },
}

/// Descriptive metadata for a content source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescription {
    pub name: &'static str,
    pub url: Option<&'static str>,
}

/// A provider of verse text for (book, chapter) lookups.
pub trait PassageSource {
    fn description(&self) -> SourceDescription;

    /// The translation code this source serves.
    fn translation(&self) -> &str;

    /// Fetches the verses of a chapter, in verse order.
    fn verses(&self, book: Book, chapter: u16) -> Result<Vec<Verse>, SourceError>;
}

/// In-memory source backed by a map of chapters.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    translation: String,
    chapters: HashMap<(Book, u16), Vec<Verse>>,
}

impl MemorySource {
    pub fn new(translation: &str) -> Self {
        Self {
            translation: translation.to_owned(),
            chapters: HashMap::new(),
        }
    }

    pub fn insert(&mut self, book: Book, chapter: u16, verses: Vec<Verse>) {
        self.chapters.insert((book, chapter), verses);
    }
}

impl PassageSource for MemorySource {
    fn description(&self) -> SourceDescription {
        SourceDescription {
            name: "In-memory corpus",
            url: None,
        }
    }

    fn translation(&self) -> &str {
        &self.translation
    }

    fn verses(&self, book: Book, chapter: u16) -> Result<Vec<Verse>, SourceError> {
        self.chapters
            .get(&(book, chapter))
            .cloned()
            .ok_or(SourceError::ChapterMissing { book, chapter })
    }
}

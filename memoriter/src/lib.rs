//! Core engine for verse-memorization typing trainers.
//!
//! Raw passage text is segmented into characters, words, and sentences;
//! a [`TypingState`] tracks per-character progress as keystroke batches
//! arrive; [`apply_level`] reveals or hides upcoming words according to a
//! difficulty [`Level`]; and [`LineLayout`] computes the wrapped-line
//! spans used to render the passage. Everything is synchronous and
//! bounded-time; one session owns one `TypingState`.

pub mod bounded;
pub mod layout;
pub mod level;
pub mod render;
pub mod segment;
pub mod state;
pub mod text;

pub use bounded::Bounded;
pub use layout::{DEFAULT_LINE_WIDTH, LayoutError, LayoutLine, LineLayout};
pub use level::{Level, LevelError, apply_level};
pub use render::{RenderContext, RenderIterator};
pub use segment::{SegmentError, Segmented, segment, segment_bytes};
pub use state::{TypingError, TypingState};
pub use text::{CharId, Character, Sentence, SentenceId, Word, WordId};

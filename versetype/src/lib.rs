//! Session management and content plumbing around the `memoriter` typing
//! engine: scripture addressing, named practice sessions with a JSON store,
//! passage sources, and application settings.

pub mod book;
pub mod config;
pub mod location;
pub mod session;
pub mod source;
pub mod verse;

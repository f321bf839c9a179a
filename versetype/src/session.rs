//! Named practice sessions and their on-disk store.
//!
//! A session names a text range together with a difficulty level and a
//! practice strategy. Sessions live in one JSON file under the platform
//! data directory; the store root is injectable so tests can point it at a
//! scratch directory.

use std::fs::{self, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use derive_more::From;
use directories::ProjectDirs;
use memoriter::Level;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::location::Range;

const SESSIONS_FILE: &str = "sessions.json";
const MAX_SESSIONS: usize = 20;

#[derive(Debug, From, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("session data is corrupt: {0}")]
    Corrupt(serde_json::Error),

    #[error("maximum number of sessions reached ({MAX_SESSIONS})")]
    #[from(skip)]
    TooManySessions,

    #[error("session with that name already exists: {name}")]
    #[from(skip)]
    SessionExists { name: String },

    #[error("failed to locate a data directory for the session store")]
    #[from(skip)]
    NoDirectory,
}

/// How hidden words are chosen as the difficulty rises.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    Simple,
    FocusedLearning,
}

/// Named configuration of one practice session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub range: Range,
    pub level: Level,
    pub strategy: Strategy,
}

impl Session {
    pub fn named(name: &str) -> Session {
        Session {
            name: name.to_owned(),
            ..Session::default()
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session {
            name: String::new(),
            range: Range::default(),
            level: Level::Level1,
            strategy: Strategy::Simple,
        }
    }
}

/// JSON-file-backed collection of sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Opens a store rooted at the platform data directory.
    pub fn open_default() -> Result<Self, SessionError> {
        let dirs =
            ProjectDirs::from("io", "versetype", "versetype").ok_or(SessionError::NoDirectory)?;
        Ok(Self::open(dirs.data_dir()))
    }

    /// Opens a store rooted at the given directory.
    pub fn open(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// Loads every stored session. A missing file is an empty store.
    pub fn list(&self) -> Result<Vec<Session>, SessionError> {
        match OpenOptions::new().read(true).open(self.sessions_file()) {
            Ok(file) => {
                let reader = BufReader::new(file);
                serde_json::from_reader(reader).map_err(SessionError::from)
            }
            Err(ref error) if error.kind() == ErrorKind::NotFound => Ok(vec![]),
            Err(error) => Err(error.into()),
        }
    }

    /// Adds a session, rejecting duplicate names and enforcing the session
    /// cap.
    pub fn create(&self, session: Session) -> Result<(), SessionError> {
        let mut sessions = self.list()?;
        if sessions.len() >= MAX_SESSIONS {
            return Err(SessionError::TooManySessions);
        }
        if sessions.iter().any(|stored| stored.name == session.name) {
            return Err(SessionError::SessionExists { name: session.name });
        }
        sessions.push(session);
        self.store_all(&sessions)
    }

    /// Removes the session with the given name, if present.
    pub fn delete(&self, name: &str) -> Result<(), SessionError> {
        let mut sessions = self.list()?;
        sessions.retain(|session| session.name != name);
        self.store_all(&sessions)
    }

    fn store_all(&self, sessions: &[Session]) -> Result<(), SessionError> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let writer = BufWriter::new(
            OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(self.sessions_file())?,
        );
        serde_json::to_writer_pretty(writer, sessions)?;
        Ok(())
    }

    fn sessions_file(&self) -> PathBuf {
        self.dir.join(SESSIONS_FILE)
    }
}

//! Reveal policy.
//!
//! The difficulty level decides how much of the upcoming passage is shown
//! before it is typed. Lower levels reveal only a small lookahead window of
//! words ahead of the cursor; the highest level reveals the whole passage
//! for review. Applying a level is a pure function of (level, cursor): it
//! recomputes every visibility flag from scratch, never touches typing
//! state, and is idempotent.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

use crate::state::TypingState;

#[derive(Debug, Error)]
pub enum LevelError {
    /// The numeric level is outside the policy range.
    #[error("unknown difficulty level {0}")]
    Unknown(u8),
}

/// Difficulty of a practice session, from full guidance to full recall.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize, Deserialize,
)]
pub enum Level {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl Level {
    pub const MAX: Level = Level::Level5;

    /// How many words ahead of the active word are revealed.
    ///
    /// Non-decreasing in the level; the last step is unbounded so the
    /// maximum level always reveals the entire passage.
    pub fn window(self) -> usize {
        match self {
            Level::Level1 => 1,
            Level::Level2 => 2,
            Level::Level3 => 4,
            Level::Level4 => 8,
            Level::Level5 => usize::MAX,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Level::Level1),
            1 => Ok(Level::Level2),
            2 => Ok(Level::Level3),
            3 => Ok(Level::Level4),
            4 => Ok(Level::Level5),
            other => Err(LevelError::Unknown(other)),
        }
    }
}

/// Recomputes word and character visibility for the given level.
///
/// Every word up to and including the active word stays visible (text the
/// cursor has already passed is never re-hidden), plus `level.window()`
/// words of lookahead. Whitespace characters are owned by no word and are
/// always visible. Typing and correctness state is never altered.
pub fn apply_level(state: &mut TypingState, level: Level) {
    // Once the passage is complete every word is behind the cursor.
    let active = state.active_word().unwrap_or(state.word_count());
    let limit = active.saturating_add(level.window());

    for word_id in 0..state.word_count() {
        state.set_word_visible(word_id, word_id <= active || word_id < limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn visible_words(state: &TypingState) -> Vec<usize> {
        state
            .words()
            .iter()
            .filter(|word| word.visible)
            .map(|word| word.id)
            .collect()
    }

    #[test]
    fn lowest_level_reveals_only_the_active_word() {
        let mut state = TypingState::new("one two three four");
        apply_level(&mut state, Level::Level1);
        assert_eq!(visible_words(&state), vec![0]);

        // The hidden words' characters follow suit; whitespace stays shown.
        assert!(!state.get_character(4).unwrap().visible);
        assert!(state.get_character(3).unwrap().visible);
    }

    #[test]
    fn max_level_reveals_everything_regardless_of_cursor() {
        let mut state = TypingState::new("one two three four");
        apply_level(&mut state, Level::MAX);
        assert_eq!(visible_words(&state), vec![0, 1, 2, 3]);
    }

    #[test]
    fn window_follows_the_cursor() {
        let mut state = TypingState::new("one two three four");
        state.process_line("one").unwrap();

        apply_level(&mut state, Level::Level1);
        // Word 0 is behind the cursor and stays visible; word 1 is active.
        assert_eq!(visible_words(&state), vec![0, 1]);

        apply_level(&mut state, Level::Level2);
        assert_eq!(visible_words(&state), vec![0, 1, 2]);
    }

    #[test]
    fn applying_a_level_twice_is_idempotent() {
        let mut state = TypingState::new("Rejoice always. Pray continually.");
        state.process_line("Rejoice").unwrap();

        apply_level(&mut state, Level::Level2);
        let once: Vec<bool> = state.characters().iter().map(|c| c.visible).collect();

        apply_level(&mut state, Level::Level2);
        let twice: Vec<bool> = state.characters().iter().map(|c| c.visible).collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn visibility_is_monotonic_in_the_level() {
        for pair in Level::iter().zip(Level::iter().skip(1)) {
            let (lower, higher) = pair;
            assert!(lower.window() <= higher.window());

            let mut state = TypingState::new("In the beginning God created");
            state.process_line("In").unwrap();

            apply_level(&mut state, lower);
            let lower_visible = visible_words(&state);

            apply_level(&mut state, higher);
            let higher_visible = visible_words(&state);

            for word_id in &lower_visible {
                assert!(higher_visible.contains(word_id));
            }
        }
    }

    #[test]
    fn apply_level_never_touches_typing_state() {
        let mut state = TypingState::new("GO UP");
        state.process_line("GX").unwrap();
        let cursor = state.cursor();
        let typed: Vec<_> = state.characters().iter().map(|c| c.typed).collect();

        apply_level(&mut state, Level::Level1);

        assert_eq!(state.cursor(), cursor);
        let after: Vec<_> = state.characters().iter().map(|c| c.typed).collect();
        assert_eq!(typed, after);
    }

    #[test]
    fn numeric_levels_parse_within_the_policy_range() {
        assert_eq!(Level::try_from(0).unwrap(), Level::Level1);
        assert_eq!(Level::try_from(4).unwrap(), Level::Level5);
        assert!(matches!(Level::try_from(5), Err(LevelError::Unknown(5))));
    }

    #[test]
    fn completed_passage_stays_fully_visible() {
        let mut state = TypingState::new("GO UP");
        state.process_line("GOUP").unwrap();
        apply_level(&mut state, Level::Level1);
        assert_eq!(visible_words(&state), vec![0, 1]);
    }
}

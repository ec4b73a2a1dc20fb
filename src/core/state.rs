//! Game state snapshot
//!
//! A [`GameState`] is an immutable value: every transition produces a new
//! state and leaves the old one untouched, so states can be shared freely
//! across readers and retained as an undo chain.

use super::{Move, Word};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a puzzle in progress
///
/// Holds the current word, the target word, the accumulated cost and the
/// ordered move history. `total_cost` always equals the sum of the recorded
/// move costs; completion is derived from word equality, never stored.
///
/// All four fields are required when deserializing a persisted state;
/// unknown extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    current_word: Word,
    target_word: Word,
    total_cost: u32,
    moves: Vec<Move>,
}

impl GameState {
    /// Create the initial state of a new game
    ///
    /// Any two words are accepted, including empty words and words of
    /// different lengths.
    #[must_use]
    pub fn new(start_word: Word, target_word: Word) -> Self {
        Self {
            current_word: start_word,
            target_word,
            total_cost: 0,
            moves: Vec::new(),
        }
    }

    /// The word as it currently stands
    #[inline]
    #[must_use]
    pub fn current_word(&self) -> &Word {
        &self.current_word
    }

    /// The word the player is trying to reach
    #[inline]
    #[must_use]
    pub fn target_word(&self) -> &Word {
        &self.target_word
    }

    /// Accumulated cost of all moves made so far
    #[inline]
    #[must_use]
    pub const fn total_cost(&self) -> u32 {
        self.total_cost
    }

    /// Move history in application order
    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Whether the current word equals the target word
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_word == self.target_word
    }

    /// Quick estimate of how many operations remain
    ///
    /// Positional difference count when the lengths match, otherwise the
    /// shorter length plus the length gap. A coarse display figure, not the
    /// cost heuristic used for efficiency scoring.
    #[must_use]
    pub fn remaining_operations(&self) -> usize {
        if self.is_complete() {
            return 0;
        }

        let current = self.current_word.chars();
        let target = self.target_word.chars();

        if current.len() == target.len() {
            current
                .iter()
                .zip(target.iter())
                .filter(|(c, t)| c != t)
                .count()
        } else {
            current.len().min(target.len()) + current.len().abs_diff(target.len())
        }
    }

    /// Produce the successor state after a move
    ///
    /// The move history is copied into a fresh vector, so the new state
    /// shares no mutable storage with this one.
    #[must_use]
    pub fn with_move(&self, mv: Move, new_word: Word) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(mv);

        Self {
            current_word: new_word,
            target_word: self.target_word.clone(),
            total_cost: self.total_cost + mv.cost(),
            moves,
        }
    }
}

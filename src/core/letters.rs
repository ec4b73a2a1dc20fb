//! Letter feedback records
//!
//! Produced fresh by [`crate::analysis::analyze_letters`] for each call;
//! never stored inside a game state.

use serde::{Deserialize, Serialize};

/// Classification of a single letter against the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    /// Letter is in the correct position
    Correct,
    /// Letter exists in the target but at a different position
    Present,
    /// Letter has no unclaimed occurrence in the target
    Absent,
}

/// Feedback for one position of the current word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterResult {
    pub position: usize,
    pub letter: char,
    pub status: LetterStatus,
}

impl LetterResult {
    #[must_use]
    pub const fn new(position: usize, letter: char, status: LetterStatus) -> Self {
        Self {
            position,
            letter,
            status,
        }
    }
}

//! Move records
//!
//! A [`Move`] is a single completed edit operation together with the cost it
//! was charged at the time it was made. Moves are facts about what happened:
//! the cost is assigned at construction and never recomputed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of edit operation, with exactly the payload its kind requires
///
/// Each variant carries only its own fields, so a delete can never be
/// constructed with a replacement character attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveKind {
    /// Remove the letter at `index`
    Delete { index: usize },
    /// Remove the letter at `from` and reinsert it at `to`
    Move { from: usize, to: usize },
    /// Replace the letter at `index` with `new_char`
    Exchange { index: usize, new_char: char },
}

/// A completed edit operation with its assigned cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(flatten)]
    kind: MoveKind,
    cost: u32,
}

impl Move {
    /// Construct a move from a kind and its assigned cost
    #[must_use]
    pub const fn new(kind: MoveKind, cost: u32) -> Self {
        Self { kind, cost }
    }

    /// A delete at `index`
    #[must_use]
    pub const fn delete(index: usize, cost: u32) -> Self {
        Self::new(MoveKind::Delete { index }, cost)
    }

    /// A letter relocation from `from` to `to`
    #[must_use]
    pub const fn move_letter(from: usize, to: usize, cost: u32) -> Self {
        Self::new(MoveKind::Move { from, to }, cost)
    }

    /// An exchange of the letter at `index` for `new_char`
    #[must_use]
    pub const fn exchange(index: usize, new_char: char, cost: u32) -> Self {
        Self::new(MoveKind::Exchange { index, new_char }, cost)
    }

    /// The operation this move performed
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    /// The cost charged for this move
    #[inline]
    #[must_use]
    pub const fn cost(&self) -> u32 {
        self.cost
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Delete { index } => write!(f, "delete @{index}"),
            MoveKind::Move { from, to } => write!(f, "move {from}→{to}"),
            MoveKind::Exchange { index, new_char } => {
                write!(f, "exchange @{index} with '{new_char}'")
            }
        }
    }
}

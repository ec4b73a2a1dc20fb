//! Heuristic auto-player
//!
//! Plays a puzzle the way the suggestion heuristic would: fix the first
//! differing position (move the needed letter if it sits later in the word,
//! otherwise exchange), then trim surplus length with trailing deletes.
//! Greedy and not optimal; a target longer than the current word is
//! unsolvable because insertion is not an operation.

use crate::core::{GameState, MoveKind, Word};
use crate::engine::{create_game, delete_letter, exchange_letter, move_letter};

/// Configuration for the auto-player
pub struct SolveConfig {
    pub start: String,
    pub target: String,
    pub max_moves: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(start: String, target: String) -> Self {
        Self {
            start,
            target,
            max_moves: 64,
        }
    }
}

/// One applied step in the solution transcript
pub struct SolveStep {
    pub description: String,
    pub word_after: String,
    pub total_cost: u32,
}

/// Result of an auto-play run
pub struct SolveResult {
    pub start: Word,
    pub state: GameState,
    pub steps: Vec<SolveStep>,
    pub solved: bool,
}

/// Pick the next move the way the suggestion heuristic would
///
/// `None` means either the game is complete or no supported operation can
/// make progress (the target is longer than the current word).
fn plan_move(state: &GameState) -> Option<MoveKind> {
    if state.is_complete() {
        return None;
    }

    let current = state.current_word().chars();
    let target = state.target_word().chars();
    let overlap = current.len().min(target.len());

    for i in 0..overlap {
        if current[i] != target[i] {
            let wanted = target[i];
            let later = current
                .iter()
                .skip(i + 1)
                .position(|&c| c == wanted)
                .map(|offset| i + 1 + offset);

            return Some(match later {
                Some(from) => MoveKind::Move { from, to: i },
                None => MoveKind::Exchange {
                    index: i,
                    new_char: wanted,
                },
            });
        }
    }

    if current.len() > target.len() {
        Some(MoveKind::Delete {
            index: target.len(),
        })
    } else {
        None
    }
}

/// Auto-play a puzzle from start to target
///
/// Each planned move fixes one position or trims one surplus letter, so
/// the run always terminates; `max_moves` is a backstop, not the usual
/// exit. The transcript records every applied step.
#[must_use]
pub fn solve_puzzle(config: &SolveConfig) -> SolveResult {
    let mut state = create_game(config.start.as_str(), config.target.as_str());
    let mut steps = Vec::new();

    for _ in 0..config.max_moves {
        let Some(kind) = plan_move(&state) else {
            break;
        };

        let (description, next) = match kind {
            MoveKind::Delete { index } => (
                format!("delete letter at {index}"),
                delete_letter(&state, index),
            ),
            MoveKind::Move { from, to } => (
                format!("move letter {from} to {to}"),
                move_letter(&state, from, to),
            ),
            MoveKind::Exchange { index, new_char } => (
                format!("exchange letter at {index} with '{new_char}'"),
                exchange_letter(&state, index, new_char),
            ),
        };

        // Planned moves are always in bounds; stop defensively if not
        let Ok(next) = next else {
            break;
        };

        state = next;
        steps.push(SolveStep {
            description,
            word_after: state.current_word().text().to_string(),
            total_cost: state.total_cost(),
        });
    }

    let solved = state.is_complete();
    SolveResult {
        start: Word::new(config.start.as_str()),
        state,
        steps,
        solved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(start: &str, target: &str) -> SolveResult {
        solve_puzzle(&SolveConfig::new(start.to_string(), target.to_string()))
    }

    #[test]
    fn solves_exchange_only_puzzles() {
        let result = solve("abc", "xyz");
        assert!(result.solved);
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.state.total_cost(), 3);
    }

    #[test]
    fn solves_hello_to_world() {
        let result = solve("hello", "world");
        assert!(result.solved);
        assert_eq!(result.state.current_word().text(), "world");
        // One move is reused for the misplaced 'o', the rest are exchanges
        assert_eq!(result.state.total_cost(), 4);
    }

    #[test]
    fn prefers_moving_an_existing_letter() {
        let result = solve("hello", "ehllo");
        assert!(result.solved);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].description, "move letter 1 to 0");
    }

    #[test]
    fn trims_surplus_length_with_deletes() {
        let result = solve("hello", "hell");
        assert!(result.solved);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].description, "delete letter at 4");
    }

    #[test]
    fn longer_target_is_unsolvable() {
        let result = solve("hell", "hello");
        assert!(!result.solved);
        // No operation could be applied at all
        assert!(result.steps.is_empty());
    }

    #[test]
    fn already_solved_needs_no_steps() {
        let result = solve("same", "same");
        assert!(result.solved);
        assert!(result.steps.is_empty());
        assert_eq!(result.state.total_cost(), 0);
    }

    #[test]
    fn transcript_costs_are_monotonic() {
        let result = solve("carpet", "cat");
        assert!(result.solved);
        for pair in result.steps.windows(2) {
            assert!(pair[0].total_cost < pair[1].total_cost);
        }
    }
}

//! Game state transitions
//!
//! The orchestration layer: each operation prices the move through the cost
//! model, applies the edit through the transforms, and appends the move to
//! a new state. Input states are never altered; callers decide which
//! resulting value becomes "the" current state.

use super::error::EngineError;
use super::{cost, transform};
use crate::core::{GameState, Move, MoveKind, Word};

/// Start a new game from a starting word and a target word
///
/// No compatibility validation is performed: any two words are accepted,
/// including empty words and mismatched lengths.
///
/// # Examples
/// ```
/// use wordmorph::engine::create_game;
///
/// let state = create_game("hello", "world");
/// assert_eq!(state.total_cost(), 0);
/// assert!(!state.is_complete());
/// ```
#[must_use]
pub fn create_game(start_word: impl Into<Word>, target_word: impl Into<Word>) -> GameState {
    GameState::new(start_word.into(), target_word.into())
}

/// Delete the letter at `index`, producing the successor state
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when `index` is outside the
/// current word; the input state is unaffected.
pub fn delete_letter(state: &GameState, index: usize) -> Result<GameState, EngineError> {
    let cost = cost::delete_cost(state.current_word(), index)?;
    let mv = Move::delete(index, cost);
    let new_word = transform::delete_letter(state.current_word(), index)?;

    Ok(state.with_move(mv, new_word))
}

/// Move a letter from `from` to `to`, producing the successor state
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when either index is outside
/// the current word.
pub fn move_letter(state: &GameState, from: usize, to: usize) -> Result<GameState, EngineError> {
    let cost = cost::move_cost(state.current_word(), from, to)?;
    let mv = Move::move_letter(from, to, cost);
    let new_word = transform::move_letter(state.current_word(), from, to)?;

    Ok(state.with_move(mv, new_word))
}

/// Exchange the letter at `index` for `new_char`, producing the successor state
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when `index` is outside the
/// current word.
pub fn exchange_letter(
    state: &GameState,
    index: usize,
    new_char: char,
) -> Result<GameState, EngineError> {
    let cost = cost::exchange_cost(state.current_word(), index)?;
    let mv = Move::exchange(index, new_char, cost);
    let new_word = transform::exchange_letter(state.current_word(), index, new_char)?;

    Ok(state.with_move(mv, new_word))
}

/// Whether the puzzle is solved
///
/// Exact equality of the current and target words. Completion does not
/// lock the state: further operations are still permitted.
#[must_use]
pub fn check_win(state: &GameState) -> bool {
    state.current_word() == state.target_word()
}

/// Total cost accumulated so far
///
/// Reads the stored total; no recomputation.
#[must_use]
pub fn calculate_cost(state: &GameState) -> u32 {
    state.total_cost()
}

/// Probe whether a candidate move would be accepted, without applying it
///
/// A pure boolean check against the current word's bounds; never returns
/// an error.
#[must_use]
pub fn is_valid_move(state: &GameState, mv: &Move) -> bool {
    let len = state.current_word().len();
    match mv.kind() {
        MoveKind::Delete { index } | MoveKind::Exchange { index, .. } => index < len,
        MoveKind::Move { from, to } => from < len && to < len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cost::total_cost;

    #[test]
    fn create_game_accepts_any_words() {
        let state = create_game("", "longer");
        assert_eq!(state.current_word().text(), "");
        assert_eq!(state.target_word().text(), "longer");
        assert_eq!(state.total_cost(), 0);
    }

    #[test]
    fn exchange_scenario_hello_to_world() {
        let state = create_game("hello", "world");
        let state = exchange_letter(&state, 0, 'w').unwrap();
        assert_eq!(state.current_word().text(), "wello");
        assert_eq!(state.total_cost(), 1);

        let state = exchange_letter(&state, 1, 'o').unwrap();
        assert_eq!(state.current_word().text(), "wollo");
        assert_eq!(state.total_cost(), 2);

        let state = exchange_letter(&state, 2, 'r').unwrap();
        assert_eq!(state.current_word().text(), "worlo");
        assert_eq!(state.total_cost(), 3);

        let state = exchange_letter(&state, 4, 'd').unwrap();
        assert_eq!(state.current_word().text(), "world");
        assert_eq!(state.total_cost(), 4);
        assert!(check_win(&state));
    }

    #[test]
    fn delete_scenario_hello_to_hell() {
        let state = create_game("hello", "hell");
        let state = delete_letter(&state, 4).unwrap();

        assert_eq!(state.current_word().text(), "hell");
        assert_eq!(state.total_cost(), 1);
        assert!(check_win(&state));
    }

    #[test]
    fn move_scenario_hello_to_ehllo() {
        let state = create_game("hello", "ehllo");
        let state = move_letter(&state, 1, 0).unwrap();

        assert_eq!(state.current_word().text(), "ehllo");
        assert_eq!(state.total_cost(), 1);
        assert!(check_win(&state));
    }

    #[test]
    fn total_cost_always_matches_move_sum() {
        let mut state = create_game("hello", "dell");
        state = exchange_letter(&state, 0, 'd').unwrap();
        state = delete_letter(&state, 4).unwrap();
        state = move_letter(&state, 1, 2).unwrap();

        assert_eq!(state.total_cost(), total_cost(state.moves()));
        assert_eq!(calculate_cost(&state), state.total_cost());
    }

    #[test]
    fn failed_operation_produces_no_state() {
        let state = create_game("hello", "world");
        assert!(delete_letter(&state, 9).is_err());

        // The input is still fully usable
        assert_eq!(state.current_word().text(), "hello");
        assert!(state.moves().is_empty());
    }

    #[test]
    fn operations_remain_permitted_after_completion() {
        let state = create_game("hell", "hell");
        assert!(check_win(&state));

        let state = exchange_letter(&state, 0, 'b').unwrap();
        assert_eq!(state.current_word().text(), "bell");
        assert!(!check_win(&state));
    }

    #[test]
    fn is_valid_move_checks_bounds_per_kind() {
        let state = create_game("hello", "world");

        assert!(is_valid_move(&state, &Move::delete(4, 1)));
        assert!(!is_valid_move(&state, &Move::delete(5, 1)));

        assert!(is_valid_move(&state, &Move::move_letter(0, 4, 1)));
        assert!(!is_valid_move(&state, &Move::move_letter(0, 5, 1)));
        assert!(!is_valid_move(&state, &Move::move_letter(5, 0, 1)));

        assert!(is_valid_move(&state, &Move::exchange(0, 'w', 1)));
        assert!(!is_valid_move(&state, &Move::exchange(usize::MAX, 'w', 1)));
    }

    #[test]
    fn is_valid_move_on_empty_word_is_always_false() {
        let state = create_game("", "a");
        assert!(!is_valid_move(&state, &Move::delete(0, 1)));
        assert!(!is_valid_move(&state, &Move::move_letter(0, 0, 1)));
        assert!(!is_valid_move(&state, &Move::exchange(0, 'a', 1)));
    }
}

//! Move suggestion heuristic
//!
//! Produces a human-readable hint for the next move. Greedy and first-
//! difference driven, so it is rarely optimal; it is a hint system, not a
//! solver.

use crate::core::GameState;
use std::cmp::Ordering;

/// Suggest a next move for an unfinished game
///
/// Returns `None` once the game is complete. Otherwise scans for the first
/// position where the current and target words differ: if the needed letter
/// appears later in the current word, a move is suggested from its first
/// later occurrence; otherwise an exchange. When the overlapping range
/// matches entirely, the suggestion falls back to the length difference:
/// delete the first surplus position, or report that an insertion would be
/// required (no operation supports insertion).
///
/// # Examples
/// ```
/// use wordmorph::analysis::suggest_move;
/// use wordmorph::engine::create_game;
///
/// let state = create_game("hello", "ehllo");
/// assert_eq!(
///     suggest_move(&state).unwrap(),
///     "Move 'e' from position 1 to position 0"
/// );
/// ```
#[must_use]
pub fn suggest_move(state: &GameState) -> Option<String> {
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
                Some(from) => format!("Move '{wanted}' from position {from} to position {i}"),
                None => format!(
                    "Exchange '{}' at position {i} with '{wanted}'",
                    current[i]
                ),
            });
        }
    }

    match current.len().cmp(&target.len()) {
        Ordering::Greater => Some(format!(
            "Delete the letter at position {}",
            target.len()
        )),
        Ordering::Less => Some(format!(
            "'{}' would need to be inserted, which no operation supports",
            target[current.len()]
        )),
        Ordering::Equal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::create_game;

    #[test]
    fn no_suggestion_for_complete_games() {
        let state = create_game("done", "done");
        assert_eq!(suggest_move(&state), None);
    }

    #[test]
    fn suggests_a_move_when_the_letter_sits_later() {
        let state = create_game("hello", "ehllo");
        assert_eq!(
            suggest_move(&state).unwrap(),
            "Move 'e' from position 1 to position 0"
        );
    }

    #[test]
    fn move_suggestion_uses_the_first_later_occurrence() {
        // Wanted 'l' appears at positions 2 and 3; the first one is named
        let state = create_game("hello", "lheol");
        assert_eq!(
            suggest_move(&state).unwrap(),
            "Move 'l' from position 2 to position 0"
        );
    }

    #[test]
    fn suggests_an_exchange_when_the_letter_is_unavailable() {
        let state = create_game("hello", "world");
        assert_eq!(
            suggest_move(&state).unwrap(),
            "Exchange 'h' at position 0 with 'w'"
        );
    }

    #[test]
    fn falls_back_to_delete_for_a_length_surplus() {
        let state = create_game("hello", "hell");
        assert_eq!(
            suggest_move(&state).unwrap(),
            "Delete the letter at position 4"
        );
    }

    #[test]
    fn reports_unsupported_insertion_for_a_length_deficit() {
        let state = create_game("hell", "hello");
        assert_eq!(
            suggest_move(&state).unwrap(),
            "'o' would need to be inserted, which no operation supports"
        );
    }
}

//! Cost model
//!
//! Every operation currently carries a fixed unit cost. The cost functions
//! validate the same bounds as the transforms in
//! [`crate::engine::transform`], so a caller can price an operation before
//! committing to it and get the same verdict either way.

use super::error::{EngineError, check_index};
use crate::core::{Move, Word};

/// Cost of a delete operation
pub const DELETE_COST: u32 = 1;

/// Cost of a move operation
pub const MOVE_COST: u32 = 1;

/// Cost of an exchange operation
pub const EXCHANGE_COST: u32 = 1;

/// Price a delete at `index`
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] for the same indices
/// [`super::transform::delete_letter`] would reject.
pub fn delete_cost(word: &Word, index: usize) -> Result<u32, EngineError> {
    check_index(index, word.len())?;
    Ok(DELETE_COST)
}

/// Price a move from `from` to `to`
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when either index is outside
/// the word.
pub fn move_cost(word: &Word, from: usize, to: usize) -> Result<u32, EngineError> {
    check_index(from, word.len())?;
    check_index(to, word.len())?;
    Ok(MOVE_COST)
}

/// Price an exchange at `index`
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when `index >= word.len()`.
pub fn exchange_cost(word: &Word, index: usize) -> Result<u32, EngineError> {
    check_index(index, word.len())?;
    Ok(EXCHANGE_COST)
}

/// Sum the recorded costs of a sequence of moves
///
/// Pure reduction; an empty sequence sums to 0.
#[must_use]
pub fn total_cost(moves: &[Move]) -> u32 {
    moves.iter().map(Move::cost).sum()
}

/// Heuristic lower-bound estimate of the cost between two words
///
/// The policy is deliberately simple and sometimes loose:
/// 1. equal words cost 0;
/// 2. a length surplus is priced as trailing deletes, one per extra
///    character, without choosing which characters to drop;
/// 3. remaining positional differences are priced as exchanges.
///
/// Beneficial move operations and insertion needs are ignored (insertion is
/// not an operation at all), so this is not a shortest-edit-distance and
/// must not be replaced by one: efficiency scoring depends on these exact
/// values.
///
/// # Examples
/// ```
/// use wordmorph::core::Word;
/// use wordmorph::engine::cost::estimate_minimum_cost;
///
/// assert_eq!(estimate_minimum_cost(&Word::new("hello"), &Word::new("world")), 4);
/// assert_eq!(estimate_minimum_cost(&Word::new("hello"), &Word::new("hell")), 1);
/// ```
#[must_use]
pub fn estimate_minimum_cost(current: &Word, target: &Word) -> u32 {
    if current == target {
        return 0;
    }

    let current_chars = current.chars();
    let target_chars = target.chars();
    let mut cost = 0;

    // Price the length surplus as trailing deletes
    let mut effective_len = current_chars.len();
    while effective_len > target_chars.len() {
        effective_len -= 1;
        cost += DELETE_COST;
    }

    // Price positional differences as exchanges
    for i in 0..effective_len {
        if i < target_chars.len() && current_chars[i] != target_chars[i] {
            cost += EXCHANGE_COST;
        }
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_costs_for_valid_indices() {
        let word = Word::new("hello");
        assert_eq!(delete_cost(&word, 0).unwrap(), DELETE_COST);
        assert_eq!(move_cost(&word, 4, 0).unwrap(), MOVE_COST);
        assert_eq!(exchange_cost(&word, 2).unwrap(), EXCHANGE_COST);
    }

    #[test]
    fn cost_checks_mirror_transform_bounds() {
        let word = Word::new("hello");
        assert_eq!(
            delete_cost(&word, 5),
            Err(EngineError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert!(move_cost(&word, 5, 0).is_err());
        assert!(move_cost(&word, 0, 5).is_err());
        assert!(exchange_cost(&word, 5).is_err());
    }

    #[test]
    fn total_cost_is_a_plain_sum() {
        assert_eq!(total_cost(&[]), 0);

        let moves = [
            Move::delete(0, 1),
            Move::move_letter(1, 0, 1),
            Move::exchange(0, 'x', 1),
        ];
        assert_eq!(total_cost(&moves), 3);
    }

    #[test]
    fn estimate_zero_for_equal_words() {
        let word = Word::new("hello");
        assert_eq!(estimate_minimum_cost(&word, &word), 0);
        assert_eq!(estimate_minimum_cost(&Word::new(""), &Word::new("")), 0);
    }

    #[test]
    fn estimate_counts_positional_differences() {
        // h/w, e/o, l/r, o/d differ; position 3 matches
        assert_eq!(
            estimate_minimum_cost(&Word::new("hello"), &Word::new("world")),
            4
        );
    }

    #[test]
    fn estimate_prices_length_surplus_as_deletes() {
        assert_eq!(
            estimate_minimum_cost(&Word::new("hello"), &Word::new("hell")),
            1
        );
        // One trailing delete, then "hell" vs "helo" differs at position 3
        assert_eq!(
            estimate_minimum_cost(&Word::new("hello"), &Word::new("helo")),
            2
        );
    }

    #[test]
    fn estimate_is_blind_to_insertions() {
        // Shorter current: the prefix matches, the needed insertions are
        // not priced. The looseness is part of the policy.
        assert_eq!(
            estimate_minimum_cost(&Word::new("abc"), &Word::new("abcdef")),
            0
        );
        assert_eq!(
            estimate_minimum_cost(&Word::new("xyz"), &Word::new("abcde")),
            3
        );
    }
}

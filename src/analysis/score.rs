//! Similarity and efficiency scoring

use crate::core::{GameState, Word};
use crate::engine::cost::estimate_minimum_cost;

/// Threshold above which a completed game counts as expert play
const EXPERT_EFFICIENCY: f64 = 0.9;

/// Similarity between two words in `[0.0, 1.0]`
///
/// Equal words (including two empty words) score 1.0; if exactly one word
/// is empty the score is 0.0. Otherwise the score is the count of matching
/// positions over the shorter length's range, divided by the longer length.
/// Alignment is positional only: a shifted-by-one word scores low even
/// though a single move would fix it.
///
/// # Examples
/// ```
/// use wordmorph::analysis::calculate_similarity;
/// use wordmorph::core::Word;
///
/// assert_eq!(calculate_similarity(&Word::new("hello"), &Word::new("hello")), 1.0);
/// assert_eq!(calculate_similarity(&Word::new("hello"), &Word::new("world")), 0.2);
/// ```
#[must_use]
pub fn calculate_similarity(current: &Word, target: &Word) -> f64 {
    if current == target {
        return 1.0;
    }
    if current.is_empty() || target.is_empty() {
        return 0.0;
    }

    let min_len = current.len().min(target.len());
    let max_len = current.len().max(target.len());
    let matches = (0..min_len)
        .filter(|&i| current.chars()[i] == target.chars()[i])
        .count();

    matches as f64 / max_len as f64
}

/// Efficiency of a completed game in `[0.0, 1.0]`
///
/// Incomplete games score 0.0. Completed games compare the accumulated cost
/// against [`estimate_minimum_cost`] of the final word pair; a zero-cost
/// game scores 1.0, otherwise the score is `min(1.0, estimate / cost)`.
///
/// Known quirk: the estimate is taken from the final word, which equals the
/// target once the game is complete, so it collapses to 0 and any completed
/// game with nonzero cost scores 0.0. The initial word is not retained in
/// the state, so a moves-versus-optimal measure is not available here.
#[must_use]
pub fn evaluate_efficiency(state: &GameState) -> f64 {
    if !state.is_complete() {
        return 0.0;
    }

    let estimate = estimate_minimum_cost(state.current_word(), state.target_word());

    if state.total_cost() == 0 {
        1.0
    } else {
        (f64::from(estimate) / f64::from(state.total_cost())).min(1.0)
    }
}

/// Whether a completed game demonstrates expert-level efficiency
#[must_use]
pub fn is_expert_solution(state: &GameState) -> bool {
    state.is_complete() && evaluate_efficiency(state) >= EXPERT_EFFICIENCY
}

//! Word pair analysis command

use crate::analysis::{analyze_letters, calculate_similarity, suggest_move};
use crate::core::{LetterResult, Word};
use crate::engine::{cost, create_game};

/// Everything the analyze command reports about a word pair
pub struct AnalysisReport {
    pub current: Word,
    pub target: Word,
    pub letters: Vec<LetterResult>,
    pub similarity: f64,
    pub estimated_cost: u32,
    pub suggestion: Option<String>,
}

/// Analyze an arbitrary word pair
///
/// Infallible: any pair of words (including empty ones) is analyzable.
#[must_use]
pub fn analyze_pair(current: &str, target: &str) -> AnalysisReport {
    let current = Word::new(current);
    let target = Word::new(target);

    let letters = analyze_letters(&current, &target);
    let similarity = calculate_similarity(&current, &target);
    let estimated_cost = cost::estimate_minimum_cost(&current, &target);
    let suggestion = suggest_move(&create_game(current.clone(), target.clone()));

    AnalysisReport {
        current,
        target,
        letters,
        similarity,
        estimated_cost,
        suggestion,
    }
}

//! Game state report

use super::score::{evaluate_efficiency, is_expert_solution};
use super::suggest::suggest_move;
use super::calculate_similarity;
use crate::core::GameState;

/// Compose a human-readable analysis of a game state
///
/// Shows the words, cost, move count and completion flag; completed games
/// get an efficiency and expert rating, unfinished games a similarity score
/// and a suggestion when one is available.
#[must_use]
pub fn analyze_game_state(state: &GameState) -> String {
    let mut lines = vec![
        "=== Game State Analysis ===".to_string(),
        format!("Current: {}", state.current_word()),
        format!("Target:  {}", state.target_word()),
        format!("Cost:    {}", state.total_cost()),
        format!("Moves:   {}", state.moves().len()),
        format!("Complete: {}", state.is_complete()),
    ];

    if state.is_complete() {
        lines.push(format!(
            "Efficiency: {:.1}%",
            evaluate_efficiency(state) * 100.0
        ));
        lines.push(format!("Expert Level: {}", is_expert_solution(state)));
    } else {
        lines.push(format!(
            "Similarity: {:.1}%",
            calculate_similarity(state.current_word(), state.target_word()) * 100.0
        ));
        if let Some(suggestion) = suggest_move(state) {
            lines.push(format!("Suggestion: {suggestion}"));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_game, exchange_letter};

    #[test]
    fn report_shows_words_and_cost() {
        let state = create_game("hello", "world");
        let report = analyze_game_state(&state);

        assert!(report.contains("Current: hello"));
        assert!(report.contains("Target:  world"));
        assert!(report.contains("Cost:    0"));
        assert!(report.contains("Moves:   0"));
        assert!(report.contains("Complete: false"));
    }

    #[test]
    fn unfinished_games_report_similarity_and_suggestion() {
        let state = create_game("hello", "world");
        let report = analyze_game_state(&state);

        assert!(report.contains("Similarity: 20.0%"));
        assert!(report.contains("Suggestion: Exchange 'h' at position 0 with 'w'"));
        assert!(!report.contains("Efficiency"));
    }

    #[test]
    fn completed_games_report_efficiency() {
        let state = create_game("bell", "ball");
        let state = exchange_letter(&state, 1, 'a').unwrap();
        let report = analyze_game_state(&state);

        assert!(report.contains("Complete: true"));
        assert!(report.contains("Efficiency:"));
        assert!(report.contains("Expert Level: false"));
        assert!(!report.contains("Similarity"));
    }
}

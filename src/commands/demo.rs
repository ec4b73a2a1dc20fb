//! Scripted walkthrough
//!
//! Drives the engine through three small puzzles and collects a transcript,
//! useful as a smoke test and as a tour of the API.

use crate::analysis::analyze_game_state;
use crate::engine::{
    EngineError, calculate_cost, check_win, create_game, delete_letter, exchange_letter,
    move_letter,
};

/// Run the demo transcript
///
/// # Errors
/// Returns [`EngineError`] if any scripted step is rejected; with the
/// fixed script this does not happen.
pub fn run_demo() -> Result<String, EngineError> {
    let mut output = Vec::new();

    output.push("=== Word Transformation Demo ===".to_string());
    output.push(String::new());

    // Sample 1: exchanges only
    output.push("--- Sample 1: 'hello' -> 'world' ---".to_string());
    let mut state = create_game("hello", "world");
    output.push(format!(
        "Initial: {} (Cost: {})",
        state.current_word(),
        state.total_cost()
    ));

    for (step, (index, new_char)) in [(0, 'w'), (1, 'o'), (2, 'r'), (4, 'd')]
        .into_iter()
        .enumerate()
    {
        state = exchange_letter(&state, index, new_char)?;
        output.push(format!(
            "Step {}:  {} (Cost: {})",
            step + 1,
            state.current_word(),
            state.total_cost()
        ));
    }
    output.push(format!("Complete: {}", check_win(&state)));
    output.push(String::new());

    // Sample 2: a single delete
    output.push("--- Sample 2: 'hello' -> 'hell' ---".to_string());
    let state2 = create_game("hello", "hell");
    output.push(format!(
        "Initial: {} (Cost: {})",
        state2.current_word(),
        state2.total_cost()
    ));
    let state2 = delete_letter(&state2, 4)?;
    output.push(format!(
        "Delete:  {} (Cost: {})",
        state2.current_word(),
        state2.total_cost()
    ));
    output.push(format!("Complete: {}", check_win(&state2)));
    output.push(String::new());

    // Sample 3: a single move
    output.push("--- Sample 3: 'hello' -> 'ehllo' ---".to_string());
    let state3 = create_game("hello", "ehllo");
    output.push(format!(
        "Initial: {} (Cost: {})",
        state3.current_word(),
        state3.total_cost()
    ));
    let state3 = move_letter(&state3, 1, 0)?;
    output.push(format!(
        "Move:    {} (Cost: {})",
        state3.current_word(),
        state3.total_cost()
    ));
    output.push(format!("Complete: {}", check_win(&state3)));
    output.push(String::new());

    output.push("--- Analysis ---".to_string());
    output.push(analyze_game_state(&state));

    output.push("--- Cost Summary ---".to_string());
    output.push(format!("Sample 1 total cost: {}", calculate_cost(&state)));
    output.push(format!("Sample 2 total cost: {}", calculate_cost(&state2)));
    output.push(format!("Sample 3 total cost: {}", calculate_cost(&state3)));

    Ok(output.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_and_reports_all_samples() {
        let transcript = run_demo().unwrap();

        assert!(transcript.contains("Step 4:  world (Cost: 4)"));
        assert!(transcript.contains("Delete:  hell (Cost: 1)"));
        assert!(transcript.contains("Move:    ehllo (Cost: 1)"));
        assert!(transcript.contains("Sample 1 total cost: 4"));
        assert!(transcript.contains("Sample 2 total cost: 1"));
        assert!(transcript.contains("Sample 3 total cost: 1"));
    }
}

//! Cross-component self-check
//!
//! Exercises every layer of the crate in one pass and reports a pass/fail
//! verdict per section. Useful as an installation sanity check; the real
//! coverage lives in the unit tests.

use crate::analysis::{analyze_letters, calculate_similarity, suggest_move};
use crate::core::{LetterStatus, Move, Word};
use crate::engine::{
    check_win, cost, create_game, delete_letter, exchange_letter, is_valid_move, move_letter,
    transform,
};
use crate::storage::{MemoryStore, ProgressStore, is_valid_state_json, serialize_state};

/// Outcome of the full validation run
#[derive(Debug)]
pub struct ValidationResult {
    pub passed: bool,
    pub messages: Vec<String>,
}

/// Run every validation section
#[must_use]
pub fn run_all_validations() -> ValidationResult {
    let sections: [(&str, fn() -> bool); 6] = [
        ("game engine", check_game_engine),
        ("cost model", check_cost_model),
        ("word transforms", check_transforms),
        ("analysis", check_analysis),
        ("serialization", check_serialization),
        ("multi-step scenarios", check_scenarios),
    ];

    let mut messages = Vec::new();
    let mut passed = true;

    for (name, check) in sections {
        if check() {
            messages.push(format!("ok   {name}"));
        } else {
            messages.push(format!("FAIL {name}"));
            passed = false;
        }
    }

    messages.push(String::new());
    if passed {
        messages.push("All validations passed".to_string());
    } else {
        messages.push("Some validations failed".to_string());
    }

    ValidationResult { passed, messages }
}

fn check_game_engine() -> bool {
    let game = create_game("hello", "world");
    if game.current_word().text() != "hello" || game.target_word().text() != "world" {
        return false;
    }

    let Ok(deleted) = delete_letter(&game, 0) else {
        return false;
    };
    if deleted.current_word().text() != "ello" || deleted.total_cost() != 1 {
        return false;
    }

    let Ok(moved) = move_letter(&game, 1, 0) else {
        return false;
    };
    if moved.current_word().text() != "ehllo" || moved.total_cost() != 1 {
        return false;
    }

    let Ok(exchanged) = exchange_letter(&game, 0, 'w') else {
        return false;
    };
    if exchanged.current_word().text() != "wello" || exchanged.total_cost() != 1 {
        return false;
    }

    check_win(&create_game("test", "test"))
        && is_valid_move(&game, &Move::delete(0, 1))
        && !is_valid_move(&game, &Move::delete(5, 1))
}

fn check_cost_model() -> bool {
    let word = Word::new("hello");

    cost::delete_cost(&word, 0) == Ok(1)
        && cost::move_cost(&word, 0, 4) == Ok(1)
        && cost::exchange_cost(&word, 2) == Ok(1)
        && cost::delete_cost(&word, 9).is_err()
        && cost::total_cost(&[Move::delete(0, 1), Move::exchange(0, 'x', 1)]) == 2
        && cost::estimate_minimum_cost(&word, &word) == 0
        && cost::estimate_minimum_cost(&word, &Word::new("world")) == 4
        && cost::estimate_minimum_cost(&word, &Word::new("helo")) == 2
}

fn check_transforms() -> bool {
    let word = Word::new("hello");

    transform::delete_letter(&word, 4).is_ok_and(|w| w.text() == "hell")
        && transform::move_letter(&word, 1, 0).is_ok_and(|w| w.text() == "ehllo")
        && transform::exchange_letter(&word, 0, 'w').is_ok_and(|w| w.text() == "wello")
        && transform::delete_letter(&word, 5).is_err()
        && transform::move_letter(&word, 0, 9).is_err()
}

fn check_analysis() -> bool {
    let word = Word::new("hello");
    let all_correct = analyze_letters(&word, &word)
        .iter()
        .all(|r| r.status == LetterStatus::Correct);

    let similarity_ok = (calculate_similarity(&word, &Word::new("world")) - 0.2).abs() < 1e-9
        && (calculate_similarity(&word, &word) - 1.0).abs() < 1e-9;

    let suggestion_ok = suggest_move(&create_game("hello", "world")).is_some()
        && suggest_move(&create_game("done", "done")).is_none();

    all_correct && similarity_ok && suggestion_ok
}

fn check_serialization() -> bool {
    let mut store = MemoryStore::new();
    let Ok(state) = exchange_letter(&create_game("hello", "world"), 0, 'w') else {
        return false;
    };

    let round_trip = store.save("validate", &state).is_ok()
        && store.load("validate").is_ok_and(|loaded| loaded == Some(state.clone()));

    let codec_ok = serialize_state(&state).is_ok_and(|json| is_valid_state_json(&json))
        && !is_valid_state_json("{ not a record }");

    round_trip && codec_ok
}

fn check_scenarios() -> bool {
    // Three exchanges
    let mut state = create_game("abc", "def");
    for (i, c) in [(0, 'd'), (1, 'e'), (2, 'f')] {
        let Ok(next) = exchange_letter(&state, i, c) else {
            return false;
        };
        state = next;
    }
    if !check_win(&state) || state.total_cost() != 3 {
        return false;
    }

    // A deletion
    let Ok(state) = delete_letter(&create_game("abcd", "abc"), 3) else {
        return false;
    };
    if !check_win(&state) || state.total_cost() != 1 {
        return false;
    }

    // A move
    let Ok(state) = move_letter(&create_game("abc", "bac"), 1, 0) else {
        return false;
    };
    check_win(&state) && state.total_cost() == 1
}

//! Game state serialization helpers
//!
//! The persisted shape is JSON with camelCase field names. Readers ignore
//! unknown fields; a record missing any of the four state fields fails to
//! parse and is treated as absent by the stores.

use crate::core::{GameState, Word};
use std::time::{SystemTime, UNIX_EPOCH};

/// Serialize a game state to pretty-printed JSON
///
/// # Errors
/// Returns a [`serde_json::Error`] if serialization fails.
pub fn serialize_state(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(state)
}

/// Deserialize a game state from JSON
///
/// # Errors
/// Returns a [`serde_json::Error`] when the text is not valid JSON or is
/// missing a required field.
pub fn deserialize_state(json: &str) -> Result<GameState, serde_json::Error> {
    serde_json::from_str(json)
}

/// Check whether a string parses as a valid persisted game state
#[must_use]
pub fn is_valid_state_json(json: &str) -> bool {
    deserialize_state(json).is_ok()
}

/// Generate a game identifier from the two words and the current time
///
/// Identifiers are opaque at the store boundary; uniqueness under rapid
/// creation is the caller's concern.
#[must_use]
pub fn generate_game_id(start_word: &Word, target_word: &Word) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());

    format!("{}_to_{}_{}", start_word.text(), target_word.text(), millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{create_game, delete_letter, exchange_letter};

    #[test]
    fn round_trip_preserves_the_state() {
        let state = create_game("hello", "hell");
        let state = exchange_letter(&state, 0, 'j').unwrap();
        let state = delete_letter(&state, 4).unwrap();

        let json = serialize_state(&state).unwrap();
        let back = deserialize_state(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn validity_probe_accepts_round_tripped_records() {
        let state = create_game("ab", "ba");
        let json = serialize_state(&state).unwrap();
        assert!(is_valid_state_json(&json));
    }

    #[test]
    fn validity_probe_rejects_garbage_and_partial_records() {
        assert!(!is_valid_state_json("not json"));
        assert!(!is_valid_state_json("{}"));
        assert!(!is_valid_state_json(
            r#"{"currentWord": "ab", "totalCost": 0}"#
        ));
    }

    #[test]
    fn game_id_embeds_both_words() {
        let id = generate_game_id(&Word::new("hello"), &Word::new("world"));
        assert!(id.starts_with("hello_to_world_"));
    }
}

//! Word edit operations
//!
//! Pure functions from a word and operation parameters to a new word. The
//! input word is never mutated; a failed call returns an error and nothing
//! else.

use super::error::{EngineError, check_index};
use crate::core::{Move, MoveKind, Word};

/// Remove the character at `index`
///
/// The result is one character shorter than the input.
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when `index >= word.len()`.
///
/// # Examples
/// ```
/// use wordmorph::core::Word;
/// use wordmorph::engine::transform::delete_letter;
///
/// let word = Word::new("hello");
/// assert_eq!(delete_letter(&word, 4).unwrap().text(), "hell");
/// assert!(delete_letter(&word, 5).is_err());
/// ```
pub fn delete_letter(word: &Word, index: usize) -> Result<Word, EngineError> {
    check_index(index, word.len())?;

    let mut chars = word.chars().to_vec();
    chars.remove(index);
    Ok(Word::from_chars(chars))
}

/// Remove the character at `from` and reinsert it at `to`
///
/// The insertion index is interpreted in the post-removal word: when
/// `from < to` the removal has shifted the tail left, so the character
/// lands at `to - 1`; otherwise it lands at `to` unchanged. Moving a
/// character onto itself returns the word as is. Length is preserved.
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when either index is outside
/// `[0, word.len())`.
///
/// # Examples
/// ```
/// use wordmorph::core::Word;
/// use wordmorph::engine::transform::move_letter;
///
/// let word = Word::new("hello");
/// assert_eq!(move_letter(&word, 1, 0).unwrap().text(), "ehllo");
/// assert_eq!(move_letter(&word, 2, 2).unwrap().text(), "hello");
/// ```
pub fn move_letter(word: &Word, from: usize, to: usize) -> Result<Word, EngineError> {
    check_index(from, word.len())?;
    check_index(to, word.len())?;

    if from == to {
        return Ok(word.clone());
    }

    let mut chars = word.chars().to_vec();
    let moved = chars.remove(from);
    let insert_at = if from < to { to - 1 } else { to };
    chars.insert(insert_at, moved);
    Ok(Word::from_chars(chars))
}

/// Replace the character at `index` with `new_char`
///
/// Length is preserved; only the named position changes.
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when `index >= word.len()`.
pub fn exchange_letter(word: &Word, index: usize, new_char: char) -> Result<Word, EngineError> {
    check_index(index, word.len())?;

    let mut chars = word.chars().to_vec();
    chars[index] = new_char;
    Ok(Word::from_chars(chars))
}

/// Apply a recorded move to a word
///
/// Dispatches on the move's kind. The kind carries exactly the payload it
/// needs, so the only possible failure is a bounds violation.
///
/// # Errors
/// Returns [`EngineError::IndexOutOfRange`] when the move's indices do not
/// fit the word.
pub fn apply_move(word: &Word, mv: &Move) -> Result<Word, EngineError> {
    match mv.kind() {
        MoveKind::Delete { index } => delete_letter(word, index),
        MoveKind::Move { from, to } => move_letter(word, from, to),
        MoveKind::Exchange { index, new_char } => exchange_letter(word, index, new_char),
    }
}

//! Formatting utilities for terminal output

use crate::core::{LetterResult, LetterStatus};

/// Render letter feedback as emoji squares
///
/// Green for correct, yellow for present, white for absent.
///
/// # Examples
/// ```
/// use wordmorph::analysis::analyze_letters;
/// use wordmorph::core::Word;
/// use wordmorph::output::formatters::feedback_emoji;
///
/// let results = analyze_letters(&Word::new("hello"), &Word::new("hello"));
/// assert_eq!(feedback_emoji(&results), "🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn feedback_emoji(results: &[LetterResult]) -> String {
    results
        .iter()
        .map(|result| match result.status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a similarity score as a bar
#[must_use]
pub fn similarity_bar(similarity: f64, width: usize) -> String {
    create_progress_bar(similarity, 1.0, width)
}

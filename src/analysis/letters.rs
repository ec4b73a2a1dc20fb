//! Letter-by-letter feedback
//!
//! Classifies each position of the current word against the target using a
//! two-pass scheme: exact matches claim their occurrences first, then
//! misplaced letters claim whatever remains. A letter never claims more
//! occurrences than the target holds.

use crate::core::{LetterResult, LetterStatus, Word};

/// Analyze the current word against the target, position by position
///
/// Pass 1 marks exact matches as [`LetterStatus::Correct`] and consumes an
/// occurrence from the target's remaining-count table; positions beyond the
/// target's length start as [`LetterStatus::Absent`]. Pass 2 upgrades
/// non-exact positions to [`LetterStatus::Present`] while the table still
/// holds an unclaimed occurrence of that letter. Exact matches always win
/// over misplaced ones, and combined `Correct` + `Present` claims of a
/// letter never exceed its count in the target.
///
/// # Examples
/// ```
/// use wordmorph::analysis::analyze_letters;
/// use wordmorph::core::{LetterStatus, Word};
///
/// let results = analyze_letters(&Word::new("hello"), &Word::new("world"));
/// // 'l' at position 3 is exact; 'o' at position 4 exists elsewhere
/// assert_eq!(results[3].status, LetterStatus::Correct);
/// assert_eq!(results[4].status, LetterStatus::Present);
/// ```
#[must_use]
pub fn analyze_letters(current: &Word, target: &Word) -> Vec<LetterResult> {
    let target_chars = target.chars();
    let mut remaining = target.char_counts();
    let mut results: Vec<LetterResult> = Vec::with_capacity(current.len());

    // First pass: exact position matches consume their occurrence
    for (i, &letter) in current.chars().iter().enumerate() {
        if i < target_chars.len() && letter == target_chars[i] {
            results.push(LetterResult::new(i, letter, LetterStatus::Correct));
            if let Some(count) = remaining.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        } else {
            // Provisional; the second pass may upgrade it
            results.push(LetterResult::new(i, letter, LetterStatus::Absent));
        }
    }

    // Second pass: misplaced letters claim what is left
    for result in &mut results {
        if result.status == LetterStatus::Absent
            && let Some(count) = remaining.get_mut(&result.letter)
            && *count > 0
        {
            result.status = LetterStatus::Present;
            *count -= 1;
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn statuses(current: &str, target: &str) -> Vec<LetterStatus> {
        analyze_letters(&Word::new(current), &Word::new(target))
            .into_iter()
            .map(|r| r.status)
            .collect()
    }

    #[test]
    fn identical_words_are_all_correct() {
        for word in ["hello", "a", "aaaa", ""] {
            let results = analyze_letters(&Word::new(word), &Word::new(word));
            assert_eq!(results.len(), word.chars().count());
            assert!(results.iter().all(|r| r.status == LetterStatus::Correct));
        }
    }

    #[test]
    fn positions_and_letters_follow_the_current_word() {
        let results = analyze_letters(&Word::new("abc"), &Word::new("xyz"));
        for (i, (result, expected)) in results.iter().zip(['a', 'b', 'c']).enumerate() {
            assert_eq!(result.position, i);
            assert_eq!(result.letter, expected);
        }
    }

    #[test]
    fn disjoint_words_are_all_absent() {
        assert_eq!(
            statuses("abc", "xyz"),
            vec![
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn misplaced_letters_are_present() {
        // 'h' absent, 'e' absent... against "world": w-o-r-l-d
        // h(absent) e(absent) l(present) l(correct) o(present)
        assert_eq!(
            statuses("hello", "world"),
            vec![
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Correct,
                LetterStatus::Present
            ]
        );
    }

    #[test]
    fn duplicate_letters_claim_at_most_target_count() {
        // Target "erase" holds two e's; "speed" shows s,e,e misplaced and
        // p,d absent
        assert_eq!(
            statuses("speed", "erase"),
            vec![
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn exact_match_wins_over_misplaced() {
        // "robot" vs "floor": second 'o' is exact, first 'o' takes the
        // remaining occurrence
        assert_eq!(
            statuses("robot", "floor"),
            vec![
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn positions_past_target_length_start_absent() {
        // "hellos" vs "hello": the trailing 's' has no target position and
        // no occurrence to claim
        assert_eq!(
            statuses("hellos", "hello"),
            vec![
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Absent
            ]
        );
    }

    #[test]
    fn overhang_can_still_be_present() {
        // "helloh" vs "hello": every 'h' in the target was claimed by the
        // exact match, so the overhanging 'h' stays absent; but an
        // unclaimed letter in the overhang is upgraded
        assert_eq!(statuses("helloh", "hello")[5], LetterStatus::Absent);
        // "abX" vs "ba": both letters exist in the target, just misplaced
        assert_eq!(
            statuses("ab", "ba"),
            vec![LetterStatus::Present, LetterStatus::Present]
        );
    }

    #[test]
    fn claims_never_exceed_target_multiset() {
        let cases = [
            ("hello", "world"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("aaaa", "aa"),
            ("banana", "bandana"),
        ];

        for (current, target) in cases {
            let target_word = Word::new(target);
            let target_counts = target_word.char_counts();
            let results = analyze_letters(&Word::new(current), &target_word);

            let mut claimed: FxHashMap<char, usize> = FxHashMap::default();
            for result in results {
                if result.status != LetterStatus::Absent {
                    *claimed.entry(result.letter).or_insert(0) += 1;
                }
            }

            for (letter, count) in claimed {
                assert!(
                    count <= *target_counts.get(&letter).unwrap_or(&0),
                    "letter '{letter}' over-claimed in {current} vs {target}"
                );
            }
        }
    }
}

//! Embedded puzzle word pool
//!
//! Lowercase words of three to seven letters with plenty of shared letters,
//! so randomly drawn pairs tend to make interesting puzzles.

/// Built-in word pool
pub const WORDS: &[&str] = &[
    "act", "ant", "art", "ate", "bat", "bet", "cat", "cot", "dog", "dot", "ear", "eat", "hat",
    "hen", "hot", "lot", "net", "nut", "oat", "pan", "pat", "pen", "pet", "pin", "pot", "rat",
    "tan", "tap", "tar", "tea", "ten", "tin", "toe", "ton", "top",
    "bake", "ball", "band", "bank", "bare", "bark", "bear", "beat", "bell", "belt", "bend",
    "best", "bold", "bolt", "bore", "born", "cake", "calm", "came", "care", "cart", "case",
    "cast", "coat", "cold", "core", "corn", "cost", "dare", "dart", "deal", "dear", "earn",
    "east", "fare", "farm", "fast", "fear", "feat", "felt", "fold", "form", "fort", "gate",
    "gear", "goat", "gold", "hare", "harm", "heal", "hear", "heat", "held", "hell", "helm",
    "help", "hold", "hole", "holt", "hope", "horn", "lake", "land", "lane", "last", "late",
    "lean", "leap", "lend", "lent", "make", "male", "mane", "mare", "mast", "mate", "meal",
    "mean", "meat", "melt", "mold", "near", "neat", "nest", "note", "pale", "pane", "part",
    "past", "pear", "peat", "pelt", "pole", "port", "rake", "rate", "read", "real", "reap",
    "rent", "rest", "role", "rope", "rose", "sale", "salt", "sand", "seal", "seat", "send",
    "sent", "sole", "sort", "tale", "tame", "tear", "tend", "tent", "term", "test", "told",
    "tone", "tore", "torn", "vast", "vent", "vest", "wake", "ward", "ware", "warm", "wear",
    "west", "wold", "word", "wore", "worn",
    "beast", "blast", "board", "brave", "bread", "break", "canoe", "cargo", "caste", "cater",
    "charm", "chart", "chase", "cheat", "clear", "coast", "crane", "crate", "cream", "crest",
    "earth", "feast", "grate", "great", "heart", "hello", "horse", "house", "later", "learn",
    "least", "mouse", "ocean", "paste", "pearl", "plane", "plant", "plate", "pleat", "roast",
    "scale", "score", "shore", "slate", "smart", "snore", "spare", "spark", "spear", "stale",
    "stare", "start", "steal", "steam", "stone", "store", "storm", "table", "taste", "toast",
    "trace", "trade", "world",
    "barter", "breast", "carpet", "castle", "charter", "master", "planet", "plaster", "stable",
    "stream", "throne",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_words_are_lowercase_ascii() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "word '{word}' is not lowercase ascii"
            );
        }
    }

    #[test]
    fn pool_words_are_puzzle_sized() {
        for &word in WORDS {
            assert!(
                (3..=7).contains(&word.len()),
                "word '{word}' has unexpected length"
            );
        }
    }

    #[test]
    fn pool_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}

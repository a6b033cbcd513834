//! Document text normalization.
//!
//! Tokenization never fails: empty input yields an empty token sequence,
//! which downstream turns into an empty weight vector.

/// Characters removed from document text before splitting.
/// They are removed outright, not replaced with spaces, so "e-mail"
/// becomes the single token "email".
const STRIPPED: [char; 7] = [',', '.', '&', '-', '!', '(', ')'];

/// Turn raw text into a normalized, duplicate-preserving token sequence:
/// strip the fixed punctuation set, lowercase, split on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .flat_map(char::to_lowercase)
        .collect();
    cleaned.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(tokenize("Red Car"), vec!["red", "car"]);
    }

    #[test]
    fn strips_punctuation_set() {
        assert_eq!(tokenize("Rock & Roll!"), vec!["rock", "roll"]);
        assert_eq!(tokenize("(fast), slow."), vec!["fast", "slow"]);
    }

    #[test]
    fn hyphen_is_removed_not_split() {
        assert_eq!(tokenize("e-mail"), vec!["email"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(tokenize("red red car"), vec!["red", "red", "car"]);
    }

    #[test]
    fn empty_and_whitespace_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize(",.&-!()").is_empty());
    }
}

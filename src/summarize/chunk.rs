/// Default words per chunk sent to a local model.
pub const DEFAULT_MAX_WORDS: usize = 500;

/// Split text into chunks of at most `max_words` whitespace-separated words.
///
/// Words are re-joined with single spaces, so line structure is lost.
pub fn split_into_chunks(text: &str, max_words: usize) -> Vec<String> {
    let max_words = max_words.max(1);
    let words: Vec<&str> = text.split_whitespace().collect();
    words.chunks(max_words).map(|chunk| chunk.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_multiple() {
        let text = "a b c d";
        assert_eq!(split_into_chunks(text, 2), vec!["a b", "c d"]);
    }

    #[test]
    fn test_remainder_chunk() {
        let text = "one two\nthree   four five";
        assert_eq!(split_into_chunks(text, 2), vec!["one two", "three four", "five"]);
    }

    #[test]
    fn test_empty_text_has_no_chunks() {
        assert!(split_into_chunks("  \n ", 500).is_empty());
    }

    #[test]
    fn test_zero_limit_is_one_word() {
        assert_eq!(split_into_chunks("a b", 0), vec!["a", "b"]);
    }
}

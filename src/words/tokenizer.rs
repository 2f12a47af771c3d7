// Headline tokenizer.
//
// Punctuation acts as a word boundary rather than being deleted, so
// "U.S.-China" yields "u", "s", "china" and never "uschina". Short tokens
// are dropped after lowercasing.

/// Tokens with this many characters or fewer are discarded by default.
pub const TRIVIAL_WORD_LENGTH: usize = 2;

/// Splits headlines into normalized words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokenizer {
    /// Tokens of at most this many characters are dropped
    pub trivial_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            trivial_len: TRIVIAL_WORD_LENGTH,
        }
    }
}

impl Tokenizer {
    pub fn new(trivial_len: usize) -> Self {
        Self { trivial_len }
    }

    /// Lazily yield the normalized words of one headline, in order.
    ///
    /// Splitting on "whitespace or ASCII punctuation" and discarding empty
    /// pieces is the same as first replacing every punctuation character
    /// with a space and then splitting on whitespace runs.
    pub fn tokens<'a>(&self, headline: &'a str) -> impl Iterator<Item = String> + 'a {
        let trivial_len = self.trivial_len;
        headline
            .split(is_boundary)
            .filter(|piece| !piece.is_empty())
            .map(str::to_lowercase)
            .filter(move |word| word.chars().count() > trivial_len)
    }
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(headline: &str) -> Vec<String> {
        Tokenizer::default().tokens(headline).collect()
    }

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(collect("The Cat Sat"), vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(collect("U.S.-China trade talks"), vec!["china", "trade", "talks"]);
        assert_eq!(collect("Breaking:markets,fall!"), vec!["breaking", "markets", "fall"]);
    }

    #[test]
    fn test_drops_trivial_words() {
        assert_eq!(collect("A to be or not"), vec!["not"]);
    }

    #[test]
    fn test_apostrophes_split_contractions() {
        // "Trump's" -> "trump" + "s", and the single letter is dropped
        assert_eq!(collect("Trump's DON'T"), vec!["trump", "don"]);
    }

    #[test]
    fn test_custom_threshold() {
        let tokenizer = Tokenizer::new(0);
        let words: Vec<String> = tokenizer.tokens("a bc").collect();
        assert_eq!(words, vec!["a", "bc"]);

        let tokenizer = Tokenizer::new(4);
        let words: Vec<String> = tokenizer.tokens("short longer").collect();
        assert_eq!(words, vec!["short", "longer"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Two characters but four bytes: still trivial
        assert!(collect("éé").is_empty());
        assert_eq!(collect("été"), vec!["été"]);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(collect("").is_empty());
        assert!(collect("   \t\n ").is_empty());
        assert!(collect("...---!!!").is_empty());
    }
}

use super::stopwords::StopwordSet;

/// Keeps alphabetic, non-stopword tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenFilter;

impl TokenFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// A token survives iff it is non-empty, every char is alphabetic, and it
    /// is not in `stopwords`. Order and duplicates are preserved.
    #[must_use]
    pub fn filter(&self, tokens: Vec<String>, stopwords: &StopwordSet) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| is_alphabetic(token) && !stopwords.contains(token))
            .collect()
    }
}

#[must_use]
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

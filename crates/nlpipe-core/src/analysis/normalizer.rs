use super::tokenizer::WordTokenizer;

/// Turns raw text into case-normalized word tokens.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Lowercases the whole text, then splits it on word boundaries.
///
/// Folding happens before tokenization so the filter's alphabetic and
/// stopword checks are case-insensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseNormalizer {
    tokenizer: WordTokenizer,
}

impl LowercaseNormalizer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
        }
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.tokenizer
            .tokenize(&lowered)
            .into_iter()
            .map(|t| t.text.to_string())
            .collect()
    }
}

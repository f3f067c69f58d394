//! Stopword sets.
//!
//! English defaults to the NLTK list, which is what keyword-style filtering
//! in most preprocessing scripts is tuned against. Other languages come from
//! the ISO lists shipped with the `stop-words` crate.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};

use crate::resources::{ResourceError, ResourceResult};

const NLTK_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// NLTK list for English; other languages fall back to ISO.
    #[default]
    Nltk,
    Iso,
}

/// Read-only set of lowercase stopwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSet {
    language: String,
    words: HashSet<String>,
}

impl StopwordSet {
    #[must_use]
    pub fn english() -> Self {
        Self::from_words("english", NLTK_ENGLISH.iter().copied())
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            language: "none".into(),
            words: HashSet::new(),
        }
    }

    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.to_string(),
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Loads the list for `language` (name or ISO 639-1 code).
    pub fn for_language(language: &str, source: StopwordSource) -> ResourceResult<Self> {
        let key = language.to_lowercase();
        if source == StopwordSource::Nltk && matches!(key.as_str(), "en" | "english") {
            return Ok(Self::english());
        }

        let lang = iso_language(&key)
            .ok_or_else(|| ResourceError::UnsupportedLanguage(language.to_string()))?;
        let words: Vec<String> = get(lang).iter().map(|s| s.to_string()).collect();
        if words.is_empty() {
            return Err(ResourceError::UnsupportedLanguage(language.to_string()));
        }

        tracing::debug!(language = %key, count = words.len(), "Loaded ISO stopword list");
        Ok(Self::from_words(&key, words))
    }

    /// Reads one word per line; blank lines and `#` comments are skipped.
    pub fn from_file(language: &str, path: &Path) -> ResourceResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ResourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        Ok(Self::from_words(language, words))
    }

    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self.words.remove("");
        self
    }

    #[must_use]
    pub fn without_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().trim().to_lowercase());
        }
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Exact membership; callers pass already-lowercased tokens.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

fn iso_language(key: &str) -> Option<LANGUAGE> {
    let lang = match key {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}

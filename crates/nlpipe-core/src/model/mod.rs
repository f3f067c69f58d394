//! Language-model abstraction.
//!
//! A [`LanguageModel`] parses a text once into a [`Doc`]: annotated tokens,
//! entity spans and noun-chunk spans. Both extractors read from the same
//! `Doc`, so a backend is only asked to parse each text a single time.
//!
//! All spans are byte ranges into the text that was parsed. Backends are
//! free to use any tagging or chunking strategy; the pipeline only relies on
//! the spans being valid slices of the original text and ordered by start.

pub mod english;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use english::{EnglishModel, EnglishModelOptions, Gazetteer};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Parse failed: {0}")]
    ParseFailed(String),
    #[error("Invalid span {start}..{end} for text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },
    #[error("Spans out of order: {0} starts before the previous span")]
    Unordered(usize),
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl PosTag {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Adj => "ADJ",
            Self::Adp => "ADP",
            Self::Adv => "ADV",
            Self::Aux => "AUX",
            Self::Cconj => "CCONJ",
            Self::Det => "DET",
            Self::Intj => "INTJ",
            Self::Noun => "NOUN",
            Self::Num => "NUM",
            Self::Part => "PART",
            Self::Pron => "PRON",
            Self::Propn => "PROPN",
            Self::Punct => "PUNCT",
            Self::Sconj => "SCONJ",
            Self::Sym => "SYM",
            Self::Verb => "VERB",
            Self::X => "X",
        }
    }

    /// Heads of a noun phrase.
    #[must_use]
    pub const fn is_nominal(&self) -> bool {
        matches!(self, Self::Noun | Self::Propn)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte range into the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the covered slice, or `None` when the span is not a valid
    /// slice of `text`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedToken {
    pub span: Span,
    pub pos: PosTag,
    pub sentence: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub span: Span,
    pub label: String,
}

impl EntitySpan {
    #[must_use]
    pub fn new(span: Span, label: impl Into<String>) -> Self {
        Self {
            span,
            label: label.into(),
        }
    }
}

/// One parse of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub tokens: Vec<AnnotatedToken>,
    pub entities: Vec<EntitySpan>,
    pub noun_chunks: Vec<Span>,
}

impl Doc {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entity(mut self, entity: EntitySpan) -> Self {
        self.entities.push(entity);
        self
    }

    #[must_use]
    pub fn with_noun_chunk(mut self, span: Span) -> Self {
        self.noun_chunks.push(span);
        self
    }

    pub fn sentence_count(&self) -> usize {
        self.tokens.last().map_or(0, |t| t.sentence + 1)
    }

    /// Checks that every entity and chunk span is a valid slice of `text`
    /// and that both sequences are ordered by start offset.
    pub fn validate(&self, text: &str) -> ModelResult<()> {
        check_spans(self.entities.iter().map(|e| e.span), text)?;
        check_spans(self.noun_chunks.iter().copied(), text)
    }
}

fn check_spans(spans: impl Iterator<Item = Span>, text: &str) -> ModelResult<()> {
    let mut previous_start = 0;
    for span in spans {
        if span.start > span.end || span.slice(text).is_none() {
            return Err(ModelError::InvalidSpan {
                start: span.start,
                end: span.end,
                len: text.len(),
            });
        }
        if span.start < previous_start {
            return Err(ModelError::Unordered(span.start));
        }
        previous_start = span.start;
    }
    Ok(())
}

/// A pretrained (or rule-based) text-analysis backend.
///
/// Implementations must be deterministic: parsing the same text twice yields
/// the same `Doc`.
pub trait LanguageModel: Send + Sync {
    fn name(&self) -> &str;

    fn parse(&self, text: &str) -> ModelResult<Doc>;
}

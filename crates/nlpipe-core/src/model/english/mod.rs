//! Built-in rule-based English model.
//!
//! No downloaded weights: tagging, entity recognition and chunking run off
//! word lists, a gazetteer and a handful of regexes. Good enough for
//! newswire-style English and fully deterministic.

mod chunker;
mod gazetteer;
mod lexicon;
mod ner;
mod tagger;

use serde::{Deserialize, Serialize};

use self::chunker::NounChunker;
use self::lexicon::Lexicon;
use self::ner::{Patterns, Recognizer};
use self::tagger::Tagger;
use super::{AnnotatedToken, Doc, LanguageModel, ModelResult, Span};
use crate::analysis::WordTokenizer;
use crate::resources::ResourceResult;

pub use gazetteer::Gazetteer;

pub const MODEL_NAME: &str = "en_rule_based";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnglishModelOptions {
    /// Keep leading determiners in noun phrases ("an example" vs "example").
    pub include_determiners: bool,
    /// Longest noun phrase in tokens; `0` means unbounded.
    pub max_chunk_length: usize,
}

impl Default for EnglishModelOptions {
    fn default() -> Self {
        Self {
            include_determiners: true,
            max_chunk_length: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnglishModel {
    tokenizer: WordTokenizer,
    lexicon: Lexicon,
    gazetteer: Gazetteer,
    patterns: Patterns,
    chunker: NounChunker,
}

impl EnglishModel {
    pub fn new() -> ResourceResult<Self> {
        Self::with_options(EnglishModelOptions::default())
    }

    pub fn with_options(options: EnglishModelOptions) -> ResourceResult<Self> {
        let model = Self {
            tokenizer: WordTokenizer::new(),
            lexicon: Lexicon::english(),
            gazetteer: Gazetteer::english(),
            patterns: Patterns::compile()?,
            chunker: NounChunker::new(options.include_determiners, options.max_chunk_length),
        };
        tracing::debug!(
            gazetteer_entries = model.gazetteer.len(),
            include_determiners = options.include_determiners,
            max_chunk_length = options.max_chunk_length,
            "Built English rule-based model"
        );
        Ok(model)
    }

    /// Adds names on top of the built-in gazetteer; later entries win.
    #[must_use]
    pub fn with_gazetteer(mut self, extra: Gazetteer) -> Self {
        self.gazetteer.merge(extra);
        self
    }

    pub const fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }
}

impl LanguageModel for EnglishModel {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn parse(&self, text: &str) -> ModelResult<Doc> {
        let tokens = self.tokenizer.tokenize(text);
        let names = self.gazetteer.first_tokens();
        let tagger = Tagger::new(&self.lexicon, &names);
        let sentences = tagger.sentences(&tokens);
        let tags = tagger.tag(&tokens, &sentences);

        let entities = Recognizer::new(&self.lexicon, &self.gazetteer, &self.patterns)
            .recognize(&tokens, &tags, &sentences);
        let noun_chunks = self.chunker.chunk(&tokens, &tags, &sentences);

        let annotated = tokens
            .iter()
            .zip(&tags)
            .zip(&sentences)
            .map(|((token, pos), sentence)| AnnotatedToken {
                span: Span::new(token.start, token.end()),
                pos: *pos,
                sentence: *sentence,
            })
            .collect();

        Ok(Doc {
            tokens: annotated,
            entities,
            noun_chunks,
        })
    }
}

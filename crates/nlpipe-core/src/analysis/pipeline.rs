use std::sync::Arc;

use thiserror::Error;

use super::extractor::{EntityExtractor, PhraseExtractor};
use super::filter::TokenFilter;
use super::normalizer::{LowercaseNormalizer, Normalizer};
use super::stopwords::StopwordSet;
use crate::model::{Doc, LanguageModel, ModelError};
use crate::record::StructuredRecord;
use crate::resources::Resources;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidInput { valid_up_to: usize },
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Text in, [`StructuredRecord`] out.
///
/// The token path lowercases and filters; the annotation path parses the
/// original-case text once and reads both entities and noun phrases from
/// that parse.
#[derive(Clone)]
pub struct Pipeline {
    normalizer: Arc<dyn Normalizer>,
    filter: TokenFilter,
    stopwords: Arc<StopwordSet>,
    model: Arc<dyn LanguageModel>,
    entities: EntityExtractor,
    phrases: PhraseExtractor,
}

impl Pipeline {
    #[must_use]
    pub fn new(resources: Resources) -> Self {
        Self {
            normalizer: Arc::new(LowercaseNormalizer::new()),
            filter: TokenFilter::new(),
            stopwords: resources.stopwords,
            model: resources.model,
            entities: EntityExtractor::new(),
            phrases: PhraseExtractor::new(),
        }
    }

    #[must_use]
    pub fn with_normalizer(mut self, normalizer: impl Normalizer + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_stopwords(mut self, stopwords: Arc<StopwordSet>) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Runs every stage over `text`. Either the whole record is produced or
    /// an error is returned.
    pub fn process(&self, text: &str) -> PipelineResult<StructuredRecord> {
        let filtered_tokens = self.filtered_tokens(text);
        let doc = self.analyze(text)?;

        let entities = self.entities.extract(&doc, text);
        let noun_phrases = self.phrases.extract(&doc, text);

        tracing::debug!(
            filtered_tokens = filtered_tokens.len(),
            entities = entities.len(),
            noun_phrases = noun_phrases.len(),
            "Processed text"
        );

        Ok(StructuredRecord::new(
            text.to_string(),
            filtered_tokens,
            entities,
            noun_phrases,
        ))
    }

    /// Like [`process`](Self::process) for raw bytes; non-UTF-8 input is
    /// rejected before any stage runs.
    pub fn process_bytes(&self, bytes: &[u8]) -> PipelineResult<StructuredRecord> {
        let text = std::str::from_utf8(bytes).map_err(|e| PipelineError::InvalidInput {
            valid_up_to: e.valid_up_to(),
        })?;
        self.process(text)
    }

    /// The token path alone: lowercase, tokenize, drop non-alphabetic
    /// tokens and stopwords.
    pub fn filtered_tokens(&self, text: &str) -> Vec<String> {
        let tokens = self.normalizer.normalize(text);
        let total = tokens.len();
        let filtered = self.filter.filter(tokens, &self.stopwords);
        tracing::debug!(tokens = total, kept = filtered.len(), "Filtered tokens");
        filtered
    }

    /// The annotation path alone: one parse of the original text, with its
    /// spans checked against that text.
    pub fn analyze(&self, text: &str) -> PipelineResult<Doc> {
        let doc = self.model.parse(text)?;
        doc.validate(text)?;
        tracing::debug!(
            model = %self.model.name(),
            tokens = doc.tokens.len(),
            sentences = doc.sentence_count(),
            "Parsed text"
        );
        Ok(doc)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stopwords", &self.stopwords.len())
            .field("model", &self.model.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::model::{EntitySpan, ModelResult, Span};
    use crate::record::Entity;

    const REFERENCE: &str = "This is an example sentence for text preprocessing.";
    const ENTITY_TEXT: &str = "Apple is looking at buying U.K. startup for $1 billion.";

    fn pipeline() -> Pipeline {
        Pipeline::new(Resources::load(&PipelineConfig::default()).unwrap())
    }

    /// Returns a canned parse whatever the input.
    struct FakeModel {
        doc: Doc,
    }

    impl LanguageModel for FakeModel {
        fn name(&self) -> &str {
            "fake"
        }

        fn parse(&self, _text: &str) -> ModelResult<Doc> {
            Ok(self.doc.clone())
        }
    }

    struct FailingModel;

    impl LanguageModel for FailingModel {
        fn name(&self) -> &str {
            "failing"
        }

        fn parse(&self, _text: &str) -> ModelResult<Doc> {
            Err(ModelError::ParseFailed("backend unavailable".into()))
        }
    }

    #[test]
    fn test_reference_sentence() {
        let record = pipeline().process(REFERENCE).unwrap();

        assert_eq!(record.text(), REFERENCE);
        assert_eq!(
            record.filtered_tokens(),
            ["example", "sentence", "text", "preprocessing"]
        );
        assert!(record.entities().is_empty());
        assert!(!record.noun_phrases().is_empty());
        assert!(record.noun_phrases().iter().any(|p| p == "an example sentence"));
        assert!(record.noun_phrases().iter().any(|p| p == "text preprocessing"));
        for phrase in record.noun_phrases() {
            assert!(REFERENCE.contains(phrase.as_str()));
        }
    }

    #[test]
    fn test_entity_sentence() {
        let record = pipeline().process(ENTITY_TEXT).unwrap();

        assert!(record.entities().contains(&Entity::new("Apple", "ORG")));
        assert!(record.entities().contains(&Entity::new("U.K.", "GPE")));
        for entity in record.entities() {
            assert!(ENTITY_TEXT.contains(entity.text.as_str()));
        }
        assert_eq!(
            record.filtered_tokens(),
            ["apple", "looking", "buying", "startup", "billion"]
        );
    }

    #[test]
    fn test_filtered_tokens_are_alphabetic_and_not_stopwords() {
        let pipeline = pipeline();
        let text = "The 3 quick foxes (and 2 dogs) didn't jump over Mr. O'Neil's fence in 2024!";
        let tokens = pipeline.filtered_tokens(text);

        assert!(!tokens.is_empty());
        for token in &tokens {
            assert!(token.chars().all(char::is_alphabetic), "{token}");
            assert!(!pipeline.stopwords().contains(token), "{token}");
        }

        // Relative order follows the lowercased token stream.
        let stream = LowercaseNormalizer::new().normalize(text);
        let mut cursor = 0;
        for token in &tokens {
            let offset = stream[cursor..].iter().position(|t| t == token).unwrap();
            cursor += offset + 1;
        }
    }

    #[test]
    fn test_spans_in_text_order() {
        let text = "Barack Obama visited Berlin on Monday. Later, Angela Merkel met him in Paris.";
        let record = pipeline().process(text).unwrap();

        let positions: Vec<usize> = record
            .entities()
            .iter()
            .map(|e| text.find(e.text.as_str()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));

        let doc = pipeline().analyze(text).unwrap();
        assert!(doc.noun_chunks.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn test_deterministic() {
        let pipeline = pipeline();
        assert_eq!(
            pipeline.process(ENTITY_TEXT).unwrap(),
            pipeline.process(ENTITY_TEXT).unwrap()
        );
    }

    #[test]
    fn test_empty_input() {
        let record = pipeline().process("").unwrap();
        assert!(record.is_empty());
        assert_eq!(record.text(), "");
    }

    #[test]
    fn test_process_bytes_rejects_invalid_utf8() {
        let result = pipeline().process_bytes(b"caf\xe9 au lait");
        assert!(matches!(
            result,
            Err(PipelineError::InvalidInput { valid_up_to: 3 })
        ));
    }

    #[test]
    fn test_process_bytes_accepts_utf8() {
        let record = pipeline().process_bytes("Café in Paris".as_bytes()).unwrap();
        assert_eq!(record.text(), "Café in Paris");
    }

    #[test]
    fn test_injected_model_and_stopwords() {
        let text = "Alice met Bob";
        let doc = Doc::new()
            .with_entity(EntitySpan::new(Span::new(0, 5), "HUMAN"))
            .with_entity(EntitySpan::new(Span::new(10, 13), "HUMAN"))
            .with_noun_chunk(Span::new(0, 5));

        let pipeline = pipeline()
            .with_model(Arc::new(FakeModel { doc }))
            .with_stopwords(Arc::new(StopwordSet::from_words("test", ["met"])));
        let record = pipeline.process(text).unwrap();

        assert_eq!(pipeline.model_name(), "fake");
        assert_eq!(record.filtered_tokens(), ["alice", "bob"]);
        assert_eq!(
            record.entities(),
            [Entity::new("Alice", "HUMAN"), Entity::new("Bob", "HUMAN")]
        );
        assert_eq!(record.noun_phrases(), ["Alice"]);
    }

    #[test]
    fn test_invalid_model_spans_rejected() {
        let doc = Doc::new().with_noun_chunk(Span::new(0, 100));
        let pipeline = pipeline().with_model(Arc::new(FakeModel { doc }));
        assert!(matches!(
            pipeline.process("short"),
            Err(PipelineError::Model(ModelError::InvalidSpan { .. }))
        ));
    }

    #[test]
    fn test_model_failure_yields_no_record() {
        let pipeline = pipeline().with_model(Arc::new(FailingModel));
        assert!(matches!(
            pipeline.process(REFERENCE),
            Err(PipelineError::Model(ModelError::ParseFailed(_)))
        ));
    }

    #[test]
    fn test_custom_normalizer() {
        struct Whitespace;
        impl Normalizer for Whitespace {
            fn normalize(&self, text: &str) -> Vec<String> {
                text.split_whitespace().map(str::to_lowercase).collect()
            }
        }

        let pipeline = pipeline().with_normalizer(Whitespace);
        assert_eq!(pipeline.filtered_tokens("Text preprocessing."), ["text"]);
    }
}

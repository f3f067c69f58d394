use crate::model::Doc;
use crate::record::Entity;

/// Relays a parse's entity spans as (text, label) pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Entities in order of their first character in `text`.
    ///
    /// `doc` must come from parsing `text`; spans that do not slice it are
    /// dropped.
    #[must_use]
    pub fn extract(&self, doc: &Doc, text: &str) -> Vec<Entity> {
        let mut spans: Vec<_> = doc.entities.iter().collect();
        spans.sort_by_key(|e| e.span.start);

        spans
            .into_iter()
            .filter_map(|e| e.span.slice(text).map(|s| Entity::new(s, e.label.as_str())))
            .collect()
    }
}

/// Relays a parse's noun chunks as strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseExtractor;

impl PhraseExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn extract(&self, doc: &Doc, text: &str) -> Vec<String> {
        let mut spans = doc.noun_chunks.clone();
        spans.sort_by_key(|s| s.start);

        spans
            .into_iter()
            .filter_map(|s| s.slice(text).map(str::to_string))
            .collect()
    }
}

//! Noun-phrase chunking over tagged tokens.
//!
//! A chunk is `DET? (ADJ|NUM)* (NOUN|PROPN)+`, optionally continued through a
//! possessive `'s` into another such group ("Apple's new phone"). Pronouns
//! stand alone as one-token chunks.

use super::lexicon::fold;
use crate::analysis::WordToken;
use crate::model::{PosTag, Span};

/// Pronouns that never head a noun phrase.
const WH_PRONOUNS: &[&str] = &["who", "whom", "what", "which", "whose", "whoever", "whatever"];

#[derive(Debug, Clone, Copy)]
pub struct NounChunker {
    include_determiners: bool,
    max_len: usize,
}

impl NounChunker {
    pub const fn new(include_determiners: bool, max_len: usize) -> Self {
        Self {
            include_determiners,
            max_len,
        }
    }

    pub fn chunk(&self, tokens: &[WordToken<'_>], tags: &[PosTag], sentences: &[usize]) -> Vec<Span> {
        let mut chunks = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if tags[i] == PosTag::Pron {
                if !WH_PRONOUNS.contains(&fold(tokens[i].text).as_str()) {
                    chunks.push(Span::new(tokens[i].start, tokens[i].end()));
                }
                i += 1;
                continue;
            }

            // Minutes of a clock time never open a chunk.
            let minutes = tags[i] == PosTag::Num
                && i >= 2
                && tokens[i - 1].text == ":"
                && tags[i - 2] == PosTag::Num;
            if minutes {
                i += 1;
                continue;
            }

            let Some(end) = self.match_at(tokens, tags, sentences, i) else {
                i += 1;
                continue;
            };

            let mut start = i;
            if !self.include_determiners && tags[start] == PosTag::Det {
                start += 1;
            }
            // Keep the head; long chunks lose their leftmost modifiers.
            if self.max_len > 0 && end - start > self.max_len {
                start = end - self.max_len;
            }
            chunks.push(Span::new(tokens[start].start, tokens[end - 1].end()));
            i = end;
        }

        chunks
    }

    /// End (exclusive) of the chunk starting at `start`, if one does.
    fn match_at(
        &self,
        tokens: &[WordToken<'_>],
        tags: &[PosTag],
        sentences: &[usize],
        start: usize,
    ) -> Option<usize> {
        let sentence = sentences[start];
        let within = |j: usize| j < tokens.len() && sentences[j] == sentence;

        let mut j = start;
        if tags[j] == PosTag::Det {
            j += 1;
        }

        let mut end = None;
        loop {
            while within(j) && matches!(tags[j], PosTag::Adj | PosTag::Num) {
                j += 1;
            }
            let nominal_start = j;
            while within(j) && tags[j].is_nominal() {
                j += 1;
            }
            if j == nominal_start {
                break;
            }
            end = Some(j);

            let possessive = within(j) && tags[j] == PosTag::Part && fold(tokens[j].text) == "'s";
            if !possessive {
                break;
            }
            j += 1;
        }

        end
    }
}

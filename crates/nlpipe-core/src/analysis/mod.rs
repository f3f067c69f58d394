mod extractor;
mod filter;
mod normalizer;
mod pipeline;
mod stopwords;
mod tokenizer;

pub use extractor::{EntityExtractor, PhraseExtractor};
pub use filter::{is_alphabetic, TokenFilter};
pub use normalizer::{LowercaseNormalizer, Normalizer};
pub use pipeline::{Pipeline, PipelineError, PipelineResult};
pub use stopwords::{StopwordSet, StopwordSource};
pub use tokenizer::{WordToken, WordTokenizer};

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod record;
pub mod resources;

pub use analysis::{
    EntityExtractor, LowercaseNormalizer, Normalizer, PhraseExtractor, Pipeline, PipelineError,
    PipelineResult, StopwordSet, StopwordSource, TokenFilter, WordToken, WordTokenizer,
};
pub use config::{ConfigError, ModelConfig, PipelineConfig, StopwordConfig};
pub use error::{Error, Result};
pub use model::{
    AnnotatedToken, Doc, EnglishModel, EnglishModelOptions, EntitySpan, Gazetteer, LanguageModel,
    ModelError, PosTag, Span,
};
pub use record::{Entity, StructuredRecord};
pub use resources::{ResourceError, Resources};

/// Loads resources from `config` and builds a pipeline over them.
pub fn load_pipeline(config: &PipelineConfig) -> Result<Pipeline> {
    Ok(Pipeline::new(Resources::load(config)?))
}

//! Startup loading of the pipeline's read-only resources.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::analysis::StopwordSet;
use crate::config::PipelineConfig;
use crate::model::{EnglishModel, Gazetteer, LanguageModel};

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid gazetteer {path}: {source}")]
    Gazetteer {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Pattern compile error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type ResourceResult<T> = Result<T, ResourceError>;

/// Immutable handles shared by every pipeline run.
#[derive(Clone)]
pub struct Resources {
    pub stopwords: Arc<StopwordSet>,
    pub model: Arc<dyn LanguageModel>,
}

impl Resources {
    #[must_use]
    pub fn new(stopwords: StopwordSet, model: impl LanguageModel + 'static) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
            model: Arc::new(model),
        }
    }

    /// Loads the stopword list and builds the language model described by
    /// `config`. Any failure here is fatal; nothing is loaded lazily.
    pub fn load(config: &PipelineConfig) -> ResourceResult<Self> {
        let stopwords = load_stopwords(config)?;
        let model = load_model(config)?;

        tracing::info!(
            language = %stopwords.language(),
            stopwords = stopwords.len(),
            model = %model.name(),
            gazetteer_entries = model.gazetteer().len(),
            "Loaded pipeline resources"
        );
        Ok(Self::new(stopwords, model))
    }
}

impl std::fmt::Debug for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resources")
            .field("stopwords", &self.stopwords.len())
            .field("model", &self.model.name())
            .finish()
    }
}

fn load_stopwords(config: &PipelineConfig) -> ResourceResult<StopwordSet> {
    let settings = &config.stopwords;
    let base = match &settings.file {
        Some(path) => StopwordSet::from_file(&settings.language, path)?,
        None => StopwordSet::for_language(&settings.language, settings.source)?,
    };
    Ok(base
        .with_words(&settings.extra)
        .without_words(&settings.remove))
}

fn load_model(config: &PipelineConfig) -> ResourceResult<EnglishModel> {
    let settings = &config.model;
    if !matches!(settings.language.to_lowercase().as_str(), "en" | "english") {
        return Err(ResourceError::UnsupportedLanguage(settings.language.clone()));
    }

    let mut model = EnglishModel::with_options(settings.options())?;
    for path in &settings.gazetteers {
        let extra = Gazetteer::from_file(path)?;
        tracing::debug!(path = %path.display(), entries = extra.len(), "Merging gazetteer");
        model = model.with_gazetteer(extra);
    }
    Ok(model)
}

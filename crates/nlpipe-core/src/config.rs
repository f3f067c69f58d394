use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::StopwordSource;
use crate::model::EnglishModelOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which stopword list to filter against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwordConfig {
    #[serde(default = "default_stopword_language")]
    pub language: String,
    #[serde(default)]
    pub source: StopwordSource,
    /// Plain-text list, one word per line; replaces the built-in list.
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub extra: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            language: default_stopword_language(),
            source: StopwordSource::default(),
            file: None,
            extra: Vec::new(),
            remove: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_language")]
    pub language: String,
    /// TOML files of `LABEL = ["Name", ...]` merged into the gazetteer.
    #[serde(default)]
    pub gazetteers: Vec<PathBuf>,
    #[serde(default = "default_include_determiners")]
    pub include_determiners: bool,
    #[serde(default = "default_max_chunk_length")]
    pub max_chunk_length: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            language: default_model_language(),
            gazetteers: Vec::new(),
            include_determiners: default_include_determiners(),
            max_chunk_length: default_max_chunk_length(),
        }
    }
}

impl ModelConfig {
    #[must_use]
    pub const fn options(&self) -> EnglishModelOptions {
        EnglishModelOptions {
            include_determiners: self.include_determiners,
            max_chunk_length: self.max_chunk_length,
        }
    }
}

fn default_stopword_language() -> String {
    "english".to_string()
}

fn default_model_language() -> String {
    "en".to_string()
}

const fn default_include_determiners() -> bool {
    true
}

const fn default_max_chunk_length() -> usize {
    8
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub stopwords: StopwordConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

impl PipelineConfig {
    /// Reads a TOML config file. Relative resource paths are resolved
    /// against the file's directory.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded pipeline config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.stopwords.language.trim().is_empty() {
            return Err(ConfigError::Invalid("stopwords.language is empty".into()));
        }
        if self.model.language.trim().is_empty() {
            return Err(ConfigError::Invalid("model.language is empty".into()));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.stopwords.language = language.into();
        self
    }

    #[must_use]
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extra.extend(words.into_iter().map(Into::into));
        self
    }

    fn resolve_paths(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        if let Some(file) = self.stopwords.file.as_mut() {
            resolve(file);
        }
        self.model.gazetteers.iter_mut().for_each(resolve);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PipelineConfig::from_toml("").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.stopwords.language, "english");
        assert_eq!(config.stopwords.source, StopwordSource::Nltk);
        assert!(config.model.include_determiners);
        assert_eq!(config.model.max_chunk_length, 8);
    }

    #[test]
    fn test_partial_sections() {
        let config = PipelineConfig::from_toml(
            r#"
            [stopwords]
            language = "german"
            source = "iso"
            extra = ["foo"]

            [model]
            include_determiners = false
            "#,
        )
        .unwrap();
        assert_eq!(config.stopwords.language, "german");
        assert_eq!(config.stopwords.source, StopwordSource::Iso);
        assert_eq!(config.stopwords.extra, vec!["foo"]);
        assert!(!config.model.include_determiners);
        assert_eq!(config.model.max_chunk_length, 8);
        assert!(!config.model.options().include_determiners);
    }

    #[test]
    fn test_rejects_empty_language() {
        let result = PipelineConfig::from_toml("[stopwords]\nlanguage = \"\"");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = PipelineConfig::from_toml("[model]\nmax_chunk_length = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nlpipe.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[stopwords]\nfile = \"words.txt\"\n[model]\ngazetteers = [\"names.toml\"]").unwrap();

        let config = PipelineConfig::load(&path).unwrap();
        assert_eq!(config.stopwords.file, Some(dir.path().join("words.txt")));
        assert_eq!(config.model.gazetteers, vec![dir.path().join("names.toml")]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = PipelineConfig::load(Path::new("/nonexistent/nlpipe.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_builder_overrides() {
        let config = PipelineConfig::default()
            .with_language("french")
            .with_extra_stopwords(["alors"]);
        assert_eq!(config.stopwords.language, "french");
        assert_eq!(config.stopwords.extra, vec!["alors"]);
    }
}

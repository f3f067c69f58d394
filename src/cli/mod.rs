pub mod input;
pub mod process;
pub mod stages;
pub mod stopwords;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use nlpipe_core::{Pipeline, PipelineConfig};

#[derive(Parser)]
#[command(
    name = "nlpipe",
    about = "Turn raw text into tokens, entities and noun phrases",
    version
)]
pub struct Cli {
    /// Pipeline config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Stopword language (overrides the config file)
    #[arg(long, global = true)]
    pub language: Option<String>,
    /// Extra stopword; repeat for more
    #[arg(long = "stopword", global = true)]
    pub stopwords: Vec<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline and print the structured record
    Process {
        /// Text to process (reads --file or stdin if omitted)
        text: Option<String>,
        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Process the built-in example sentence
    Demo {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Print the filtered tokens, one per line
    Tokens {
        text: Option<String>,
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print named entities as `text<TAB>label`
    Entities {
        text: Option<String>,
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print noun phrases, one per line
    Phrases {
        text: Option<String>,
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List the active stopwords
    Stopwords,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Python-style mapping
    #[default]
    Display,
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}

/// Global flags that shape resource loading.
pub struct Settings<'a> {
    pub config: Option<&'a Path>,
    pub language: Option<&'a str>,
    pub stopwords: &'a [String],
}

impl Settings<'_> {
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let mut config = match self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        if let Some(language) = self.language {
            config = config.with_language(language);
        }
        Ok(config.with_extra_stopwords(self.stopwords.iter().cloned()))
    }

    pub fn pipeline(&self) -> Result<Pipeline> {
        let config = self.pipeline_config()?;
        nlpipe_core::load_pipeline(&config).context("failed to load pipeline resources")
    }
}

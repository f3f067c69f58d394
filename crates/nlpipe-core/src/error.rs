use thiserror::Error;

use crate::analysis::PipelineError;
use crate::config::ConfigError;
use crate::model::ModelError;
use crate::resources::ResourceError;

/// Any failure the library can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;

/// Errors surfaced by the recommendation engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("cannot fit a weighting model on an empty corpus")]
    InvalidCorpus,

    #[error("Movie '{query}' not found in the dataset.")]
    NotFound { query: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dataset is missing required columns: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("no catalog files found at {0}")]
    EmptySource(PathBuf),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Statement failed: {0}")]
    Statement(String),

    #[error("Failed to get SELECT query execution time from plan output")]
    ExecTimeMissing,

    #[error("Cannot aggregate an empty sample set")]
    EmptySamples,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;

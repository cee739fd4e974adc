use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Dataset not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Invalid Pokedex ID {0:?}: the ID must be a number")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DexError>;

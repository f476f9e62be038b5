use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("schema version mismatch: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("empty dataset: no position has enough records to benchmark")]
    EmptyDataset,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

//! Error types for the transformer.

use thiserror::Error;

use crate::record::ContactKind;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required contact info entry of type '{kind}'")]
    MissingContact { kind: ContactKind },

    #[error("failed to serialize resume.json: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

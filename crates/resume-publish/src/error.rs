//! Publish errors.

use reqwest::StatusCode;
use resume_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("request to {target} failed: {source}")]
    Request {
        target: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{target} responded with {status}: {body}")]
    Status {
        target: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PublishError>;

//! Publishing resume.json to remote paste services.

pub mod error;
pub mod gist;
pub mod snippet;

#[cfg(test)]
mod test_server;

use async_trait::async_trait;

pub use error::{PublishError, Result};
pub use gist::GistPublisher;
pub use snippet::SnippetPublisher;

/// Result of a single publish step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The remote resource was updated.
    Updated,
    /// No credential was supplied, nothing was sent.
    Skipped,
}

/// A destination for the serialized resume.json document.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Publish the document, or skip if no credential is configured.
    async fn publish(&self, content: &str) -> Result<PublishOutcome>;
}

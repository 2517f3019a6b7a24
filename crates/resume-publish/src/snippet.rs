//! GitLab Snippet publisher.

use async_trait::async_trait;
use resume_config::SnippetTarget;
use serde::Serialize;
use tracing::{debug, info};

use crate::{PublishError, PublishOutcome, Publisher, Result};

const TARGET: &str = "GitLab Snippet";

/// Body of `PUT /api/v4/snippets/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateSnippetRequest<'a> {
    pub id: u64,
    pub title: &'a str,
    pub file_name: &'a str,
    pub description: &'a str,
    pub content: &'a str,
    pub visibility: &'a str,
}

/// Updates a pre-existing personal Snippet.
pub struct SnippetPublisher {
    client: reqwest::Client,
    target: SnippetTarget,
    token: Option<String>,
}

impl SnippetPublisher {
    /// `token` is a GitLab PAT with `api` scope; `None` disables the update.
    pub fn new(client: reqwest::Client, target: SnippetTarget, token: Option<String>) -> Self {
        Self {
            client,
            target,
            token,
        }
    }
}

#[async_trait]
impl Publisher for SnippetPublisher {
    fn name(&self) -> &str {
        TARGET
    }

    async fn publish(&self, content: &str) -> Result<PublishOutcome> {
        let Some(token) = self.token.as_deref() else {
            println!(
                "No GitLab PAT was provided, so skipping the Snippet update. \
                 You can provide a GitLab PAT using the --gitlab-pat option."
            );
            return Ok(PublishOutcome::Skipped);
        };

        println!(
            "Updating the GitLab resume.json Snippet ({})...",
            self.target.html_url()
        );

        let endpoint = self.target.endpoint()?;
        let body = UpdateSnippetRequest {
            id: self.target.id,
            title: &self.target.title,
            file_name: &self.target.file_name,
            description: &self.target.description,
            content,
            visibility: &self.target.visibility,
        };

        debug!(%endpoint, snippet_id = self.target.id, "Sending snippet update");

        let response = self
            .client
            .put(endpoint)
            .header("PRIVATE-TOKEN", token)
            .json(&body)
            .send()
            .await
            .map_err(|source| PublishError::Request {
                target: TARGET,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Status {
                target: TARGET,
                status,
                body,
            });
        }

        info!(snippet_id = self.target.id, %status, "Snippet updated");
        Ok(PublishOutcome::Updated)
    }
}

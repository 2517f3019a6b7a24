//! GitHub Gist publisher.

use async_trait::async_trait;
use resume_config::GistTarget;
use resume_config::targets::RESUME_FILE_NAME;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::{PublishError, PublishOutcome, Publisher, Result};

const TARGET: &str = "GitHub Gist";

/// Body of `PATCH /gists/{id}`.
#[derive(Debug, Serialize)]
pub struct UpdateGistRequest<'a> {
    pub description: &'a str,
    pub files: HashMap<&'a str, GistFile<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GistFile<'a> {
    pub content: &'a str,
}

/// Updates resume.json in a pre-existing Gist.
pub struct GistPublisher {
    client: reqwest::Client,
    target: GistTarget,
    token: Option<String>,
}

impl GistPublisher {
    /// `token` is a GitHub PAT with `gist` scope; `None` disables the update.
    pub fn new(client: reqwest::Client, target: GistTarget, token: Option<String>) -> Self {
        Self {
            client,
            target,
            token,
        }
    }
}

#[async_trait]
impl Publisher for GistPublisher {
    fn name(&self) -> &str {
        TARGET
    }

    async fn publish(&self, content: &str) -> Result<PublishOutcome> {
        let Some(token) = self.token.as_deref() else {
            println!(
                "No GitHub PAT was provided, so skipping the Gist update. \
                 You can provide a GitHub PAT using the --github-pat option."
            );
            return Ok(PublishOutcome::Skipped);
        };

        println!(
            "Updating the GitHub resume.json Gist ({})...",
            self.target.html_url()
        );

        let endpoint = self.target.endpoint()?;
        let body = UpdateGistRequest {
            description: &self.target.description,
            files: HashMap::from([(RESUME_FILE_NAME, GistFile { content })]),
        };

        debug!(%endpoint, gist_id = %self.target.id, "Sending gist update");

        let response = self
            .client
            .patch(endpoint)
            .basic_auth(&self.target.owner, Some(token))
            .header("User-Agent", &self.target.owner)
            .header("Accept", "application/vnd.github+json")
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

        info!(gist_id = %self.target.id, %status, "Gist updated");
        Ok(PublishOutcome::Updated)
    }
}

//! Publish targets.
//!
//! Both targets are pre-existing resources; this tool only ever updates them.

use url::Url;

use crate::{ConfigError, ConfigResult};

/// File name of the published document, in both the Gist and the Snippet.
pub const RESUME_FILE_NAME: &str = "resume.json";

/// GitHub account owning the Gist. Also sent as the `User-Agent`.
pub const GITHUB_USERNAME: &str = "nfriend";

pub const GIST_ID: &str = "36d83b1526df75a663d9c3ad0b1cd630";

pub const GIST_DESCRIPTION: &str = "My resume.json: https://jsonresume.org/. This file is automatically generated by the CI pipeline of my Nuxt Résumé project: https://gitlab.com/nfriend/nuxt-resume#resumejson";

pub const GITHUB_API_URL: &str = "https://api.github.com";

pub const SNIPPET_ID: u64 = 1948091;

pub const SNIPPET_DESCRIPTION: &str = "My [resume.json](https://jsonresume.org/). This file is automatically generated by the CI pipeline of my [Nuxt Résumé project](https://gitlab.com/nfriend/nuxt-resume#resumejson).";

pub const SNIPPET_VISIBILITY: &str = "public";

pub const GITLAB_URL: &str = "https://gitlab.com";

/// The GitHub Gist holding resume.json.
#[derive(Debug, Clone)]
pub struct GistTarget {
    pub id: String,
    pub owner: String,
    pub description: String,
    /// API root, e.g. `https://api.github.com` or `https://ghe.example.com/api/v3`.
    pub api_url: String,
}

impl Default for GistTarget {
    fn default() -> Self {
        Self {
            id: GIST_ID.to_string(),
            owner: GITHUB_USERNAME.to_string(),
            description: GIST_DESCRIPTION.to_string(),
            api_url: GITHUB_API_URL.to_string(),
        }
    }
}

impl GistTarget {
    /// REST endpoint for updating the Gist.
    pub fn endpoint(&self) -> ConfigResult<Url> {
        extend_path(&self.api_url, &["gists", &self.id])
    }

    /// Human-facing page of the Gist.
    pub fn html_url(&self) -> String {
        format!("https://gist.github.com/{}/{}", self.owner, self.id)
    }
}

/// The GitLab Snippet holding resume.json.
#[derive(Debug, Clone)]
pub struct SnippetTarget {
    pub id: u64,
    pub title: String,
    pub file_name: String,
    pub description: String,
    pub visibility: String,
    /// GitLab instance root, e.g. `https://gitlab.com` or `https://example.com/gitlab`.
    pub base_url: String,
}

impl Default for SnippetTarget {
    fn default() -> Self {
        Self {
            id: SNIPPET_ID,
            title: RESUME_FILE_NAME.to_string(),
            file_name: RESUME_FILE_NAME.to_string(),
            description: SNIPPET_DESCRIPTION.to_string(),
            visibility: SNIPPET_VISIBILITY.to_string(),
            base_url: GITLAB_URL.to_string(),
        }
    }
}

impl SnippetTarget {
    /// REST (v4) endpoint for updating the Snippet.
    pub fn endpoint(&self) -> ConfigResult<Url> {
        extend_path(&self.base_url, &["api", "v4", "snippets", &self.id.to_string()])
    }

    /// Human-facing page of the Snippet.
    pub fn html_url(&self) -> String {
        format!("{}/snippets/{}", self.base_url.trim_end_matches('/'), self.id)
    }
}

/// Append path segments to a base URL, keeping any path the base already has.
fn extend_path(base: &str, segments: &[&str]) -> ConfigResult<Url> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| ConfigError::CannotBeABase(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

//! The generate-and-publish pipeline.

use anyhow::{Context, Result};
use resume_config::{GistTarget, SnippetTarget, load_record};
use resume_core::ResumeJson;
use resume_publish::{GistPublisher, Publisher, SnippetPublisher};
use std::path::PathBuf;
use tracing::info;

pub struct GenerateOptions {
    pub data: PathBuf,
    pub github_pat: Option<String>,
    pub gitlab_pat: Option<String>,
    pub github_api_url: String,
    pub gitlab_url: String,
}

/// Transform the résumé record, print it, then update the Gist and the Snippet.
///
/// Publishers run one after the other; the first failure aborts the run.
pub async fn generate(opts: GenerateOptions) -> Result<()> {
    let record = load_record(&opts.data)?;
    let resume = ResumeJson::from_record(&record).context("Failed to transform resume data")?;
    let content = resume.to_pretty_json()?;

    println!("Transformed resume data into the following resume.json format:");
    println!("{}", content);

    let client = reqwest::Client::new();

    let gist = GistTarget {
        api_url: opts.github_api_url,
        ..Default::default()
    };
    let snippet = SnippetTarget {
        base_url: opts.gitlab_url,
        ..Default::default()
    };

    let publishers: Vec<Box<dyn Publisher>> = vec![
        Box::new(GistPublisher::new(client.clone(), gist, opts.github_pat)),
        Box::new(SnippetPublisher::new(client, snippet, opts.gitlab_pat)),
    ];

    for publisher in &publishers {
        let outcome = publisher
            .publish(&content)
            .await
            .with_context(|| format!("Failed to update the {}", publisher.name()))?;
        info!(publisher = publisher.name(), ?outcome, "Publish step finished");
    }

    Ok(())
}

//! resume.json generator CLI.

use clap::{ArgAction, Parser};
use resume_config::DEFAULT_DATA_PATH;
use resume_config::targets::{GITHUB_API_URL, GITLAB_URL};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "generate-resume-json")]
#[command(about = "Generate resume.json and publish it to a GitHub Gist and a GitLab Snippet", long_about = None)]
#[command(override_usage = "generate-resume-json --github-pat <pat> --gitlab-pat <pat>")]
#[command(disable_help_flag = true, version)]
struct Cli {
    /// A GitHub PAT with "gist" scope. If not provided, the Gist will not be updated.
    #[arg(short = 'h', long, env = "GITHUB_PAT", hide_env_values = true)]
    github_pat: Option<String>,

    /// A GitLab PAT with "api" scope. If not provided, the Snippet will not be updated.
    #[arg(short = 'l', long, env = "GITLAB_PAT", hide_env_values = true)]
    gitlab_pat: Option<String>,

    /// Path to the résumé data file
    #[arg(short, long, env = "RESUME_DATA", default_value = DEFAULT_DATA_PATH)]
    data: PathBuf,

    /// GitHub API origin
    #[arg(long, env = "GITHUB_API_URL", default_value = GITHUB_API_URL)]
    github_api_url: String,

    /// GitLab instance origin
    #[arg(long, env = "GITLAB_URL", default_value = GITLAB_URL)]
    gitlab_url: String,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the document and progress lines
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    commands::generate(commands::GenerateOptions {
        data: cli.data,
        github_pat: cli.github_pat.filter(|t| !t.is_empty()),
        gitlab_pat: cli.gitlab_pat.filter(|t| !t.is_empty()),
        github_api_url: cli.github_api_url,
        gitlab_url: cli.gitlab_url,
    })
    .await
}

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use git_latest_release::config::{Config, DEFAULT_MAX_COMMITS_TO_SCAN, DEFAULT_TAG_PREFIX};
use git_latest_release::output;
use git_latest_release::provider::GithubProvider;
use git_latest_release::resolver;

#[derive(Parser)]
#[command(
    name = "git-latest-release",
    about = "Find the latest semantic-version release of a GitHub repository"
)]
struct Args {
    #[arg(
        long,
        env = "GITHUB_REPOSITORY",
        help = "Repository to inspect, in owner/name form"
    )]
    repository: String,

    #[arg(
        short,
        long,
        env = "GITHUB_REF",
        default_value = "main",
        help = "Branch to walk in branch scope (a refs/heads/ prefix is accepted)"
    )]
    branch: String,

    #[arg(
        long,
        env = "INPUT_GITHUB_TOKEN",
        hide_env_values = true,
        help = "Access token for the GitHub API"
    )]
    github_token: Option<String>,

    #[arg(
        long,
        env = "INPUT_RELEASE_TAG_PREFIX",
        default_value = DEFAULT_TAG_PREFIX,
        help = "Exact prefix a release tag must carry"
    )]
    tag_prefix: String,

    #[arg(
        long,
        env = "INPUT_SEARCH_SCOPE",
        default_value = "branch",
        help = "Search scope: repo, branch, or all (alias for branch)"
    )]
    search_scope: String,

    #[arg(
        long,
        env = "INPUT_MAX_COMMITS_TO_SCAN",
        default_value_t = DEFAULT_MAX_COMMITS_TO_SCAN,
        help = "Maximum commits to scan in branch scope"
    )]
    max_commits_to_scan: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Configuration failures abort before any network access
    let config = match Config::new(
        args.repository,
        &args.branch,
        args.github_token,
        args.tag_prefix,
        &args.search_scope,
        args.max_commits_to_scan,
    ) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        repository = %config.repository,
        scope = %config.scope,
        tag_prefix = %config.tag_prefix,
        "resolving latest release"
    );

    let provider = GithubProvider::new(config.repository.clone(), config.token.clone());

    match resolver::resolve_latest(&provider, &config)? {
        Some(record) => {
            info!("Latest Release Found: {}", record);
            output::emit(&record)?;
        }
        None => {
            info!("Latest Release Not Found.");
        }
    }

    Ok(())
}

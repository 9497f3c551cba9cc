use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use projects_portfolio::{
	config::{ConfigError, PortfolioConfig, API_BASE_URL_ENV, LOG_LEVEL_ENV, USER_AGENT_ENV},
	descriptions::{load_repository_descriptions, set_loading_states, ListRepositoriesError},
	page::{Document, PageFileError},
	selector::Selector,
};
use interfaces_github_repositories::index::FetchUserRepositoriesError;
use thiserror::Error;
use tracing::info;

/// Fill a portfolio page with the descriptions of a GitHub user's repositories.
#[derive(Debug, Parser)]
#[command(name = "portfolio-descriptions", version)]
struct Cli {
	/// GitHub user whose public repositories are listed
	#[arg(long)]
	user: String,

	/// JSON page file: an array of {"tag", "id", "text"} elements
	#[arg(long)]
	page: PathBuf,

	/// Target elements: `*`, a tag name or `#id`
	#[arg(long, default_value = "*")]
	selector: Selector,

	/// Overrides PORTFOLIO_API_BASE_URL
	#[arg(long)]
	api_base_url: Option<String>,

	/// Overrides PORTFOLIO_USER_AGENT
	#[arg(long)]
	user_agent: Option<String>,

	/// Overrides PORTFOLIO_LOG_LEVEL
	#[arg(long)]
	log_level: Option<String>,

	/// Print the populated page instead of writing it back
	#[arg(long)]
	dry_run: bool,
}

impl Cli {
	fn config_override(&self, key: &str) -> Option<String> {
		match key {
			API_BASE_URL_ENV => self.api_base_url.clone(),
			USER_AGENT_ENV => self.user_agent.clone(),
			LOG_LEVEL_ENV => self.log_level.clone(),
			_ => None,
		}
	}
}

#[derive(Debug, Error)]
pub enum MainError {
	#[error("Config: {source}")]
	Config {
		#[from]
		source: ConfigError,
	},
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("GitHubClient: {source}")]
	GitHubClient {
		#[source]
		source: FetchUserRepositoriesError,
	},
	#[error("PageFile: {source}")]
	PageFile {
		#[from]
		source: PageFileError,
	},
	#[error("LoadRepositoryDescriptions: {source}")]
	LoadRepositoryDescriptions {
		#[source]
		source: ListRepositoriesError,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	let cli = Cli::parse();

	let config = PortfolioConfig::from_env_with_overrides(|key| cli.config_override(key))?;

	utils_trace::init(&config.log_level)
		.map_err(|source| MainError::TracingInit { source })?;

	let client = config
		.github_client()
		.map_err(|source| MainError::GitHubClient { source })?;

	let mut page = Document::read_from(&cli.page)?;

	let marked = set_loading_states(&mut page, &cli.selector);
	info!("Marked {} element(s) matching {} as loading", marked, cli.selector);

	let loaded = load_repository_descriptions(&client, &cli.user, &mut page, &cli.selector, |report| {
		info!(
			"Descriptions ready: {} populated, {} left as placeholder",
			report.populated, report.unmatched
		);
	})
	.await;

	// A failed load still leaves the placeholders on the page.
	if cli.dry_run {
		println!("{}", page.to_json()?);
	} else {
		page.write_to(&cli.page)?;
		info!("Page written to {}", cli.page.display());
	}

	loaded.map_err(|source| MainError::LoadRepositoryDescriptions { source })?;

	Ok(())
}

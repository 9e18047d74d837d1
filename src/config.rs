// src/config.rs
// =============================================================================
// Runtime configuration for a crawl.
//
// Everything the crawl needs to know (seed, depth, timeout, user agent) lives
// in one CrawlConfig value that is built once from the CLI and then passed
// down explicitly. Nothing deeper in the program reads flags on its own.
// =============================================================================

use std::time::Duration;
use url::Url;

use crate::cli::Cli;
use crate::error::ConfigError;

pub const DEFAULT_USER_AGENT: &str = concat!("link-mapper/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Seed URL. Also the base URL every relative link is resolved against.
    pub seed_url: String,
    /// Maximum number of link hops to follow from the seed
    pub max_depth: u32,
    pub timeout: Duration,
    pub user_agent: String,
}

impl CrawlConfig {
    // Builds a config with default timeout and user agent
    //
    // The seed is validated; surrounding slashes are trimmed so that
    // "https://example.com/" and "https://example.com" map to the same key.
    pub fn new(seed_url: &str, max_depth: u32) -> Result<Self, ConfigError> {
        Ok(Self {
            seed_url: validate_seed(seed_url)?,
            max_depth,
            timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let url = cli
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let mut config = Self::new(url, cli.depth)?;
        config.timeout = Duration::from_secs(cli.timeout);
        if let Some(user_agent) = &cli.user_agent {
            config.user_agent = user_agent.clone();
        }
        Ok(config)
    }

    // Replaces the seed after redirect resolution
    pub fn with_seed(mut self, seed_url: String) -> Self {
        self.seed_url = seed_url;
        self
    }
}

// Checks that the seed parses and is http(s), and returns it trimmed of '/'
fn validate_seed(raw: &str) -> Result<String, ConfigError> {
    let raw = raw.trim();
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "URL has no host".to_string(),
        });
    }

    Ok(raw.trim_matches('/').to_string())
}

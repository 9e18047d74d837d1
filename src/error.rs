// src/error.rs
// =============================================================================
// Error types shared by the config, fetch and crawl layers.
//
// Only errors that touch the seed ever reach the user. Anything that goes
// wrong deeper in the crawl is handled where it happens (the branch is
// dropped) and never shows up here.
//
// Rust concepts:
// - thiserror: derive Display and Error for enums instead of writing them by hand
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use thiserror::Error;

// Problems with the user's input, detected before any network traffic
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please enter a target URL")]
    MissingUrl,

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

// Transport-level failures from a single HTTP request
//
// A non-200 status is NOT a FetchError; see crawl::fetch::FetchOutcome::Skip
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not connect to {url}: {source}")]
    Connect { url: String, source: reqwest::Error },

    #[error("failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },

    #[error("request to {url} failed: {source}")]
    Request { url: String, source: reqwest::Error },
}

// Fatal errors that end a crawl run
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("could not resolve seed URL: {0}")]
    SeedResolution(#[source] FetchError),

    #[error("could not fetch seed URL: {0}")]
    SeedFetch(#[source] FetchError),

    #[error("seed URL {url} returned HTTP {status}")]
    SeedStatus { url: String, status: u16 },
}

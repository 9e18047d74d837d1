// src/crawl/fetch.rs
// =============================================================================
// This module downloads pages for the crawler.
//
// Key functionality:
// - GET a page and hand back its body, but only for a plain 200 OK
// - Anything else (404, 500, even a 301 redirect) is a "skip", not an error
// - Network failures (timeout, DNS, refused connection) are real errors
// - Before the crawl starts, follow the seed's redirects once with a HEAD
//   request so the crawl begins at the URL the site actually serves
//
// Two reqwest clients are kept: one that never follows redirects (for the
// crawl) and one that does (for seed resolution only).
// =============================================================================

use reqwest::{redirect::Policy, Client, StatusCode};

use crate::config::CrawlConfig;
use crate::error::FetchError;

// Result of a GET that reached the server
#[derive(Debug)]
pub enum FetchOutcome {
    /// 200 OK, with the full response body
    Success { body: Vec<u8> },
    /// Any other status; the page is dropped from the crawl
    Skip { status: StatusCode },
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    crawl_client: Client,
    resolve_client: Client,
}

impl Fetcher {
    // Builds both HTTP clients from the crawl config
    //
    // Client is cheap to clone (it's an Arc internally), so the Fetcher
    // can be shared by every crawl task.
    pub fn new(config: &CrawlConfig) -> Result<Self, reqwest::Error> {
        let crawl_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .redirect(Policy::none())
            .build()?;

        let resolve_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .redirect(Policy::limited(10))
            .build()?;

        Ok(Self {
            crawl_client,
            resolve_client,
        })
    }

    // Fetches one page
    //
    // Returns:
    //   Ok(Success) = HTTP 200 and the body was read
    //   Ok(Skip)    = any other HTTP status
    //   Err(..)     = we never got a usable response
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        let response = self
            .crawl_client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(FetchOutcome::Skip { status });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;

        Ok(FetchOutcome::Success {
            body: body.to_vec(),
        })
    }

    // Follows redirects on the seed URL and returns where they end up
    //
    // Example:
    //   http://example.com -> 301 -> https://www.example.com/
    //   result = "https://www.example.com"
    //
    // The final status code is ignored here. If the page behind the
    // redirects is broken, the first crawl fetch reports it.
    pub async fn resolve_seed(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .resolve_client
            .head(url)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        Ok(response.url().as_str().trim_matches('/').to_string())
    }
}

// Sorts a reqwest error into one of our FetchError variants
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url, source: error }
    } else {
        FetchError::Request { url, source: error }
    }
}

// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, stdout is reserved for the JSON result)
// 3. Resolve the seed URL's redirects
// 4. Crawl and print the site map as JSON
// 5. Exit with proper code (0 = success, 1 = error)
// =============================================================================

mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - validated runtime settings
mod crawl;         // src/crawl/ - fetching and the concurrent crawl
mod error;         // src/error.rs - error types
mod extract;       // src/extract/ - turning pages into links and assets

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::CrawlConfig;
use crawl::{Fetcher, SiteMap};
use error::CrawlError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let exit_code = match run(cli).await {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("{}", error_message(&e));
            1
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
//
// Returns the rendered site map; main prints it only when everything worked.
async fn run(cli: Cli) -> Result<String> {
    let config = CrawlConfig::from_cli(&cli).map_err(CrawlError::from)?;
    let fetcher = Fetcher::new(&config).map_err(CrawlError::from)?;

    // Depth 0 never touches the network, not even for redirects
    let config = if config.max_depth > 0 {
        let resolved = fetcher
            .resolve_seed(&config.seed_url)
            .await
            .map_err(CrawlError::SeedResolution)?;
        if resolved != config.seed_url {
            info!(from = %config.seed_url, to = %resolved, "seed redirected");
        }
        config.with_seed(resolved)
    } else {
        config
    };

    let site_map = crawl::crawl(&config, fetcher).await?;

    render_site_map(&site_map)
}

// Renders the site map as 2-space indented JSON followed by a newline
fn render_site_map(site_map: &SiteMap) -> Result<String> {
    let json = serde_json::to_string_pretty(site_map).context("failed to serialize site map")?;
    Ok(format!("{}\n", json))
}

// One-line message for a fatal error
//
// Our error types already include their cause in Display, so only the
// top-level error is printed ({} rather than {:#}).
fn error_message(error: &anyhow::Error) -> String {
    format!("Error: {}", error)
}

// Picks the log filter: RUST_LOG if set, otherwise from -q / -v flags
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if quiet {
            EnvFilter::new("error")
        } else {
            match verbose {
                0 => EnvFilter::new("link_mapper=info,warn"),
                1 => EnvFilter::new("link_mapper=debug,info"),
                _ => EnvFilter::new("link_mapper=trace,debug"),
            }
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why print JSON with println! but logs with tracing?
//    - stdout is the program's result; someone may pipe it into jq
//    - tracing writes to stderr, so log lines never corrupt the JSON
//
// 2. What is .map_err(CrawlError::from)?
//    - from_cli returns a ConfigError
//    - We wrap it in CrawlError so every fatal error shares one type
//    - The ? then turns CrawlError into anyhow::Error automatically
//
// 3. Why std::process::exit() instead of returning from main?
//    - It lets us pick the exit code explicitly
//    - Scripts can check $? to see whether the crawl worked
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["link-mapper"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn unused_address() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", address)
    }

    #[tokio::test]
    async fn test_depth_zero_prints_empty_map() {
        let output = run(cli(&["--url", unused_address().as_str(), "--depth", "0"])).await.unwrap();
        assert_eq!(output, "{}\n");
    }

    #[tokio::test]
    async fn test_missing_url_is_rejected() {
        let err = run(cli(&[])).await.unwrap_err();
        assert_eq!(error_message(&err), "Error: Please enter a target URL");
    }

    #[tokio::test]
    async fn test_seed_not_found_renders_nothing() {
        let server = MockServer::start().await;

        let err = run(cli(&["--url", server.uri().as_str()])).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CrawlError>(),
            Some(CrawlError::SeedStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_seed_page_renders_indented_json() {
        let server = MockServer::start().await;
        let base = server.uri();
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"<a href="/about">a</a><img src="/logo.png">"#),
            )
            .mount(&server)
            .await;

        let output = run(cli(&["--url", base.as_str()])).await.unwrap();

        let expected = format!(
            "{{\n  \"{0}\": {{\n    \"assets\": [\n      \"{0}/logo.png\"\n    ],\n    \"links\": [\n      \"{0}/about\"\n    ]\n  }}\n}}\n",
            base
        );
        assert_eq!(output, expected);
    }

    #[tokio::test]
    async fn test_unreachable_seed_message_names_each_cause_once() {
        let err = run(cli(&["--url", unused_address().as_str()])).await.unwrap_err();
        let message = error_message(&err);

        assert!(message.starts_with("Error: could not resolve seed URL: "));
        assert_eq!(message.matches("could not resolve seed URL").count(), 1);
        assert_eq!(message.matches("could not connect to").count(), 1);
        assert_eq!(message.matches("error sending request").count(), 1);
    }

    #[test]
    fn test_render_empty_map() {
        assert_eq!(render_site_map(&SiteMap::new()).unwrap(), "{}\n");
    }
}

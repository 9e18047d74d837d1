// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using a
// plain Rust struct and attributes (the #[...] things).
//
// The flags mirror the classic crawler interface:
//   link-mapper --url https://example.com --depth 2
// =============================================================================

use clap::{ArgAction, Parser};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-mapper",
    version,
    about = "Crawl a website to a fixed depth and print a JSON map of its links and assets",
    long_about = "link-mapper starts at a seed URL, follows same-origin links up to --depth hops, \
                  and prints every visited page with the links and assets it references."
)]
pub struct Cli {
    /// Target URL to start crawling from (e.g., https://example.com)
    ///
    /// Kept optional here so a missing URL produces our own message
    /// instead of clap's generic one
    #[arg(long)]
    pub url: Option<String>,

    /// Recursive crawl depth (default: 1)
    ///
    /// Depth 0 = fetch nothing
    /// Depth 1 = just the starting page
    /// Depth 2 = starting page + all pages it links to
    #[arg(long, default_value_t = 1)]
    pub depth: u32,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["link-mapper", "--url", "https://example.com"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.depth, 1);
        assert_eq!(cli.timeout, 10);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_depth_and_verbosity() {
        let cli = Cli::try_parse_from([
            "link-mapper",
            "--url",
            "https://example.com",
            "--depth",
            "3",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.depth, 3);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_url_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["link-mapper"]).unwrap();
        assert!(cli.url.is_none());
    }

    #[test]
    fn test_negative_depth_rejected() {
        assert!(Cli::try_parse_from(["link-mapper", "--depth", "-1"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["link-mapper", "-q", "-v"]).is_err());
    }
}

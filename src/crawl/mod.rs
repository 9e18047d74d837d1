// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Concurrent crawling: every discovered link gets its own task
// - Same-origin restriction (cross-site links are never followed)
// - Configurable depth limit
// - Each URL is fetched at most once per run
//
// Submodules:
// - fetch: HTTP requests and seed redirect resolution
// - registry: the shared visited map that doubles as the crawl result
// - walker: the recursive crawl itself
// =============================================================================

mod fetch;
mod registry;
mod walker;

pub use fetch::Fetcher;
pub use registry::SiteMap;
pub use walker::crawl;

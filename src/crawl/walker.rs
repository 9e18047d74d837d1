// src/crawl/walker.rs
// =============================================================================
// This module walks a website, depth-first and concurrently.
//
// How it works:
// 1. Start with the seed URL and the full depth budget
// 2. Claim the URL in the registry (skip it if another task already did)
// 3. Fetch the page, pull out its links and assets, record them
// 4. Spawn one task per link with one less level of depth
// 5. Wait for every child before returning
//
// There is no queue and no worker limit: a page with 50 links starts 50
// tasks at once. The registry is the only thing those tasks share.
//
// Relative links on every page resolve against the SEED URL, not the page
// they were found on. "/contact" found on https://example.com/blog/post
// becomes https://example.com/contact.
// =============================================================================

use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, trace, warn};

use super::fetch::{FetchOutcome, Fetcher};
use super::registry::{SiteMap, VisitedRegistry};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::extract::{classify, tokenize_attributes};

// One URL waiting to be visited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: String,
    /// Levels still allowed at and below this URL. 0 = don't fetch.
    pub remaining_depth: u32,
}

impl CrawlTask {
    pub fn new(url: impl Into<String>, remaining_depth: u32) -> Self {
        Self {
            url: url.into(),
            remaining_depth,
        }
    }
}

// Everything a crawl task needs, shared read-only (apart from the registry)
struct CrawlContext {
    base_url: String,
    max_depth: u32,
    fetcher: Fetcher,
    registry: VisitedRegistry,
}

impl CrawlContext {
    // Only the seed starts with the whole depth budget; every child has less
    fn is_seed(&self, task: &CrawlTask) -> bool {
        task.remaining_depth == self.max_depth
    }
}

// Crawls a site starting from config.seed_url
//
// Parameters:
//   config: seed (already redirect-resolved), depth
//   fetcher: HTTP side, shared by every task
//
// Returns: the site map, or an error if the seed itself couldn't be crawled
//
// Example:
//   max_depth=0: nothing is fetched, the map is empty
//   max_depth=1: only the seed page
//   max_depth=2: seed page + every same-origin page it links to
pub async fn crawl(config: &CrawlConfig, fetcher: Fetcher) -> Result<SiteMap, CrawlError> {
    let context = Arc::new(CrawlContext {
        base_url: config.seed_url.clone(),
        max_depth: config.max_depth,
        fetcher,
        registry: VisitedRegistry::new(),
    });

    info!(seed = %config.seed_url, depth = config.max_depth, "starting crawl");

    let seed = CrawlTask::new(config.seed_url.clone(), config.max_depth);
    visit(Arc::clone(&context), seed).await?;

    let site_map = context.registry.snapshot();
    info!(pages = site_map.len(), "crawl finished");
    Ok(site_map)
}

// Visits one URL and, recursively, everything it links to
//
// async fns can't call themselves directly (the future would have infinite
// size), so this returns a boxed future instead.
fn visit(context: Arc<CrawlContext>, task: CrawlTask) -> BoxFuture<'static, Result<(), CrawlError>> {
    async move {
        if task.remaining_depth == 0 {
            trace!(url = %task.url, "depth exhausted");
            return Ok(());
        }
        let child_depth = task.remaining_depth - 1;
        let is_seed = context.is_seed(&task);

        if !context.registry.claim(&task.url) {
            trace!(url = %task.url, "already visited");
            return Ok(());
        }

        debug!(url = %task.url, remaining_depth = task.remaining_depth, "fetching");

        let body = match context.fetcher.fetch(&task.url).await {
            Ok(FetchOutcome::Success { body }) => body,
            Ok(FetchOutcome::Skip { status }) => {
                if is_seed {
                    return Err(CrawlError::SeedStatus {
                        url: task.url,
                        status: status.as_u16(),
                    });
                }
                debug!(url = %task.url, %status, "skipping page");
                return Ok(());
            }
            Err(e) => {
                if is_seed {
                    return Err(CrawlError::SeedFetch(e));
                }
                debug!(url = %task.url, error = %e, "dropping branch");
                return Ok(());
            }
        };

        let attributes = tokenize_attributes(&body);
        let page = classify(&attributes, &context.base_url);
        let links = page.links.clone();
        debug!(
            url = %task.url,
            resolved_against = %page.source_url,
            links = links.len(),
            assets = page.assets.len(),
            "classified page"
        );

        context.registry.record(task.url.clone(), page);
        trace!(recorded = context.registry.len(), "registry updated");

        if child_depth == 0 {
            return Ok(());
        }

        let mut children = JoinSet::new();
        for link in links {
            children.spawn(visit(Arc::clone(&context), CrawlTask::new(link, child_depth)));
        }

        // Join every child; none of them can fail the run, only the seed can
        while let Some(joined) = children.join_next().await {
            match joined {
                Ok(Ok(())) => {}
                Ok(Err(e)) => debug!(error = %e, "child crawl failed"),
                Err(e) => warn!(error = %e, "crawl task panicked"),
            }
        }

        Ok(())
    }
    .boxed()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a JoinSet?
//    - A collection of spawned tokio tasks you can wait on as a group
//    - join_next() hands back each task's result as it finishes
//    - Dropping a JoinSet aborts whatever is still running, so we always
//      drain it before returning
//
// 2. Why Arc<CrawlContext>?
//    - Every task needs the fetcher, the base URL and the registry
//    - Arc::clone() just bumps a counter; nothing is copied
//
// 3. Why BoxFuture<'static, ...>?
//    - tokio::spawn needs a future that owns everything it uses ('static)
//    - Boxing gives the recursive future a fixed size
// -----------------------------------------------------------------------------

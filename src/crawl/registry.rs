// src/crawl/registry.rs
// =============================================================================
// The visited registry: the one piece of state every crawl task shares.
//
// It answers two questions:
// 1. "Has anyone started on this URL yet?"  -> claim()
// 2. "What did we find on this URL?"        -> record() / snapshot()
//
// A URL is claimed before it is fetched. claim() checks and marks in a
// single locked step, so two tasks that find the same link at the same
// moment can't both fetch it. Pages that were skipped or failed stay
// claimed, which means we never retry them during a run.
//
// Rust concepts:
// - Arc: shared ownership across tasks (each task holds a clone)
// - Mutex: only one task touches the maps at a time
// =============================================================================

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::extract::PageRecord;

// The crawl result: URL -> what that page references, sorted by URL
pub type SiteMap = BTreeMap<String, PageRecord>;

#[derive(Debug, Default)]
struct RegistryState {
    claimed: HashSet<String>,
    pages: HashMap<String, PageRecord>,
}

// Cloning a VisitedRegistry gives another handle to the same maps
#[derive(Debug, Clone, Default)]
pub struct VisitedRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Reserves a URL for fetching
    //
    // Returns true exactly once per URL. Every later call (from any task)
    // returns false.
    pub fn claim(&self, url: &str) -> bool {
        let mut state = self.lock();
        if state.pages.contains_key(url) {
            return false;
        }
        state.claimed.insert(url.to_string())
    }

    // Stores the record for a fetched page. A second write for the same
    // URL replaces the first.
    pub fn record(&self, url: String, page: PageRecord) {
        self.lock().pages.insert(url, page);
    }

    pub fn len(&self) -> usize {
        self.lock().pages.len()
    }

    // Copies the recorded pages out, sorted by URL
    pub fn snapshot(&self) -> SiteMap {
        self.lock()
            .pages
            .iter()
            .map(|(url, page)| (url.clone(), page.clone()))
            .collect()
    }

    // A task that panicked while holding the lock can't leave the maps
    // half-written (every update is a single insert), so keep going.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

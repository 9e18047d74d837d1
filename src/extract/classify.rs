// src/extract/classify.rs
// =============================================================================
// This module sorts a page's attributes into links and assets.
//
// Rules:
// - href="/"          -> ignored (just points back at the home page)
// - href="/path"      -> link, resolved against the base URL
// - href="<base>..."  -> link, same origin
// - href="<other>"    -> ignored, we never leave the site
// - src="/path"       -> asset, resolved against the base URL
// - src="<anything>"  -> asset, kept whatever the origin
//
// Every candidate is normalized first (see normalize.rs), then stored in one
// map keyed by URL. That map is what removes duplicates: a page that links
// to /about ten times produces one link.
// =============================================================================

use serde::Serialize;
use std::collections::HashMap;

use super::html::Attribute;
use super::normalize::normalize;

// What a single page references
//
// Serialized as {"assets": [...], "links": [...]}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// URL that relative references on this page were resolved against
    #[serde(skip)]
    pub source_url: String,
    pub assets: Vec<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Link,
    Asset,
}

// Builds a PageRecord from a page's attribute stream
//
// Parameters:
//   attributes: every attribute on the page, in document order
//   base_url: the seed URL of the crawl (NOT the current page's URL)
//
// If the same URL turns up as both an href and a src, whichever comes
// last in the page decides its kind.
pub fn classify(attributes: &[Attribute], base_url: &str) -> PageRecord {
    let mut references: HashMap<String, Reference> = HashMap::new();

    for attribute in attributes {
        let candidate = match attribute.key.as_str() {
            "href" => link_candidate(&attribute.value, base_url).map(|url| (url, Reference::Link)),
            "src" => Some((asset_candidate(&attribute.value, base_url), Reference::Asset)),
            _ => None,
        };

        if let Some((url, kind)) = candidate {
            // An empty URL has nothing to point at, so we never record it
            if !url.is_empty() {
                references.insert(url, kind);
            }
        }
    }

    let mut record = PageRecord {
        source_url: base_url.to_string(),
        ..PageRecord::default()
    };

    for (url, kind) in references {
        match kind {
            Reference::Link => record.links.push(url),
            Reference::Asset => record.assets.push(url),
        }
    }

    // HashMap iteration order is random; sort so output is stable
    record.links.sort();
    record.assets.sort();

    record
}

fn link_candidate(value: &str, base_url: &str) -> Option<String> {
    if value == "/" {
        return None;
    }

    if value.starts_with('/') {
        Some(site_relative(value, base_url))
    } else if value.starts_with(base_url) {
        Some(normalize(value))
    } else {
        None
    }
}

fn asset_candidate(value: &str, base_url: &str) -> String {
    if value.starts_with('/') {
        site_relative(value, base_url)
    } else {
        normalize(value)
    }
}

fn site_relative(value: &str, base_url: &str) -> String {
    format!("{}/{}", base_url, normalize(value))
}

// src/extract/mod.rs
// =============================================================================
// Everything that happens to a page after it has been downloaded.
//
// Submodules:
// - html: flattens the page into (key, value) attribute pairs
// - classify: decides which attributes are links and which are assets
// - normalize: puts every URL into one canonical form
//
// None of this does any I/O, so it is all plain synchronous code.
// =============================================================================

mod classify;
mod html;
mod normalize;

pub use classify::{classify, PageRecord};
pub use html::tokenize_attributes;

//! Provider adapters normalizing external museum collection APIs into the
//! common [`Artwork`](crate::artwork::Artwork) record.
//!
//! Providers are best-effort: a network or parse failure in one adapter is
//! logged and reported as "no result", never propagated, so one provider's
//! outage cannot block the others.

pub mod harvard;
pub mod met;

pub use harvard::HarvardClient;
pub use met::MetClient;

use crate::artwork::{Artwork, Era};
use async_trait::async_trait;

/// A normalized artwork data source.
#[async_trait]
pub trait ArtworkProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Resolves one artwork for the given era, or nothing. Results without a
    /// usable image URL are rejected here, not by the caller.
    async fn resolve_by_era(&self, era: Era) -> Option<Artwork>;

    /// Resolves every artwork this provider can attribute to the named
    /// artist. An empty result is a valid outcome, not a failure.
    async fn resolve_by_artist(&self, name: &str) -> Vec<Artwork>;
}

/// Returns the value when present and non-empty, else the fallback.
fn or_literal(value: Option<&str>, literal: &str) -> String {
    match value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => literal.to_string(),
    }
}

/// Like [`or_literal`] for upstreams that report absence as an empty string.
fn text(value: &str, literal: &str) -> String {
    or_literal(Some(value), literal)
}

/// Joins non-empty fragments with single spaces, for the composed
/// description/context strings several upstreams require.
fn compose(fragments: &[&str]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

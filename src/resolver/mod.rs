//! Resolution orchestration: one artwork per era query, a sequence per
//! artist query, produced from the curated gallery and the provider chain
//! according to the fallback policy.

mod cache;

pub use cache::ArtistCache;

use crate::artwork::{Artwork, Era};
use crate::gallery::CuratedGallery;
use crate::providers::ArtworkProvider;
use crate::random::Randomness;
use crate::server::metrics;
use std::sync::Arc;
use tracing::{debug, info};

/// Chance of short-circuiting to a curated artwork before querying any
/// provider: prefer curated content sometimes, but mostly pull fresh content.
const CURATED_PICK_PROBABILITY: f64 = 0.3;

/// Resolves artwork queries against the curated gallery and the providers,
/// in priority order. Constructed once at startup and shared by reference;
/// there are no ambient singletons.
pub struct Orchestrator {
    providers: Vec<Arc<dyn ArtworkProvider>>,
    gallery: CuratedGallery,
    cache: ArtistCache,
    random: Arc<dyn Randomness>,
}

impl Orchestrator {
    /// `providers` must be given in priority order: the richer-metadata
    /// provider first.
    pub fn new(
        providers: Vec<Arc<dyn ArtworkProvider>>,
        gallery: CuratedGallery,
        random: Arc<dyn Randomness>,
    ) -> Self {
        Self {
            providers,
            gallery,
            cache: ArtistCache::new(),
            random,
        }
    }

    /// Resolves one displayable artwork for the era, or nothing.
    ///
    /// Order: probabilistic curated short-circuit, then providers in
    /// priority order, then a curated fallback. Provider requests run
    /// sequentially; a failing provider never blocks the next one.
    ///
    /// The documented caller recovery for an empty outcome is a single
    /// retry with `Era::All`; that retry belongs to the caller so that a
    /// request can never recurse indefinitely.
    pub async fn resolve_for_era(&self, era: Era) -> Option<Artwork> {
        let curated = self.gallery.for_era(era);

        if !curated.is_empty() && self.random.roll() < CURATED_PICK_PROBABILITY {
            debug!("Era {} resolved from the curated gallery (short-circuit)", era);
            metrics::record_resolution("era", "curated");
            return Some(curated[self.random.pick(curated.len())].clone());
        }

        for provider in &self.providers {
            if let Some(artwork) = provider.resolve_by_era(era).await {
                if artwork.is_displayable() {
                    debug!("Era {} resolved by provider {}", era, provider.name());
                    metrics::record_resolution("era", provider.name());
                    return Some(artwork);
                }
            }
        }

        if !curated.is_empty() {
            debug!("Era {} fell back to the curated gallery", era);
            metrics::record_resolution("era", "curated_fallback");
            return Some(curated[self.random.pick(curated.len())].clone());
        }

        info!("Era {} resolved to nothing", era);
        metrics::record_resolution("era", "none");
        None
    }

    /// Resolves every artwork attributable to the named artist.
    ///
    /// A cache hit returns the stored sequence without any network call.
    /// On a miss, every provider is queried sequentially and the results
    /// concatenated in provider order, without cross-provider
    /// de-duplication. Non-empty sequences are cached; empty ones are not,
    /// so the next query for the same name tries the network again.
    pub async fn resolve_for_artist(&self, name: &str) -> Arc<Vec<Artwork>> {
        if let Some(artworks) = self.cache.get(name) {
            debug!("Artist {:?} served from cache ({} artworks)", name, artworks.len());
            metrics::record_artist_cache_lookup("hit");
            return artworks;
        }
        metrics::record_artist_cache_lookup("miss");

        let mut collected = Vec::new();
        for provider in &self.providers {
            collected.extend(provider.resolve_by_artist(name).await);
        }

        let artworks = Arc::new(collected);
        if artworks.is_empty() {
            info!("No artworks found for artist {:?}", name);
            metrics::record_resolution("artist", "none");
        } else {
            info!("Resolved {} artworks for artist {:?}", artworks.len(), name);
            metrics::record_resolution("artist", "providers");
            self.cache.put(name, artworks.clone());
        }
        artworks
    }

    pub fn gallery(&self) -> &CuratedGallery {
        &self.gallery
    }
}

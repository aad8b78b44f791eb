//! Test fixture creation: stub providers, artworks and curated galleries
//!
//! Tests never reach the real museum APIs. Every provider in the e2e suite
//! is a stub with scripted results and call counters, and randomness is
//! scripted so both resolution branches can be exercised deterministically.

use super::constants::*;
use async_trait::async_trait;
use pinacoteca_server::artwork::{fallback, Artwork, Era, Year};
use pinacoteca_server::gallery::CuratedGallery;
use pinacoteca_server::providers::ArtworkProvider;
use pinacoteca_server::random::testing::ScriptedRandomness;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Builds a fully described artwork for fixtures.
pub fn artwork(title: &str, artist: &str, era: Option<Era>) -> Artwork {
    Artwork {
        title: title.to_string(),
        artist: artist.to_string(),
        year: Year::Numeric(1650),
        medium: fallback::MEDIUM.to_string(),
        location: "Test Museum".to_string(),
        image_url: format!("https://example.com/{}.jpg", title.replace(' ', "-")),
        description: fallback::DESCRIPTION.to_string(),
        analysis: fallback::ANALYSIS.to_string(),
        historical_context: fallback::HISTORICAL_CONTEXT.to_string(),
        technique: fallback::TECHNIQUE.to_string(),
        provenance: fallback::PROVENANCE.to_string(),
        source: "stub".to_string(),
        era,
    }
}

/// A two-era curated gallery used by most tests.
pub fn curated_gallery() -> CuratedGallery {
    CuratedGallery::from_artworks(vec![
        artwork(
            CURATED_RENAISSANCE_TITLE,
            "Sandro Botticelli",
            Some(Era::Renaissance),
        ),
        artwork(
            CURATED_BAROQUE_TITLE,
            CURATED_BAROQUE_ARTIST,
            Some(Era::Baroque),
        ),
    ])
}

/// Scripted randomness that always skips the curated short-circuit.
pub fn never_curated() -> Arc<ScriptedRandomness> {
    Arc::new(ScriptedRandomness::new(vec![0.9], vec![0]))
}

/// Scripted randomness that always takes the curated short-circuit.
pub fn always_curated() -> Arc<ScriptedRandomness> {
    Arc::new(ScriptedRandomness::new(vec![0.1], vec![0]))
}

/// Stub provider with fixed results and call counters.
pub struct StubProvider {
    name: &'static str,
    era_result: Option<Artwork>,
    artist_result: Vec<Artwork>,
    pub era_calls: AtomicUsize,
    pub artist_calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(
        name: &'static str,
        era_result: Option<Artwork>,
        artist_result: Vec<Artwork>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            era_result,
            artist_result,
            era_calls: AtomicUsize::new(0),
            artist_calls: AtomicUsize::new(0),
        })
    }

    /// A provider that never resolves anything.
    pub fn empty(name: &'static str) -> Arc<Self> {
        Self::new(name, None, vec![])
    }

    pub fn era_call_count(&self) -> usize {
        self.era_calls.load(Ordering::SeqCst)
    }

    pub fn artist_call_count(&self) -> usize {
        self.artist_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtworkProvider for StubProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn resolve_by_era(&self, _era: Era) -> Option<Artwork> {
        self.era_calls.fetch_add(1, Ordering::SeqCst);
        self.era_result.clone()
    }

    async fn resolve_by_artist(&self, _name: &str) -> Vec<Artwork> {
        self.artist_calls.fetch_add(1, Ordering::SeqCst);
        self.artist_result.clone()
    }
}

//! Per-artist memoization of resolved artwork sequences.
//!
//! Keys are the artist name exactly as typed. Entries never expire or get
//! evicted; the dataset is read-mostly and small relative to a session.
//! Empty results are never stored, so a failed lookup can be retried.

use crate::artwork::Artwork;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct ArtistCache {
    entries: Mutex<HashMap<String, Arc<Vec<Artwork>>>>,
}

impl ArtistCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Vec<Artwork>>> {
        self.entries.lock().unwrap().get(name).cloned()
    }

    /// Stores a resolved sequence. Callers must only pass non-empty
    /// sequences; an empty one is a valid outcome but not a cacheable one.
    pub fn put(&self, name: &str, artworks: Arc<Vec<Artwork>>) {
        debug_assert!(!artworks.is_empty());
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), artworks);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

//! Navigation over a resolved artwork sequence.
//!
//! The cursor clamps at the bounds instead of wrapping: `previous` at the
//! first artwork and `next` at the last are no-ops, matching disabled
//! navigation buttons in a UI.

use crate::artwork::Artwork;

#[derive(Default)]
pub struct NavigationCursor {
    artworks: Vec<Artwork>,
    index: usize,
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sequence and rewinds to the first artwork.
    pub fn reset(&mut self, artworks: Vec<Artwork>) {
        self.artworks = artworks;
        self.index = 0;
    }

    pub fn previous(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.artworks.len() {
            self.index += 1;
        }
    }

    pub fn current(&self) -> Option<&Artwork> {
        self.artworks.get(self.index)
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.artworks.len()
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// 1-based position for display, e.g. "3 / 12".
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.artworks.len())
    }
}

//! The curated local gallery: a small, hand-picked set of fully-described
//! artworks embedded in the binary, used as a probabilistic short-circuit and
//! as the last-resort fallback when every provider comes up empty.

use crate::artwork::{Artwork, Era};
use anyhow::{Context, Result};

const CURATED_GALLERY_JSON: &str = include_str!("../../assets/curated_gallery.json");

/// Famous artists offered in the artist dropdown. The artist lookup itself
/// accepts any free-text name; this list only seeds the UI.
pub const FAMOUS_ARTISTS: &[&str] = &[
    // Renaissance & early masters
    "Leonardo da Vinci",
    "Michelangelo",
    "Raphael",
    "Sandro Botticelli",
    "Titian",
    "Jan van Eyck",
    "Hieronymus Bosch",
    "Albrecht Dürer",
    "Pieter Bruegel the Elder",
    // Baroque & classical
    "Caravaggio",
    "Rembrandt",
    "Peter Paul Rubens",
    "Diego Velázquez",
    "Johannes Vermeer",
    "Frans Hals",
    "Anthony van Dyck",
    "Artemisia Gentileschi",
    // 18th-19th century
    "Francisco Goya",
    "J.M.W. Turner",
    "John Constable",
    "Caspar David Friedrich",
    "Eugène Delacroix",
    "Gustave Courbet",
    // Impressionism & Post-Impressionism
    "Claude Monet",
    "Pierre-Auguste Renoir",
    "Edgar Degas",
    "Camille Pissarro",
    "Berthe Morisot",
    "Mary Cassatt",
    "Édouard Manet",
    "Paul Cézanne",
    "Vincent van Gogh",
    "Paul Gauguin",
    "Georges Seurat",
    // Early 20th century & modernism
    "Pablo Picasso",
    "Henri Matisse",
    "Wassily Kandinsky",
    "Piet Mondrian",
    "Marc Chagall",
    "Gustav Klimt",
    "Edvard Munch",
    "Paul Klee",
    "Joan Miró",
    // Surrealism & expressionism
    "Salvador Dalí",
    "René Magritte",
    "Max Ernst",
    "Frida Kahlo",
    "Francis Bacon",
    // Abstract & contemporary
    "Jackson Pollock",
    "Mark Rothko",
    "Willem de Kooning",
    "Andy Warhol",
    "Roy Lichtenstein",
    "David Hockney",
    "Gerhard Richter",
    // Asian masters
    "Katsushika Hokusai",
    "Utagawa Hiroshige",
];

pub struct CuratedGallery {
    artworks: Vec<Artwork>,
}

impl CuratedGallery {
    /// Loads the gallery embedded in the binary.
    pub fn load() -> Result<Self> {
        let artworks: Vec<Artwork> = serde_json::from_str(CURATED_GALLERY_JSON)
            .context("Failed to parse embedded curated gallery")?;
        Ok(Self::from_artworks(artworks))
    }

    pub fn from_artworks(artworks: Vec<Artwork>) -> Self {
        Self { artworks }
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Artworks matching `era`. `All` matches every entry.
    pub fn for_era(&self, era: Era) -> Vec<&Artwork> {
        self.artworks
            .iter()
            .filter(|artwork| era.matches(artwork.era))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_gallery_loads() {
        let gallery = CuratedGallery::load().unwrap();
        assert!(!gallery.is_empty());
    }

    #[test]
    fn every_curated_entry_is_displayable_and_tagged() {
        let gallery = CuratedGallery::load().unwrap();
        for artwork in gallery.for_era(Era::All) {
            assert!(artwork.is_displayable(), "{} has no image", artwork.title);
            assert!(artwork.era.is_some(), "{} has no era tag", artwork.title);
        }
    }

    #[test]
    fn for_era_filters_by_tag() {
        let gallery = CuratedGallery::load().unwrap();
        for artwork in gallery.for_era(Era::Baroque) {
            assert_eq!(artwork.era, Some(Era::Baroque));
        }
    }

    #[test]
    fn all_era_matches_everything() {
        let gallery = CuratedGallery::load().unwrap();
        assert_eq!(gallery.for_era(Era::All).len(), gallery.len());
    }

    #[test]
    fn famous_artists_list_is_populated() {
        assert!(FAMOUS_ARTISTS.len() >= 50);
        assert!(FAMOUS_ARTISTS.contains(&"Claude Monet"));
    }
}

//! The common artwork record that every data source normalizes into.
//!
//! Optional descriptive fields never reach consumers as nulls: each one is
//! substituted with a fixed fallback literal at the adapter boundary, so the
//! presentation layer performs no null-handling of its own.

mod era;

pub use era::{Era, YearRange};

use serde::{Deserialize, Serialize};

pub mod fallback {
    //! Fallback literals substituted when an upstream field is absent.

    pub const TITLE: &str = "Untitled";
    pub const ARTIST: &str = "Unknown artist";
    pub const MEDIUM: &str = "Painting";
    pub const DESCRIPTION: &str =
        "A work of art whose full description has not been recorded.";
    pub const ANALYSIS: &str =
        "A close reading of this work reveals its artistic and historical value.";
    pub const HISTORICAL_CONTEXT: &str =
        "This work was created in a period of significant cultural change.";
    pub const TECHNIQUE: &str = "Traditional painting technique";
    pub const PROVENANCE: &str =
        "Information about the origin and collecting history of this work.";
}

/// A dating that upstream sources report either as a plain number or as a
/// free-text label ("ca. 1660", "15th century").
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Year {
    Numeric(i32),
    Period(String),
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Year::Numeric(year) => write!(f, "{}", year),
            Year::Period(label) => write!(f, "{}", label),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Artwork {
    pub title: String,
    pub artist: String,
    pub year: Year,
    pub medium: String,
    pub location: String,
    pub image_url: String,
    pub description: String,
    pub analysis: String,
    pub historical_context: String,
    pub technique: String,
    pub provenance: String,
    /// Identifies the provider this record came from.
    pub source: String,
    /// Absent when the record was resolved by artist query.
    pub era: Option<Era>,
}

impl Artwork {
    /// An artwork is displayable iff it carries a usable image URL.
    /// Every other field degrades to a fallback literal instead.
    pub fn is_displayable(&self) -> bool {
        !self.image_url.is_empty()
    }
}

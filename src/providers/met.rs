//! Metropolitan Museum of Art API adapter.
//!
//! Secondary provider. The Met exposes a two-step API: a search endpoint
//! returning object identifiers, then a per-identifier detail fetch. Detail
//! fetches are issued sequentially and bounded to keep worst-case latency
//! and request volume acceptable.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use super::{compose, text, ArtworkProvider};
use crate::artwork::{fallback, Artwork, Era, Year};
use crate::random::Randomness;
use crate::server::metrics;
use async_trait::async_trait;

pub const DEFAULT_SEARCH_URL: &str =
    "https://collectionapi.metmuseum.org/public/collection/v1/search";
pub const DEFAULT_OBJECT_URL: &str =
    "https://collectionapi.metmuseum.org/public/collection/v1/objects";

/// Upper bound on per-identifier detail fetches per artist query.
const MAX_ARTIST_DETAIL_FETCHES: usize = 20;

/// The era flow picks one object at random among the first candidates.
const ERA_CANDIDATE_WINDOW: usize = 10;

pub struct MetClient {
    client: reqwest::Client,
    search_url: String,
    object_url: String,
    random: Arc<dyn Randomness>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "objectIDs")]
    object_ids: Option<Vec<u64>>,
}

/// The Met returns empty strings rather than nulls for missing fields.
#[derive(Deserialize, Default)]
#[serde(default)]
struct MetObject {
    title: String,
    #[serde(rename = "artistDisplayName")]
    artist_display_name: String,
    #[serde(rename = "objectDate")]
    object_date: String,
    #[serde(rename = "objectName")]
    object_name: String,
    medium: String,
    #[serde(rename = "primaryImage")]
    primary_image: String,
    culture: String,
    period: String,
    classification: String,
    #[serde(rename = "creditLine")]
    credit_line: String,
    #[serde(rename = "accessionNumber")]
    accession_number: String,
}

impl MetClient {
    pub fn new(
        search_url: &str,
        object_url: &str,
        timeout_sec: u64,
        random: Arc<dyn Randomness>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create Met HTTP client")?;

        Ok(Self {
            client,
            search_url: search_url.trim_end_matches('/').to_string(),
            object_url: object_url.trim_end_matches('/').to_string(),
            random,
        })
    }

    async fn search_by_era(&self, era: Era) -> Result<Option<Artwork>> {
        let years = era.years();
        let span = (years.end - years.start) as usize + 1;
        let random_year = years.start + self.random.pick(span) as u16;

        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("dateBegin", random_year.to_string().as_str()),
                ("dateEnd", random_year.to_string().as_str()),
                ("hasImages", "true"),
                ("q", "painting"),
            ])
            .send()
            .await
            .context("Failed to reach the Met collection API")?;

        if !response.status().is_success() {
            anyhow::bail!("Met search failed with status {}", response.status());
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to parse Met search response")?;

        let ids = body.object_ids.unwrap_or_default();
        if ids.is_empty() {
            return Ok(None);
        }

        let index = self.random.pick(ids.len().min(ERA_CANDIDATE_WINDOW));
        let object = self.fetch_object(ids[index]).await?;

        Ok(era_artwork(object, era, random_year))
    }

    async fn search_by_artist(&self, name: &str) -> Result<Vec<Artwork>> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("artistOrCulture", "true"),
                ("hasImages", "true"),
                ("q", name),
            ])
            .send()
            .await
            .context("Failed to reach the Met collection API")?;

        if !response.status().is_success() {
            anyhow::bail!("Met artist search failed with status {}", response.status());
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to parse Met search response")?;

        let ids = body.object_ids.unwrap_or_default();
        let needle = name.to_lowercase();
        let mut artworks = Vec::new();

        // Sequential on purpose: no concurrent fan-out within a resolution.
        for id in ids.into_iter().take(MAX_ARTIST_DETAIL_FETCHES) {
            let object = match self.fetch_object(id).await {
                Ok(object) => object,
                Err(err) => {
                    warn!("Met object {} fetch failed: {:#}", id, err);
                    continue;
                }
            };

            // The search is fuzzy; keep only objects whose artist field
            // actually contains the queried name (handles name variants).
            if !object.artist_display_name.to_lowercase().contains(&needle) {
                continue;
            }

            if let Some(artwork) = artist_artwork(object, name) {
                artworks.push(artwork);
            }
        }

        Ok(artworks)
    }

    async fn fetch_object(&self, id: u64) -> Result<MetObject> {
        let url = format!("{}/{}", self.object_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch Met object {}", id))?;

        if !response.status().is_success() {
            anyhow::bail!("Met object {} fetch failed with status {}", id, response.status());
        }

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse Met object {}", id))
    }
}

fn era_artwork(object: MetObject, era: Era, random_year: u16) -> Option<Artwork> {
    if object.primary_image.is_empty() {
        return None;
    }

    let title = text(&object.title, fallback::TITLE);
    let artist = text(&object.artist_display_name, fallback::ARTIST);

    let year = if object.object_date.trim().is_empty() {
        Year::Numeric(random_year as i32)
    } else {
        Year::Period(object.object_date.clone())
    };

    Some(Artwork {
        description: compose(&[
            &format!(
                "{} - {} created by {}.",
                title,
                text(&object.object_name, "work of art"),
                text(&object.artist_display_name, "an unknown artist"),
            ),
            &object.culture,
            &object.period,
        ]),
        analysis: format!(
            "This work represents {} and demonstrates the mastery of {} in the use of {}.",
            text(&object.classification, "painting"),
            artist,
            text(&object.medium, "traditional materials"),
        ),
        historical_context: compose(&[
            &format!(
                "Created in {}.",
                text(&object.object_date, &random_year.to_string())
            ),
            &object.culture,
            &format!("Period: {}.", text(&object.period, "classical art")),
        ]),
        technique: text(&object.medium, "Oil on canvas"),
        provenance: compose(&[
            &format!(
                "{}.",
                text(&object.credit_line, "Metropolitan Museum of Art")
            ),
            &if object.accession_number.is_empty() {
                String::new()
            } else {
                format!("Accession number: {}.", object.accession_number)
            },
        ]),
        title,
        artist,
        year,
        medium: text(&object.medium, fallback::MEDIUM),
        location: "Metropolitan Museum of Art, New York".to_string(),
        image_url: object.primary_image,
        source: "Met Museum".to_string(),
        era: Some(era),
    })
}

fn artist_artwork(object: MetObject, artist: &str) -> Option<Artwork> {
    if object.primary_image.is_empty() {
        return None;
    }

    let title = text(&object.title, fallback::TITLE);

    Some(Artwork {
        description: compose(&[
            &format!("{} - a work by {}.", title, artist),
            &object.culture,
            &object.period,
        ]),
        analysis: format!(
            "This work represents {} and demonstrates the mastery of {}.",
            text(&object.classification, "painting"),
            artist,
        ),
        historical_context: compose(&[
            &format!(
                "Created {}.",
                text(&object.object_date, "in the classical period")
            ),
            &object.culture,
        ]),
        technique: text(&object.medium, "Oil on canvas"),
        provenance: text(&object.credit_line, "Metropolitan Museum of Art"),
        title,
        artist: artist.to_string(),
        year: if object.object_date.trim().is_empty() {
            Year::Period("Unknown".to_string())
        } else {
            Year::Period(object.object_date.clone())
        },
        medium: text(&object.medium, fallback::MEDIUM),
        location: "Metropolitan Museum of Art".to_string(),
        image_url: object.primary_image,
        source: "Met Museum".to_string(),
        era: None,
    })
}

#[async_trait]
impl ArtworkProvider for MetClient {
    fn name(&self) -> &'static str {
        "met"
    }

    async fn resolve_by_era(&self, era: Era) -> Option<Artwork> {
        match self.search_by_era(era).await {
            Ok(found) => {
                metrics::record_provider_request(
                    self.name(),
                    "era",
                    if found.is_some() { "hit" } else { "empty" },
                );
                found
            }
            Err(err) => {
                warn!("Met era search failed: {:#}", err);
                metrics::record_provider_request(self.name(), "era", "error");
                None
            }
        }
    }

    async fn resolve_by_artist(&self, name: &str) -> Vec<Artwork> {
        match self.search_by_artist(name).await {
            Ok(found) => {
                metrics::record_provider_request(
                    self.name(),
                    "artist",
                    if found.is_empty() { "empty" } else { "hit" },
                );
                found
            }
            Err(err) => {
                warn!("Met artist search failed: {:#}", err);
                metrics::record_provider_request(self.name(), "artist", "error");
                Vec::new()
            }
        }
    }
}

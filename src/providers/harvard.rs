//! Harvard Art Museums API adapter.
//!
//! Primary provider in the resolution chain: its records carry the richest
//! descriptive metadata. Era queries use the century-bucketed object search
//! with random sort; artist queries use the person-filtered search.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use super::{compose, or_literal, ArtworkProvider};
use crate::artwork::{fallback, Artwork, Era, Year};
use crate::server::metrics;
use async_trait::async_trait;

pub const DEFAULT_BASE_URL: &str = "https://api.harvardartmuseums.org";

const ERA_PAGE_SIZE: usize = 20;
const ARTIST_PAGE_SIZE: usize = 50;

pub struct HarvardClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ObjectSearchResponse {
    #[serde(default)]
    records: Vec<HarvardRecord>,
}

#[derive(Deserialize, Default)]
struct HarvardRecord {
    title: Option<String>,
    people: Option<Vec<HarvardPerson>>,
    dated: Option<String>,
    medium: Option<String>,
    technique: Option<String>,
    division: Option<String>,
    primaryimageurl: Option<String>,
    description: Option<String>,
    commentary: Option<String>,
    century: Option<String>,
    culture: Option<String>,
    period: Option<String>,
    creditline: Option<String>,
}

#[derive(Deserialize)]
struct HarvardPerson {
    name: Option<String>,
}

/// "15" -> "15th century", with the usual ordinal suffixes.
fn century_label(century: u16) -> String {
    let suffix = match (century % 10, century % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{} century", century, suffix)
}

impl HarvardClient {
    pub fn new(api_key: &str, base_url: &str, timeout_sec: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .context("Failed to create Harvard HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    async fn search_by_era(&self, era: Era) -> Result<Option<Artwork>> {
        let century = era.years().start / 100 + 1;
        let url = format!("{}/object", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("century", &century.to_string()),
                ("hasimage", "1"),
                ("size", &ERA_PAGE_SIZE.to_string()),
                ("sort", "random"),
            ])
            .send()
            .await
            .context("Failed to reach Harvard Art Museums")?;

        if !response.status().is_success() {
            anyhow::bail!("Harvard object search failed with status {}", response.status());
        }

        let body: ObjectSearchResponse = response
            .json()
            .await
            .context("Failed to parse Harvard search response")?;

        Ok(body
            .records
            .into_iter()
            .next()
            .and_then(|record| era_artwork(record, era, century)))
    }

    async fn search_by_artist(&self, name: &str) -> Result<Vec<Artwork>> {
        let url = format!("{}/object", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("person", name),
                ("hasimage", "1"),
                ("size", &ARTIST_PAGE_SIZE.to_string()),
                ("sort", "rank"),
            ])
            .send()
            .await
            .context("Failed to reach Harvard Art Museums")?;

        if !response.status().is_success() {
            anyhow::bail!("Harvard artist search failed with status {}", response.status());
        }

        let body: ObjectSearchResponse = response
            .json()
            .await
            .context("Failed to parse Harvard search response")?;

        Ok(body
            .records
            .into_iter()
            .filter_map(|record| artist_artwork(record, name))
            .collect())
    }
}

/// Maps a record from the era flow. Rejects records without an image URL.
fn era_artwork(record: HarvardRecord, era: Era, century: u16) -> Option<Artwork> {
    let image_url = record.primaryimageurl.filter(|url| !url.is_empty())?;
    let label = century_label(century);

    let artist = record
        .people
        .as_ref()
        .and_then(|people| people.first())
        .and_then(|person| person.name.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| fallback::ARTIST.to_string());

    let year = match record.dated.as_deref() {
        Some(dated) if !dated.is_empty() => Year::Period(dated.to_string()),
        _ => Year::Period(label.clone()),
    };

    let century_text = or_literal(record.century.as_deref(), &label);

    Some(Artwork {
        title: or_literal(record.title.as_deref(), fallback::TITLE),
        artist,
        year,
        medium: or_literal(
            record.medium.as_deref().or(record.technique.as_deref()),
            fallback::MEDIUM,
        ),
        location: format!(
            "Harvard Art Museums, {}",
            record.division.as_deref().unwrap_or("Cambridge")
        ),
        image_url,
        description: or_literal(
            record.description.as_deref().or(record.commentary.as_deref()),
            "A work from the Harvard Art Museums collection.",
        ),
        analysis: or_literal(record.commentary.as_deref(), fallback::ANALYSIS),
        historical_context: compose(&[
            &format!("Created in the {}.", century_text),
            record.culture.as_deref().unwrap_or(""),
            record.period.as_deref().unwrap_or(""),
        ]),
        technique: or_literal(
            record.technique.as_deref().or(record.medium.as_deref()),
            fallback::TECHNIQUE,
        ),
        provenance: compose(&[
            &format!(
                "Collection: {}.",
                record.division.as_deref().unwrap_or("Harvard Art Museums")
            ),
            record.creditline.as_deref().unwrap_or(""),
        ]),
        source: "Harvard Art Museums".to_string(),
        era: Some(era),
    })
}

/// Maps a record from the artist flow. The artist field carries the queried
/// name as typed, and no era tag is attached.
fn artist_artwork(record: HarvardRecord, artist: &str) -> Option<Artwork> {
    let image_url = record.primaryimageurl.filter(|url| !url.is_empty())?;

    Some(Artwork {
        title: or_literal(record.title.as_deref(), fallback::TITLE),
        artist: artist.to_string(),
        year: match record.dated.as_deref() {
            Some(dated) if !dated.is_empty() => Year::Period(dated.to_string()),
            _ => Year::Period("Unknown".to_string()),
        },
        medium: or_literal(
            record.medium.as_deref().or(record.technique.as_deref()),
            fallback::MEDIUM,
        ),
        location: "Harvard Art Museums".to_string(),
        description: or_literal(
            record.description.as_deref().or(record.commentary.as_deref()),
            &format!("A work by {} from the Harvard Art Museums collection.", artist),
        ),
        analysis: or_literal(
            record.commentary.as_deref(),
            &format!("This work demonstrates the characteristic style of {}.", artist),
        ),
        historical_context: compose(&[
            &format!("Created by {}.", artist),
            record.culture.as_deref().unwrap_or(""),
            record.period.as_deref().unwrap_or(""),
        ]),
        technique: or_literal(
            record.technique.as_deref().or(record.medium.as_deref()),
            fallback::TECHNIQUE,
        ),
        provenance: compose(&[
            "Harvard Art Museums.",
            record.creditline.as_deref().unwrap_or(""),
        ]),
        image_url,
        source: "Harvard Art Museums".to_string(),
        era: None,
    })
}

#[async_trait]
impl ArtworkProvider for HarvardClient {
    fn name(&self) -> &'static str {
        "harvard"
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
                warn!("Harvard era search failed: {:#}", err);
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
                warn!("Harvard artist search failed: {:#}", err);
                metrics::record_provider_request(self.name(), "artist", "error");
                Vec::new()
            }
        }
    }
}

//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET / - server stats
    pub async fn get_home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/artwork - resolve one artwork, optionally scoped to an era
    pub async fn get_artwork(&self, era: Option<&str>) -> Response {
        let mut request = self.client.get(format!("{}/v1/artwork", self.base_url));
        if let Some(era) = era {
            request = request.query(&[("era", era)]);
        }
        request.send().await.expect("Request failed")
    }

    /// GET /v1/artist/{name}/artworks - resolve every artwork for an artist
    pub async fn get_artist_artworks(&self, name: &str) -> Response {
        self.client
            .get(format!("{}/v1/artist/{}/artworks", self.base_url, name))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/artists - the famous artists catalog
    pub async fn get_artists(&self) -> Response {
        self.client
            .get(format!("{}/v1/artists", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /v1/eras - eras with their year ranges
    pub async fn get_eras(&self) -> Response {
        self.client
            .get(format!("{}/v1/eras", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }

    /// GET /metrics - Prometheus exposition
    pub async fn get_metrics(&self) -> Response {
        self.client
            .get(format!("{}/metrics", self.base_url))
            .send()
            .await
            .expect("Request failed")
    }
}

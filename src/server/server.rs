use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::artwork::Era;
use crate::gallery::FAMOUS_ARTISTS;
use crate::resolver::Orchestrator;
use tower_http::services::ServeDir;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{log_requests, metrics, state::ServerState, RequestsLoggingLevel, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[derive(Deserialize, Debug)]
struct EraQuery {
    pub era: Option<String>,
}

/// User-facing notice for terminal empty states.
#[derive(Serialize)]
struct Notice {
    notice: String,
}

#[derive(Serialize)]
struct ArtistArtworksResponse {
    artist: String,
    total: usize,
    artworks: Vec<crate::artwork::Artwork>,
}

#[derive(Serialize)]
struct EraInfo {
    era: Era,
    start: u16,
    end: u16,
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

async fn get_era_artwork(
    State(state): State<ServerState>,
    Query(query): Query<EraQuery>,
) -> Response {
    let era = query
        .era
        .as_deref()
        .map(Era::from_query)
        .unwrap_or(Era::All);

    if let Some(artwork) = state.orchestrator.resolve_for_era(era).await {
        return Json(artwork).into_response();
    }

    // Self-recovering request: retry once with the broadest scope. A second
    // empty outcome is terminal and surfaced to the user.
    if era != Era::All {
        debug!("Era {} yielded nothing, retrying with the full span", era);
        if let Some(artwork) = state.orchestrator.resolve_for_era(Era::All).await {
            return Json(artwork).into_response();
        }
    }

    (
        StatusCode::NOT_FOUND,
        Json(Notice {
            notice: "No artwork could be resolved this time. Please try again.".to_string(),
        }),
    )
        .into_response()
}

async fn get_artist_artworks(
    State(state): State<ServerState>,
    Path(name): Path<String>,
) -> Response {
    let artworks = state.orchestrator.resolve_for_artist(&name).await;

    if artworks.is_empty() {
        return (
            StatusCode::NOT_FOUND,
            Json(Notice {
                notice: format!("No artworks by {} were found. Try another artist.", name),
            }),
        )
            .into_response();
    }

    Json(ArtistArtworksResponse {
        artist: name,
        total: artworks.len(),
        artworks: (*artworks).clone(),
    })
    .into_response()
}

async fn get_artists() -> impl IntoResponse {
    Json(FAMOUS_ARTISTS)
}

async fn get_eras() -> impl IntoResponse {
    let eras: Vec<EraInfo> = Era::CONCRETE
        .iter()
        .map(|era| {
            let years = era.years();
            EraInfo {
                era: *era,
                start: years.start,
                end: years.end,
            }
        })
        .collect();
    Json(eras)
}

pub fn make_app(config: ServerConfig, orchestrator: Arc<Orchestrator>) -> Router {
    let state = ServerState::new(config.clone(), orchestrator);

    let mut app = Router::new()
        .route("/", get(home))
        .route("/v1/artwork", get(get_era_artwork))
        .route("/v1/artist/{name}/artworks", get(get_artist_artworks))
        .route("/v1/artists", get(get_artists))
        .route("/v1/eras", get(get_eras))
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(state.clone());

    if let Some(frontend_dir_path) = &config.frontend_dir_path {
        app = app.fallback_service(ServeDir::new(frontend_dir_path));
    }

    app.layer(middleware::from_fn_with_state(state, log_requests))
}

pub async fn run_server(
    orchestrator: Arc<Orchestrator>,
    requests_logging_level: RequestsLoggingLevel,
    port: u16,
    frontend_dir_path: Option<String>,
) -> Result<()> {
    let config = ServerConfig {
        port,
        requests_logging_level,
        frontend_dir_path,
    };
    let app = make_app(config, orchestrator);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;

    Ok(axum::serve(listener, app).await?)
}

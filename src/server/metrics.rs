use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all Pinacoteca metrics
const PREFIX: &str = "pinacoteca";

lazy_static! {
    // Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Provider Metrics
    pub static ref PROVIDER_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(
            format!("{PREFIX}_provider_requests_total"),
            "Provider queries by provider, operation and outcome"
        ),
        &["provider", "operation", "outcome"]
    ).expect("Failed to create provider_requests_total metric");

    // Resolution Metrics
    pub static ref RESOLUTIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(
            format!("{PREFIX}_resolutions_total"),
            "Completed resolutions by flow and winning source"
        ),
        &["flow", "source"]
    ).expect("Failed to create resolutions_total metric");

    // Cache Metrics
    pub static ref ARTIST_CACHE_LOOKUPS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(
            format!("{PREFIX}_artist_cache_lookups_total"),
            "Artist cache lookups by result"
        ),
        &["result"]
    ).expect("Failed to create artist_cache_lookups_total metric");

    // Gallery Metrics
    pub static ref CURATED_ARTWORKS: Gauge = Gauge::new(
        format!("{PREFIX}_curated_artworks"),
        "Number of artworks in the embedded curated gallery"
    ).expect("Failed to create curated_artworks metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(PROVIDER_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(RESOLUTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(ARTIST_CACHE_LOOKUPS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(CURATED_ARTWORKS.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Initialize gallery-specific metrics
pub fn init_gallery_metrics(num_curated_artworks: usize) {
    CURATED_ARTWORKS.set(num_curated_artworks as f64);

    tracing::info!(
        "Gallery metrics initialized: {} curated artworks",
        num_curated_artworks
    );
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, path, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, path])
        .observe(duration.as_secs_f64());
}

/// Record one provider query
pub fn record_provider_request(provider: &str, operation: &str, outcome: &str) {
    PROVIDER_REQUESTS_TOTAL
        .with_label_values(&[provider, operation, outcome])
        .inc();
}

/// Record a completed resolution and the source that won it
pub fn record_resolution(flow: &str, source: &str) {
    RESOLUTIONS_TOTAL.with_label_values(&[flow, source]).inc();
}

/// Record an artist cache lookup ("hit" or "miss")
pub fn record_artist_cache_lookup(result: &str) {
    ARTIST_CACHE_LOOKUPS_TOTAL
        .with_label_values(&[result])
        .inc();
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}

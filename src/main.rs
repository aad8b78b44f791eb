use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pinacoteca_server::config::{AppConfig, CliConfig, FileConfig};
use pinacoteca_server::gallery::CuratedGallery;
use pinacoteca_server::providers::{ArtworkProvider, HarvardClient, MetClient};
use pinacoteca_server::random::ThreadRandomness;
use pinacoteca_server::resolver::Orchestrator;
use pinacoteca_server::server::{self, run_server, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to an optional TOML config file. Values in the file override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// API key for the Harvard Art Museums provider. Without a key the
    /// provider is disabled and resolution relies on the remaining sources.
    #[clap(long)]
    pub harvard_api_key: Option<String>,

    /// Timeout in seconds for provider requests.
    #[clap(long, default_value_t = 30)]
    pub request_timeout_sec: u64,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file at {:?}...", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };

    let cli_config = CliConfig {
        port: cli_args.port,
        logging_level: cli_args.logging_level,
        frontend_dir_path: cli_args.frontend_dir_path,
        request_timeout_sec: cli_args.request_timeout_sec,
        harvard_api_key: cli_args.harvard_api_key,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let gallery = CuratedGallery::load()?;

    // Initialize metrics system
    info!("Initializing metrics...");
    server::metrics::init_metrics();
    server::metrics::init_gallery_metrics(gallery.len());

    let random = Arc::new(ThreadRandomness);

    let mut providers: Vec<Arc<dyn ArtworkProvider>> = Vec::new();
    match (config.harvard.enabled, config.harvard.api_key.clone()) {
        (true, Some(api_key)) => {
            info!("Harvard Art Museums provider enabled");
            providers.push(Arc::new(HarvardClient::new(
                &api_key,
                &config.harvard.base_url,
                config.request_timeout_sec,
            )?));
        }
        _ => info!("Harvard Art Museums provider disabled (no API key)"),
    }
    if config.met.enabled {
        info!("Met Museum provider enabled");
        providers.push(Arc::new(MetClient::new(
            &config.met.search_url,
            &config.met.object_url,
            config.request_timeout_sec,
            random.clone(),
        )?));
    }

    let orchestrator = Arc::new(Orchestrator::new(providers, gallery, random));

    info!("Ready to serve at port {}!", config.port);
    run_server(
        orchestrator,
        config.logging_level,
        config.port,
        config.frontend_dir_path,
    )
    .await
}

use super::ServerConfig;
use crate::resolver::Orchestrator;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<ServerConfig>,
    pub orchestrator: Arc<Orchestrator>,
    pub start_time: Instant,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, orchestrator: Arc<Orchestrator>) -> Self {
        Self {
            config: Arc::new(config),
            orchestrator,
            start_time: Instant::now(),
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

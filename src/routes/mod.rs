// Route exports
pub mod auth;
pub mod discovery;
pub mod profile;
pub mod swipes;
pub mod system;

use actix_web::web;
use std::sync::Arc;

use crate::config::AuthSettings;
use crate::core::{DiscoveryFilter, MatchEngine};
use crate::services::PostgresClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
    pub engine: MatchEngine,
    pub discovery: DiscoveryFilter,
    pub auth: AuthSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(system::configure)
        .configure(auth::configure)
        .configure(profile::configure)
        .configure(discovery::configure)
        .configure(swipes::configure);
}

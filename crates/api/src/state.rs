use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the engine itself is stateless, so this only carries
/// configuration.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

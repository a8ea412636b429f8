//! REST API over the simulator and the action selector.
//!
//! Provides three GET endpoints:
//! - `/scenarios`: the built-in day scenarios
//! - `/simulation`: one simulated day with optional rate overrides
//! - `/actions`: contextual action recommendations

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::config::{ScenarioConfig, SelectorSettings};
use crate::sim::{Engine, SimulationConfig};

pub use types::{ActionView, ActionsResponse, ErrorResponse, ScenarioInfo};

/// Immutable application state shared across all request handlers.
///
/// Built once from the run configuration and wrapped in `Arc`; no locks are
/// needed since every request only reads it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Engine with the configured district and shift strategy.
    pub engine: Engine,
    /// Scenario and rates used when a query omits them.
    pub defaults: SimulationConfig,
    /// Hour, date and count used when an actions query omits them.
    pub selector: SelectorSettings,
}

impl AppState {
    /// Captures the parts of `cfg` the handlers need.
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        Self {
            engine: Engine::new(cfg.district.clone(), cfg.simulation.strategy),
            defaults: cfg.simulation.to_config(),
            selector: cfg.selector,
        }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/scenarios", get(handlers::get_scenarios))
        .route("/simulation", get(handlers::get_simulation))
        .route("/actions", get(handlers::get_actions))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app).await
}

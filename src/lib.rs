//! District water demand-response simulator with contextual conservation actions.

/// Action catalog, contextual selection, and time labels.
pub mod actions;
#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
pub mod savings;
/// Demand, reservoir, and stress simulation.
pub mod sim;

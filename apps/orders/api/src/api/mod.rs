//! API routes module
//!
//! This module defines all HTTP API routes for the Orders API.

pub mod orders;

use axum::Router;
use axum_helpers::server::health_router;
use domain_orders::UpstreamConfigError;

use crate::config::Config;

/// Create all API routes
/// Note: These are mounted at the root by axum_helpers::create_router
pub fn routes(config: &Config) -> Result<Router, UpstreamConfigError> {
    Ok(Router::new()
        .nest("/orders", orders::router(config)?)
        .merge(health_router(config.app)))
}

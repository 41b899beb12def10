//! Orders API routes
//!
//! This module wires up the orders domain to HTTP routes.

use axum::Router;
use domain_orders::{HttpOrderClient, OrderItemsService, UpstreamConfigError, handlers};

use crate::config::Config;

/// Create orders router
pub fn router(config: &Config) -> Result<Router, UpstreamConfigError> {
    // One HTTP client shared by every request
    let client = HttpOrderClient::new(&config.upstream)?;

    let service = OrderItemsService::new(client);

    Ok(handlers::router(service))
}

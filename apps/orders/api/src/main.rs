use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        upstream = %config.upstream.base_url,
        tenant_id = %config.upstream.tenant_id,
        timeout = ?config.upstream.timeout,
        "Using upstream order-management API"
    );

    // Build router with API routes and OpenAPI docs
    let api_routes = api::routes(&config)?;
    let router = create_router::<openapi::ApiDoc>(api_routes);

    info!("Starting {} v{}", config.app.name, config.app.version);

    create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("{} shutdown complete", config.app.name);
    Ok(())
}

//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orders API",
        version = "0.1.0",
        description = "Items of an order, aggregated across its packages"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/orders", api = domain_orders::ApiDoc)
    ),
    paths(axum_helpers::server::health::health_handler),
    tags(
        (name = "Orders", description = "Order items aggregated across packages"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;

use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    UuidPath,
    errors::responses::{BadGatewayResponse, NotFoundResponse, UnprocessableUuidResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::client::OrderClient;
use crate::error::OrderResult;
use crate::models::Item;
use crate::service::OrderItemsService;

/// OpenAPI documentation for Orders API
#[derive(OpenApi)]
#[openapi(
    paths(get_order_items),
    components(
        schemas(Item),
        responses(NotFoundResponse, UnprocessableUuidResponse, BadGatewayResponse)
    ),
    tags(
        (name = "Orders", description = "Order items aggregated across packages")
    )
)]
pub struct ApiDoc;

/// Create the orders router
pub fn router<C: OrderClient + 'static>(service: OrderItemsService<C>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/{id}/items", get(get_order_items))
        .with_state(shared_service)
}

/// List every item of an order, in package order
#[utoipa::path(
    get,
    path = "/{id}/items",
    tag = "Orders",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Items of all packages of the order", body = Vec<Item>),
        (status = 404, response = NotFoundResponse),
        (status = 422, response = UnprocessableUuidResponse),
        (status = 502, response = BadGatewayResponse)
    )
)]
async fn get_order_items<C: OrderClient + 'static>(
    State(service): State<Arc<OrderItemsService<C>>>,
    UuidPath(id): UuidPath,
) -> OrderResult<Json<Vec<Item>>> {
    let items = service.get_order_items(id).await?;
    Ok(Json(items))
}

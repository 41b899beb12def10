use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Failures of an order items lookup.
///
/// Variants carry no payload; the cause is logged where it is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The order does not exist upstream
    #[error("Order not found")]
    OrderNotFound,

    /// Transport failure, non-success status, timeout or malformed response
    #[error("Service communication failed")]
    CommunicationFailed,
}

pub type OrderResult<T> = Result<T, OrderError>;

/// Problems building the upstream client at startup.
#[derive(Debug, Error)]
pub enum UpstreamConfigError {
    #[error("Invalid upstream base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Value for header '{0}' is not a valid HTTP header value")]
    InvalidHeader(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Convert OrderError to AppError for standardized error responses
impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::OrderNotFound => AppError::NotFound(err.to_string()),
            OrderError::CommunicationFailed => AppError::BadGateway(err.to_string()),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

//! # Axum Helpers
//!
//! Shared building blocks for the workspace's Axum services.
//!
//! - **[`server`]**: router assembly, `/health`, graceful shutdown
//! - **[`http`]**: response middleware (security headers)
//! - **[`errors`]**: [`AppError`] and the JSON [`ErrorResponse`] body with error codes
//! - **[`extractors`]**: [`UuidPath`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let apis = domain_router.merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(apis);
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};

pub use http::security_headers;

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::UuidPath;

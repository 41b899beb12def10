//! Orders Domain
//!
//! Aggregates the items of an order from the upstream order-management API.
//! An order is a list of packages; each package has its own items endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /{id}/items
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Concurrent package fan-out, all-or-nothing merge
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Client    │  ← Upstream HTTP calls (trait + reqwest implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Upstream records, Item
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use core_config::FromEnv;
//! use domain_orders::{HttpOrderClient, OrderItemsService, UpstreamConfig, handlers};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = UpstreamConfig::from_env()?;
//! let client = HttpOrderClient::new(&config)?;
//! let service = OrderItemsService::new(client);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use client::{HttpOrderClient, OrderClient};
pub use config::UpstreamConfig;
pub use error::{OrderError, OrderResult, UpstreamConfigError};
pub use handlers::ApiDoc;
pub use models::Item;
pub use service::OrderItemsService;

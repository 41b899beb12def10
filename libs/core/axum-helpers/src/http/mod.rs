//! HTTP middleware shared by every router built with [`crate::server::create_router`].

pub mod security;

pub use security::security_headers;

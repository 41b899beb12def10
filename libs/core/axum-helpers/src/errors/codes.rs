//! Type-safe error codes for API responses.
//!
//! Each code carries a string identifier for clients (e.g. `"NOT_FOUND"`)
//! and an integer for logs and monitoring (e.g. `1004`).
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::BadGateway;
//! assert_eq!(code.as_str(), "BAD_GATEWAY");
//! assert_eq!(code.code(), 1012);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Path parameter is not a well-formed UUID
    InvalidUuid,

    /// Requested resource was not found
    NotFound,

    /// An upstream service failed or answered with something unusable
    BadGateway,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidUuid => "INVALID_UUID",
            Self::NotFound => "NOT_FOUND",
            Self::BadGateway => "BAD_GATEWAY",
        }
    }

    /// Integer code used in structured logs (client errors live in 1000-1999).
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidUuid => 1002,
            Self::NotFound => 1004,
            Self::BadGateway => 1012,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

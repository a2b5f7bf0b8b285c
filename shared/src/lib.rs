//! Shared types for the storefront
//!
//! Entity and payload models, the unified error system and small
//! utilities used by the server and by any Rust client of the API.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};

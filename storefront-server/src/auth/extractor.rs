//! Admin Extractor
//!
//! Declare `_admin: AdminAccess` in a handler to run the configured [`AdminPolicy`]
//! before the body is read.
//!
//! [`AdminPolicy`]: super::AdminPolicy

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::core::ServerState;
use crate::security_log;
use shared::AppError;

/// Proof that the request passed the admin policy
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl FromRequestParts<ServerState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        match state.admin_policy.authorize(&parts.headers) {
            Ok(()) => Ok(AdminAccess),
            Err(e) => {
                security_log!(
                    "WARN",
                    "admin_denied",
                    code = e.code.code(),
                    method = parts.method.to_string(),
                    uri = format!("{:?}", parts.uri)
                );
                Err(e)
            }
        }
    }
}

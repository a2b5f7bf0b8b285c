//! Admin authorization policies

use http::HeaderMap;
use http::header::AUTHORIZATION;

use shared::util::constant_time_eq;
use shared::{AppError, AppResult, ErrorCode};

/// Decides whether a request may use admin endpoints
pub trait AdminPolicy: Send + Sync {
    /// Short name for logs and debug output
    fn name(&self) -> &'static str;

    fn authorize(&self, headers: &HeaderMap) -> AppResult<()>;
}

/// Allows every request
pub struct OpenAdminPolicy;

impl AdminPolicy for OpenAdminPolicy {
    fn name(&self) -> &'static str {
        "open"
    }

    fn authorize(&self, _headers: &HeaderMap) -> AppResult<()> {
        Ok(())
    }
}

/// Requires `Authorization: Bearer <token>`
pub struct BearerTokenPolicy {
    token: String,
}

impl BearerTokenPolicy {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Extract token from "Bearer <token>" header value
    fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ").map(str::trim)
    }
}

impl AdminPolicy for BearerTokenPolicy {
    fn name(&self) -> &'static str {
        "bearer"
    }

    fn authorize(&self, headers: &HeaderMap) -> AppResult<()> {
        let header = headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(AppError::not_authenticated)?;

        let token = Self::extract_from_header(header)
            .ok_or_else(|| AppError::new(ErrorCode::TokenInvalid))?;

        if constant_time_eq(token.as_bytes(), self.token.as_bytes()) {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::AdminRequired))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(value: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(v) = value {
            map.insert(AUTHORIZATION, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn test_open_allows_all() {
        assert!(OpenAdminPolicy.authorize(&headers(None)).is_ok());
    }

    #[test]
    fn test_bearer() {
        let policy = BearerTokenPolicy::new("s3cret");
        assert!(policy.authorize(&headers(Some("Bearer s3cret"))).is_ok());

        let err = policy.authorize(&headers(None)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
        assert_eq!(err.http_status(), http::StatusCode::UNAUTHORIZED);

        let err = policy.authorize(&headers(Some("Bearer nope"))).unwrap_err();
        assert_eq!(err.http_status(), http::StatusCode::FORBIDDEN);

        let err = policy.authorize(&headers(Some("Basic s3cret"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenInvalid);
    }
}

//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::ProductNotFound
            | Self::BlogPostNotFound
            | Self::MessageNotFound
            | Self::TestimonialNotFound
            | Self::SubscriberNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::OrderStatusConflict => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::AdminRequired
            | Self::DownloadTokenInvalid
            | Self::PaymentNotConfirmed => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::Unknown
            | Self::DatabaseError
            | Self::PaymentVerificationFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for invalid input and invalid state)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::SubscriberNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_forbidden_status() {
        assert_eq!(
            ErrorCode::DownloadTokenInvalid.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ErrorCode::PaymentNotConfirmed.http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ErrorCode::AdminRequired.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_invalid_state_is_bad_request() {
        assert_eq!(
            ErrorCode::ProductOutOfStock.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::AlreadySubscribed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidMessageStatus.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::OrderExpired.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::QueryTooShort.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::ValidationFailed.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_and_auth_status() {
        assert_eq!(
            ErrorCode::OrderStatusConflict.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::NotAuthenticated.http_status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::PaymentVerificationFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

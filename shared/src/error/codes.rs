//! Unified error codes for the storefront
//!
//! This module defines all error codes shared by the server and its clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Product errors
//! - 7xxx: Content errors (blog, FAQ, contact, testimonials)
//! - 8xxx: Newsletter errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Search query shorter than the minimum length
    QueryTooShort = 9,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Admin access required
    AdminRequired = 2003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order payment window has passed
    OrderExpired = 4002,
    /// Order status changed concurrently
    OrderStatusConflict = 4003,
    /// Illegal order status transition
    InvalidStatusTransition = 4004,
    /// Download token does not match the order
    DownloadTokenInvalid = 4005,
    /// Payment has not been confirmed
    PaymentNotConfirmed = 4006,
    /// Terms of sale were not accepted
    TermsNotAccepted = 4007,

    // ==================== 5xxx: Payment ====================
    /// Payment verification could not be performed
    PaymentVerificationFailed = 5001,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product is out of stock
    ProductOutOfStock = 6002,

    // ==================== 7xxx: Content ====================
    /// Blog post not found
    BlogPostNotFound = 7001,
    /// Contact message not found
    MessageNotFound = 7002,
    /// Contact message status is not one of the known values
    InvalidMessageStatus = 7003,
    /// Testimonial not found
    TestimonialNotFound = 7004,

    // ==================== 8xxx: Newsletter ====================
    /// Email is already subscribed
    AlreadySubscribed = 8001,
    /// Email is not on the subscriber list
    SubscriberNotFound = 8002,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::QueryTooShort => "Search query must be at least 2 characters",

            // Auth
            ErrorCode::NotAuthenticated => "Authentication required",
            ErrorCode::TokenInvalid => "Invalid token",

            // Permission
            ErrorCode::AdminRequired => "Admin access required",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderExpired => "Order has expired",
            ErrorCode::OrderStatusConflict => "Order status was changed by another request",
            ErrorCode::InvalidStatusTransition => "Invalid order status transition",
            ErrorCode::DownloadTokenInvalid => "Invalid download token",
            ErrorCode::PaymentNotConfirmed => "Payment not confirmed",
            ErrorCode::TermsNotAccepted => "Terms must be accepted",

            // Payment
            ErrorCode::PaymentVerificationFailed => "Payment verification failed",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductOutOfStock => "Product is out of stock",

            // Content
            ErrorCode::BlogPostNotFound => "Blog post not found",
            ErrorCode::MessageNotFound => "Message not found",
            ErrorCode::InvalidMessageStatus => "Invalid status",
            ErrorCode::TestimonialNotFound => "Testimonial not found",

            // Newsletter
            ErrorCode::AlreadySubscribed => "Email already subscribed",
            ErrorCode::SubscriberNotFound => "Email not found",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            9 => Ok(ErrorCode::QueryTooShort),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1004 => Ok(ErrorCode::TokenInvalid),

            // Permission
            2003 => Ok(ErrorCode::AdminRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderExpired),
            4003 => Ok(ErrorCode::OrderStatusConflict),
            4004 => Ok(ErrorCode::InvalidStatusTransition),
            4005 => Ok(ErrorCode::DownloadTokenInvalid),
            4006 => Ok(ErrorCode::PaymentNotConfirmed),
            4007 => Ok(ErrorCode::TermsNotAccepted),

            // Payment
            5001 => Ok(ErrorCode::PaymentVerificationFailed),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductOutOfStock),

            // Content
            7001 => Ok(ErrorCode::BlogPostNotFound),
            7002 => Ok(ErrorCode::MessageNotFound),
            7003 => Ok(ErrorCode::InvalidMessageStatus),
            7004 => Ok(ErrorCode::TestimonialNotFound),

            // Newsletter
            8001 => Ok(ErrorCode::AlreadySubscribed),
            8002 => Ok(ErrorCode::SubscriberNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AdminRequired.code(), 2003);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::PaymentNotConfirmed.code(), 4006);
        assert_eq!(ErrorCode::ProductOutOfStock.code(), 6002);
        assert_eq!(ErrorCode::InvalidMessageStatus.code(), 7003);
        assert_eq!(ErrorCode::AlreadySubscribed.code(), 8001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(3001), Err(InvalidErrorCode(3001)));
        assert_eq!(ErrorCode::try_from(65535), Err(InvalidErrorCode(65535)));
    }

    #[test]
    fn test_every_code_roundtrips_through_u16() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::QueryTooShort,
            ErrorCode::NotAuthenticated,
            ErrorCode::TokenInvalid,
            ErrorCode::OrderExpired,
            ErrorCode::OrderStatusConflict,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::DownloadTokenInvalid,
            ErrorCode::TermsNotAccepted,
            ErrorCode::PaymentVerificationFailed,
            ErrorCode::ProductNotFound,
            ErrorCode::BlogPostNotFound,
            ErrorCode::MessageNotFound,
            ErrorCode::TestimonialNotFound,
            ErrorCode::SubscriberNotFound,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(u16::from(code)), Ok(code));
        }
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::OrderNotFound).unwrap();
        assert_eq!(json, "4001");

        let code: ErrorCode = serde_json::from_str("8002").unwrap();
        assert_eq!(code, ErrorCode::SubscriberNotFound);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::OrderExpired.to_string(), "E4002");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::ProductOutOfStock.message(), "Product is out of stock");
        assert_eq!(ErrorCode::DownloadTokenInvalid.message(), "Invalid download token");
        assert_eq!(ErrorCode::AlreadySubscribed.message(), "Email already subscribed");
    }
}

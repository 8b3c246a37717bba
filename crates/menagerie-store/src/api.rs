//! # API Error Type
//!
//! Caller-facing error type shared by every transport built on the store.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Menagerie                              │
//! │                                                                         │
//! │  Transport handler                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  input.validate()? ─── ValidationError ─────────────┐                  │
//! │         │                                            │                  │
//! │         ▼                                            ▼                  │
//! │  store call ─── None / false / StockOutcome ──► StoreError ──► ApiError │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Success ──► entity (+ creation_message on add)                         │
//! │                                                                         │
//! │  { "code": "INSUFFICIENT_STOCK",                                        │
//! │    "message": "Insufficient stock for product 2: ..." }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::StoreError;
use menagerie_core::ValidationError;

/// Error returned to callers of a transport.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Animal not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Entity not found (404). Also used for invalid stock quantities.
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Stock reduction larger than the available volume (409)
    InsufficientStock,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", entity, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let code = match err {
            StoreError::NotFound { .. } | StoreError::InvalidQuantity { .. } => ErrorCode::NotFound,
            StoreError::InsufficientStock { .. } => ErrorCode::InsufficientStock,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Confirmation text attached to a successful creation, e.g. `"User created"`.
pub fn creation_message(entity: &str) -> String {
    format!("{} created", entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use menagerie_core::{Entity, Order, ProductCreate, User};

    #[test]
    fn test_error_code_serialization() {
        let err = ApiError::not_found("Animal", 42);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Animal not found: 42");

        let json = serde_json::to_value(ErrorCode::InsufficientStock).unwrap();
        assert_eq!(json, "INSUFFICIENT_STOCK");
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::not_found(Order::KIND, 999).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Order not found: 999");

        // invalid quantity is reported as not found
        let err: ApiError = StoreError::InvalidQuantity { count: 0 }.into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: ApiError = StoreError::InsufficientStock {
            id: 2,
            available: 0,
            requested: 1,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_validation_error_mapping() {
        let invalid = ProductCreate {
            name: "  ".to_string(),
            description: String::new(),
            price: 1.0,
            discount: None,
        };
        let err: ApiError = invalid.validate().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.to_string().starts_with("[ValidationError]"));
    }

    #[test]
    fn test_handler_flow() {
        fn cancel_order(store: &Store, id: i64) -> Result<Order, ApiError> {
            store
                .orders()
                .cancel(id)
                .ok_or_else(|| StoreError::not_found(Order::KIND, id).into())
        }

        fn sell(store: &Store, id: i64, count: i64) -> Result<i64, ApiError> {
            let product = store.products().reduce_volume(id, count).into_result(id, count)?;
            Ok(product.volume)
        }

        let store = Store::seeded();
        assert!(cancel_order(&store, 1).is_ok());
        assert_eq!(cancel_order(&store, 999).unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(sell(&store, 2, 2), Ok(3));
        assert_eq!(
            sell(&store, 2, 4).unwrap_err().code,
            ErrorCode::InsufficientStock
        );
    }

    #[test]
    fn test_creation_message() {
        assert_eq!(creation_message(User::KIND), "User created");
        assert_eq!(creation_message("Product"), "Product created");
    }
}

//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Outcomes As Data
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Outcomes                                       │
//! │                                                                         │
//! │  Repository call                                                        │
//! │       │                                                                 │
//! │       ├── get_by_id / update ──► Option<T>      (None = not found)     │
//! │       ├── delete / cancel    ──► bool / Option  (false = nothing done) │
//! │       └── stock operations   ──► StockOutcome   (four variants)        │
//! │                                                                         │
//! │  Caller wants a Result?                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ──► ApiError (api.rs) ──► Transport          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories never return `StoreError` directly. It exists so callers can
//! turn the data outcomes into `?`-friendly results with one taxonomy.

use menagerie_core::EntityId;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No entity with that id in the target collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: EntityId },

    /// A stock operation was asked to move zero or fewer units.
    ///
    /// ## When This Occurs
    /// - `increase_volume(id, 0)` or a negative count
    /// - `reduce_volume(id, -3)`
    /// - an increase that would overflow the stock counter
    #[error("Invalid quantity: {count}")]
    InvalidQuantity { count: i64 },

    /// A reduction asked for more units than are in stock.
    ///
    /// ## User Workflow
    /// ```text
    /// reduce_volume(2, 3)
    ///      │
    ///      ▼
    /// Check stock: volume=1
    ///      │
    ///      ▼
    /// InsufficientStock { id: 2, available: 1, requested: 3 }
    ///      │
    ///      ▼
    /// Caller reports "Only 1 left", product unchanged
    /// ```
    #[error("Insufficient stock for product {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: EntityId,
        available: i64,
        requested: i64,
    },
}

impl StoreError {
    /// Creates a NotFound error for a given entity kind and id.
    ///
    /// ## Example
    /// ```rust
    /// use menagerie_core::{Animal, Entity};
    /// use menagerie_store::StoreError;
    ///
    /// let err = StoreError::not_found(Animal::KIND, 42);
    /// assert_eq!(err.to_string(), "Animal not found: 42");
    /// ```
    pub fn not_found(entity: impl Into<String>, id: EntityId) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id,
        }
    }
}

/// Result type for store operations that a caller lifted into a `Result`.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::InsufficientStock {
            id: 2,
            available: 0,
            requested: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 2: available 0, requested 1"
        );

        let err = StoreError::InvalidQuantity { count: -4 };
        assert_eq!(err.to_string(), "Invalid quantity: -4");
    }

    #[test]
    fn test_not_found_helper() {
        assert_eq!(
            StoreError::not_found("Order", 999),
            StoreError::NotFound {
                entity: "Order".to_string(),
                id: 999
            }
        );
    }
}

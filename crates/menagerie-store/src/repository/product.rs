//! # Product Repository
//!
//! Operations on the product collection.
//!
//! ## Key Operations
//! - Tag filtering over name and description
//! - CRUD operations
//! - Stock changes (restock, sale)
//!
//! ## Stock Changes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    reduce_volume(id, count)                             │
//! │                                                                         │
//! │  count <= 0? ──────────────────────────────► InvalidQuantity           │
//! │       │                                       (nothing looked up)      │
//! │       ▼                                                                 │
//! │  ┌── write lock ───────────────────────────────────────────────┐       │
//! │  │  find product ── missing ─────────────────► NotFound         │       │
//! │  │       │                                                      │       │
//! │  │       ▼                                                      │       │
//! │  │  volume < count ──────────────────────────► InsufficientStock│       │
//! │  │       │                                     (unchanged copy) │       │
//! │  │       ▼                                                      │       │
//! │  │  volume -= count; sold_volume += count ───► Updated          │       │
//! │  └──────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  The check and the change happen under the same guard: two             │
//! │  concurrent sales can never both pass the check on the last unit.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::collection::Collection;
use crate::error::{StoreError, StoreResult};
use menagerie_core::{Entity, EntityId, Product, ProductCreate, ProductUpdate, TagFilter};

// =============================================================================
// Stock Outcome
// =============================================================================

/// Result of a stock operation.
///
/// ## Variants
/// ```text
/// Updated(product)            change applied, updated copy
/// InsufficientStock(product)  reduction rejected, unchanged copy
/// NotFound                    no product with that ID
/// InvalidQuantity             count <= 0 (or the counter would overflow)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StockOutcome {
    Updated(Product),
    InsufficientStock(Product),
    NotFound,
    InvalidQuantity,
}

impl StockOutcome {
    /// Returns true if the change was applied.
    pub fn is_updated(&self) -> bool {
        matches!(self, StockOutcome::Updated(_))
    }

    /// The product carried by the outcome, changed or not.
    pub fn product(&self) -> Option<&Product> {
        match self {
            StockOutcome::Updated(product) | StockOutcome::InsufficientStock(product) => {
                Some(product)
            }
            StockOutcome::NotFound | StockOutcome::InvalidQuantity => None,
        }
    }

    /// Converts the outcome into a `Result`.
    ///
    /// ## Arguments
    /// * `id` - The product ID the operation targeted
    /// * `count` - The requested quantity
    ///
    /// ## Example
    /// ```rust
    /// use menagerie_store::{Store, StoreError};
    ///
    /// let store = Store::seeded();
    /// let err = store.products().reduce_volume(2, 99).into_result(2, 99).unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     StoreError::InsufficientStock { id: 2, available: 5, requested: 99 }
    /// );
    /// ```
    pub fn into_result(self, id: EntityId, count: i64) -> StoreResult<Product> {
        match self {
            StockOutcome::Updated(product) => Ok(product),
            StockOutcome::InsufficientStock(product) => Err(StoreError::InsufficientStock {
                id,
                available: product.volume,
                requested: count,
            }),
            StockOutcome::NotFound => Err(StoreError::not_found(Product::KIND, id)),
            StockOutcome::InvalidQuantity => Err(StoreError::InvalidQuantity { count }),
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product operations.
///
/// ## Usage
/// ```rust
/// use menagerie_store::Store;
///
/// let store = Store::seeded();
///
/// // Sell the last five scratching posts
/// let outcome = store.products().reduce_volume(2, 5);
/// assert!(outcome.is_updated());
/// assert_eq!(store.products().get_by_id(2).unwrap().volume, 0);
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    products: Arc<Collection<Product>>,
    default_volume: i64,
}

impl ProductRepository {
    pub(crate) fn new(products: Arc<Collection<Product>>, default_volume: i64) -> Self {
        ProductRepository {
            products,
            default_volume,
        }
    }

    /// Lists all products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        let products = self.products.list();
        debug!(count = products.len(), "Listed products");
        products
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Some(Product)` - Product found
    /// * `None` - No product with that ID
    pub fn get_by_id(&self, id: EntityId) -> Option<Product> {
        debug!(id, "Getting product");
        self.products.get(id)
    }

    /// Returns products whose name or description contains any of `tags`.
    ///
    /// With no usable tags the whole collection is returned.
    pub fn filter<I, S>(&self, tags: I) -> Vec<Product>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filter = TagFilter::new(tags);
        if filter.is_empty() {
            return self.list();
        }

        let products = self.products.find(|product| filter.matches(product));
        debug!(tags = ?filter.tags(), count = products.len(), "Filtered products");
        products
    }

    /// Adds a product with the configured default volume and nothing sold.
    pub fn add(&self, input: ProductCreate) -> Product {
        let volume = self.default_volume;
        let product = self
            .products
            .insert_with(|id| Product::from_create(id, input, volume));
        debug!(id = product.id, name = %product.name, volume, "Product added");
        product
    }

    /// Overwrites name, description, price and discount.
    ///
    /// Stock fields are untouched. Returns `None` if the ID is unknown.
    pub fn update(&self, update: ProductUpdate) -> Option<Product> {
        let id = update.id;
        let updated = self.products.modify(id, |product| {
            product.apply_update(update);
            product.clone()
        });
        debug!(id, found = updated.is_some(), "Product update");
        updated
    }

    /// Deletes a product. Returns whether one was removed.
    ///
    /// Orders that reference the product keep its ID.
    pub fn delete(&self, id: EntityId) -> bool {
        let removed = self.products.remove(id);
        if removed {
            info!(id, "Product deleted");
        } else {
            debug!(id, "Product delete: nothing to remove");
        }
        removed
    }

    /// Number of products currently stored.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Adds `count` units to stock.
    ///
    /// ## Returns
    /// * `Updated` - Stock increased
    /// * `NotFound` - No product with that ID
    /// * `InvalidQuantity` - `count <= 0`, or the stock counter would overflow
    pub fn increase_volume(&self, id: EntityId, count: i64) -> StockOutcome {
        debug!(id, count, "Increasing product volume");

        if count <= 0 {
            return StockOutcome::InvalidQuantity;
        }

        self.products
            .modify(id, |product| {
                if product.restock(count) {
                    StockOutcome::Updated(product.clone())
                } else {
                    StockOutcome::InvalidQuantity
                }
            })
            .unwrap_or(StockOutcome::NotFound)
    }

    /// Moves `count` units from stock to sold.
    ///
    /// ## Returns
    /// * `Updated` - Sale recorded
    /// * `InsufficientStock` - Fewer than `count` units in stock; the product
    ///   is returned unchanged so the caller can report what is left
    /// * `NotFound` - No product with that ID
    /// * `InvalidQuantity` - `count <= 0`
    pub fn reduce_volume(&self, id: EntityId, count: i64) -> StockOutcome {
        debug!(id, count, "Reducing product volume");

        if count <= 0 {
            return StockOutcome::InvalidQuantity;
        }

        let outcome = self
            .products
            .modify(id, |product| {
                if !product.can_sell(count) {
                    StockOutcome::InsufficientStock(product.clone())
                } else if product.record_sale(count) {
                    StockOutcome::Updated(product.clone())
                } else {
                    // sold counter would overflow
                    StockOutcome::InvalidQuantity
                }
            })
            .unwrap_or(StockOutcome::NotFound);

        if let StockOutcome::InsufficientStock(product) = &outcome {
            warn!(
                id,
                available = product.volume,
                requested = count,
                "Stock reduction rejected"
            );
        }

        outcome
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

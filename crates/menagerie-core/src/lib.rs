//! # menagerie-core: Pure Domain Logic for Menagerie
//!
//! This crate holds the entity types and rules of the Menagerie catalog
//! (animals, products, orders, users) as plain data and pure functions.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menagerie Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Transport (HTTP routes, CLI, ...)                 │   │
//! │  │   parse input ──► validate() ──► store call ──► map outcome     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              menagerie-store (locked collections)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ menagerie-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌───────────┐      ┌─────────────┐         │   │
//! │  │   │   types   │      │  filter   │      │ validation  │         │   │
//! │  │   │  Animal   │      │ TagFilter │      │ field rules │         │   │
//! │  │   │  Product  │      │ Searchable│      │ shape rules │         │   │
//! │  │   └───────────┘      └───────────┘      └─────────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO LOCKS • NO I/O • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities, enumerations, creation/update shapes
//! - [`filter`] - Tag normalization and matching
//! - [`validation`] - Input validation for the creation/update shapes
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use menagerie_core::filter::TagFilter;
//! use menagerie_core::types::{Product, ProductCreate};
//!
//! let input = ProductCreate {
//!     name: "Treats".to_string(),
//!     description: "Crunchy dog treats".to_string(),
//!     price: 9.99,
//!     discount: None,
//! };
//! input.validate().unwrap();
//!
//! let product = Product::from_create(3, input, menagerie_core::DEFAULT_PRODUCT_VOLUME);
//! assert_eq!(product.volume, 10);
//! assert!(TagFilter::new(["DOG"]).matches(&product));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod filter;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use filter::{Searchable, TagFilter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Units in stock for a newly added product unless configured otherwise.
pub const DEFAULT_PRODUCT_VOLUME: i64 = 10;

/// Maximum length of names, emails and statuses, in characters.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a username, in characters.
pub const MAX_USERNAME_LENGTH: usize = 50;

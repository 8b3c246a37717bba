//! # menagerie-store: In-Memory Entity Store for Menagerie
//!
//! This crate holds the live catalog of animals, products, orders and users.
//! It is process-local and re-seeded on every start; nothing is persisted.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Menagerie Data Flow                              │
//! │                                                                         │
//! │  Transport handler (reduce stock of product 2)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  menagerie-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │  Seed data   │  │   │
//! │  │   │  (store.rs)   │    │ (repository/) │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ 4 collections │◄───│ AnimalRepo    │    │ 3 animals    │  │   │
//! │  │   │ 1 lock each   │    │ ProductRepo   │    │ 2 products   │  │   │
//! │  │   │               │    │ OrderRepo     │    │ 2 orders     │  │   │
//! │  │   │               │    │ UserRepo      │    │ 2 users      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Option / bool / StockOutcome ──► StoreError ──► ApiError (api.rs)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store creation and repository access
//! - [`config`] - TOML/env configuration
//! - [`seed`] - The fixed startup data set
//! - [`repository`] - Repository implementations (animal, product, ...)
//! - [`error`] - Store error types
//! - [`api`] - Caller-facing error codes and messages
//!
//! ## Usage
//!
//! ```rust
//! use menagerie_store::{Store, StoreConfig};
//!
//! // Create a seeded store with default config
//! let store = Store::new(&StoreConfig::default()).unwrap();
//!
//! // Use repositories
//! let dogs = store.animals().filter(["dog"]);
//! assert_eq!(dogs.len(), 1);
//!
//! let outcome = store.products().reduce_volume(1, 3);
//! assert!(outcome.is_updated());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
mod collection;
pub mod config;
pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{creation_message, ApiError, ErrorCode};
pub use config::{ConfigError, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use store::Store;

// Repository re-exports for convenience
pub use repository::{
    AnimalRepository, OrderRepository, ProductRepository, StockOutcome, UserRepository,
};

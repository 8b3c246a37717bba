//! # Repository Module
//!
//! Repository implementations for the four Menagerie collections.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Transport handler                                                     │
//! │       │                                                                 │
//! │       │  store.products().reduce_volume(2, 3)                          │
//! │       ▼                                                                 │
//! │  ProductRepository (cheap handle, Arc to the collection)               │
//! │  ├── list / get_by_id / filter / count     ── read lock                │
//! │  ├── add / update / delete                 ── write lock               │
//! │  └── increase_volume / reduce_volume       ── write lock               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Collection<Product>  (one RwLock: Vec + id counter)                   │
//! │                                                                         │
//! │  Every repository returns owned copies. Stored records are only        │
//! │  ever changed through a repository call.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`AnimalRepository`] - Animal CRUD and tag filtering
//! - [`ProductRepository`] - Product CRUD, tag filtering and stock changes
//! - [`OrderRepository`] - Order CRUD, cancellation and lookups
//! - [`UserRepository`] - User CRUD

pub mod animal;
pub mod order;
pub mod product;
pub mod user;

pub use animal::AnimalRepository;
pub use order::OrderRepository;
pub use product::{ProductRepository, StockOutcome};
pub use user::UserRepository;

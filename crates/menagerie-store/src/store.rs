//! # Store Handle
//!
//! Creation of the store and access to its repositories.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store                                              │
//! │                                                                         │
//! │  Process Startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::load(path) ← TOML file + MENAGERIE_* env                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(&config)? ← validate, seed (or start empty)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────────────────┐             │
//! │  │ Arc<Collection<Animal>>   RwLock { Vec, next_id }     │             │
//! │  │ Arc<Collection<Product>>  RwLock { Vec, next_id }     │             │
//! │  │ Arc<Collection<Order>>    RwLock { Vec, next_id }     │             │
//! │  │ Arc<Collection<User>>     RwLock { Vec, next_id }     │             │
//! │  └───────────────────────────────────────────────────────┘             │
//! │       │                                                                 │
//! │       │ Clone the handle into every request thread / task              │
//! │       ▼                                                                 │
//! │  Request 1 ──► store.animals().list()      (read lock, animals)        │
//! │  Request 2 ──► store.products().reduce..   (write lock, products)      │
//! │  (Different collections never contend; there is no global lock)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::collection::Collection;
use crate::config::{ConfigResult, StoreConfig};
use crate::repository::{AnimalRepository, OrderRepository, ProductRepository, UserRepository};
use crate::seed;
use menagerie_core::{Animal, Order, Product, User};

/// Main store handle providing repository access.
///
/// Cloning is cheap: clones share the same collections.
///
/// ## Usage
/// ```rust
/// use menagerie_store::Store;
///
/// let store = Store::seeded();
/// let handle = store.clone();
///
/// assert!(handle.orders().cancel(1).is_some());
/// assert!(store.orders().get_by_id(1).unwrap().is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    animals: Arc<Collection<Animal>>,
    products: Arc<Collection<Product>>,
    orders: Arc<Collection<Order>>,
    users: Arc<Collection<User>>,
    default_volume: i64,
}

impl Store {
    /// Creates a store from configuration.
    ///
    /// ## What This Does
    /// 1. Validates `config` (a negative default volume is rejected)
    /// 2. Loads the seed data set if `seed.enabled`, otherwise starts empty
    /// 3. Sets every id counter to max(existing id) + 1
    /// 4. Remembers the default volume for new products
    ///
    /// ## Returns
    /// * `Ok(Store)` - Ready-to-use store handle
    /// * `Err(ConfigError::Invalid)` - `config` failed validation
    pub fn new(config: &StoreConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Store::build(config))
    }

    /// Builds the store from an already validated config.
    fn build(config: &StoreConfig) -> Self {
        let store = if config.seed.enabled {
            let now = Utc::now();
            Store::from_parts(
                seed::animals(now),
                seed::products(),
                seed::orders(now),
                seed::users(),
                config.products.default_volume,
            )
        } else {
            Store::from_parts(
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new(),
                config.products.default_volume,
            )
        };

        info!(
            seeded = config.seed.enabled,
            animals = store.animals.len(),
            products = store.products.len(),
            orders = store.orders.len(),
            users = store.users.len(),
            default_volume = store.default_volume,
            "Store initialized"
        );
        store
    }

    /// Creates a store with the seed data and default settings.
    pub fn seeded() -> Self {
        Store::build(&StoreConfig::default())
    }

    /// Creates a store with no data and default settings.
    pub fn empty() -> Self {
        let mut config = StoreConfig::default();
        config.seed.enabled = false;
        Store::build(&config)
    }

    fn from_parts(
        animals: Vec<Animal>,
        products: Vec<Product>,
        orders: Vec<Order>,
        users: Vec<User>,
        default_volume: i64,
    ) -> Self {
        Store {
            animals: Arc::new(Collection::seeded(animals)),
            products: Arc::new(Collection::seeded(products)),
            orders: Arc::new(Collection::seeded(orders)),
            users: Arc::new(Collection::seeded(users)),
            default_volume,
        }
    }

    /// Returns the animal repository.
    pub fn animals(&self) -> AnimalRepository {
        AnimalRepository::new(Arc::clone(&self.animals))
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust
    /// use menagerie_store::Store;
    ///
    /// let store = Store::seeded();
    /// assert_eq!(store.products().filter(["karma"]).len(), 1);
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(Arc::clone(&self.products), self.default_volume)
    }

    /// Returns the order repository.
    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(Arc::clone(&self.orders))
    }

    /// Returns the user repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(Arc::clone(&self.users))
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::seeded()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::StockOutcome;
    use menagerie_core::{AnimalStatus, AnimalUpdate, Gender, ProductCreate, Species};
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_store_is_send_sync() {
        assert_send_sync::<Store>();
    }

    #[test]
    fn test_seeded_counts() {
        let store = Store::seeded();
        assert_eq!(store.animals().count(), 3);
        assert_eq!(store.products().count(), 2);
        assert_eq!(store.orders().count(), 2);
        assert_eq!(store.users().count(), 2);
    }

    #[test]
    fn test_empty_store_starts_ids_at_one() {
        let store = Store::empty();
        assert_eq!(store.animals().count(), 0);

        let product = store.products().add(ProductCreate {
            name: "Leash".to_string(),
            description: String::new(),
            price: 25.0,
            discount: Some(10),
        });
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_collections_have_independent_counters() {
        let store = Store::seeded();
        let product = store.products().add(ProductCreate {
            name: "Ball".to_string(),
            description: String::new(),
            price: 5.0,
            discount: None,
        });
        assert_eq!(product.id, 3);
        assert_eq!(store.orders().count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_adds_get_unique_ids() {
        let store = Store::seeded();
        let mut handles = Vec::new();

        for task in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                (0..25)
                    .map(|i| {
                        store
                            .products()
                            .add(ProductCreate {
                                name: format!("Item {task}-{i}"),
                                description: String::new(),
                                price: 1.0,
                                discount: None,
                            })
                            .id
                    })
                    .collect::<Vec<_>>()
            }));
        }

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }

        assert_eq!(ids.len(), 200);
        assert_eq!(ids.iter().min(), Some(&3));
        assert_eq!(ids.iter().max(), Some(&202));
        assert_eq!(store.products().count(), 202);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reductions_never_oversell() {
        let store = Store::seeded();
        // product 2 has 5 units; 20 tasks each try to buy one
        let mut handles = Vec::new();
        for _ in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.products().reduce_volume(2, 1).is_updated()
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap() {
                successes += 1;
            }
        }

        let product = store.products().get_by_id(2).unwrap();
        assert_eq!(successes, 5);
        assert_eq!(product.volume, 0);
        assert_eq!(product.sold_volume, 17);
        assert!(matches!(
            store.products().reduce_volume(2, 1),
            StockOutcome::InsufficientStock(_)
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_deletes_have_one_winner() {
        let store = Store::seeded();
        let mut handles = Vec::new();
        for _ in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move { store.animals().delete(3) }));
        }

        let mut removed = 0;
        for handle in handles {
            if handle.await.unwrap() {
                removed += 1;
            }
        }
        assert_eq!(removed, 1);
        assert_eq!(store.animals().count(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_update_delete_race_has_one_winner() {
        let store = Store::seeded();
        // set once the delete has committed; updates that start later must miss
        let gone = Arc::new(AtomicBool::new(false));
        let mut updaters = Vec::new();

        for task in 0..6 {
            let store = store.clone();
            let gone = Arc::clone(&gone);
            updaters.push(tokio::spawn(async move {
                let mut results = Vec::new();
                for round in 0..50 {
                    let deleted_before = gone.load(Ordering::SeqCst);
                    let description = format!("update {task}-{round}");
                    let updated = store.animals().update(AnimalUpdate {
                        id: 3,
                        name: "Kiwi".to_string(),
                        age: 1,
                        price: 60.0,
                        status: AnimalStatus::Pending,
                        species: Species::Bird,
                        gender: Gender::Female,
                        description: description.clone(),
                        photo: None,
                    });

                    match &updated {
                        Some(animal) => {
                            assert!(!deleted_before, "update applied after delete");
                            assert_eq!(animal.description, description);
                        }
                        None => gone.store(true, Ordering::SeqCst),
                    }
                    results.push(updated.is_some());
                    tokio::task::yield_now().await;
                }
                results
            }));
        }

        let mut deleters = Vec::new();
        for _ in 0..3 {
            let store = store.clone();
            let gone = Arc::clone(&gone);
            deleters.push(tokio::spawn(async move {
                tokio::task::yield_now().await;
                let removed = store.animals().delete(3);
                if removed {
                    gone.store(true, Ordering::SeqCst);
                }
                removed
            }));
        }

        let mut removed = 0;
        for handle in deleters {
            if handle.await.unwrap() {
                removed += 1;
            }
        }

        for handle in updaters {
            let results = handle.await.unwrap();
            // once an update misses, every later one from the same task misses too
            let first_miss = results.iter().position(|ok| !ok).unwrap_or(results.len());
            assert!(results[first_miss..].iter().all(|ok| !ok));
        }

        assert_eq!(removed, 1);
        assert!(store.animals().get_by_id(3).is_none());
        assert_eq!(store.animals().count(), 2);
    }
}

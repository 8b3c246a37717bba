//! # Animal Repository
//!
//! Operations on the animal collection.
//!
//! ## Tag Filtering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Tag Filtering Works                              │
//! │                                                                         │
//! │  filter(["dog", " "])                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Normalize ──► ["dog"]       (nothing left? return everything)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │ 1 Luna   cat   available  "Nieśmiała..."     │                      │
//! │  │ 2 Rocky  dog   available  "Energiczny..."    │ ← MATCH (species)    │
//! │  │ 3 Kiwi   bird  pending    "Papużka..."       │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results: [Rocky]                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tracing::{debug, info};

use crate::collection::Collection;
use menagerie_core::{Animal, AnimalCreate, AnimalUpdate, EntityId, TagFilter};

/// Repository for animal operations.
///
/// ## Usage
/// ```rust
/// use menagerie_store::Store;
///
/// let store = Store::seeded();
/// let dogs = store.animals().filter(["dog"]);
/// assert_eq!(dogs[0].name, "Rocky");
/// ```
#[derive(Debug, Clone)]
pub struct AnimalRepository {
    animals: Arc<Collection<Animal>>,
}

impl AnimalRepository {
    pub(crate) fn new(animals: Arc<Collection<Animal>>) -> Self {
        AnimalRepository { animals }
    }

    /// Lists all animals in insertion order.
    pub fn list(&self) -> Vec<Animal> {
        let animals = self.animals.list();
        debug!(count = animals.len(), "Listed animals");
        animals
    }

    /// Gets an animal by its ID.
    ///
    /// ## Returns
    /// * `Some(Animal)` - Animal found
    /// * `None` - No animal with that ID
    pub fn get_by_id(&self, id: EntityId) -> Option<Animal> {
        debug!(id, "Getting animal");
        self.animals.get(id)
    }

    /// Returns animals matching any of `tags`.
    ///
    /// A tag matches when it is a substring of the name or description, or
    /// equals the species or status text (all case-insensitive). With no
    /// usable tags the whole collection is returned.
    pub fn filter<I, S>(&self, tags: I) -> Vec<Animal>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filter = TagFilter::new(tags);
        if filter.is_empty() {
            return self.list();
        }

        let animals = self.animals.find(|animal| filter.matches(animal));
        debug!(tags = ?filter.tags(), count = animals.len(), "Filtered animals");
        animals
    }

    /// Registers a new animal and returns it with its assigned ID.
    pub fn add(&self, input: AnimalCreate) -> Animal {
        let animal = self.animals.insert_with(|id| Animal::from_create(id, input));
        debug!(id = animal.id, name = %animal.name, "Animal added");
        animal
    }

    /// Overwrites every editable field of an existing animal.
    ///
    /// The intake date is never changed. Returns `None` (and changes
    /// nothing) if the ID is unknown.
    pub fn update(&self, update: AnimalUpdate) -> Option<Animal> {
        let id = update.id;
        let updated = self.animals.modify(id, |animal| {
            animal.apply_update(update);
            animal.clone()
        });
        debug!(id, found = updated.is_some(), "Animal update");
        updated
    }

    /// Deletes an animal. Returns whether one was removed.
    pub fn delete(&self, id: EntityId) -> bool {
        let removed = self.animals.remove(id);
        if removed {
            info!(id, "Animal deleted");
        } else {
            debug!(id, "Animal delete: nothing to remove");
        }
        removed
    }

    /// Number of animals currently stored.
    pub fn count(&self) -> usize {
        self.animals.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

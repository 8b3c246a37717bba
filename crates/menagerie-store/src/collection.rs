//! # Locked Collection
//!
//! The storage primitive behind every repository: a vector of entities and
//! the id counter that feeds it, guarded by one `RwLock`.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Collection<T>                                       │
//! │                                                                         │
//! │   RwLock ─┬─ items:   Vec<T>   (insertion order)                        │
//! │           └─ next_id: EntityId (never reused)                           │
//! │                                                                         │
//! │   read lock:  list, get, find, len         ──► owned clones out        │
//! │   write lock: insert_with, modify, remove  ──► whole critical section  │
//! │                                                                         │
//! │   Id allocation and append happen under ONE write guard, so two        │
//! │   concurrent inserts can never observe the same counter value.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use parking_lot::RwLock;

use menagerie_core::{Entity, EntityId};

#[derive(Debug)]
struct Inner<T> {
    items: Vec<T>,
    next_id: EntityId,
}

/// A lock-guarded, id-allocating list of entities.
#[derive(Debug)]
pub(crate) struct Collection<T> {
    inner: RwLock<Inner<T>>,
}

impl<T: Entity> Collection<T> {
    /// Creates a collection holding `items`.
    ///
    /// The counter starts one past the largest existing id, or at 1 when
    /// `items` is empty.
    pub(crate) fn seeded(items: Vec<T>) -> Self {
        let next_id = items.iter().map(T::id).max().map_or(1, |max| max + 1);
        Collection {
            inner: RwLock::new(Inner { items, next_id }),
        }
    }

    pub(crate) fn list(&self) -> Vec<T> {
        self.inner.read().items.clone()
    }

    pub(crate) fn get(&self, id: EntityId) -> Option<T> {
        self.inner
            .read()
            .items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
    }

    /// Clones every entity matching `predicate`, in insertion order.
    pub(crate) fn find<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.inner
            .read()
            .items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// Allocates the next id, builds the entity with it and appends it.
    pub(crate) fn insert_with<F>(&self, build: F) -> T
    where
        F: FnOnce(EntityId) -> T,
    {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let item = build(id);
        inner.items.push(item.clone());
        item
    }

    /// Runs `change` on the entity with `id` while holding the write lock.
    ///
    /// Returns `None` without calling `change` if the id is absent.
    pub(crate) fn modify<R, F>(&self, id: EntityId, change: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut inner = self.inner.write();
        inner.items.iter_mut().find(|item| item.id() == id).map(change)
    }

    /// Removes every entity with `id`. Returns whether anything was removed.
    pub(crate) fn remove(&self, id: EntityId) -> bool {
        let mut inner = self.inner.write();
        let before = inner.items.len();
        inner.items.retain(|item| item.id() != id);
        inner.items.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.read().items.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: EntityId,
        label: &'static str,
    }

    impl Entity for Tag {
        const KIND: &'static str = "Tag";

        fn id(&self) -> EntityId {
            self.id
        }
    }

    fn tag(id: EntityId, label: &'static str) -> Tag {
        Tag { id, label }
    }

    #[test]
    fn test_counter_starts_after_max_id() {
        let collection = Collection::seeded(vec![tag(4, "a"), tag(2, "b")]);
        let inserted = collection.insert_with(|id| tag(id, "c"));
        assert_eq!(inserted.id, 5);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn test_empty_collection_starts_at_one() {
        let collection: Collection<Tag> = Collection::seeded(Vec::new());
        assert_eq!(collection.insert_with(|id| tag(id, "a")).id, 1);
        assert_eq!(collection.insert_with(|id| tag(id, "b")).id, 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let collection = Collection::seeded(vec![tag(1, "a")]);
        let second = collection.insert_with(|id| tag(id, "b"));
        assert!(collection.remove(second.id));

        let third = collection.insert_with(|id| tag(id, "c"));
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let collection = Collection::seeded(vec![tag(3, "x"), tag(1, "y")]);
        collection.insert_with(|id| tag(id, "z"));

        let labels: Vec<_> = collection.list().iter().map(|t| t.label).collect();
        assert_eq!(labels, ["x", "y", "z"]);
    }

    #[test]
    fn test_modify_missing_id_does_not_run_change() {
        let collection = Collection::seeded(vec![tag(1, "a")]);
        let mut called = false;
        let result = collection.modify(9, |_| called = true);
        assert!(result.is_none());
        assert!(!called);
    }

    #[test]
    fn test_returned_items_are_copies() {
        let collection = Collection::seeded(vec![tag(1, "a")]);
        let mut copy = collection.get(1).unwrap();
        copy.label = "changed";
        assert_eq!(collection.get(1).unwrap().label, "a");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let collection = Collection::seeded(vec![tag(1, "a"), tag(2, "b")]);
        assert!(collection.remove(1));
        assert!(!collection.remove(1));
        assert_eq!(collection.find(|_| true), vec![tag(2, "b")]);
    }
}

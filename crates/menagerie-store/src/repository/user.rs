//! # User Repository
//!
//! Operations on the user collection. New accounts always start with the
//! `user` role; only an update can promote them.

use std::sync::Arc;
use tracing::{debug, info};

use crate::collection::Collection;
use menagerie_core::{EntityId, User, UserCreate, UserUpdate};

/// Repository for user operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    users: Arc<Collection<User>>,
}

impl UserRepository {
    pub(crate) fn new(users: Arc<Collection<User>>) -> Self {
        UserRepository { users }
    }

    pub fn list(&self) -> Vec<User> {
        let users = self.users.list();
        debug!(count = users.len(), "Listed users");
        users
    }

    pub fn get_by_id(&self, id: EntityId) -> Option<User> {
        debug!(id, "Getting user");
        self.users.get(id)
    }

    /// Registers a user with the `user` role.
    pub fn add(&self, input: UserCreate) -> User {
        let user = self.users.insert_with(|id| User::from_create(id, input));
        debug!(id = user.id, username = %user.username, "User added");
        user
    }

    /// Overwrites names, email and role. Returns `None` if the ID is unknown.
    pub fn update(&self, update: UserUpdate) -> Option<User> {
        let id = update.id;
        let updated = self.users.modify(id, |user| {
            user.apply_update(update);
            user.clone()
        });
        debug!(id, found = updated.is_some(), "User update");
        updated
    }

    pub fn delete(&self, id: EntityId) -> bool {
        let removed = self.users.remove(id);
        if removed {
            info!(id, "User deleted");
        } else {
            debug!(id, "User delete: nothing to remove");
        }
        removed
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}

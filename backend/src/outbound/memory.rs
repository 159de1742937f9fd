//! In-process `UserRepository` used when no database is configured.
//!
//! State lives behind a `std::sync::Mutex`; every operation holds the lock
//! only for the duration of a vector scan, never across an `.await`.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug)]
struct Store {
    users: Vec<User>,
    last_id: i32,
}

/// Volatile user storage.
///
/// Users are kept in insertion order, which is also ascending identifier
/// order because identifiers only ever increase. Deleted identifiers are
/// never handed out again.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                users: Vec::new(),
                last_id: 0,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        let id = UserId::new(next).map_err(|err| UserPersistenceError::query(err.to_string()))?;
        store.last_id = next;
        let user = User::new(id, draft.clone());
        store.users.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError> {
        let mut store = self.lock()?;
        let Some(slot) = store.users.iter_mut().find(|stored| stored.id() == user.id()) else {
            return Ok(None);
        };
        *slot = user.clone();
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut store = self.lock()?;
        let before = store.users.len();
        store.users.retain(|user| user.id() != id);
        Ok(store.users.len() < before)
    }
}

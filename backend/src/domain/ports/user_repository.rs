//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage for the `users` table.
///
/// Adapters own identifier assignment. Absent rows are reported through the
/// `Option`/`bool` return values rather than as errors so callers decide how
/// to surface them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned identifier.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// All users in ascending identifier order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Replace every field of the user with `user.id()`.
    ///
    /// Returns `None` when no such user exists.
    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a user. Returns `false` when no such user exists.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}

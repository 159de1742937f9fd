//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user and return it with its assigned identifier.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace all fields of the user identified by `id`.
    ///
    /// Fails with `not_found` when the user does not exist.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove the user identified by `id`.
    ///
    /// Fails with `not_found` when the user does not exist.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}

//! Wire types shared with the backend's `/api/users` endpoints.

use serde::{Deserialize, Serialize};

/// A user record as returned by the backend.
///
/// Serialises to `{"id", "name", "email", "password"}`, which is also the
/// body of a full-replace update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Password as stored by the backend.
    pub password: String,
}

impl User {
    /// Merge validated form values onto this user's identifier.
    ///
    /// # Examples
    /// ```
    /// use admin_panel::{User, UserPayload};
    ///
    /// let ann = User {
    ///     id: 1,
    ///     name: "Ann".into(),
    ///     email: "ann@x.com".into(),
    ///     password: "Passw0rd!".into(),
    /// };
    /// let payload = UserPayload {
    ///     name: "Anna".into(),
    ///     email: "ann@x.com".into(),
    ///     password: "Passw0rd!".into(),
    /// };
    /// assert_eq!(ann.replaced_with(payload).name, "Anna");
    /// ```
    #[must_use]
    pub fn replaced_with(&self, payload: UserPayload) -> Self {
        let UserPayload {
            name,
            email,
            password,
        } = payload;
        Self {
            id: self.id,
            name,
            email,
            password,
        }
    }
}

/// Body of a create request: a user without an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

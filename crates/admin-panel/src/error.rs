//! Error types for the admin-panel crate.
//!
//! [`ApiError`] covers everything that can go wrong talking to the backend;
//! [`PanelError`] adds the failures the panel detects on its own.

use thiserror::Error;

use crate::form::FieldError;

/// Failures returned by a [`crate::UsersApi`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The targeted user does not exist.
    #[error("not found: {message}")]
    NotFound {
        /// Message reported by the backend.
        message: String,
    },

    /// The backend rejected the request as invalid.
    #[error("request rejected: {message}")]
    Rejected {
        /// Message reported by the backend.
        message: String,
        /// Offending field, when the backend named one.
        field: Option<String>,
    },

    /// The backend answered with a server-side failure.
    #[error("server error (status {status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Message reported by the backend, or the raw body preview.
        message: String,
    },

    /// The request never produced a response.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the network failure.
        message: String,
    },

    /// A response body could not be decoded.
    #[error("invalid response body: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

/// Failures surfaced by [`crate::AdminPanel`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The form failed validation; nothing was sent.
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The user is not in the cached list.
    #[error("user {id} is not in the current list")]
    UnknownUser {
        /// Identifier that was requested.
        id: i32,
    },

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

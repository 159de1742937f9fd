//! Client-side core of the user administration panel.
//!
//! This crate holds everything the panel does apart from drawing pixels:
//! the cached user list, the search filter, the create/edit form with its
//! validation rules, and the HTTP client for the backend's `/api/users`
//! endpoints. It is independent of the backend crate and talks to it only
//! over HTTP.
//!
//! # Overview
//!
//! - [`AdminPanel`] owns the panel state and drives every operation.
//! - [`UserForm`] validates operator input before anything is sent.
//! - [`UsersApi`] abstracts the REST contract; [`HttpUsersApi`] implements it
//!   with `reqwest`.
//! - [`filter_users`] applies the case-insensitive name/email search.
//!
//! # Example
//!
//! ```
//! use admin_panel::UserForm;
//!
//! let form = UserForm::new("Ann", "ann@x.com", "short1!");
//! let errors = form.validate().expect_err("password is too weak");
//! assert_eq!(errors.len(), 2);
//! ```

mod api;
mod error;
mod form;
mod panel;
mod search;
mod user;

pub use api::{HttpUsersApi, UsersApi};
pub use error::{ApiError, PanelError};
pub use form::{FieldError, FormField, PASSWORD_MIN_LENGTH, PASSWORD_SPECIAL_CHARS, UserForm};
pub use panel::AdminPanel;
pub use search::{filter_users, matches_search};
pub use user::{User, UserPayload};

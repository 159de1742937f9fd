//! Domain primitives, ports and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User (alias to `user::User`) — persisted user record.
//! - UsersService — use cases backing the `users` endpoints.

pub mod error;
pub mod ports;
mod trace_id;
pub mod user;
mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{EmailAddress, Password, User, UserDraft, UserId, UserName, UserValidationError};
pub use self::users_service::UsersService;


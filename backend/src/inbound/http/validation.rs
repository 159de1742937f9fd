//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every validation failure becomes `invalid_request` with a
//! `{"field": .., "code": ..}` details object so clients can highlight the
//! offending form field.

use serde_json::json;

use crate::domain::{Error, UserId, UserValidationError};

/// Detail code for a body id that disagrees with the path id.
const ID_MISMATCH: &str = "id_mismatch";
/// Detail code for a required body field that was omitted.
const MISSING_FIELD: &str = "missing_field";

fn field_error(message: impl Into<String>, field: &str, code: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code,
    }))
}

/// Map a domain validation failure onto the HTTP error payload.
pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    field_error(err.to_string(), err.field(), err.code())
}

/// Error for a required body field that was omitted entirely.
pub(crate) fn missing_field_error(field: &str) -> Error {
    field_error(format!("missing required field: {field}"), field, MISSING_FIELD)
}

/// Parse a `{id}` path segment into a [`UserId`].
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).map_err(map_user_validation_error)
}

/// Check that an optional body id agrees with the path id.
pub(crate) fn ensure_matching_id(path_id: UserId, body_id: Option<i32>) -> Result<(), Error> {
    match body_id {
        Some(body_id) if body_id != path_id.as_i32() => Err(field_error(
            format!("body id {body_id} does not match path id {path_id}"),
            "id",
            ID_MISMATCH,
        )),
        _ => Ok(()),
    }
}

//! Access to the backend's `/api/users` endpoints.
//!
//! [`UsersApi`] is the seam the panel depends on; [`HttpUsersApi`] owns the
//! transport details: URL building, request timeout, HTTP status mapping,
//! and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::ApiError;
use crate::user::{User, UserPayload};

const USERS_PATH: &str = "api/users";

/// The REST contract the panel relies on.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch the full user collection in storage order.
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// Create a user; the backend assigns the identifier.
    async fn create_user(&self, payload: &UserPayload) -> Result<User, ApiError>;

    /// Replace every field of an existing user.
    async fn update_user(&self, user: &User) -> Result<User, ApiError>;

    /// Delete a user by identifier.
    async fn delete_user(&self, id: i32) -> Result<(), ApiError>;
}

/// [`UsersApi`] over HTTP using `reqwest`.
pub struct HttpUsersApi {
    client: Client,
    base_url: Url,
}

impl HttpUsersApi {
    /// Build a client for the backend at `base_url` with a per-request timeout.
    ///
    /// `base_url` is the deployment root, e.g. `http://localhost:8080/`.
    /// Include a trailing slash when the backend sits under a path prefix.
    ///
    /// # Errors
    /// Returns [`ApiError::Transport`] when the HTTP client cannot be built.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use admin_panel::HttpUsersApi;
    ///
    /// let base = "http://localhost:8080/".parse().expect("valid url");
    /// let api = HttpUsersApi::new(base, Duration::from_secs(10));
    /// assert!(api.is_ok());
    /// ```
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_transport_error)?;
        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> Result<Url, ApiError> {
        join(&self.base_url, USERS_PATH)
    }

    fn item_url(&self, id: i32) -> Result<Url, ApiError> {
        join(&self.base_url, &format!("{USERS_PATH}/{id}"))
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.collection_url()?;
        debug!(%url, "listing users");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn create_user(&self, payload: &UserPayload) -> Result<User, ApiError> {
        let url = self.collection_url()?;
        debug!(%url, "creating user");
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn update_user(&self, user: &User) -> Result<User, ApiError> {
        let url = self.item_url(user.id)?;
        debug!(%url, "updating user");
        let response = self
            .client
            .put(url)
            .json(user)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode(response).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        debug!(%url, "deleting user");
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        check_status(response).await.map(drop)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, ApiError> {
    base.join(path).map_err(|error| ApiError::Transport {
        message: format!("invalid request URL: {error}"),
    })
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.map_err(map_transport_error)?;
    Err(map_status_error(status, body.as_ref()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = check_status(response)
        .await?
        .bytes()
        .await
        .map_err(map_transport_error)?;
    serde_json::from_slice(body.as_ref()).map_err(|error| ApiError::Decode {
        message: error.to_string(),
    })
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    ApiError::Transport {
        message: error.to_string(),
    }
}

/// Subset of the backend error payload the panel shows to operators.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<ErrorDetails>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetails {
    field: Option<String>,
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let ErrorBody { message, details } = serde_json::from_slice(body).unwrap_or_default();
    let message = message.unwrap_or_else(|| body_preview(body, status));
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound { message },
        _ if status.is_client_error() => ApiError::Rejected {
            message,
            field: details.and_then(|details| details.field),
        },
        _ => ApiError::Server {
            status: status.as_u16(),
            message,
        },
    }
}

fn body_preview(body: &[u8], status: StatusCode) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if compact.is_empty() {
        return format!("status {}", status.as_u16());
    }
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

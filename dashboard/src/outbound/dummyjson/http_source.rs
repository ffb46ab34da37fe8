//! Reqwest-backed users listing adapter.
//!
//! This adapter owns transport details only: the `limit` query parameter,
//! outbound headers, timeout and HTTP error mapping, and JSON decoding into
//! `ListedUser` records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use super::dto::UserListingDto;
use crate::domain::ports::{ListedUser, UserDirectory, UserDirectoryError, UserListingRequest};

/// User-agent sent with every listing request.
pub const DEFAULT_USER_AGENT: &str = concat!("dashboard/", env!("CARGO_PKG_VERSION"));

/// Users listing adapter performing HTTP GET requests against one endpoint.
#[derive(Debug, Clone)]
pub struct DummyJsonDirectory {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl DummyJsonDirectory {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build an adapter that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: user_agent.into(),
        })
    }

    /// Listing URL without the `limit` parameter.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for DummyJsonDirectory {
    async fn list_users(
        &self,
        request: &UserListingRequest,
    ) -> Result<Vec<ListedUser>, UserDirectoryError> {
        let response = self
            .client
            .get(listing_url(&self.endpoint, request))
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_users(body.as_ref())
    }
}

fn listing_url(endpoint: &Url, request: &UserListingRequest) -> Url {
    let mut url = endpoint.clone();
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "limit")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(retained)
        .append_pair("limit", &request.limit.to_string());
    url
}

fn parse_users(body: &[u8]) -> Result<Vec<ListedUser>, UserDirectoryError> {
    let decoded: UserListingDto = serde_json::from_slice(body).map_err(|error| {
        UserDirectoryError::decode(format!("invalid users JSON payload: {error}"))
    })?;
    decoded
        .into_listed_users()
        .map_err(UserDirectoryError::decode)
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    if error.is_timeout() {
        UserDirectoryError::timeout(error.to_string())
    } else if error.is_decode() {
        UserDirectoryError::decode(error.to_string())
    } else {
        UserDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserDirectoryError {
    let preview = body_preview(body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserDirectoryError::timeout(format!("status {}", status.as_u16()))
        }
        _ => UserDirectoryError::status(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

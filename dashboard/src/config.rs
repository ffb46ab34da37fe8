//! Dashboard configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `DASHBOARD_*` environment variables and an
//! optional configuration file. Raw values are kept as loaded; the accessors
//! apply defaults and validate them into domain types.
//!
//! The environment layer splits any value containing a comma into a list, so
//! the text fields accept either form and rejoin lists with commas. Quote an
//! environment value (`DASHBOARD_SEARCH='"smith, jo"'`) to keep it verbatim.

use std::num::NonZeroU32;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;
use staff_attributes::{AttributeError, Department, Rating};
use url::Url;

use crate::domain::{DEFAULT_USER_LIMIT, FilterState};

const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/users";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration values controlling one dashboard run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DASHBOARD")]
pub struct DashboardSettings {
    /// User listing URL.
    pub endpoint: Option<String>,
    /// Number of users requested.
    pub limit: Option<u32>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Fixed seed for reproducible department and rating assignment.
    pub seed: Option<u64>,
    /// Initial search text.
    #[serde(default, deserialize_with = "comma_joined")]
    pub search: Option<String>,
    /// Initially selected departments, comma separated.
    #[serde(default, deserialize_with = "comma_joined")]
    pub departments: Option<String>,
    /// Initially selected ratings, comma separated.
    #[serde(default, deserialize_with = "comma_joined")]
    pub ratings: Option<String>,
    /// Render a single frame after loading and exit.
    #[ortho_config(default = false)]
    pub once: bool,
}

/// Raised when configured values cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The endpoint is not an absolute URL.
    #[error("invalid endpoint {value:?}: {message}")]
    InvalidEndpoint {
        /// Rejected input.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// The endpoint uses a scheme other than http or https.
    #[error("endpoint {value:?} must use http or https")]
    UnsupportedScheme {
        /// Rejected input.
        value: String,
    },
    /// A limit of zero was configured.
    #[error("limit must be greater than zero")]
    ZeroLimit,
    /// An initial department or rating could not be parsed.
    #[error("invalid initial filter: {0}")]
    InvalidFilter(#[from] AttributeError),
}

impl DashboardSettings {
    /// Return the listing URL, falling back to the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] or
    /// [`SettingsError::UnsupportedScheme`] for unusable values.
    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        let raw = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT).trim();
        let url = Url::parse(raw).map_err(|error| SettingsError::InvalidEndpoint {
            value: raw.to_owned(),
            message: error.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(SettingsError::UnsupportedScheme {
                value: raw.to_owned(),
            }),
        }
    }

    /// Return the configured limit, falling back to twenty users.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroLimit`] when zero was configured.
    pub fn limit(&self) -> Result<NonZeroU32, SettingsError> {
        match self.limit {
            None => Ok(DEFAULT_USER_LIMIT),
            Some(value) => NonZeroU32::new(value).ok_or(SettingsError::ZeroLimit),
        }
    }

    /// Return the request timeout, falling back to ten seconds.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Build the filter state the session starts with.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidFilter`] when a listed department or
    /// rating is not recognised.
    pub fn initial_filters(&self) -> Result<FilterState, SettingsError> {
        let mut filters = FilterState::new();
        if let Some(query) = &self.search {
            filters.set_query(query.as_str());
        }
        for department in list_items(self.departments.as_deref()) {
            filters.select_department(department.parse::<Department>()?);
        }
        for rating in list_items(self.ratings.as_deref()) {
            filters.select_rating(rating.parse::<Rating>()?);
        }
        Ok(filters)
    }
}

/// Accept a text field given as a string, a bare scalar or a list of either.
fn comma_joined<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(scalar_text)
            .collect::<Result<Vec<_>, _>>()
            .map(|parts| Some(parts.join(","))),
        Some(value) => scalar_text(value).map(Some),
    }
}

fn scalar_text<E: de::Error>(value: Value) -> Result<String, E> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(E::custom(format!("expected text, found {other}"))),
    }
}

fn list_items(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

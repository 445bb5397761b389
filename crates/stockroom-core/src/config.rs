//! Store Configuration
//!
//! Connection settings for the hosted document database.

use serde::Deserialize;

use crate::repository::{StoreError, StoreResult};

pub const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";

/// Where the inventory lives
///
/// Without a `project_id` the app keeps its data in memory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            api_key: None,
            endpoint: default_endpoint(),
            database: default_database(),
        }
    }
}

impl StoreConfig {
    /// Settings baked in at build time.
    ///
    /// A browser bundle has no process environment, so the values come
    /// from `STOCKROOM_FIRESTORE_*` variables seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("STOCKROOM_FIRESTORE_PROJECT"),
            option_env!("STOCKROOM_FIRESTORE_API_KEY"),
            option_env!("STOCKROOM_FIRESTORE_ENDPOINT"),
            option_env!("STOCKROOM_FIRESTORE_DATABASE"),
        )
    }

    /// Parse settings supplied by an embedding host
    pub fn from_json(json: &str) -> StoreResult<Self> {
        serde_json::from_str(json).map_err(|e| StoreError::Decode(format!("store config: {}", e)))
    }

    fn from_values(
        project_id: Option<&str>,
        api_key: Option<&str>,
        endpoint: Option<&str>,
        database: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
        Self {
            project_id: non_empty(project_id),
            api_key: non_empty(api_key),
            endpoint: non_empty(endpoint).unwrap_or_else(default_endpoint),
            database: non_empty(database).unwrap_or_else(default_database),
        }
    }
}

//! Persisted connector state
//!
//! The orchestrator round-trips [`ConnectorState`] between `collect` calls
//! as an opaque serde value. Connectors read it, return an updated copy,
//! and never hold on to it across calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State threaded through every `collect` call
///
/// `last_modified_since` is the sync checkpoint; it never moves backwards
/// across successive collects. `schema_version` is stamped by the connector
/// so the orchestrator can detect incompatible layouts after upgrades.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorState {
    /// Credentials captured by `connect`; required for `collect`
    pub credentials: Option<Credentials>,

    /// Checkpoint of the last successful sync
    pub last_modified_since: Option<DateTime<Utc>>,

    /// Connector version that last wrote this state
    pub schema_version: Option<u32>,
}

impl ConnectorState {
    /// State as first persisted right after `connect`
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
            last_modified_since: None,
            schema_version: None,
        }
    }

    /// True when `connect` has produced credentials for this state
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }
}

/// Username/password pair captured at connect time
///
/// Secret material: must never appear in logs. `Debug` redacts the
/// password so accidental `{:?}` formatting cannot leak it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

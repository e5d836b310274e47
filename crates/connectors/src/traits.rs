//! Connector trait definition

use crate::capabilities::{CollectLogger, CredentialPrompt};
use crate::error::ConnectorError;
use crate::state::{ConnectorState, Credentials};
use footprint_activity::{Activity, ActivityType};
use serde::{Deserialize, Serialize};

/// Static metadata a connector publishes to the orchestrator
///
/// Serialized for integration pickers with the platform's field names
/// (`type`, `isPrivate`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorDescriptor {
    /// Human-facing integration name
    pub label: &'static str,

    /// Short description shown in integration pickers
    pub description: &'static str,

    /// Semantic category of the activities this connector emits
    #[serde(rename = "type")]
    pub activity_type: ActivityType,

    /// True when the connector needs interactive credential capture rather
    /// than a public OAuth-style flow
    pub is_private: bool,

    /// Connector version, stamped into persisted state as `schema_version`
    pub version: u32,

    /// Scheduler hint: minimum seconds between `collect` calls, if any
    pub min_refresh_interval_secs: Option<u64>,
}

/// What one `collect` call produced: normalized activities plus the state
/// to persist for the next run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectResult {
    pub activities: Vec<Activity>,
    pub state: ConnectorState,
}

/// Trait for incremental-sync connectors that pull activity records from
/// external services
///
/// Connectors authenticate once via `connect`, then on every `collect`
/// re-establish a vendor session from the persisted credentials, pull
/// records modified since the checkpoint, and normalize them into canonical
/// activities for the aggregation pipeline.
pub trait Connector: Send + Sync {
    /// Returns the connector's published metadata
    fn descriptor(&self) -> ConnectorDescriptor;

    /// Obtain credentials via `prompt` and perform the vendor handshake
    ///
    /// Returns only the credential fields for the orchestrator to persist;
    /// sessions are re-established from them on every `collect`, never
    /// stored in state. Authentication failures are fatal for this call;
    /// no retry happens at this layer.
    fn connect(
        &self,
        prompt: &impl CredentialPrompt,
    ) -> impl std::future::Future<Output = Result<Credentials, ConnectorError>> + Send;

    /// Tear down persisted session material
    ///
    /// Idempotent: succeeds when nothing exists to remove.
    fn disconnect(
        &self,
    ) -> impl std::future::Future<Output = Result<(), ConnectorError>> + Send;

    /// Pull records modified since the checkpoint in `state`
    ///
    /// Consumes the persisted state and returns the updated copy alongside
    /// the normalized activities. The checkpoint in the returned state never
    /// moves backwards.
    fn collect(
        &self,
        state: ConnectorState,
        logger: &dyn CollectLogger,
    ) -> impl std::future::Future<Output = Result<CollectResult, ConnectorError>> + Send;
}

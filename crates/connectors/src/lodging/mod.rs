//! Lodging connector: incremental reservation sync for a private vendor
//! account
//!
//! Authenticates with username/password through the credential prompt
//! capability, then on every `collect` re-establishes the vendor session
//! and pulls reservations modified since the persisted checkpoint. Raw
//! records are normalized into purchase activities; per-record problems are
//! skipped with warnings while vendor failures abort the whole call.

mod api;
mod collect;
mod normalize;

pub use api::{LodgingApi, OneOrMany, ReservationOrder, ReservationPage, ReservationQuery};
pub use collect::{collect_batch, collect_windows, BatchOutcome, SyncWindow};
pub use normalize::{normalize, SkipReason};

use crate::capabilities::{CollectLogger, CredentialPrompt};
use crate::config::LodgingConnectorConfig;
use crate::error::ConnectorError;
use crate::state::{ConnectorState, Credentials};
use crate::traits::{CollectResult, Connector, ConnectorDescriptor};
use chrono::Utc;
use footprint_activity::ActivityType;
use std::io::ErrorKind;
use tracing::debug;

/// Version stamped into persisted state; bump on incompatible layout change
pub const LODGING_CONNECTOR_VERSION: u32 = 1;

/// Lodging connector over a vendor client `C`
///
/// The client is the transport seam ([`LodgingApi`]); the connector owns
/// the sync logic and the per-instance session directory from its config.
pub struct LodgingConnector<C> {
    client: C,
    config: LodgingConnectorConfig,
}

impl<C: LodgingApi> LodgingConnector<C> {
    /// Create a connector over `client` with the given configuration
    pub fn new(client: C, config: LodgingConnectorConfig) -> Self {
        Self { client, config }
    }

    /// The configuration this instance was built with
    pub fn config(&self) -> &LodgingConnectorConfig {
        &self.config
    }
}

impl<C: LodgingApi> Connector for LodgingConnector<C> {
    fn descriptor(&self) -> ConnectorDescriptor {
        ConnectorDescriptor {
            label: "Airbnb",
            description: "Find adventures nearby or in faraway places and access \
                unique homes, experiences, and places around the world",
            activity_type: ActivityType::Purchase,
            is_private: true,
            version: LODGING_CONNECTOR_VERSION,
            min_refresh_interval_secs: None,
        }
    }

    async fn connect(
        &self,
        prompt: &impl CredentialPrompt,
    ) -> Result<Credentials, ConnectorError> {
        let credentials = prompt.request_login().await?;
        self.client.authenticate(&credentials).await?;

        debug!(connector = "lodging", "authenticated");
        Ok(credentials)
    }

    async fn disconnect(&self) -> Result<(), ConnectorError> {
        match tokio::fs::remove_dir_all(&self.config.session_dir).await {
            Ok(()) => Ok(()),
            // Nothing to remove is success; disconnect must be idempotent
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConnectorError::SessionTeardown(e)),
        }
    }

    async fn collect(
        &self,
        mut state: ConnectorState,
        logger: &dyn CollectLogger,
    ) -> Result<CollectResult, ConnectorError> {
        let credentials = state
            .credentials
            .as_ref()
            .ok_or(ConnectorError::MissingCredentials)?;
        self.client.load_session(credentials).await?;

        match state.last_modified_since {
            Some(since) => {
                logger.log_debug(&format!("initiating collect with last_modified_since={since}"))
            }
            None => logger.log_debug("initiating collect with no checkpoint; defaulting to now"),
        }
        let since = state.last_modified_since.unwrap_or_else(Utc::now);

        let batch = collect_batch(&self.client, &since, self.config.page_size, logger).await?;

        // A batch that observed no server timestamp keeps the previous
        // checkpoint; one that did can only move it forward.
        let next_checkpoint = match batch.latest_timestamp {
            Some(observed) => observed.max(since),
            None => since,
        };
        state.last_modified_since = Some(next_checkpoint);
        state.schema_version = Some(LODGING_CONNECTOR_VERSION);

        debug!(
            connector = "lodging",
            activities = batch.activities.len(),
            checkpoint = %next_checkpoint,
            "collect finished"
        );

        Ok(CollectResult {
            activities: batch.activities,
            state,
        })
    }
}

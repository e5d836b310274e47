//! Error types for connectors

use thiserror::Error;

/// Errors that can occur during connector operations
///
/// Record-level validation problems are deliberately not represented here:
/// they are skips (see `lodging::SkipReason`), surfaced through the logger
/// capability and never through a call failure.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Credential prompt failed or was declined by the user
    #[error("credential prompt failed: {0}")]
    Prompt(String),

    /// Vendor authentication handshake failed
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// Session rehydration from stored credentials failed
    #[error("session load failed: {0}")]
    SessionLoad(String),

    /// A vendor query failed; the whole batch is aborted
    #[error("vendor query failed: {0}")]
    QueryFailed(String),

    /// `collect` was called on a state without credentials
    #[error("state has no credentials; run connect first")]
    MissingCredentials,

    /// Session directory removal failed for a reason other than absence
    #[error("session teardown failed: {0}")]
    SessionTeardown(#[source] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ConnectorError {
    /// True when the failure means credentials are wrong or missing, so the
    /// orchestrator should re-run `connect` instead of retrying `collect`
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_) | Self::MissingCredentials | Self::SessionLoad(_)
        )
    }
}

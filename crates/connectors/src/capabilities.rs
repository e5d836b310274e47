//! Capability seams supplied by the embedding application
//!
//! Connectors stay free of UI and log-transport concerns: credential
//! capture and log delivery are traits the orchestrator implements and
//! passes in. The vendor client seam lives with its connector (see
//! `lodging::LodgingApi`).

use crate::error::ConnectorError;
use crate::state::Credentials;
use tracing::{debug, warn};

/// Logging capability handed to `collect`
///
/// Object-safe so it can be passed as `&dyn CollectLogger`. Record-level
/// skips are reported here as warnings; they never fail the batch.
pub trait CollectLogger: Send + Sync {
    /// Report a recoverable, record-level problem
    fn log_warning(&self, message: &str);

    /// Report progress detail useful when debugging a sync
    fn log_debug(&self, message: &str);
}

/// [`CollectLogger`] that forwards to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl CollectLogger for TracingLogger {
    fn log_warning(&self, message: &str) {
        warn!("{}", message);
    }

    fn log_debug(&self, message: &str) {
        debug!("{}", message);
    }
}

/// Interactive credential capture capability
///
/// Private connectors obtain their username/password through this seam;
/// how the prompt is presented is the orchestrator's business.
pub trait CredentialPrompt: Send + Sync {
    /// Ask the user for username/password credentials
    fn request_login(
        &self,
    ) -> impl std::future::Future<Output = Result<Credentials, ConnectorError>> + Send;

    /// Ask the user to complete a login flow in an embedded web view
    ///
    /// Reserved for vendors that require a browser handshake; the returned
    /// string is the flow's callback payload. The default implementation
    /// rejects the request, so prompt implementations only need
    /// `request_login`.
    fn request_web_view(
        &self,
        url: &str,
    ) -> impl std::future::Future<Output = Result<String, ConnectorError>> + Send {
        let url = url.to_string();
        async move {
            Err(ConnectorError::Prompt(format!(
                "web view login is not supported (requested {url})"
            )))
        }
    }
}

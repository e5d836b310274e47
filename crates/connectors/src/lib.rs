//! Footprint - Connectors
//!
//! Pull-based data-source connectors that incrementally sync records from
//! third-party services and produce canonical `Activity` values for the
//! aggregation pipeline.
//!
//! # Available Connectors
//!
//! - **Lodging** - Reservation purchases from a private lodging account
//!
//! # Design Principles
//!
//! - **Incremental**: Each `collect` resumes from the checkpoint persisted
//!   in `ConnectorState` and advances it to the newest server-reported
//!   timestamp
//! - **Skip, don't fail**: A malformed record is dropped with a typed
//!   reason and one warning; only vendor/auth failures abort a call
//! - **Capability seams**: Vendor transport, credential prompts, and log
//!   delivery are traits supplied by the embedding application
//! - **Simple interface**: Each connector implements the `Connector` trait
//!
//! # Feature Flags
//!
//! Connectors can be selectively compiled using feature flags:
//!
//! ```toml
//! [dependencies]
//! footprint-connectors = { version = "0.1", default-features = false, features = ["lodging"] }
//! ```
//!
//! Available features:
//! - `lodging` (default) - Lodging reservation purchases
//!
//! # Example
//!
//! ```ignore
//! use footprint_connectors::{
//!     Connector, ConnectorState, LodgingConnector, LodgingConnectorConfig, TracingLogger,
//! };
//!
//! let config = LodgingConnectorConfig::new("/var/lib/footprint/sessions/lodging_main")?;
//! let connector = LodgingConnector::new(client, config);
//!
//! let credentials = connector.connect(&prompt).await?;
//! let state = ConnectorState::with_credentials(credentials);
//!
//! let result = connector.collect(state, &TracingLogger).await?;
//! // result.activities feed the pipeline; persist result.state for next time
//! ```

mod capabilities;
pub mod config;
mod error;
mod state;
mod traits;

// Conditionally compiled connectors
#[cfg(feature = "lodging")]
pub mod lodging;

// Re-exports
pub use capabilities::{CollectLogger, CredentialPrompt, TracingLogger};
pub use error::ConnectorError;
pub use state::{ConnectorState, Credentials};
pub use traits::{CollectResult, Connector, ConnectorDescriptor};

#[cfg(feature = "lodging")]
pub use config::LodgingConnectorConfig;
#[cfg(feature = "lodging")]
pub use lodging::{LodgingConnector, SkipReason};

/// List of available connector types (compiled in)
pub fn available_connectors() -> &'static [&'static str] {
    &[
        #[cfg(feature = "lodging")]
        "lodging",
    ]
}

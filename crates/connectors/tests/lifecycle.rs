//! End-to-end connector lifecycle: connect, repeated collects, disconnect

#![cfg(feature = "lodging")]

use chrono::{DateTime, Utc};
use footprint_connectors::lodging::{
    LodgingApi, OneOrMany, ReservationPage, ReservationQuery, LODGING_CONNECTOR_VERSION,
};
use footprint_connectors::{
    CollectLogger, Connector, ConnectorError, ConnectorState, CredentialPrompt, Credentials,
    LodgingConnector, LodgingConnectorConfig,
};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Vendor client scripted with one page per collect call
#[derive(Default)]
struct ScriptedVendor {
    pages: Mutex<VecDeque<ReservationPage>>,
}

impl ScriptedVendor {
    fn new(pages: Vec<ReservationPage>) -> Self {
        Self {
            pages: Mutex::new(pages.into_iter().collect()),
        }
    }
}

impl LodgingApi for ScriptedVendor {
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), ConnectorError> {
        if credentials.password.is_empty() {
            return Err(ConnectorError::AuthFailed("empty password".into()));
        }
        Ok(())
    }

    async fn load_session(&self, _credentials: &Credentials) -> Result<(), ConnectorError> {
        Ok(())
    }

    async fn list_reservations(
        &self,
        _query: ReservationQuery,
    ) -> Result<ReservationPage, ConnectorError> {
        Ok(self.pages.lock().unwrap().pop_front().unwrap_or(
            ReservationPage {
                lodging: None,
                timestamp: None,
            },
        ))
    }
}

struct StubPrompt;

impl CredentialPrompt for StubPrompt {
    async fn request_login(&self) -> Result<Credentials, ConnectorError> {
        Ok(Credentials::new("ada@example.com", "hunter2"))
    }
}

#[derive(Default)]
struct NullLogger;

impl CollectLogger for NullLogger {
    fn log_warning(&self, _message: &str) {}
    fn log_debug(&self, _message: &str) {}
}

fn ts(text: &str) -> DateTime<Utc> {
    text.parse().unwrap()
}

#[tokio::test]
async fn test_full_lifecycle() {
    let root = tempfile::tempdir().unwrap();
    let session_dir = root.path().join("lodging_main");
    std::fs::create_dir_all(&session_dir).unwrap();
    std::fs::write(session_dir.join("session.json"), "{}").unwrap();

    let vendor = ScriptedVendor::new(vec![
        // First collect: one reservation, server as-of T1
        ReservationPage {
            lodging: Some(OneOrMany::Many(vec![json!({
                "id": "r1",
                "StartDateTime": "2021-05-20T14:00:00Z",
                "EndDateTime": "2021-05-23T10:00:00Z",
                "number_rooms": "1",
                "number_guests": "2",
                "Address": {"country": "US", "latitude": "1.0", "longitude": "2.0"},
                "display_name": "Cabin",
            })])),
            timestamp: Some(ts("2021-06-01T00:00:00Z")),
        },
        // Second collect: nothing new, server as-of T2
        ReservationPage {
            lodging: None,
            timestamp: Some(ts("2021-07-01T00:00:00Z")),
        },
    ]);

    let config = LodgingConnectorConfig::new(&session_dir).unwrap();
    let connector = LodgingConnector::new(vendor, config);
    let logger = NullLogger;

    // Connect captures credentials; only those go into state
    let credentials = connector.connect(&StubPrompt).await.unwrap();
    assert_eq!(credentials.username, "ada@example.com");

    let mut state = ConnectorState::with_credentials(credentials);
    state.last_modified_since = Some(ts("2021-01-01T00:00:00Z"));

    // First collect normalizes the reservation and advances the checkpoint
    let first = connector.collect(state, &logger).await.unwrap();
    assert_eq!(first.activities.len(), 1);
    assert_eq!(first.activities[0].id, "r1");
    assert_eq!(first.activities[0].participants, Some(2));
    assert_eq!(
        first.state.last_modified_since,
        Some(ts("2021-06-01T00:00:00Z"))
    );
    assert_eq!(first.state.schema_version, Some(LODGING_CONNECTOR_VERSION));

    // Second collect resumes from the returned state and moves forward again
    let second = connector.collect(first.state, &logger).await.unwrap();
    assert!(second.activities.is_empty());
    assert_eq!(
        second.state.last_modified_since,
        Some(ts("2021-07-01T00:00:00Z"))
    );

    // Disconnect wipes the session directory and stays idempotent
    connector.disconnect().await.unwrap();
    assert!(!session_dir.exists());
    connector.disconnect().await.unwrap();
}

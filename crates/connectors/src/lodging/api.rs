//! Vendor client capability for the lodging service
//!
//! Transport, authentication handshakes, and session storage live behind
//! [`LodgingApi`]; this crate only shapes the queries it issues and the
//! pages it receives. Raw reservation records stay untyped
//! (`serde_json::Value`) until the normalizer maps them.

use crate::error::ConnectorError;
use crate::state::Credentials;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;

/// Vendor client capability
///
/// Implemented by the embedding application against the real vendor API.
/// Every operation is a single attempt; retry policy belongs on the caller
/// side of this seam, not in the connector.
pub trait LodgingApi: Send + Sync {
    /// Perform the vendor authentication handshake for fresh credentials
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<(), ConnectorError>> + Send;

    /// Re-establish a stored session for previously authenticated
    /// credentials
    fn load_session(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<(), ConnectorError>> + Send;

    /// List reservations matching `query`
    fn list_reservations(
        &self,
        query: ReservationQuery,
    ) -> impl std::future::Future<Output = Result<ReservationPage, ConnectorError>> + Send;
}

/// Sort key accepted by the reservation listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationOrder {
    /// Order by stay start date
    StartDate,
}

impl ReservationOrder {
    /// Wire value for the vendor's `order_by` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartDate => "start_date",
        }
    }
}

/// One paginated reservation listing request
///
/// Date filters are calendar days; the vendor's listing endpoint filters at
/// day granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationQuery {
    /// Maximum records per page
    pub limit: u32,
    /// Zero-based record offset
    pub offset: u32,
    /// Server-side sort key
    pub order_by: ReservationOrder,
    /// Only reservations ending on or after this day
    pub ending_on_or_after: Option<NaiveDate>,
    /// Only reservations starting on or after this day
    pub starting_on_or_after: Option<NaiveDate>,
}

/// One page of the vendor's reservation listing response
///
/// The listing endpoint has a documented inconsistency: a one-result page
/// carries a bare object where a list is expected, and a no-result page
/// omits the field entirely. [`ReservationPage::into_records`] flattens all
/// three shapes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReservationPage {
    /// Raw reservation records; list, bare object, or absent
    #[serde(rename = "LodgingObject")]
    pub lodging: Option<OneOrMany<Value>>,

    /// Server-reported as-of timestamp for this page, when provided
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ReservationPage {
    /// All raw records on this page as a list
    pub fn into_records(self) -> Vec<Value> {
        self.lodging.map(OneOrMany::into_vec).unwrap_or_default()
    }
}

/// Either a bare value or a list of values
///
/// Deserialization tries the list shape first so a JSON array never parses
/// as a single record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// The usual list shape
    Many(Vec<T>),
    /// The vendor's one-result quirk
    One(T),
}

impl<T> OneOrMany<T> {
    /// Normalize either shape into a list
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}

//! Footprint - Activity Model
//!
//! Canonical, vendor-agnostic activity records. Connectors normalize raw
//! vendor data into [`Activity`] values; the downstream aggregation pipeline
//! consumes them without knowing which integration produced them.
//!
//! Two invariants hold for every emitted activity:
//!
//! - `id` and `datetime` are always present; a record that cannot provide
//!   them is dropped at the connector, never emitted half-formed
//! - optional fields serialize as explicit `null`s, never omitted
//!
//! Tag vocabularies ([`ActivityType`], [`PurchaseCategory`], [`Unit`])
//! serialize as SCREAMING_SNAKE_CASE strings shared with the rest of the
//! platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic category of an activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    #[serde(rename = "ACTIVITY_TYPE_ELECTRICITY")]
    Electricity,
    #[serde(rename = "ACTIVITY_TYPE_MEAL")]
    Meal,
    #[serde(rename = "ACTIVITY_TYPE_PURCHASE")]
    Purchase,
    #[serde(rename = "ACTIVITY_TYPE_TRANSPORTATION")]
    Transportation,
}

/// Spend category identifying what a purchase line item was for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PurchaseCategory {
    #[serde(rename = "PURCHASE_CATEGORY_ENTERTAINMENT_HOTEL")]
    EntertainmentHotel,
    #[serde(rename = "PURCHASE_CATEGORY_FOOD_SERVING_SERVICES")]
    FoodServingServices,
    #[serde(rename = "PURCHASE_CATEGORY_STORE_FOOD")]
    StoreFood,
    #[serde(rename = "PURCHASE_CATEGORY_TRANSPORTATION_FUEL")]
    TransportationFuel,
}

/// Unit a line item's `value` is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "UNIT_ITEM")]
    Item,
    #[serde(rename = "UNIT_KILOMETER")]
    Kilometer,
    #[serde(rename = "UNIT_KILOWATT_HOUR")]
    KilowattHour,
}

/// One measured component of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// What was purchased/consumed
    pub identifier: PurchaseCategory,
    /// Unit of `value`
    pub unit: Unit,
    /// Measured quantity
    pub value: f64,
}

impl LineItem {
    /// Line item for a single-item purchase (one stay, one ticket, ...)
    pub fn single_item(identifier: PurchaseCategory) -> Self {
        Self {
            identifier,
            unit: Unit::Item,
            value: 1.0,
        }
    }
}

/// A normalized activity record
///
/// `id` is the vendor-native identifier, kept opaque so repeated syncs of
/// the same vendor record deduplicate downstream. All optional descriptive
/// fields are `None` when the source record did not carry them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Vendor-native unique identifier
    pub id: String,
    /// Semantic category
    pub activity_type: ActivityType,
    /// Measured components, one entry per activity for simple purchases
    pub line_items: Vec<LineItem>,
    /// ISO 3166-1 alpha-2 country code of the activity location
    #[serde(rename = "countryCodeISO2")]
    pub country_code_iso2: Option<String>,
    /// Longitude in decimal degrees
    pub location_lon: Option<f64>,
    /// Latitude in decimal degrees
    pub location_lat: Option<f64>,
    /// Human-readable place name
    pub location_label: Option<String>,
    /// Human-readable activity label
    pub label: Option<String>,
    /// Service provider or intermediary, when one exists
    pub carrier: Option<String>,
    /// Start instant
    pub datetime: DateTime<Utc>,
    /// End instant; `None` when unknown or when the source duration was
    /// non-positive
    pub end_datetime: Option<DateTime<Utc>>,
    /// Number of people the activity covers
    pub participants: Option<u32>,
}

/// Validation failures for [`Activity`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivityError {
    /// The vendor identifier is empty
    #[error("activity is missing a vendor id")]
    MissingId,

    /// The activity carries no measured components
    #[error("activity `{id}` has no line items")]
    EmptyLineItems { id: String },
}

impl Activity {
    /// Check the emission invariants: a non-empty id and at least one
    /// line item
    pub fn validate(&self) -> Result<(), ActivityError> {
        if self.id.is_empty() {
            return Err(ActivityError::MissingId);
        }
        if self.line_items.is_empty() {
            return Err(ActivityError::EmptyLineItems {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

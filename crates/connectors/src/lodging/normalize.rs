//! Maps raw vendor reservation records onto canonical activities
//!
//! Every record either becomes exactly one well-formed [`Activity`] or is
//! skipped with a typed reason and a single warning. A bad record never
//! fails the surrounding batch and never emits partial output.

use crate::capabilities::CollectLogger;
use chrono::{DateTime, Utc};
use footprint_activity::{Activity, ActivityType, LineItem, PurchaseCategory};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Why a raw record was not emitted
///
/// Skips are expected per-record outcomes: they are logged as warnings and
/// excluded from the batch without failing it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The booking covers more than one room; the canonical schema models
    /// single-unit stays only
    #[error("booking covers {rooms} rooms; only single-room stays are supported")]
    MultiRoom { rooms: i64 },

    /// A required field was missing or a present field could not be coerced
    #[error("field `{field}` is unusable: {detail}")]
    Unmappable {
        field: &'static str,
        detail: String,
    },
}

/// Map one raw vendor record to a canonical activity, or skip it
///
/// The input is a single reservation record, never the page wrapper. Each
/// skip logs exactly one warning through `logger` carrying the reason and
/// the serialized record.
pub fn normalize(raw: &Value, logger: &dyn CollectLogger) -> Result<Activity, SkipReason> {
    normalize_record(raw).map_err(|reason| {
        logger.log_warning(&format!("skipping reservation ({reason}): {raw}"));
        reason
    })
}

/// Vendor wire shape of one reservation record
///
/// Every field is optional at this stage; requiredness and coercion are
/// applied in `normalize_record`, with the multi-room check ahead of all
/// per-field coercion.
#[derive(Debug, Deserialize)]
struct RawReservation {
    id: Option<Value>,
    #[serde(rename = "StartDateTime")]
    start: Option<Value>,
    #[serde(rename = "EndDateTime")]
    end: Option<Value>,
    number_rooms: Option<Value>,
    number_guests: Option<Value>,
    #[serde(rename = "Address")]
    address: Option<RawAddress>,
    display_name: Option<String>,
    booking_site_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAddress {
    country: Option<String>,
    latitude: Option<Value>,
    longitude: Option<Value>,
}

fn normalize_record(raw: &Value) -> Result<Activity, SkipReason> {
    let record = RawReservation::deserialize(raw).map_err(|e| SkipReason::Unmappable {
        field: "record",
        detail: e.to_string(),
    })?;

    // An absent room count means a single-room booking; a present one must
    // equal 1.
    if let Some(rooms_raw) = &record.number_rooms {
        let rooms = parse_i64(rooms_raw).ok_or_else(|| SkipReason::Unmappable {
            field: "number_rooms",
            detail: format!("expected an integer, got {rooms_raw}"),
        })?;
        if rooms != 1 {
            return Err(SkipReason::MultiRoom { rooms });
        }
    }

    let id = record_id(record.id.as_ref())?;
    let datetime = parse_datetime(require(&record.start, "StartDateTime")?, "StartDateTime")?;
    let end = parse_datetime(require(&record.end, "EndDateTime")?, "EndDateTime")?;

    // A non-positive duration means "no end", not an error.
    let end_datetime = if end > datetime { Some(end) } else { None };

    let (country_code_iso2, location_lat, location_lon) = match record.address {
        None => (None, None, None),
        Some(address) => {
            let lat = parse_optional_f64(address.latitude.as_ref(), "Address.latitude")?;
            let lon = parse_optional_f64(address.longitude.as_ref(), "Address.longitude")?;
            (address.country, lat, lon)
        }
    };

    // A present count of 0 stays Some(0); only absence maps to None.
    let participants = match &record.number_guests {
        None => None,
        Some(value) => {
            let guests = parse_i64(value).ok_or_else(|| SkipReason::Unmappable {
                field: "number_guests",
                detail: format!("expected an integer, got {value}"),
            })?;
            let guests = u32::try_from(guests).map_err(|_| SkipReason::Unmappable {
                field: "number_guests",
                detail: format!("guest count {guests} is out of range"),
            })?;
            Some(guests)
        }
    };

    Ok(Activity {
        id,
        activity_type: ActivityType::Purchase,
        line_items: vec![LineItem::single_item(PurchaseCategory::EntertainmentHotel)],
        country_code_iso2,
        location_lon,
        location_lat,
        location_label: record.display_name.clone(),
        label: record.display_name,
        carrier: record.booking_site_name,
        datetime,
        end_datetime,
        participants,
    })
}

fn require<'a>(value: &'a Option<Value>, field: &'static str) -> Result<&'a Value, SkipReason> {
    value.as_ref().ok_or_else(|| SkipReason::Unmappable {
        field,
        detail: "missing".to_string(),
    })
}

fn record_id(value: Option<&Value>) -> Result<String, SkipReason> {
    match value {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(other) => Err(SkipReason::Unmappable {
            field: "id",
            detail: format!("expected a non-empty string or number, got {other}"),
        }),
        None => Err(SkipReason::Unmappable {
            field: "id",
            detail: "missing".to_string(),
        }),
    }
}

fn parse_datetime(value: &Value, field: &'static str) -> Result<DateTime<Utc>, SkipReason> {
    let text = value.as_str().ok_or_else(|| SkipReason::Unmappable {
        field,
        detail: format!("expected a datetime string, got {value}"),
    })?;
    DateTime::parse_from_rfc3339(text)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| SkipReason::Unmappable {
            field,
            detail: e.to_string(),
        })
}

/// The vendor serializes numbers inconsistently; both `2` and `"2"` occur.
fn parse_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_optional_f64(
    value: Option<&Value>,
    field: &'static str,
) -> Result<Option<f64>, SkipReason> {
    match value {
        None => Ok(None),
        Some(value) => parse_f64(value)
            .map(Some)
            .ok_or_else(|| SkipReason::Unmappable {
                field,
                detail: format!("expected a number, got {value}"),
            }),
    }
}

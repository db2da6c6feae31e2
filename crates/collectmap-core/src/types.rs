//! Domain types shared across the dashboard crates.
//!
//! Everything here is produced by the collector-service client and consumed
//! by the map-composition / legend / tooltip layers. The point set is
//! replaced wholesale on every successful fetch; nothing in these types is
//! merged or deduplicated across refreshes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A material category as returned by the collector service.
///
/// `name` is the identifier the legend and marker colors key on. It is
/// unique within one refresh cycle but nothing stronger: the service may in
/// practice return duplicates, which the color-map assembly resolves with
/// last-write-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Opaque service-side identifier. Present on the wire but unused by
    /// rendering; carried for embedders that need to call back into the
    /// service.
    #[serde(default)]
    pub value: Option<String>,
}

/// One geolocated transaction point, flattened from the wire shape.
///
/// `lat`, `lng`, `material`, and `address` are required — records missing
/// any of them are dropped at the normalization boundary and never reach
/// this type. `weight` stays `None` when the service sent no quantity;
/// display code substitutes `0` so downstream consumers can still tell
/// "no data" from "zero weight".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    pub material: String,
    pub address: String,
    #[serde(default)]
    pub weight: Option<f64>,
    /// Administrative-area label attached by the service (domain-specific
    /// locality identifier).
    #[serde(default)]
    pub lcda: Option<String>,
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub requester_phone: Option<String>,
    /// Schedule timestamp as sent by the service, e.g.
    /// `"2025-03-14T09:30:00.000Z"`. Tooltips show only the date portion.
    #[serde(default)]
    pub schedule_date: Option<String>,
}

/// Inclusive calendar-date bounds for a transaction query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

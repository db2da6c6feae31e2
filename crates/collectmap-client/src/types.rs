//! Collector-service wire types for the two read-only endpoints.
//!
//! ## Observed shape from the live service
//!
//! ### `GET /api/v2/category/all`
//! A bare JSON array of category records. Every record carries a `name`;
//! some also carry an opaque `value` identifier. Records occasionally
//! arrive with `name` as an empty string — those are kept at this layer
//! and filtered out when the legend color map is assembled.
//!
//! ### `GET /api/v2/heatmap/transactions`
//! An envelope `{ "data": [...] }` where each element nests its identity
//! fields under an `_id` sub-object:
//!
//! ```json
//! {
//!   "_id": {
//!     "lat": 6.52, "long": 3.37,
//!     "material": "Plastic", "address": "12 Marina Rd",
//!     "lcda": "Eti-Osa", "user_name": "...", "user_phone": "...",
//!     "schedule_date": "2025-03-14T09:30:00.000Z"
//!   },
//!   "quantity": 42.5
//! }
//! ```
//!
//! Note the service spells longitude `long`, not `lng`. `quantity` is the
//! aggregated weight and may be absent. Individual elements are decoded
//! one at a time in `normalize` so a malformed record drops without
//! failing the batch — which is why `data` is kept as raw JSON values here.

use serde::Deserialize;

/// A category record from `GET /api/v2/category/all`.
#[derive(Debug, Deserialize)]
pub struct RawCategory {
    /// Display name; may be empty on some records.
    #[serde(default)]
    pub name: Option<String>,

    /// Opaque service-side identifier.
    #[serde(default)]
    pub value: Option<String>,
}

/// Envelope for `GET /api/v2/heatmap/transactions`.
///
/// Elements stay untyped so that per-record decoding failures can be
/// handled individually at the normalization boundary.
#[derive(Debug, Deserialize)]
pub struct TransactionsResponse {
    pub data: Vec<serde_json::Value>,
}

/// One aggregated transaction record.
#[derive(Debug, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "_id")]
    pub identity: RawIdentity,

    /// Aggregated weight in kg. Absent when the service has no quantity
    /// data for the bucket.
    #[serde(default)]
    pub quantity: Option<f64>,
}

/// The identity sub-object of a transaction record.
///
/// `lat`, `long`, `material`, and `address` are required: a record missing
/// any of them (or with a non-numeric coordinate) fails to decode and is
/// dropped by the batch normalizer.
#[derive(Debug, Deserialize)]
pub struct RawIdentity {
    pub lat: f64,

    /// Longitude. The service uses the field name `long`.
    pub long: f64,

    pub material: String,

    pub address: String,

    #[serde(default)]
    pub lcda: Option<String>,

    #[serde(default)]
    pub user_name: Option<String>,

    #[serde(default)]
    pub user_phone: Option<String>,

    /// ISO-8601 timestamp; tooltips truncate this to its date portion.
    #[serde(default)]
    pub schedule_date: Option<String>,
}

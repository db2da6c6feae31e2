//! Normalization from raw collector-service records to [`GeoPoint`].
//!
//! The batch is forgiving: each record is decoded on its own, and a record
//! missing a required field (or carrying a non-numeric coordinate) is
//! dropped with a warning while the rest of the batch survives. Optional
//! fields that are absent on the wire stay absent on the [`GeoPoint`] —
//! in particular `weight` is NOT defaulted to zero here; display code does
//! that, so "no data" remains distinguishable from "zero weight".

use collectmap_core::GeoPoint;

use crate::error::ClientError;
use crate::types::RawTransaction;

/// Normalizes one raw transaction value into a [`GeoPoint`].
///
/// # Errors
///
/// Returns [`ClientError::Deserialize`] when the value does not match the
/// expected record shape (missing `_id`, missing or non-numeric `lat`/`long`,
/// missing `material` or `address`).
pub fn normalize_record(value: &serde_json::Value) -> Result<GeoPoint, ClientError> {
    let raw: RawTransaction =
        serde_json::from_value(value.clone()).map_err(|e| ClientError::Deserialize {
            context: "transaction record".to_string(),
            source: e,
        })?;

    let identity = raw.identity;
    Ok(GeoPoint {
        lat: identity.lat,
        lng: identity.long,
        material: identity.material,
        address: identity.address,
        weight: raw.quantity,
        lcda: identity.lcda,
        requester_name: identity.user_name,
        requester_phone: identity.user_phone,
        schedule_date: identity.schedule_date,
    })
}

/// Normalizes a batch of raw transaction values, dropping malformed records.
///
/// Each drop is logged at `warn` with the decode failure; the batch itself
/// never fails.
#[must_use]
pub fn normalize_batch(values: &[serde_json::Value]) -> Vec<GeoPoint> {
    values
        .iter()
        .filter_map(|value| match normalize_record(value) {
            Ok(point) => Some(point),
            Err(e) => {
                tracing::warn!(error = %e, "dropping malformed transaction record");
                None
            }
        })
        .collect()
}

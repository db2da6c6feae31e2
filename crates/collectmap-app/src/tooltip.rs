//! Tooltip content as a pure function of the hovered point.

use collectmap_core::GeoPoint;

/// Everything the tooltip displays for one hovered marker.
///
/// `weight_kg` is the one place a missing weight becomes `0`; the
/// underlying [`GeoPoint`] keeps its `Option` so data consumers still see
/// the difference.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub material: String,
    pub weight_kg: f64,
    pub requester_name: Option<String>,
    pub address: String,
    pub requester_phone: Option<String>,
    pub lcda: Option<String>,
    /// Date portion of the schedule timestamp (characters before the first
    /// `T`), when one exists.
    pub schedule_date: Option<String>,
}

impl TooltipContent {
    #[must_use]
    pub fn from_point(point: &GeoPoint) -> Self {
        Self {
            material: point.material.clone(),
            weight_kg: point.weight.unwrap_or(0.0),
            requester_name: point.requester_name.clone(),
            address: point.address.clone(),
            requester_phone: point.requester_phone.clone(),
            lcda: point.lcda.clone(),
            schedule_date: point
                .schedule_date
                .as_deref()
                .and_then(|s| s.split('T').next())
                .map(str::to_string),
        }
    }

    /// Display lines in tooltip order; optional fields are omitted when
    /// absent rather than rendered empty.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Name: {}", self.material),
            format!("Weight: {} kg", self.weight_kg),
        ];
        if let Some(name) = &self.requester_name {
            lines.push(format!("Customer Name: {name}"));
        }
        lines.push(format!("Address: {}", self.address));
        if let Some(phone) = &self.requester_phone {
            lines.push(format!("Phone: {phone}"));
        }
        if let Some(lcda) = &self.lcda {
            lines.push(format!("LCDA: {lcda}"));
        }
        if let Some(date) = &self.schedule_date {
            lines.push(format!("Schedule On: {date}"));
        }
        lines
    }
}

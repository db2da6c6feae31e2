//! Map-composition layer: the capability surface the external map engine
//! must provide, and the marker / heat-layer specs built from the point set.
//!
//! The engine itself (tiles, rendering, event plumbing) is out of scope;
//! these types are the full contract between the dashboard and whatever
//! renders it.

use std::collections::HashMap;

use collectmap_core::{GeoPoint, HslColor};

/// Default viewport center (Lagos).
pub const DEFAULT_CENTER: (f64, f64) = (6.5244, 3.3792);

/// Default viewport zoom level.
pub const DEFAULT_ZOOM: f64 = 12.0;

/// SVG path for the pin-style marker icon.
pub const MARKER_PATH: &str =
    "M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7z";

/// Fill used for markers whose material has no assigned color.
pub const MARKER_FALLBACK_FILL: &str = "#00FF00";

/// Heat-layer radius in pixels.
pub const HEAT_RADIUS: u32 = 40;

/// Heat-layer opacity.
pub const HEAT_OPACITY: f64 = 0.6;

/// Ordered color stops for the heat-intensity gradient, transparent cyan
/// through red.
pub const HEAT_GRADIENT: [&str; 10] = [
    "rgba(0, 255, 255, 0)",
    "rgba(0, 255, 255, 1)",
    "rgba(0, 191, 255, 1)",
    "rgba(0, 127, 255, 1)",
    "rgba(0, 63, 255, 1)",
    "rgba(0, 0, 255, 1)",
    "rgba(255, 0, 255, 1)",
    "rgba(255, 0, 127, 1)",
    "rgba(255, 0, 63, 1)",
    "rgba(255, 0, 0, 1)",
];

/// A point in the map engine's internal 2D projection space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

/// Visible geographic bounds, as (lat, lng) corner pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub south_west: (f64, f64),
    pub north_east: (f64, f64),
}

/// The projection surface of the external mapping capability.
///
/// Every accessor returns `Option` because the map may not be fully
/// initialized yet; callers treat `None` as "not available right now" and
/// do nothing.
pub trait MapViewport {
    /// Converts a geographic coordinate to the engine's projection space.
    fn project(&self, lat: f64, lng: f64) -> Option<PlanarPoint>;

    /// Currently visible geographic bounds.
    fn bounds(&self) -> Option<GeoBounds>;

    /// Current zoom level.
    fn zoom(&self) -> Option<f64>;
}

/// One pin marker, ready for the engine's marker primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub icon_path: &'static str,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub stroke_color: &'static str,
    pub stroke_weight: f64,
    pub scale: f64,
    /// Icon anchor in icon-path coordinates (tip of the pin).
    pub anchor: (f64, f64),
    /// Hover title, `"{material} - {weight} kg"` with weight defaulted to 0.
    pub title: String,
}

/// The heat-intensity overlay, ready for the engine's heat-layer primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatLayerSpec {
    /// (lat, lng) of every point in the current set.
    pub points: Vec<(f64, f64)>,
    pub radius: u32,
    pub opacity: f64,
    pub gradient: &'static [&'static str],
}

/// Builds one marker per point, filling from the category color map.
#[must_use]
pub fn marker_specs(
    points: &[GeoPoint],
    colors: &HashMap<String, HslColor>,
) -> Vec<MarkerSpec> {
    points
        .iter()
        .map(|point| {
            let fill_color = colors
                .get(&point.material)
                .map_or_else(|| MARKER_FALLBACK_FILL.to_string(), ToString::to_string);
            MarkerSpec {
                lat: point.lat,
                lng: point.lng,
                icon_path: MARKER_PATH,
                fill_color,
                fill_opacity: 1.0,
                stroke_color: "#000000",
                stroke_weight: 1.0,
                scale: 1.5,
                anchor: (12.0, 22.0),
                title: format!(
                    "{} - {} kg",
                    point.material,
                    point.weight.unwrap_or(0.0)
                ),
            }
        })
        .collect()
}

/// Builds the heat layer for the current point set, or `None` when there is
/// nothing to overlay.
#[must_use]
pub fn heat_layer(points: &[GeoPoint]) -> Option<HeatLayerSpec> {
    if points.is_empty() {
        return None;
    }
    Some(HeatLayerSpec {
        points: points.iter().map(|p| (p.lat, p.lng)).collect(),
        radius: HEAT_RADIUS,
        opacity: HEAT_OPACITY,
        gradient: &HEAT_GRADIENT,
    })
}

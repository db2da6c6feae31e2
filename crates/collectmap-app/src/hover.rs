//! Hover tracking and geographic-to-screen position math.
//!
//! The hovered point and its screen position live in one `Option` so they
//! can only ever be set or cleared together. A hover request while the map
//! is not fully initialized (no projection, bounds, or zoom yet) is a
//! no-op: state is left unchanged and no tooltip appears.

use collectmap_core::GeoPoint;

use crate::map::MapViewport;

/// Screen-relative pixel position for the tooltip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

/// The currently hovered marker, if any.
#[derive(Debug, Default)]
pub struct HoverState {
    hovered: Option<(GeoPoint, ScreenPosition)>,
}

impl HoverState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles pointer-enter on a marker.
    ///
    /// Computes the screen position from the viewport's projection, bounds,
    /// and zoom. If any of those are unavailable the call does nothing.
    pub fn pointer_enter<V: MapViewport>(&mut self, viewport: &V, point: &GeoPoint) {
        let Some(position) = screen_position(viewport, point.lat, point.lng) else {
            return;
        };
        self.hovered = Some((point.clone(), position));
    }

    /// Handles pointer-leave: clears the point and position together.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<(&GeoPoint, ScreenPosition)> {
        self.hovered.as_ref().map(|(p, pos)| (p, *pos))
    }
}

/// Converts a geographic coordinate to a screen-relative pixel position.
///
/// Projects the point and the visible bounds' corners into the engine's
/// planar space, then scales by `2^zoom`:
/// `x = (p.x − sw.x)·scale`, `y = (p.y − ne.y)·scale`.
///
/// Returns `None` whenever the viewport cannot supply a projection, bounds,
/// or zoom.
#[must_use]
pub fn screen_position<V: MapViewport>(viewport: &V, lat: f64, lng: f64) -> Option<ScreenPosition> {
    let point = viewport.project(lat, lng)?;
    let bounds = viewport.bounds()?;
    let south_west = viewport.project(bounds.south_west.0, bounds.south_west.1)?;
    let north_east = viewport.project(bounds.north_east.0, bounds.north_east.1)?;
    let zoom = viewport.zoom()?;

    let scale = 2f64.powf(zoom);
    Some(ScreenPosition {
        x: (point.x - south_west.x) * scale,
        y: (point.y - north_east.y) * scale,
    })
}

#[cfg(test)]
mod tests {
    use crate::map::{GeoBounds, PlanarPoint};

    use super::*;

    /// Viewport stub with a trivial projection: x = lng, y = lat.
    struct StubViewport {
        projection_ready: bool,
        bounds: Option<GeoBounds>,
        zoom: Option<f64>,
    }

    impl StubViewport {
        fn ready() -> Self {
            Self {
                projection_ready: true,
                bounds: Some(GeoBounds {
                    south_west: (6.0, 3.0),
                    north_east: (7.0, 4.0),
                }),
                zoom: Some(2.0),
            }
        }
    }

    impl MapViewport for StubViewport {
        fn project(&self, lat: f64, lng: f64) -> Option<PlanarPoint> {
            self.projection_ready.then_some(PlanarPoint { x: lng, y: lat })
        }

        fn bounds(&self) -> Option<GeoBounds> {
            self.bounds
        }

        fn zoom(&self) -> Option<f64> {
            self.zoom
        }
    }

    fn sample_point() -> GeoPoint {
        GeoPoint {
            lat: 6.5,
            lng: 3.5,
            material: "Plastic".to_string(),
            address: "12 Marina Rd".to_string(),
            weight: Some(10.0),
            lcda: None,
            requester_name: None,
            requester_phone: None,
            schedule_date: None,
        }
    }

    #[test]
    fn screen_position_scales_by_zoom_power() {
        let viewport = StubViewport::ready();
        // scale = 2^2 = 4; x = (3.5 - 3.0) * 4; y = (6.5 - 7.0) * 4
        let pos = screen_position(&viewport, 6.5, 3.5).unwrap();
        assert_eq!(pos.x, 2.0);
        assert_eq!(pos.y, -2.0);
    }

    #[test]
    fn pointer_enter_sets_point_and_position_together() {
        let viewport = StubViewport::ready();
        let mut hover = HoverState::new();
        hover.pointer_enter(&viewport, &sample_point());

        let (point, pos) = hover.hovered().expect("hover should be set");
        assert_eq!(point.material, "Plastic");
        assert_eq!(pos, ScreenPosition { x: 2.0, y: -2.0 });
    }

    #[test]
    fn pointer_leave_clears_both() {
        let viewport = StubViewport::ready();
        let mut hover = HoverState::new();
        hover.pointer_enter(&viewport, &sample_point());
        hover.pointer_leave();
        assert!(hover.hovered().is_none());
    }

    #[test]
    fn no_projection_is_a_noop() {
        let mut viewport = StubViewport::ready();
        viewport.projection_ready = false;
        let mut hover = HoverState::new();
        hover.pointer_enter(&viewport, &sample_point());
        assert!(hover.hovered().is_none());
    }

    #[test]
    fn no_bounds_is_a_noop() {
        let mut viewport = StubViewport::ready();
        viewport.bounds = None;
        let mut hover = HoverState::new();
        hover.pointer_enter(&viewport, &sample_point());
        assert!(hover.hovered().is_none());
    }

    #[test]
    fn no_zoom_is_a_noop() {
        let mut viewport = StubViewport::ready();
        viewport.zoom = None;
        let mut hover = HoverState::new();
        hover.pointer_enter(&viewport, &sample_point());
        assert!(hover.hovered().is_none());
    }

    #[test]
    fn failed_enter_preserves_existing_hover() {
        let viewport = StubViewport::ready();
        let mut hover = HoverState::new();
        hover.pointer_enter(&viewport, &sample_point());

        let mut broken = StubViewport::ready();
        broken.zoom = None;
        let mut other = sample_point();
        other.material = "Metal".to_string();
        hover.pointer_enter(&broken, &other);

        let (point, _) = hover.hovered().expect("earlier hover should survive");
        assert_eq!(point.material, "Plastic");
    }
}

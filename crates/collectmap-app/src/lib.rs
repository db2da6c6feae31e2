//! Event-driven dashboard coordination: filter/selection state machine,
//! hover/tooltip tracking, legend color assignment, and the marker /
//! heat-layer specs handed to the external mapping capability.
//!
//! Nothing in this crate renders. The map engine is an opaque collaborator
//! reached through [`map::MapViewport`]; this crate only decides what it
//! should draw and where tooltips belong.

pub mod hover;
pub mod legend;
pub mod map;
pub mod state;
pub mod tooltip;

pub use hover::{HoverState, ScreenPosition};
pub use legend::{assign_colors, legend_entries, LegendEntry};
pub use map::{
    heat_layer, marker_specs, GeoBounds, HeatLayerSpec, MapViewport, MarkerSpec, PlanarPoint,
};
pub use state::{DashboardState, Effect, Event, FetchSpec, FilterState, LoadPhase, MapStatus};
pub use tooltip::TooltipContent;

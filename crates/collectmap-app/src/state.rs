//! The dashboard's filter/selection state machine.
//!
//! Every UI and network callback is an [`Event`]; [`DashboardState::apply`]
//! is the single transition function, returning the [`Effect`]s the caller
//! must execute (currently only fetches). Transitions never perform I/O
//! themselves, which keeps the whole machine testable without a network.
//!
//! Rapid repeated fetches are not sequenced: responses apply in arrival
//! order and the last one wins, matching the accepted stale-result race of
//! the in-flight, non-cancelable fetch design.

use std::collections::HashMap;

use collectmap_core::{Category, DateRange, GeoPoint, HslColor};

use crate::legend::assign_colors;

/// Where the current (or most recent) fetch stands.
///
/// `Error` preserves the previously loaded point set; failed fetches never
/// clear existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Lifecycle of the external map engine.
///
/// `Failed` is terminal: the UI degrades to a static error and every
/// subsequent event is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStatus {
    Loading,
    Ready,
    Failed,
}

/// Active date range and single-select category filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub range: DateRange,
    /// `None` means all categories.
    pub selected_category: Option<String>,
}

/// A discrete UI or network callback.
#[derive(Debug, Clone)]
pub enum Event {
    /// A legend/category chip was clicked.
    CategoryClicked(String),
    /// The explicit filter button was pressed.
    FilterSubmitted,
    /// A date input changed. Does not fetch on its own; the filter button
    /// confirms.
    StartDateChanged(chrono::NaiveDate),
    EndDateChanged(chrono::NaiveDate),
    LegendToggled,
    /// The category list finished loading.
    CategoriesLoaded(Vec<Category>),
    /// A transactions fetch completed.
    FetchSucceeded(Vec<GeoPoint>),
    FetchFailed(String),
    MapLoaded,
    MapTilesLoaded,
    MapLoadFailed,
}

/// Parameters for a fetch the caller must run.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSpec {
    pub range: DateRange,
    pub category: Option<String>,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(FetchSpec),
}

/// The centrally owned dashboard state.
#[derive(Debug)]
pub struct DashboardState {
    pub filter: FilterState,
    pub phase: LoadPhase,
    pub points: Vec<GeoPoint>,
    pub categories: Vec<Category>,
    pub colors: HashMap<String, HslColor>,
    pub legend_open: bool,
    pub map_status: MapStatus,
    pub tiles_loaded: bool,
}

impl DashboardState {
    #[must_use]
    pub fn new(range: DateRange) -> Self {
        Self {
            filter: FilterState {
                range,
                selected_category: None,
            },
            phase: LoadPhase::Idle,
            points: Vec::new(),
            categories: Vec::new(),
            colors: HashMap::new(),
            legend_open: false,
            map_status: MapStatus::Loading,
            tiles_loaded: false,
        }
    }

    /// Applies one event and returns the effects to execute.
    ///
    /// Once the map engine has failed to load, every event is a no-op.
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        if self.map_status == MapStatus::Failed {
            return Vec::new();
        }

        match event {
            Event::CategoryClicked(name) => {
                // Clicking the selected category deselects it (back to
                // "all"); clicking another selects it. Either way a fetch
                // starts and the legend force-closes.
                if self.filter.selected_category.as_deref() == Some(name.as_str()) {
                    self.filter.selected_category = None;
                } else {
                    self.filter.selected_category = Some(name);
                }
                self.legend_open = false;
                self.start_fetch()
            }
            Event::FilterSubmitted => {
                // Explicit refetch with whatever is currently set. Unlike a
                // category click, the legend stays as it is.
                self.start_fetch()
            }
            Event::StartDateChanged(date) => {
                self.filter.range.start = date;
                Vec::new()
            }
            Event::EndDateChanged(date) => {
                self.filter.range.end = date;
                Vec::new()
            }
            Event::LegendToggled => {
                self.legend_open = !self.legend_open;
                Vec::new()
            }
            Event::CategoriesLoaded(categories) => {
                self.colors = assign_colors(&categories);
                self.categories = categories;
                Vec::new()
            }
            Event::FetchSucceeded(points) => {
                // Wholesale replacement; no merge with the previous set.
                self.points = points;
                self.phase = LoadPhase::Loaded;
                Vec::new()
            }
            Event::FetchFailed(reason) => {
                tracing::warn!(%reason, "transactions fetch failed; keeping previous point set");
                self.phase = LoadPhase::Error;
                Vec::new()
            }
            Event::MapLoaded => {
                self.map_status = MapStatus::Ready;
                Vec::new()
            }
            Event::MapTilesLoaded => {
                self.tiles_loaded = true;
                Vec::new()
            }
            Event::MapLoadFailed => {
                tracing::error!("map engine failed to load; dashboard is inert");
                self.map_status = MapStatus::Failed;
                Vec::new()
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    fn start_fetch(&mut self) -> Vec<Effect> {
        self.phase = LoadPhase::Loading;
        vec![Effect::Fetch(FetchSpec {
            range: self.filter.range,
            category: self.filter.selected_category.clone(),
        })]
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

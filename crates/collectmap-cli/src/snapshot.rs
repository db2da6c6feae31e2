//! One-shot fetch cycle driving the dashboard state machine.
//!
//! This is the same event flow the interactive dashboard runs — categories
//! load, a filter event starts a fetch, the response (or failure) applies
//! back onto the state — executed once and summarized to stdout. Fetch
//! failures are logged and leave previously loaded data alone, so a failed
//! snapshot still reports whatever state survived.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use collectmap_app::{
    heat_layer, legend_entries, marker_specs, DashboardState, Effect, Event, FetchSpec,
};
use collectmap_client::{CollectorClient, TransactionQuery};
use collectmap_core::{AppConfig, DateRange};

pub(crate) async fn run_snapshot(
    config: &AppConfig,
    start: NaiveDate,
    end: NaiveDate,
    region: Option<&str>,
    category: Option<&str>,
) -> anyhow::Result<()> {
    let client = CollectorClient::new(
        &config.collector_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build collector client: {e}"))?;

    let region = region.unwrap_or(&config.region);
    let mut state = DashboardState::new(DateRange::new(start, end));
    state.apply(Event::MapLoaded);

    // Category list failure is non-fatal: the heatmap still renders, only
    // legend colors fall back.
    match client.fetch_categories().await {
        Ok(categories) => {
            state.apply(Event::CategoriesLoaded(categories));
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load category list; legend will be empty");
        }
    }

    let effects = match category {
        Some(name) => state.apply(Event::CategoryClicked(name.to_string())),
        None => state.apply(Event::FilterSubmitted),
    };

    for effect in effects {
        let Effect::Fetch(spec) = effect;
        execute_fetch(&client, config, region, spec, &mut state).await;
    }

    print_summary(&state);
    Ok(())
}

/// Runs one fetch effect and applies the outcome back onto the state.
async fn execute_fetch(
    client: &CollectorClient,
    config: &AppConfig,
    region: &str,
    spec: FetchSpec,
    state: &mut DashboardState,
) {
    let query = TransactionQuery {
        range: spec.range,
        region: region.to_string(),
        category: spec.category,
        min_weight: config.min_weight,
        max_weight: config.max_weight,
    };

    match client.fetch_transactions(&query).await {
        Ok(points) => {
            state.apply(Event::FetchSucceeded(points));
        }
        Err(e) => {
            state.apply(Event::FetchFailed(e.to_string()));
        }
    }
}

fn print_summary(state: &DashboardState) {
    println!("phase: {:?}", state.phase);
    println!("points: {}", state.points.len());

    let mut per_material: BTreeMap<&str, usize> = BTreeMap::new();
    for point in &state.points {
        *per_material.entry(point.material.as_str()).or_default() += 1;
    }
    for (material, count) in &per_material {
        println!("  {material}: {count}");
    }

    let entries = legend_entries(&state.categories);
    println!("legend ({} categories):", entries.len());
    for entry in &entries {
        println!("  {} {}", entry.color, entry.name);
    }

    let markers = marker_specs(&state.points, &state.colors);
    println!("markers: {}", markers.len());
    match heat_layer(&state.points) {
        Some(layer) => println!(
            "heat layer: {} points, radius {}, opacity {}",
            layer.points.len(),
            layer.radius,
            layer.opacity
        ),
        None => println!("heat layer: none (no points)"),
    }
}

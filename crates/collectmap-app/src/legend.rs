//! Category → color assignment and legend entries.
//!
//! Categories without a name are filtered out BEFORE the palette is
//! generated, so the palette size matches the named-category count and
//! colors stay dense and aligned with the filtered list. Two categories
//! sharing a name collapse to one map entry with the later occurrence's
//! color — defined last-write-wins behavior, not an error.

use std::collections::HashMap;

use collectmap_core::{generate_colors, Category, HslColor};

/// One legend row: swatch color plus category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub name: String,
    pub color: HslColor,
}

/// Builds the material-name → color map for the current category list.
///
/// Recomputed whenever the category list changes; colors are not stable
/// across lists of different lengths.
#[must_use]
pub fn assign_colors(categories: &[Category]) -> HashMap<String, HslColor> {
    let named: Vec<&str> = categories
        .iter()
        .map(|c| c.name.as_str())
        .filter(|name| !name.is_empty())
        .collect();

    let palette = generate_colors(named.len());
    named
        .into_iter()
        .zip(palette)
        .map(|(name, color)| (name.to_string(), color))
        .collect()
}

/// Legend rows in palette order, one per distinct name.
///
/// Order follows each name's first occurrence; the color is the final one
/// from [`assign_colors`] (i.e. the last occurrence's palette slot when a
/// name repeats).
#[must_use]
pub fn legend_entries(categories: &[Category]) -> Vec<LegendEntry> {
    let colors = assign_colors(categories);
    let mut seen: Vec<&str> = Vec::new();
    let mut entries = Vec::new();

    for category in categories {
        let name = category.name.as_str();
        if name.is_empty() || seen.contains(&name) {
            continue;
        }
        seen.push(name);
        if let Some(color) = colors.get(name) {
            entries.push(LegendEntry {
                name: name.to_string(),
                color: *color,
            });
        }
    }

    entries
}

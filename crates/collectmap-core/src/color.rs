//! Evenly spaced HSL palette generation for category colors.
//!
//! The palette is a pure function of the category count: hues are spread
//! around the full color wheel at fixed saturation and lightness, so the
//! same count always yields the same sequence. Colors are recomputed
//! whenever the category list changes; no color is stable across two
//! different counts.

use std::fmt;

/// Saturation applied to every generated color, in percent.
const SATURATION: u16 = 70;

/// Lightness applied to every generated color, in percent.
const LIGHTNESS: u16 = 50;

/// A CSS HSL color with integer components.
///
/// Renders as `hsl(H,S%,L%)`, the exact string the legend and marker fills
/// consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HslColor {
    pub hue: u16,
    pub saturation: u16,
    pub lightness: u16,
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Generates `count` visually distinct colors.
///
/// Hue for index `i` is `floor(360 * i / count)`, so hues are strictly
/// increasing in index order and the first color always has hue 0.
/// `count == 0` returns an empty palette (the division is never reached).
#[must_use]
pub fn generate_colors(count: usize) -> Vec<HslColor> {
    (0..count)
        .map(|i| HslColor {
            // Integer arithmetic gives the floor directly; count is nonzero
            // inside the range.
            hue: u16::try_from(360 * i / count).unwrap_or(359),
            saturation: SATURATION,
            lightness: LIGHTNESS,
        })
        .collect()
}

//! Color math (C1): sRGB<->linear, RGB<->HSL, RGB<->XYZ<->LAB, WCAG
//! luminance, Delta-E 76/94, hue arithmetic, alpha handling.
//!
//! Every function here is pure and allocation-free. Nothing in this
//! module holds a cache — `auto_theme::PaletteColor` memoized HSL and
//! luminance behind per-instance state; here the values are recomputed
//! on construction for cluster representatives (the hot path), leaving
//! one-off memoization to the caller for individual colors.

mod hsla;
mod lab;
mod luminance;
mod rgba;

pub use hsla::{hsl_to_rgb, rgb_to_hsl, HSLA};
pub use lab::{delta_e_76, delta_e_94, rgb_to_lab, LAB};
pub use luminance::{contrast_ratio, linearize, relative_luminance};
pub use rgba::RGBA;

/// Circular distance between two hues normalized to `[0, 1)`.
///
/// Returns `min(|h1 - h2|, 1 - |h1 - h2|)`, i.e. distance the short way
/// around the color wheel.
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let delta = (h1 - h2).abs();
    delta.min(1.0 - delta)
}

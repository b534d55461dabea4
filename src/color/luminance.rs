//! WCAG relative luminance and contrast ratio.

use super::rgba::RGBA;

/// sRGB channel (0-255) -> linear-light value.
///
/// `c/12.92` when `c/255 <= 0.03928`, else `((c/255 + 0.055) / 1.055)^2.4`.
pub fn linearize(c8: u8) -> f64 {
    let c = c8 as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance: `0.2126*R' + 0.7152*G' + 0.0722*B'`, linearized.
pub fn relative_luminance(rgb: RGBA) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio: `(Lmax + 0.05) / (Lmin + 0.05)`, result in `[1, 21]`.
pub fn contrast_ratio(a: RGBA, b: RGBA) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lmax, lmin) = if la >= lb { (la, lb) } else { (lb, la) };
    (lmax + 0.05) / (lmin + 0.05)
}

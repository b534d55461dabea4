//! sRGB -> linear -> XYZ -> CIE LAB (D65 illuminant), and Delta-E 76/94.
//!
//! Grounded on the LAB-space dominant-color reduction shown by the
//! `elliotekj-distil` and `al-siv-color-rs` reference examples, but
//! hand-rolled (no `palette`/`lab` crate) to keep exact control over
//! thresholds and constants, matching this codebase's posture of
//! hand-rolling color math rather than depending on an external
//! color-science crate.

use super::luminance::linearize;
use super::rgba::RGBA;

/// D65 white point.
const XN: f64 = 0.95047;
const YN: f64 = 1.0;
const ZN: f64 = 1.08883;

const LAB_EPSILON: f64 = 0.008856;
const LAB_KAPPA: f64 = 903.3;

/// `L* in [0, 100], a*, b* approximately in [-128, 127]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LAB {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LAB {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

fn srgb_to_xyz(rgb: RGBA) -> (f64, f64, f64) {
    let r = linearize(rgb.r);
    let g = linearize(rgb.g);
    let b = linearize(rgb.b);

    // sRGB D65 linear -> XYZ matrix.
    let x = r * 0.4124564 + g * 0.3575761 + b * 0.1804375;
    let y = r * 0.2126729 + g * 0.7151522 + b * 0.0721750;
    let z = r * 0.0193339 + g * 0.1191920 + b * 0.9503041;
    (x, y, z)
}

fn lab_transform(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

/// sRGB -> linear -> XYZ -> LAB (D65), via the CIE piecewise transform.
pub fn rgb_to_lab(rgb: RGBA) -> LAB {
    let (x, y, z) = srgb_to_xyz(rgb);

    let fx = lab_transform(x / XN);
    let fy = lab_transform(y / YN);
    let fz = lab_transform(z / ZN);

    LAB::new(
        116.0 * fy - 16.0,
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    )
}

/// Delta-E CIE76: Euclidean distance in LAB space.
pub fn delta_e_76(a: LAB, b: LAB) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Delta-E CIE94, kL = kC = kH = 1, k1 = 0.045, k2 = 0.015. `dH` is
/// computed as `sqrt(max(0, da^2 + db^2 - dC^2))` to avoid NaN from a
/// negative radicand under floating-point rounding.
pub fn delta_e_94(a: LAB, b: LAB) -> f64 {
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let dl = a.l - b.l;
    let c1 = (a.a * a.a + a.b * a.b).sqrt();
    let c2 = (b.a * b.a + b.b * b.b).sqrt();
    let dc = c1 - c2;
    let da = a.a - b.a;
    let db = a.b - b.b;
    let dh = (da * da + db * db - dc * dc).max(0.0).sqrt();

    let sl = 1.0;
    let sc = 1.0 + K1 * c1;
    let sh = 1.0 + K2 * c1;

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh / sh;

    (tl * tl + tc * tc + th * th).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_has_zero_lightness() {
        let lab = rgb_to_lab(RGBA::opaque(0, 0, 0));
        assert!(lab.l.abs() < 1e-6);
    }

    #[test]
    fn white_has_full_lightness() {
        let lab = rgb_to_lab(RGBA::opaque(255, 255, 255));
        assert!((lab.l - 100.0).abs() < 1e-3);
    }

    #[test]
    fn identical_colors_have_zero_distance() {
        let lab = rgb_to_lab(RGBA::opaque(120, 60, 200));
        assert!(delta_e_76(lab, lab).abs() < 1e-9);
        assert!(delta_e_94(lab, lab).abs() < 1e-9);
    }

    #[test]
    fn black_white_distance_is_large() {
        let black = rgb_to_lab(RGBA::opaque(0, 0, 0));
        let white = rgb_to_lab(RGBA::opaque(255, 255, 255));
        assert!(delta_e_76(black, white) > 50.0);
    }

    #[quickcheck_macros::quickcheck]
    fn delta_e_94_never_nan(r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8) -> bool {
        let a = rgb_to_lab(RGBA::opaque(r1, g1, b1));
        let b = rgb_to_lab(RGBA::opaque(r2, g2, b2));
        !delta_e_94(a, b).is_nan()
    }
}

//! HSLA: hue/saturation/lightness/alpha. H normalized to `[0, 1)`
//! (multiply by 360 for degrees); S, L, A in `[0, 1]`. Conversion follows
//! the CSS Color Module Level 3 max/min/delta construction.

use serde::{Deserialize, Serialize};

use super::rgba::RGBA;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HSLA {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl HSLA {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

/// CSS L3 RGB -> HSL. When max == min, H = 0, S = 0. H is returned in
/// `[0, 1)` — the divide-by-6 normalization happens after the 6-sector
/// hue assignment, matching the degrees-then-normalize order the CSS
/// Color Module Level 3 algorithm describes.
pub fn rgb_to_hsl(c: RGBA) -> HSLA {
    let r = c.r as f64 / 255.0;
    let g = c.g as f64 / 255.0;
    let b = c.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return HSLA::new(0.0, 0.0, l, c.alpha_float());
    }

    let s = if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut h_deg = if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h_deg *= 60.0;
    if h_deg < 0.0 {
        h_deg += 360.0;
    }

    HSLA::new(h_deg / 360.0, s, l, c.alpha_float())
}

/// CSS L3 HSL -> RGB. When S == 0, R = G = B = round(L * 255). RGB
/// channels are otherwise produced by clamp-to-`[0,1]` then
/// multiply-by-255 then *truncate* (not round) — a deliberate
/// rounding-convention choice, kept distinct from the `s == 0`
/// fast path above which does round.
pub fn hsl_to_rgb(hsla: HSLA) -> RGBA {
    let h = hsla.h.rem_euclid(1.0);
    let s = hsla.s.clamp(0.0, 1.0);
    let l = hsla.l.clamp(0.0, 1.0);

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return RGBA::new(v, v, v, super::rgba::alpha_byte(hsla.a));
    }

    let h_deg = h * 360.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h_deg / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h_prime as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let truncate_channel = |v: f64| -> u8 {
        let scaled = ((v + m).clamp(0.0, 1.0)) * 255.0;
        scaled as u8
    };

    RGBA::new(
        truncate_channel(r1),
        truncate_channel(g1),
        truncate_channel(b1),
        super::rgba::alpha_byte(hsla.a),
    )
}

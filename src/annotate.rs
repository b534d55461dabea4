//! Characteristic annotator (C5): computes HSL once per cluster and
//! derives the neutral/dark/light/muted/vibrant flags as a pure
//! function of (h, s, l). Flags are not mutually exclusive.

use serde::{Deserialize, Serialize};

use crate::cluster::RawCluster;
use crate::color::{rgb_to_hsl, RGBA};
use crate::settings::Settings;

/// Boolean theme-suitability flags derived from a cluster's HSL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterFlags {
    pub neutral: bool,
    pub dark: bool,
    pub light: bool,
    pub muted: bool,
    pub vibrant: bool,
}

/// A perceptually coherent cluster annotated with its HSL and
/// theme-suitability flags.
///
/// Invariant: `h`, `s`, `l` match `rgb_to_hsl(representative)`, within
/// float tolerance; `flags` is a pure function of `(h, s, l)` alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorCluster {
    pub rgba: RGBA,
    pub weight: f64,
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub flags: ClusterFlags,
}

/// Compute HSL once per raw cluster and derive its flags.
pub fn annotate(clusters: &[RawCluster], settings: &Settings) -> Vec<ColorCluster> {
    let chromatic = settings.chromatic();

    clusters
        .iter()
        .map(|c| {
            let hsla = rgb_to_hsl(c.representative);
            let neutral = hsla.s < chromatic.neutral_threshold;
            let flags = ClusterFlags {
                neutral,
                dark: hsla.l < chromatic.dark_lightness_max,
                light: hsla.l > chromatic.light_lightness_min,
                muted: hsla.s < chromatic.muted_saturation_max && !neutral,
                vibrant: hsla.s > chromatic.vibrant_saturation_min,
            };

            ColorCluster {
                rgba: c.representative,
                weight: c.weight,
                h: hsla.h,
                s: hsla.s,
                l: hsla.l,
                flags,
            }
        })
        .collect()
}

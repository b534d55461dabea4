//! Top-level orchestration: pixel source -> C2 -> C3 -> C4 -> C5 -> C6
//! -> C7 -> [`ColorProfile`]. `Settings` is injected at construction and
//! never mutated; each call owns its own intermediate containers, so a
//! caller may run many profiler calls concurrently across threads
//! without any locking in this crate.

use serde::{Deserialize, Serialize};

use crate::annotate::{self, ColorCluster};
use crate::classify::{self, Mode};
use crate::cluster;
use crate::error::ProfileError;
use crate::filter;
use crate::frequency;
use crate::pixel_source::PixelSource;
use crate::settings::Settings;
use crate::weighted;

/// The single long-lived artifact this crate produces: a compact,
/// theme-ready color profile.
///
/// Invariant: `colors` is non-empty unless the pixel source yielded
/// zero pixels, in which case [`ProfileError::EmptyImage`] is raised
/// instead of an empty profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorProfile {
    pub mode: Mode,
    pub colors: Vec<ColorCluster>,
    pub has_color: bool,
    pub color_count: usize,
}

/// Run the full pipeline over `source` with `settings`.
pub fn build_profile(source: &impl PixelSource, settings: &Settings) -> Result<ColorProfile, ProfileError> {
    let (frequency_map, total_pixels) = frequency::accumulate(source)?;

    let weighted_colors = weighted::weighted_colors(&frequency_map, total_pixels, settings);
    let raw_clusters = cluster::cluster(&weighted_colors, settings);
    let annotated = annotate::annotate(&raw_clusters, settings);
    let filtered = filter::filter(&annotated, settings);

    let classification = classify::classify(&filtered, settings);

    log::info!(
        "profile built: mode={:?} colors={} has_color={}",
        classification.mode,
        classification.color_count,
        classification.has_color
    );

    Ok(ColorProfile {
        mode: classification.mode,
        colors: filtered,
        has_color: classification.has_color,
        color_count: classification.color_count,
    })
}

/// A convenience wrapper bundling a `Settings` value with the pipeline
/// entry point, for callers that process many images with the same
/// configuration. `Profiler` is cheap to clone and safe to share
/// read-only across threads.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    settings: Settings,
}

impl Profiler {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build a [`ColorProfile`] for `source` using this profiler's settings.
    pub fn profile(&self, source: &impl PixelSource) -> Result<ColorProfile, ProfileError> {
        build_profile(source, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_source::RgbaBuffer;

    fn solid(width: u32, height: u32, r: u8, g: u8, b: u8) -> Vec<u8> {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width * height) {
            data.extend_from_slice(&[r, g, b, 255]);
        }
        data
    }

    #[test]
    fn uniform_red_image_yields_one_vibrant_light_cluster() {
        let data = solid(2, 2, 255, 0, 0);
        let source = RgbaBuffer::tightly_packed(2, 2, &data);
        let profile = build_profile(&source, &Settings::default()).unwrap();

        assert_eq!(profile.colors.len(), 1);
        assert_eq!(profile.colors[0].rgba.packed_rgb(), 0xFF0000);
        assert!((profile.colors[0].weight - 1.0).abs() < 1e-9);
        assert!(!profile.colors[0].flags.dark);
        assert!(!profile.colors[0].flags.light);
        assert!(profile.colors[0].flags.vibrant);
        assert_eq!(profile.mode, Mode::Light); // L=0.5, inclusive boundary
        assert!(profile.has_color);
    }

    #[test]
    fn checkerboard_black_white_splits_evenly() {
        let mut data = Vec::new();
        data.extend_from_slice(&[255, 255, 255, 255]);
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(&[0, 0, 0, 0]);
        data.extend_from_slice(&[255, 255, 255, 255]);
        let source = RgbaBuffer::tightly_packed(2, 2, &data);
        let profile = build_profile(&source, &Settings::default()).unwrap();

        assert_eq!(profile.colors.len(), 2);
        for c in &profile.colors {
            assert!((c.weight - 0.5).abs() < 1e-9);
        }
        assert_eq!(profile.mode, Mode::Light); // L=0.5, inclusive boundary
        assert!(!profile.has_color); // both clusters are neutral
    }

    #[test]
    fn five_equal_primaries_produce_five_clusters() {
        let colors = [
            (0u8, 0u8, 0u8),
            (255, 255, 255),
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
        ];
        let mut data = Vec::new();
        // 5 pixels wide x 1 tall, one of each color (20% each).
        for (r, g, b) in colors {
            data.extend_from_slice(&[r, g, b, 255]);
        }
        let source = RgbaBuffer::tightly_packed(5, 1, &data);
        let profile = build_profile(&source, &Settings::default()).unwrap();

        assert_eq!(profile.colors.len(), 5);
        for c in &profile.colors {
            assert!((c.weight - 0.2).abs() < 1e-9);
        }
        assert!(profile.has_color);
    }

    #[test]
    fn empty_source_is_an_error_not_an_empty_profile() {
        let data: [u8; 0] = [];
        let source = RgbaBuffer::tightly_packed(0, 0, &data);
        let result = build_profile(&source, &Settings::default());
        assert!(matches!(result, Err(ProfileError::EmptyImage)));
    }

    #[test]
    fn profiler_is_reusable_across_multiple_images() {
        let profiler = Profiler::new(Settings::default());
        let red = solid(1, 1, 255, 0, 0);
        let blue = solid(1, 1, 0, 0, 255);

        let red_source = RgbaBuffer::tightly_packed(1, 1, &red);
        let blue_source = RgbaBuffer::tightly_packed(1, 1, &blue);

        let red_profile = profiler.profile(&red_source).unwrap();
        let blue_profile = profiler.profile(&blue_source).unwrap();

        assert_eq!(red_profile.colors[0].rgba.packed_rgb(), 0xFF0000);
        assert_eq!(blue_profile.colors[0].rgba.packed_rgb(), 0x0000FF);
    }

    #[test]
    fn determinism_same_input_same_output() {
        let data = solid(4, 4, 10, 20, 30);
        let source = RgbaBuffer::tightly_packed(4, 4, &data);
        let settings = Settings::default();
        let a = build_profile(&source, &settings).unwrap();
        let b = build_profile(&source, &settings).unwrap();
        assert_eq!(a, b);
    }
}

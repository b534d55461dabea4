//! The settings façade (C8): a frozen, read-only parameter bundle
//! consumed by every other component. Never mutated during processing.
//!
//! Internally `Settings` is a flat value; `loader()`, `formats()`,
//! `chromatic()`, and `processor()` are grouped, by-value views over it
//! so call sites read `settings.chromatic().color_merge_threshold`
//! instead of a long flat field name.

use serde::{Deserialize, Serialize};

fn default_allowed_formats() -> Vec<String> {
    vec!["jpeg".into(), "jpg".into(), "png".into(), "webp".into()]
}

fn default_dark_hex() -> String {
    "#1a1a1a".into()
}

fn default_light_hex() -> String {
    "#f0f0f0".into()
}

fn default_gray_hex() -> String {
    "#808080".into()
}

/// Immutable settings consumed by every pipeline stage. Construct with
/// [`Settings::default`] and override individual fields, or deserialize
/// a host's config overlay directly (the container-level `#[serde(default)]`
/// means a partial TOML/JSON document overlays cleanly onto the
/// built-in defaults, field by field).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ── loader.* ──────────────────────────────────────────────────────
    pub loader_max_width: u32,
    pub loader_max_height: u32,
    pub loader_allowed_formats: Vec<String>,

    // ── formats.* ─────────────────────────────────────────────────────
    /// Reserved for color-quantization use; not consumed by this crate's
    /// pipeline today.
    pub formats_quantization_bits: u32,

    // ── chromatic.* ───────────────────────────────────────────────────
    pub chromatic_color_merge_threshold: f64,
    pub chromatic_neutral_threshold: f64,
    pub chromatic_neutral_lightness_threshold: f64,
    pub chromatic_dark_lightness_max: f64,
    pub chromatic_light_lightness_min: f64,
    pub chromatic_muted_saturation_max: f64,
    pub chromatic_vibrant_saturation_min: f64,

    // ── processor.* ───────────────────────────────────────────────────
    pub processor_min_frequency: f64,
    pub processor_max_colors_to_extract: usize,
    pub processor_min_cluster_weight: f64,
    pub processor_min_ui_color_weight: f64,
    pub processor_max_ui_colors: usize,
    pub processor_pure_black_threshold: f64,
    pub processor_pure_white_threshold: f64,
    pub processor_light_theme_threshold: f64,
    pub processor_theme_mode_max_clusters: usize,
    pub processor_significant_color_threshold: f64,

    // ── fallback hex strings ─────────────────────────────────────────
    pub default_dark: String,
    pub default_light: String,
    pub default_gray: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            loader_max_width: 8192,
            loader_max_height: 8192,
            loader_allowed_formats: default_allowed_formats(),

            formats_quantization_bits: 5,

            chromatic_color_merge_threshold: 15.0,
            chromatic_neutral_threshold: 0.10,
            chromatic_neutral_lightness_threshold: 0.08,
            chromatic_dark_lightness_max: 0.30,
            chromatic_light_lightness_min: 0.70,
            chromatic_muted_saturation_max: 0.30,
            chromatic_vibrant_saturation_min: 0.70,

            processor_min_frequency: 0.0001,
            processor_max_colors_to_extract: 100_000,
            processor_min_cluster_weight: 0.005,
            processor_min_ui_color_weight: 0.01,
            processor_max_ui_colors: 20,
            processor_pure_black_threshold: 0.01,
            processor_pure_white_threshold: 0.99,
            processor_light_theme_threshold: 0.50,
            processor_theme_mode_max_clusters: 5,
            processor_significant_color_threshold: 0.10,

            default_dark: default_dark_hex(),
            default_light: default_light_hex(),
            default_gray: default_gray_hex(),
        }
    }
}

/// `loader.*` group.
#[derive(Debug, Clone, Copy)]
pub struct LoaderSettings<'a> {
    pub max_width: u32,
    pub max_height: u32,
    pub allowed_formats: &'a [String],
}

/// `formats.*` group.
#[derive(Debug, Clone, Copy)]
pub struct FormatSettings {
    pub quantization_bits: u32,
}

/// `chromatic.*` group.
#[derive(Debug, Clone, Copy)]
pub struct ChromaticSettings {
    pub color_merge_threshold: f64,
    pub neutral_threshold: f64,
    pub neutral_lightness_threshold: f64,
    pub dark_lightness_max: f64,
    pub light_lightness_min: f64,
    pub muted_saturation_max: f64,
    pub vibrant_saturation_min: f64,
}

/// `processor.*` group.
#[derive(Debug, Clone, Copy)]
pub struct ProcessorSettings {
    pub min_frequency: f64,
    pub max_colors_to_extract: usize,
    pub min_cluster_weight: f64,
    pub min_ui_color_weight: f64,
    pub max_ui_colors: usize,
    pub pure_black_threshold: f64,
    pub pure_white_threshold: f64,
    pub light_theme_threshold: f64,
    pub theme_mode_max_clusters: usize,
    pub significant_color_threshold: f64,
}

impl Settings {
    pub fn loader(&self) -> LoaderSettings<'_> {
        LoaderSettings {
            max_width: self.loader_max_width,
            max_height: self.loader_max_height,
            allowed_formats: &self.loader_allowed_formats,
        }
    }

    pub fn formats(&self) -> FormatSettings {
        FormatSettings {
            quantization_bits: self.formats_quantization_bits,
        }
    }

    pub fn chromatic(&self) -> ChromaticSettings {
        ChromaticSettings {
            color_merge_threshold: self.chromatic_color_merge_threshold,
            neutral_threshold: self.chromatic_neutral_threshold,
            neutral_lightness_threshold: self.chromatic_neutral_lightness_threshold,
            dark_lightness_max: self.chromatic_dark_lightness_max,
            light_lightness_min: self.chromatic_light_lightness_min,
            muted_saturation_max: self.chromatic_muted_saturation_max,
            vibrant_saturation_min: self.chromatic_vibrant_saturation_min,
        }
    }

    pub fn processor(&self) -> ProcessorSettings {
        ProcessorSettings {
            min_frequency: self.processor_min_frequency,
            max_colors_to_extract: self.processor_max_colors_to_extract,
            min_cluster_weight: self.processor_min_cluster_weight,
            min_ui_color_weight: self.processor_min_ui_color_weight,
            max_ui_colors: self.processor_max_ui_colors,
            pure_black_threshold: self.processor_pure_black_threshold,
            pure_white_threshold: self.processor_pure_white_threshold,
            light_theme_threshold: self.processor_light_theme_threshold,
            theme_mode_max_clusters: self.processor_theme_mode_max_clusters,
            significant_color_threshold: self.processor_significant_color_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let s = Settings::default();
        assert_eq!(s.loader_max_width, 8192);
        assert_eq!(s.loader_max_height, 8192);
        assert_eq!(s.chromatic_color_merge_threshold, 15.0);
        assert_eq!(s.processor_max_ui_colors, 20);
        assert_eq!(s.default_dark, "#1a1a1a");
        assert_eq!(s.default_light, "#f0f0f0");
        assert_eq!(s.default_gray, "#808080");
    }

    #[test]
    fn partial_json_overlay_keeps_other_defaults() {
        let overlay: Settings = serde_json::from_str(
            r#"{"processor_max_ui_colors": 8}"#,
        )
        .unwrap();
        assert_eq!(overlay.processor_max_ui_colors, 8);
        assert_eq!(overlay.chromatic_color_merge_threshold, 15.0);
    }
}

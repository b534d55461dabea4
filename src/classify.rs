//! Profile classifier (C7): derives the overall mode (light/dark),
//! `has_color`, and `color_count` from the final cluster list.

use serde::{Deserialize, Serialize};

use crate::annotate::ColorCluster;
use crate::settings::Settings;

/// Overall light/dark classification of a [`crate::ColorProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Light,
    Dark,
}

/// Derived aggregate classification of a cluster list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub mode: Mode,
    pub has_color: bool,
    pub color_count: usize,
}

/// Classify a finalized cluster list (post-C6 filtering).
///
/// `mode` is Light iff the weighted-average lightness of the top
/// `processor.theme_mode_max_clusters` clusters is `>=
/// processor.light_theme_threshold` (inclusive boundary). `has_color` is
/// true iff the summed weight of non-neutral clusters is *strictly*
/// greater than `processor.significant_color_threshold`.
pub fn classify(clusters: &[ColorCluster], settings: &Settings) -> Classification {
    let proc = settings.processor();

    let top_n = &clusters[..clusters.len().min(proc.theme_mode_max_clusters)];
    let mean_lightness = top_n.iter().map(|c| c.weight * c.l).sum::<f64>();

    let mode = if mean_lightness >= proc.light_theme_threshold {
        Mode::Light
    } else {
        Mode::Dark
    };

    let colorful_weight: f64 = clusters
        .iter()
        .filter(|c| !c.flags.neutral)
        .map(|c| c.weight)
        .sum();
    let has_color = colorful_weight > proc.significant_color_threshold;

    Classification {
        mode,
        has_color,
        color_count: clusters.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::ClusterFlags;
    use crate::color::RGBA;

    fn cluster(weight: f64, l: f64, neutral: bool) -> ColorCluster {
        ColorCluster {
            rgba: RGBA::opaque(0, 0, 0),
            weight,
            h: 0.0,
            s: if neutral { 0.0 } else { 1.0 },
            l,
            flags: ClusterFlags {
                neutral,
                dark: l < 0.3,
                light: l > 0.7,
                muted: false,
                vibrant: !neutral,
            },
        }
    }

    #[test]
    fn mode_boundary_is_inclusive() {
        let clusters = vec![cluster(1.0, 0.50, true)];
        let result = classify(&clusters, &Settings::default());
        assert_eq!(result.mode, Mode::Light);
    }

    #[test]
    fn has_color_boundary_is_strict() {
        let clusters = vec![
            cluster(0.10, 0.2, false), // non-neutral weight exactly at threshold
            cluster(0.90, 0.5, true),
        ];
        let result = classify(&clusters, &Settings::default());
        assert!(!result.has_color);
    }

    #[test]
    fn has_color_true_when_strictly_over_threshold() {
        let clusters = vec![
            cluster(0.11, 0.2, false),
            cluster(0.89, 0.5, true),
        ];
        let result = classify(&clusters, &Settings::default());
        assert!(result.has_color);
    }

    #[test]
    fn mode_only_considers_top_n_clusters() {
        let mut settings = Settings::default();
        settings.processor_theme_mode_max_clusters = 1;
        // Heaviest cluster alone is dark; a lighter one further down
        // should not be able to flip the mode.
        let clusters = vec![cluster(0.6, 0.1, true), cluster(0.4, 0.9, true)];
        let result = classify(&clusters, &settings);
        assert_eq!(result.mode, Mode::Dark);
    }
}

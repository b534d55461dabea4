//! Theme-suitability filter (C6): drop clusters unsuitable for UI use,
//! in a fixed order, each step preserving descending-weight order. The
//! filter guarantees at least one cluster survives whenever the input
//! had any, and protects at least one dark and one light representative
//! when the input supplied them, even across the pure-black/white and
//! duplicate-collapse steps.

use crate::annotate::ColorCluster;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Neutral,
    Muted,
    Vibrant,
    Normal,
}

fn band_of(c: &ColorCluster) -> Band {
    if c.flags.neutral {
        Band::Neutral
    } else if c.flags.vibrant {
        Band::Vibrant
    } else if c.flags.muted {
        Band::Muted
    } else {
        Band::Normal
    }
}

/// Apply the four filter steps in order and return the final,
/// descending-weight ordered cluster list.
pub fn filter(clusters: &[ColorCluster], settings: &Settings) -> Vec<ColorCluster> {
    if clusters.is_empty() {
        return Vec::new();
    }

    let proc = settings.processor();
    let chromatic = settings.chromatic();

    let had_dark = clusters.iter().any(|c| c.flags.dark);
    let had_light = clusters.iter().any(|c| c.flags.light);

    // Step 1: minimum weight.
    let step1: Vec<ColorCluster> = clusters
        .iter()
        .copied()
        .filter(|c| c.weight >= proc.min_cluster_weight)
        .collect();
    let step1 = restore_if_emptied(clusters, &step1);

    // Step 2: pure-black/white extremes, protecting at least one dark +
    // one light representative when the input supplied them.
    let step2 = drop_pure_extremes(&step1, &proc, had_dark, had_light);

    // Step 3: collapse near-duplicate lightness within each saturation band.
    let step3 = collapse_duplicates(&step2, chromatic.neutral_lightness_threshold);
    let step3 = restore_if_emptied(&step2, &step3);

    // Step 4: cap to max_ui_colors.
    let mut step4 = step3;
    step4.truncate(proc.max_ui_colors);

    log::debug!(
        "theme filter: {} -> {} clusters",
        clusters.len(),
        step4.len()
    );

    step4
}

fn drop_pure_extremes(
    clusters: &[ColorCluster],
    proc: &crate::settings::ProcessorSettings,
    had_dark: bool,
    had_light: bool,
) -> Vec<ColorCluster> {
    let is_pure = |c: &ColorCluster| {
        c.l < proc.pure_black_threshold || c.l > proc.pure_white_threshold
    };

    let kept: Vec<ColorCluster> = clusters.iter().copied().filter(|c| !is_pure(c)).collect();

    let mut kept = kept;

    if had_dark && !kept.iter().any(|c| c.flags.dark) {
        if let Some(best_dark) = clusters
            .iter()
            .filter(|c| c.flags.dark)
            .max_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(std::cmp::Ordering::Equal))
        {
            kept.push(*best_dark);
        }
    }

    if had_light && !kept.iter().any(|c| c.flags.light) {
        if let Some(best_light) = clusters
            .iter()
            .filter(|c| c.flags.light)
            .max_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(std::cmp::Ordering::Equal))
        {
            kept.push(*best_light);
        }
    }

    kept.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
    if kept.is_empty() {
        return clusters.to_vec();
    }
    kept
}

fn collapse_duplicates(clusters: &[ColorCluster], lightness_threshold: f64) -> Vec<ColorCluster> {
    let mut kept: Vec<ColorCluster> = Vec::new();

    for candidate in clusters {
        let candidate_band = band_of(candidate);
        let is_duplicate = kept
            .iter()
            .any(|k| band_of(k) == candidate_band && (k.l - candidate.l).abs() < lightness_threshold);

        if !is_duplicate {
            kept.push(*candidate);
        }
    }

    kept
}

fn restore_if_emptied(before: &[ColorCluster], after: &[ColorCluster]) -> Vec<ColorCluster> {
    if after.is_empty() && !before.is_empty() {
        let had_dark = before.iter().any(|c| c.flags.dark);
        let had_light = before.iter().any(|c| c.flags.light);

        let mut minimal = Vec::new();
        if had_dark {
            if let Some(c) = before
                .iter()
                .filter(|c| c.flags.dark)
                .max_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(std::cmp::Ordering::Equal))
            {
                minimal.push(*c);
            }
        }
        if had_light {
            if let Some(c) = before
                .iter()
                .filter(|c| c.flags.light)
                .max_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(std::cmp::Ordering::Equal))
            {
                minimal.push(*c);
            }
        }
        if minimal.is_empty() {
            // `before` is non-empty here (checked above), so this always finds one.
            if let Some(c) = before
                .iter()
                .max_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(std::cmp::Ordering::Equal))
            {
                minimal.push(*c);
            }
        }
        minimal.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(std::cmp::Ordering::Equal));
        minimal
    } else {
        after.to_vec()
    }
}

//! Weighted color set (C3): normalize counts into weights, filter by
//! minimum frequency, sort deterministically, truncate.

use crate::color::RGBA;
use crate::frequency::FrequencyMap;
use crate::settings::Settings;

/// A color and its share of the total pixel count.
///
/// Invariant: `weight == count as f64 / total`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedColor {
    pub rgba: RGBA,
    pub count: u32,
    pub weight: f64,
}

/// Build the weighted color set from a frequency map and total pixel
/// count: weight = count/total, entries below `processor.min_frequency`
/// dropped, sorted descending by weight (ties broken by ascending
/// packed RGB for determinism), truncated to
/// `processor.max_colors_to_extract`.
pub fn weighted_colors(map: &FrequencyMap, total: u64, settings: &Settings) -> Vec<WeightedColor> {
    let proc = settings.processor();
    let total_f = total as f64;

    let mut colors: Vec<WeightedColor> = map
        .iter()
        .filter_map(|(&packed, &count)| {
            let weight = count as f64 / total_f;
            if weight < proc.min_frequency {
                return None;
            }
            let rgba = RGBA::new(
                ((packed >> 16) & 0xFF) as u8,
                ((packed >> 8) & 0xFF) as u8,
                (packed & 0xFF) as u8,
                255,
            );
            Some(WeightedColor {
                rgba,
                count,
                weight,
            })
        })
        .collect();

    colors.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.rgba.packed_rgb().cmp(&b.rgba.packed_rgb()))
    });

    colors.truncate(proc.max_colors_to_extract);
    colors
}

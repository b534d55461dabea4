//! Perceptual clusterer (C4) — the hardest subsystem. Reduces a
//! weighted color set to a small ordered list of representatives, each
//! perceptually coherent and captured by its heaviest (first-seen)
//! member.
//!
//! Greedy, single-pass, Delta-E 76 only, leaving weighted-HSL distance
//! for downstream nearest-neighbor queries that are out of scope here.
//! Merging is never revisited once performed: re-merging clusters whose
//! centroids later drift within threshold would make the result depend
//! on merge history, so representatives are frozen at creation time.

use crate::color::{delta_e_76, rgb_to_lab, LAB, RGBA};
use crate::settings::Settings;
use crate::weighted::WeightedColor;

/// One merged cluster: a representative color (frozen at creation, the
/// heaviest/first color to seed the cluster) plus its accumulated share
/// of the total pixel weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawCluster {
    pub representative: RGBA,
    pub weight: f64,
    pub count: u64,
}

struct Accumulator {
    representative: RGBA,
    weight: f64,
    count: u64,
    centroid: LAB,
}

/// Cluster `colors` (already sorted heaviest-first) using
/// `chromatic.color_merge_threshold` as the Delta-E 76 merge radius.
/// Output is sorted by accumulated weight descending, ties broken by
/// the representative's packed RGB ascending, for determinism.
pub fn cluster(colors: &[WeightedColor], settings: &Settings) -> Vec<RawCluster> {
    let threshold = settings.chromatic().color_merge_threshold;
    let mut clusters: Vec<Accumulator> = Vec::new();

    for candidate in colors {
        let candidate_lab = rgb_to_lab(candidate.rgba);
        let candidate_count = candidate.count as u64;

        let nearest = clusters
            .iter_mut()
            .map(|c| (delta_e_76(candidate_lab, c.centroid), c))
            .min_by(|(da, _), (db, _)| da.partial_cmp(db).unwrap_or(std::cmp::Ordering::Equal));

        match nearest {
            Some((distance, existing)) if distance <= threshold => {
                let new_count = existing.count + candidate_count;
                existing.centroid = LAB::new(
                    weighted_mean(existing.centroid.l, existing.count, candidate_lab.l, candidate_count),
                    weighted_mean(existing.centroid.a, existing.count, candidate_lab.a, candidate_count),
                    weighted_mean(existing.centroid.b, existing.count, candidate_lab.b, candidate_count),
                );
                existing.count = new_count;
                existing.weight += candidate.weight;
            }
            _ => {
                clusters.push(Accumulator {
                    representative: candidate.rgba,
                    weight: candidate.weight,
                    count: candidate_count,
                    centroid: candidate_lab,
                });
            }
        }
    }

    let mut result: Vec<RawCluster> = clusters
        .into_iter()
        .map(|c| RawCluster {
            representative: c.representative,
            weight: c.weight,
            count: c.count,
        })
        .collect();

    result.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.representative.packed_rgb().cmp(&b.representative.packed_rgb()))
    });

    log::debug!("clustered {} colors into {} clusters", colors.len(), result.len());

    result
}

fn weighted_mean(existing: f64, existing_count: u64, incoming: f64, incoming_count: u64) -> f64 {
    let total = existing_count + incoming_count;
    (existing * existing_count as f64 + incoming * incoming_count as f64) / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wc(r: u8, g: u8, b: u8, count: u32, weight: f64) -> WeightedColor {
        WeightedColor {
            rgba: RGBA::opaque(r, g, b),
            count,
            weight,
        }
    }

    #[test]
    fn single_color_produces_one_full_weight_cluster() {
        let colors = vec![wc(255, 0, 0, 100, 1.0)];
        let clusters = cluster(&colors, &Settings::default());
        assert_eq!(clusters.len(), 1);
        assert!((clusters[0].weight - 1.0).abs() < 1e-9);
    }

    #[test]
    fn identical_colors_collapse_to_one_cluster() {
        let colors = vec![
            wc(10, 10, 10, 50, 0.5),
            wc(10, 10, 10, 50, 0.5),
        ];
        let clusters = cluster(&colors, &Settings::default());
        assert_eq!(clusters.len(), 1);
        assert!((clusters[0].weight - 1.0).abs() < 1e-9);
    }

    #[test]
    fn colors_far_apart_never_share_a_cluster() {
        let colors = vec![wc(0, 0, 0, 50, 0.5), wc(255, 255, 255, 50, 0.5)];
        let clusters = cluster(&colors, &Settings::default());
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn representative_is_the_first_heaviest_seeder() {
        // Two similar reds; the heavier (first) one seeds the cluster and
        // stays the representative even though it merges with a second.
        let colors = vec![
            wc(200, 10, 10, 80, 0.8),
            wc(205, 12, 11, 20, 0.2),
        ];
        let clusters = cluster(&colors, &Settings::default());
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].representative, RGBA::opaque(200, 10, 10));
    }

    #[test]
    fn cluster_weight_conservation() {
        let colors = vec![
            wc(0, 0, 0, 10, 0.1),
            wc(1, 1, 1, 10, 0.1),
            wc(255, 0, 0, 10, 0.1),
            wc(0, 255, 0, 10, 0.1),
            wc(0, 0, 255, 10, 0.1),
            wc(255, 255, 255, 50, 0.5),
        ];
        let total_in: f64 = colors.iter().map(|c| c.weight).sum();
        let clusters = cluster(&colors, &Settings::default());
        let total_out: f64 = clusters.iter().map(|c| c.weight).sum();
        assert!((total_in - total_out).abs() < 1e-9);
    }

    #[test]
    fn output_is_sorted_descending_by_weight() {
        let colors = vec![
            wc(0, 0, 0, 10, 0.1),
            wc(255, 0, 0, 60, 0.6),
            wc(0, 255, 0, 30, 0.3),
        ];
        let clusters = cluster(&colors, &Settings::default());
        for pair in clusters.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
    }
}

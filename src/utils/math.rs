use once_cell::sync::Lazy;
use statrs::distribution::{ContinuousCDF, Normal};

static STD_NORMAL: Lazy<Normal> = Lazy::new(|| Normal::new(0.0, 1.0).unwrap());

const MAX_KMEANS_ITERATIONS: usize = 100;

/// Partition scalar points into `k` clusters with Lloyd's algorithm.
///
/// Returns one cluster identity in `0..k` per point, in input order.
/// Centroids start evenly spread across the observed value range and ties
/// go to the lower centroid index, so the partition is deterministic for a
/// given input. Cluster identities carry no semantic ordering.
pub fn kmeans(points: &[f64], k: usize) -> Vec<usize> {
    assert!(k >= 1, "Cluster count must be positive");
    assert!(!points.is_empty(), "Cannot cluster an empty point set");
    if k == 1 {
        return vec![0; points.len()];
    }

    let min = points.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = points.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut centroids: Vec<f64> = (0..k)
        .map(|i| min + (max - min) * i as f64 / (k - 1) as f64)
        .collect();

    let mut assignment = vec![0_usize; points.len()];
    for _ in 0..MAX_KMEANS_ITERATIONS {
        let mut changed = false;
        for (point_index, &point) in points.iter().enumerate() {
            let nearest = centroids
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| {
                    (point - *a).abs().partial_cmp(&(point - *b).abs()).unwrap()
                })
                .map(|(centroid_index, _)| centroid_index)
                .unwrap();
            if assignment[point_index] != nearest {
                assignment[point_index] = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        for (centroid_index, centroid) in centroids.iter_mut().enumerate() {
            let mut sum = 0.0;
            let mut count = 0_usize;
            for (point_index, &point) in points.iter().enumerate() {
                if assignment[point_index] == centroid_index {
                    sum += point;
                    count += 1;
                }
            }
            // An empty cluster keeps its centroid
            if count > 0 {
                *centroid = sum / count as f64;
            }
        }
    }

    assignment
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alternative {
    TwoSided,
    Smaller,
    Larger,
}

/// Pooled two-proportion z-test.
///
/// Compares `successes[0]/totals[0]` against `successes[1]/totals[1]` under
/// the pooled-variance normal approximation and returns the p-value for the
/// requested alternative. A degenerate pool (both proportions at the same
/// extreme) has zero variance and yields NaN.
pub fn two_proportion_ztest(successes: [u64; 2], totals: [u64; 2], alternative: Alternative) -> f64 {
    assert!(
        totals[0] > 0 && totals[1] > 0,
        "Proportion test requires non-empty samples"
    );

    let p1 = successes[0] as f64 / totals[0] as f64;
    let p2 = successes[1] as f64 / totals[1] as f64;
    let pooled = (successes[0] + successes[1]) as f64 / (totals[0] + totals[1]) as f64;
    let variance = pooled * (1.0 - pooled) * (1.0 / totals[0] as f64 + 1.0 / totals[1] as f64);
    let z = (p1 - p2) / variance.sqrt();

    match alternative {
        Alternative::Smaller => STD_NORMAL.cdf(z),
        Alternative::Larger => 1.0 - STD_NORMAL.cdf(z),
        Alternative::TwoSided => 2.0 * (1.0 - STD_NORMAL.cdf(z.abs())),
    }
}

use log::{debug, info};
use rand::Rng;
use std::collections::HashSet;

use crate::clusterer::{centroid::compute_centroid, error::ClusterError, types::ClusterResult};
use crate::color::{distance, ColorSample, Rgb};

/// Partition `samples` into `k` color clusters with Lloyd's k-means.
///
/// Centroids are seeded from `k` distinct samples drawn from `rng`, so two
/// runs with different generators can end in different partitions.
/// Iteration stops early once an assignment pass changes nothing.
pub fn kmeans<R: Rng + ?Sized>(
    samples: &[ColorSample],
    k: usize,
    max_iters: usize,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    let n = samples.len();
    if n == 0 {
        return Err(ClusterError::EmptyInput);
    }
    if k == 0 {
        return Err(ClusterError::InvalidK { k });
    }
    if n < k {
        return Err(ClusterError::NotEnoughSamples { samples: n, k });
    }

    // 1. Seed centroids from k distinct samples
    let mut centroids = seed_centroids(samples, k, rng);

    let mut assignments = vec![0usize; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iters {
        iterations += 1;

        // 2. Assign each sample to its nearest centroid
        let mut changed = 0usize;
        for (i, sample) in samples.iter().enumerate() {
            let best = nearest_centroid(&sample.color, &centroids);
            if assignments[i] != best {
                assignments[i] = best;
                changed += 1;
            }
        }

        // 3. Recompute centroids; empty clusters keep their previous color
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&Rgb> = samples
                .iter()
                .zip(assignments.iter())
                .filter(|&(_, a)| *a == c)
                .map(|(s, _)| &s.color)
                .collect();

            match compute_centroid(&members) {
                Some(mean) => *centroid = mean,
                None => debug!("cluster {} has no members, keeping previous centroid", c),
            }
        }

        debug!("k-means iteration {}: {} reassigned", iterations, changed);

        if changed == 0 {
            converged = true;
            break;
        }
    }

    info!(
        "k-means: {} samples into {} clusters, {} iterations (converged: {})",
        n, k, iterations, converged
    );

    Ok(ClusterResult {
        centroids,
        assignments,
        iterations,
        converged,
    })
}

/// Same as [`kmeans`] with a reproducible ChaCha8 generator
pub fn kmeans_seeded(
    samples: &[ColorSample],
    k: usize,
    max_iters: usize,
    seed: u64,
) -> Result<ClusterResult, ClusterError> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    kmeans(samples, k, max_iters, &mut rng)
}

/// Index of the closest centroid; on equal distance the lowest index wins
pub fn nearest_centroid(color: &Rgb, centroids: &[Rgb]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;

    for (j, centroid) in centroids.iter().enumerate() {
        let d = distance(color, centroid);
        if d < best_dist {
            best_dist = d;
            best = j;
        }
    }

    best
}

/// Rejection-sample k distinct indices and copy their colors.
///
/// Callers guarantee `k <= samples.len()`, so the loop terminates.
fn seed_centroids<R: Rng + ?Sized>(samples: &[ColorSample], k: usize, rng: &mut R) -> Vec<Rgb> {
    let mut used = HashSet::with_capacity(k);
    let mut centroids = Vec::with_capacity(k);

    while centroids.len() < k {
        let i = rng.gen_range(0..samples.len());
        if used.insert(i) {
            centroids.push(samples[i].color);
        }
    }

    centroids
}

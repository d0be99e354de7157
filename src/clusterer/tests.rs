use super::*;
use crate::color::{distance, ColorSample, Rgb};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn black_and_white() -> Vec<ColorSample> {
    vec![
        ColorSample::new("black.png", 0.0, 0.0, 0.0),
        ColorSample::new("white.png", 1.0, 1.0, 1.0),
        ColorSample::new("near_black.png", 0.01, 0.0, 0.0),
        ColorSample::new("near_white.png", 0.99, 1.0, 0.99),
    ]
}

fn spread_samples(n: usize) -> Vec<ColorSample> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            ColorSample::new(format!("s{}.png", i), t, (t * 7.0) % 1.0, (t * 13.0) % 1.0)
        })
        .collect()
}

#[test]
fn test_simple_kmeans() {
    let res = kmeans_seeded(&black_and_white(), 2, 20, 42).unwrap();

    assert_eq!(res.centroids.len(), 2);
    assert_eq!(res.assignments.len(), 4);
    assert!(res.converged);
}

#[test]
fn test_black_white_split_for_any_seed() {
    // Initialization is random, so check the partition across many seeds
    let samples = black_and_white();
    for seed in 0..32 {
        let res = kmeans_seeded(&samples, 2, 100, seed).unwrap();

        assert_eq!(res.assignments[0], res.assignments[2], "seed {}", seed);
        assert_eq!(res.assignments[1], res.assignments[3], "seed {}", seed);
        assert_ne!(res.assignments[0], res.assignments[1], "seed {}", seed);

        for (sample, &own) in samples.iter().zip(res.assignments.iter()) {
            let other = 1 - own;
            assert!(
                distance(&sample.color, &res.centroids[own])
                    < distance(&sample.color, &res.centroids[other])
            );
        }
    }
}

#[test]
fn test_assignments_cover_every_sample_with_valid_ids() {
    let samples = spread_samples(50);
    let res = kmeans_seeded(&samples, DEFAULT_K, DEFAULT_MAX_ITERATIONS, 7).unwrap();

    assert_eq!(res.assignments.len(), samples.len());
    assert!(res.assignments.iter().all(|&a| a < DEFAULT_K));
    assert_eq!(res.k(), DEFAULT_K);
}

#[test]
fn test_respects_iteration_cap() {
    let samples = spread_samples(60);
    for max_iters in [1, 2, 5] {
        let res = kmeans_seeded(&samples, 5, max_iters, 3).unwrap();
        assert!(res.iterations <= max_iters);
    }
}

#[test]
fn test_zero_iterations_returns_seeds() {
    let samples = black_and_white();
    let res = kmeans_seeded(&samples, 2, 0, 1).unwrap();

    assert_eq!(res.iterations, 0);
    assert!(!res.converged);
    assert_eq!(res.assignments, vec![0; 4]);
    for c in &res.centroids {
        assert!(samples.iter().any(|s| s.color == *c));
    }
}

#[test]
fn test_seeds_are_distinct_samples() {
    // Two samples, two clusters: both must be picked exactly once
    let samples = vec![
        ColorSample::new("a.png", 0.1, 0.1, 0.1),
        ColorSample::new("b.png", 0.9, 0.9, 0.9),
    ];
    for seed in 0..16 {
        let res = kmeans_seeded(&samples, 2, 0, seed).unwrap();
        assert_ne!(res.centroids[0], res.centroids[1]);
    }
}

#[test]
fn test_early_stop_keeps_previous_centroids() {
    let samples = black_and_white();
    let full = kmeans_seeded(&samples, 2, 100, 11).unwrap();
    assert!(full.converged);
    assert!(full.iterations >= 2);

    // Stopping one pass earlier with the same seed yields the same centroids
    let earlier = kmeans_seeded(&samples, 2, full.iterations - 1, 11).unwrap();
    assert_eq!(earlier.centroids, full.centroids);
    assert_eq!(earlier.assignments, full.assignments);
}

#[test]
fn test_empty_cluster_keeps_color() {
    let samples = vec![
        ColorSample::new("a.png", 0.3, 0.3, 0.3),
        ColorSample::new("b.png", 0.3, 0.3, 0.3),
        ColorSample::new("c.png", 0.3, 0.3, 0.3),
    ];
    let res = kmeans_seeded(&samples, 2, 10, 5).unwrap();

    // Equal distances go to the lowest index, leaving cluster 1 empty
    assert_eq!(res.assignments, vec![0, 0, 0]);
    assert_eq!(res.centroids[1], Rgb::new(0.3, 0.3, 0.3));
    assert_eq!(res.partition(), vec![vec![0, 1, 2], vec![]]);
}

#[test]
fn test_single_cluster_is_mean() {
    let samples = vec![
        ColorSample::new("a.png", 0.0, 0.2, 0.4),
        ColorSample::new("b.png", 1.0, 0.4, 0.0),
    ];
    let res = kmeans_seeded(&samples, 1, 10, 0).unwrap();

    let c = res.centroids[0];
    assert!((c.r - 0.5).abs() < 1e-12);
    assert!((c.g - 0.3).abs() < 1e-12);
    assert!((c.b - 0.2).abs() < 1e-12);
}

#[test]
fn test_same_seed_same_result() {
    let samples = spread_samples(40);
    let a = kmeans_seeded(&samples, 4, 50, 99).unwrap();
    let b = kmeans_seeded(&samples, 4, 50, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_injected_rng() {
    let mut rng = ChaCha8Rng::seed_from_u64(123);
    let res = kmeans(&black_and_white(), 2, 20, &mut rng).unwrap();
    assert_eq!(res.partition().iter().map(Vec::len).sum::<usize>(), 4);
}

#[test]
fn test_rejects_empty_input() {
    assert_eq!(kmeans_seeded(&[], 2, 10, 0), Err(ClusterError::EmptyInput));
}

#[test]
fn test_rejects_zero_k() {
    assert_eq!(
        kmeans_seeded(&black_and_white(), 0, 10, 0),
        Err(ClusterError::InvalidK { k: 0 })
    );
}

#[test]
fn test_rejects_too_few_samples() {
    assert_eq!(
        kmeans_seeded(&black_and_white(), 5, 10, 0),
        Err(ClusterError::NotEnoughSamples { samples: 4, k: 5 })
    );
}

#[test]
fn test_nearest_centroid_tie_goes_to_lowest_index() {
    let centroids = vec![Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 0.0, 0.0)];
    assert_eq!(nearest_centroid(&Rgb::new(0.5, 0.0, 0.0), &centroids), 0);
    assert_eq!(nearest_centroid(&Rgb::new(0.6, 0.0, 0.0), &centroids), 1);
}

#[test]
fn test_compute_centroid_empty() {
    assert_eq!(compute_centroid(&[]), None);
}

#[test]
fn test_centroid_position_follows_color() {
    let c = Centroid::from_color(Rgb::new(0.5, 1.0, 0.0), 2.0);
    assert_eq!(c.position, crate::color::Point3D::new(0.0, 1.0, -1.0));
}

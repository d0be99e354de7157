use crate::color::{Point3D, Rgb};
use serde::Serialize;

/// Mean color of one cluster plus its place in the plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub color: Rgb,
    pub position: Point3D,
}

impl Centroid {
    pub fn from_color(color: Rgb, spread: f64) -> Self {
        Self {
            color,
            position: color.to_point(spread),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    /// Final mean color per cluster, indexed by cluster id
    pub centroids: Vec<Rgb>,
    /// Cluster id for each input sample, same order as the input
    pub assignments: Vec<usize>,
    /// Iterations actually run, including the one that detected convergence
    pub iterations: usize,
    /// False when the iteration cap was hit before assignments settled
    pub converged: bool,
}

impl ClusterResult {
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Sample indices per cluster, in cluster order; each list keeps input order
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.k()];
        for (sample, &cluster) in self.assignments.iter().enumerate() {
            groups[cluster].push(sample);
        }
        groups
    }
}

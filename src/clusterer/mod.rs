mod centroid;
mod error;
mod kmeans;
mod types;

#[cfg(test)]
mod tests;

pub use centroid::compute_centroid;
pub use error::ClusterError;
pub use kmeans::{kmeans, kmeans_seeded, nearest_centroid};
pub use types::{Centroid, ClusterResult};

/// Number of clusters the viewer partitions a dataset into
pub const DEFAULT_K: usize = 4;

/// Iteration cap for the load-time clustering run
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    #[error("Cannot cluster an empty sample set")]
    EmptyInput,

    #[error("Cluster count must be at least 1 (got {k})")]
    InvalidK { k: usize },

    #[error("Not enough samples for {k} clusters: {samples} available")]
    NotEnoughSamples { samples: usize, k: usize },
}

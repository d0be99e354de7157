use thiserror::Error;

use crate::clusterer::ClusterError;
use crate::dataset::LoadError;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Clustering failed: {0}")]
    Cluster(#[from] ClusterError),
}

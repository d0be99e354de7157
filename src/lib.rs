// Public API exports
pub mod clusterer;
pub mod color;
pub mod dataset;
pub mod picker;
pub mod projector;
pub mod render;
pub mod scene;

// Re-export main types for convenience
pub use color::{distance, ColorSample, Point3D, Rgb, DEFAULT_SPREAD};

pub use clusterer::{
    kmeans, kmeans_seeded, Centroid, ClusterError, ClusterResult, DEFAULT_K,
    DEFAULT_MAX_ITERATIONS,
};

pub use projector::{project, Canvas, ProjectionMap, ScreenPoint, ViewState};

pub use picker::{find_nearest, Hit, DEFAULT_HIT_THRESHOLD};

pub use dataset::{load_samples, parse_samples, AvgColorRecord, LoadError, DEFAULT_DATASET_PATH};

pub use scene::{ClusterGroup, GroupMember, SceneConfig, SceneError, SceneState};

pub use render::{to_svg, DisplayList, DrawCommand};

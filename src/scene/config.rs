use serde::{Deserialize, Serialize};

use crate::clusterer::{DEFAULT_K, DEFAULT_MAX_ITERATIONS};
use crate::color::DEFAULT_SPREAD;
use crate::dataset::DEFAULT_THUMBNAIL_DIR;
use crate::picker::DEFAULT_HIT_THRESHOLD;
use crate::projector::{Canvas, ViewState};

/// Radians of rotation per pixel of drag
pub const DRAG_SENSITIVITY: f64 = 0.01;

/// Zoom change per unit of scroll delta
pub const ZOOM_SENSITIVITY: f64 = 0.5;

/// Tunables for loading and viewing a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of clusters
    pub k: usize,
    /// Iteration cap for the one clustering run
    pub max_iterations: usize,
    /// Scale from centered channel values to plot units
    pub spread: f64,
    /// Pick radius in canvas pixels
    pub hit_threshold: f64,
    pub drag_sensitivity: f64,
    pub zoom_sensitivity: f64,
    pub canvas: Canvas,
    /// View the scene starts in
    pub initial_view: ViewState,
    /// Fixed seed for centroid seeding; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub thumbnail_dir: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            spread: DEFAULT_SPREAD,
            hit_threshold: DEFAULT_HIT_THRESHOLD,
            drag_sensitivity: DRAG_SENSITIVITY,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            canvas: Canvas::default(),
            initial_view: ViewState::default(),
            seed: None,
            thumbnail_dir: DEFAULT_THUMBNAIL_DIR.to_string(),
        }
    }
}

impl SceneConfig {
    pub fn builder() -> SceneConfigBuilder {
        SceneConfigBuilder::new()
    }
}

/// Chained setters over [`SceneConfig::default`]
pub struct SceneConfigBuilder {
    config: SceneConfig,
}

impl SceneConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SceneConfig::default(),
        }
    }

    pub fn k(mut self, k: usize) -> Self {
        self.config.k = k;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    pub fn spread(mut self, spread: f64) -> Self {
        self.config.spread = spread;
        self
    }

    pub fn hit_threshold(mut self, pixels: f64) -> Self {
        self.config.hit_threshold = pixels;
        self
    }

    /// Radians of rotation per pixel of drag
    pub fn drag_sensitivity(mut self, radians_per_pixel: f64) -> Self {
        self.config.drag_sensitivity = radians_per_pixel;
        self
    }

    /// Zoom change per unit of scroll delta
    pub fn zoom_sensitivity(mut self, per_scroll_unit: f64) -> Self {
        self.config.zoom_sensitivity = per_scroll_unit;
        self
    }

    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.config.canvas = Canvas::new(width, height);
        self
    }

    pub fn initial_view(mut self, view: ViewState) -> Self {
        self.config.initial_view = view;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn thumbnail_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.thumbnail_dir = dir.into();
        self
    }

    pub fn build(self) -> SceneConfig {
        self.config
    }
}

impl Default for SceneConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

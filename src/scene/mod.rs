mod config;
mod error;
mod group;
mod input;


pub use config::{SceneConfig, SceneConfigBuilder, DRAG_SENSITIVITY, ZOOM_SENSITIVITY};
pub use error::SceneError;
pub use group::{ClusterGroup, GroupMember};

use log::info;
use rand::Rng;
use std::path::Path;

use crate::clusterer::{kmeans, Centroid};
use crate::color::{ColorSample, Point3D};
use crate::dataset::{load_samples, thumbnail_path};
use crate::projector::{Canvas, ProjectionMap, ViewState};

use input::DragState;

/// Everything the viewer knows between events: the clustered dataset,
/// the current view, the last drawn frame, and hover/selection.
///
/// Samples, points, centroids and assignments are fixed after [`load`];
/// only the view, the cached frame and the pointer state change.
///
/// [`load`]: SceneState::load
pub struct SceneState {
    config: SceneConfig,
    samples: Vec<ColorSample>,
    /// Plot position per sample, same order as `samples`
    points: Vec<Point3D>,
    centroids: Vec<Centroid>,
    /// Cluster id per sample
    assignments: Vec<usize>,
    iterations: usize,
    view: ViewState,
    canvas: Canvas,
    /// Screen positions from the most recent `render_frame`
    frame: Option<ProjectionMap>,
    hovered: Option<usize>,
    selected: Option<usize>,
    drag: DragState,
}

impl SceneState {
    /// Place and cluster `samples` once.
    ///
    /// Uses a seeded ChaCha8 generator when `config.seed` is set, the
    /// thread RNG otherwise.
    pub fn load(samples: Vec<ColorSample>, config: SceneConfig) -> Result<Self, SceneError> {
        match config.seed {
            Some(seed) => {
                use rand::SeedableRng;
                use rand_chacha::ChaCha8Rng;

                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                Self::load_with_rng(samples, config, &mut rng)
            }
            None => Self::load_with_rng(samples, config, &mut rand::thread_rng()),
        }
    }

    /// Like [`SceneState::load`] with the caller's generator
    pub fn load_with_rng<R: Rng + ?Sized>(
        samples: Vec<ColorSample>,
        config: SceneConfig,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        let result = kmeans(&samples, config.k, config.max_iterations, rng)?;

        let points = samples
            .iter()
            .map(|s| s.color.to_point(config.spread))
            .collect();
        let centroids = result
            .centroids
            .iter()
            .map(|&c| Centroid::from_color(c, config.spread))
            .collect();

        info!(
            "scene ready: {} samples, {} clusters after {} iterations",
            samples.len(),
            config.k,
            result.iterations
        );

        Ok(Self {
            view: config.initial_view,
            canvas: config.canvas,
            config,
            samples,
            points,
            centroids,
            assignments: result.assignments,
            iterations: result.iterations,
            frame: None,
            hovered: None,
            selected: None,
            drag: DragState::default(),
        })
    }

    /// Read an average-color JSON file and load it
    pub fn from_file(path: impl AsRef<Path>, config: SceneConfig) -> Result<Self, SceneError> {
        let samples = load_samples(path)?;
        Self::load(samples, config)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn samples(&self) -> &[ColorSample] {
        &self.samples
    }

    pub fn sample(&self, index: usize) -> Option<&ColorSample> {
        self.samples.get(index)
    }

    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Cluster id of a sample
    pub fn cluster_of(&self, sample: usize) -> Option<usize> {
        self.assignments.get(sample).copied()
    }

    /// Iterations the clustering run took
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Resize the drawing surface; takes effect on the next frame
    pub fn set_canvas(&mut self, width: f64, height: f64) {
        self.canvas = Canvas::new(width, height);
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Samples grouped by cluster, in centroid order.
    ///
    /// Always returns one group per centroid, including empty ones.
    pub fn groups(&self) -> Vec<ClusterGroup> {
        let mut groups: Vec<ClusterGroup> = self
            .centroids
            .iter()
            .enumerate()
            .map(|(index, centroid)| ClusterGroup {
                index,
                centroid: *centroid,
                members: Vec::new(),
            })
            .collect();

        for (sample_idx, (sample, &cluster)) in
            self.samples.iter().zip(self.assignments.iter()).enumerate()
        {
            groups[cluster].members.push(GroupMember {
                sample: sample_idx,
                label: sample.label(),
                thumbnail_path: thumbnail_path(&self.config.thumbnail_dir, &sample.id),
            });
        }

        groups
    }

    /// Project every point and centroid under the current view and keep the
    /// result as the frame later queries hit-test against.
    pub fn render_frame(&mut self) -> &ProjectionMap {
        let centroid_points: Vec<Point3D> = self.centroids.iter().map(|c| c.position).collect();
        let frame = ProjectionMap::build(&self.points, &centroid_points, self.view, self.canvas);
        self.frame.insert(frame)
    }

    /// The last rendered frame, if any
    pub fn frame(&self) -> Option<&ProjectionMap> {
        self.frame.as_ref()
    }

    /// True when the view or canvas changed since the last frame (or none exists)
    pub fn is_frame_stale(&self) -> bool {
        self.frame
            .as_ref()
            .map_or(true, |f| !f.is_current(&self.view, &self.canvas))
    }
}

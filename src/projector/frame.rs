use super::{project, Canvas, ScreenPoint, ViewState};
use crate::color::Point3D;

/// Screen positions for one drawn frame.
///
/// Entries are indexed like the inputs they were built from, so sample `i`
/// lives at `point(i)`. Hit-testing reads from here rather than reprojecting,
/// which keeps hits consistent with what was last drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionMap {
    view: ViewState,
    canvas: Canvas,
    points: Vec<ScreenPoint>,
    centroids: Vec<ScreenPoint>,
}

impl ProjectionMap {
    pub fn build(
        points: &[Point3D],
        centroids: &[Point3D],
        view: ViewState,
        canvas: Canvas,
    ) -> Self {
        let project_all = |ps: &[Point3D]| -> Vec<ScreenPoint> {
            ps.iter()
                .map(|p| project(p, &view, canvas.width, canvas.height))
                .collect()
        };

        Self {
            view,
            canvas,
            points: project_all(points),
            centroids: project_all(centroids),
        }
    }

    pub fn point(&self, index: usize) -> Option<&ScreenPoint> {
        self.points.get(index)
    }

    pub fn centroid(&self, index: usize) -> Option<&ScreenPoint> {
        self.centroids.get(index)
    }

    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    pub fn centroids(&self) -> &[ScreenPoint] {
        &self.centroids
    }

    /// View the frame was projected under
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Whether this frame still matches the given view and canvas
    pub fn is_current(&self, view: &ViewState, canvas: &Canvas) -> bool {
        self.view == *view && self.canvas == *canvas
    }
}

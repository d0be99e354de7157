//! Two-axis rotation plus divide-by-depth perspective.
//!
//! This is not a full camera model: there is no roll, no field of view and
//! no clipping. A point is rotated about X, then about Y, then shrunk by
//! `zoom / (zoom + depth + 1)` and offset to the canvas center.

mod frame;
mod view;


pub use frame::ProjectionMap;
pub use view::{Canvas, ScreenPoint, ViewState};

use crate::color::Point3D;

/// Project a plot-space point onto the canvas under `view`.
///
/// Screen y grows downward, so the X-rotated y is subtracted from the
/// center. `depth` is the Y-rotated z and is only meaningful relative to
/// other points projected under the same view.
pub fn project(
    point: &Point3D,
    view: &ViewState,
    canvas_width: f64,
    canvas_height: f64,
) -> ScreenPoint {
    let (sin_x, cos_x) = view.rotation_x.sin_cos();
    let (sin_y, cos_y) = view.rotation_y.sin_cos();

    // Rotate around X
    let rx = point.x;
    let ry = point.y * cos_x - point.z * sin_x;
    let rz = point.y * sin_x + point.z * cos_x;

    // Rotate around Y
    let sx = rx * cos_y - rz * sin_y;
    let sz = rx * sin_y + rz * cos_y;

    let f = view.zoom / (view.zoom + sz + 1.0);

    ScreenPoint {
        x: canvas_width / 2.0 + sx * f,
        y: canvas_height / 2.0 - ry * f,
        depth: sz,
    }
}

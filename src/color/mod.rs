mod distance;
mod sample;


pub use distance::distance;
pub use sample::{ColorSample, Point3D, Rgb};

/// Scale applied to centered channel values when placing them in plot space
pub const DEFAULT_SPREAD: f64 = 400.0;

use serde::{Deserialize, Serialize};

/// Rotation and zoom driving the projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Radians around the X axis (vertical drag)
    pub rotation_x: f64,
    /// Radians around the Y axis (horizontal drag)
    pub rotation_y: f64,
    /// Perspective strength; larger is flatter. Not clamped.
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_x: -0.6,
            rotation_y: -0.6,
            zoom: 600.0,
        }
    }
}

impl ViewState {
    pub fn new(rotation_x: f64, rotation_y: f64, zoom: f64) -> Self {
        Self {
            rotation_x,
            rotation_y,
            zoom,
        }
    }
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A projected point: canvas pixel coordinates plus depth
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

use serde::{Deserialize, Serialize};

/// A normalized RGB triple, each channel nominally in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Center each channel on 0.5 and scale it into plot space.
    ///
    /// Red maps to x, green to y, blue to z.
    pub fn to_point(self, spread: f64) -> Point3D {
        Point3D {
            x: (self.r - 0.5) * spread,
            y: (self.g - 0.5) * spread,
            z: (self.b - 0.5) * spread,
        }
    }

    /// 8-bit channel values, rounded to nearest
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }

    /// CSS-style `#rrggbb`
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

fn channel_to_u8(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Position of a color in the 3D plot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Average color of one source image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    /// Source image file name (e.g. `new_mexico.png`)
    pub id: String,
    pub color: Rgb,
}

impl ColorSample {
    pub fn new(id: impl Into<String>, r: f64, g: f64, b: f64) -> Self {
        Self {
            id: id.into(),
            color: Rgb::new(r, g, b),
        }
    }

    /// File name without its first `.png`, used in cluster listings
    pub fn label(&self) -> String {
        self.id.replacen(".png", "", 1)
    }

    /// Human-readable name for tooltips: label with underscores as spaces
    pub fn display_name(&self) -> String {
        self.label().replace('_', " ")
    }
}

//! Toolkit-agnostic draw commands for one frame of the scatter plot.
//!
//! Paint order: links from each sample to its centroid, then sample dots
//! with their hover/selection rings, then centroid squares on top.

mod svg;


pub use svg::to_svg;

use serde::Serialize;

use crate::projector::ProjectionMap;
use crate::scene::SceneState;

/// Radius of a sample marker
pub const POINT_RADIUS: f64 = 6.0;
/// Side length of a centroid marker
pub const CENTROID_SIZE: f64 = 12.0;
/// Marker outline colors, cycled by cluster id
pub const CLUSTER_PALETTE: [&str; 4] = ["#e63946", "#2a9d8f", "#f4a261", "#457b9d"];

const LINK_STROKE: Stroke = Stroke::new("rgba(0,0,0,0.55)", 1.2);
const OUTLINE_WIDTH: f64 = 0.6;
const HOVER_STROKE: Stroke = Stroke::new("rgba(0,0,0,0.8)", 2.0);
const SELECTED_STROKE: Stroke = Stroke::new("#000", 2.4);
const CENTROID_STROKE: Stroke = Stroke::new("#000", 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: &'static str, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RingKind {
    Hover,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Sample-to-centroid link
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Stroke,
    },
    /// Filled sample marker
    Dot {
        sample: usize,
        center: (f64, f64),
        radius: f64,
        fill: [u8; 3],
        outline: Stroke,
    },
    /// Unfilled highlight around a sample
    Ring {
        sample: usize,
        center: (f64, f64),
        radius: f64,
        ring: RingKind,
        stroke: Stroke,
    },
    /// Centered square marking a centroid
    Square {
        cluster: usize,
        center: (f64, f64),
        size: f64,
        fill: [u8; 3],
        stroke: Stroke,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayList {
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Build the commands for `frame`, which should come from `scene`
    pub fn build(scene: &SceneState, frame: &ProjectionMap) -> Self {
        let mut commands = Vec::new();

        for (i, &cluster) in scene.assignments().iter().enumerate() {
            if let (Some(p), Some(c)) = (frame.point(i), frame.centroid(cluster)) {
                commands.push(DrawCommand::Line {
                    from: (p.x, p.y),
                    to: (c.x, c.y),
                    stroke: LINK_STROKE,
                });
            }
        }

        for (i, sample) in scene.samples().iter().enumerate() {
            let Some(p) = frame.point(i) else { continue };
            let center = (p.x, p.y);
            let cluster = scene.cluster_of(i).unwrap_or(0);
            let outline_color = CLUSTER_PALETTE[cluster % CLUSTER_PALETTE.len()];

            commands.push(DrawCommand::Dot {
                sample: i,
                center,
                radius: POINT_RADIUS,
                fill: sample.color.to_rgb8(),
                outline: Stroke::new(outline_color, OUTLINE_WIDTH),
            });

            if scene.hovered() == Some(i) {
                commands.push(DrawCommand::Ring {
                    sample: i,
                    center,
                    radius: POINT_RADIUS + 4.0,
                    ring: RingKind::Hover,
                    stroke: HOVER_STROKE,
                });
            }
            if scene.selected() == Some(i) {
                commands.push(DrawCommand::Ring {
                    sample: i,
                    center,
                    radius: POINT_RADIUS + 6.0,
                    ring: RingKind::Selected,
                    stroke: SELECTED_STROKE,
                });
            }
        }

        for (j, centroid) in scene.centroids().iter().enumerate() {
            let Some(p) = frame.centroid(j) else { continue };
            commands.push(DrawCommand::Square {
                cluster: j,
                center: (p.x, p.y),
                size: CENTROID_SIZE,
                fill: centroid.color.to_rgb8(),
                stroke: CENTROID_STROKE,
            });
        }

        Self { commands }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

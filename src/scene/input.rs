use super::SceneState;
use crate::picker::{find_nearest, Hit};

/// Pointer position at the last drag step, while a drag is active
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct DragState {
    last: Option<(f64, f64)>,
}

impl SceneState {
    /// Rotate by a pointer movement: horizontal spins about Y, vertical about X
    pub fn on_drag_delta(&mut self, dx: f64, dy: f64) {
        self.view.rotation_y += dx * self.config.drag_sensitivity;
        self.view.rotation_x += dy * self.config.drag_sensitivity;
    }

    /// Apply a scroll delta to zoom. Unclamped: zoom may go negative.
    pub fn on_zoom_delta(&mut self, delta: f64) {
        self.view.zoom += delta * self.config.zoom_sensitivity;
    }

    /// Hit-test canvas coordinates against the last rendered frame.
    ///
    /// Nothing is hit before the first frame.
    pub fn on_query(&self, x: f64, y: f64) -> Option<Hit> {
        let frame = self.frame.as_ref()?;
        find_nearest(x, y, frame.points(), self.config.hit_threshold)
    }

    /// Update the hovered sample from a pointer position
    pub fn on_hover(&mut self, x: f64, y: f64) -> Option<usize> {
        self.hovered = self.on_query(x, y).map(|hit| hit.index);
        self.hovered
    }

    /// Select the sample under the pointer, or clear the selection on a miss
    pub fn on_click(&mut self, x: f64, y: f64) -> Option<usize> {
        self.selected = self.on_query(x, y).map(|hit| hit.index);
        self.selected
    }

    /// Cancel key: drop the selection
    pub fn on_cancel(&mut self) {
        self.selected = None;
    }

    pub fn on_pointer_down(&mut self, x: f64, y: f64) {
        self.drag.last = Some((x, y));
    }

    /// Pointer released or left the canvas
    pub fn on_pointer_up(&mut self) {
        self.drag.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.last.is_some()
    }

    /// Pointer moved to `(x, y)`.
    ///
    /// While dragging, rotates by the movement since the last position and
    /// redraws before hit-testing, so hover follows the rotated points.
    /// Returns the hovered sample.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Option<usize> {
        if let Some((last_x, last_y)) = self.drag.last {
            self.on_drag_delta(x - last_x, y - last_y);
            self.drag.last = Some((x, y));
            self.render_frame();
        }

        self.on_hover(x, y)
    }
}

use crate::projector::ScreenPoint;
use serde::Serialize;


/// Pick radius around the pointer, in canvas pixels
pub const DEFAULT_HIT_THRESHOLD: f64 = 28.0;

/// The point a pointer query landed on
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    /// Index into the slice that was searched
    pub index: usize,
    pub screen: ScreenPoint,
    /// Squared pixel distance from the query position
    pub distance_sq: f64,
}

/// Find the cached screen point closest to `(x, y)` within `threshold` pixels.
///
/// The boundary is inclusive. On an exact distance tie the point with the
/// larger stored depth wins; otherwise the first point in slice order does.
pub fn find_nearest(x: f64, y: f64, screens: &[ScreenPoint], threshold: f64) -> Option<Hit> {
    let threshold_sq = threshold * threshold;
    let mut best: Option<Hit> = None;

    for (index, screen) in screens.iter().enumerate() {
        let dx = screen.x - x;
        let dy = screen.y - y;
        let distance_sq = dx * dx + dy * dy;

        // NaN distances from degenerate projections fail this test
        if distance_sq <= threshold_sq {
            let better = match &best {
                None => true,
                Some(b) => {
                    distance_sq < b.distance_sq
                        || (distance_sq == b.distance_sq && screen.depth > b.screen.depth)
                }
            };

            if better {
                best = Some(Hit {
                    index,
                    screen: *screen,
                    distance_sq,
                });
            }
        }
    }

    best
}

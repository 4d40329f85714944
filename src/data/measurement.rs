//! Distance/angle measurement between two captured points.

use std::fmt;

use super::ruler::Point;

/// Derived geometry of the segment from point A to point B.
///
/// `dy` is inverted relative to screen space (`a.y - b.y`) so that a segment
/// pointing up the screen has a positive angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub dx: i64,
    pub dy: i64,
    pub distance: f64,
    /// Angle in degrees, in `(-180, 180]`.
    pub angle_degrees: f64,
}

impl Measurement {
    /// Compute the measurement for the segment `a -> b`.
    pub fn between(a: Point, b: Point) -> Self {
        let dx = i64::from(b.x) - i64::from(a.x);
        let dy = i64::from(a.y) - i64::from(b.y);
        let (fx, fy) = (dx as f64, dy as f64);
        Self {
            dx,
            dy,
            distance: fx.hypot(fy),
            // atan2(+0, +0) is +0, so coincident points report 0 degrees.
            angle_degrees: fy.atan2(fx).to_degrees(),
        }
    }

    /// Slope in the upward-positive convention, `None` for vertical segments.
    pub fn slope(&self) -> Option<f64> {
        if self.dx == 0 {
            None
        } else {
            Some(self.dy as f64 / self.dx as f64)
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}): {:.6} px @ {:.6} deg",
            self.dx, self.dy, self.distance, self.angle_degrees
        )
    }
}

//! Point-capture state machine for the ruler overlay.
//!
//! A [`RulerState`] tracks the cursor and the two most recently clicked
//! points. Clicks alternate between slot A and slot B forever; there is only
//! ever one segment. The state is plain data owned by the caller and never
//! touches the GUI.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::measurement::Measurement;

/// Integer pixel coordinate in window-client space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which point slot the next click will overwrite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    #[default]
    A,
    B,
}

impl Slot {
    /// The other slot.
    pub fn toggled(self) -> Self {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    /// Zero-based index shown in the readout (`0` for A, `1` for B).
    pub fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

/// How an "unset" point is recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsetEncoding {
    /// A point is unset only if it has never been captured. A click at the
    /// top-left corner is a real point.
    #[default]
    Explicit,
    /// Legacy behaviour: a point equal to `(0, 0)` also counts as unset.
    ZeroSentinel,
}

/// The complete interactive state of the ruler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulerState {
    cursor: Point,
    point_a: Option<Point>,
    point_b: Option<Point>,
    next_slot: Slot,
    unset: UnsetEncoding,
}

impl RulerState {
    /// Fresh state: cursor at the origin, no points, next click writes A.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state using the given unset encoding.
    pub fn with_encoding(unset: UnsetEncoding) -> Self {
        Self {
            unset,
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Point A if it counts as set under the active encoding.
    pub fn point_a(&self) -> Option<Point> {
        self.visible(self.point_a)
    }

    /// Point B if it counts as set under the active encoding.
    pub fn point_b(&self) -> Option<Point> {
        self.visible(self.point_b)
    }

    /// Raw stored value of point A, ignoring the sentinel rule.
    pub fn raw_point_a(&self) -> Option<Point> {
        self.point_a
    }

    /// Raw stored value of point B, ignoring the sentinel rule.
    pub fn raw_point_b(&self) -> Option<Point> {
        self.point_b
    }

    pub fn next_slot(&self) -> Slot {
        self.next_slot
    }

    /// Record a pointer move. Points and slot are left untouched.
    pub fn on_pointer_move(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    /// Record a click: capture the position into the next slot and toggle.
    ///
    /// Returns the slot that was written.
    pub fn on_click(&mut self, x: i32, y: i32) -> Slot {
        self.cursor = Point::new(x, y);
        let written = self.next_slot;
        match written {
            Slot::A => self.point_a = Some(self.cursor),
            Slot::B => self.point_b = Some(self.cursor),
        }
        self.next_slot = written.toggled();
        written
    }

    /// Distance and angle from A to B, or `None` while B is unset.
    ///
    /// Point A is not checked: an unset A is read as the origin.
    pub fn derive(&self) -> Option<Measurement> {
        let b = self.point_b()?;
        let a = self.point_a.unwrap_or(Point::ORIGIN);
        Some(Measurement::between(a, b))
    }

    fn visible(&self, p: Option<Point>) -> Option<Point> {
        match (self.unset, p) {
            (UnsetEncoding::ZeroSentinel, Some(Point::ORIGIN)) => None,
            (_, p) => p,
        }
    }
}

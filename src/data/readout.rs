//! Text readout shown in the top-left corner of the overlay.

use super::ruler::{Point, RulerState};

/// Placeholder rendered wherever a value is unavailable.
pub const PLACEHOLDER: &str = "N/A";

/// The six readout lines, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readout {
    pub lines: Vec<String>,
}

impl Readout {
    pub fn from_state(state: &RulerState) -> Self {
        let mut lines = Vec::with_capacity(6);
        lines.push(state.cursor().to_string());
        lines.push(format!("Clicked Pt1: {}", format_point(state.point_a())));
        lines.push(format!("Clicked Pt2: {}", format_point(state.point_b())));
        match state.derive() {
            Some(m) => {
                lines.push(format!(
                    "Distance: ({}, {}): {:.6} px",
                    m.dx, m.dy, m.distance
                ));
                lines.push(format!("Angle: {:.6} degrees", m.angle_degrees));
            }
            None => {
                lines.push(format!(
                    "Distance: ({PLACEHOLDER}, {PLACEHOLDER}): {PLACEHOLDER} px"
                ));
                lines.push(format!("Angle: {PLACEHOLDER} degrees"));
            }
        }
        lines.push(format!("Current Pt: {}", state.next_slot().index()));
        Self { lines }
    }

    /// All lines joined with newlines.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

fn format_point(p: Option<Point>) -> String {
    match p {
        Some(p) => p.to_string(),
        None => format!("({PLACEHOLDER}, {PLACEHOLDER})"),
    }
}

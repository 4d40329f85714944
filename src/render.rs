//! Render contract between the ruler state and a drawing surface.
//!
//! [`RulerRenderer`] is the outbound half of the controller boundary.
//! [`OverlayScene`] is the retained implementation used by the GUI: it keeps
//! the markers and segment from the last full repaint, so a partial redraw can
//! refresh the readout without touching them. The egui shell paints the scene
//! every frame.

use crate::config::{OverlayStyle, Rgba};
use crate::data::readout::Readout;
use crate::data::ruler::{Point, RulerState};
use crate::input::RedrawScope;

/// Anything that can draw the ruler.
pub trait RulerRenderer {
    fn render(&mut self, state: &RulerState, scope: RedrawScope);
}

/// A straight stroke in physical pixels relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: Rgba,
    pub width: f32,
}

/// One line of readout text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub pos: [f32; 2],
    pub text: String,
}

/// Retained display list for the overlay.
#[derive(Debug, Clone)]
pub struct OverlayScene {
    style: OverlayStyle,
    text: Vec<TextItem>,
    strokes: Vec<Stroke>,
    generation: u64,
}

impl OverlayScene {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            text: Vec::new(),
            strokes: Vec::new(),
            generation: 0,
        }
    }

    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    pub fn text(&self) -> &[TextItem] {
        &self.text
    }

    /// Segment and marker strokes, in paint order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of full repaints performed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn rebuild_text(&mut self, readout: Readout) {
        let [x0, y0] = self.style.text_origin;
        let step = self.style.line_height;
        self.text = readout
            .lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| TextItem {
                pos: [x0, y0 + step * i as f32],
                text,
            })
            .collect();
    }

    fn rebuild_strokes(&mut self, state: &RulerState) {
        self.strokes.clear();
        let a = state.point_a();
        let b = state.point_b();
        if let Some(b) = b {
            // The segment starts at A even when A reads as unset.
            let from = state.raw_point_a().unwrap_or(Point::ORIGIN);
            self.strokes.push(Stroke {
                from: to_f32(from),
                to: to_f32(b),
                color: self.style.segment_color,
                width: self.style.segment_width,
            });
            self.push_cross(b, self.style.point_b_color);
        }
        if let Some(a) = a {
            self.push_cross(a, self.style.point_a_color);
        }
    }

    fn push_cross(&mut self, p: Point, color: Rgba) {
        let h = self.style.marker_half_size;
        let width = self.style.marker_width;
        let [x, y] = to_f32(p);
        self.strokes.push(Stroke {
            from: [x - h, y - h],
            to: [x + h, y + h],
            color,
            width,
        });
        self.strokes.push(Stroke {
            from: [x + h, y - h],
            to: [x - h, y + h],
            color,
            width,
        });
    }
}

impl RulerRenderer for OverlayScene {
    fn render(&mut self, state: &RulerState, scope: RedrawScope) {
        let readout = Readout::from_state(state);
        if scope == RedrawScope::FullRepaint {
            self.rebuild_strokes(state);
            self.generation += 1;
            tracing::trace!(
                generation = self.generation,
                readout = %readout.to_text(),
                "full repaint"
            );
        }
        self.rebuild_text(readout);
    }
}

fn to_f32(p: Point) -> [f32; 2] {
    [p.x as f32, p.y as f32]
}

use eframe::egui;

use crate::render::OverlayScene;

/// Paint the retained scene with its top-left at `origin`.
///
/// Everything in the scene and its style is in physical pixels.
pub(crate) fn paint_scene(
    painter: &egui::Painter,
    origin: egui::Pos2,
    pixels_per_point: f32,
    scene: &OverlayScene,
) {
    let to_screen = |p: [f32; 2]| origin + egui::vec2(p[0], p[1]) / pixels_per_point;

    let style = scene.style();
    let font = egui::FontId::monospace(style.font_size / pixels_per_point);
    let text_color = style.text_color.to_color32();
    for item in scene.text() {
        painter.text(
            to_screen(item.pos),
            egui::Align2::LEFT_TOP,
            &item.text,
            font.clone(),
            text_color,
        );
    }

    for s in scene.strokes() {
        painter.line_segment(
            [to_screen(s.from), to_screen(s.to)],
            egui::Stroke::new(s.width / pixels_per_point, s.color.to_color32()),
        );
    }
}

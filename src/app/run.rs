//! Top-level entry point for running the ruler as a native window.
//!
//! [`run_ruler`] builds the transparent, always-on-top viewport described by
//! the configuration and enters the eframe event loop.

use eframe::egui;

use crate::config::RulerConfig;
use crate::error::RulerError;

use super::ruler_app::RulerApp;

/// Launch the overlay. Blocks until the window is closed.
pub fn run_ruler(cfg: RulerConfig) -> Result<(), RulerError> {
    cfg.validate()?;

    let monitor = primary_monitor_size();
    let (pos, size) = cfg.window.geometry_for_monitor(monitor);
    tracing::info!(?monitor, ?pos, ?size, "opening ruler overlay");

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(cfg.title.clone())
        .with_transparent(true)
        .with_decorations(cfg.window.decorations)
        .with_position(pos)
        .with_inner_size(size);
    if cfg.window.always_on_top {
        viewport = viewport.with_window_level(egui::WindowLevel::AlwaysOnTop);
    }
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let title = cfg.title.clone();
    let app = RulerApp::new(cfg, monitor.is_some());
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Phosphor icons are used by the context menu.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

#[cfg(feature = "display_info")]
fn primary_monitor_size() -> Option<[f32; 2]> {
    match display_info::DisplayInfo::all() {
        Ok(displays) => displays
            .into_iter()
            .find(|d| d.is_primary)
            .map(|d| [d.width as f32, d.height as f32]),
        Err(e) => {
            tracing::warn!("failed to query displays: {e}");
            None
        }
    }
}

// Without display-info the app fits itself on the first frame.
#[cfg(not(feature = "display_info"))]
fn primary_monitor_size() -> Option<[f32; 2]> {
    None
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}

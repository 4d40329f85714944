//! Right-click context menu and the About dialog.

use eframe::egui;
use egui_phosphor::regular::{INFO, X};

use crate::input::MenuCommand;

/// Text shown by the About dialog.
pub fn about_text() -> String {
    format!(
        "Screen Ruler v{}\n\n\
         Move the pointer to read its position.\n\
         Click twice to measure the distance and angle between two points.\n\
         Right-click for this menu.",
        env!("CARGO_PKG_VERSION")
    )
}

fn icon(cmd: MenuCommand) -> &'static str {
    match cmd {
        MenuCommand::About => INFO,
        MenuCommand::Exit => X,
    }
}

/// Draw the menu entries; returns the command the user picked, if any.
pub(crate) fn context_menu(ui: &mut egui::Ui) -> Option<MenuCommand> {
    let mut chosen = None;
    for cmd in MenuCommand::ALL {
        if cmd == MenuCommand::Exit {
            ui.separator();
        }
        if ui.button(format!("{} {}", icon(cmd), cmd.label())).clicked() {
            chosen = Some(cmd);
            ui.close();
        }
    }
    chosen
}

/// Show the About text in a blocking native message box.
pub(crate) fn show_native_about(title: &str) {
    let _ = rfd::MessageDialog::new()
        .set_title(format!("About {title}"))
        .set_description(about_text())
        .set_level(rfd::MessageLevel::Info)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// In-window About dialog, used when native dialogs are disabled.
pub(crate) fn about_window(ctx: &egui::Context, open: &mut bool) {
    let mut close = false;
    egui::Window::new("About")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(about_text());
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });
    if close {
        *open = false;
    }
}

//! The eframe application hosting the ruler.
//!
//! Each frame the raw egui input is translated into [`InputEvent`]s, which
//! the [`RulerController`] applies and renders into the retained
//! [`OverlayScene`]. The scene is then painted on a translucent background.
//!
//! Ruler coordinates are physical pixels relative to the overlay's top-left
//! corner; egui points are scaled by `pixels_per_point` on the way in and
//! back on the way out.

use eframe::egui;

use crate::config::{RulerConfig, WindowConfig};
use crate::controller::RulerController;
use crate::data::ruler::Point;
use crate::input::{InputEvent, MenuCommand, RedrawScope, ShellRequest};
use crate::render::{OverlayScene, RulerRenderer};

use super::{menu, paint};

pub struct RulerApp {
    controller: RulerController,
    scene: OverlayScene,
    window: WindowConfig,
    title: String,
    native_about: bool,
    about_open: bool,
    closing: bool,
    /// Whether the window already covers the monitor (or must not).
    sized: bool,
    last_pointer: Option<Point>,
    last_size: Option<[f32; 2]>,
}

impl RulerApp {
    /// `sized` tells the app the window geometry was already fitted to the
    /// monitor before it opened.
    pub fn new(cfg: RulerConfig, sized: bool) -> Self {
        let mut controller = RulerController::new(cfg.unset_encoding);
        if let Some(events) = cfg.events {
            controller = controller.with_events(events);
        }
        let mut scene = OverlayScene::new(cfg.style);
        scene.render(controller.state(), RedrawScope::FullRepaint);
        Self {
            controller,
            scene,
            sized: sized || !cfg.window.fill_monitor,
            window: cfg.window,
            title: cfg.title,
            native_about: cfg.native_about,
            about_open: false,
            closing: false,
            last_pointer: None,
            last_size: None,
        }
    }

    /// Feed one event through the controller and act on the reaction.
    pub fn apply(&mut self, ctx: &egui::Context, event: InputEvent) {
        // Our own Exit already closed the viewport; its echo is not a new request.
        if self.closing && event == InputEvent::Close {
            return;
        }
        let reaction = self.controller.dispatch(event, &mut self.scene);
        match reaction.request {
            Some(ShellRequest::ShowAbout) => {
                if self.native_about {
                    menu::show_native_about(&self.title);
                } else {
                    self.about_open = true;
                }
            }
            Some(ShellRequest::Close) => {
                if event != InputEvent::Close {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                self.closing = true;
            }
            None => {}
        }
    }

    fn fit_to_monitor(&mut self, ctx: &egui::Context) {
        if self.sized {
            return;
        }
        let Some(monitor) = ctx.input(|i| i.viewport().monitor_size) else {
            return;
        };
        let (pos, size) = self.window.geometry_for_monitor(Some([monitor.x, monitor.y]));
        tracing::debug!(?pos, ?size, "fitting overlay to monitor");
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(pos.into()));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size.into()));
        self.sized = true;
    }

    fn window_events(&mut self, ctx: &egui::Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let size = ctx.input(|i| i.content_rect()).size();
        let size = [size.x, size.y];
        if self.last_size.is_some_and(|last| last != size) {
            events.push(InputEvent::Resize {
                width: size[0],
                height: size[1],
            });
        }
        self.last_size = Some(size);

        if ctx.input(|i| i.viewport().close_requested()) {
            events.push(InputEvent::Close);
        }
        events
    }

    /// Pointer motion and primary-button presses over the overlay.
    ///
    /// A point is captured the moment the button goes down, however long it
    /// is held and wherever it is released.
    fn pointer_events(
        &mut self,
        ctx: &egui::Context,
        response: &egui::Response,
    ) -> Vec<InputEvent> {
        let origin = response.rect.min;
        let ppp = ctx.pixels_per_point();

        let mut events = Vec::new();
        if let Some(p) = response.hover_pos().map(|pos| physical_point(pos, origin, ppp)) {
            if self.last_pointer != Some(p) {
                events.push(InputEvent::PointerMoved { x: p.x, y: p.y });
                self.last_pointer = Some(p);
            }
        }

        let pressed = ctx.input(|i| i.pointer.primary_pressed());
        if pressed && (response.is_pointer_button_down_on() || response.hovered()) {
            let pos = ctx
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(p) = pos.map(|pos| physical_point(pos, origin, ppp)) {
                events.push(InputEvent::Clicked { x: p.x, y: p.y });
                self.last_pointer = Some(p);
            }
        }
        events
    }

    /// One frame of the overlay: window bookkeeping, input, painting.
    fn frame(&mut self, ctx: &egui::Context) {
        self.fit_to_monitor(ctx);
        for event in self.window_events(ctx) {
            self.apply(ctx, event);
        }

        let fill = self.window.fill().to_color32();
        let ppp = ctx.pixels_per_point();
        let mut picked: Option<MenuCommand> = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(fill))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                for event in self.pointer_events(ctx, &response) {
                    self.apply(ctx, event);
                }
                response.context_menu(|ui| {
                    picked = menu::context_menu(ui);
                });
                paint::paint_scene(&painter, response.rect.min, ppp, &self.scene);
            });

        if let Some(cmd) = picked {
            self.apply(ctx, InputEvent::MenuCommand(cmd));
        }
        if self.about_open {
            menu::about_window(ctx, &mut self.about_open);
        }
    }
}

/// Convert an egui position to whole physical pixels relative to `origin`.
fn physical_point(pos: egui::Pos2, origin: egui::Pos2, pixels_per_point: f32) -> Point {
    let rel = (pos - origin) * pixels_per_point;
    Point::new(rel.x.round() as i32, rel.y.round() as i32)
}

impl eframe::App for RulerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        // Only the panel fill is visible; the window itself is fully clear.
        [0.0; 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventController, EventKind};

    fn app(cfg: RulerConfig) -> RulerApp {
        RulerApp::new(cfg, true)
    }

    fn button(x: f32, y: f32, button: egui::PointerButton, pressed: bool) -> Vec<egui::Event> {
        vec![egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }]
    }

    fn press(x: f32, y: f32) -> Vec<egui::Event> {
        button(x, y, egui::PointerButton::Primary, true)
    }

    fn release(x: f32, y: f32) -> Vec<egui::Event> {
        button(x, y, egui::PointerButton::Primary, false)
    }

    fn move_to(x: f32, y: f32) -> Vec<egui::Event> {
        vec![egui::Event::PointerMoved(egui::pos2(x, y))]
    }

    /// Run one frame at `time` with the given raw events.
    fn run_frame(ctx: &egui::Context, app: &mut RulerApp, time: f64, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            time: Some(time),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.frame(ctx));
    }

    /// Lay the overlay out once and hover it at (x, y) so hit testing knows it.
    fn hover(ctx: &egui::Context, app: &mut RulerApp, x: f32, y: f32) {
        run_frame(ctx, app, 0.0, vec![]);
        run_frame(ctx, app, 0.05, move_to(x, y));
    }

    #[test]
    fn long_press_captures_on_button_down() {
        let ctx = egui::Context::default();
        let mut app = app(RulerConfig::default());
        hover(&ctx, &mut app, 100.0, 100.0);

        run_frame(&ctx, &mut app, 0.1, press(100.0, 100.0));
        assert_eq!(app.controller.state().point_a(), Some(Point::new(100, 100)));

        run_frame(&ctx, &mut app, 1.5, release(100.0, 100.0));
        assert_eq!(app.controller.state().point_a(), Some(Point::new(100, 100)));
        assert_eq!(app.controller.state().point_b(), None);
    }

    #[test]
    fn drift_while_held_keeps_press_position() {
        let ctx = egui::Context::default();
        let mut app = app(RulerConfig::default());
        hover(&ctx, &mut app, 100.0, 100.0);

        run_frame(&ctx, &mut app, 0.1, press(100.0, 100.0));
        run_frame(&ctx, &mut app, 0.2, move_to(110.0, 100.0));
        run_frame(&ctx, &mut app, 0.3, release(110.0, 100.0));

        let state = app.controller.state();
        assert_eq!(state.point_a(), Some(Point::new(100, 100)));
        assert_eq!(state.point_b(), None);
        assert_eq!(state.cursor(), Point::new(110, 100));
    }

    #[test]
    fn two_presses_measure_a_segment() {
        let ctx = egui::Context::default();
        let mut app = app(RulerConfig::default());
        hover(&ctx, &mut app, 100.0, 100.0);

        run_frame(&ctx, &mut app, 0.1, press(100.0, 100.0));
        run_frame(&ctx, &mut app, 0.2, release(100.0, 100.0));
        run_frame(&ctx, &mut app, 0.3, move_to(400.0, 300.0));
        run_frame(&ctx, &mut app, 0.4, press(400.0, 300.0));

        let m = app.controller.measurement().expect("segment measured");
        assert_eq!((m.dx, m.dy), (300, -200));
        assert_eq!(app.scene.generation(), 3);
    }

    #[test]
    fn secondary_press_does_not_capture() {
        let ctx = egui::Context::default();
        let mut app = app(RulerConfig::default());
        hover(&ctx, &mut app, 100.0, 100.0);

        run_frame(&ctx, &mut app, 0.1, button(100.0, 100.0, egui::PointerButton::Secondary, true));
        assert_eq!(app.controller.state().point_a(), None);
        assert_eq!(app.controller.state().cursor(), Point::new(100, 100));
    }

    #[test]
    fn exit_then_close_request_notifies_once() {
        let events = EventController::new();
        let rx = events.subscribe_all();
        let cfg = RulerConfig {
            events: Some(events),
            ..Default::default()
        };
        let ctx = egui::Context::default();
        let mut app = app(cfg);

        app.apply(&ctx, InputEvent::MenuCommand(MenuCommand::Exit));
        app.apply(&ctx, InputEvent::Close);

        let exits = rx
            .try_iter()
            .filter(|e| e.kinds.contains(EventKind::EXIT_REQUESTED))
            .count();
        assert_eq!(exits, 1);
        assert!(app.closing);
    }

    #[test]
    fn window_close_is_handled_once() {
        let events = EventController::new();
        let rx = events.subscribe_all();
        let cfg = RulerConfig {
            events: Some(events),
            ..Default::default()
        };
        let ctx = egui::Context::default();
        let mut app = app(cfg);

        app.apply(&ctx, InputEvent::Close);
        app.apply(&ctx, InputEvent::Close);
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn points_are_scaled_to_physical_pixels() {
        let origin = egui::pos2(0.0, 0.0);
        assert_eq!(physical_point(egui::pos2(100.0, 50.0), origin, 1.0), Point::new(100, 50));
        assert_eq!(physical_point(egui::pos2(100.0, 50.0), origin, 1.5), Point::new(150, 75));
        assert_eq!(
            physical_point(egui::pos2(12.0, 8.0), egui::pos2(2.0, 3.0), 2.0),
            Point::new(20, 10)
        );
    }
}

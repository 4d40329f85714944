//! Dispatch of [`InputEvent`]s onto the ruler state.
//!
//! [`RulerController`] owns the [`RulerState`] and is the only thing that
//! mutates it. Each call to [`handle`](RulerController::handle) applies one
//! event and reports which redraw (if any) and which shell request (if any)
//! the event implies. [`dispatch`](RulerController::dispatch) additionally
//! renders inline, which is what the GUI uses.

use crate::data::measurement::Measurement;
use crate::data::ruler::{RulerState, Slot, UnsetEncoding};
use crate::events::{CaptureMeta, EventController, EventKind, RulerEvent};
use crate::input::{InputEvent, MenuCommand, Reaction, RedrawScope, ShellRequest};
use crate::render::RulerRenderer;

#[derive(Debug, Default)]
pub struct RulerController {
    state: RulerState,
    events: Option<EventController>,
}

impl RulerController {
    pub fn new(unset: UnsetEncoding) -> Self {
        Self {
            state: RulerState::with_encoding(unset),
            events: None,
        }
    }

    /// Forward every handled event to `events`.
    pub fn with_events(mut self, events: EventController) -> Self {
        self.events = Some(events);
        self
    }

    pub fn state(&self) -> &RulerState {
        &self.state
    }

    pub fn measurement(&self) -> Option<Measurement> {
        self.state.derive()
    }

    /// Apply one event to the state.
    pub fn handle(&mut self, event: InputEvent) -> Reaction {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.state.on_pointer_move(x, y);
                self.notify(RulerEvent::new(EventKind::POINTER_MOVED, self.state.cursor()));
                Reaction::redraw(RedrawScope::PartialText)
            }
            InputEvent::Clicked { x, y } => {
                let slot = self.state.on_click(x, y);
                self.on_captured(slot);
                Reaction::redraw(RedrawScope::FullRepaint)
            }
            InputEvent::MenuCommand(MenuCommand::About) => {
                tracing::debug!("about requested");
                self.notify(RulerEvent::new(EventKind::ABOUT_REQUESTED, self.state.cursor()));
                Reaction::request(ShellRequest::ShowAbout)
            }
            InputEvent::MenuCommand(MenuCommand::Exit) | InputEvent::Close => {
                tracing::info!("closing ruler overlay");
                self.notify(RulerEvent::new(EventKind::EXIT_REQUESTED, self.state.cursor()));
                Reaction::request(ShellRequest::Close)
            }
            InputEvent::Resize { width, height } => {
                tracing::debug!(width, height, "overlay resized");
                let mut evt = RulerEvent::new(EventKind::RESIZE, self.state.cursor());
                evt.resize = Some([width, height]);
                self.notify(evt);
                Reaction::redraw(RedrawScope::FullRepaint)
            }
        }
    }

    /// Apply one event and render inline if it requires a redraw.
    pub fn dispatch(&mut self, event: InputEvent, renderer: &mut impl RulerRenderer) -> Reaction {
        let reaction = self.handle(event);
        if let Some(scope) = reaction.redraw {
            renderer.render(&self.state, scope);
        }
        reaction
    }

    fn on_captured(&mut self, slot: Slot) {
        let point = self.state.cursor();
        let measurement = self.state.derive();
        match (slot, measurement) {
            (Slot::B, Some(m)) => tracing::info!(
                dx = m.dx,
                dy = m.dy,
                distance = m.distance,
                angle = m.angle_degrees,
                slope = ?m.slope(),
                "measured segment"
            ),
            _ => tracing::debug!(?slot, %point, "captured point"),
        }

        let mut kinds = EventKind::POINT_CAPTURED;
        if measurement.is_some() {
            kinds |= EventKind::MEASUREMENT_COMPLETE;
        }
        let mut evt = RulerEvent::new(kinds, point);
        evt.captured = Some(CaptureMeta { slot, point });
        evt.measurement = measurement;
        self.notify(evt);
    }

    fn notify(&self, event: RulerEvent) {
        if let Some(events) = &self.events {
            events.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ruler::Point;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Point, RedrawScope)>,
    }

    impl RulerRenderer for Recorder {
        fn render(&mut self, state: &RulerState, scope: RedrawScope) {
            self.calls.push((state.cursor(), scope));
        }
    }

    #[test]
    fn move_requests_partial_redraw() {
        let mut c = RulerController::default();
        let r = c.handle(InputEvent::PointerMoved { x: 3, y: 4 });
        assert_eq!(r, Reaction::redraw(RedrawScope::PartialText));
        assert_eq!(c.state().cursor(), Point::new(3, 4));
    }

    #[test]
    fn click_requests_full_repaint() {
        let mut c = RulerController::default();
        let r = c.handle(InputEvent::Clicked { x: 3, y: 4 });
        assert_eq!(r, Reaction::redraw(RedrawScope::FullRepaint));
        assert_eq!(c.state().point_a(), Some(Point::new(3, 4)));
    }

    #[test]
    fn menu_commands_do_not_touch_state() {
        let mut c = RulerController::default();
        c.handle(InputEvent::Clicked { x: 1, y: 1 });
        let before = c.state().clone();
        assert_eq!(
            c.handle(InputEvent::MenuCommand(MenuCommand::About)),
            Reaction::request(ShellRequest::ShowAbout)
        );
        assert_eq!(
            c.handle(InputEvent::MenuCommand(MenuCommand::Exit)),
            Reaction::request(ShellRequest::Close)
        );
        assert_eq!(c.handle(InputEvent::Close), Reaction::request(ShellRequest::Close));
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn resize_forces_full_repaint_without_state_change() {
        let mut c = RulerController::default();
        let r = c.handle(InputEvent::Resize {
            width: 800.0,
            height: 600.0,
        });
        assert_eq!(r.redraw, Some(RedrawScope::FullRepaint));
        assert_eq!(c.state(), &RulerState::new());
    }

    #[test]
    fn dispatch_renders_inline() {
        let mut c = RulerController::default();
        let mut rec = Recorder::default();
        c.dispatch(InputEvent::PointerMoved { x: 1, y: 2 }, &mut rec);
        c.dispatch(InputEvent::Clicked { x: 5, y: 6 }, &mut rec);
        c.dispatch(InputEvent::MenuCommand(MenuCommand::About), &mut rec);
        assert_eq!(
            rec.calls,
            vec![
                (Point::new(1, 2), RedrawScope::PartialText),
                (Point::new(5, 6), RedrawScope::FullRepaint),
            ]
        );
    }

    #[test]
    fn second_click_emits_measurement_complete() {
        let events = EventController::new();
        let rx = events.subscribe(crate::events::EventFilter::only(
            EventKind::MEASUREMENT_COMPLETE,
        ));
        let mut c = RulerController::default().with_events(events);
        c.handle(InputEvent::Clicked { x: 0, y: 0 });
        assert!(rx.try_recv().is_err());
        c.handle(InputEvent::Clicked { x: 3, y: -4 });
        let evt = rx.try_recv().unwrap();
        assert!(evt.kinds.contains(EventKind::POINT_CAPTURED));
        assert_eq!(evt.captured.unwrap().slot, Slot::B);
        assert_eq!(evt.measurement.unwrap().distance, 5.0);
    }
}

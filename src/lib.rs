//! Screen Ruler crate root: re-exports and module wiring.
//!
//! A transparent, always-on-top overlay built on egui/eframe that shows the
//! pointer position and, after two clicks, the distance and angle between the
//! clicked points.
//!
//! - `data`: the point-capture state machine, measurement and text readout
//! - `input`: windowing-agnostic input events and redraw scopes
//! - `controller`: dispatch of input events onto the state
//! - `render`: the render contract and the retained overlay scene
//! - `events`: subscription to ruler events from embedding code
//! - `config`: window/style configuration and JSON/YAML loading
//! - `app`: the eframe shell and [`run_ruler`] entry point

pub mod app;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod events;
pub mod input;
pub mod render;

// Public re-exports for a compact external API
pub use app::{run_ruler, RulerApp};
pub use config::{
    ConfigError, ConfigOverrides, OverlayStyle, Rgba, RulerConfig, WindowConfig,
};
pub use controller::RulerController;
pub use data::measurement::Measurement;
pub use data::readout::Readout;
pub use data::ruler::{Point, RulerState, Slot, UnsetEncoding};
pub use error::RulerError;
pub use events::{EventController, EventFilter, EventKind, RulerEvent};
pub use input::{InputEvent, MenuCommand, Reaction, RedrawScope, ShellRequest};
pub use render::{OverlayScene, RulerRenderer};

//! GUI shell for the ruler.
//!
//! | Sub-module     | Responsibility |
//! | -------------- | -------------- |
//! | [`ruler_app`]  | [`RulerApp`] (eframe): input translation and per-frame painting |
//! | [`menu`]       | Right-click context menu and About dialog |
//! | `paint`        | Painting the retained [`OverlayScene`](crate::render::OverlayScene) with egui |
//! | [`run`]        | [`run_ruler()`] entry point and icon loading |

pub mod menu;
mod paint;
pub mod ruler_app;
pub mod run;

pub use ruler_app::RulerApp;
pub use run::run_ruler;

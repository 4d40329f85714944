//! Configuration for the ruler overlay.
//!
//! Every field has a default matching the classic overlay: a window inset
//! 10 px from the screen edges, white background at alpha 150, black readout
//! text, a blue cross on point A, a red cross on point B and a thin black
//! segment between them. Config files may be JSON or YAML and may omit any
//! field.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::ruler::UnsetEncoding;
use crate::events::EventController;

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported config format `{0}` (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Colours
// ─────────────────────────────────────────────────────────────────────────────

/// Serializable RGBA colour, unmultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0, 0, 0, 255]);
    pub const WHITE: Rgba = Rgba([255, 255, 255, 255]);
    pub const RED: Rgba = Rgba([255, 0, 0, 255]);
    pub const BLUE: Rgba = Rgba([0, 0, 255, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba([r, g, b, 255])
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        let [r, g, b, _] = self.0;
        Rgba([r, g, b, a])
    }

    pub fn to_color32(self) -> egui::Color32 {
        let [r, g, b, a] = self.0;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Window
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry and chrome of the overlay window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Inset from each screen edge, in pixels.
    pub margin: f32,
    /// Size the window to cover the monitor minus `margin` on each side.
    pub fill_monitor: bool,
    /// Inner size used when the monitor size is unknown or `fill_monitor` is off.
    pub fallback_size: [f32; 2],
    /// Background alpha (0 = invisible, 255 = opaque).
    pub opacity: u8,
    /// Background colour; its own alpha is replaced by `opacity`.
    pub background: Rgba,
    pub always_on_top: bool,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            fill_monitor: true,
            fallback_size: [1280.0, 800.0],
            opacity: 150,
            background: Rgba::WHITE,
            always_on_top: true,
            decorations: true,
        }
    }
}

impl WindowConfig {
    /// Background colour with `opacity` applied.
    pub fn fill(&self) -> Rgba {
        self.background.with_alpha(self.opacity)
    }

    /// Outer position and inner size for a monitor of the given size.
    pub fn geometry_for_monitor(&self, monitor: Option<[f32; 2]>) -> ([f32; 2], [f32; 2]) {
        let pos = [self.margin, self.margin];
        match monitor {
            Some([w, h]) if self.fill_monitor && w > 2.0 * self.margin && h > 2.0 * self.margin => {
                (pos, [w - 2.0 * self.margin, h - 2.0 * self.margin])
            }
            _ => (pos, self.fallback_size),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlay style
// ─────────────────────────────────────────────────────────────────────────────

/// Colours and metrics for the readout and markers.
///
/// Metrics are physical pixels, like the ruler coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub text_color: Rgba,
    /// Top-left corner of the first readout line.
    pub text_origin: [f32; 2],
    pub line_height: f32,
    pub font_size: f32,
    pub point_a_color: Rgba,
    pub point_b_color: Rgba,
    pub segment_color: Rgba,
    /// Half the width of each X marker.
    pub marker_half_size: f32,
    pub marker_width: f32,
    pub segment_width: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            text_color: Rgba::BLACK,
            text_origin: [10.0, 10.0],
            line_height: 15.0,
            font_size: 13.0,
            point_a_color: Rgba::BLUE,
            point_b_color: Rgba::RED,
            segment_color: Rgba::BLACK,
            marker_half_size: 5.0,
            marker_width: 3.0,
            segment_width: 1.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RulerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `window`         | Geometry, opacity, always-on-top |
/// | `style`          | Readout and marker appearance |
/// | `unset_encoding` | Whether `(0, 0)` counts as "not clicked" |
/// | `native_about`   | Use a native message box for About |
/// | `events`         | Optional subscriber hook (not serialized) |
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Native window title.
    pub title: String,
    pub window: WindowConfig,
    pub style: OverlayStyle,
    pub unset_encoding: UnsetEncoding,
    pub native_about: bool,
    #[serde(skip)]
    pub events: Option<EventController>,
}

/// Values given on the command line; unset fields leave the config alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub opacity: Option<u8>,
    pub no_topmost: bool,
    pub legacy_sentinel: bool,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            title: "Screen Ruler".to_string(),
            window: WindowConfig::default(),
            style: OverlayStyle::default(),
            unset_encoding: UnsetEncoding::Explicit,
            native_about: true,
            events: None,
        }
    }
}

impl RulerConfig {
    /// Load from a `.json`, `.yaml` or `.yml` file and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let cfg = match format {
            ConfigFormat::Json => Self::from_json_str(&text)?,
            ConfigFormat::Yaml => Self::from_yaml_str(&text)?,
        };
        tracing::debug!(path = %path.display(), "loaded ruler config");
        Ok(cfg)
    }

    /// Save to a `.json`, `.yaml` or `.yml` file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => self.to_json_string()?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        };
        fs::write(path, text)?;
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Layer command-line overrides on top of file or default values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(opacity) = overrides.opacity {
            self.window.opacity = opacity;
        }
        if overrides.no_topmost {
            self.window.always_on_top = false;
        }
        if overrides.legacy_sentinel {
            self.unset_encoding = UnsetEncoding::ZeroSentinel;
        }
    }

    /// Reject values that would make the overlay unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be a positive number, got {v}"),
                })
            }
        }
        fn non_negative(field: &'static str, v: f32) -> Result<(), ConfigError> {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be zero or positive, got {v}"),
                })
            }
        }

        non_negative("window.margin", self.window.margin)?;
        positive("window.fallback_size[0]", self.window.fallback_size[0])?;
        positive("window.fallback_size[1]", self.window.fallback_size[1])?;
        positive("style.line_height", self.style.line_height)?;
        positive("style.font_size", self.style.font_size)?;
        non_negative("style.marker_half_size", self.style.marker_half_size)?;
        positive("style.marker_width", self.style.marker_width)?;
        positive("style.segment_width", self.style.segment_width)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }
}

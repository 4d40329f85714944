//! Errors surfaced by the GUI shell.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum RulerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("window system error: {0}")]
    Ui(#[from] eframe::Error),
}

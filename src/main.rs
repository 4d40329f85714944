//! Screen Ruler binary entry point.

use std::path::PathBuf;

use clap::Parser;
use screen_ruler::{run_ruler, ConfigOverrides, RulerConfig, RulerError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "screen-ruler",
    version,
    about = "Measure pixel distances and angles on screen"
)]
struct Cli {
    /// Config file (.json, .yaml or .yml).
    #[arg(long, env = "SCREEN_RULER_CONFIG")]
    config: Option<PathBuf>,

    /// Background opacity, 0 (invisible) to 255 (opaque).
    #[arg(long)]
    opacity: Option<u8>,

    /// Do not keep the overlay above other windows.
    #[arg(long)]
    no_topmost: bool,

    /// Treat a point at (0, 0) as "not clicked yet".
    #[arg(long)]
    legacy_sentinel: bool,

    /// Print the default configuration as JSON and exit.
    #[arg(long)]
    print_default_config: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            opacity: self.opacity,
            no_topmost: self.no_topmost,
            legacy_sentinel: self.legacy_sentinel,
        }
    }

    fn into_config(self) -> Result<RulerConfig, RulerError> {
        let mut cfg = match &self.config {
            Some(path) => RulerConfig::load(path)?,
            None => RulerConfig::default(),
        };
        cfg.apply_overrides(&self.overrides());
        Ok(cfg)
    }
}

fn main() -> Result<(), RulerError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "screen_ruler=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if cli.print_default_config {
        println!("{}", RulerConfig::default().to_json_string()?);
        return Ok(());
    }

    let cfg = cli.into_config()?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting screen ruler");
    run_ruler(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use screen_ruler::UnsetEncoding;

    fn config_from(args: &[&str]) -> RulerConfig {
        Cli::try_parse_from(args).unwrap().into_config().unwrap()
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cfg = config_from(&["screen-ruler"]);
        assert_eq!(cfg.window.opacity, 150);
        assert!(cfg.window.always_on_top);
        assert_eq!(cfg.unset_encoding, UnsetEncoding::Explicit);
    }

    #[test]
    fn opacity_flag_applies() {
        let cfg = config_from(&["screen-ruler", "--opacity", "40"]);
        assert_eq!(cfg.window.opacity, 40);
        assert_eq!(cfg.window.fill().0[3], 40);
    }

    #[test]
    fn no_topmost_flag_applies() {
        let cfg = config_from(&["screen-ruler", "--no-topmost"]);
        assert!(!cfg.window.always_on_top);
    }

    #[test]
    fn legacy_sentinel_flag_applies() {
        let cfg = config_from(&["screen-ruler", "--legacy-sentinel"]);
        assert_eq!(cfg.unset_encoding, UnsetEncoding::ZeroSentinel);
    }

    #[test]
    fn opacity_out_of_range_is_rejected() {
        assert!(Cli::try_parse_from(["screen-ruler", "--opacity", "300"]).is_err());
    }
}

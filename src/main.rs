#![forbid(unsafe_code)]

mod background;
mod config;
mod constants;
mod content;
mod cursor;
mod easing;
mod gui;
mod reveal;
mod transition;
mod typing;
mod types;

use std::path::PathBuf;

use clap::Parser;
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use config::{Motion, Settings};
use types::Profile;

/// Desktop portfolio viewer with a technical/copywriting persona switcher
#[derive(Debug, Parser)]
#[command(name = "foliodesk", version, about)]
struct Args {
    /// Persona to show at startup (overrides the saved setting)
    #[arg(long, value_enum)]
    profile: Option<Profile>,

    /// Disable all animations regardless of the saved setting
    #[arg(long)]
    reduced_motion: bool,

    /// Alternate settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse log level from environment variable
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let settings_path = args.config.unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&settings_path);
    info!(settings = ?settings, "loaded settings");

    // Reduced motion is resolved once here and applied process-wide
    let motion = Motion::resolve(args.reduced_motion || settings.reduced_motion);
    let start_profile = args.profile.unwrap_or(settings.start_profile);

    gui::run_gui(settings, settings_path, motion, start_profile)?;
    Ok(())
}

//! egui/eframe shell for the portfolio viewer

mod app;
pub mod components;
pub mod constants;

use std::path::PathBuf;

use anyhow::anyhow;
use eframe::NativeOptions;

use crate::config::{Motion, Settings};
use crate::types::Profile;

use app::PortfolioApp;
use constants::{WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH};

pub fn run_gui(
    settings: Settings,
    settings_path: PathBuf,
    motion: Motion,
    start_profile: Profile,
) -> anyhow::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Foliodesk"),
        ..Default::default()
    };

    eframe::run_native(
        "Foliodesk",
        options,
        Box::new(move |cc| {
            Ok(Box::new(PortfolioApp::new(
                cc,
                settings,
                settings_path,
                motion,
                start_profile,
            )))
        }),
    )
    .map_err(|err| anyhow!("Failed to launch viewer: {err}"))
}

//! Persistent viewer settings and the motion-preference override
//!
//! Settings live in a small TOML file under the user config dir. A missing
//! file is created with defaults; an unreadable or unparsable file degrades
//! to defaults with a logged warning, never a startup failure.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{hover, reveal, switcher, validation};
use crate::transition::TransitionTimings;
use crate::types::{Profile, Theme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    /// Persona shown at startup
    #[serde(default)]
    pub start_profile: Profile,

    /// Accessibility: zero every animation duration
    #[serde(default)]
    pub reduced_motion: bool,

    #[serde(default = "default_window_width")]
    pub window_width: f32,

    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_window_width() -> f32 {
    1200.0
}

fn default_window_height() -> f32 {
    800.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            start_profile: Profile::default(),
            reduced_motion: false,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        path
    }

    /// Load from `path`, writing a default file when none exists. Any error
    /// degrades to defaults; the viewer must always come up.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            info!(path = %path.display(), "settings file not found, creating defaults");
            let settings = Settings::default();
            if let Err(err) = settings.save(path) {
                warn!(error = ?err, "failed to write default settings");
            }
            return settings;
        }

        let mut settings = match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Settings>(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "settings file unparsable, using defaults");
                    Settings::default()
                }
            },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "settings file unreadable, using defaults");
                Settings::default()
            }
        };
        settings.validate_and_clamp();
        settings
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {parent:?}"))?;
        }
        let toml_string =
            toml::to_string_pretty(self).context("Failed to serialize settings to TOML")?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write settings to {path:?}"))?;
        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Clamp window dimensions to sane ranges
    fn validate_and_clamp(&mut self) {
        use validation::{MAX_WINDOW, MIN_WINDOW};

        if !self.window_width.is_finite() || self.window_width < MIN_WINDOW {
            warn!(window_width = self.window_width, min = MIN_WINDOW, "window_width below minimum, using default");
            self.window_width = default_window_width();
        } else if self.window_width > MAX_WINDOW {
            warn!(window_width = self.window_width, max = MAX_WINDOW, "window_width exceeds maximum, clamping");
            self.window_width = MAX_WINDOW;
        }

        if !self.window_height.is_finite() || self.window_height < MIN_WINDOW {
            warn!(window_height = self.window_height, min = MIN_WINDOW, "window_height below minimum, using default");
            self.window_height = default_window_height();
        } else if self.window_height > MAX_WINDOW {
            warn!(window_height = self.window_height, max = MAX_WINDOW, "window_height exceeds maximum, clamping");
            self.window_height = MAX_WINDOW;
        }
    }
}

/// Every animation duration the viewer uses, resolved once at startup.
/// Reduced motion zeroes all of them through `zeroed`, so consumers never
/// check the flag themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Motion {
    pub transition: TransitionTimings,
    pub reveal: Duration,
    pub counter: Duration,
    pub hover: Duration,
    pub tag_pulse: Duration,
    pub flip_commit: Duration,
    pub flip_release: Duration,
    /// Typing loop and particle drift run only when true
    pub ambient: bool,
}

impl Motion {
    pub fn standard() -> Self {
        Self {
            transition: TransitionTimings::standard(),
            reveal: Duration::from_millis(reveal::REVEAL_MS),
            counter: Duration::from_millis(reveal::COUNTER_MS),
            hover: Duration::from_millis(hover::SCALE_MS),
            tag_pulse: Duration::from_millis(hover::TAG_PULSE_MS),
            flip_commit: Duration::from_millis(switcher::FLIP_COMMIT_MS),
            flip_release: Duration::from_millis(switcher::FLIP_RELEASE_MS),
            ambient: true,
        }
    }

    pub fn zeroed() -> Self {
        Self {
            transition: TransitionTimings::zeroed(),
            reveal: Duration::ZERO,
            counter: Duration::ZERO,
            hover: Duration::ZERO,
            tag_pulse: Duration::ZERO,
            flip_commit: Duration::ZERO,
            flip_release: Duration::ZERO,
            ambient: false,
        }
    }

    /// Resolve the process-wide motion configuration from the persisted
    /// setting and the CLI override.
    pub fn resolve(reduced_motion: bool) -> Self {
        if reduced_motion {
            info!("reduced motion requested, disabling animations");
            Self::zeroed()
        } else {
            Self::standard()
        }
    }
}

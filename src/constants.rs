//! Application-wide constants
//!
//! This module contains all magic numbers used throughout the application,
//! providing a single source of truth for timing and tuning values.

/// Config file location
pub mod config {
    /// Directory under the user config dir
    pub const APP_DIR: &str = "foliodesk";

    /// Settings file name
    pub const FILENAME: &str = "config.toml";
}

/// Custom cursor tuning
pub mod cursor {
    /// Dot spring: high stiffness, low mass, follows closely
    pub const DOT_STIFFNESS: f32 = 300.0;
    pub const DOT_DAMPING: f32 = 25.0;
    pub const DOT_MASS: f32 = 0.5;

    /// Ring spring: softer, trails behind the dot
    pub const RING_STIFFNESS: f32 = 150.0;
    pub const RING_DAMPING: f32 = 20.0;
    pub const RING_MASS: f32 = 0.8;

    /// Integration step clamp, guards against timestamp glitches
    pub const DT_MIN: f32 = 0.001;
    pub const DT_MAX: f32 = 0.1;

    /// Trail points are dropped once older than this
    pub const TRAIL_WINDOW_MS: u64 = 300;

    /// Hard cap on trail length regardless of age
    pub const TRAIL_CAP: usize = 12;

    /// Minimum spacing between trail appends
    pub const TRAIL_THROTTLE_MS: u64 = 15;

    /// Click ripples expire exactly this long after creation
    pub const RIPPLE_LIFETIME_MS: u64 = 1000;

    /// Ripples grow this far beyond the ring radius while fading
    pub const RIPPLE_SPREAD: f32 = 40.0;

    pub const DOT_RADIUS: f32 = 4.0;
    pub const RING_RADIUS: f32 = 16.0;

    /// Dot and ring scale factor while hovering an interactive element
    pub const HOVER_SCALE: f32 = 1.5;

    /// Convergence epsilon for the settled check (pixels)
    pub const SETTLE_EPSILON: f32 = 0.5;
}

/// Profile transition checkpoints and overlay timing
pub mod transition {
    /// Content profile swaps this long after the trigger
    pub const SWAP_MS: u64 = 600;

    /// Transition clears this long after the trigger
    pub const TOTAL_MS: u64 = 1400;

    /// Per-panel start delay of the curtain wipe
    pub const PANEL_STAGGER_MS: u64 = 60;

    /// Number of vertical wipe panels
    pub const PANEL_COUNT: usize = 6;

    /// Particles in the center burst
    pub const BURST_COUNT: usize = 30;
}

/// Scroll reveal and parallax tuning
pub mod reveal {
    /// Visible fraction of a section required to latch it revealed
    pub const THRESHOLD: f32 = 0.15;

    /// Viewport bottom inset applied before the intersection test
    pub const BOTTOM_MARGIN: f32 = 50.0;

    /// Reveal fade/slide duration
    pub const REVEAL_MS: u64 = 600;

    /// Sections slide up from this offset while revealing
    pub const SLIDE_OFFSET: f32 = 24.0;

    /// Stat counters interpolate zero to target over this long
    pub const COUNTER_MS: u64 = 2000;

    /// Scroll anchor below the viewport top used for nav highlighting
    pub const NAV_ANCHOR: f32 = 100.0;

    /// Hero content translates by scroll * this factor
    pub const PARALLAX_FACTOR: f32 = 0.5;
}

/// Hero headline typing loop
pub mod typing {
    /// Per-character delay while typing
    pub const TYPE_MS: u64 = 100;

    /// Per-character delay while deleting
    pub const DELETE_MS: u64 = 50;

    /// Hold at the full title before deleting
    pub const HOLD_MS: u64 = 2000;

    /// Pause before typing the next title
    pub const ADVANCE_MS: u64 = 500;
}

/// Ambient particle background
pub mod background {
    pub const PARTICLE_COUNT: usize = 60;

    /// Opacity lost per frame; faded particles respawn
    pub const OPACITY_DECAY: f32 = 0.01;

    pub const MIN_SIZE: f32 = 1.0;
    pub const MAX_SIZE: f32 = 3.0;
    pub const MAX_DRIFT: f32 = 0.4;
    pub const MIN_OPACITY: f32 = 0.2;
    pub const MAX_OPACITY: f32 = 0.7;
}

/// Switcher button flip lockout
pub mod switcher {
    /// Click to profile-change commit
    pub const FLIP_COMMIT_MS: u64 = 400;

    /// Commit to lockout release
    pub const FLIP_RELEASE_MS: u64 = 800;
}

/// Hover feedback
pub mod hover {
    /// Cursor/card hover scale animation duration
    pub const SCALE_MS: u64 = 300;

    /// Skill tag pulse duration after a click
    pub const TAG_PULSE_MS: u64 = 500;
}

/// Settings validation bounds
pub mod validation {
    pub const MIN_WINDOW: f32 = 640.0;
    pub const MAX_WINDOW: f32 = 8192.0;
}

//! GUI-specific constants for layout and the profile accent palettes

use egui::Color32;

use crate::types::Profile;

/// Viewer window dimensions
pub const WINDOW_MIN_WIDTH: f32 = 900.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 48.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const CONTENT_MAX_WIDTH: f32 = 860.0;

/// Technical persona accents (blue to violet)
pub const TECH_ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
pub const TECH_ACCENT_ALT: Color32 = Color32::from_rgb(147, 51, 234);

/// Copywriting persona accents (emerald to teal)
pub const COPY_ACCENT: Color32 = Color32::from_rgb(16, 185, 129);
pub const COPY_ACCENT_ALT: Color32 = Color32::from_rgb(13, 148, 136);

/// Primary and secondary accent for a persona
pub fn accents(profile: Profile) -> (Color32, Color32) {
    match profile {
        Profile::Technical => (TECH_ACCENT, TECH_ACCENT_ALT),
        Profile::Copywriting => (COPY_ACCENT, COPY_ACCENT_ALT),
    }
}

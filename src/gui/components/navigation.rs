//! Top navigation bar: section links, active-section highlight, theme toggle

use egui::RichText;

use crate::cursor::PointerTracker;
use crate::gui::constants::ITEM_SPACING;
use crate::types::{SectionId, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    ScrollTo(SectionId),
    ToggleTheme,
}

/// Draw the bar inside a top panel. `active` is the section currently under
/// the scroll anchor; its link renders highlighted.
pub fn ui(
    ui: &mut egui::Ui,
    name: &str,
    active: Option<SectionId>,
    theme: Theme,
    tracker: &mut PointerTracker,
) -> NavAction {
    let mut action = NavAction::None;

    ui.horizontal(|ui| {
        ui.add_space(ITEM_SPACING);
        ui.label(RichText::new(name).strong().size(18.0));
        ui.separator();

        for section in SectionId::ALL {
            let selected = active == Some(section);
            let response = ui.selectable_label(selected, section.label());
            tracker.note_interactive(response.hovered());
            if response.clicked() {
                action = NavAction::ScrollTo(section);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let icon = match theme {
                Theme::Dark => "☀",
                Theme::Light => "🌙",
            };
            let response = ui.button(icon).on_hover_text("Toggle theme");
            tracker.note_interactive(response.hovered());
            if response.clicked() {
                action = NavAction::ToggleTheme;
            }
        });
    });

    action
}

//! Floating profile switcher button
//!
//! Anchored bottom-right. A click starts the flip lockout: the profile
//! change commits 400 ms in (so the button flip reads before the curtain
//! covers it) and the button unlocks 800 ms after the commit. The lockout
//! is the button's own re-entrancy guard, separate from the transition
//! controller's running guard.

use std::time::Instant;

use egui::{Align2, Color32, Id, Order, RichText, vec2};

use crate::config::Motion;
use crate::cursor::PointerTracker;
use crate::gui::constants::accents;
use crate::types::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitcherAction {
    None,
    /// Commit the switch toward this profile now
    Switch(Profile),
}

#[derive(Debug, Clone, Copy)]
struct Flip {
    clicked_at: Instant,
    committed: bool,
}

#[derive(Debug, Default)]
pub struct ProfileSwitcher {
    flip: Option<Flip>,
}

impl ProfileSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flipping(&self) -> bool {
        self.flip.is_some()
    }

    /// Record a click; ignored while a flip is in flight
    fn press(&mut self, now: Instant) {
        if self.flip.is_none() {
            self.flip = Some(Flip {
                clicked_at: now,
                committed: false,
            });
        }
    }

    /// Advance the lockout. The commit action is returned exactly once per
    /// click, `flip_commit` after the press; the lockout releases
    /// `flip_release` after the commit.
    fn advance(&mut self, current: Profile, motion: &Motion, now: Instant) -> SwitcherAction {
        let mut action = SwitcherAction::None;
        if let Some(flip) = self.flip.as_mut() {
            let elapsed = now.saturating_duration_since(flip.clicked_at);
            if !flip.committed && elapsed >= motion.flip_commit {
                flip.committed = true;
                action = SwitcherAction::Switch(current.toggled());
            }
            if flip.committed && elapsed >= motion.flip_commit + motion.flip_release {
                self.flip = None;
            }
        }
        action
    }

    /// Draw the button and advance the flip lockout
    pub fn ui(
        &mut self,
        ctx: &egui::Context,
        current: Profile,
        tracker: &mut PointerTracker,
        motion: &Motion,
        now: Instant,
    ) -> SwitcherAction {
        let action = self.advance(current, motion, now);

        let (accent, accent_alt) = accents(current);
        let flipping = self.is_flipping();
        let next = current.toggled();

        egui::Area::new(Id::new("profile-switcher"))
            .anchor(Align2::RIGHT_BOTTOM, vec2(-24.0, -24.0))
            .order(Order::Foreground)
            .show(ctx, |ui| {
                let label = RichText::new(format!("{}  {}", glyph(next), next.label()))
                    .size(16.0)
                    .color(Color32::WHITE)
                    .strong();
                let fill = if flipping { accent_alt } else { accent };
                let button = egui::Button::new(label)
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(12))
                    .min_size(vec2(180.0, 44.0));
                let response = ui.add_enabled(!flipping, button);
                tracker.note_interactive(response.hovered());

                if response.clicked() {
                    self.press(now);
                }

                ui.small(format!("switch to {}", next.label().to_lowercase()));
            });

        action
    }
}

fn glyph(profile: Profile) -> &'static str {
    crate::content::for_profile(profile).glyph
}

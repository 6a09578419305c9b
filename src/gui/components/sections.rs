//! Page sections rendered inside the scroll area
//!
//! Each section reports its on-screen rect to the reveal tracker and draws
//! with the tracker's current entrance progress (fade + upward slide). The
//! rect observed this frame drives next frame's reveal state, mirroring how
//! an intersection observer lags one notification behind the scroll.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Datelike;
use egui::{Align, Color32, Rect, RichText};

use crate::config::Motion;
use crate::constants::reveal::SLIDE_OFFSET;
use crate::content::ProfileContent;
use crate::cursor::PointerTracker;
use crate::easing::ease_out_cubic;
use crate::gui::constants::{CONTENT_MAX_WIDTH, ITEM_SPACING, SECTION_SPACING, accents};
use crate::reveal::{Counter, RevealState, hero_parallax};
use crate::types::{Profile, SectionId};

/// Inputs shared by every section for one frame
pub struct SectionFrame<'a> {
    pub profile: Profile,
    pub content: &'static ProfileContent,
    pub tracker: &'a mut PointerTracker,
    pub reveal: &'a mut RevealState,
    pub counters: &'a mut [Counter],
    pub typing_line: &'a str,
    pub motion: &'a Motion,
    pub now: Instant,
    /// Scroll-area clip rect, the "viewport" for intersection tests
    pub viewport: Rect,
    pub scroll_offset: f32,
    /// Pending smooth-scroll target from the navigation bar
    pub scroll_to: Option<SectionId>,
}

/// Cross-frame presentation state owned by the section renderer
#[derive(Debug, Default)]
pub struct SectionViews {
    /// Card hovered last frame; its siblings render dimmed this frame
    hovered_card: Option<usize>,
    tag_pulses: HashMap<usize, Instant>,
}

impl SectionViews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget hover/pulse state; called when the profile swap replaces the
    /// content under the overlay.
    pub fn reset(&mut self) {
        self.hovered_card = None;
        self.tag_pulses.clear();
    }

    /// Render every section top to bottom, returning each section's rect
    /// for nav highlighting.
    pub fn show_all(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Vec<(SectionId, Rect)> {
        let mut rects = Vec::with_capacity(SectionId::ALL.len());
        ui.set_max_width(CONTENT_MAX_WIDTH);

        rects.push((SectionId::Hero, self.hero(ui, frame)));
        rects.push((SectionId::About, self.about(ui, frame)));
        rects.push((SectionId::Resume, self.resume(ui, frame)));
        rects.push((SectionId::Achievements, self.achievements(ui, frame)));
        rects.push((SectionId::Projects, self.projects(ui, frame)));
        rects.push((SectionId::Certifications, self.certifications(ui, frame)));
        rects.push((SectionId::Contact, self.contact(ui, frame)));
        self.footer(ui, frame);

        rects
    }

    /// Wrap one section: apply reveal fade/slide, capture the rect, feed it
    /// back to the reveal tracker, and honor a pending scroll request.
    fn section(
        &mut self,
        ui: &mut egui::Ui,
        frame: &mut SectionFrame<'_>,
        id: SectionId,
        add_contents: impl FnOnce(&mut Self, &mut egui::Ui, &mut SectionFrame<'_>),
    ) -> Rect {
        let progress = frame.reveal.progress(id, frame.now, frame.motion.reveal);
        let response = ui.scope(|ui| {
            ui.add_space(SLIDE_OFFSET * (1.0 - progress));
            ui.set_opacity(progress);
            add_contents(self, ui, frame);
            ui.add_space(SECTION_SPACING);
        });

        let rect = response.response.rect;
        frame.reveal.observe(id, rect, frame.viewport, frame.now);
        if frame.scroll_to == Some(id) {
            ui.scroll_to_rect(rect, Some(Align::Min));
        }
        rect
    }

    fn hero(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Rect {
        let (offset, opacity) = hero_parallax(frame.scroll_offset, frame.viewport.height());
        self.section(ui, frame, SectionId::Hero, |_, ui, frame| {
            ui.add_space(offset);
            ui.multiply_opacity(opacity);
            let (accent, _) = accents(frame.profile);

            ui.vertical_centered(|ui| {
                ui.add_space(SECTION_SPACING);
                ui.label(RichText::new(frame.content.hero_intro).size(22.0));
                ui.label(
                    RichText::new(frame.content.name)
                        .size(52.0)
                        .strong()
                        .color(accent),
                );
                // Typing headline; the trailing block is the caret
                ui.label(RichText::new(format!("{}▌", frame.typing_line)).size(26.0).monospace());
            });
        })
    }

    fn about(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Rect {
        let rect = self.section(ui, frame, SectionId::About, |views, ui, frame| {
            let (accent, _) = accents(frame.profile);
            ui.heading("About");
            ui.add_space(ITEM_SPACING);
            ui.label(frame.content.about);
            ui.add_space(ITEM_SPACING);

            // Headline stats with animated count-up
            ui.horizontal(|ui| {
                for (counter, (_, label)) in frame.counters.iter().zip(frame.content.stats) {
                    ui.group(|ui| {
                        ui.vertical(|ui| {
                            let value = counter.value(frame.now, frame.motion.counter);
                            ui.label(RichText::new(format!("{value}+")).size(30.0).strong().color(accent));
                            ui.label(*label);
                        });
                    });
                }
            });

            ui.add_space(ITEM_SPACING);
            views.skill_tags(ui, frame);
        });

        // Arm the counters once the section has revealed
        if frame.reveal.is_revealed(SectionId::About) {
            for counter in frame.counters.iter_mut() {
                counter.arm(frame.now);
            }
        }
        rect
    }

    fn skill_tags(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) {
        let (accent, _) = accents(frame.profile);
        let pulse_secs = frame.motion.tag_pulse.as_secs_f32();
        ui.horizontal_wrapped(|ui| {
            for (i, skill) in frame.content.skills.iter().enumerate() {
                // Click pulse: brief scale bump, decaying over tag_pulse
                let scale = match self.tag_pulses.get(&i) {
                    Some(&at) if pulse_secs > 0.0 => {
                        let t = frame.now.saturating_duration_since(at).as_secs_f32() / pulse_secs;
                        if t < 1.0 {
                            1.0 + 0.15 * (1.0 - ease_out_cubic(t))
                        } else {
                            1.0
                        }
                    }
                    _ => 1.0,
                };
                let tag = egui::Button::new(RichText::new(*skill).size(13.0 * scale))
                    .fill(accent.gamma_multiply(0.15))
                    .corner_radius(egui::CornerRadius::same(10));
                let response = ui.add(tag);
                frame.tracker.note_interactive(response.hovered());
                if response.clicked() {
                    self.tag_pulses.insert(i, frame.now);
                }
            }
        });
    }

    fn resume(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Rect {
        self.section(ui, frame, SectionId::Resume, |_, ui, frame| {
            let (accent, _) = accents(frame.profile);
            ui.heading("Resume");
            ui.add_space(ITEM_SPACING);
            ui.label(frame.content.resume_summary);
            ui.add_space(ITEM_SPACING);
            let button = egui::Button::new(RichText::new("⬇ Download Resume").color(Color32::WHITE))
                .fill(accent)
                .corner_radius(egui::CornerRadius::same(8));
            let response = ui.add(button);
            frame.tracker.note_interactive(response.hovered());
            if response.clicked() {
                // The URL is a collaborator; handing it to the shell is the
                // whole integration.
                ui.ctx().open_url(egui::OpenUrl::new_tab(frame.content.resume_url));
            }
        })
    }

    fn achievements(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Rect {
        self.section(ui, frame, SectionId::Achievements, |_, ui, frame| {
            ui.heading("Achievements");
            ui.add_space(ITEM_SPACING);
            for achievement in frame.content.achievements {
                ui.label(format!("•  {achievement}"));
            }
        })
    }

    fn projects(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Rect {
        let previously_hovered = self.hovered_card;
        let mut hovered_now = None;

        let rect = self.section(ui, frame, SectionId::Projects, |_, ui, frame| {
            let (accent, _) = accents(frame.profile);
            ui.heading("Projects");
            ui.add_space(ITEM_SPACING);

            for (i, project) in frame.content.projects.iter().enumerate() {
                // Sibling cards dim while one card is hovered
                let dimmed = previously_hovered.is_some_and(|h| h != i);
                ui.scope(|ui| {
                    if dimmed {
                        ui.multiply_opacity(0.5);
                    }
                    let response = ui
                        .group(|ui| {
                            ui.label(RichText::new(project.title).strong().size(18.0).color(accent));
                            ui.label(project.summary);
                            ui.horizontal(|ui| {
                                for tag in project.tags {
                                    ui.label(RichText::new(*tag).size(12.0).color(accent));
                                }
                            });
                            let link = ui.link(project.link);
                            frame.tracker.note_interactive(link.hovered());
                            if link.clicked() {
                                ui.ctx().open_url(egui::OpenUrl::new_tab(project.link));
                            }
                        })
                        .response;
                    frame.tracker.note_interactive(response.hovered());
                    if response.hovered() {
                        hovered_now = Some(i);
                    }
                });
                ui.add_space(ITEM_SPACING);
            }
        });

        self.hovered_card = hovered_now;
        rect
    }

    fn certifications(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Rect {
        self.section(ui, frame, SectionId::Certifications, |_, ui, frame| {
            ui.heading("Certifications");
            ui.add_space(ITEM_SPACING);
            for certification in frame.content.certifications {
                ui.label(format!("•  {certification}"));
            }
        })
    }

    fn contact(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) -> Rect {
        self.section(ui, frame, SectionId::Contact, |_, ui, frame| {
            ui.heading("Contact");
            ui.add_space(ITEM_SPACING);
            ui.label(frame.content.contact_blurb);
            let mail = ui.link(frame.content.contact_email);
            frame.tracker.note_interactive(mail.hovered());
            if mail.clicked() {
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(format!("mailto:{}", frame.content.contact_email)));
            }
        })
    }

    fn footer(&mut self, ui: &mut egui::Ui, frame: &mut SectionFrame<'_>) {
        ui.separator();
        ui.horizontal(|ui| {
            let year = chrono::Local::now().year();
            ui.label(
                RichText::new(format!("© {year} {}", frame.content.name))
                    .size(12.0)
                    .weak(),
            );
        });
        ui.add_space(ITEM_SPACING);
    }
}

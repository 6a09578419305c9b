//! Composition root: owns the current profile and wires input, transition,
//! cursor, reveal, and background together each frame.

use std::path::PathBuf;
use std::time::Instant;

use eframe::CreationContext;
use egui::{Id, LayerId, Order, Rect};
use tracing::{info, warn};

use crate::background::ParticleField;
use crate::config::{Motion, Settings};
use crate::content;
use crate::cursor::{CursorRenderer, PointerTracker};
use crate::gui::components::navigation::{self, NavAction};
use crate::gui::components::overlay;
use crate::gui::components::profile_switcher::{ProfileSwitcher, SwitcherAction};
use crate::gui::components::sections::{SectionFrame, SectionViews};
use crate::gui::constants::accents;
use crate::reveal::{Counter, RevealState};
use crate::transition::TransitionController;
use crate::typing::TypingTicker;
use crate::types::{Profile, SectionId, Theme};

pub struct PortfolioApp {
    settings: Settings,
    settings_path: PathBuf,
    motion: Motion,

    /// Application-level current profile, passed down by reference
    profile: Profile,

    tracker: PointerTracker,
    cursor: CursorRenderer,
    transition: TransitionController,
    reveal: RevealState,
    typing: TypingTicker,
    field: Option<ParticleField>,
    switcher: ProfileSwitcher,
    views: SectionViews,
    counters: Vec<Counter>,

    section_rects: Vec<(SectionId, Rect)>,
    scroll_to: Option<SectionId>,
    active_section: Option<SectionId>,
    scroll_offset: f32,
}

impl PortfolioApp {
    pub fn new(
        cc: &CreationContext<'_>,
        settings: Settings,
        settings_path: PathBuf,
        motion: Motion,
        profile: Profile,
    ) -> Self {
        info!(profile = profile.label(), "initializing portfolio viewer");
        apply_theme(&cc.egui_ctx, settings.theme);

        let now = Instant::now();
        let content = content::for_profile(profile);
        Self {
            typing: TypingTicker::new(content.hero_titles, motion.ambient, now),
            counters: content.stats.iter().map(|&(target, _)| Counter::new(target)).collect(),
            transition: TransitionController::new(motion.transition),
            settings,
            settings_path,
            motion,
            profile,
            tracker: PointerTracker::new(),
            cursor: CursorRenderer::new(),
            reveal: RevealState::new(),
            field: None,
            switcher: ProfileSwitcher::new(),
            views: SectionViews::new(),
            section_rects: Vec::new(),
            scroll_to: None,
            active_section: None,
            scroll_offset: 0.0,
        }
    }

    /// The swap point: replace the presented dataset while the overlay
    /// occludes the page, and restart everything content-derived.
    fn apply_profile(&mut self, profile: Profile, now: Instant) {
        info!(profile = profile.label(), "content profile swapped");
        self.profile = profile;
        let content = content::for_profile(profile);
        self.typing.reset(content.hero_titles, now);
        self.counters = content.stats.iter().map(|&(target, _)| Counter::new(target)).collect();
        self.reveal.reset();
        self.views.reset();
        // Background picks up the new accents as particles respawn
        self.field = None;
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = self.settings.theme.toggled();
        apply_theme(ctx, self.settings.theme);
        if let Err(err) = self.settings.save(&self.settings_path) {
            warn!(error = ?err, "failed to persist theme preference");
        }
    }

    /// Which section sits under the scroll anchor, for nav highlighting
    fn section_under_anchor(&self, viewport: Rect) -> Option<SectionId> {
        let anchor = viewport.top() + crate::constants::reveal::NAV_ANCHOR;
        self.section_rects
            .iter()
            .find(|(_, rect)| rect.top() <= anchor && rect.bottom() > anchor)
            .map(|&(id, _)| id)
    }

    fn anything_animating(&self) -> bool {
        self.transition.is_transitioning()
            || self.switcher.is_flipping()
            || (self.tracker.is_visible() && self.cursor.animating())
            || self.motion.ambient
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = ctx.input(|i| i.stable_dt);

        // Pointer relay: raw position, focus, touch, clicks
        let (pointer, focused, any_touch, pressed_at) = ctx.input(|i| {
            let pressed = i
                .pointer
                .primary_pressed()
                .then(|| i.pointer.interact_pos())
                .flatten();
            (i.pointer.latest_pos(), i.focused, i.any_touches(), pressed)
        });
        self.tracker.begin_frame(pointer, focused, any_touch);
        if let Some(pos) = pressed_at {
            self.cursor.spawn_ripple(pos, now);
        }

        // Transition checkpoints; the swap lands here, under the overlay
        let update = self.transition.poll(now);
        if let Some(profile) = update.swap {
            self.apply_profile(profile, now);
        }

        self.typing.tick(now);

        // Ambient background across the whole window
        let screen = ctx.screen_rect();
        let (accent, accent_alt) = accents(self.profile);
        let ambient = self.motion.ambient;
        let field = self
            .field
            .get_or_insert_with(|| ParticleField::new(screen, &[accent, accent_alt], !ambient));
        field.tick(screen, &[accent, accent_alt]);
        field.paint(&ctx.layer_painter(LayerId::new(Order::Background, Id::new("ambient-field"))));

        // Navigation bar
        let content = content::for_profile(self.profile);
        let mut nav_action = NavAction::None;
        egui::TopBottomPanel::top("nav-bar").show(ctx, |ui| {
            nav_action = navigation::ui(
                ui,
                content.name,
                self.active_section,
                self.settings.theme,
                &mut self.tracker,
            );
        });
        match nav_action {
            NavAction::ScrollTo(section) => self.scroll_to = Some(section),
            NavAction::ToggleTheme => self.toggle_theme(ctx),
            NavAction::None => {}
        }

        // Page body
        let typing_line = self.typing.line();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let viewport = ui.clip_rect();
                        let mut frame = SectionFrame {
                            profile: self.profile,
                            content,
                            tracker: &mut self.tracker,
                            reveal: &mut self.reveal,
                            counters: &mut self.counters,
                            typing_line: &typing_line,
                            motion: &self.motion,
                            now,
                            viewport,
                            scroll_offset: self.scroll_offset,
                            scroll_to: self.scroll_to.take(),
                        };
                        self.section_rects = self.views.show_all(ui, &mut frame);
                    });
                self.scroll_offset = output.state.offset.y;
            });
        self.active_section = self.section_under_anchor(ctx.screen_rect());

        // Switcher button; its commit point triggers the controller
        match self
            .switcher
            .ui(ctx, self.profile, &mut self.tracker, &self.motion, now)
        {
            SwitcherAction::Switch(target) => {
                self.transition.trigger(self.profile, target, now);
            }
            SwitcherAction::None => {}
        }

        // Occlusion overlay above the page, below the cursor
        overlay::paint(ctx, &self.transition, now);

        // Cursor last, topmost
        self.cursor.tick(&self.tracker, dt, now);
        self.cursor.paint(ctx, &self.tracker, accent, now);
        if self.tracker.is_visible() {
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        if self.anything_animating() {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(err) = self.settings.save(&self.settings_path) {
            warn!(error = ?err, "failed to save settings during shutdown");
        }
        info!("viewer exiting");
    }
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    match theme {
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
    }
}

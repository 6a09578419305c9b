//! Full-screen transition overlay
//!
//! Six vertical panels wipe in from the bottom (staggered left to right),
//! hold fully opaque across the swap checkpoint, then wipe out through the
//! top. A center emblem and a particle burst ride along. All geometry is a
//! pure function of the controller's elapsed time, repainted every frame.

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

use egui::{Align2, Color32, FontId, Id, LayerId, Order, Pos2, Rect, pos2, vec2};

use crate::constants::transition::BURST_COUNT;
use crate::easing::{ease_in_out_quart, ease_out_back, ease_out_cubic, phase_progress};
use crate::gui::constants::accents;
use crate::transition::TransitionController;

/// Gamma-space blend of the two accent colors
fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

pub fn paint(ctx: &egui::Context, controller: &TransitionController, now: Instant) {
    let (Some(target), Some(elapsed)) = (controller.target(), controller.elapsed(now)) else {
        return;
    };

    let timings = controller.timings();
    let screen = ctx.screen_rect();
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("profile-transition")));
    let (accent, accent_alt) = accents(target);

    // Curtain panels, one column each
    let panels = timings.panels.max(1);
    let column_width = screen.width() / panels as f32;
    for i in 0..panels {
        let delay = timings.stagger * i as u32;
        let enter = phase_progress(elapsed, delay, timings.panel, ease_in_out_quart);
        let exit = phase_progress(
            elapsed,
            timings.exit_start() + delay,
            timings.panel,
            ease_in_out_quart,
        );

        // Slides up from below the viewport, rests at zero, leaves above it
        let offset_y = screen.height() * (1.0 - enter) - screen.height() * exit;
        let rect = Rect::from_min_size(
            pos2(screen.left() + column_width * i as f32, screen.top() + offset_y),
            vec2(column_width + 1.0, screen.height()),
        );
        let shade = if panels > 1 {
            i as f32 / (panels - 1) as f32
        } else {
            0.0
        };
        painter.rect_filled(rect, egui::CornerRadius::ZERO, mix(accent, accent_alt, shade));
    }

    // Emblem and burst appear once the viewport is occluded and leave
    // before the exit wipe finishes.
    let emblem_window_start = timings.entrance_complete();
    let emblem_pop = Duration::from_millis(300).min(timings.panel);
    let pop = phase_progress(elapsed, emblem_window_start, emblem_pop, ease_out_back);
    let fade_out = phase_progress(elapsed, timings.exit_start(), emblem_pop, ease_out_cubic);
    let alpha = (pop.min(1.2) * (1.0 - fade_out)).clamp(0.0, 1.0);
    if alpha > 0.0 {
        let center = screen.center();
        paint_burst(&painter, center, elapsed, timings.entrance_complete(), alpha);

        let content = crate::content::for_profile(target);
        painter.text(
            center - vec2(0.0, 70.0),
            Align2::CENTER_CENTER,
            content.glyph,
            FontId::proportional(64.0 * pop.max(0.01)),
            Color32::WHITE.gamma_multiply(alpha),
        );
        painter.text(
            center + vec2(0.0, 10.0),
            Align2::CENTER_CENTER,
            content.mode_title,
            FontId::proportional(44.0),
            Color32::WHITE.gamma_multiply(alpha),
        );
        painter.text(
            center + vec2(0.0, 56.0),
            Align2::CENTER_CENTER,
            content.mode_tagline,
            FontId::proportional(20.0),
            Color32::WHITE.gamma_multiply(alpha * 0.9),
        );
    }
}

/// Ring of particles thrown outward from the center. Deterministic per
/// index so the burst needs no stored state.
fn paint_burst(painter: &egui::Painter, center: Pos2, elapsed: Duration, start: Duration, alpha: f32) {
    let burst_duration = Duration::from_millis(600);
    for i in 0..BURST_COUNT {
        let delay = Duration::from_millis(10 * i as u64);
        let t = phase_progress(elapsed, start + delay, burst_duration, ease_out_cubic);
        if t <= 0.0 || t >= 1.0 {
            continue;
        }
        let angle = i as f32 / BURST_COUNT as f32 * TAU;
        let distance = (220.0 + (i % 5) as f32 * 30.0) * t;
        let pos = center + vec2(angle.cos(), angle.sin()) * distance;
        painter.circle_filled(
            pos,
            3.0,
            Color32::WHITE.gamma_multiply(alpha * (1.0 - t)),
        );
    }
}

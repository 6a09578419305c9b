//! Easing curves for the deterministic (non-spring) animations
//!
//! The spring system in `cursor::spring` covers natural motion; these cover
//! fixed-duration effects like the curtain wipe and reveal slides.

/// Quartic ease-in-out: long accelerate/decelerate tails, used by the
/// transition wipe panels
#[inline]
pub fn ease_in_out_quart(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Cubic ease-out: fast start, slow finish (feels responsive)
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Back ease-out: overshoots slightly before settling, used by the overlay
/// emblem pop
#[inline]
pub fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let t = t.clamp(0.0, 1.0);
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}

/// Progress of a phase starting at `start` and lasting `duration`, eased by
/// `ease`. Zero-length phases read as complete, so reduced-motion timings
/// degrade to instant jumps instead of dividing by zero.
pub fn phase_progress(
    elapsed: std::time::Duration,
    start: std::time::Duration,
    duration: std::time::Duration,
    ease: fn(f32) -> f32,
) -> f32 {
    if elapsed < start {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let t = (elapsed - start).as_secs_f32() / duration.as_secs_f32();
    ease(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_easing_endpoints() {
        for ease in [ease_in_out_quart, ease_out_cubic, ease_out_back] {
            assert!((ease(0.0)).abs() < 1e-6);
            assert!((ease(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_in_out_quart_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out_quart(i as f32 / 100.0);
            assert!(v >= prev - 1e-6, "not monotonic at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_ease_out_back_overshoots() {
        let peak = (0..=100)
            .map(|i| ease_out_back(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_phase_progress_before_start_is_zero() {
        let p = phase_progress(
            Duration::from_millis(50),
            Duration::from_millis(100),
            Duration::from_millis(200),
            ease_out_cubic,
        );
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_phase_progress_zero_duration_is_complete() {
        let p = phase_progress(
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
            ease_out_cubic,
        );
        assert_eq!(p, 1.0);
    }
}

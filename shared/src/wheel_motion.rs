//! Wheel geometry and spin animation.
//!
//! Angles are in degrees, measured clockwise from 3 o'clock as on a canvas.
//! Wedge `i` of `n` covers `[i * 360 / n, (i + 1) * 360 / n)` before any
//! rotation. The pointer sits at 12 o'clock.

use rand::Rng;

use crate::constants::{LANDING_JITTER, MAX_SPINS, MIN_SPINS, SPIN_DURATION_MS};

pub const POINTER_ANGLE: f64 = 270.0;

pub fn slot_angle(slots: usize) -> f64 {
    360.0 / slots as f64
}

/// Unrotated angle of the middle of wedge `index`.
pub fn slot_mid_angle(index: usize, slots: usize) -> f64 {
    (index as f64 + 0.5) * slot_angle(slots)
}

/// Which wedge is under the pointer when the wheel is turned by `rotation`.
pub fn slot_under_pointer(rotation: f64, slots: usize) -> Option<usize> {
    if slots == 0 {
        return None;
    }
    let local = (POINTER_ANGLE - rotation).rem_euclid(360.0);
    let index = (local / slot_angle(slots)).floor() as usize;
    Some(index.min(slots - 1))
}

/// Final rotation that turns the wheel forward from `current` by `turns`
/// full turns plus whatever brings wedge `index` under the pointer.
/// `jitter` in `(-1, 1)` moves the landing point off the wedge centre by
/// that fraction of half a wedge.
pub fn target_rotation(current: f64, index: usize, slots: usize, turns: u32, jitter: f64) -> f64 {
    let half = slot_angle(slots) / 2.0;
    let landing = slot_mid_angle(index, slots) + jitter * half;
    let target = (POINTER_ANGLE - landing).rem_euclid(360.0);
    let adjustment = (target - current.rem_euclid(360.0)).rem_euclid(360.0);
    current + turns as f64 * 360.0 + adjustment
}

/// Fast start, long gentle stop: `1 - (1 - t)^4`.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub start_rotation: f64,
    pub end_rotation: f64,
    pub duration_ms: f64,
}

impl SpinAnimation {
    /// Plans a spin from `current` that stops on wedge `index`.
    pub fn towards<R: Rng + ?Sized>(current: f64, index: usize, slots: usize, rng: &mut R) -> Self {
        let turns = rng.gen_range(MIN_SPINS..=MAX_SPINS);
        let jitter = rng.gen_range(-LANDING_JITTER..LANDING_JITTER);
        Self {
            start_rotation: current,
            end_rotation: target_rotation(current, index, slots, turns, jitter),
            duration_ms: SPIN_DURATION_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.end_rotation;
        }
        let progress = elapsed_ms / self.duration_ms;
        self.start_rotation + (self.end_rotation - self.start_rotation) * ease_out_quart(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

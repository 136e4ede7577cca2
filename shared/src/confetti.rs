//! Confetti particle simulation for the winner celebration. Positions are
//! in pixels of the surface the burst is drawn on; one `step` is one frame.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::*;
use crate::palette::PALETTE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstConfig {
    pub particle_count: usize,
    /// Degrees either side of `angle`, in total.
    pub spread: f64,
    /// Launch point as fractions of the surface width and height.
    pub origin: (f64, f64),
    /// Launch direction in degrees, 90 being straight up.
    pub angle: f64,
    pub start_velocity: f64,
    pub decay: f64,
    pub gravity: f64,
    pub ticks: u32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: BURST_PARTICLE_COUNT,
            spread: BURST_SPREAD_DEG,
            origin: (BURST_ORIGIN_X, BURST_ORIGIN_Y),
            angle: BURST_ANGLE_DEG,
            start_velocity: BURST_START_VELOCITY,
            decay: BURST_DECAY,
            gravity: BURST_GRAVITY,
            ticks: BURST_TICKS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Launch direction in radians, screen coordinates (y grows downwards).
    pub heading: f64,
    pub velocity: f64,
    pub wobble: f64,
    pub wobble_speed: f64,
    pub tilt: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone)]
pub struct Burst {
    config: BurstConfig,
    particles: Vec<Particle>,
    tick: u32,
}

impl Burst {
    pub fn new<R: Rng + ?Sized>(config: BurstConfig, width: f64, height: f64, rng: &mut R) -> Self {
        let origin_x = config.origin.0 * width;
        let origin_y = config.origin.1 * height;
        let angle = config.angle.to_radians();
        let spread = config.spread.to_radians();

        let particles = (0..config.particle_count)
            .map(|_| {
                let launch = angle + (0.5 * spread - rng.gen::<f64>() * spread);
                Particle {
                    x: origin_x,
                    y: origin_y,
                    // Flip to screen space where positive y points down.
                    heading: -launch,
                    velocity: config.start_velocity * 0.5 + rng.gen::<f64>() * config.start_velocity,
                    wobble: rng.gen::<f64>() * 10.0,
                    wobble_speed: 0.05 + rng.gen::<f64>() * 0.05,
                    tilt: rng.gen::<f64>() * std::f64::consts::PI,
                    color: PALETTE.choose(&mut *rng).copied().unwrap_or(PALETTE[0]),
                }
            })
            .collect();

        Self {
            config,
            particles,
            tick: 0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Remaining opacity, fading linearly to zero over the burst lifetime.
    pub fn opacity(&self) -> f64 {
        1.0 - (self.tick as f64 / self.config.ticks as f64).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.config.ticks
    }

    /// Advances every particle by one frame. Returns false once the burst
    /// has burnt out.
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        for particle in &mut self.particles {
            particle.x += particle.heading.cos() * particle.velocity;
            particle.y += particle.heading.sin() * particle.velocity + self.config.gravity * 3.0;
            particle.velocity *= self.config.decay;
            particle.wobble += particle.wobble_speed;
            particle.tilt += 0.1;
        }
        self.tick += 1;
        !self.is_finished()
    }
}

//! Fireworks simulation
//!
//! Everything here advances in whole frames and draws through the
//! [`Canvas`](crate::render::Canvas) seam, so the show runs headless in tests.
//! Randomness comes only from the `fastrand::Rng` handed in by the caller.

pub mod field;
pub mod particle;
pub mod physics;
pub mod rocket;
pub mod stars;
pub mod trail;

use std::ops::RangeInclusive;

pub use field::{FieldReport, FireworksField};
pub use particle::Particle;
pub use physics::Forces;
pub use rocket::Rocket;
pub use stars::Starfield;
pub use trail::Trail;

use crate::render::Rgb;

/// Tunable constants for one show, threaded through every update.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Downward acceleration per frame applied to rockets
    pub gravity: f32,
    /// Constant horizontal drift added to every move
    pub wind: f32,
    /// Fraction of `gravity` felt by explosion particles
    pub particle_gravity_scale: f32,
    /// Velocity multiplier applied to particles after each move
    pub particle_drag: f32,
    pub rocket_trail_len: usize,
    pub particle_trail_len: usize,
    /// Initial upward speed of a rocket (vy = -speed)
    pub launch_speed: RangeInclusive<f32>,
    /// Distance kept between launch sites and the side edges
    pub launch_margin: f32,
    /// Launch height as a fraction of the viewport height
    pub launch_height: f32,
    /// Frames between two launches
    pub launch_interval: RangeInclusive<u32>,
    pub burst_count: RangeInclusive<usize>,
    pub burst_speed: RangeInclusive<f32>,
    /// Particle lifetime in frames
    pub particle_lifetime: RangeInclusive<u32>,
    /// Particle render radius
    pub particle_size: RangeInclusive<u32>,
    /// Draw a faint halo under each particle
    pub glow: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            wind: 0.0,
            particle_gravity_scale: 0.5,
            particle_drag: 0.98,
            rocket_trail_len: 20,
            particle_trail_len: 10,
            launch_speed: 10.0..=12.0,
            launch_margin: 100.0,
            launch_height: 0.95,
            launch_interval: 20..=50,
            burst_count: 80..=150,
            burst_speed: 2.0..=8.0,
            particle_lifetime: 50..=100,
            particle_size: 2..=4,
            glow: true,
        }
    }
}

impl SimConfig {
    pub fn rocket_forces(&self) -> Forces {
        Forces {
            gravity: self.gravity,
            wind: self.wind,
            drag: 1.0,
        }
    }

    pub fn particle_forces(&self) -> Forces {
        Forces {
            gravity: self.gravity * self.particle_gravity_scale,
            wind: self.wind,
            drag: self.particle_drag,
        }
    }
}

/// Uniform sample from an inclusive float range.
pub(crate) fn uniform(rng: &mut fastrand::Rng, range: &RangeInclusive<f32>) -> f32 {
    range.start() + rng.f32() * (range.end() - range.start())
}

/// Fully saturated colour with a random hue.
pub fn random_color(rng: &mut fastrand::Rng) -> Rgb {
    hsv_to_rgb(rng.f32(), 1.0, 1.0)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as i32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    ((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

use super::physics;
use super::trail::Trail;
use super::{SimConfig, uniform};
use crate::render::{Canvas, Rgb};
use glam::Vec2;

/// A single explosion fragment.
#[derive(Clone, Debug)]
pub struct Particle {
    position: Vec2,
    velocity: Vec2,
    color: Rgb,
    trail: Trail,
    lifetime: u32,
    age: u32,
    size: f32,
}

impl Particle {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        color: Rgb,
        config: &SimConfig,
        rng: &mut fastrand::Rng,
    ) -> Self {
        Self {
            position,
            velocity,
            color,
            trail: Trail::new(config.particle_trail_len),
            lifetime: rng.u32(config.particle_lifetime.clone()),
            age: 0,
            size: rng.u32(config.particle_size.clone()) as f32,
        }
    }

    pub fn update(&mut self, config: &SimConfig) {
        self.trail.push(self.position);
        physics::step(
            &mut self.position,
            &mut self.velocity,
            config.particle_forces(),
        );
        self.age += 1;
    }

    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Linear fade from opaque at birth to transparent at end of life.
    pub fn alpha(&self) -> u8 {
        if self.lifetime == 0 {
            return 0;
        }
        let faded = (255.0 * (self.age as f32 / self.lifetime as f32)) as i32;
        (255 - faded).clamp(0, 255) as u8
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, glow: bool) {
        if self.trail.len() > 1 {
            for (point, fade) in self.trail.iter() {
                let alpha = (255.0 * fade) as u8;
                if alpha > 0 {
                    canvas.fill_circle(point, self.size, self.color, alpha);
                }
            }
        }

        let alpha = self.alpha();
        if glow {
            canvas.fill_circle(self.position, self.size * 3.0, self.color, alpha / 2);
        }
        canvas.fill_circle(self.position, self.size, self.color, alpha);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    #[cfg(test)]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

/// Burst of particles flying out in every direction from `origin`.
pub fn burst(
    origin: Vec2,
    color: Rgb,
    config: &SimConfig,
    rng: &mut fastrand::Rng,
) -> Vec<Particle> {
    let count = rng.usize(config.burst_count.clone());
    let mut particles = Vec::with_capacity(count);
    for _ in 0..count {
        let angle = rng.f32() * std::f32::consts::TAU;
        let speed = uniform(rng, &config.burst_speed);
        particles.push(Particle::new(
            origin,
            Vec2::from_angle(angle) * speed,
            color,
            config,
            rng,
        ));
    }
    particles
}

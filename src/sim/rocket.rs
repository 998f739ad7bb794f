use super::particle::{self, Particle};
use super::physics;
use super::trail::Trail;
use super::{SimConfig, random_color, uniform};
use crate::render::{Canvas, Rgb};
use glam::Vec2;

const HEAD_RADIUS: f32 = 3.0;
const TRAIL_RADIUS: f32 = 2.0;

#[derive(Clone, Debug)]
enum RocketState {
    Ascending { trail: Trail },
    Exploded { particles: Vec<Particle> },
}

#[derive(Clone, Debug)]
pub struct Rocket {
    position: Vec2,
    velocity: Vec2,
    color: Rgb,
    state: RocketState,
}

impl Rocket {
    pub fn new(position: Vec2, velocity: Vec2, color: Rgb, config: &SimConfig) -> Self {
        Self {
            position,
            velocity,
            color,
            state: RocketState::Ascending {
                trail: Trail::new(config.rocket_trail_len),
            },
        }
    }

    /// Fire a rocket straight up from near the bottom of a `width` x `height` area.
    pub fn launch(width: f32, height: f32, config: &SimConfig, rng: &mut fastrand::Rng) -> Self {
        let lo = config.launch_margin;
        let hi = width - config.launch_margin;
        let x = if hi > lo {
            uniform(rng, &(lo..=hi))
        } else {
            width / 2.0
        };
        let speed = uniform(rng, &config.launch_speed);
        let color = random_color(rng);

        Self::new(
            Vec2::new(x, height * config.launch_height),
            Vec2::new(0.0, -speed),
            color,
            config,
        )
    }

    /// Advance one frame. Returns true on the frame the rocket bursts.
    pub fn update(&mut self, config: &SimConfig, rng: &mut fastrand::Rng) -> bool {
        match &mut self.state {
            RocketState::Ascending { trail } => {
                trail.push(self.position);
                physics::step(
                    &mut self.position,
                    &mut self.velocity,
                    config.rocket_forces(),
                );

                // Apex
                if self.velocity.y >= 0.0 {
                    let particles = particle::burst(self.position, self.color, config, rng);
                    log::trace!(
                        "rocket burst at ({:.0}, {:.0}) into {} particles",
                        self.position.x,
                        self.position.y,
                        particles.len()
                    );
                    self.state = RocketState::Exploded { particles };
                    return true;
                }
                false
            }
            RocketState::Exploded { particles } => {
                for p in particles.iter_mut() {
                    p.update(config);
                }
                particles.retain(|p| !p.is_dead());
                false
            }
        }
    }

    pub fn is_exploded(&self) -> bool {
        matches!(self.state, RocketState::Exploded { .. })
    }

    /// Exploded and every particle has burned out.
    pub fn is_dead(&self) -> bool {
        match &self.state {
            RocketState::Ascending { .. } => false,
            RocketState::Exploded { particles } => particles.is_empty(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        match &self.state {
            RocketState::Ascending { .. } => &[],
            RocketState::Exploded { particles } => particles,
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, glow: bool) {
        match &self.state {
            RocketState::Ascending { trail } => {
                for (point, fade) in trail.iter() {
                    let alpha = (255.0 * fade) as u8;
                    if alpha > 0 {
                        canvas.fill_circle(point, TRAIL_RADIUS, self.color, alpha);
                    }
                }
                canvas.fill_circle(self.position, HEAD_RADIUS, self.color, 255);
            }
            RocketState::Exploded { particles } => {
                for p in particles {
                    p.draw(canvas, glow);
                }
            }
        }
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
}

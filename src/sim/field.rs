use super::SimConfig;
use super::rocket::Rocket;
use crate::render::Canvas;

/// What happened during one [`FireworksField::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldReport {
    pub launched: bool,
    pub exploded: usize,
    pub removed: usize,
}

/// Owns every live rocket and schedules new launches.
pub struct FireworksField {
    width: f32,
    height: f32,
    rockets: Vec<Rocket>,
    /// Frames until the next launch
    launch_timer: u32,
    rng: fastrand::Rng,
}

impl FireworksField {
    pub fn new(width: f32, height: f32, rng: fastrand::Rng) -> Self {
        Self {
            width,
            height,
            rockets: Vec::with_capacity(16),
            launch_timer: 0,
            rng,
        }
    }

    pub fn update(&mut self, config: &SimConfig) -> FieldReport {
        let mut report = FieldReport::default();

        if self.launch_timer > 0 {
            self.launch_timer -= 1;
        }
        if self.launch_timer == 0 {
            let rocket = Rocket::launch(self.width, self.height, config, &mut self.rng);
            log::trace!("launch at x={:.0}", rocket.position().x);
            self.rockets.push(rocket);
            self.launch_timer = self.rng.u32(config.launch_interval.clone());
            report.launched = true;
        }

        for rocket in self.rockets.iter_mut() {
            if rocket.update(config, &mut self.rng) {
                report.exploded += 1;
            }
        }

        let before = self.rockets.len();
        self.rockets.retain(|r| !r.is_dead());
        report.removed = before - self.rockets.len();

        report
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, config: &SimConfig) {
        for rocket in &self.rockets {
            rocket.draw(canvas, config.glow);
        }
    }

    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    pub fn particle_count(&self) -> usize {
        self.rockets.iter().map(|r| r.particles().len()).sum()
    }
}

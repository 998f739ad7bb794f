use crate::render::{Canvas, WHITE};
use glam::Vec2;

struct Star {
    position: Vec2,
    size: f32,
    phase: f32,
}

/// Twinkling background stars.
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(width: f32, height: f32, count: usize, rng: &mut fastrand::Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                position: Vec2::new(rng.f32() * width, rng.f32() * height),
                size: rng.u32(1..=3) as f32,
                phase: rng.f32() * std::f32::consts::TAU,
            })
            .collect();
        Self { stars }
    }

    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.phase += 0.02;
            if star.phase > std::f32::consts::TAU {
                star.phase -= std::f32::consts::TAU;
            }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        for star in &self.stars {
            canvas.fill_circle(star.position, star.size, WHITE, twinkle(star.phase));
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

fn twinkle(phase: f32) -> u8 {
    128 + (127.0 * (phase.sin() + 1.0) / 2.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingCanvas;

    #[test]
    fn test_twinkle_range() {
        assert_eq!(twinkle(-std::f32::consts::FRAC_PI_2), 128);
        assert_eq!(twinkle(std::f32::consts::FRAC_PI_2), 255);
        assert_eq!(twinkle(0.0), 191);
    }

    #[test]
    fn test_stars_inside_area() {
        let mut rng = fastrand::Rng::with_seed(9);
        let field = Starfield::new(800.0, 600.0, 100, &mut rng);
        assert_eq!(field.len(), 100);
        for star in &field.stars {
            assert!(star.position.x >= 0.0 && star.position.x <= 800.0);
            assert!(star.position.y >= 0.0 && star.position.y <= 600.0);
            assert!((1.0..=3.0).contains(&star.size));
        }
    }

    #[test]
    fn test_draw_one_disc_per_star() {
        let mut rng = fastrand::Rng::with_seed(9);
        let mut field = Starfield::new(800.0, 600.0, 25, &mut rng);
        field.update();
        let mut canvas = RecordingCanvas::default();
        field.draw(&mut canvas);
        assert_eq!(canvas.circles().count(), 25);
        assert!(canvas.circles().all(|(_, alpha)| alpha >= 128));
    }
}

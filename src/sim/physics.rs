use glam::Vec2;

/// Per-frame forces acting on a point mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Forces {
    pub gravity: f32,
    pub wind: f32,
    /// Velocity multiplier after the move; 1.0 means no drag
    pub drag: f32,
}

/// Advance one frame: gravity into velocity, move (plus wind), then drag.
pub fn step(position: &mut Vec2, velocity: &mut Vec2, forces: Forces) {
    velocity.y += forces.gravity;
    *position += *velocity + Vec2::new(forces.wind, 0.0);
    *velocity *= forces.drag;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_applies_gravity_before_move() {
        let mut pos = Vec2::new(10.0, 100.0);
        let mut vel = Vec2::new(1.0, -5.0);
        step(
            &mut pos,
            &mut vel,
            Forces {
                gravity: 0.5,
                wind: 0.0,
                drag: 1.0,
            },
        );
        assert_eq!(vel, Vec2::new(1.0, -4.5));
        assert_eq!(pos, Vec2::new(11.0, 95.5));
    }

    #[test]
    fn test_wind_moves_position_only() {
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::ZERO;
        let forces = Forces {
            gravity: 0.0,
            wind: 2.0,
            drag: 1.0,
        };
        step(&mut pos, &mut vel, forces);
        step(&mut pos, &mut vel, forces);
        assert_eq!(pos, Vec2::new(4.0, 0.0));
        assert_eq!(vel, Vec2::ZERO);
    }

    #[test]
    fn test_drag_scales_both_axes() {
        let mut pos = Vec2::ZERO;
        let mut vel = Vec2::new(10.0, 10.0);
        step(
            &mut pos,
            &mut vel,
            Forces {
                gravity: 0.0,
                wind: 0.0,
                drag: 0.5,
            },
        );
        assert_eq!(pos, Vec2::new(10.0, 10.0));
        assert_eq!(vel, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_long_run_stays_finite() {
        let mut pos = Vec2::new(500.0, 500.0);
        let mut vel = Vec2::new(8.0, -8.0);
        let forces = Forces {
            gravity: 0.05,
            wind: 0.0,
            drag: 0.98,
        };
        for _ in 0..10_000 {
            step(&mut pos, &mut vel, forces);
        }
        assert!(pos.is_finite());
        assert!(vel.is_finite());
    }
}

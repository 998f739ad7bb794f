use glam::Vec2;
use std::collections::VecDeque;

/// Bounded history of recent positions, oldest first.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a position, evicting the oldest once over capacity.
    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest, each with its fade fraction `index / len`.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let len = self.points.len() as f32;
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (*p, i as f32 / len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_exceeds_capacity() {
        let mut trail = Trail::new(5);
        for i in 0..50 {
            trail.push(Vec2::new(i as f32, 0.0));
            assert!(trail.len() <= trail.capacity());
        }
        assert_eq!(trail.len(), 5);
    }

    #[test]
    fn test_oldest_evicted_first() {
        let mut trail = Trail::new(3);
        for i in 0..4 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        let xs: Vec<f32> = trail.iter().map(|(p, _)| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_fade_runs_oldest_to_newest() {
        let mut trail = Trail::new(4);
        for i in 0..4 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        let fades: Vec<f32> = trail.iter().map(|(_, f)| f).collect();
        assert_eq!(fades, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut trail = Trail::new(0);
        trail.push(Vec2::ONE);
        assert!(trail.is_empty());
        assert_eq!(trail.iter().count(), 0);
    }
}

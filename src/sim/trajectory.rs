use std::collections::VecDeque;

use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Trajectory: distance-gated, bounded FIFO position history
// ---------------------------------------------------------------------------

/// Maximum points retained; the oldest point is evicted first.
pub const TRAIL_CAPACITY: usize = 200;

/// Minimum travel between recorded points, world units. Positions closer
/// than this to the previous tick's position are not recorded, which bounds
/// memory and redraw cost at near-zero thrust.
pub const TRAIL_GATE: f64 = 0.5;

/// Bounded visual history of positions for path display.
///
/// A sliding window, not a log: after every append the window is trimmed
/// from the front so that at most `capacity` points remain.
#[derive(Debug, Clone)]
pub struct Trajectory {
    points: VecDeque<Vector3<f64>>,
    capacity: usize,
    gate: f64,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::with_limits(TRAIL_CAPACITY, TRAIL_GATE)
    }

    pub fn with_limits(capacity: usize, gate: f64) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
            gate,
        }
    }

    /// Record the position reached this tick. Appends only when the boat has
    /// moved more than the gate distance since the previous tick; a gated
    /// call leaves the history untouched, so repeated near-identical
    /// positions are a no-op. Returns whether a point was appended.
    pub fn record(&mut self, new_pos: Vector3<f64>, prev_pos: Vector3<f64>) -> bool {
        if (new_pos - prev_pos).norm() <= self.gate {
            return false;
        }
        self.points.push_back(new_pos);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
        true
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Oldest-to-newest iteration for path drawing.
    pub fn iter(&self) -> impl Iterator<Item = &Vector3<f64>> {
        self.points.iter()
    }

    /// Owned copy of the points, oldest first. Used for tear-free snapshots.
    pub fn to_vec(&self) -> Vec<Vector3<f64>> {
        self.points.iter().copied().collect()
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(v: f64) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, v)
    }

    #[test]
    fn short_hop_is_gated() {
        let mut trail = Trajectory::new();
        assert!(!trail.record(z(0.4), z(0.0)), "0.4 < gate, must not append");
        assert!(trail.is_empty());
    }

    #[test]
    fn long_hop_appends_exactly_one_point() {
        let mut trail = Trajectory::new();
        assert!(trail.record(z(0.6), z(0.0)));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.to_vec(), vec![z(0.6)]);
    }

    #[test]
    fn gate_boundary_is_exclusive() {
        let mut trail = Trajectory::new();
        assert!(!trail.record(z(0.5), z(0.0)), "exactly the gate distance is still gated");
    }

    #[test]
    fn gated_record_is_idempotent() {
        let mut trail = Trajectory::new();
        trail.record(z(1.0), z(0.0));
        for _ in 0..50 {
            trail.record(z(1.1), z(1.0));
        }
        assert_eq!(trail.len(), 1, "near-identical positions must not accumulate");
    }

    #[test]
    fn window_holds_most_recent_200_in_order() {
        let mut trail = Trajectory::new();
        for i in 0..250 {
            let from = z(i as f64);
            let to = z(i as f64 + 1.0);
            trail.record(to, from);
        }
        assert_eq!(trail.len(), 200);
        let pts = trail.to_vec();
        // 250 appends, first 50 evicted: window starts at the 51st point.
        assert_eq!(pts[0], z(51.0));
        assert_eq!(pts[199], z(250.0));
        for w in pts.windows(2) {
            assert!(w[1].z > w[0].z, "window must preserve append order");
        }
    }

    #[test]
    fn clear_empties_window() {
        let mut trail = Trajectory::new();
        trail.record(z(2.0), z(0.0));
        trail.clear();
        assert!(trail.is_empty());
    }

    #[test]
    fn custom_limits_respected() {
        let mut trail = Trajectory::with_limits(3, 0.0);
        for i in 0..5 {
            trail.record(z(i as f64 + 1.0), z(i as f64));
        }
        assert_eq!(trail.to_vec(), vec![z(3.0), z(4.0), z(5.0)]);
    }
}

use crate::kinematics::state::State;

// ---------------------------------------------------------------------------
// Patrol events
// ---------------------------------------------------------------------------

/// Kinds of patrol events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Underway,
    Custom(String),
}

/// A discrete event that occurred during a run.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Detects the boat first getting underway (leaving the vicinity of the
/// start point). Fires once.
pub struct UnderwayDetector {
    fired: bool,
}

impl UnderwayDetector {
    pub fn new() -> Self {
        Self { fired: false }
    }
}

impl Default for UnderwayDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDetector for UnderwayDetector {
    fn check(&mut self, _prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        if current.pos.norm() > 1.0 {
            self.fired = true;
            Some(EventKind::Underway)
        } else {
            None
        }
    }
}

/// Detects the vertical coordinate crossing a level (diving or rising).
pub struct DepthDetector {
    pub level: f64,
    pub descending: bool,
    fired: bool,
}

impl DepthDetector {
    pub fn new(level: f64, descending: bool) -> Self {
        Self { level, descending, fired: false }
    }
}

impl EventDetector for DepthDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.descending {
            prev.pos.y > self.level && current.pos.y <= self.level
        } else {
            prev.pos.y < self.level && current.pos.y >= self.level
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Custom(format!(
                "Passing y={:.0} ({})",
                self.level,
                if self.descending { "diving" } else { "rising" }
            )))
        } else {
            None
        }
    }
}

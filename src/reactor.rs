// ---------------------------------------------------------------------------
// Reactor panel: display-only, no feedback into motion
// ---------------------------------------------------------------------------

/// Power the panel shows after a reset, percent.
pub const DEFAULT_POWER: f64 = 75.0;

/// Operating regime shown on the reactor readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactorStatus {
    LowPower,
    Nominal,
    Flank,
}

impl ReactorStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReactorStatus::LowPower => "low power",
            ReactorStatus::Nominal => "nominal",
            ReactorStatus::Flank => "flank",
        }
    }
}

/// The reactor as the instrument panel sees it. Drives readouts and the
/// hull glow in the renderer; the kinematic core never reads it.
#[derive(Debug, Clone, Copy)]
pub struct Reactor {
    power: f64,
}

impl Reactor {
    pub fn new(power: f64) -> Self {
        let mut r = Reactor { power: DEFAULT_POWER };
        r.set_power(power);
        r
    }

    /// Commanded power, percent, clamped to [0, 100] in whole steps.
    pub fn set_power(&mut self, power: f64) {
        self.power = power.round().clamp(0.0, 100.0);
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Displayed primary-loop temperature in °C.
    pub fn temperature_c(&self) -> f64 {
        250.0 + self.power * 3.0
    }

    /// Emissive intensity for the core glow, in [0, 1].
    pub fn glow(&self) -> f64 {
        self.power / 100.0
    }

    pub fn status(&self) -> ReactorStatus {
        if self.power > 90.0 {
            ReactorStatus::Flank
        } else if self.power > 50.0 {
            ReactorStatus::Nominal
        } else {
            ReactorStatus::LowPower
        }
    }
}

impl Default for Reactor {
    fn default() -> Self {
        Reactor { power: DEFAULT_POWER }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_power_is_75() {
        assert_relative_eq!(Reactor::default().power(), 75.0);
    }

    #[test]
    fn power_clamps_and_rounds() {
        let mut r = Reactor::default();
        r.set_power(120.0);
        assert_relative_eq!(r.power(), 100.0);
        r.set_power(-3.0);
        assert_relative_eq!(r.power(), 0.0);
        r.set_power(42.4);
        assert_relative_eq!(r.power(), 42.0);
    }

    #[test]
    fn temperature_tracks_power() {
        assert_relative_eq!(Reactor::new(0.0).temperature_c(), 250.0);
        assert_relative_eq!(Reactor::new(75.0).temperature_c(), 475.0);
        assert_relative_eq!(Reactor::new(100.0).temperature_c(), 550.0);
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(Reactor::new(30.0).status(), ReactorStatus::LowPower);
        assert_eq!(Reactor::new(50.0).status(), ReactorStatus::LowPower);
        assert_eq!(Reactor::new(51.0).status(), ReactorStatus::Nominal);
        assert_eq!(Reactor::new(90.0).status(), ReactorStatus::Nominal);
        assert_eq!(Reactor::new(91.0).status(), ReactorStatus::Flank);
    }

    #[test]
    fn glow_is_normalized_power() {
        assert_relative_eq!(Reactor::new(75.0).glow(), 0.75);
    }
}

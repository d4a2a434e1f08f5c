mod water;
mod wind;

pub use water::{Water, WaterSettings};
pub use wind::{Direction, Wind, WindReading, WindSettings};

use serde::Serialize;

use crate::rng::RngManager;

/// What every vessel sees during one tick. Taken once before the fleet pass
/// so no vessel observes a change made mid-tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnvironmentReading {
    pub wind: WindReading,
    pub wave_height: f64,
}

/// Wind and water shared by the whole fleet.
pub struct Environment {
    wind: Wind,
    water: Water,
}

impl Environment {
    pub fn new(wind: &WindSettings, water: &WaterSettings, rng: &RngManager) -> Self {
        Self {
            wind: Wind::new(wind, rng.stream("wind")),
            water: Water::new(water, rng.stream("water")),
        }
    }

    pub fn reading(&self) -> EnvironmentReading {
        EnvironmentReading {
            wind: self.wind.reading(),
            wave_height: self.water.wave_height(),
        }
    }

    /// Moves both generators on by one tick.
    pub fn advance(&mut self) {
        self.wind.advance();
        self.water.advance();
    }
}

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: i32,
    pub lng: i32,
}

impl Coordinate {
    pub fn new(lat: i32, lng: i32) -> Self {
        Self { lat, lng }
    }

    /// True when both axes are within `tolerance` of `other`.
    pub fn within(&self, other: Coordinate, tolerance: i32) -> bool {
        (self.lat as i64 - other.lat as i64).abs() <= tolerance as i64
            && (self.lng as i64 - other.lng as i64).abs() <= tolerance as i64
    }
}

/// A position/heading fix produced by one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fix {
    pub position: Coordinate,
    /// Heading in degrees.
    pub angle: f64,
    /// Sub-unit remainder of the move, `(lat, lng)`, carried into the next tick.
    pub carry: (f64, f64),
}

impl Fix {
    pub fn new(position: Coordinate, angle: f64) -> Self {
        Self {
            position,
            angle,
            carry: (0.0, 0.0),
        }
    }
}

/// Navigation record for a single vessel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    position: Coordinate,
    angle: f64,
    carry: (f64, f64),
    time_elapsed: u32,
}

impl Chart {
    pub fn new(position: Coordinate) -> Self {
        Self {
            position,
            angle: 0.0,
            carry: (0.0, 0.0),
            time_elapsed: 0,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    pub fn with_time_elapsed(mut self, ticks: u32) -> Self {
        self.time_elapsed = ticks;
        self
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn lat(&self) -> i32 {
        self.position.lat
    }

    pub fn lng(&self) -> i32 {
        self.position.lng
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn time_elapsed(&self) -> u32 {
        self.time_elapsed
    }

    /// Fractional distance travelled but not yet reflected in `position`.
    pub fn carry(&self) -> (f64, f64) {
        self.carry
    }

    /// Commits a fix and advances the clock by one tick. The chart is left
    /// untouched if the clock would hit its ceiling.
    pub fn record_fix(&mut self, fix: Fix, vessel: &str) -> Result<(), SimulationError> {
        let ticks = self
            .time_elapsed
            .checked_add(1)
            .filter(|ticks| *ticks < u32::MAX)
            .ok_or_else(|| SimulationError::TimeOverflow {
                vessel: vessel.to_string(),
                ticks: u32::MAX,
            })?;
        self.position = fix.position;
        self.angle = fix.angle;
        self.carry = fix.carry;
        self.time_elapsed = ticks;
        Ok(())
    }
}

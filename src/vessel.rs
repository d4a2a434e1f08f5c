use serde::{Deserialize, Serialize};

use crate::chart::{Chart, Coordinate};
use crate::environment::EnvironmentReading;
use crate::error::SimulationError;
use crate::navigation::Helm;

/// A vessel counts as arrived when both axes are this close to the target.
pub const ARRIVAL_TOLERANCE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselKind {
    Raft,
    Canoe,
    Sailboat,
}

impl VesselKind {
    pub fn has_sail_bonus(self) -> bool {
        matches!(self, VesselKind::Sailboat)
    }

    pub fn stock_hull(self) -> HullProfile {
        match self {
            VesselKind::Raft => HullProfile {
                max_wave_height: 3.0,
                min_turn_radius: 0.0,
            },
            VesselKind::Canoe => HullProfile {
                max_wave_height: 4.0,
                min_turn_radius: 15.0,
            },
            VesselKind::Sailboat => HullProfile {
                max_wave_height: 8.0,
                min_turn_radius: 10.0,
            },
        }
    }

    pub fn stock_propulsion(self) -> Option<PropulsionProfile> {
        match self {
            VesselKind::Raft => None,
            VesselKind::Canoe => Some(PropulsionProfile { speed_knots: 6.0 }),
            VesselKind::Sailboat => Some(PropulsionProfile { speed_knots: 9.0 }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullProfile {
    /// Waves strictly taller than this, in feet, capsize the vessel.
    pub max_wave_height: f64,
    /// Largest heading change per tick, in degrees.
    pub min_turn_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropulsionProfile {
    pub speed_knots: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VesselState {
    Active,
    Capsized,
    Completed,
}

impl VesselState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, VesselState::Active)
    }
}

/// Terminal transitions reported back to the driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum VesselEvent {
    Capsized { vessel: String, wave_height: f64 },
    Completed { vessel: String, time_elapsed: u32 },
}

#[derive(Debug, Clone)]
pub struct Vessel {
    name: String,
    kind: VesselKind,
    chart: Chart,
    hull: HullProfile,
    propulsion: Option<PropulsionProfile>,
    state: VesselState,
}

impl Vessel {
    pub fn new(
        name: impl Into<String>,
        kind: VesselKind,
        hull: HullProfile,
        propulsion: Option<PropulsionProfile>,
        chart: Chart,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            chart,
            hull,
            propulsion,
            state: VesselState::Active,
        }
    }

    /// A vessel built from the stock profiles for its kind.
    pub fn stock(name: impl Into<String>, kind: VesselKind, origin: Coordinate) -> Self {
        Self::new(
            name,
            kind,
            kind.stock_hull(),
            kind.stock_propulsion(),
            Chart::new(origin),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn hull(&self) -> &HullProfile {
        &self.hull
    }

    pub fn propulsion(&self) -> Option<&PropulsionProfile> {
        self.propulsion.as_ref()
    }

    pub fn state(&self) -> VesselState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == VesselState::Active
    }

    /// One tick for this vessel: capsize check, movement, arrival check.
    /// Terminal vessels are left untouched.
    pub fn step(
        &mut self,
        reading: &EnvironmentReading,
        target: Coordinate,
    ) -> Result<Option<VesselEvent>, SimulationError> {
        if !self.is_active() {
            return Ok(None);
        }

        if reading.wave_height > self.hull.max_wave_height {
            self.state = VesselState::Capsized;
            return Ok(Some(VesselEvent::Capsized {
                vessel: self.name.clone(),
                wave_height: reading.wave_height,
            }));
        }

        let helm = Helm {
            kind: self.kind,
            hull: &self.hull,
            propulsion: self.propulsion.as_ref(),
        };
        let fix = helm.plot(&self.chart, reading.wind, target);
        self.chart.record_fix(fix, &self.name)?;

        if self.chart.position().within(target, ARRIVAL_TOLERANCE) {
            self.state = VesselState::Completed;
            return Ok(Some(VesselEvent::Completed {
                vessel: self.name.clone(),
                time_elapsed: self.chart.time_elapsed(),
            }));
        }
        Ok(None)
    }
}

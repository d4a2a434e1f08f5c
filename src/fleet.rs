use serde::Serialize;

use crate::chart::Coordinate;
use crate::vessel::{Vessel, VesselKind, VesselState};

#[derive(Debug, Serialize)]
pub struct VesselReport {
    pub name: String,
    pub kind: VesselKind,
    pub state: VesselState,
    pub position: Coordinate,
    pub angle: f64,
    pub time_elapsed: u32,
}

#[derive(Debug, Serialize)]
pub struct FleetReport {
    pub scenario: String,
    pub ticks: u64,
    pub halted: bool,
    pub completed: usize,
    pub capsized: usize,
    pub active: usize,
    pub vessels: Vec<VesselReport>,
}

/// Vessels in insertion order; that order is the per-tick visiting order.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vessels: Vec<Vessel>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn launch(&mut self, vessel: Vessel) {
        self.vessels.push(vessel);
    }

    pub fn len(&self) -> usize {
        self.vessels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessels.is_empty()
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub(crate) fn vessels_mut(&mut self) -> &mut [Vessel] {
        &mut self.vessels
    }

    pub fn get(&self, name: &str) -> Option<&Vessel> {
        self.vessels.iter().find(|v| v.name() == name)
    }

    pub fn count(&self, state: VesselState) -> usize {
        self.vessels.iter().filter(|v| v.state() == state).count()
    }

    pub fn active_count(&self) -> usize {
        self.count(VesselState::Active)
    }

    pub fn report(&self, scenario: &str, ticks: u64, halted: bool) -> FleetReport {
        let vessels = self
            .vessels
            .iter()
            .map(|vessel| VesselReport {
                name: vessel.name().to_string(),
                kind: vessel.kind(),
                state: vessel.state(),
                position: vessel.chart().position(),
                angle: vessel.chart().angle(),
                time_elapsed: vessel.chart().time_elapsed(),
            })
            .collect();
        FleetReport {
            scenario: scenario.to_string(),
            ticks,
            halted,
            completed: self.count(VesselState::Completed),
            capsized: self.count(VesselState::Capsized),
            active: self.active_count(),
            vessels,
        }
    }
}

impl FromIterator<Vessel> for Fleet {
    fn from_iter<I: IntoIterator<Item = Vessel>>(iter: I) -> Self {
        Self {
            vessels: iter.into_iter().collect(),
        }
    }
}

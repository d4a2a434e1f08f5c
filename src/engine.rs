use serde::Serialize;

use crate::{
    chart::Coordinate,
    environment::{Environment, EnvironmentReading, WaterSettings, WindSettings},
    error::SimulationError,
    fleet::Fleet,
    rng::RngManager,
    vessel::{VesselEvent, VesselState},
};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub scenario_name: String,
    pub seed: u64,
    pub target: Coordinate,
    pub wind: WindSettings,
    pub water: WaterSettings,
    /// Stop after this many ticks even if vessels are still active.
    pub tick_limit: Option<u64>,
}

impl EngineSettings {
    pub fn new(scenario_name: impl Into<String>, seed: u64, target: Coordinate) -> Self {
        Self {
            scenario_name: scenario_name.into(),
            seed,
            target,
            wind: WindSettings::default(),
            water: WaterSettings::default(),
            tick_limit: None,
        }
    }
}

pub struct EngineBuilder {
    settings: EngineSettings,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn with_wind(mut self, wind: WindSettings) -> Self {
        self.settings.wind = wind;
        self
    }

    pub fn with_water(mut self, water: WaterSettings) -> Self {
        self.settings.water = water;
        self
    }

    pub fn with_tick_limit(mut self, limit: u64) -> Self {
        self.settings.tick_limit = Some(limit);
        self
    }

    pub fn build(self) -> Engine {
        let rng = RngManager::new(self.settings.seed);
        Engine {
            environment: Environment::new(&self.settings.wind, &self.settings.water, &rng),
            settings: self.settings,
            tick: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub tick: u64,
    pub environment: EnvironmentReading,
    pub events: Vec<VesselEvent>,
    pub active: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub completed: usize,
    pub capsized: usize,
    /// True when the tick limit stopped the run with vessels still active.
    pub halted: bool,
}

pub struct Engine {
    environment: Environment,
    settings: EngineSettings,
    tick: u64,
}

impl Engine {
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn environment(&self) -> EnvironmentReading {
        self.environment.reading()
    }

    /// Runs one full fleet pass, then advances wind and water.
    ///
    /// A time overflow aborts the pass immediately; the environment is not
    /// advanced in that case.
    pub fn tick(&mut self, fleet: &mut Fleet) -> Result<TickReport, SimulationError> {
        let reading = self.environment.reading();
        let target = self.settings.target;
        let mut events = Vec::new();

        for vessel in fleet.vessels_mut() {
            if let Some(event) = vessel.step(&reading, target)? {
                match &event {
                    VesselEvent::Capsized {
                        vessel,
                        wave_height,
                    } => log::info!("{vessel} capsized in {wave_height:.1} ft waves"),
                    VesselEvent::Completed {
                        vessel,
                        time_elapsed,
                    } => log::info!("{vessel} completed its journey after {time_elapsed} ticks"),
                }
                events.push(event);
            }
        }

        self.environment.advance();
        self.tick += 1;
        log::debug!(
            "tick {}: wind {:?} {} mph, waves {:.1} ft, {} active",
            self.tick,
            reading.wind.direction,
            reading.wind.speed_mph,
            reading.wave_height,
            fleet.active_count()
        );

        Ok(TickReport {
            tick: self.tick,
            environment: reading,
            events,
            active: fleet.active_count(),
        })
    }

    pub fn run(&mut self, fleet: &mut Fleet) -> Result<RunSummary, SimulationError> {
        self.run_with_hook(fleet, |_| {})
    }

    /// Ticks until no vessel is active (or the tick limit is hit), handing
    /// every tick's report to `hook`.
    pub fn run_with_hook<F>(
        &mut self,
        fleet: &mut Fleet,
        mut hook: F,
    ) -> Result<RunSummary, SimulationError>
    where
        F: FnMut(&TickReport),
    {
        log::info!(
            "starting '{}' with {} vessels bound for ({}, {})",
            self.settings.scenario_name,
            fleet.len(),
            self.settings.target.lat,
            self.settings.target.lng
        );
        let start = self.tick;
        let mut halted = false;
        while fleet.active_count() > 0 {
            if let Some(limit) = self.settings.tick_limit {
                if self.tick - start >= limit {
                    log::warn!(
                        "tick limit {limit} reached with {} vessels still active",
                        fleet.active_count()
                    );
                    halted = true;
                    break;
                }
            }
            let report = self.tick(fleet)?;
            hook(&report);
        }

        let summary = RunSummary {
            ticks: self.tick - start,
            completed: fleet.count(VesselState::Completed),
            capsized: fleet.count(VesselState::Capsized),
            halted,
        };
        log::info!(
            "'{}' finished after {} ticks: {} completed, {} capsized",
            self.settings.scenario_name,
            summary.ticks,
            summary.completed,
            summary.capsized
        );
        Ok(summary)
    }
}

/// Sails `fleet` toward `target` under the default weather for `seed` until
/// every vessel has capsized or arrived.
pub fn simulate_journey(
    fleet: &mut Fleet,
    target: Coordinate,
    seed: u64,
) -> Result<RunSummary, SimulationError> {
    EngineBuilder::new(EngineSettings::new("journey", seed, target))
        .build()
        .run(fleet)
}

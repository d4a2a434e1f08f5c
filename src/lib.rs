pub mod chart;
pub mod engine;
pub mod environment;
pub mod error;
pub mod fleet;
pub mod navigation;
pub mod rng;
pub mod scenario;
pub mod vessel;

pub use engine::{simulate_journey, Engine, EngineBuilder, EngineSettings, RunSummary, TickReport};
pub use error::SimulationError;
pub use scenario::{Scenario, ScenarioLoader};

use thiserror::Error;

/// Failures that abort a whole simulation run.
///
/// Capsizing and arriving are ordinary vessel outcomes and live in
/// [`crate::vessel::VesselState`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("{vessel}: Time overflow. (elapsed tick count reached {ticks})")]
    TimeOverflow { vessel: String, ticks: u32 },
}

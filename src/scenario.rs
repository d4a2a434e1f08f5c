use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::{
    chart::{Chart, Coordinate},
    engine::EngineSettings,
    environment::{WaterSettings, WindSettings},
    fleet::Fleet,
    vessel::{HullProfile, PropulsionProfile, Vessel, VesselKind},
};

fn default_seed() -> u64 {
    42
}

fn default_target() -> Coordinate {
    Coordinate::new(1000, 1000)
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub origin: Coordinate,
    #[serde(default = "default_target")]
    pub target: Coordinate,
    #[serde(default)]
    pub wind: WindSettings,
    #[serde(default)]
    pub water: WaterSettings,
    #[serde(default)]
    pub max_ticks: Option<u64>,
    pub fleet: Vec<ScenarioVessel>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioVessel {
    pub name: String,
    pub kind: VesselKind,
    /// Overrides the stock hull for this kind.
    #[serde(default)]
    pub hull: Option<HullProfile>,
    /// Overrides the stock propulsion for this kind.
    #[serde(default)]
    pub propulsion: Option<PropulsionProfile>,
    /// Strips propulsion even if the kind normally has it.
    #[serde(default)]
    pub unpowered: bool,
    #[serde(default)]
    pub heading: f64,
}

impl ScenarioVessel {
    fn build(&self, origin: Coordinate) -> Vessel {
        let hull = self.hull.clone().unwrap_or_else(|| self.kind.stock_hull());
        let propulsion = if self.unpowered {
            None
        } else {
            self.propulsion
                .clone()
                .or_else(|| self.kind.stock_propulsion())
        };
        Vessel::new(
            self.name.clone(),
            self.kind,
            hull,
            propulsion,
            Chart::new(origin).with_angle(self.heading),
        )
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario = Scenario::from_yaml(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_yaml::from_str(text)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.fleet.is_empty(),
            "scenario '{}' must launch at least one vessel",
            self.name
        );
        let mut names = HashSet::new();
        for vessel in &self.fleet {
            ensure!(
                names.insert(vessel.name.as_str()),
                "vessel name '{}' used more than once",
                vessel.name
            );
            if let Some(hull) = &vessel.hull {
                ensure!(
                    hull.min_turn_radius >= 0.0,
                    "vessel '{}' has a negative turn limit",
                    vessel.name
                );
            }
        }
        ensure!(
            (0.0..=1.0).contains(&self.wind.shift_chance),
            "wind shift_chance must be between 0 and 1"
        );
        Ok(())
    }

    pub fn build_fleet(&self) -> Fleet {
        self.fleet
            .iter()
            .map(|vessel| vessel.build(self.origin))
            .collect()
    }

    /// Engine settings for this scenario, with optional CLI overrides.
    pub fn engine_settings(
        &self,
        seed_override: Option<u64>,
        tick_limit_override: Option<u64>,
    ) -> EngineSettings {
        EngineSettings {
            scenario_name: self.name.clone(),
            seed: seed_override.unwrap_or(self.seed),
            target: self.target,
            wind: self.wind.clone(),
            water: self.water.clone(),
            tick_limit: tick_limit_override.or(self.max_ticks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
name: pond
fleet:
  - name: Dinghy
    kind: canoe
"#;

    #[test]
    fn defaults_fill_missing_fields() {
        let scenario = Scenario::from_yaml(MINIMAL).unwrap();
        assert_eq!(scenario.seed, 42);
        assert_eq!(scenario.origin, Coordinate::new(0, 0));
        assert_eq!(scenario.target, Coordinate::new(1000, 1000));
        assert_eq!(scenario.max_ticks, None);

        let fleet = scenario.build_fleet();
        let dinghy = fleet.get("Dinghy").unwrap();
        assert_eq!(dinghy.hull(), &VesselKind::Canoe.stock_hull());
        assert_eq!(dinghy.propulsion(), VesselKind::Canoe.stock_propulsion().as_ref());
    }

    #[test]
    fn overrides_and_unpowered() {
        let scenario = Scenario::from_yaml(
            r#"
name: custom
origin: { lat: 5, lng: -5 }
fleet:
  - name: Tough
    kind: canoe
    hull: { max_wave_height: 9.5, min_turn_radius: 30.0 }
    propulsion: { speed_knots: 12.0 }
  - name: Becalmed
    kind: sailboat
    unpowered: true
    heading: 90.0
"#,
        )
        .unwrap();
        let fleet = scenario.build_fleet();

        let tough = fleet.get("Tough").unwrap();
        assert_eq!(tough.hull().max_wave_height, 9.5);
        assert_eq!(tough.propulsion().map(|p| p.speed_knots), Some(12.0));
        assert_eq!(tough.chart().position(), Coordinate::new(5, -5));

        let becalmed = fleet.get("Becalmed").unwrap();
        assert!(becalmed.propulsion().is_none());
        assert_eq!(becalmed.chart().angle(), 90.0);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = Scenario::from_yaml(
            r#"
name: twins
fleet:
  - { name: Same, kind: raft }
  - { name: Same, kind: canoe }
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_empty_fleet() {
        assert!(Scenario::from_yaml("name: ghost\nfleet: []\n").is_err());
    }

    #[test]
    fn cli_overrides_win() {
        let scenario = Scenario::from_yaml(MINIMAL).unwrap();
        let settings = scenario.engine_settings(Some(7), Some(100));
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.tick_limit, Some(100));
        assert_eq!(settings.scenario_name, "pond");
    }
}

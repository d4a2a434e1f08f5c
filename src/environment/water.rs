use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

fn default_wave_height() -> f64 {
    1.0
}

fn default_max_wave_height() -> f64 {
    10.0
}

fn default_swell_step() -> f64 {
    0.5
}

/// Wave heights are in feet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterSettings {
    #[serde(default = "default_wave_height")]
    pub wave_height: f64,
    #[serde(default = "default_max_wave_height")]
    pub max_wave_height: f64,
    #[serde(default = "default_swell_step")]
    pub swell_step: f64,
}

impl WaterSettings {
    pub fn steady(wave_height: f64) -> Self {
        Self {
            wave_height,
            max_wave_height: wave_height,
            swell_step: 0.0,
        }
    }
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            wave_height: default_wave_height(),
            max_wave_height: default_max_wave_height(),
            swell_step: default_swell_step(),
        }
    }
}

pub struct Water {
    wave_height: f64,
    max_wave_height: f64,
    swell_step: f64,
    rng: ChaCha8Rng,
}

impl Water {
    pub fn new(settings: &WaterSettings, rng: ChaCha8Rng) -> Self {
        let wave_height = settings.wave_height.max(0.0);
        Self {
            wave_height,
            max_wave_height: settings.max_wave_height.max(wave_height),
            swell_step: settings.swell_step.max(0.0),
            rng,
        }
    }

    pub fn wave_height(&self) -> f64 {
        self.wave_height
    }

    pub fn advance(&mut self) {
        if self.swell_step > 0.0 {
            let delta = self.rng.gen_range(-self.swell_step..=self.swell_step);
            self.wave_height = (self.wave_height + delta).clamp(0.0, self.max_wave_height);
        }
    }
}

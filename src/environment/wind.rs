use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }
}

fn default_direction() -> Direction {
    Direction::North
}

fn default_speed_mph() -> i32 {
    4
}

fn default_max_speed_mph() -> i32 {
    12
}

fn default_gust_mph() -> i32 {
    2
}

fn default_shift_chance() -> f64 {
    0.25
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindSettings {
    #[serde(default = "default_direction")]
    pub direction: Direction,
    #[serde(default = "default_speed_mph")]
    pub speed_mph: i32,
    #[serde(default = "default_max_speed_mph")]
    pub max_speed_mph: i32,
    /// Largest speed change in one tick, either way.
    #[serde(default = "default_gust_mph")]
    pub gust_mph: i32,
    /// Probability per tick that the wind swings to a neighbouring direction.
    #[serde(default = "default_shift_chance")]
    pub shift_chance: f64,
}

impl WindSettings {
    /// Wind that keeps its initial direction and speed forever.
    pub fn steady(direction: Direction, speed_mph: i32) -> Self {
        Self {
            direction,
            speed_mph,
            max_speed_mph: speed_mph,
            gust_mph: 0,
            shift_chance: 0.0,
        }
    }
}

impl Default for WindSettings {
    fn default() -> Self {
        Self {
            direction: default_direction(),
            speed_mph: default_speed_mph(),
            max_speed_mph: default_max_speed_mph(),
            gust_mph: default_gust_mph(),
            shift_chance: default_shift_chance(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindReading {
    pub direction: Direction,
    pub speed_mph: i32,
}

pub struct Wind {
    direction: Direction,
    speed_mph: i32,
    max_speed_mph: i32,
    gust_mph: i32,
    shift_chance: f64,
    rng: ChaCha8Rng,
}

impl Wind {
    pub fn new(settings: &WindSettings, rng: ChaCha8Rng) -> Self {
        let speed_mph = settings.speed_mph.max(0);
        Self {
            direction: settings.direction,
            speed_mph,
            max_speed_mph: settings.max_speed_mph.max(speed_mph),
            gust_mph: settings.gust_mph.max(0),
            shift_chance: settings.shift_chance.clamp(0.0, 1.0),
            rng,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed_mph(&self) -> i32 {
        self.speed_mph
    }

    pub fn reading(&self) -> WindReading {
        WindReading {
            direction: self.direction,
            speed_mph: self.speed_mph,
        }
    }

    pub fn advance(&mut self) {
        if self.shift_chance > 0.0 && self.rng.gen_bool(self.shift_chance) {
            self.direction = if self.rng.gen_bool(0.5) {
                self.direction.clockwise()
            } else {
                self.direction.counter_clockwise()
            };
        }
        if self.gust_mph > 0 {
            let delta = self.rng.gen_range(-self.gust_mph..=self.gust_mph);
            self.speed_mph = self
                .speed_mph
                .saturating_add(delta)
                .clamp(0, self.max_speed_mph);
        }
    }
}

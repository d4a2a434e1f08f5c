//! Per-tick course plotting: wind drift, steering toward the target under a
//! turn-rate limit, and propulsion.
//!
//! Headings are degrees throughout; they are converted to radians only at
//! the `cos`/`sin` call. Positions are whole units, truncated toward zero;
//! the dropped fraction rides on the chart and is added back next tick.

use crate::chart::{Chart, Coordinate, Fix};
use crate::environment::{Direction, WindReading};
use crate::vessel::{HullProfile, PropulsionProfile, VesselKind};

/// Extra knots a sailing vessel gains per mph of wind.
pub const SAIL_BONUS_PER_MPH: f64 = 0.1;

/// How far the wind pushes a vessel this tick, as `(lat, lng)` offsets.
///
/// The axis mapping is fixed: north and south winds act on longitude, east
/// and west winds on latitude.
pub fn wind_drift(wind: WindReading) -> (i32, i32) {
    let speed = wind.speed_mph;
    match wind.direction {
        Direction::North => (0, speed),
        Direction::South => (0, -speed),
        Direction::East => (-speed, 0),
        Direction::West => (speed, 0),
    }
}

/// Bearing in degrees from `(lat, lng)` toward `target`.
pub fn bearing(lat: f64, lng: f64, target: Coordinate) -> f64 {
    (target.lng as f64 - lng)
        .atan2(target.lat as f64 - lat)
        .to_degrees()
}

/// Limits a heading change to at most `max_turn` degrees, turning toward
/// `desired`.
pub fn clamp_turn(previous: f64, desired: f64, max_turn: f64) -> f64 {
    if (desired - previous).abs() <= max_turn {
        desired
    } else if desired >= previous {
        previous + max_turn
    } else {
        previous - max_turn
    }
}

pub fn sail_bonus(kind: VesselKind, wind: WindReading) -> f64 {
    if kind.has_sail_bonus() {
        SAIL_BONUS_PER_MPH * wind.speed_mph as f64
    } else {
        0.0
    }
}

/// Everything needed to plot one vessel's next fix.
pub struct Helm<'a> {
    pub kind: VesselKind,
    pub hull: &'a HullProfile,
    pub propulsion: Option<&'a PropulsionProfile>,
}

impl Helm<'_> {
    /// Computes the next fix without touching the chart.
    pub fn plot(&self, chart: &Chart, wind: WindReading, target: Coordinate) -> Fix {
        let (drift_lat, drift_lng) = wind_drift(wind);
        let lat = chart.lat().saturating_add(drift_lat);
        let lng = chart.lng().saturating_add(drift_lng);

        let Some(propulsion) = self.propulsion else {
            return Fix {
                position: Coordinate::new(lat, lng),
                angle: chart.angle(),
                carry: chart.carry(),
            };
        };

        let desired = bearing(lat as f64, lng as f64, target);
        let angle = clamp_turn(chart.angle(), desired, self.hull.min_turn_radius);
        let speed = propulsion.speed_knots + sail_bonus(self.kind, wind);
        let radians = angle.to_radians();
        let (carry_lat, carry_lng) = chart.carry();
        let exact_lat = lat as f64 + carry_lat + radians.cos() * speed;
        let exact_lng = lng as f64 + carry_lng + radians.sin() * speed;
        let next_lat = exact_lat.trunc();
        let next_lng = exact_lng.trunc();

        Fix {
            position: Coordinate::new(next_lat as i32, next_lng as i32),
            angle,
            carry: (exact_lat - next_lat, exact_lng - next_lng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wind(direction: Direction, speed_mph: i32) -> WindReading {
        WindReading {
            direction,
            speed_mph,
        }
    }

    fn hull(min_turn_radius: f64) -> HullProfile {
        HullProfile {
            max_wave_height: 5.0,
            min_turn_radius,
        }
    }

    #[test]
    fn wind_drift_mapping() {
        assert_eq!(wind_drift(wind(Direction::North, 5)), (0, 5));
        assert_eq!(wind_drift(wind(Direction::South, 5)), (0, -5));
        assert_eq!(wind_drift(wind(Direction::East, 5)), (-5, 0));
        assert_eq!(wind_drift(wind(Direction::West, 5)), (5, 0));
    }

    #[test]
    fn bearing_uses_lng_over_lat() {
        let target = Coordinate::new(100, 100);
        assert!((bearing(0.0, 0.0, target) - 45.0).abs() < 1e-9);
        assert!((bearing(0.0, 100.0, target) - 0.0).abs() < 1e-9);
        assert!((bearing(100.0, 0.0, target) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_turn_limits_both_directions() {
        assert_eq!(clamp_turn(0.0, 45.0, 10.0), 10.0);
        assert_eq!(clamp_turn(0.0, -45.0, 10.0), -10.0);
        assert_eq!(clamp_turn(30.0, 35.0, 10.0), 35.0);
        assert_eq!(clamp_turn(30.0, 40.0, 10.0), 40.0);
    }

    #[test]
    fn unpowered_vessel_only_drifts() {
        let hull = hull(10.0);
        let helm = Helm {
            kind: VesselKind::Raft,
            hull: &hull,
            propulsion: None,
        };
        let chart = Chart::new(Coordinate::new(10, 20)).with_angle(33.0);
        let fix = helm.plot(&chart, wind(Direction::North, 5), Coordinate::new(1000, 1000));

        assert_eq!(fix.position, Coordinate::new(10, 25));
        assert_eq!(fix.angle, 33.0);
    }

    #[test]
    fn powered_vessel_turns_within_limit_and_moves() {
        let hull = hull(15.0);
        let propulsion = PropulsionProfile { speed_knots: 10.0 };
        let helm = Helm {
            kind: VesselKind::Canoe,
            hull: &hull,
            propulsion: Some(&propulsion),
        };
        let chart = Chart::new(Coordinate::new(0, 0));
        let fix = helm.plot(&chart, wind(Direction::North, 0), Coordinate::new(1000, 1000));

        assert_eq!(fix.angle, 15.0);
        // 9.659.. and 2.588.. truncate to 9 and 2.
        assert_eq!(fix.position, Coordinate::new(9, 2));
        assert!((fix.carry.0 - (15.0_f64.to_radians().cos() * 10.0 - 9.0)).abs() < 1e-9);
        assert!((fix.carry.1 - (15.0_f64.to_radians().sin() * 10.0 - 2.0)).abs() < 1e-9);
    }

    #[test]
    fn carried_fraction_completes_a_whole_unit() {
        let hull = hull(0.0);
        let propulsion = PropulsionProfile { speed_knots: 0.5 };
        let helm = Helm {
            kind: VesselKind::Canoe,
            hull: &hull,
            propulsion: Some(&propulsion),
        };
        let calm = wind(Direction::North, 0);
        let target = Coordinate::new(1000, 0);
        let mut chart = Chart::new(Coordinate::new(0, 0));
        let mut lats = Vec::new();
        for _ in 0..5 {
            let fix = helm.plot(&chart, calm, target);
            chart.record_fix(fix, "Slowpoke").unwrap();
            lats.push(chart.lat());
        }

        assert_eq!(lats, [0, 1, 1, 2, 2]);
    }

    #[test]
    fn unpowered_vessel_keeps_its_carry() {
        let hull = hull(10.0);
        let helm = Helm {
            kind: VesselKind::Raft,
            hull: &hull,
            propulsion: None,
        };
        let fix = Fix {
            position: Coordinate::new(0, 0),
            angle: 0.0,
            carry: (0.5, 0.25),
        };
        let mut chart = Chart::new(Coordinate::new(0, 0));
        chart.record_fix(fix, "Drifter").unwrap();

        let next = helm.plot(&chart, wind(Direction::West, 3), Coordinate::new(100, 100));
        assert_eq!(next.position, Coordinate::new(3, 0));
        assert_eq!(next.carry, (0.5, 0.25));
    }

    #[test]
    fn bearing_is_taken_after_drift() {
        let hull = hull(360.0);
        let propulsion = PropulsionProfile { speed_knots: 0.0 };
        let helm = Helm {
            kind: VesselKind::Canoe,
            hull: &hull,
            propulsion: Some(&propulsion),
        };
        // Drift carries the vessel level with the target's longitude.
        let chart = Chart::new(Coordinate::new(0, 95));
        let fix = helm.plot(&chart, wind(Direction::North, 5), Coordinate::new(100, 100));

        assert_eq!(fix.position, Coordinate::new(0, 100));
        assert!(fix.angle.abs() < 1e-9);
    }

    #[test]
    fn sail_bonus_only_for_sailboats() {
        let breeze = wind(Direction::East, 20);
        assert!((sail_bonus(VesselKind::Sailboat, breeze) - 2.0).abs() < 1e-9);
        assert_eq!(sail_bonus(VesselKind::Canoe, breeze), 0.0);
        assert_eq!(sail_bonus(VesselKind::Raft, breeze), 0.0);
    }
}

//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a settings file can
//! override it without touching code.

use serde::{Deserialize, Serialize};

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Side length of the player square
    pub player_size: f32,
    /// Cruising speed (pixels/s)
    pub normal_speed: f32,
    /// Speed multiplier while boosting
    pub boost_multiplier: f32,
    /// Energy needed to start boosting
    pub boost_min_energy: f32,
    pub initial_energy: f32,
    pub max_energy: f32,
    /// Energy drained (boosting) or regained (cruising) per second
    pub energy_rate: f32,
    /// Orbit angular speed at cruising speed (radians/s)
    pub orbit_angular_speed: f32,

    // === Pillars ===
    pub pillar_size: f32,
    pub initial_pillars: u32,
    /// Distance a nudge moves the selected pillar
    pub nudge_distance: f32,
    /// Score spent to select a pillar with the mouse
    pub select_cost: u64,

    // === Pickups ===
    pub pickup_size: f32,
    pub pickup_value: u32,
    /// Seconds between pickup spawns
    pub pickup_spawn_interval: f32,
    pub max_pickups: usize,
    /// Pickups are only absorbed with energy above this
    pub pickup_energy_threshold: f32,

    // === Barriers ===
    pub barrier_width: f32,
    pub initial_barriers: u32,
    /// Barriers block the player at or below this energy
    pub barrier_energy_threshold: f32,

    /// Random placement attempts before a spawn is skipped
    pub spawn_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: 20.0,
            normal_speed: 200.0,
            boost_multiplier: 2.0,
            boost_min_energy: 10.0,
            initial_energy: 50.0,
            max_energy: 100.0,
            energy_rate: 40.0,
            orbit_angular_speed: 2.0,

            pillar_size: 40.0,
            initial_pillars: 3,
            nudge_distance: 10.0,
            select_cost: 5,

            pickup_size: 20.0,
            pickup_value: 10,
            pickup_spawn_interval: 2.0,
            max_pickups: 6,
            pickup_energy_threshold: 10.0,

            barrier_width: 16.0,
            initial_barriers: 1,
            barrier_energy_threshold: 80.0,

            spawn_attempts: 64,
        }
    }
}

impl Tuning {
    /// Speed while boosting
    pub fn boost_speed(&self) -> f32 {
        self.normal_speed * self.boost_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "player_size": 30.0 }"#).unwrap();
        assert_eq!(tuning.player_size, 30.0);
        assert_eq!(tuning.normal_speed, Tuning::default().normal_speed);
        assert_eq!(tuning.boost_speed(), 400.0);
    }
}

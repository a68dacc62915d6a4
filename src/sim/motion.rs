//! Player and pillar motion built from motors
//!
//! Straight-line motion is a single translation motor per tick. Orbiting is a
//! rotation conjugated by the translation to the pivot, so the player circles
//! the pillar without any explicit change of frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::clamp_to_arena;
use super::state::Player;
use crate::ga::{Bivector, Motor, Point};
use crate::tuning::Tuning;

/// Direction for moving the selected pillar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

impl Nudge {
    /// Unit translation direction (y-up)
    pub fn direction(self) -> Bivector {
        match self {
            Nudge::Up => Bivector::direction(0.0, 1.0),
            Nudge::Down => Bivector::direction(0.0, -1.0),
            Nudge::Left => Bivector::direction(-1.0, 0.0),
            Nudge::Right => Bivector::direction(1.0, 0.0),
        }
    }
}

/// Move the player `speed * dt` along its direction
pub fn translate_player(player: &mut Player, dt: f32) {
    let motor = Motor::translation(player.speed * dt, player.direction);
    player.pos = motor.apply(player.pos);
}

/// Rotation by `angle` in the sense of `spin`, about `pivot`
///
/// `T * R * ~T`: move the pivot to the origin, rotate, move back.
pub fn orbit_motor(pivot: Point, spin: Bivector, angle: f32) -> Motor {
    let pivot = pivot.planar();
    let to_pivot = Motor::translation(
        pivot.distance(Point::ORIGIN),
        Bivector::direction(pivot.x, pivot.y),
    );
    let rotation = Motor::rotation(angle, spin);
    (to_pivot * rotation * to_pivot.reverse()).normalized()
}

/// Advance the player around `pivot`
///
/// Angular speed scales with the player's speed, so boosting orbits faster.
pub fn orbit_player(player: &mut Player, pivot: Point, dt: f32, tuning: &Tuning) {
    let angle = tuning.orbit_angular_speed * player.speed / tuning.normal_speed * dt;
    let energy = player.energy();
    let motor = orbit_motor(pivot, player.spin, angle);
    player.pos = motor.apply(player.pos).with_payload(energy);
}

/// Reflect the player through `pivot`, then pull it back on screen
///
/// The reflection negates the payload, so energy is restored afterwards.
pub fn reflect_player(player: &mut Player, pivot: Point, arena: Vec2) {
    let energy = player.energy();
    let reflected = player.pos.reflect_through(pivot.planar()).with_payload(energy);
    player.pos = clamp_to_arena(reflected, player.half_size(), arena);
}

/// Translate a point `distance` in the nudge direction
pub fn nudge_point(pos: Point, nudge: Nudge, distance: f32) -> Point {
    Motor::translation(distance, nudge.direction()).apply(pos)
}

/// Drain energy while boosted, regenerate otherwise
///
/// Running dry drops the player back to normal speed.
pub fn manage_energy(player: &mut Player, tuning: &Tuning, dt: f32) {
    let delta = tuning.energy_rate * dt;
    if player.is_boosted(tuning) {
        let energy = player.energy() - delta;
        if energy <= 0.0 {
            player.set_energy(0.0);
            player.speed = tuning.normal_speed;
            log::debug!("Out of energy, boost ended");
        } else {
            player.set_energy(energy);
        }
    } else {
        player.set_energy((player.energy() + delta).min(tuning.max_energy));
    }
    player.update_color(tuning.max_energy);
}

/// Switch between cruising and boost speed
///
/// Boosting needs at least `boost_min_energy`.
pub fn toggle_speed(player: &mut Player, tuning: &Tuning) {
    if player.is_boosted(tuning) {
        player.speed = tuning.normal_speed;
    } else if player.energy() >= tuning.boost_min_energy {
        player.speed = tuning.boost_speed();
    } else {
        log::debug!("Not enough energy to boost ({:.1})", player.energy());
    }
}

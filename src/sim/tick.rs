//! Variable timestep simulation tick
//!
//! One call consumes the frame's discrete input events and advances the game
//! by `dt` seconds. Given the same seed, inputs and timesteps, a run replays
//! identically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{absorb_pickups, apply_barriers, bounce_off_edges, clamp_to_arena};
use super::motion::{
    Nudge, manage_energy, nudge_point, orbit_player, reflect_player, toggle_speed, translate_player,
};
use super::spawn::{pick_other_pillar, pillar_under_cursor, spawn_pickup, spawn_pillar_at};
use super::state::{GameState, MotionMode};
use crate::consts::MAX_ELAPSED_SECONDS;

/// Input events collected for a single frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Toggle between cruising and boost speed
    pub toggle_speed: bool,
    /// Select a random other pillar
    pub switch_pillar: bool,
    /// Start or stop orbiting the selected pillar
    pub toggle_orbit: bool,
    /// Move the selected pillar
    pub nudge: Option<Nudge>,
    /// Reflect the player through the selected pillar
    pub reflect: bool,
    /// Drop a pillar at the player's position
    pub spawn_pillar: bool,
    /// Mouse click in window space (y-up); buys the pillar under it
    pub click: Option<Vec2>,
}

/// Advance the game by `dt` seconds (clamped to `MAX_ELAPSED_SECONDS`)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = dt.max(0.0).min(MAX_ELAPSED_SECONDS);

    handle_input(state, input);

    state.time_ticks += 1;

    let pivot = state.selected_pillar().map(|index| state.items[index].pos);
    if state.player.mode == MotionMode::Orbiting && pivot.is_none() {
        log::debug!("Selected pillar gone, leaving orbit");
        state.player.mode = MotionMode::Translating;
    }

    bounce_off_edges(&mut state.player, state.arena, pivot);

    // Move
    match (state.player.mode, pivot) {
        (MotionMode::Orbiting, Some(pivot)) => orbit_player(&mut state.player, pivot, dt, &state.tuning),
        _ => translate_player(&mut state.player, dt),
    }

    apply_barriers(&mut state.player, &state.items, &state.tuning);

    let gained = absorb_pickups(&state.player, &mut state.items, &state.tuning);
    if gained > 0 {
        state.score += gained;
        log::debug!("Absorbed pickups for {} (score {})", gained, state.score);
    }

    manage_energy(&mut state.player, &state.tuning, dt);

    // Pickup spawn timer
    state.spawn_timer -= dt;
    if state.spawn_timer <= 0.0 {
        state.spawn_timer += state.tuning.pickup_spawn_interval;
        if state.pickup_count() < state.tuning.max_pickups {
            spawn_pickup(state);
        }
    }
}

/// Apply the frame's discrete events in a fixed order
fn handle_input(state: &mut GameState, input: &TickInput) {
    if input.toggle_speed {
        toggle_speed(&mut state.player, &state.tuning);
    }

    if input.toggle_orbit {
        toggle_orbit(state);
    }

    if input.switch_pillar {
        let current = state.selected_pillar();
        match pick_other_pillar(&state.items, current, &mut state.rng) {
            Some(index) => state.select_pillar(index),
            None => log::debug!("Need at least two pillars to switch"),
        }
    }

    if let Some(cursor) = input.click {
        buy_pillar_selection(state, cursor);
    }

    if let Some(nudge) = input.nudge {
        match state.selected_pillar() {
            Some(index) => {
                let distance = state.tuning.nudge_distance;
                let item = &mut state.items[index];
                let moved = nudge_point(item.pos, nudge, distance);
                item.pos = clamp_to_arena(moved, item.size * 0.5, state.arena);
            }
            None => log::debug!("No selected pillar to nudge"),
        }
    }

    if input.spawn_pillar {
        let at = state.player.pos.planar();
        spawn_pillar_at(state, at);
    }

    if input.reflect {
        match state.selected_pillar() {
            Some(index) => {
                let pivot = state.items[index].pos;
                reflect_player(&mut state.player, pivot, state.arena);
            }
            None => log::debug!("No selected pillar to reflect through"),
        }
    }
}

fn toggle_orbit(state: &mut GameState) {
    let player = &mut state.player;
    match player.mode {
        MotionMode::Orbiting => player.mode = MotionMode::Translating,
        MotionMode::Translating if state.items.iter().any(|i| i.is_selected()) => {
            player.mode = MotionMode::Orbiting;
        }
        MotionMode::Translating => log::debug!("No selected pillar to orbit"),
    }
}

/// Select the unselected pillar under `cursor` for `select_cost` score
fn buy_pillar_selection(state: &mut GameState, cursor: Vec2) {
    let cost = state.tuning.select_cost;
    let Some(index) = pillar_under_cursor(&state.items, cursor) else {
        return;
    };
    if state.items[index].is_selected() {
        return;
    }
    if state.score < cost {
        log::debug!("Selecting a pillar costs {cost}, score is {}", state.score);
        return;
    }
    state.score -= cost;
    state.select_pillar(index);
}

//! Collision detection and response
//!
//! Every distance here is an incidence query on point / line blades. Queries
//! run on planar positions so the player's energy payload never counts as
//! distance.

use glam::Vec2;

use super::state::{Item, ItemKind, MotionMode, Player};
use crate::ga::{Incidence, Line, Point};
use crate::tuning::Tuning;

/// Window edge bits for `Player::edge_contacts`
pub const EDGE_LEFT: u8 = 1 << 0;
pub const EDGE_RIGHT: u8 = 1 << 1;
pub const EDGE_BOTTOM: u8 = 1 << 2;
pub const EDGE_TOP: u8 = 1 << 3;

/// The four window edges with inward-pointing unit normals
pub fn window_edges(arena: Vec2) -> [(u8, Line); 4] {
    [
        (EDGE_LEFT, Line::through(Vec2::ZERO, Vec2::X)),
        (EDGE_RIGHT, Line::through(Vec2::new(arena.x, 0.0), Vec2::NEG_X)),
        (EDGE_BOTTOM, Line::through(Vec2::ZERO, Vec2::Y)),
        (EDGE_TOP, Line::through(Vec2::new(0.0, arena.y), Vec2::NEG_Y)),
    ]
}

/// Edges within `half_size` of `center` (inclusive), as a bitmask
///
/// A centre past an edge has a negative distance and counts as touching.
pub fn touching_edges(center: Point, half_size: f32, arena: Vec2) -> u8 {
    window_edges(arena)
        .iter()
        .filter(|(_, edge)| edge.incidence(center.planar()) <= half_size)
        .fold(0, |acc, (bit, _)| acc | bit)
}

/// Bounce the player off the window edges
///
/// Translating: the direction component along a touched edge's normal is
/// negated if it points into the edge. Orbiting: the spin flips if the
/// orbital tangent about `pivot` points into a touched edge.
pub fn bounce_off_edges(player: &mut Player, arena: Vec2, pivot: Option<Point>) {
    let touching = touching_edges(player.pos, player.half_size(), arena);
    let touched = window_edges(arena)
        .into_iter()
        .filter(|(bit, _)| touching & bit != 0)
        .map(|(_, edge)| edge.normal());

    match (player.mode, pivot) {
        (MotionMode::Translating, _) => {
            for normal in touched {
                let dir = player.direction.direction_xy();
                let toward = dir.dot(normal);
                if toward < 0.0 {
                    let bounced = dir - 2.0 * toward * normal;
                    player.direction.e01 = bounced.x;
                    player.direction.e02 = bounced.y;
                }
            }
        }
        (MotionMode::Orbiting, Some(pivot)) => {
            let tangent = orbit_tangent(player, pivot);
            if touched.into_iter().any(|normal| tangent.dot(normal) < 0.0) {
                player.spin = -player.spin;
                log::debug!("Orbit reversed at window edge");
            }
        }
        (MotionMode::Orbiting, None) => {}
    }

    player.edge_contacts = touching;
}

/// Direction the player moves while orbiting `pivot` in the sense of its spin
pub fn orbit_tangent(player: &Player, pivot: Point) -> Vec2 {
    let radial = player.center() - pivot.xy();
    radial.perp() * player.spin.e12.signum()
}

/// Circle approximation of two squares: centre distance below the half-size sum
pub fn overlaps(a: Point, size_a: f32, b: Point, size_b: f32) -> bool {
    let distance = a.planar().incidence(b.planar()).norm();
    distance < 0.5 * size_a + 0.5 * size_b
}

/// Drop the vertical coordinate; barriers span the full height
fn horizontal(p: Point) -> Point {
    Point { y: 0.0, ..p }
}

/// Overlap between an item and a square of `size` centred at `pos`
pub fn item_overlaps(item: &Item, pos: Point, size: f32) -> bool {
    match item.kind {
        ItemKind::Barrier { .. } => overlaps(horizontal(item.pos), item.size, horizontal(pos), size),
        ItemKind::Pillar { .. } | ItemKind::Pickup { .. } => overlaps(item.pos, item.size, pos, size),
    }
}

/// Horizontal overlap between a barrier of `width` at `x` and any item
pub fn barrier_overlaps_any(items: &[Item], x: f32, width: f32) -> bool {
    let query = Point::new(x, 0.0, 0.0);
    items
        .iter()
        .any(|item| overlaps(horizontal(item.pos), item.size, query, width))
}

pub fn overlaps_any(items: &[Item], pos: Point, size: f32) -> bool {
    items.iter().any(|item| item_overlaps(item, pos, size))
}

/// Remove every pickup the player overlaps and return the score they award
///
/// Nothing is absorbed unless energy is above `pickup_energy_threshold`.
pub fn absorb_pickups(player: &Player, items: &mut Vec<Item>, tuning: &Tuning) -> u64 {
    if player.energy() <= tuning.pickup_energy_threshold {
        return 0;
    }

    let mut gained = 0;
    items.retain(|item| match item.kind {
        ItemKind::Pickup { value } if item_overlaps(item, player.pos, player.size) => {
            gained += u64::from(value);
            false
        }
        _ => true,
    });
    gained
}

/// Turn the player away from barriers while energy is at or below
/// `barrier_energy_threshold`; above it barriers are passable
pub fn apply_barriers(player: &mut Player, items: &[Item], tuning: &Tuning) {
    let blocking = player.energy() <= tuning.barrier_energy_threshold;
    let hit = items
        .iter()
        .filter(|item| item.is_barrier())
        .find(|item| blocking && item_overlaps(item, player.pos, player.size));

    if let Some(barrier) = hit {
        match player.mode {
            MotionMode::Translating => {
                let away = (player.pos.x - barrier.pos.x).signum();
                player.direction.e01 = away * player.direction.e01.abs();
            }
            MotionMode::Orbiting => {
                if !player.barrier_contact {
                    player.spin = -player.spin;
                    log::debug!("Orbit reversed at barrier {}", barrier.id);
                }
            }
        }
    }

    player.barrier_contact = hit.is_some();
}

/// Clamp a centre so a box of `half_size` stays inside the arena
///
/// The payload coordinate is left untouched.
pub fn clamp_to_arena(pos: Point, half_size: f32, arena: Vec2) -> Point {
    Point {
        x: pos.x.max(half_size).min(arena.x - half_size),
        y: pos.y.max(half_size).min(arena.y - half_size),
        ..pos
    }
}

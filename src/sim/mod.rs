//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (items in insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{
    absorb_pickups, apply_barriers, bounce_off_edges, clamp_to_arena, orbit_tangent, overlaps, touching_edges,
};
pub use motion::{Nudge, orbit_motor};
pub use spawn::{find_free_position, pick_other_pillar};
pub use state::{GameState, Item, ItemKind, MotionMode, Player};
pub use tick::{TickInput, tick};

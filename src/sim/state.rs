//! Game state and core simulation types
//!
//! Entity positions are point blades at the entity's centre. The player's
//! energy rides along in the payload (z) coordinate of its point.

use glam::{Vec2, Vec4};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::ga::{Bivector, Point};
use crate::tuning::Tuning;

/// Palette for game entities
pub mod colors {
    use glam::Vec4;

    pub const SELECTED_PILLAR: Vec4 = Vec4::new(0.8, 0.02, 0.5, 1.0);
    pub const BASIC_PILLAR: Vec4 = Vec4::new(0.2, 0.01, 0.4, 1.0);
    pub const PICKUP: Vec4 = Vec4::new(1.0, 0.85, 0.2, 1.0);
    pub const BARRIER: Vec4 = Vec4::new(0.35, 0.35, 0.45, 1.0);
}

/// How the player moves this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionMode {
    /// Straight-line motion along `Player::direction`
    #[default]
    Translating,
    /// Circling the selected pillar in the sense of `Player::spin`
    Orbiting,
}

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Centre, with energy in the payload coordinate
    pub pos: Point,
    pub size: f32,
    pub speed: f32,
    /// Translation direction (e01, e02)
    pub direction: Bivector,
    /// Orbit sense (e12 = ±1)
    pub spin: Bivector,
    pub color: Vec4,
    pub mode: MotionMode,
    /// Window edges touched on the previous tick (bit per edge)
    #[serde(default)]
    pub edge_contacts: u8,
    /// Whether a blocking barrier was touched on the previous tick
    #[serde(default)]
    pub barrier_contact: bool,
}

impl Player {
    pub fn new(center: Vec2, tuning: &Tuning) -> Self {
        let mut player = Self {
            pos: Point::from_vec2(center, tuning.initial_energy),
            size: tuning.player_size,
            speed: tuning.normal_speed,
            direction: Bivector::direction(1.0, 1.0),
            spin: Bivector::spin(1.0),
            color: Vec4::ONE,
            mode: MotionMode::Translating,
            edge_contacts: 0,
            barrier_contact: false,
        };
        player.update_color(tuning.max_energy);
        player
    }

    #[inline]
    pub fn energy(&self) -> f32 {
        self.pos.z
    }

    #[inline]
    pub fn set_energy(&mut self, energy: f32) {
        self.pos.z = energy;
    }

    pub fn center(&self) -> Vec2 {
        self.pos.xy()
    }

    #[inline]
    pub fn half_size(&self) -> f32 {
        self.size * 0.5
    }

    pub fn is_boosted(&self, tuning: &Tuning) -> bool {
        self.speed > tuning.normal_speed
    }

    /// Red when drained, green when full
    pub fn update_color(&mut self, max_energy: f32) {
        let level = (self.energy() / max_energy).clamp(0.0, 1.0);
        self.color = Vec4::new(1.0 - level, level, 0.0, 1.0);
    }
}

/// Item variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Orbit / reflection anchor
    Pillar { selected: bool },
    /// Absorbed for score
    Pickup { value: u32 },
    /// Full-height obstacle, passable with enough energy
    Barrier { height: f32 },
}

/// A pillar, pickup or barrier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub kind: ItemKind,
    /// Centre of the item
    pub pos: Point,
    /// Side length, or width for barriers
    pub size: f32,
}

impl Item {
    /// Bounding box size (width, height)
    pub fn extent(&self) -> Vec2 {
        match self.kind {
            ItemKind::Barrier { height } => Vec2::new(self.size, height),
            _ => Vec2::splat(self.size),
        }
    }

    pub fn color(&self) -> Vec4 {
        match self.kind {
            ItemKind::Pillar { selected: true } => colors::SELECTED_PILLAR,
            ItemKind::Pillar { selected: false } => colors::BASIC_PILLAR,
            ItemKind::Pickup { .. } => colors::PICKUP,
            ItemKind::Barrier { .. } => colors::BARRIER,
        }
    }

    pub fn is_pillar(&self) -> bool {
        matches!(self.kind, ItemKind::Pillar { .. })
    }

    pub fn is_pickup(&self) -> bool {
        matches!(self.kind, ItemKind::Pickup { .. })
    }

    pub fn is_barrier(&self) -> bool {
        matches!(self.kind, ItemKind::Barrier { .. })
    }

    pub fn is_selected(&self) -> bool {
        matches!(self.kind, ItemKind::Pillar { selected: true })
    }

    /// No-op for anything but pillars
    pub fn set_selected(&mut self, value: bool) {
        if let ItemKind::Pillar { selected } = &mut self.kind {
            *selected = value;
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Drives placement and pillar switching
    pub rng: Pcg32,
    /// Play field size (window width, height)
    pub arena: Vec2,
    pub tuning: Tuning,
    pub player: Player,
    /// Pillars, pickups and barriers (sorted by id)
    pub items: Vec<Item>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds until the next pickup spawn
    pub spawn_timer: f32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with the initial barriers and pillars placed
    pub fn new(seed: u64, arena: Vec2, tuning: Tuning) -> Self {
        let mut state = Self::empty(seed, arena, tuning);
        spawn::populate(&mut state);
        log::info!(
            "New game (seed {}): {} items in a {}x{} arena",
            seed,
            state.items.len(),
            arena.x,
            arena.y
        );
        state
    }

    /// Create a game with only the player
    pub fn empty(seed: u64, arena: Vec2, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            player: Player::new(arena * 0.5, &tuning),
            spawn_timer: tuning.pickup_spawn_interval,
            tuning,
            items: Vec::new(),
            score: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an item, returning its id
    pub fn add_item(&mut self, kind: ItemKind, pos: Point, size: f32) -> u32 {
        let id = self.next_entity_id();
        self.items.push(Item {
            id,
            kind,
            pos,
            size,
        });
        id
    }

    /// Index of the selected pillar
    pub fn selected_pillar(&self) -> Option<usize> {
        self.items.iter().position(Item::is_selected)
    }

    /// Make the pillar at `index` the only selected one
    pub fn select_pillar(&mut self, index: usize) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.set_selected(i == index);
        }
    }

    pub fn pillar_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_pillar()).count()
    }

    pub fn pickup_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_pickup()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec2 {
        Vec2::new(846.0, 500.0)
    }

    #[test]
    fn test_new_player_defaults() {
        let tuning = Tuning::default();
        let player = Player::new(Vec2::new(100.0, 50.0), &tuning);
        assert_eq!(player.center(), Vec2::new(100.0, 50.0));
        assert_eq!(player.energy(), tuning.initial_energy);
        assert_eq!(player.mode, MotionMode::Translating);
        assert!(!player.is_boosted(&tuning));
        // Half energy: half red, half green
        assert_eq!(player.color, Vec4::new(0.5, 0.5, 0.0, 1.0));
    }

    #[test]
    fn test_new_game_populates() {
        let state = GameState::new(12345, arena(), Tuning::default());
        let tuning = &state.tuning;
        assert_eq!(state.pillar_count(), tuning.initial_pillars as usize);
        assert_eq!(
            state.items.iter().filter(|i| i.is_barrier()).count(),
            tuning.initial_barriers as usize
        );
        // Exactly one pillar starts selected
        assert_eq!(state.items.iter().filter(|i| i.is_selected()).count(), 1);
    }

    #[test]
    fn test_select_pillar_is_exclusive() {
        let mut state = GameState::empty(1, arena(), Tuning::default());
        let kind = ItemKind::Pillar { selected: true };
        state.add_item(kind, Point::new(100.0, 100.0, 0.0), 40.0);
        state.add_item(kind, Point::new(300.0, 100.0, 0.0), 40.0);
        state.add_item(ItemKind::Pickup { value: 10 }, Point::new(500.0, 100.0, 0.0), 20.0);

        state.select_pillar(1);
        assert_eq!(state.selected_pillar(), Some(1));
        assert!(!state.items[0].is_selected());
        assert_eq!(state.items[1].color(), colors::SELECTED_PILLAR);
        assert_eq!(state.items[0].color(), colors::BASIC_PILLAR);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut state = GameState::empty(1, arena(), Tuning::default());
        let a = state.add_item(ItemKind::Pickup { value: 1 }, Point::ORIGIN, 10.0);
        let b = state.add_item(ItemKind::Pickup { value: 1 }, Point::ORIGIN, 10.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_barrier_extent() {
        let barrier = Item {
            id: 1,
            kind: ItemKind::Barrier { height: 500.0 },
            pos: Point::new(200.0, 250.0, 0.0),
            size: 16.0,
        };
        assert_eq!(barrier.extent(), Vec2::new(16.0, 500.0));
        assert!(barrier.is_barrier() && !barrier.is_pillar());
    }
}

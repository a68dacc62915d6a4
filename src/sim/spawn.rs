//! Item placement and pillar selection
//!
//! All randomness comes from the caller's RNG so a seeded game replays
//! identically.

use glam::Vec2;
use rand::Rng;

use super::collision::{barrier_overlaps_any, clamp_to_arena, overlaps, overlaps_any};
use super::state::{GameState, Item, ItemKind};
use crate::ga::Point;

/// Uniform centre for a box of `extent` that keeps the whole box in the arena
///
/// `None` when the box is larger than the arena.
pub fn random_center<R: Rng + ?Sized>(rng: &mut R, arena: Vec2, extent: Vec2) -> Option<Point> {
    let half = extent * 0.5;
    let max = arena - half;
    if max.x < half.x || max.y < half.y {
        return None;
    }
    let x = rng.random_range(half.x..=max.x);
    let y = rng.random_range(half.y..=max.y);
    Some(Point::new(x, y, 0.0))
}

/// Random in-bounds centre for a square of `size` that overlaps no item
///
/// Gives up after `attempts` tries.
pub fn find_free_position<R: Rng + ?Sized>(
    items: &[Item],
    arena: Vec2,
    size: f32,
    rng: &mut R,
    attempts: u32,
) -> Option<Point> {
    (0..attempts)
        .filter_map(|_| random_center(rng, arena, Vec2::splat(size)))
        .find(|&pos| !overlaps_any(items, pos, size))
}

/// Place a pickup in free space
pub fn spawn_pickup(state: &mut GameState) -> Option<u32> {
    let tuning = &state.tuning;
    let (size, value) = (tuning.pickup_size, tuning.pickup_value);
    let Some(pos) = find_free_position(&state.items, state.arena, size, &mut state.rng, tuning.spawn_attempts)
    else {
        log::debug!("No free space for a pickup");
        return None;
    };
    Some(state.add_item(ItemKind::Pickup { value }, pos, size))
}

/// Place a pillar in free space, optionally making it the selected one
pub fn spawn_pillar(state: &mut GameState, selected: bool) -> Option<u32> {
    let size = state.tuning.pillar_size;
    let attempts = state.tuning.spawn_attempts;
    let Some(pos) = find_free_position(&state.items, state.arena, size, &mut state.rng, attempts) else {
        log::debug!("No free space for a pillar");
        return None;
    };
    let id = state.add_item(ItemKind::Pillar { selected }, pos, size);
    if selected {
        state.select_pillar(state.items.len() - 1);
    }
    Some(id)
}

/// Place a pillar centred at `pos`, kept on screen
///
/// Skipped when the spot overlaps another item. The new pillar becomes the
/// selected one if no pillar is selected yet.
pub fn spawn_pillar_at(state: &mut GameState, pos: Point) -> Option<u32> {
    let size = state.tuning.pillar_size;
    let pos = clamp_to_arena(pos.planar(), size * 0.5, state.arena);
    if overlaps_any(&state.items, pos, size) {
        log::debug!("Pillar at ({:.1}, {:.1}) would overlap an item", pos.x, pos.y);
        return None;
    }
    let selected = state.selected_pillar().is_none();
    Some(state.add_item(ItemKind::Pillar { selected }, pos, size))
}

/// Place a full-height barrier clear of other items and the player's column
pub fn spawn_barrier(state: &mut GameState) -> Option<u32> {
    let width = state.tuning.barrier_width;
    let height = state.arena.y;
    let player_column = Point::new(state.player.pos.x, 0.0, 0.0);
    let player_size = state.player.size;

    for _ in 0..state.tuning.spawn_attempts {
        let Some(center) = random_center(&mut state.rng, state.arena, Vec2::new(width, height)) else {
            break;
        };
        let column = Point::new(center.x, 0.0, 0.0);
        if barrier_overlaps_any(&state.items, center.x, width)
            || overlaps(column, width, player_column, player_size)
        {
            continue;
        }
        let pos = Point::new(center.x, height * 0.5, 0.0);
        return Some(state.add_item(ItemKind::Barrier { height }, pos, width));
    }

    log::debug!("No free space for a barrier");
    None
}

/// Initial layout: barriers first, then pillars with the first one selected
pub fn populate(state: &mut GameState) {
    for _ in 0..state.tuning.initial_barriers {
        spawn_barrier(state);
    }
    for i in 0..state.tuning.initial_pillars {
        spawn_pillar(state, i == 0);
    }
}

/// A random pillar index other than `current`
///
/// `None` when there are fewer than two pillars.
pub fn pick_other_pillar<R: Rng + ?Sized>(items: &[Item], current: Option<usize>, rng: &mut R) -> Option<usize> {
    let pillars: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_pillar())
        .map(|(i, _)| i)
        .collect();
    if pillars.len() < 2 {
        return None;
    }
    let candidates: Vec<usize> = pillars.into_iter().filter(|&i| Some(i) != current).collect();
    let pick = rng.random_range(0..candidates.len());
    Some(candidates[pick])
}

/// Index of the pillar under `cursor` (window space, y-up)
pub fn pillar_under_cursor(items: &[Item], cursor: Vec2) -> Option<usize> {
    let point = Point::from_vec2(cursor, 0.0);
    items
        .iter()
        .position(|item| item.is_pillar() && overlaps(item.pos, item.size, point, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ARENA: Vec2 = Vec2::new(846.0, 500.0);

    fn pillar(x: f32, y: f32) -> Item {
        Item {
            id: 0,
            kind: ItemKind::Pillar { selected: false },
            pos: Point::new(x, y, 0.0),
            size: 40.0,
        }
    }

    #[test]
    fn test_random_center_keeps_box_inside() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let p = random_center(&mut rng, ARENA, Vec2::splat(40.0)).unwrap();
            assert!(p.x >= 20.0 && p.x <= ARENA.x - 20.0);
            assert!(p.y >= 20.0 && p.y <= ARENA.y - 20.0);
        }
        assert!(random_center(&mut rng, ARENA, Vec2::new(900.0, 10.0)).is_none());
    }

    #[test]
    fn test_free_position_avoids_items() {
        let mut rng = Pcg32::seed_from_u64(11);
        let items = vec![pillar(200.0, 200.0), pillar(600.0, 300.0)];
        for _ in 0..50 {
            let pos = find_free_position(&items, ARENA, 20.0, &mut rng, 64).unwrap();
            assert!(!overlaps_any(&items, pos, 20.0));
        }
    }

    #[test]
    fn test_free_position_exhaustion() {
        let mut rng = Pcg32::seed_from_u64(5);
        let arena = Vec2::new(100.0, 100.0);
        let mut blocker = pillar(50.0, 50.0);
        blocker.size = 400.0;
        assert_eq!(find_free_position(&[blocker], arena, 20.0, &mut rng, 64), None);
        assert_eq!(find_free_position(&[], arena, 20.0, &mut rng, 0), None);
    }

    #[test]
    fn test_switch_needs_two_pillars() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(pick_other_pillar(&[], None, &mut rng), None);
        assert_eq!(pick_other_pillar(&[pillar(100.0, 100.0)], Some(0), &mut rng), None);

        let items = vec![pillar(100.0, 100.0), pillar(300.0, 100.0)];
        for _ in 0..10 {
            assert_eq!(pick_other_pillar(&items, Some(0), &mut rng), Some(1));
        }
    }

    #[test]
    fn test_pillar_under_cursor() {
        let items = vec![pillar(100.0, 100.0), pillar(300.0, 100.0)];
        assert_eq!(pillar_under_cursor(&items, Vec2::new(305.0, 95.0)), Some(1));
        assert_eq!(pillar_under_cursor(&items, Vec2::new(200.0, 100.0)), None);
    }

    #[test]
    fn test_populate_is_deterministic() {
        let a = GameState::new(99, ARENA, Tuning::default());
        let b = GameState::new(99, ARENA, Tuning::default());
        assert_eq!(a.items, b.items);

        let barrier = a.items.iter().find(|i| i.is_barrier()).unwrap();
        assert_eq!(barrier.extent().y, ARENA.y);
        assert_eq!(barrier.pos.y, ARENA.y * 0.5);
        // The first pillar placed is the selected one
        let first_pillar = a.items.iter().position(Item::is_pillar);
        assert_eq!(a.selected_pillar(), first_pillar);
    }

    #[test]
    fn test_pillar_at_position() {
        let mut state = GameState::empty(3, ARENA, Tuning::default());
        let id = spawn_pillar_at(&mut state, Point::new(100.0, 120.0, 50.0)).unwrap();
        let pillar = state.items.iter().find(|i| i.id == id).unwrap();
        assert_eq!(pillar.pos, Point::new(100.0, 120.0, 0.0));
        assert!(pillar.is_selected());

        // Overlapping spot is skipped
        assert_eq!(spawn_pillar_at(&mut state, Point::new(110.0, 120.0, 0.0)), None);

        // Near the corner it is pulled on screen; selection stays with the first
        spawn_pillar_at(&mut state, Point::new(5.0, 490.0, 0.0)).unwrap();
        assert_eq!(state.items[1].pos, Point::new(20.0, 480.0, 0.0));
        assert!(!state.items[1].is_selected());
    }

    #[test]
    fn test_spawned_pillar_can_take_selection() {
        let mut state = GameState::new(7, ARENA, Tuning::default());
        let before = state.selected_pillar();
        spawn_pillar(&mut state, true).unwrap();
        assert_ne!(state.selected_pillar(), before);
        assert_eq!(state.items.iter().filter(|i| i.is_selected()).count(), 1);
    }
}

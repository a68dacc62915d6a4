//! Draw list generation from the game state

use super::instance::{DrawInstance, Shape};
use crate::sim::{GameState, ItemKind};

/// Instances in draw order: barriers, pillars, pickups, then the player
pub fn collect_instances(state: &GameState) -> Vec<DrawInstance> {
    let mut instances = Vec::with_capacity(state.items.len() + 1);

    let layers: [fn(&ItemKind) -> bool; 3] = [
        |k| matches!(k, ItemKind::Barrier { .. }),
        |k| matches!(k, ItemKind::Pillar { .. }),
        |k| matches!(k, ItemKind::Pickup { .. }),
    ];
    for in_layer in layers {
        for item in state.items.iter().filter(|item| in_layer(&item.kind)) {
            let shape = if item.is_pickup() { Shape::Ellipse } else { Shape::Rect };
            instances.push(DrawInstance::centered(item.pos.xy(), item.extent(), item.color(), shape));
        }
    }

    let player = &state.player;
    instances.push(DrawInstance::centered(
        player.center(),
        glam::Vec2::splat(player.size),
        player.color,
        Shape::Rect,
    ));

    instances
}

/// Raw bytes of an instance list, ready for a vertex buffer upload
pub fn as_bytes(instances: &[DrawInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Point;
    use crate::tuning::Tuning;
    use glam::Vec2;

    #[test]
    fn test_draw_order_and_corners() {
        let mut state = GameState::empty(1, Vec2::new(846.0, 500.0), Tuning::default());
        state.add_item(ItemKind::Pickup { value: 10 }, Point::new(50.0, 50.0, 0.0), 20.0);
        state.add_item(ItemKind::Pillar { selected: true }, Point::new(200.0, 100.0, 0.0), 40.0);
        state.add_item(ItemKind::Barrier { height: 500.0 }, Point::new(600.0, 250.0, 0.0), 16.0);

        let instances = collect_instances(&state);
        assert_eq!(instances.len(), 4);

        // Barrier first, as a full-height strip
        assert_eq!(instances[0].position, [592.0, 0.0]);
        assert_eq!(instances[0].size, [16.0, 500.0]);
        // Pillar corner is centre minus half size
        assert_eq!(instances[1].position, [180.0, 80.0]);
        assert_eq!(instances[1].color, [0.8, 0.02, 0.5, 1.0]);
        assert_eq!(instances[2].shape, Shape::Ellipse as u32);
        // Player last
        assert_eq!(instances[3].position, [413.0, 240.0]);
        assert_eq!(instances[3].color, state.player.color.to_array());
    }

    #[test]
    fn test_instance_bytes() {
        let state = GameState::empty(1, Vec2::new(846.0, 500.0), Tuning::default());
        let instances = collect_instances(&state);
        assert_eq!(as_bytes(&instances).len(), std::mem::size_of::<DrawInstance>());
        assert_eq!(std::mem::size_of::<DrawInstance>(), 36);
    }
}

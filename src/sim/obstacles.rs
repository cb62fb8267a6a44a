//! Obstacle pair generation
//!
//! Spawns pairs at the right edge under a horizontal spacing constraint,
//! scrolls every pair leftward, and retires pairs once fully offscreen.
//! The spacing tracker counts down in percent of viewport width so the
//! constraint holds across resizes and speed changes.

use rand::Rng;

use super::state::{GamePhase, GameWorld, ObstaclePair, Viewport};
use crate::consts::SLOT_FULL_DISTANCE;

/// Advance obstacle state by one frame. No-op outside Play.
pub fn tick(world: &mut GameWorld, viewport: Viewport) {
    if world.phase != GamePhase::Play {
        return;
    }

    let spawn_ready = world.obstacles.is_empty()
        || world.distance_to_next_slot < SLOT_FULL_DISTANCE - world.config.pipe_gap_horizontal;

    if spawn_ready {
        let offset_frac = world
            .rng
            .random_range(world.config.spawn_band_min..world.config.spawn_band_max);
        let gap_top = offset_frac * viewport.height;
        let id = world.next_entity_id();
        let cfg = &world.config;
        let pair = ObstaclePair::spawn(
            id,
            viewport.width,
            gap_top,
            cfg.pipe_gap_vertical * viewport.height,
            cfg.obstacle_width,
            cfg.obstacle_height * viewport.height,
        );
        log::debug!("spawned pair {} with gap top {:.0}", id, gap_top);
        world.obstacles.push(pair);
        world.distance_to_next_slot = SLOT_FULL_DISTANCE;
    }

    world.distance_to_next_slot -= world.scroll_speed / viewport.width * 100.0;

    let dx = world.scroll_speed;
    for pair in &mut world.obstacles {
        pair.shift_left(dx);
    }
    world.obstacles.retain(|p| !p.offscreen_left());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::rect::Aabb;

    const VP: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    fn playing_world() -> GameWorld {
        let mut world = GameWorld::new(Config::default(), 42).unwrap();
        world.activate(0, VP);
        world
    }

    #[test]
    fn test_first_pair_spawns_immediately() {
        let mut world = playing_world();
        tick(&mut world, VP);
        assert_eq!(world.obstacles.len(), 1);
        // spawned at the right edge, then shifted once
        let pair = &world.obstacles[0];
        assert_eq!(pair.top.left(), VP.width - world.scroll_speed);
        assert_eq!(world.distance_to_next_slot, SLOT_FULL_DISTANCE - 3.0 / VP.width * 100.0);
    }

    #[test]
    fn test_spawned_pair_keeps_configured_gap() {
        let mut world = playing_world();
        tick(&mut world, VP);
        let gap = world.config.pipe_gap_vertical * VP.height;
        for _ in 0..200 {
            tick(&mut world, VP);
            for pair in &world.obstacles {
                assert!((pair.bottom.top() - pair.top.bottom() - gap).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_gap_top_drawn_from_band() {
        let mut world = playing_world();
        for _ in 0..2000 {
            tick(&mut world, VP);
        }
        assert!(world.obstacles.len() > 1);
        for pair in &world.obstacles {
            let offset = pair.top.bottom();
            assert!(offset >= world.config.spawn_band_min * VP.height - 1e-3);
            assert!(offset < world.config.spawn_band_max * VP.height + 1e-3);
        }
    }

    #[test]
    fn test_horizontal_spacing_enforced() {
        let mut world = playing_world();
        let decay_per_tick = world.scroll_speed / VP.width * 100.0;

        let mut spawn_frames = Vec::new();
        let mut seen = 0;
        for frame in 0..3000u32 {
            let ids_before: Vec<u32> = world.obstacles.iter().map(|p| p.id).collect();
            tick(&mut world, VP);
            for pair in &world.obstacles {
                if !ids_before.contains(&pair.id) {
                    spawn_frames.push(frame);
                    seen += 1;
                }
            }
            if seen >= 4 {
                break;
            }
        }
        assert!(spawn_frames.len() >= 4);
        for pair in spawn_frames.windows(2) {
            let elapsed = (pair[1] - pair[0]) as f32 * decay_per_tick;
            assert!(elapsed >= world.config.pipe_gap_horizontal);
        }
    }

    #[test]
    fn test_offscreen_pair_retired() {
        let mut world = playing_world();
        let mut pair = ObstaclePair::spawn(99, 0.0, 200.0, 45.0, 80.0, 500.0);
        pair.top = Aabb::new(-78.0, pair.top.top(), 80.0, pair.top.height());
        pair.bottom = Aabb::new(-78.0, pair.bottom.top(), 80.0, pair.bottom.height());
        world.obstacles.push(pair);

        // right edge at 2, one shift of 3 px pushes it past zero
        tick(&mut world, VP);
        assert!(world.obstacles.iter().all(|p| p.id != 99));
    }

    #[test]
    fn test_noop_outside_play() {
        let mut world = GameWorld::new(Config::default(), 42).unwrap();
        tick(&mut world, VP);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.distance_to_next_slot, world.config.first_slot_distance);
    }
}

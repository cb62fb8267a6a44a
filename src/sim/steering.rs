//! Seeker steering
//!
//! The seeker wanders between randomly chosen waypoints, overlays a
//! sinusoidal wiggle, and overrides its target to an obstacle pair's gap
//! midpoint whenever one is horizontally near. Movement is a clamped step
//! toward the effective target, kept inside the viewport.

use rand::Rng;

use super::state::{GamePhase, GameWorld, Viewport};

/// Advance the seeker by one frame. No-op outside Play.
pub fn tick(world: &mut GameWorld, now_ms: u64, viewport: Viewport) {
    if world.phase != GamePhase::Play {
        return;
    }
    let GameWorld {
        seeker,
        obstacles,
        rng,
        config: cfg,
        ..
    } = world;

    seeker.wiggle_phase += cfg.wiggle_rate;
    let wiggle = seeker.wiggle_phase.sin() * cfg.wiggle_amplitude;

    let retarget_due = seeker
        .last_retarget_ms
        .is_none_or(|t| now_ms.saturating_sub(t) >= cfg.retarget_interval_ms);
    if retarget_due {
        let span =
            (viewport.height - seeker.body.height() - 2.0 * cfg.retarget_margin).max(0.0);
        seeker.target_y = rng.random::<f32>() * span + cfg.retarget_margin;
        seeker.last_retarget_ms = Some(now_ms);
    }

    // Dodge scan: the last horizontally-near pair wins
    seeker.dodging = false;
    let mut base_target = seeker.target_y;
    for pair in obstacles.iter() {
        let near = pair.top.left() < seeker.body.right() + cfg.dodge_margin
            && pair.top.right() > seeker.body.left() - cfg.dodge_margin;
        if near {
            seeker.dodging = true;
            base_target = pair.gap_center_y() - seeker.body.height() / 2.0;
        }
    }

    let effective_target = base_target + wiggle;
    let speed = if seeker.dodging {
        cfg.dodge_speed
    } else {
        cfg.cruise_speed
    };
    let delta = effective_target - seeker.body.top();
    let step = delta.abs().min(speed).copysign(delta);
    let new_top = (seeker.body.top() + step)
        .min(viewport.height - seeker.body.height())
        .max(0.0);
    seeker.body.set_top(new_top);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::ObstaclePair;

    const VP: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    /// Play-phase world with the wiggle flattened for exact assertions.
    fn steady_world() -> GameWorld {
        let cfg = Config {
            wiggle_amplitude: 0.0,
            ..Config::default()
        };
        let mut world = GameWorld::new(cfg, 42).unwrap();
        world.activate(0, VP);
        world
    }

    /// A pair whose horizontal span sits right on the seeker.
    fn pair_over_seeker(world: &GameWorld, gap_top: f32) -> ObstaclePair {
        ObstaclePair::spawn(
            1,
            world.seeker.body.left(),
            gap_top,
            world.config.pipe_gap_vertical * VP.height,
            world.config.obstacle_width,
            world.config.obstacle_height * VP.height,
        )
    }

    #[test]
    fn test_dodge_overrides_target_to_gap_midpoint() {
        let mut world = steady_world();
        let pair = pair_over_seeker(&world, 100.0);
        let expected = pair.gap_center_y() - world.seeker.body.height() / 2.0;
        world.obstacles.push(pair);

        tick(&mut world, 0, VP);
        assert!(world.seeker.dodging);

        // converges exactly onto the midpoint once close enough to land
        for frame in 1..60u64 {
            tick(&mut world, frame * 16, VP);
        }
        assert!((world.seeker.body.top() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_last_overlapping_pair_wins() {
        let mut world = steady_world();
        let first = pair_over_seeker(&world, 100.0);
        let mut second = pair_over_seeker(&world, 300.0);
        second.id = 2;
        let expected = second.gap_center_y() - world.seeker.body.height() / 2.0;
        world.obstacles.push(first);
        world.obstacles.push(second);

        for frame in 0..120u64 {
            tick(&mut world, frame * 16, VP);
        }
        assert!((world.seeker.body.top() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_pair_outside_margin_ignored() {
        let mut world = steady_world();
        let mut pair = pair_over_seeker(&world, 100.0);
        let dx = -(world.seeker.body.right() + world.config.dodge_margin + 1.0
            - pair.top.left());
        pair.shift_left(dx);
        world.obstacles.push(pair);

        tick(&mut world, 0, VP);
        assert!(!world.seeker.dodging);
    }

    #[test]
    fn test_retarget_rate_limited() {
        let mut world = steady_world();
        tick(&mut world, 0, VP);
        assert_eq!(world.seeker.last_retarget_ms, Some(0));
        let target = world.seeker.target_y;

        // inside the interval: waypoint untouched
        tick(&mut world, 1499, VP);
        assert_eq!(world.seeker.last_retarget_ms, Some(0));
        assert_eq!(world.seeker.target_y, target);

        tick(&mut world, 1500, VP);
        assert_eq!(world.seeker.last_retarget_ms, Some(1500));
    }

    #[test]
    fn test_waypoints_respect_margins() {
        let mut world = steady_world();
        for frame in 0..200u64 {
            tick(&mut world, frame * 1500, VP);
            let cfg = &world.config;
            assert!(world.seeker.target_y >= cfg.retarget_margin);
            assert!(
                world.seeker.target_y
                    <= VP.height - world.seeker.body.height() - cfg.retarget_margin
            );
        }
    }

    #[test]
    fn test_step_never_overshoots() {
        let mut world = steady_world();
        world.seeker.body.set_top(100.0);
        world.seeker.target_y = 104.0;
        world.seeker.last_retarget_ms = Some(0);

        tick(&mut world, 10, VP);
        assert!((world.seeker.body.top() - 104.0).abs() < 1e-3);
    }

    #[test]
    fn test_position_clamped_to_viewport() {
        let mut world = steady_world();
        world.seeker.body.set_top(VP.height - world.seeker.body.height() - 1.0);
        world.seeker.target_y = VP.height + 500.0;
        world.seeker.last_retarget_ms = Some(0);

        for _ in 0..30 {
            tick(&mut world, 100, VP);
            let top = world.seeker.body.top();
            assert!(top >= 0.0);
            assert!(top <= VP.height - world.seeker.body.height());
        }
    }

    #[test]
    fn test_noop_outside_play() {
        let mut world = GameWorld::new(Config::default(), 42).unwrap();
        let before_top = world.seeker.body.top();
        tick(&mut world, 0, VP);
        assert_eq!(world.seeker.body.top(), before_top);
        assert_eq!(world.seeker.wiggle_phase, 0.0);
    }
}

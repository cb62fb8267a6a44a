//! Per-frame scheduling
//!
//! The host calls [`tick`] once per display-refresh callback. The tick is
//! the explicit scheduler: it reads the phase itself and runs each
//! component in a fixed order, so no component re-schedules itself.

use super::state::{EndCause, GameEvent, GamePhase, GameWorld, Viewport};
use super::{collision, obstacles, physics, steering};

/// Advance the world by one frame.
///
/// Order matters: obstacles move first so collision and scoring observe
/// this frame's positions; flyer physics runs next and its boundary
/// strike ends the run ahead of any pipe contact; then collision,
/// scoring, the wall-clock speed ramp, and seeker steering. No-op unless
/// the world is in Play.
pub fn tick(world: &mut GameWorld, now_ms: u64, viewport: Viewport) {
    if world.phase != GamePhase::Play {
        return;
    }
    world.frame += 1;

    obstacles::tick(world, viewport);

    if let Some(cause) = physics::tick(world, now_ms, viewport) {
        world.end_run(cause);
        return;
    }

    if collision::check(world) {
        world.end_run(EndCause::ObstacleCollision);
        return;
    }

    award_points(world);
    ramp_speed(world, now_ms);
    steering::tick(world, now_ms, viewport);
}

/// Score each unscored pair whose scoring (bottom) box has fully passed
/// the flyer's left edge.
fn award_points(world: &mut GameWorld) {
    let GameWorld {
        flyer,
        obstacles,
        score,
        events,
        ..
    } = world;
    let flyer_left = flyer.body.left();
    for pair in obstacles.iter_mut() {
        if !pair.scored && pair.bottom.right() < flyer_left {
            pair.scored = true;
            *score += 1;
            events.push(GameEvent::Scored { total: *score });
        }
    }
}

/// Apply every speed increment whose wall-clock deadline has passed. The
/// catch-up loop keeps the cadence independent of frame rate.
fn ramp_speed(world: &mut GameWorld, now_ms: u64) {
    let increment = world.config.speed_increment;
    let max_speed = world.config.max_speed;
    let interval = world.config.increment_interval_ms;
    while now_ms >= world.next_ramp_at_ms {
        world.scroll_speed = (world.scroll_speed + increment).min(max_speed);
        world.next_ramp_at_ms += interval;
    }
}

//! Collision detection
//!
//! The flyer's box is inset on all four sides before testing so a
//! near-miss at the sprite's fringe does not end the run. Obstacle boxes
//! are tested at full size.

use super::state::GameWorld;

/// True if the inset flyer box overlaps any live obstacle box. Pure; the
/// caller owns the resulting state transition.
pub fn check(world: &GameWorld) -> bool {
    let probe = world.flyer.body.inset(world.config.collision_inset);
    world
        .obstacles
        .iter()
        .any(|pair| probe.intersects(&pair.top) || probe.intersects(&pair.bottom))
}

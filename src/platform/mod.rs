//! Host abstraction layer
//!
//! The seams between the sim and whatever is hosting it:
//! - `Clock`: monotonic milliseconds
//! - `RenderSurface`: per-entity display updates, pushed once per frame
//!
//! The sim owns every entity's box; the presentation layer is never
//! queried for geometry.

use std::time::Instant;

use crate::sim::{Aabb, GamePhase, GameWorld};

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction.
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock for tests and fixed-step headless runs.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

/// Stable identity of a displayed entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityId {
    Flyer,
    Seeker,
    ObstacleTop(u32),
    ObstacleBottom(u32),
}

/// Displayed state of one entity for this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityVisual {
    pub body: Aabb,
    pub rotation_deg: f32,
    pub visible: bool,
}

/// Receives per-entity display updates once per frame.
pub trait RenderSurface {
    fn update_entity(&mut self, id: EntityId, visual: &EntityVisual);
}

/// Push every entity's current box to the surface.
///
/// The flyer is hidden outside Play; the seeker stays on screen once a
/// run has started.
pub fn present<S: RenderSurface>(world: &GameWorld, surface: &mut S) {
    surface.update_entity(
        EntityId::Flyer,
        &EntityVisual {
            body: world.flyer.body,
            rotation_deg: world.flyer.tilt_deg,
            visible: world.phase == GamePhase::Play,
        },
    );
    surface.update_entity(
        EntityId::Seeker,
        &EntityVisual {
            body: world.seeker.body,
            rotation_deg: 0.0,
            visible: world.phase != GamePhase::Start,
        },
    );
    for pair in &world.obstacles {
        surface.update_entity(
            EntityId::ObstacleTop(pair.id),
            &EntityVisual {
                body: pair.top,
                rotation_deg: 0.0,
                visible: true,
            },
        );
        surface.update_entity(
            EntityId::ObstacleBottom(pair.id),
            &EntityVisual {
                body: pair.bottom,
                rotation_deg: 0.0,
                visible: true,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{self, InputEvent, Viewport};

    const VP: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    #[derive(Default)]
    struct RecordingSurface {
        updates: Vec<(EntityId, EntityVisual)>,
    }

    impl RenderSurface for RecordingSurface {
        fn update_entity(&mut self, id: EntityId, visual: &EntityVisual) {
            self.updates.push((id, *visual));
        }
    }

    #[test]
    fn test_manual_clock_advances() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);
        clock.advance(16);
        clock.advance(16);
        assert_eq!(clock.now_ms(), 32);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_present_pushes_every_entity() {
        let mut world = GameWorld::new(Config::default(), 7).unwrap();
        world.apply_input(InputEvent::Activate, 0, VP);
        for frame in 1..=40u64 {
            sim::tick(&mut world, frame * 16, VP);
        }
        assert!(!world.obstacles.is_empty());

        let mut surface = RecordingSurface::default();
        present(&world, &mut surface);
        assert_eq!(surface.updates.len(), 2 + 2 * world.obstacles.len());

        let (id, flyer) = surface.updates[0];
        assert_eq!(id, EntityId::Flyer);
        assert_eq!(flyer.body, world.flyer.body);
        assert_eq!(flyer.rotation_deg, world.flyer.tilt_deg);
    }

    #[test]
    fn test_flyer_hidden_outside_play() {
        let world = GameWorld::new(Config::default(), 7).unwrap();
        let mut surface = RecordingSurface::default();
        present(&world, &mut surface);
        let (_, flyer) = surface.updates[0];
        assert!(!flyer.visible);
        let (_, seeker) = surface.updates[1];
        assert!(!seeker.visible);
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Per-frame integration driven by the host's refresh callback
//! - Seeded RNG only
//! - Stable iteration order (spawn order = left-to-right)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod rect;
pub mod state;
pub mod steering;
pub mod tick;

pub use rect::Aabb;
pub use state::{
    EndCause, Flyer, GameEvent, GamePhase, GameWorld, InputEvent, ObstaclePair, Seeker, Viewport,
};
pub use tick::tick;

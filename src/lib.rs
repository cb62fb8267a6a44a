//! Gapwing - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, steering, scoring)
//! - `platform`: Host abstraction (clock, render surface)
//! - `audio`: Audio cue interface
//! - `config`: Data-driven game tunables

pub mod audio;
pub mod config;
pub mod platform;
pub mod sim;

pub use audio::{AudioCue, CuePlayer, NullCuePlayer};
pub use config::{Config, ConfigError};

/// Game configuration constants
pub mod consts {
    /// Initial scroll speed (px per frame)
    pub const MOVE_SPEED: f32 = 3.0;
    /// Scroll speed cap
    pub const MAX_SPEED: f32 = 12.0;
    /// Speed added per ramp interval
    pub const SPEED_INCREMENT: f32 = 0.5;
    /// Wall-clock interval between speed increments
    pub const INCREMENT_INTERVAL_MS: u64 = 4000;

    /// Vertical gap between the boxes of a pair, fraction of viewport height
    pub const PIPE_GAP_VERTICAL: f32 = 0.45;
    /// Minimum horizontal distance between spawns, percent of viewport width
    pub const PIPE_GAP_HORIZONTAL: f32 = 35.0;
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Obstacle box height, fraction of viewport height
    pub const OBSTACLE_HEIGHT: f32 = 0.70;
    /// Band the gap-top offset is drawn from, fractions of viewport height
    pub const SPAWN_BAND_MIN: f32 = 0.08;
    pub const SPAWN_BAND_MAX: f32 = 0.51;
    /// Spacing tracker value on reset, comfortably above the spawn
    /// threshold so only the empty-list rule triggers the first pair
    pub const FIRST_SLOT_DISTANCE: f32 = 120.0;
    /// Spacing tracker value right after a spawn (100% of viewport width)
    pub const SLOT_FULL_DISTANCE: f32 = 100.0;

    /// Flyer gravity (added to vertical velocity each frame)
    pub const GRAVITY: f32 = 1.5;
    /// Impulse velocity; negative is upward
    pub const FLAP_STRENGTH: f32 = -3.0;
    /// Weakened gravity inside the hover window
    pub const HOVER_GRAVITY: f32 = 0.1;
    /// Hover window length after an impulse
    pub const HOVER_TIME_MS: u64 = 90;

    /// Seeker step per frame while dodging an obstacle pair
    pub const DODGE_SPEED: f32 = 18.0;
    /// Seeker step per frame while wandering
    pub const CRUISE_SPEED: f32 = 8.0;
    pub const WIGGLE_AMPLITUDE: f32 = 10.0;
    /// Wiggle phase advance per frame (radians)
    pub const WIGGLE_RATE: f32 = 0.15;
    /// Minimum wall-clock time between wander retargets
    pub const RETARGET_INTERVAL_MS: u64 = 1500;
    /// Vertical margin kept from both viewport edges when retargeting
    pub const RETARGET_MARGIN: f32 = 30.0;
    /// Horizontal margin around the seeker for the dodge scan
    pub const DODGE_MARGIN: f32 = 30.0;

    /// Inward inset applied to the flyer box before collision testing
    pub const COLLISION_INSET: f32 = 10.0;

    /// Entity footprints (px) and reset positions (fractions of viewport)
    pub const FLYER_WIDTH: f32 = 50.0;
    pub const FLYER_HEIGHT: f32 = 40.0;
    pub const FLYER_X: f32 = 0.30;
    pub const FLYER_START_Y: f32 = 0.25;
    pub const SEEKER_WIDTH: f32 = 30.0;
    pub const SEEKER_HEIGHT: f32 = 30.0;
    pub const SEEKER_X: f32 = 0.20;
    pub const SEEKER_START_Y: f32 = 0.40;

    /// Visual tilt while ascending (degrees)
    pub const TILT_ASCEND_DEG: f32 = -10.0;
    /// Visual tilt cap while descending
    pub const TILT_MAX_DEG: f32 = 60.0;
}

//! Game tunables
//!
//! Every knob the sim reads lives here. A `Config` is built once, validated
//! at world construction, then treated as read-only for the session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts;

/// All externally settable tunables.
///
/// Lengths are px unless noted; fields documented as fractions are relative
/// to the live viewport, so a resize affects future spawns only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Scroll speed ramp
    /// Initial scroll speed, px per frame
    pub move_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub increment_interval_ms: u64,

    // Obstacles
    /// Vertical gap between the boxes of a pair, fraction of viewport height
    pub pipe_gap_vertical: f32,
    /// Minimum horizontal spacing between spawns, percent of viewport width
    pub pipe_gap_horizontal: f32,
    pub obstacle_width: f32,
    /// Obstacle box height, fraction of viewport height
    pub obstacle_height: f32,
    /// Band the gap-top offset is drawn from, fractions of viewport height
    pub spawn_band_min: f32,
    pub spawn_band_max: f32,
    /// Spacing tracker value on reset
    pub first_slot_distance: f32,

    // Flyer physics
    pub gravity: f32,
    /// Impulse velocity; must be negative (upward)
    pub flap_strength: f32,
    pub hover_gravity: f32,
    pub hover_time_ms: u64,
    pub flyer_width: f32,
    pub flyer_height: f32,
    /// Fixed horizontal position, fraction of viewport width
    pub flyer_x: f32,
    /// Reset position, fraction of viewport height
    pub flyer_start_y: f32,

    // Seeker steering
    pub dodge_speed: f32,
    pub cruise_speed: f32,
    pub wiggle_amplitude: f32,
    /// Wiggle phase advance per frame, radians
    pub wiggle_rate: f32,
    pub retarget_interval_ms: u64,
    /// Vertical margin kept from both viewport edges when retargeting
    pub retarget_margin: f32,
    /// Horizontal margin around the seeker for the dodge scan
    pub dodge_margin: f32,
    pub seeker_width: f32,
    pub seeker_height: f32,
    pub seeker_x: f32,
    pub seeker_start_y: f32,

    // Collision
    /// Inward inset applied to the flyer box before testing
    pub collision_inset: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            move_speed: consts::MOVE_SPEED,
            max_speed: consts::MAX_SPEED,
            speed_increment: consts::SPEED_INCREMENT,
            increment_interval_ms: consts::INCREMENT_INTERVAL_MS,

            pipe_gap_vertical: consts::PIPE_GAP_VERTICAL,
            pipe_gap_horizontal: consts::PIPE_GAP_HORIZONTAL,
            obstacle_width: consts::OBSTACLE_WIDTH,
            obstacle_height: consts::OBSTACLE_HEIGHT,
            spawn_band_min: consts::SPAWN_BAND_MIN,
            spawn_band_max: consts::SPAWN_BAND_MAX,
            first_slot_distance: consts::FIRST_SLOT_DISTANCE,

            gravity: consts::GRAVITY,
            flap_strength: consts::FLAP_STRENGTH,
            hover_gravity: consts::HOVER_GRAVITY,
            hover_time_ms: consts::HOVER_TIME_MS,
            flyer_width: consts::FLYER_WIDTH,
            flyer_height: consts::FLYER_HEIGHT,
            flyer_x: consts::FLYER_X,
            flyer_start_y: consts::FLYER_START_Y,

            dodge_speed: consts::DODGE_SPEED,
            cruise_speed: consts::CRUISE_SPEED,
            wiggle_amplitude: consts::WIGGLE_AMPLITUDE,
            wiggle_rate: consts::WIGGLE_RATE,
            retarget_interval_ms: consts::RETARGET_INTERVAL_MS,
            retarget_margin: consts::RETARGET_MARGIN,
            dodge_margin: consts::DODGE_MARGIN,
            seeker_width: consts::SEEKER_WIDTH,
            seeker_height: consts::SEEKER_HEIGHT,
            seeker_x: consts::SEEKER_X,
            seeker_start_y: consts::SEEKER_START_Y,

            collision_inset: consts::COLLISION_INSET,
        }
    }
}

/// A configuration the sim refuses to run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Named field must be strictly positive
    NonPositive(&'static str),
    /// Named field is outside its valid range
    OutOfRange(&'static str),
    /// `max_speed` is below the initial `move_speed`
    SpeedCapBelowInitial,
    /// `pipe_gap_vertical` leaves no passable course
    GapUnpassable,
    /// `flap_strength` must be negative (upward)
    ImpulseNotUpward,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(name) => write!(f, "{name} must be positive"),
            ConfigError::OutOfRange(name) => write!(f, "{name} is out of range"),
            ConfigError::SpeedCapBelowInitial => {
                write!(f, "max_speed must be at least move_speed")
            }
            ConfigError::GapUnpassable => {
                write!(f, "pipe_gap_vertical must be a fraction in (0, 1)")
            }
            ConfigError::ImpulseNotUpward => {
                write!(f, "flap_strength must be negative (upward)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reject configurations the sim cannot run sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(value: f32, name: &'static str) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::NonPositive(name))
            }
        }
        fn fraction(value: f32, name: &'static str) -> Result<(), ConfigError> {
            if (0.0..1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange(name))
            }
        }

        positive(self.move_speed, "move_speed")?;
        if self.speed_increment < 0.0 || !self.speed_increment.is_finite() {
            return Err(ConfigError::OutOfRange("speed_increment"));
        }
        if self.max_speed < self.move_speed {
            return Err(ConfigError::SpeedCapBelowInitial);
        }
        if self.increment_interval_ms == 0 {
            return Err(ConfigError::NonPositive("increment_interval_ms"));
        }

        if self.pipe_gap_vertical <= 0.0 || self.pipe_gap_vertical >= 1.0 {
            return Err(ConfigError::GapUnpassable);
        }
        if self.pipe_gap_horizontal <= 0.0 || self.pipe_gap_horizontal >= 100.0 {
            return Err(ConfigError::OutOfRange("pipe_gap_horizontal"));
        }
        positive(self.obstacle_width, "obstacle_width")?;
        if self.obstacle_height <= 0.0 || self.obstacle_height > 1.0 {
            return Err(ConfigError::OutOfRange("obstacle_height"));
        }
        fraction(self.spawn_band_min, "spawn_band_min")?;
        fraction(self.spawn_band_max, "spawn_band_max")?;
        if self.spawn_band_min >= self.spawn_band_max {
            return Err(ConfigError::OutOfRange("spawn_band_min"));
        }
        positive(self.first_slot_distance, "first_slot_distance")?;

        if self.gravity < 0.0 || !self.gravity.is_finite() {
            return Err(ConfigError::OutOfRange("gravity"));
        }
        if self.hover_gravity < 0.0 || !self.hover_gravity.is_finite() {
            return Err(ConfigError::OutOfRange("hover_gravity"));
        }
        if self.flap_strength >= 0.0 {
            return Err(ConfigError::ImpulseNotUpward);
        }
        positive(self.flyer_width, "flyer_width")?;
        positive(self.flyer_height, "flyer_height")?;
        fraction(self.flyer_x, "flyer_x")?;
        fraction(self.flyer_start_y, "flyer_start_y")?;

        positive(self.dodge_speed, "dodge_speed")?;
        positive(self.cruise_speed, "cruise_speed")?;
        if self.wiggle_amplitude < 0.0 {
            return Err(ConfigError::OutOfRange("wiggle_amplitude"));
        }
        if self.wiggle_rate < 0.0 {
            return Err(ConfigError::OutOfRange("wiggle_rate"));
        }
        if self.retarget_margin < 0.0 {
            return Err(ConfigError::OutOfRange("retarget_margin"));
        }
        if self.dodge_margin < 0.0 {
            return Err(ConfigError::OutOfRange("dodge_margin"));
        }
        positive(self.seeker_width, "seeker_width")?;
        positive(self.seeker_height, "seeker_height")?;
        fraction(self.seeker_x, "seeker_x")?;
        fraction(self.seeker_start_y, "seeker_start_y")?;

        if self.collision_inset < 0.0 {
            return Err(ConfigError::OutOfRange("collision_inset"));
        }

        Ok(())
    }
}

//! World state and entity types
//!
//! One `GameWorld` aggregate owns everything the per-frame components
//! mutate; there is no hidden shared state anywhere else.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Aabb;
use crate::config::{Config, ConfigError};

/// Playable area dimensions, supplied by the host each frame.
/// May change between frames (resize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first activation
    Start,
    /// Active gameplay
    Play,
    /// Run ended; waiting for reactivation
    End,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndCause {
    CeilingStrike,
    FloorStrike,
    ObstacleCollision,
}

/// Events queued during a tick for the host to drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle pair was passed; `total` is the score after the increment.
    Scored { total: u32 },
    /// The run ended.
    Ended(EndCause),
}

/// Input events delivered by the host, asynchronously to the tick cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Impulse control pressed
    ImpulseDown,
    /// Impulse control released (sprite state only)
    ImpulseUp,
    /// Start or restart a run
    Activate,
}

/// The player-controlled entity.
#[derive(Debug, Clone)]
pub struct Flyer {
    pub body: Aabb,
    /// Signed vertical velocity, px per frame; negative is upward.
    pub velocity_y: f32,
    /// Timestamp of the last upward impulse this run, if any.
    pub last_impulse_ms: Option<u64>,
    /// Visual tilt for the render collaborator; not read by the sim.
    pub tilt_deg: f32,
    /// Whether the impulse control is held (sprite state only).
    pub impulse_held: bool,
}

/// The autonomous, non-collidable entity.
#[derive(Debug, Clone)]
pub struct Seeker {
    pub body: Aabb,
    /// Wander waypoint the seeker drifts toward between dodges.
    pub target_y: f32,
    /// Monotonically advancing sinusoid phase.
    pub wiggle_phase: f32,
    pub last_retarget_ms: Option<u64>,
    /// Set while an obstacle pair overlaps the seeker's expanded span.
    pub dodging: bool,
}

/// Two boxes scrolling leftward together, separated by a fixed vertical gap.
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    pub id: u32,
    pub top: Aabb,
    pub bottom: Aabb,
    /// Flips false→true exactly once, when the pair is passed.
    pub scored: bool,
}

impl ObstaclePair {
    /// Build a pair at horizontal position `x`. `gap_top` is where the top
    /// box ends; the bottom box starts `gap` px below it. The gap stays
    /// constant for the pair's lifetime since pairs only move horizontally.
    pub fn spawn(id: u32, x: f32, gap_top: f32, gap: f32, width: f32, box_height: f32) -> Self {
        Self {
            id,
            top: Aabb::new(x, gap_top - box_height, width, box_height),
            bottom: Aabb::new(x, gap_top + gap, width, box_height),
            scored: false,
        }
    }

    pub fn shift_left(&mut self, dx: f32) {
        self.top.offset_x(-dx);
        self.bottom.offset_x(-dx);
    }

    /// Shared right edge of both boxes.
    pub fn right(&self) -> f32 {
        self.top.right()
    }

    /// Vertical midpoint of the gap between the boxes.
    pub fn gap_center_y(&self) -> f32 {
        self.top.bottom() + (self.bottom.top() - self.top.bottom()) / 2.0
    }

    /// Fully exited on the left.
    pub fn offscreen_left(&self) -> bool {
        self.right() < 0.0
    }
}

/// Complete world state. Mutated serially by input application and the
/// per-frame tick; never shared across threads.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub config: Config,
    /// Run seed, kept for reporting.
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub flyer: Flyer,
    pub seeker: Seeker,
    /// Spawn order, which is also left-to-right spatial order.
    pub obstacles: Vec<ObstaclePair>,
    /// Current scroll speed, px per frame.
    pub scroll_speed: f32,
    /// Percent of viewport width remaining before the next pair may spawn.
    pub distance_to_next_slot: f32,
    /// Wall-clock deadline for the next speed increment while in Play.
    pub next_ramp_at_ms: u64,
    /// Frames ticked since construction.
    pub frame: u64,
    pub rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl GameWorld {
    /// Create a world in the `Start` phase. Entities are positioned on the
    /// first activation, once a viewport is known.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let flyer = Flyer {
            body: Aabb::new(0.0, 0.0, config.flyer_width, config.flyer_height),
            velocity_y: 0.0,
            last_impulse_ms: None,
            tilt_deg: 0.0,
            impulse_held: false,
        };
        let seeker = Seeker {
            body: Aabb::new(0.0, 0.0, config.seeker_width, config.seeker_height),
            target_y: 0.0,
            wiggle_phase: 0.0,
            last_retarget_ms: None,
            dodging: false,
        };
        Ok(Self {
            scroll_speed: config.move_speed,
            distance_to_next_slot: config.first_slot_distance,
            config,
            seed,
            phase: GamePhase::Start,
            score: 0,
            flyer,
            seeker,
            obstacles: Vec::new(),
            next_ramp_at_ms: 0,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a stable entity id.
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a host input event. Play-only operations are guarded no-ops
    /// in other phases.
    pub fn apply_input(&mut self, event: InputEvent, now_ms: u64, viewport: Viewport) {
        match event {
            InputEvent::ImpulseDown => self.flap(now_ms),
            InputEvent::ImpulseUp => {
                if self.phase == GamePhase::Play {
                    self.flyer.impulse_held = false;
                }
            }
            InputEvent::Activate => self.activate(now_ms, viewport),
        }
    }

    /// Kick the flyer upward. No-op outside Play.
    pub fn flap(&mut self, now_ms: u64) {
        if self.phase != GamePhase::Play {
            return;
        }
        self.flyer.velocity_y = self.config.flap_strength;
        self.flyer.last_impulse_ms = Some(now_ms);
        self.flyer.impulse_held = true;
    }

    /// Enter Play from Start or End, resetting the whole run. No-op while
    /// already in Play.
    pub fn activate(&mut self, now_ms: u64, viewport: Viewport) {
        if self.phase == GamePhase::Play {
            return;
        }
        let cfg = &self.config;

        self.flyer.body = Aabb::new(
            cfg.flyer_x * viewport.width,
            (cfg.flyer_start_y * viewport.height).floor(),
            cfg.flyer_width,
            cfg.flyer_height,
        );
        self.flyer.velocity_y = 0.0;
        self.flyer.last_impulse_ms = None;
        self.flyer.tilt_deg = 0.0;
        self.flyer.impulse_held = false;

        self.seeker.body = Aabb::new(
            cfg.seeker_x * viewport.width,
            cfg.seeker_start_y * viewport.height,
            cfg.seeker_width,
            cfg.seeker_height,
        );
        self.seeker.target_y = cfg.seeker_start_y * viewport.height;
        self.seeker.wiggle_phase = 0.0;
        self.seeker.last_retarget_ms = None;
        self.seeker.dodging = false;

        self.obstacles.clear();
        self.score = 0;
        self.scroll_speed = cfg.move_speed;
        self.distance_to_next_slot = cfg.first_slot_distance;
        self.next_ramp_at_ms = now_ms + cfg.increment_interval_ms;
        self.events.clear();
        self.phase = GamePhase::Play;

        log::info!("run started (seed {})", self.seed);
    }

    /// Transition Play → End and queue the terminal event.
    pub(crate) fn end_run(&mut self, cause: EndCause) {
        if self.phase != GamePhase::Play {
            return;
        }
        self.phase = GamePhase::End;
        self.events.push(GameEvent::Ended(cause));
        log::info!("run over: {:?} after {} points", cause, self.score);
    }
}

//! Gapwing headless demo
//!
//! Drives the sim without a screen: an autopilot flaps the flyer through
//! the obstacle field on a fixed-step clock until the run ends. Pass a
//! JSON config file path to override the default tunables.

use gapwing::audio::{AudioCue, CuePlayer, NullCuePlayer};
use gapwing::config::Config;
use gapwing::platform::{Clock, EntityId, EntityVisual, ManualClock, RenderSurface, present};
use gapwing::sim::{self, GamePhase, GameWorld, InputEvent, Viewport};

/// Discards display updates; the demo has no screen.
struct HeadlessSurface;

impl RenderSurface for HeadlessSurface {
    fn update_entity(&mut self, _id: EntityId, _visual: &EntityVisual) {}
}

const FRAME_MS: u64 = 16;
const MAX_FRAMES: u64 = 20_000;
const DEMO_SEED: u64 = 0xC0FFEE;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path),
        None => Config::default(),
    };

    let viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };
    let mut world = match GameWorld::new(config, DEMO_SEED) {
        Ok(world) => world,
        Err(err) => {
            log::error!("invalid config: {err}");
            std::process::exit(1);
        }
    };

    let mut clock = ManualClock::new();
    let mut surface = HeadlessSurface;
    let mut cues = NullCuePlayer;

    world.apply_input(InputEvent::Activate, clock.now_ms(), viewport);

    for _ in 0..MAX_FRAMES {
        clock.advance(FRAME_MS);
        let now = clock.now_ms();

        if autopilot_wants_flap(&world, viewport) {
            world.apply_input(InputEvent::ImpulseDown, now, viewport);
            world.apply_input(InputEvent::ImpulseUp, now, viewport);
        }

        sim::tick(&mut world, now, viewport);

        for event in world.drain_events() {
            log::info!("event: {event:?}");
            if let Some(cue) = AudioCue::from_event(event) {
                cues.play(cue);
            }
        }
        present(&world, &mut surface);

        if world.phase == GamePhase::End {
            break;
        }
    }

    println!(
        "score: {} ({} frames, final speed {:.1})",
        world.score, world.frame, world.scroll_speed
    );
}

/// Flap when sinking below the next gap's center line.
fn autopilot_wants_flap(world: &GameWorld, viewport: Viewport) -> bool {
    let flyer = &world.flyer;
    let target = world
        .obstacles
        .iter()
        .find(|pair| pair.right() > flyer.body.left())
        .map(|pair| pair.gap_center_y())
        .unwrap_or(viewport.height * 0.45);
    flyer.velocity_y >= 0.0 && flyer.body.bottom() > target
}

fn load_config(path: &str) -> Config {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            log::error!("cannot read config {path}: {err}");
            std::process::exit(1);
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(err) => {
            log::error!("cannot parse config {path}: {err}");
            std::process::exit(1);
        }
    }
}

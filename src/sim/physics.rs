//! Flyer physics
//!
//! Per-frame gravity integration with a short hover window after each
//! impulse, plus the viewport boundary policy: striking the ceiling or
//! the floor clamps the flyer and ends the run.

use super::state::{EndCause, GamePhase, GameWorld, Viewport};
use crate::consts::{TILT_ASCEND_DEG, TILT_MAX_DEG};

/// Integrate one frame of flyer motion. Returns the terminal condition if
/// the flyer struck a viewport boundary. No-op outside Play.
pub fn tick(world: &mut GameWorld, now_ms: u64, viewport: Viewport) -> Option<EndCause> {
    if world.phase != GamePhase::Play {
        return None;
    }
    let cfg = &world.config;
    let flyer = &mut world.flyer;

    let hovering = flyer
        .last_impulse_ms
        .is_some_and(|t| now_ms.saturating_sub(t) < cfg.hover_time_ms);
    let g = if hovering { cfg.hover_gravity } else { cfg.gravity };

    flyer.velocity_y += g;
    flyer.body.pos.y += flyer.velocity_y;

    // Tilt is presentation state only
    flyer.tilt_deg = if flyer.velocity_y < 0.0 {
        TILT_ASCEND_DEG
    } else {
        (flyer.velocity_y * 2.0).min(TILT_MAX_DEG)
    };

    if flyer.body.top() <= 0.0 {
        flyer.body.set_top(0.0);
        return Some(EndCause::CeilingStrike);
    }
    if flyer.body.bottom() >= viewport.height {
        flyer.body.set_top(viewport.height - flyer.body.height());
        return Some(EndCause::FloorStrike);
    }
    None
}

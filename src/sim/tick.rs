//! Fixed timestep simulation tick
//!
//! One logical tick: edge events, physics integration, horizontal probe and
//! movement gating, held-fire shooting, vertical resolution, the projectile
//! pass, then the hostile filter. Pacing and drawing live with the caller.

use super::collision::{probe_horizontal, resolve_vertical};
use super::combat::{attempt_shoot, resolve_projectiles};
use super::state::World;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held movement keys
    pub left: bool,
    pub right: bool,
    /// Held fire button
    pub fire: bool,
    /// Edge-triggered jump request; honored only below the jump cap
    pub jump: bool,
}

/// Advance the world by one fixed timestep
pub fn tick(world: &mut World, input: &TickInput) {
    world.time_ticks += 1;

    if input.jump {
        world.actor.jump();
    }

    // Physics applies the velocity decided by last tick's movement pass
    world.actor.integrate();

    // Horizontal: probe both directions, then set velocity only where unblocked
    world.actor.vel.x = 0.0;
    let probe = probe_horizontal(
        &world.actor,
        &world.terrain,
        &world.platforms,
        &world.hostiles,
    );
    if input.left && !probe.left_blocked {
        world.actor.run_left();
    }
    if input.right && !probe.right_blocked {
        world.actor.run_right();
    }

    if input.fire {
        attempt_shoot(&mut world.actor);
    }

    resolve_vertical(
        &mut world.actor,
        &world.terrain,
        &world.platforms,
        &world.hostiles,
    );

    resolve_projectiles(
        &mut world.actor,
        &world.terrain,
        &world.platforms,
        &mut world.hostiles,
    );

    // Value-removal happens here, after the full pass, never mid-iteration
    world.hostiles.retain(|h| h.is_alive());
}

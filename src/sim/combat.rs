//! Combat: shot spawning and projectile-vs-world resolution
//!
//! Projectiles resolve in strict tier order with early exit: off-screen,
//! platforms, terrain, then live hostiles. A projectile resolves against at
//! most one entity per tick. The projectile collection is rebuilt by the pass
//! itself; dead hostiles stay in place until the loop's filter step so an
//! in-progress pass never observes a shrinking collection.

use glam::Vec2;

use super::entity::{Actor, Facing, Hostile, Projectile, StaticBody};
use crate::consts::*;

/// Spawn a projectile at the actor's leading edge if the cooldown allows it.
/// Returns whether a shot spawned.
pub fn attempt_shoot(actor: &mut Actor) -> bool {
    if actor.cooldown > 0 {
        return false;
    }
    let x = match actor.facing {
        Facing::Left => actor.body.left() - MUZZLE_OFFSET,
        Facing::Right => actor.body.right(),
    };
    let pos = Vec2::new(x, actor.body.center_y());
    actor.projectiles.push(Projectile::new(pos, actor.facing));
    actor.cooldown = BULLET_COOLDOWN;
    true
}

/// Resolve every live projectile against the world, once per tick
pub fn resolve_projectiles(
    actor: &mut Actor,
    terrain: &[StaticBody],
    platforms: &[StaticBody],
    hostiles: &mut [Hostile],
) {
    actor.projectiles.retain(|p| {
        // Fully past either horizontal screen bound
        if p.body.right() < 0.0 || p.body.left() > SCREEN_WIDTH {
            return false;
        }
        // Tier 1: platforms
        if platforms.iter().any(|s| p.body.overlaps(&s.body)) {
            return false;
        }
        // Tier 2: terrain
        if terrain.iter().any(|s| p.body.overlaps(&s.body)) {
            return false;
        }
        // Tier 3: first live hostile hit takes the damage
        for hostile in hostiles.iter_mut() {
            if hostile.is_alive() && p.body.overlaps(&hostile.body) {
                hostile.hp -= BULLET_DAMAGE;
                if hostile.hp <= 0 {
                    log::debug!("hostile `{}` destroyed", hostile.name);
                }
                return false;
            }
        }
        true
    });
}

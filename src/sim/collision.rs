//! Axis-separated collision resolution against world geometry
//!
//! Horizontal: a speculative move-test-revert probe per direction. The actor
//! is displaced by a fixed lookahead, tested against every collidable, and the
//! displacement reverted; movement is later applied only in directions that
//! did not probe blocked. The lookahead is coarse and can tunnel through thin
//! geometry at high relative velocity; that limitation is intentional.
//!
//! Vertical: after integration, three passes in fixed order (terrain, then
//! platforms, then live hostiles). Within a pass the first overlapping entity
//! resolves, not the closest one; encounter order keeps resolution
//! deterministic.

use glam::Vec2;

use super::entity::{Actor, Body, Hostile, StaticBody};
use crate::consts::PROBE_DISTANCE;

/// Blocked-direction summary from the horizontal lookahead probes
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalProbe {
    pub left_blocked: bool,
    pub right_blocked: bool,
}

/// Probe both horizontal directions at the fixed lookahead distance
pub fn probe_horizontal(
    actor: &Actor,
    terrain: &[StaticBody],
    platforms: &[StaticBody],
    hostiles: &[Hostile],
) -> HorizontalProbe {
    HorizontalProbe {
        left_blocked: probe(actor, -PROBE_DISTANCE, terrain, platforms, hostiles),
        right_blocked: probe(actor, PROBE_DISTANCE, terrain, platforms, hostiles),
    }
}

fn probe(
    actor: &Actor,
    dx: f32,
    terrain: &[StaticBody],
    platforms: &[StaticBody],
    hostiles: &[Hostile],
) -> bool {
    let offset = Vec2::new(dx, 0.0);
    terrain
        .iter()
        .any(|s| actor.body.overlaps_displaced(offset, &s.body))
        || platforms
            .iter()
            .any(|s| actor.body.overlaps_displaced(offset, &s.body))
        || hostiles
            .iter()
            .filter(|h| h.is_alive())
            .any(|h| actor.body.overlaps_displaced(offset, &h.body))
}

/// Resolve the actor's vertical intent against the three world collections
pub fn resolve_vertical(
    actor: &mut Actor,
    terrain: &[StaticBody],
    platforms: &[StaticBody],
    hostiles: &[Hostile],
) {
    resolve_pass(actor, terrain.iter().map(|s| &s.body));
    resolve_pass(actor, platforms.iter().map(|s| &s.body));
    resolve_pass(
        actor,
        hostiles.iter().filter(|h| h.is_alive()).map(|h| &h.body),
    );
}

fn resolve_pass<'a>(actor: &mut Actor, bodies: impl Iterator<Item = &'a Body>) {
    for body in bodies {
        if actor.body.overlaps(body) {
            if actor.vel.y > 0.0 {
                // Falling: snap bottom edge to the collided entity's top edge
                actor.body.pos.y = body.top() - actor.body.height();
                actor.landed();
            } else if actor.vel.y < 0.0 {
                // Rising: snap top edge to the collided entity's bottom edge
                actor.body.pos.y = body.bottom();
                actor.hit_head();
            }
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ACTOR_SIZE, BLOCK_SIZE};
    use crate::sim::mask::PixelMask;

    fn block(x: f32, y: f32) -> StaticBody {
        StaticBody::new(Vec2::new(x, y), PixelMask::solid(BLOCK_SIZE, BLOCK_SIZE))
    }

    #[test]
    fn test_probe_reports_blocked_directions() {
        // Block 5px to the actor's right: inside the 10px lookahead
        let actor = Actor::new(Vec2::new(100.0, 100.0));
        let wall = block(100.0 + ACTOR_SIZE as f32 + 5.0, 80.0);
        let probe = probe_horizontal(&actor, &[], &[wall], &[]);
        assert!(probe.right_blocked);
        assert!(!probe.left_blocked);
    }

    #[test]
    fn test_probe_does_not_move_the_actor() {
        let actor = Actor::new(Vec2::new(100.0, 100.0));
        let wall = block(100.0 + ACTOR_SIZE as f32 + 5.0, 80.0);
        probe_horizontal(&actor, &[], &[wall], &[]);
        assert_eq!(actor.body.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_probe_misses_beyond_lookahead() {
        let actor = Actor::new(Vec2::new(100.0, 100.0));
        let wall = block(100.0 + ACTOR_SIZE as f32 + 20.0, 80.0);
        let probe = probe_horizontal(&actor, &[], &[wall], &[]);
        assert!(!probe.right_blocked);
    }

    #[test]
    fn test_probe_ignores_dead_hostiles() {
        let actor = Actor::new(Vec2::new(100.0, 100.0));
        let mut hostile = Hostile::new(Vec2::new(100.0 + ACTOR_SIZE as f32 + 5.0, 100.0), "demon");
        assert!(
            probe_horizontal(&actor, &[], &[], &[hostile.clone()])
                .right_blocked
        );
        hostile.hp = 0;
        assert!(!probe_horizontal(&actor, &[], &[], &[hostile]).right_blocked);
    }

    #[test]
    fn test_falling_actor_lands_on_block_top() {
        let ground = block(80.0, 140.0);
        let mut actor = Actor::new(Vec2::new(100.0, 100.0));
        actor.vel.y = 8.0;
        actor.jump_count = 1;
        // Overlapping after this tick's integration
        actor.body.pos.y = 95.0;
        resolve_vertical(&mut actor, &[ground.clone()], &[], &[]);
        assert_eq!(actor.body.bottom(), ground.body.top());
        assert_eq!(actor.vel.y, 0.0);
        assert_eq!(actor.jump_count, 0);
        assert_eq!(actor.fall_ticks, 0);
    }

    #[test]
    fn test_rising_actor_snaps_to_block_bottom() {
        // Scenario: rising actor overlapping a static entity has its top edge
        // snapped to that entity's bottom edge and vertical speed sign flipped
        let ceiling = block(80.0, 100.0);
        let mut actor = Actor::new(Vec2::new(100.0, 190.0));
        actor.vel.y = -6.0;
        resolve_vertical(&mut actor, &[ceiling.clone()], &[], &[]);
        assert_eq!(actor.body.top(), ceiling.body.bottom());
        assert_eq!(actor.vel.y, 6.0);
    }

    #[test]
    fn test_first_entity_in_collection_wins() {
        // Two overlapping blocks at different heights: encounter order decides
        let first = block(80.0, 140.0);
        let second = block(80.0, 130.0);
        let mut actor = Actor::new(Vec2::new(100.0, 95.0));
        actor.vel.y = 8.0;
        resolve_vertical(&mut actor, &[first.clone(), second], &[], &[]);
        assert_eq!(actor.body.bottom(), first.body.top());
    }

    #[test]
    fn test_terrain_resolves_before_platforms() {
        let terrain = block(80.0, 140.0);
        let platform = block(80.0, 120.0);
        let mut actor = Actor::new(Vec2::new(100.0, 95.0));
        actor.vel.y = 8.0;
        resolve_vertical(&mut actor, &[terrain.clone()], &[platform], &[]);
        // Snapped onto the terrain block; after landing vel.y is 0 so the
        // platform pass does not re-resolve
        assert_eq!(actor.body.bottom(), terrain.body.top());
    }

    #[test]
    fn test_live_hostile_is_standable() {
        let hostile = Hostile::new(Vec2::new(100.0, 140.0), "demon");
        let mut actor = Actor::new(Vec2::new(100.0, 100.0));
        actor.vel.y = 5.0;
        resolve_vertical(&mut actor, &[], &[], &[hostile.clone()]);
        assert_eq!(actor.body.bottom(), hostile.body.top());
        assert_eq!(actor.vel.y, 0.0);
    }
}

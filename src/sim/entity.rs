//! Entity model and per-entity stepping
//!
//! One shared `Body` (bounding box + pixel mask) composed into each variant:
//! actor, hostile, projectile, static geometry. No entity outlives removal
//! from its owning collection.

use glam::{IVec2, Vec2};

use super::mask::PixelMask;
use crate::consts::*;

/// Horizontal facing, also the travel direction of spawned projectiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Shared entity representation: axis-aligned bounding box plus pixel mask
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner in world pixels
    pub pos: Vec2,
    pub mask: PixelMask,
}

impl Body {
    pub fn new(pos: Vec2, mask: PixelMask) -> Self {
        Self { pos, mask }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.mask.width() as f32
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.mask.height() as f32
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height()
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height() / 2.0
    }

    /// Position floored to the pixel grid for mask tests
    #[inline]
    pub fn pixel_pos(&self) -> IVec2 {
        IVec2::new(self.pos.x.floor() as i32, self.pos.y.floor() as i32)
    }

    /// Mask intersection test at current positions
    pub fn overlaps(&self, other: &Body) -> bool {
        self.mask
            .overlaps(self.pixel_pos(), &other.mask, other.pixel_pos())
    }

    /// Mask intersection test with this body speculatively displaced by
    /// `offset`; the body itself is never moved
    pub fn overlaps_displaced(&self, offset: Vec2, other: &Body) -> bool {
        let at = self.pos + offset;
        let at = IVec2::new(at.x.floor() as i32, at.y.floor() as i32);
        self.mask.overlaps(at, &other.mask, other.pixel_pos())
    }
}

/// The player-controlled actor
#[derive(Debug, Clone)]
pub struct Actor {
    pub body: Body,
    pub hp: i32,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub facing: Facing,
    /// Ticks since last grounded; drives the gravity ramp
    pub fall_ticks: u32,
    /// Clamped to [0, MAX_JUMP_COUNT]
    pub jump_count: u32,
    invulnerable: bool,
    invuln_ticks: u32,
    /// Ticks until the next shot is allowed
    pub cooldown: u32,
    /// Exclusively owned; no other component mutates this collection
    pub projectiles: Vec<Projectile>,
}

impl Actor {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, PixelMask::solid(ACTOR_SIZE, ACTOR_SIZE)),
            hp: PLAYER_HP,
            vel: Vec2::ZERO,
            facing: Facing::Left,
            fall_ticks: 0,
            jump_count: 0,
            invulnerable: false,
            invuln_ticks: 0,
            cooldown: 0,
            projectiles: Vec::new(),
        }
    }

    pub fn run_left(&mut self) {
        self.vel.x = -PLAYER_SPEED;
        self.facing = Facing::Left;
    }

    pub fn run_right(&mut self) {
        self.vel.x = PLAYER_SPEED;
        self.facing = Facing::Right;
    }

    /// Edge-triggered jump; a no-op once the jump count is spent
    pub fn jump(&mut self) {
        if self.jump_count < MAX_JUMP_COUNT {
            self.vel.y = -JUMP_IMPULSE;
            self.jump_count += 1;
            if self.jump_count == 1 {
                self.fall_ticks = 0;
            }
        }
    }

    /// Landing resolution: grounded, vertical motion stopped, jumps restored
    pub fn landed(&mut self) {
        self.fall_ticks = 0;
        self.vel.y = 0.0;
        self.jump_count = 0;
    }

    /// Ceiling resolution: vertical speed reflected downward
    pub fn hit_head(&mut self) {
        self.fall_ticks = 0;
        self.vel.y = -self.vel.y;
    }

    /// Start the post-hit invulnerability window
    pub fn mark_hit(&mut self) {
        self.invulnerable = true;
    }

    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    /// One physics step: gravity ramp, position, timers, owned projectiles.
    /// Deterministic; touches nothing beyond owned fields.
    pub fn integrate(&mut self) {
        // Gravity ramp saturates at one pixel/tick² after TICK_RATE airborne ticks
        self.vel.y += (self.fall_ticks as f32 / TICK_RATE as f32 * GRAVITY).min(1.0);
        self.body.pos += self.vel;
        self.fall_ticks += 1;

        if self.invulnerable {
            self.invuln_ticks += 1;
            if self.invuln_ticks > INVULN_TICKS {
                self.invulnerable = false;
                self.invuln_ticks = 0;
            }
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
        }

        for p in &mut self.projectiles {
            p.advance();
        }
        self.projectiles.retain(|p| p.lifetime > 0);
    }
}

/// A hostile actor; alive iff hit points are positive
#[derive(Debug, Clone)]
pub struct Hostile {
    pub body: Body,
    pub hp: i32,
    pub name: String,
}

impl Hostile {
    pub fn new(pos: Vec2, name: impl Into<String>) -> Self {
        Self {
            body: Body::new(pos, PixelMask::solid(ACTOR_SIZE, ACTOR_SIZE)),
            hp: HOSTILE_HP,
            name: name.into(),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// A fired projectile
#[derive(Debug, Clone)]
pub struct Projectile {
    pub body: Body,
    pub facing: Facing,
    pub speed: f32,
    /// Remaining ticks; strictly decreasing, removed at 0
    pub lifetime: u32,
}

impl Projectile {
    pub fn new(pos: Vec2, facing: Facing) -> Self {
        Self {
            body: Body::new(pos, PixelMask::solid(BULLET_WIDTH, BULLET_HEIGHT)),
            facing,
            speed: BULLET_SPEED,
            lifetime: BULLET_LIFETIME,
        }
    }

    pub fn advance(&mut self) {
        self.body.pos.x += self.facing.sign() * self.speed;
        self.lifetime = self.lifetime.saturating_sub(1);
    }
}

/// Immutable world geometry; contributes only to collision tests
#[derive(Debug, Clone)]
pub struct StaticBody {
    pub body: Body,
}

impl StaticBody {
    pub fn new(pos: Vec2, mask: PixelMask) -> Self {
        Self {
            body: Body::new(pos, mask),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_ramp_saturates() {
        let mut actor = Actor::new(Vec2::new(0.0, 0.0));
        // After TICK_RATE airborne ticks the per-tick increment caps at GRAVITY
        actor.fall_ticks = TICK_RATE * 3;
        let before = actor.vel.y;
        actor.integrate();
        assert!((actor.vel.y - before - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_integrate_applies_velocity_and_counts_fall() {
        let mut actor = Actor::new(Vec2::new(100.0, 100.0));
        actor.vel = Vec2::new(5.0, 2.0);
        actor.integrate();
        assert_eq!(actor.body.pos, Vec2::new(105.0, 102.0));
        assert_eq!(actor.fall_ticks, 1);
    }

    #[test]
    fn test_jump_count_never_exceeds_max() {
        let mut actor = Actor::new(Vec2::ZERO);
        actor.jump();
        assert_eq!(actor.jump_count, 1);
        assert_eq!(actor.vel.y, -JUMP_IMPULSE);

        // Second request is a no-op leaving state unchanged
        actor.vel.y = 3.0;
        actor.fall_ticks = 7;
        actor.jump();
        assert_eq!(actor.jump_count, 1);
        assert_eq!(actor.vel.y, 3.0);
        assert_eq!(actor.fall_ticks, 7);
    }

    #[test]
    fn test_landed_resets_regardless_of_prior_state() {
        let mut actor = Actor::new(Vec2::ZERO);
        actor.vel.y = 12.5;
        actor.fall_ticks = 99;
        actor.jump_count = 1;
        actor.landed();
        assert_eq!(actor.vel.y, 0.0);
        assert_eq!(actor.fall_ticks, 0);
        assert_eq!(actor.jump_count, 0);
    }

    #[test]
    fn test_hit_head_reflects_vertical_speed() {
        let mut actor = Actor::new(Vec2::ZERO);
        actor.vel.y = -8.0;
        actor.hit_head();
        assert_eq!(actor.vel.y, 8.0);
        assert_eq!(actor.fall_ticks, 0);
    }

    #[test]
    fn test_invulnerability_clears_after_window() {
        let mut actor = Actor::new(Vec2::ZERO);
        actor.mark_hit();
        for _ in 0..INVULN_TICKS {
            actor.integrate();
            assert!(actor.is_invulnerable());
        }
        actor.integrate();
        assert!(!actor.is_invulnerable());
    }

    #[test]
    fn test_projectile_expires_and_is_removed() {
        let mut actor = Actor::new(Vec2::ZERO);
        let mut p = Projectile::new(Vec2::new(400.0, 300.0), Facing::Right);
        p.lifetime = 2;
        actor.projectiles.push(p);

        actor.integrate();
        assert_eq!(actor.projectiles[0].lifetime, 1);
        actor.integrate();
        assert!(actor.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_travel_scenario() {
        // Fired left from x=100 at speed 10: after 5 ticks x=50, lifetime 175
        let mut actor = Actor::new(Vec2::new(700.0, 0.0));
        actor
            .projectiles
            .push(Projectile::new(Vec2::new(100.0, 125.0), Facing::Left));
        for _ in 0..5 {
            actor.integrate();
        }
        assert_eq!(actor.projectiles[0].body.pos.x, 50.0);
        assert_eq!(actor.projectiles[0].lifetime, BULLET_LIFETIME - 5);
    }
}

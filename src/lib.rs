//! Brawlforge - a side-scrolling combat demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, mask collision, combat)
//! - `assets`: Bitmap loading and sprite synthesis
//! - `render`: Per-frame draw-call dispatch
//! - `input`: Held-key snapshot and edge-event queue

pub mod assets;
pub mod input;
pub mod render;
pub mod sim;

pub use assets::{AssetError, AssetSource, Bitmap};

/// Game configuration constants
pub mod consts {
    /// Window and world bounds (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Actor horizontal speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Lookahead distance for the blocked-direction probe
    pub const PROBE_DISTANCE: f32 = PLAYER_SPEED * 2.0;
    /// Gravity ramp slope
    pub const GRAVITY: f32 = 1.0;
    /// Single jump only
    pub const MAX_JUMP_COUNT: u32 = 1;
    /// Vertical impulse applied on jump (pixels per tick, upward)
    pub const JUMP_IMPULSE: f32 = GRAVITY * 8.0;
    /// Ticks of post-hit invulnerability (2 seconds)
    pub const INVULN_TICKS: u32 = TICK_RATE * 2;

    /// Actor starting hit points
    pub const PLAYER_HP: i32 = 200;
    /// Hostile starting hit points
    pub const HOSTILE_HP: i32 = 100;
    /// Damage per resolved projectile hit
    pub const BULLET_DAMAGE: i32 = 10;

    /// Projectile speed (pixels per tick)
    pub const BULLET_SPEED: f32 = 10.0;
    /// Minimum ticks between two successful shots
    pub const BULLET_COOLDOWN: u32 = 15;
    /// Projectile lifetime in ticks (3 seconds)
    pub const BULLET_LIFETIME: u32 = TICK_RATE * 3;
    /// Projectile sprite size
    pub const BULLET_WIDTH: u32 = 10;
    pub const BULLET_HEIGHT: u32 = 5;
    /// Gap between the actor's leading edge and a spawned projectile
    pub const MUZZLE_OFFSET: f32 = 10.0;

    /// Actor and hostile sprite size (square)
    pub const ACTOR_SIZE: u32 = 50;
    /// Terrain/platform block size (square)
    pub const BLOCK_SIZE: u32 = 96;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (collections resolve in encounter order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod entity;
pub mod mask;
pub mod state;
pub mod tick;

pub use collision::{HorizontalProbe, probe_horizontal, resolve_vertical};
pub use combat::{attempt_shoot, resolve_projectiles};
pub use entity::{Actor, Body, Facing, Hostile, Projectile, StaticBody};
pub use mask::PixelMask;
pub use state::{LevelSpec, World};
pub use tick::{TickInput, tick};

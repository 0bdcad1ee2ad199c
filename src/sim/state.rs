//! World state and level construction
//!
//! The `World` owns the actor, the hostile collection, and both static
//! collections. Level layouts are data: a serde-decoded `LevelSpec` plus an
//! injected asset source for the bitmaps that masks derive from. No component
//! reaches for ambient globals.

use glam::Vec2;
use serde::Deserialize;

use super::entity::{Actor, Hostile, StaticBody};
use crate::assets::{AssetError, AssetSource};
use crate::consts::*;

/// Declarative level layout
#[derive(Debug, Clone, Deserialize)]
pub struct LevelSpec {
    /// Actor spawn position
    pub player: Vec2,
    /// Floor run: terrain blocks from index `first` to `last` inclusive,
    /// each at (index × block size, screen bottom − block size)
    pub floor: FloorSpec,
    /// Floating platform positions
    pub platforms: Vec<Vec2>,
    pub hostiles: Vec<HostileSpec>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FloorSpec {
    pub first: i32,
    pub last: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostileSpec {
    pub name: String,
    pub pos: Vec2,
}

impl LevelSpec {
    /// The built-in demo level
    pub fn demo() -> Result<Self, AssetError> {
        Ok(serde_json::from_str(include_str!(
            "../../assets/level.json"
        ))?)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub actor: Actor,
    /// Live hostiles; filtered to living entities at the end of every tick
    pub hostiles: Vec<Hostile>,
    /// The floor run
    pub terrain: Vec<StaticBody>,
    /// Floating platforms
    pub platforms: Vec<StaticBody>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl World {
    /// Build a world from a level layout. Asset failures are fatal here, at
    /// construction; the simulation itself never errors.
    pub fn from_level(level: &LevelSpec, assets: &dyn AssetSource) -> Result<Self, AssetError> {
        let block_mask = assets.bitmap("terrain")?.mask();

        let terrain = (level.floor.first..=level.floor.last)
            .map(|i| {
                let pos = Vec2::new(
                    (i * BLOCK_SIZE as i32) as f32,
                    SCREEN_HEIGHT - BLOCK_SIZE as f32,
                );
                StaticBody::new(pos, block_mask.clone())
            })
            .collect::<Vec<_>>();

        let platforms = level
            .platforms
            .iter()
            .map(|&pos| StaticBody::new(pos, block_mask.clone()))
            .collect::<Vec<_>>();

        let hostiles = level
            .hostiles
            .iter()
            .map(|h| Hostile::new(h.pos, h.name.clone()))
            .collect::<Vec<_>>();

        log::info!(
            "world ready: {} terrain blocks, {} platforms, {} hostiles",
            terrain.len(),
            platforms.len(),
            hostiles.len()
        );

        Ok(Self {
            actor: Actor::new(level.player),
            hostiles,
            terrain,
            platforms,
            time_ticks: 0,
        })
    }

    /// Build the demo level
    pub fn demo(assets: &dyn AssetSource) -> Result<Self, AssetError> {
        Self::from_level(&LevelSpec::demo()?, assets)
    }
}

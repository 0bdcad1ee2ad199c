//! Per-frame draw dispatch
//!
//! The loop hands the renderer the whole world once per tick; draw order is
//! background tiles, terrain, platforms, live hostiles, then the actor and
//! its projectiles. Presentation is the caller's frame boundary.

use glam::Vec2;
use macroquad::color::{BLACK, Color, RED, WHITE, YELLOW};
use macroquad::texture::{FilterMode, Texture2D, draw_texture};
use macroquad::shapes::draw_rectangle;

use crate::assets::{AssetError, AssetSource, Bitmap};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{Body, World};

const HOSTILE_COLOR: Color = BLACK;
const ACTOR_COLOR: Color = RED;
const PROJECTILE_COLOR: Color = YELLOW;

/// Rendering collaborator: consumes one world snapshot per tick
pub trait Renderer {
    fn render(&mut self, world: &World);
}

/// Tile origins covering the screen with a bitmap of the given size
pub fn background_tiles(tile_width: u32, tile_height: u32) -> Vec<Vec2> {
    let cols = SCREEN_WIDTH as u32 / tile_width + 1;
    let rows = SCREEN_HEIGHT as u32 / tile_height + 1;
    let mut tiles = Vec::with_capacity((cols * rows) as usize);
    for i in 0..cols {
        for j in 0..rows {
            tiles.push(Vec2::new(
                (i * tile_width) as f32,
                (j * tile_height) as f32,
            ));
        }
    }
    tiles
}

/// Macroquad-backed renderer for the demo window
pub struct MacroquadRenderer {
    background: Texture2D,
    block: Texture2D,
    tiles: Vec<Vec2>,
}

impl MacroquadRenderer {
    pub fn new(assets: &dyn AssetSource) -> Result<Self, AssetError> {
        let background_bitmap = assets.bitmap("background")?;
        let block_bitmap = assets.bitmap("terrain")?;
        let tiles = background_tiles(background_bitmap.width, background_bitmap.height);
        Ok(Self {
            background: upload(&background_bitmap),
            block: upload(&block_bitmap),
            tiles,
        })
    }

    fn draw_rect(body: &Body, color: Color) {
        draw_rectangle(body.left(), body.top(), body.width(), body.height(), color);
    }
}

fn upload(bitmap: &Bitmap) -> Texture2D {
    let texture = Texture2D::from_rgba8(bitmap.width as u16, bitmap.height as u16, &bitmap.rgba);
    texture.set_filter(FilterMode::Nearest);
    texture
}

impl Renderer for MacroquadRenderer {
    fn render(&mut self, world: &World) {
        for tile in &self.tiles {
            draw_texture(&self.background, tile.x, tile.y, WHITE);
        }
        for block in world.terrain.iter().chain(world.platforms.iter()) {
            draw_texture(&self.block, block.body.left(), block.body.top(), WHITE);
        }
        for hostile in &world.hostiles {
            if hostile.is_alive() {
                Self::draw_rect(&hostile.body, HOSTILE_COLOR);
            }
        }
        Self::draw_rect(&world.actor.body, ACTOR_COLOR);
        for projectile in &world.actor.projectiles {
            Self::draw_rect(&projectile.body, PROJECTILE_COLOR);
        }
    }
}

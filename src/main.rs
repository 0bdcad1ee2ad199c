//! Brawlforge entry point
//!
//! Window bootstrap, world construction, and the fixed-timestep loop: one
//! batch of simulation ticks and one draw pass per rendered frame, paced to
//! the target tick rate.

use macroquad::prelude::*;

use brawlforge::AssetError;
use brawlforge::assets::DirAssets;
use brawlforge::consts::*;
use brawlforge::input::{InputEvent, InputSource, MacroquadInput};
use brawlforge::render::{MacroquadRenderer, Renderer};
use brawlforge::sim::{TickInput, World, tick};

/// Demo session: world state plus the frame-to-tick plumbing
struct Game {
    world: World,
    renderer: MacroquadRenderer,
    input: TickInput,
    accumulator: f32,
}

impl Game {
    fn new(assets: &DirAssets) -> Result<Self, AssetError> {
        Ok(Self {
            world: World::demo(assets)?,
            renderer: MacroquadRenderer::new(assets)?,
            input: TickInput::default(),
            accumulator: 0.0,
        })
    }

    /// Fold this frame's input into the pending tick input. Returns true on a
    /// quit signal; quit takes effect at the tick boundary.
    fn poll(&mut self, source: &mut impl InputSource) -> bool {
        let mut quit = false;
        for event in source.drain_events() {
            match event {
                InputEvent::Jump => self.input.jump = true,
                InputEvent::Quit => quit = true,
            }
        }
        let held = source.snapshot();
        self.input.left = held.left;
        self.input.right = held.right;
        self.input.fire = held.fire;
        quit
    }

    /// Run simulation ticks for the elapsed frame time
    fn update(&mut self, dt: f32) {
        self.accumulator += dt.min(0.1);
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.world, &self.input);
            // Clear one-shot inputs after the tick that consumed them
            self.input.jump = false;
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "brawlforge".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("brawlforge starting...");

    let assets = DirAssets::new("assets");
    let mut game = match Game::new(&assets) {
        Ok(game) => game,
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    };
    let mut input = MacroquadInput;
    prevent_quit();

    loop {
        let quit = game.poll(&mut input);
        game.update(get_frame_time());
        game.renderer.render(&game.world);
        next_frame().await;
        if quit {
            break;
        }
    }

    log::info!("clean quit after {} ticks", game.world.time_ticks);
}

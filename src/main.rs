mod assets;
mod audio;
mod ball;
mod collision;
mod crosshair;
mod gui;
mod input_system;
mod render;
mod stage;
mod text;
mod tile;

use assets::Textures;
use audio::AudioPlayer;
use gui::Hud;
use input_system::{GameAction, InputSystem};
use log::info;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use stage::{ClickOutcome, Stage, FRAME_RATE};
use std::time::Duration;

// Window dimensions
const SCREEN_WIDTH: u32 = 1200;
const SCREEN_HEIGHT: u32 = 600;

fn main() -> Result<(), String> {
    env_logger::init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _audio_subsystem = sdl_context.audio()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Shoot 'Em", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;

    // The crosshair sprite replaces the system cursor
    sdl_context.mouse().show_cursor(false);

    let texture_creator = canvas.texture_creator();
    let textures = Textures::load(&texture_creator)?;

    let audio = AudioPlayer::new()?;
    audio.start_music()?;

    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new();
    let hud = Hud::new();

    let rng = Pcg32::from_rng(&mut rand::rng());
    let mut stage = Stage::new(SCREEN_WIDTH, SCREEN_HEIGHT, rng);

    // Last-known pointer position, updated from motion events
    let mut pointer_x = SCREEN_WIDTH as i32 / 2;
    let mut pointer_y = SCREEN_HEIGHT as i32 / 2;

    info!("starting at {}x{}, {} fps", SCREEN_WIDTH, SCREEN_HEIGHT, FRAME_RATE);

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::MouseMove(x, y) => {
                    pointer_x = x;
                    pointer_y = y;
                }
                GameAction::Click(x, y) => {
                    pointer_x = x;
                    pointer_y = y;
                    match stage.handle_click(x, y) {
                        ClickOutcome::GameStarted => audio.play_click(),
                        ClickOutcome::BallShot { .. } => audio.play_shoot(),
                        ClickOutcome::ExitRequested => break 'running,
                        ClickOutcome::None => {}
                    }
                }
            }
        }

        stage.update(pointer_x, pointer_y);

        render::render_frame(&mut canvas, &stage, &textures, &hud)?;
        canvas.present();

        // Cap the loop at the target frame rate
        std::thread::sleep(Duration::new(0, 1_000_000_000u32 / FRAME_RATE));
    }

    Ok(())
}

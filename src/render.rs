//! Frame composition
//!
//! One function per drawable layer, orchestrated by `render_frame` in the
//! order background → screen-specific content → crosshair. All gameplay
//! state is read from the stage; nothing here mutates it.

use crate::assets::Textures;
use crate::ball::{Ball, BallColor};
use crate::collision::Collidable;
use crate::crosshair::Crosshair;
use crate::gui::Hud;
use crate::stage::{Screen, Stage};
use crate::tile::render_tiled_background;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Draws one complete frame for the current screen
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    stage: &Stage,
    textures: &Textures,
    hud: &Hud,
) -> Result<(), String> {
    canvas.set_draw_color(sdl2::pixels::Color::RGB(0, 0, 0));
    canvas.clear();

    render_tiled_background(canvas, &textures.background_tile)?;

    match stage.screen {
        Screen::MainMenu => {
            hud.render_title(canvas, "SHOOT 'EM")?;
            render_buttons(canvas, stage, textures)?;
        }
        Screen::GameScreen => {
            render_balls(canvas, &stage.balls, textures)?;
            hud.render_game_overlay(canvas, stage.elapsed_seconds(), stage.remaining_even_balls)?;
        }
        Screen::GameOver => {
            hud.render_title(canvas, "GAME OVER")?;
            hud.render_final_time(canvas, stage.last_elapsed_seconds)?;
            render_buttons(canvas, stage, textures)?;
        }
    }

    // Crosshair last so it sits above everything else
    render_crosshair(canvas, &stage.crosshair, textures)
}

/// Draws every live ball with its digit overlaid at the sprite center
fn render_balls(
    canvas: &mut Canvas<Window>,
    balls: &[Ball],
    textures: &Textures,
) -> Result<(), String> {
    for ball in balls {
        let sprite = match ball.color {
            BallColor::Blue => &textures.ball_blue,
            BallColor::Red => &textures.ball_red,
        };
        canvas.copy(sprite, None, ball.get_bounds())?;

        let digit = &textures.digits[ball.digit as usize];
        let query = digit.query();
        let dest = Rect::new(
            ball.x + (ball.width as i32 - query.width as i32) / 2,
            ball.y + (ball.height as i32 - query.height as i32) / 2,
            query.width,
            query.height,
        );
        canvas.copy(digit, None, dest)?;
    }

    Ok(())
}

fn render_buttons(
    canvas: &mut Canvas<Window>,
    stage: &Stage,
    textures: &Textures,
) -> Result<(), String> {
    for button in stage.active_buttons() {
        button.render(canvas, &textures.button, &textures.button_hover)?;
    }

    Ok(())
}

fn render_crosshair(
    canvas: &mut Canvas<Window>,
    crosshair: &Crosshair,
    textures: &Textures,
) -> Result<(), String> {
    canvas.copy(&textures.crosshair, None, crosshair.get_bounds())
}

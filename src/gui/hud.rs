//! Head-up display and screen titles
//!
//! Screen-space text drawn with the bitmap font: the in-game timer and
//! remaining even-ball count, the menu/game-over titles, and the final
//! time shown after a round. All values are recomputed from stage state
//! each frame; nothing here holds state of its own.

use crate::text::{draw_text, draw_text_centered, text_width};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// HUD text colors
#[derive(Debug, Clone)]
pub struct HudStyle {
    pub text_color: Color,
    pub title_color: Color,
    pub accent_color: Color,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            text_color: Color::RGB(255, 255, 255),
            title_color: Color::RGB(255, 220, 100),
            accent_color: Color::RGB(120, 220, 120),
        }
    }
}

pub struct Hud {
    style: HudStyle,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            style: HudStyle::default(),
        }
    }

    /// In-game overlay: elapsed seconds top-left, even balls left top-right
    pub fn render_game_overlay(
        &self,
        canvas: &mut Canvas<Window>,
        elapsed_seconds: u32,
        remaining_even_balls: usize,
    ) -> Result<(), String> {
        let (screen_width, _) = canvas.logical_size();

        let time_text = format!("TIME {}", elapsed_seconds);
        draw_text(canvas, &time_text, 16, 16, self.style.text_color, 3)?;

        let remaining_text = format!("EVEN BALLS {}", remaining_even_balls);
        let right_x = screen_width as i32 - 16 - text_width(&remaining_text, 3) as i32;
        draw_text(canvas, &remaining_text, right_x, 16, self.style.text_color, 3)
    }

    /// Large title centered in the upper third of the screen
    pub fn render_title(&self, canvas: &mut Canvas<Window>, title: &str) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.logical_size();
        draw_text_centered(
            canvas,
            title,
            screen_width as i32 / 2,
            screen_height as i32 / 5,
            self.style.title_color,
            6,
        )
    }

    /// Final round time shown on the game-over screen, below the title
    pub fn render_final_time(
        &self,
        canvas: &mut Canvas<Window>,
        last_elapsed_seconds: u32,
    ) -> Result<(), String> {
        let (screen_width, screen_height) = canvas.logical_size();
        let text = format!("CLEARED IN {} SECONDS", last_elapsed_seconds);
        draw_text_centered(
            canvas,
            &text,
            screen_width as i32 / 2,
            screen_height as i32 / 5 + 60,
            self.style.accent_color,
            3,
        )
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

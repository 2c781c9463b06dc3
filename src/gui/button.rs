//! Menu Button Component
//!
//! A clickable, hoverable button with a text label. Buttons are long-lived;
//! which ones are active at a time is decided by the stage's current screen.
//! Rendering swaps between the normal and highlighted texture based on the
//! hover flag, which the stage refreshes every frame.

use crate::collision::Collidable;
use crate::text::{draw_text_centered, text_height};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Button footprint in pixels
pub const BUTTON_WIDTH: u32 = 190;
pub const BUTTON_HEIGHT: u32 = 49;

/// Label scale for the bitmap font
const LABEL_SCALE: u32 = 2;

/// What a button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Play,
    Exit,
    Replay,
}

impl ButtonLabel {
    pub fn text(&self) -> &'static str {
        match self {
            ButtonLabel::Play => "PLAY",
            ButtonLabel::Exit => "EXIT",
            ButtonLabel::Replay => "REPLAY",
        }
    }
}

/// A screen-space button centered on `(x, y)`
#[derive(Debug, Clone)]
pub struct Button {
    /// Center position
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub label: ButtonLabel,
    pub hovered: bool,
}

impl Button {
    pub fn new(x: i32, y: i32, label: ButtonLabel) -> Self {
        Button {
            x,
            y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
            label,
            hovered: false,
        }
    }

    /// Whether a point falls inside the button's bounds (hover test)
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.get_bounds().contains_point((x, y))
    }

    /// Render the button texture (hover variant when highlighted) with the
    /// label centered on top
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        normal: &Texture,
        hover: &Texture,
    ) -> Result<(), String> {
        let bounds = self.get_bounds();
        let texture = if self.hovered { hover } else { normal };
        canvas.copy(texture, None, bounds)?;

        let label_y = self.y - (text_height(LABEL_SCALE) / 2) as i32;
        draw_text_centered(
            canvas,
            self.label.text(),
            self.x,
            label_y,
            Color::RGB(255, 255, 255),
            LABEL_SCALE,
        )
    }
}

impl Collidable for Button {
    fn get_bounds(&self) -> Rect {
        Rect::new(
            self.x - (self.width / 2) as i32,
            self.y - (self.height / 2) as i32,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_center_and_misses_outside() {
        let button = Button::new(600, 300, ButtonLabel::Play);

        assert!(button.contains(600, 300));
        assert!(button.contains(600 - 90, 300 - 20));
        assert!(!button.contains(600, 300 + 100));
        assert!(!button.contains(0, 0));
    }

    #[test]
    fn test_bounds_centered() {
        let button = Button::new(600, 300, ButtonLabel::Exit);
        let bounds = button.get_bounds();

        assert_eq!(bounds.x(), 600 - (BUTTON_WIDTH / 2) as i32);
        assert_eq!(bounds.y(), 300 - (BUTTON_HEIGHT / 2) as i32);
        assert_eq!((bounds.width(), bounds.height()), (BUTTON_WIDTH, BUTTON_HEIGHT));
    }

    #[test]
    fn test_label_text() {
        assert_eq!(ButtonLabel::Play.text(), "PLAY");
        assert_eq!(ButtonLabel::Replay.text(), "REPLAY");
        assert_eq!(ButtonLabel::Exit.text(), "EXIT");
    }
}

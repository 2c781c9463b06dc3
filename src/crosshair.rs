//! Crosshair pointer entity
//!
//! Replaces the hidden system cursor. Its position is re-synced to the
//! pointer every frame and its bounding box is what gets tested against
//! balls and buttons.

use crate::collision::Collidable;
use sdl2::rect::Rect;

/// Crosshair hit box size in pixels (square, centered on the pointer)
pub const CROSSHAIR_SIZE: u32 = 32;

#[derive(Debug, Clone)]
pub struct Crosshair {
    /// Pointer position (box center)
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Crosshair {
    pub fn new() -> Self {
        Crosshair {
            x: 0,
            y: 0,
            width: CROSSHAIR_SIZE,
            height: CROSSHAIR_SIZE,
        }
    }

    /// Centers the crosshair on the given pointer coordinates
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }
}

impl Collidable for Crosshair {
    fn get_bounds(&self) -> Rect {
        Rect::new(
            self.x - (self.width / 2) as i32,
            self.y - (self.height / 2) as i32,
            self.width,
            self.height,
        )
    }
}

impl Default for Crosshair {
    fn default() -> Self {
        Self::new()
    }
}

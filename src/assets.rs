//! Texture loading and the logical-name texture store
//!
//! All visual assets are loaded up front, before the loop starts. A missing
//! or undecodable file is a fatal startup error; there is no fallback art
//! and no retry.

use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
pub fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'a>, String> {
    texture_creator
        .load_texture(path)
        .map_err(|e| format!("Failed to load {}: {}", path, e))
}

/// Every texture the game draws, keyed by field instead of by path
pub struct Textures<'a> {
    pub ball_blue: Texture<'a>,
    pub ball_red: Texture<'a>,
    /// Digit overlays, indexed by the digit itself (0-9)
    pub digits: Vec<Texture<'a>>,
    pub button: Texture<'a>,
    pub button_hover: Texture<'a>,
    pub crosshair: Texture<'a>,
    pub background_tile: Texture<'a>,
}

impl<'a> Textures<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        let digits = (0..10)
            .map(|n| load_texture(texture_creator, &format!("assets/number_{}.png", n)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Textures {
            ball_blue: load_texture(texture_creator, "assets/ball_blue.png")?,
            ball_red: load_texture(texture_creator, "assets/ball_red.png")?,
            digits,
            button: load_texture(texture_creator, "assets/button.png")?,
            button_hover: load_texture(texture_creator, "assets/button_hover.png")?,
            crosshair: load_texture(texture_creator, "assets/crosshair.png")?,
            background_tile: load_texture(texture_creator, "assets/background_tile.png")?,
        })
    }
}

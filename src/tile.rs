use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Background tile size in pixels (square)
pub const TILE_SIZE: u32 = 64;

/// Fills the whole logical screen with the background tile.
///
/// Rows and columns are rounded up so the tiling covers the right and
/// bottom edges even when the screen size is not a tile multiple.
pub fn render_tiled_background(
    canvas: &mut Canvas<Window>,
    tile_texture: &Texture,
) -> Result<(), String> {
    let (screen_width, screen_height) = canvas.logical_size();
    let columns = screen_width.div_ceil(TILE_SIZE);
    let rows = screen_height.div_ceil(TILE_SIZE);

    for row in 0..rows {
        for col in 0..columns {
            let dest = Rect::new(
                (col * TILE_SIZE) as i32,
                (row * TILE_SIZE) as i32,
                TILE_SIZE,
                TILE_SIZE,
            );
            canvas.copy(tile_texture, None, dest)?;
        }
    }

    Ok(())
}

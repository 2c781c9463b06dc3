//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions, independent of the
//! moving game entities:
//!
//! - [`Button`] - clickable menu button with a hover state
//! - [`Hud`] - timer/count overlay and screen titles
//!
//! Everything is drawn procedurally (SDL2 primitives plus the bitmap font
//! in `text.rs`), with the button background textures as the only assets.

pub mod button;
pub mod hud;

pub use button::{Button, ButtonLabel};
pub use hud::Hud;

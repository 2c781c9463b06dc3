use sdl2::event::Event;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// High-level input actions
///
/// This enum decouples raw SDL2 events from game logic: the loop only ever
/// sees pointer movement, clicks, and the quit request. Which handler a
/// click reaches (menu vs. shoot) is decided later by the stage, keyed on
/// the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pointer moved to (x, y)
    MouseMove(i32, i32),
    /// Left mouse button pressed at (x, y)
    Click(i32, i32),
    /// Window close requested
    Quit,
}

/// InputSystem translates SDL2 events into GameActions
///
/// One non-blocking drain of the event queue per frame. Keyboard input,
/// right clicks, and everything else the game has no use for are ignored.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Polls all pending SDL2 events and returns the actions to process
    /// this frame, in arrival order.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => {
                    actions.push(GameAction::Quit);
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => {
                    actions.push(GameAction::Click(x, y));
                }
                Event::MouseMotion { x, y, .. } => {
                    actions.push(GameAction::MouseMove(x, y));
                }
                _ => {}
            }
        }

        actions
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

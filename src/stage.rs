//! Stage: the three-screen state machine
//!
//! The stage owns every piece of gameplay state: the current screen, the
//! live ball batch, the even-ball counter, the frame timer, the crosshair,
//! and the menu buttons. It is an explicit context struct handed to the
//! game loop; there are no module-level globals.
//!
//! Screen transitions:
//!
//! ```text
//! MainMenu --PLAY--> GameScreen --last even ball shot--> GameOver
//!                        ^                                   |
//!                        +-----------REPLAY------------------+
//! ```
//!
//! EXIT (or closing the window) terminates the process from any screen,
//! and nothing ever returns to the main menu short of a restart.

use crate::ball::Ball;
use crate::collision::{aabb_intersect, first_hit, Collidable};
use crate::crosshair::Crosshair;
use crate::gui::{Button, ButtonLabel};
use log::{debug, info};
use rand_pcg::Pcg32;

/// Target loop rate; the displayed time is `elapsed_frames / FRAME_RATE`
pub const FRAME_RATE: u32 = 60;

/// Number of balls spawned per round
pub const BALL_BATCH_SIZE: usize = 20;

/// Horizontal offset of the menu buttons from the screen center
const BUTTON_OFFSET: i32 = 100;

/// Top-level game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    GameScreen,
    GameOver,
}

/// What a click did, so the caller can trigger the external collaborators
/// (sound effects, process exit) the stage deliberately does not own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was hit, or an odd ball was hit (a deliberate no-op)
    None,
    /// PLAY or REPLAY was clicked and a fresh round started
    GameStarted,
    /// An even ball was removed; `game_over` is set when it was the last one
    BallShot { game_over: bool },
    /// EXIT was clicked
    ExitRequested,
}

pub struct Stage {
    pub screen: Screen,
    pub balls: Vec<Ball>,
    pub total_balls: usize,
    /// Always equals the number of live balls with `is_even` set
    pub remaining_even_balls: usize,
    /// Frames rendered since the current round started
    pub elapsed_frames: u32,
    /// Seconds the last finished round took, snapshotted at game over
    pub last_elapsed_seconds: u32,
    pub crosshair: Crosshair,
    pub play_button: Button,
    pub exit_button: Button,
    pub replay_button: Button,
    screen_width: u32,
    screen_height: u32,
    rng: Pcg32,
}

impl Stage {
    pub fn new(screen_width: u32, screen_height: u32, rng: Pcg32) -> Self {
        let center_x = screen_width as i32 / 2;
        let center_y = screen_height as i32 / 2;

        Stage {
            screen: Screen::MainMenu,
            balls: Vec::new(),
            total_balls: 0,
            remaining_even_balls: 0,
            elapsed_frames: 0,
            last_elapsed_seconds: 0,
            crosshair: Crosshair::new(),
            play_button: Button::new(center_x - BUTTON_OFFSET, center_y, ButtonLabel::Play),
            exit_button: Button::new(center_x + BUTTON_OFFSET, center_y, ButtonLabel::Exit),
            replay_button: Button::new(center_x - BUTTON_OFFSET, center_y, ButtonLabel::Replay),
            screen_width,
            screen_height,
            rng,
        }
    }

    /// Buttons belonging to the current screen, in hit-test order
    pub fn active_buttons(&self) -> Vec<&Button> {
        match self.screen {
            Screen::MainMenu => vec![&self.play_button, &self.exit_button],
            Screen::GameOver => vec![&self.replay_button, &self.exit_button],
            Screen::GameScreen => Vec::new(),
        }
    }

    fn active_buttons_mut(&mut self) -> Vec<&mut Button> {
        match self.screen {
            Screen::MainMenu => vec![&mut self.play_button, &mut self.exit_button],
            Screen::GameOver => vec![&mut self.replay_button, &mut self.exit_button],
            Screen::GameScreen => Vec::new(),
        }
    }

    /// Displayed round time in whole seconds, always recomputed from the
    /// frame counter
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_frames / FRAME_RATE
    }

    /// Per-frame update: sync the crosshair to the pointer, then either
    /// advance the ball batch and the timer (game screen) or refresh the
    /// button hover states (menu screens).
    pub fn update(&mut self, pointer_x: i32, pointer_y: i32) {
        self.crosshair.set_position(pointer_x, pointer_y);

        match self.screen {
            Screen::GameScreen => {
                for ball in &mut self.balls {
                    ball.update(self.screen_width, self.screen_height);
                }
                self.elapsed_frames += 1;
            }
            Screen::MainMenu | Screen::GameOver => {
                for button in self.active_buttons_mut() {
                    button.hovered = button.contains(pointer_x, pointer_y);
                }
            }
        }
    }

    /// Single click dispatch, keyed on the current screen
    pub fn handle_click(&mut self, x: i32, y: i32) -> ClickOutcome {
        self.crosshair.set_position(x, y);

        match self.screen {
            Screen::MainMenu | Screen::GameOver => self.handle_menu_click(),
            Screen::GameScreen => self.handle_shot(),
        }
    }

    /// Starts a fresh round: new ball batch, counters and timer reset.
    /// Used by both the PLAY and REPLAY transitions.
    pub fn start_game(&mut self) {
        self.balls = Ball::spawn_batch(
            BALL_BATCH_SIZE,
            self.screen_width,
            self.screen_height,
            &mut self.rng,
        );
        self.total_balls = self.balls.len();
        self.remaining_even_balls = self.balls.iter().filter(|b| b.is_even).count();
        self.elapsed_frames = 0;
        self.screen = Screen::GameScreen;

        info!(
            "round started: {} balls, {} even",
            self.total_balls, self.remaining_even_balls
        );

        // A batch can, very rarely, contain no even balls at all. Finish
        // the round immediately instead of leaving the player stuck.
        if self.remaining_even_balls == 0 {
            self.finish_round();
        }
    }

    fn handle_menu_click(&mut self) -> ClickOutcome {
        let crosshair_bounds = self.crosshair.get_bounds();
        let hit_label = self
            .active_buttons()
            .into_iter()
            .find(|button| aabb_intersect(&crosshair_bounds, &button.get_bounds()))
            .map(|button| button.label);

        match hit_label {
            Some(ButtonLabel::Play) | Some(ButtonLabel::Replay) => {
                self.start_game();
                ClickOutcome::GameStarted
            }
            Some(ButtonLabel::Exit) => ClickOutcome::ExitRequested,
            None => ClickOutcome::None,
        }
    }

    /// Shot resolution: the first ball in spawn order under the crosshair
    /// is the one hit. Even balls are removed and counted; hitting an odd
    /// ball does nothing at all — the game only rewards identifying evens.
    fn handle_shot(&mut self) -> ClickOutcome {
        let Some(index) = first_hit(&self.crosshair, &self.balls) else {
            return ClickOutcome::None;
        };

        if !self.balls[index].is_even {
            debug!("shot odd ball {}", self.balls[index].digit);
            return ClickOutcome::None;
        }

        let ball = self.balls.remove(index);
        self.remaining_even_balls -= 1;
        debug!(
            "shot even ball {}, {} remaining",
            ball.digit, self.remaining_even_balls
        );

        if self.remaining_even_balls == 0 {
            self.finish_round();
            ClickOutcome::BallShot { game_over: true }
        } else {
            ClickOutcome::BallShot { game_over: false }
        }
    }

    /// Game-over transition: snapshot the round time, reset the frame
    /// counter, switch screens
    fn finish_round(&mut self) {
        self.last_elapsed_seconds = self.elapsed_frames / FRAME_RATE;
        self.elapsed_frames = 0;
        self.screen = Screen::GameOver;
        info!("round cleared in {}s", self.last_elapsed_seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ball::{BallColor, BALL_SIZE};
    use rand::SeedableRng;

    const W: u32 = 1200;
    const H: u32 = 600;

    fn stage_with_seed(seed: u64) -> Stage {
        Stage::new(W, H, Pcg32::seed_from_u64(seed))
    }

    fn ball_at(x: i32, y: i32, digit: u8) -> Ball {
        Ball {
            x,
            y,
            vx: 1,
            vy: 1,
            digit,
            is_even: digit % 2 == 0,
            color: BallColor::Blue,
            width: BALL_SIZE,
            height: BALL_SIZE,
        }
    }

    /// Puts a stage straight onto the game screen with a hand-placed,
    /// non-overlapping ball set
    fn stage_in_game(balls: Vec<Ball>) -> Stage {
        let mut stage = stage_with_seed(1);
        stage.total_balls = balls.len();
        stage.remaining_even_balls = balls.iter().filter(|b| b.is_even).count();
        stage.balls = balls;
        stage.screen = Screen::GameScreen;
        stage
    }

    fn assert_even_invariant(stage: &Stage) {
        let actual = stage.balls.iter().filter(|b| b.is_even).count();
        assert_eq!(
            stage.remaining_even_balls, actual,
            "even-ball counter out of sync with the ball collection"
        );
    }

    #[test]
    fn test_initial_screen_is_main_menu() {
        let stage = stage_with_seed(1);
        assert_eq!(stage.screen, Screen::MainMenu);
        assert!(stage.balls.is_empty());
    }

    #[test]
    fn test_play_click_starts_game() {
        let mut stage = stage_with_seed(2);
        let (px, py) = (stage.play_button.x, stage.play_button.y);

        let outcome = stage.handle_click(px, py);

        assert_eq!(outcome, ClickOutcome::GameStarted);
        assert_eq!(stage.screen, Screen::GameScreen);
        assert_eq!(stage.balls.len(), BALL_BATCH_SIZE);
        assert_eq!(stage.total_balls, BALL_BATCH_SIZE);
        assert_eq!(stage.elapsed_frames, 0);
        assert_even_invariant(&stage);
    }

    #[test]
    fn test_exit_click_requests_termination() {
        let mut stage = stage_with_seed(3);
        let (ex, ey) = (stage.exit_button.x, stage.exit_button.y);

        assert_eq!(stage.handle_click(ex, ey), ClickOutcome::ExitRequested);
        assert_eq!(stage.screen, Screen::MainMenu, "exit does not transition");
    }

    #[test]
    fn test_menu_click_on_empty_space_is_noop() {
        let mut stage = stage_with_seed(4);
        assert_eq!(stage.handle_click(5, 5), ClickOutcome::None);
        assert_eq!(stage.screen, Screen::MainMenu);
    }

    #[test]
    fn test_shooting_even_ball_removes_and_decrements() {
        let mut stage = stage_in_game(vec![
            ball_at(100, 100, 4),
            ball_at(400, 100, 7),
            ball_at(700, 100, 2),
        ]);

        let outcome = stage.handle_click(132, 132); // center of the first ball

        assert_eq!(outcome, ClickOutcome::BallShot { game_over: false });
        assert_eq!(stage.balls.len(), 2);
        assert_eq!(stage.remaining_even_balls, 1);
        assert_even_invariant(&stage);
    }

    #[test]
    fn test_shooting_odd_ball_is_complete_noop() {
        let mut stage = stage_in_game(vec![ball_at(100, 100, 3), ball_at(400, 100, 8)]);

        let outcome = stage.handle_click(132, 132);

        assert_eq!(outcome, ClickOutcome::None);
        assert_eq!(stage.balls.len(), 2, "odd ball is not removed");
        assert_eq!(stage.remaining_even_balls, 1);
        assert_eq!(stage.screen, Screen::GameScreen);
        assert_even_invariant(&stage);
    }

    #[test]
    fn test_missing_every_ball_is_noop() {
        let mut stage = stage_in_game(vec![ball_at(100, 100, 2)]);

        assert_eq!(stage.handle_click(900, 500), ClickOutcome::None);
        assert_eq!(stage.balls.len(), 1);
        assert_even_invariant(&stage);
    }

    #[test]
    fn test_first_hit_in_spawn_order_shadows_later_ball() {
        // Two overlapping balls; the click lands on both, the earlier odd
        // one shadows the later even one
        let mut stage = stage_in_game(vec![ball_at(100, 100, 5), ball_at(110, 110, 6)]);

        let outcome = stage.handle_click(135, 135);

        assert_eq!(outcome, ClickOutcome::None);
        assert_eq!(stage.balls.len(), 2);
    }

    #[test]
    fn test_last_even_ball_triggers_game_over_with_time_snapshot() {
        let mut stage = stage_in_game(vec![ball_at(100, 100, 6), ball_at(400, 300, 9)]);
        stage.elapsed_frames = 150; // 2.5s at 60 fps

        let outcome = stage.handle_click(132, 132);

        assert_eq!(outcome, ClickOutcome::BallShot { game_over: true });
        assert_eq!(stage.screen, Screen::GameOver);
        assert_eq!(stage.last_elapsed_seconds, 2, "integer division by frame rate");
        assert_eq!(stage.elapsed_frames, 0, "frame counter reset at game over");
        assert_eq!(stage.balls.len(), 1, "odd balls survive the round");
        assert_even_invariant(&stage);
    }

    #[test]
    fn test_replay_from_game_over_spawns_fresh_batch() {
        let mut stage = stage_with_seed(8);
        stage.screen = Screen::GameOver;
        stage.elapsed_frames = 77;
        let (rx, ry) = (stage.replay_button.x, stage.replay_button.y);

        let outcome = stage.handle_click(rx, ry);

        assert_eq!(outcome, ClickOutcome::GameStarted);
        assert_eq!(stage.screen, Screen::GameScreen);
        assert_eq!(stage.balls.len(), BALL_BATCH_SIZE);
        assert_eq!(stage.elapsed_frames, 0);
        assert_even_invariant(&stage);
    }

    #[test]
    fn test_timer_only_accrues_on_game_screen() {
        let mut stage = stage_with_seed(9);

        stage.update(10, 10);
        stage.update(10, 10);
        assert_eq!(stage.elapsed_frames, 0, "menu frames do not count");

        stage.start_game();
        for _ in 0..120 {
            stage.update(10, 10);
        }
        assert_eq!(stage.elapsed_frames, 120);
        assert_eq!(stage.elapsed_seconds(), 2);
    }

    #[test]
    fn test_update_moves_balls_and_keeps_is_even_stable() {
        let mut stage = stage_with_seed(10);
        stage.start_game();
        let before: Vec<(u8, bool)> = stage.balls.iter().map(|b| (b.digit, b.is_even)).collect();

        for _ in 0..300 {
            stage.update(0, 0);
        }

        let after: Vec<(u8, bool)> = stage.balls.iter().map(|b| (b.digit, b.is_even)).collect();
        assert_eq!(before, after, "digits and parity never mutate");
        assert_even_invariant(&stage);
    }

    #[test]
    fn test_hover_follows_pointer_on_menu() {
        let mut stage = stage_with_seed(11);
        let (px, py) = (stage.play_button.x, stage.play_button.y);

        stage.update(px, py);
        assert!(stage.play_button.hovered);
        assert!(!stage.exit_button.hovered);

        stage.update(5, 5);
        assert!(!stage.play_button.hovered);
        assert!(!stage.exit_button.hovered);
    }

    #[test]
    fn test_crosshair_tracks_pointer_every_frame() {
        let mut stage = stage_with_seed(12);
        stage.update(321, 123);
        assert_eq!((stage.crosshair.x, stage.crosshair.y), (321, 123));

        stage.start_game();
        stage.update(44, 55);
        assert_eq!((stage.crosshair.x, stage.crosshair.y), (44, 55));
    }

    #[test]
    fn test_end_to_end_seeded_round() {
        // Full round against a seeded spawn batch: shoot even balls (in
        // spawn order, skipping any momentarily shadowed by an earlier
        // ball) until the round is cleared.
        let mut stage = stage_with_seed(42);
        stage.start_game();

        let initial_even = stage.remaining_even_balls;
        let initial_odd = stage.total_balls - initial_even;
        assert!(initial_even > 0, "seeded batch contains even balls");

        let mut safety = 0;
        while stage.screen == Screen::GameScreen {
            // First even ball that is also the first hit at its own center
            let target = stage.balls.iter().enumerate().find_map(|(i, ball)| {
                if !ball.is_even {
                    return None;
                }
                let (cx, cy) = ball.center();
                let mut probe = Crosshair::new();
                probe.set_position(cx, cy);
                (first_hit(&probe, &stage.balls) == Some(i)).then_some((cx, cy))
            });

            match target {
                Some((cx, cy)) => {
                    let outcome = stage.handle_click(cx, cy);
                    assert!(matches!(outcome, ClickOutcome::BallShot { .. }));
                    assert_even_invariant(&stage);
                }
                None => {
                    // Every even ball is shadowed right now; let the batch
                    // drift apart and try again
                    stage.update(0, 0);
                }
            }

            safety += 1;
            assert!(safety < 10_000, "round did not finish");
        }

        assert_eq!(stage.screen, Screen::GameOver);
        assert_eq!(stage.remaining_even_balls, 0);
        assert_eq!(stage.balls.len(), initial_odd, "only odd balls remain");
        assert!(stage.balls.iter().all(|b| !b.is_even));
        assert_eq!(stage.elapsed_frames, 0);
    }
}

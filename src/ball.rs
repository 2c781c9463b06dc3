//! Ball entity: spawning, movement, and edge bouncing
//!
//! Balls are plain data structs. They carry no texture references so the
//! whole gameplay layer can be unit tested without an SDL context; the
//! renderer looks up the right sprite from the ball's color tag and digit.

use crate::collision::Collidable;
use rand::Rng;
use sdl2::rect::Rect;

/// Ball sprite size in pixels (square)
pub const BALL_SIZE: u32 = 64;

/// Inset from the window edges inside which ball centers spawn,
/// so fresh balls never sit flush with a boundary
pub const SPAWN_MARGIN: i32 = 64;

/// Initial speed range per axis, in pixels per frame
const MIN_SPEED: i32 = 1;
const MAX_SPEED: i32 = 4;

/// Cosmetic ball sprite variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallColor {
    Blue,
    Red,
}

/// A numbered ball drifting around the game screen
///
/// `is_even` is derived from `digit` once at spawn and never changes.
/// Position is the top-left corner of the sprite's bounding box.
#[derive(Debug, Clone)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    pub digit: u8,
    pub is_even: bool,
    pub color: BallColor,
    pub width: u32,
    pub height: u32,
}

impl Ball {
    /// Spawns a single ball at a random position inside the spawn margin.
    ///
    /// Velocity components are random in `1..=4` and always start positive,
    /// so every ball initially drifts toward the bottom-right. This matches
    /// the observed gameplay distribution and is kept on purpose.
    pub fn spawn(screen_width: u32, screen_height: u32, rng: &mut impl Rng) -> Self {
        let center_x = rng.random_range(SPAWN_MARGIN..screen_width as i32 - SPAWN_MARGIN);
        let center_y = rng.random_range(SPAWN_MARGIN..screen_height as i32 - SPAWN_MARGIN);

        let digit: u8 = rng.random_range(0..10);
        let color = if rng.random_bool(0.5) {
            BallColor::Blue
        } else {
            BallColor::Red
        };

        Ball {
            x: center_x - (BALL_SIZE / 2) as i32,
            y: center_y - (BALL_SIZE / 2) as i32,
            vx: rng.random_range(MIN_SPEED..=MAX_SPEED),
            vy: rng.random_range(MIN_SPEED..=MAX_SPEED),
            digit,
            is_even: digit % 2 == 0,
            color,
            width: BALL_SIZE,
            height: BALL_SIZE,
        }
    }

    /// Spawns a full batch of balls in insertion order.
    ///
    /// The order matters: shot resolution picks the first intersecting
    /// ball in this order, not the closest or topmost one.
    pub fn spawn_batch(
        count: usize,
        screen_width: u32,
        screen_height: u32,
        rng: &mut impl Rng,
    ) -> Vec<Ball> {
        (0..count)
            .map(|_| Ball::spawn(screen_width, screen_height, rng))
            .collect()
    }

    /// Advances the ball one frame, bouncing off the window edges.
    ///
    /// The left/top bounce threshold sits a quarter sprite-width inside the
    /// boundary (soft inward bounce); the right/bottom threshold is the
    /// boundary itself. Each check also requires the ball to be moving
    /// outward, so a crossing flips the velocity exactly once instead of
    /// oscillating while the box is past the threshold.
    pub fn update(&mut self, screen_width: u32, screen_height: u32) {
        let margin_x = (self.width / 4) as i32;
        let margin_y = (self.height / 4) as i32;
        let right = self.x + self.width as i32;
        let bottom = self.y + self.height as i32;

        if (self.x <= margin_x && self.vx < 0) || (right >= screen_width as i32 && self.vx > 0) {
            self.vx = -self.vx;
        }
        if (self.y <= margin_y && self.vy < 0) || (bottom >= screen_height as i32 && self.vy > 0) {
            self.vy = -self.vy;
        }

        self.x += self.vx;
        self.y += self.vy;
    }

    /// Center point of the ball's bounding box
    pub fn center(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }
}

impl Collidable for Ball {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const W: u32 = 1200;
    const H: u32 = 600;

    fn ball_at(x: i32, y: i32, vx: i32, vy: i32) -> Ball {
        Ball {
            x,
            y,
            vx,
            vy,
            digit: 3,
            is_even: false,
            color: BallColor::Red,
            width: BALL_SIZE,
            height: BALL_SIZE,
        }
    }

    #[test]
    fn test_spawn_derives_is_even_from_digit() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..100 {
            let ball = Ball::spawn(W, H, &mut rng);
            assert_eq!(ball.is_even, ball.digit % 2 == 0);
            assert!(ball.digit <= 9);
        }
    }

    #[test]
    fn test_spawn_centers_respect_margin() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let ball = Ball::spawn(W, H, &mut rng);
            let (cx, cy) = ball.center();
            assert!(cx >= SPAWN_MARGIN && cx < W as i32 - SPAWN_MARGIN);
            assert!(cy >= SPAWN_MARGIN && cy < H as i32 - SPAWN_MARGIN);
        }
    }

    #[test]
    fn test_spawn_velocity_positive_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..100 {
            let ball = Ball::spawn(W, H, &mut rng);
            assert!((1..=4).contains(&ball.vx));
            assert!((1..=4).contains(&ball.vy));
        }
    }

    #[test]
    fn test_spawn_batch_size_and_order_is_stable() {
        let mut rng_a = Pcg32::seed_from_u64(5);
        let mut rng_b = Pcg32::seed_from_u64(5);
        let batch_a = Ball::spawn_batch(20, W, H, &mut rng_a);
        let batch_b = Ball::spawn_batch(20, W, H, &mut rng_b);

        assert_eq!(batch_a.len(), 20);
        for (a, b) in batch_a.iter().zip(&batch_b) {
            assert_eq!((a.x, a.y, a.vx, a.vy, a.digit), (b.x, b.y, b.vx, b.vy, b.digit));
        }
    }

    #[test]
    fn test_bounce_left_margin_flips_once() {
        // Inward margin is BALL_SIZE / 4 = 16
        let mut ball = ball_at(10, 300, -3, 0);

        ball.update(W, H);
        assert_eq!(ball.vx, 3, "crossing the margin flips the velocity");
        assert_eq!(ball.x, 13);

        // Still at or inside the margin, but now moving inward: no second flip
        ball.update(W, H);
        assert_eq!(ball.vx, 3);
        assert_eq!(ball.x, 16);
    }

    #[test]
    fn test_bounce_right_edge_flips_once() {
        let right_edge = W as i32 - BALL_SIZE as i32;
        let mut ball = ball_at(right_edge + 2, 300, 4, 0);

        ball.update(W, H);
        assert_eq!(ball.vx, -4);

        ball.update(W, H);
        assert_eq!(ball.vx, -4, "no oscillation while past the boundary");
    }

    #[test]
    fn test_bounce_vertical_symmetric() {
        let mut ball = ball_at(300, 8, 0, -2);
        ball.update(W, H);
        assert_eq!(ball.vy, 2);

        let mut ball = ball_at(300, H as i32 - BALL_SIZE as i32 + 1, 0, 3);
        ball.update(W, H);
        assert_eq!(ball.vy, -3);
    }

    #[test]
    fn test_ball_away_from_edges_moves_straight() {
        let mut ball = ball_at(400, 300, 2, 3);
        ball.update(W, H);
        assert_eq!((ball.x, ball.y), (402, 303));
        assert_eq!((ball.vx, ball.vy), (2, 3));
    }
}

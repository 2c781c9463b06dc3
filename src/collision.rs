//! AABB collision detection
//!
//! The crosshair, balls, and buttons all participate in the same
//! rectangle-vs-rectangle test through the `Collidable` trait. The only
//! query the game needs is "which target did the pointer hit first" —
//! shot resolution is defined in terms of spawn-batch insertion order,
//! not z-order or distance.

use sdl2::rect::Rect;

/// Trait for entities that participate in collision detection.
///
/// The returned `Rect` must match the entity's on-screen bounding box.
pub trait Collidable {
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Edges that merely touch do not count as an intersection (exclusive
/// upper bounds). O(1), just four integer comparisons.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the index of the first target in iteration order whose bounds
/// intersect `entity`, or `None` if nothing was hit.
///
/// Iteration order is the collection's insertion order. For balls that is
/// the spawn-batch order, so an earlier ball shadows a later one even when
/// the later ball is drawn on top.
pub fn first_hit<T: Collidable>(entity: &impl Collidable, targets: &[T]) -> Option<usize> {
    let entity_bounds = entity.get_bounds();

    targets
        .iter()
        .position(|target| aabb_intersect(&entity_bounds, &target.get_bounds()))
}

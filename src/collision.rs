//! Collision capability shared by every solid surface.

use crate::ball::Ball;
use crate::basis::{Point, Velocity};
use crate::environment::SurfaceId;
use crate::rect::Rect;

/// Anything a moving ball can strike: a hit-box plus a reflection rule.
pub trait Collidable {
    fn collision_rect(&self) -> &Rect;

    /// Reflection rule: the collision point lies on the hit-box boundary, the
    /// return value is the outgoing velocity. Returning the incoming velocity
    /// unchanged means the surface declined to reflect (degenerate touch).
    fn hit(&mut self, hitter: &Ball, collision_point: Point, current_velocity: Velocity)
        -> Velocity;
}

/// Result of a broad-phase query: where the trajectory first crosses a
/// surface, and which surface it was. Produced fresh per query, never cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionInfo {
    collision_point: Point,
    surface: SurfaceId,
}

impl CollisionInfo {
    pub fn new(collision_point: Point, surface: SurfaceId) -> Self {
        Self {
            collision_point,
            surface,
        }
    }

    pub fn collision_point(&self) -> Point {
        self.collision_point
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }
}

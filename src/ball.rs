//! The moving body: a ball that advances one trajectory step per tick.

use crate::basis::{approx_eq, Point, Velocity};
use crate::environment::Environment;
use crate::line::Line;

/// Distance a ball stops short of a collision point, so the next tick starts
/// strictly outside the struck surface.
const COLLISION_TOLERANCE: f64 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    center: Point,
    radius: f64,
    velocity: Velocity,
}

impl Ball {
    pub const fn new(center: Point, radius: f64, velocity: Velocity) -> Self {
        Self {
            center,
            radius,
            velocity,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// One simulation tick: either a full-step translation, or a reflection
    /// plus a tolerance-corrected translation when a surface is struck.
    pub fn step(&mut self, environment: &mut Environment) {
        if approx_eq(self.velocity.speed(), 0.0) {
            // A stationary ball has a single-point trajectory; skipping the
            // query also keeps the tolerance fraction well-defined.
            return;
        }

        let trajectory = Line::new(self.center, self.velocity.apply_to(self.center));
        let Some(collision) = environment.closest_collision(&trajectory) else {
            self.center = trajectory.end();
            return;
        };

        let collision_point = collision.collision_point();
        let new_velocity = environment.hit(
            collision.surface(),
            self,
            collision_point,
            self.velocity,
        );

        if new_velocity.coincides(self.velocity) {
            // The surface declined to reflect (degenerate touch): ride the
            // full step through.
            self.center = trajectory.end();
        } else {
            // Stop a fixed tolerance before the collision point, along the
            // incoming direction of travel.
            let fraction = COLLISION_TOLERANCE / self.velocity.speed();
            self.center = Point::new(
                collision_point.x() - self.velocity.dx() * fraction,
                collision_point.y() - self.velocity.dy() * fraction,
            );
        }
        self.velocity = new_velocity;
    }
}

//! Continuous 2D collision engine for a brick-breaking arcade game.
//!
//! Each tick a ball projects its trajectory segment, the environment scans
//! every live surface for the closest crossing with its hit-box, and the
//! struck surface's reflection rule turns the incoming velocity into the
//! outgoing one. Rendering, input and frame pacing are collaborators of this
//! crate, not part of it; the binary target is a headless stand-in for them.

mod ball;
mod basis;
mod collision;
mod environment;
mod events;
mod line;
mod rect;
mod surface;

pub use ball::Ball;
pub use basis::{approx_eq, approx_gt, Angle, Point, Velocity, EPSILON};
pub use collision::{Collidable, CollisionInfo};
pub use environment::{Environment, EnvironmentError, SurfaceId};
pub use events::{BlockRemover, Counter, HitListener, HitLogger, RemovalQueue, ScoreTracker};
pub use line::{Line, Orientation};
pub use rect::Rect;
pub use surface::{Block, Paddle, Surface};

//! Registry of the live collision surfaces of one level.

use log::warn;
use thiserror::Error;

use crate::ball::Ball;
use crate::basis::{Point, Velocity};
use crate::collision::{Collidable, CollisionInfo};
use crate::line::Line;
use crate::surface::{Paddle, Surface};

/// Stable handle to a registered surface. Handles are never reused, so a
/// handle kept across a removal stays unambiguous (and merely goes stale).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SurfaceId(usize);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("no surface registered under {0:?}")]
    UnknownSurface(SurfaceId),
    #[error("surface {0:?} is not a paddle")]
    NotAPaddle(SurfaceId),
}

/// All currently-live surfaces, addressed by [`SurfaceId`]. The environment
/// is the sole mutator of its surfaces; membership changes only between
/// ticks, never during a query.
#[derive(Default)]
pub struct Environment {
    surfaces: Vec<Option<Surface>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, surface: impl Into<Surface>) -> SurfaceId {
        let id = SurfaceId(self.surfaces.len());
        let mut surface = surface.into();
        surface.set_id(id);
        self.surfaces.push(Some(surface));
        id
    }

    /// Removes and returns a surface. A stale or foreign handle is logged and
    /// ignored, not treated as a fault.
    pub fn remove(&mut self, id: SurfaceId) -> Option<Surface> {
        let removed = self.surfaces.get_mut(id.0).and_then(Option::take);
        if removed.is_none() {
            warn!("attempted to remove unregistered surface {id:?}");
        }
        removed
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Surface> {
        self.surfaces.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Typed access for the input glue that steers the paddle.
    pub fn paddle_mut(&mut self, id: SurfaceId) -> Result<&mut Paddle, EnvironmentError> {
        match self.surfaces.get_mut(id.0).and_then(Option::as_mut) {
            Some(Surface::Paddle(paddle)) => Ok(paddle),
            Some(Surface::Block(_)) => Err(EnvironmentError::NotAPaddle(id)),
            None => Err(EnvironmentError::UnknownSurface(id)),
        }
    }

    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (SurfaceId(i), s)))
    }

    pub fn len(&self) -> usize {
        self.surfaces.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.iter().all(Option::is_none)
    }

    /// Broad-phase query: the closest crossing between the trajectory and any
    /// live surface's hit-box, measured from the trajectory start. Surfaces
    /// already overlapping the start are skipped. On an exact distance tie
    /// the first-registered surface wins.
    pub fn closest_collision(&self, trajectory: &Line) -> Option<CollisionInfo> {
        let mut closest = None;
        let mut min_distance = f64::MAX;

        for (id, surface) in self.surfaces() {
            let Some(point) = trajectory.closest_intersection_to_start(surface.collision_rect())
            else {
                continue;
            };
            let distance = trajectory.start().distance(point);
            if distance < min_distance {
                min_distance = distance;
                closest = Some(CollisionInfo::new(point, id));
            }
        }
        closest
    }

    /// Runs the struck surface's reflection rule. A stale handle is logged
    /// and the velocity passed through unchanged.
    pub fn hit(
        &mut self,
        id: SurfaceId,
        hitter: &Ball,
        collision_point: Point,
        current_velocity: Velocity,
    ) -> Velocity {
        match self.surfaces.get_mut(id.0).and_then(Option::as_mut) {
            Some(surface) => surface.hit(hitter, collision_point, current_velocity),
            None => {
                warn!("hit dispatched to unregistered surface {id:?}");
                current_velocity
            }
        }
    }
}

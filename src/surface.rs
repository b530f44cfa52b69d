//! Solid surfaces a ball can strike: static blocks and the player paddle.
//!
//! Both share one face cascade; the paddle replaces only the upper-edge
//! branch with its zone-based rebound.

use std::mem;

use crate::ball::Ball;
use crate::basis::{Angle, Point, Velocity};
use crate::collision::Collidable;
use crate::environment::SurfaceId;
use crate::events::HitListener;
use crate::rect::Rect;

/// Zones across the paddle top face.
const SECTIONS: usize = 5;
/// Rebound angle of the leftmost zone; the rightmost mirrors it above 360°.
const EDGE_ANGLE_DEG: f64 = 300.0;
const UP_ANGLE_DEG: f64 = 360.0;

/// The closed set of surface kinds an environment can hold.
pub enum Surface {
    Block(Block),
    Paddle(Paddle),
}

impl Surface {
    pub fn id(&self) -> Option<SurfaceId> {
        match self {
            Surface::Block(block) => block.id(),
            Surface::Paddle(paddle) => paddle.block.id(),
        }
    }

    pub(crate) fn set_id(&mut self, id: SurfaceId) {
        match self {
            Surface::Block(block) => block.set_id(id),
            Surface::Paddle(paddle) => paddle.block.set_id(id),
        }
    }
}

impl Collidable for Surface {
    fn collision_rect(&self) -> &Rect {
        match self {
            Surface::Block(block) => block.collision_rect(),
            Surface::Paddle(paddle) => paddle.collision_rect(),
        }
    }

    fn hit(
        &mut self,
        hitter: &Ball,
        collision_point: Point,
        current_velocity: Velocity,
    ) -> Velocity {
        match self {
            Surface::Block(block) => block.hit(hitter, collision_point, current_velocity),
            Surface::Paddle(paddle) => paddle.hit(hitter, collision_point, current_velocity),
        }
    }
}

impl From<Block> for Surface {
    fn from(value: Block) -> Self {
        Surface::Block(value)
    }
}

impl From<Paddle> for Surface {
    fn from(value: Paddle) -> Self {
        Surface::Paddle(value)
    }
}

/// A static rectangular surface with an ordered list of hit observers.
pub struct Block {
    rect: Rect,
    id: Option<SurfaceId>,
    listeners: Vec<Box<dyn HitListener>>,
}

impl Block {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            id: None,
            listeners: Vec::new(),
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Handle under which the block is registered; `None` until it joins an
    /// environment.
    pub fn id(&self) -> Option<SurfaceId> {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: SurfaceId) {
        self.id = Some(id);
    }

    pub fn add_hit_listener(&mut self, listener: Box<dyn HitListener>) {
        self.listeners.push(listener);
    }

    /// Notifies every registered listener, in registration order. The list
    /// is detached while iterating so listeners observe the block without
    /// aliasing it.
    fn notify_hit(&mut self, hitter: &Ball) {
        let mut listeners = mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener.on_hit(self, hitter);
        }
        self.listeners = listeners;
    }
}

impl Collidable for Block {
    fn collision_rect(&self) -> &Rect {
        &self.rect
    }

    fn hit(
        &mut self,
        hitter: &Ball,
        collision_point: Point,
        current_velocity: Velocity,
    ) -> Velocity {
        let outgoing = reflect_off_faces(&self.rect, collision_point, current_velocity);
        self.notify_hit(hitter);
        outgoing
    }
}

/// A player-steered surface. Side and lower hits behave like a block; top
/// hits rebound at an angle picked by the struck zone, conserving speed.
pub struct Paddle {
    block: Block,
    move_speed: f64,
    left_bound: f64,
    right_bound: f64,
}

impl Paddle {
    pub fn new(rect: Rect, move_speed: f64, left_bound: f64, right_bound: f64) -> Self {
        Self {
            block: Block::new(rect),
            move_speed,
            left_bound,
            right_bound,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.block.rect
    }

    pub fn add_hit_listener(&mut self, listener: Box<dyn HitListener>) {
        self.block.add_hit_listener(listener);
    }

    pub fn middle_x(&self) -> f64 {
        self.block.rect.left() + self.block.rect.width() / 2.0
    }

    pub fn move_left(&mut self) {
        let distance = self.move_speed.min(self.block.rect.left() - self.left_bound);
        self.shift(-distance);
    }

    pub fn move_right(&mut self) {
        let distance = self
            .move_speed
            .min(self.right_bound - self.block.rect.right());
        self.shift(distance);
    }

    fn shift(&mut self, dx: f64) {
        self.block.rect = self.block.rect.move_x(dx);
    }

    fn rebound_from_top(&self, collision_point: Point, current_velocity: Velocity) -> Velocity {
        let rect = &self.block.rect;
        let offset = collision_point.x() - rect.left();
        let section_width = rect.width() / SECTIONS as f64;
        let section = ((offset / section_width) as i64).clamp(0, SECTIONS as i64 - 1);

        let step = 2.0 * (UP_ANGLE_DEG - EDGE_ANGLE_DEG) / (SECTIONS - 1) as f64;
        let angle = Angle::from_deg(EDGE_ANGLE_DEG + step * section as f64);
        Velocity::from_angle_and_speed(angle, current_velocity.speed())
    }
}

impl Collidable for Paddle {
    fn collision_rect(&self) -> &Rect {
        &self.block.rect
    }

    fn hit(
        &mut self,
        hitter: &Ball,
        collision_point: Point,
        current_velocity: Velocity,
    ) -> Velocity {
        let outgoing = if self.block.rect.upper_edge().contains(collision_point)
            && current_velocity.dy() > 0.0
        {
            self.rebound_from_top(collision_point, current_velocity)
        } else {
            reflect_off_faces(&self.block.rect, collision_point, current_velocity)
        };
        self.block.notify_hit(hitter);
        outgoing
    }
}

/// Sign-consistent face cascade. An edge reflects only a body actually moving
/// into it, which resolves corner hits (a point on two edges) and leaves the
/// velocity unchanged on a degenerate inside touch.
fn reflect_off_faces(rect: &Rect, collision_point: Point, v: Velocity) -> Velocity {
    let (dx, dy) = (v.dx(), v.dy());
    if rect.upper_edge().contains(collision_point) && dy > 0.0 {
        Velocity::new(dx, -dy.abs())
    } else if rect.left_edge().contains(collision_point) && dx > 0.0 {
        Velocity::new(-dx.abs(), dy)
    } else if rect.right_edge().contains(collision_point) && dx < 0.0 {
        Velocity::new(dx.abs(), dy)
    } else if rect.lower_edge().contains(collision_point) && dy < 0.0 {
        Velocity::new(dx, dy.abs())
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::basis::EPSILON;
    use crate::events::Counter;

    struct CountingListener {
        hits: Counter,
    }

    impl HitListener for CountingListener {
        fn on_hit(&mut self, _being_hit: &Block, _hitter: &Ball) {
            self.hits.increase(1);
        }
    }

    fn ball() -> Ball {
        Ball::new(Point::new(0.0, 0.0), 5.0, Velocity::default())
    }

    #[rstest]
    #[case::upper(Point::new(5.0, 0.0), Velocity::new(0.0, 10.0), Velocity::new(0.0, -10.0))]
    #[case::left(Point::new(0.0, 5.0), Velocity::new(10.0, 0.0), Velocity::new(-10.0, 0.0))]
    #[case::right(Point::new(10.0, 5.0), Velocity::new(-10.0, 0.0), Velocity::new(10.0, 0.0))]
    #[case::lower(Point::new(5.0, 10.0), Velocity::new(0.0, -10.0), Velocity::new(0.0, 10.0))]
    #[case::corner_moving_down_right(
        Point::new(0.0, 0.0),
        Velocity::new(10.0, 10.0),
        Velocity::new(10.0, -10.0)
    )]
    #[case::corner_moving_up_right(
        Point::new(0.0, 0.0),
        Velocity::new(10.0, -10.0),
        Velocity::new(-10.0, -10.0)
    )]
    #[case::upper_moving_up_declined(
        Point::new(5.0, 0.0),
        Velocity::new(0.0, -10.0),
        Velocity::new(0.0, -10.0)
    )]
    fn test_block_reflection(
        #[case] collision_point: Point,
        #[case] incoming: Velocity,
        #[case] expected: Velocity,
    ) {
        let mut block = Block::new(Rect::from_coords(0.0, 0.0, 10.0, 10.0));
        let outgoing = block.hit(&ball(), collision_point, incoming);
        assert_abs_diff_eq!(outgoing, expected, epsilon = EPSILON);
    }

    #[test]
    fn test_block_notifies_listeners_on_every_hit() {
        let hits = Counter::default();
        let mut block = Block::new(Rect::from_coords(0.0, 0.0, 10.0, 10.0));
        block.add_hit_listener(Box::new(CountingListener { hits: hits.clone() }));

        block.hit(&ball(), Point::new(5.0, 0.0), Velocity::new(0.0, 10.0));
        assert_eq!(hits.value(), 1);

        // A declined (degenerate) touch still counts as being struck.
        block.hit(&ball(), Point::new(5.0, 0.0), Velocity::new(0.0, -10.0));
        assert_eq!(hits.value(), 2);
    }

    #[rstest]
    #[case::leftmost_zone(10.0, 300.0)]
    #[case::second_zone(30.0, 330.0)]
    #[case::middle_zone(50.0, 360.0)]
    #[case::fourth_zone(70.0, 390.0)]
    #[case::rightmost_zone(90.0, 420.0)]
    #[case::zone_boundary(40.0, 360.0)]
    fn test_paddle_top_zones(#[case] strike_x: f64, #[case] angle_deg: f64) {
        let mut paddle = Paddle::new(Rect::from_coords(0.0, 560.0, 100.0, 10.0), 10.0, 0.0, 800.0);
        let incoming = Velocity::new(4.0, 3.0);

        let outgoing = paddle.hit(&ball(), Point::new(strike_x, 560.0), incoming);
        let expected = Velocity::from_angle_and_speed(Angle::from_deg(angle_deg), 5.0);
        assert_abs_diff_eq!(outgoing, expected, epsilon = EPSILON);
        assert_abs_diff_eq!(outgoing.speed(), incoming.speed(), epsilon = EPSILON);
    }

    #[test]
    fn test_paddle_center_rebound_is_vertical() {
        // Width 200 centered on x = 400: a center strike goes straight up no
        // matter the incoming horizontal component.
        let mut paddle = Paddle::new(Rect::from_coords(300.0, 560.0, 200.0, 10.0), 10.0, 0.0, 800.0);
        let incoming = Velocity::new(7.0, 4.0);

        let outgoing = paddle.hit(&ball(), Point::new(400.0, 560.0), incoming);
        assert_abs_diff_eq!(outgoing.dx(), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(outgoing.dy(), -incoming.speed(), epsilon = EPSILON);
    }

    #[test]
    fn test_paddle_side_hits_reflect_like_a_block() {
        let mut paddle = Paddle::new(Rect::from_coords(300.0, 560.0, 200.0, 10.0), 10.0, 0.0, 800.0);

        let outgoing = paddle.hit(&ball(), Point::new(300.0, 565.0), Velocity::new(6.0, 1.0));
        assert_abs_diff_eq!(outgoing, Velocity::new(-6.0, 1.0), epsilon = EPSILON);

        let outgoing = paddle.hit(&ball(), Point::new(500.0, 565.0), Velocity::new(-6.0, 1.0));
        assert_abs_diff_eq!(outgoing, Velocity::new(6.0, 1.0), epsilon = EPSILON);
    }

    #[test]
    fn test_paddle_movement_respects_bounds() {
        let mut paddle = Paddle::new(Rect::from_coords(95.0, 560.0, 20.0, 10.0), 10.0, 0.0, 200.0);

        paddle.move_left();
        assert_abs_diff_eq!(paddle.rect().left(), 85.0);

        for _ in 0..20 {
            paddle.move_left();
        }
        assert_abs_diff_eq!(paddle.rect().left(), 0.0);

        for _ in 0..30 {
            paddle.move_right();
        }
        assert_abs_diff_eq!(paddle.rect().right(), 200.0);
        assert_abs_diff_eq!(paddle.middle_x(), 190.0);
    }
}

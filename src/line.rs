//! Line segments: orientation tests, containment and exact intersection.
//!
//! Intersection uses the classic orientation method. Vertical segments carry
//! the NaN slope sentinel, which keeps them out of the `y = m*x + b` algebra
//! and forces every comparison through an explicit branch.

use crate::basis::{approx_eq, Point};
use crate::rect::Rect;

/// Rotation of a point relative to a directed segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
    Colinear,
}

#[derive(Clone, Copy, Debug)]
pub struct Line {
    start: Point,
    end: Point,
    slope: f64,
    intercept: f64,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        let slope = start.slope_to(end);
        let intercept = if slope.is_nan() {
            f64::NAN
        } else {
            start.y() - slope * start.x()
        };
        Self {
            start,
            end,
            slope,
            intercept,
        }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// NaN when the segment is vertical.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    pub fn middle(&self) -> Point {
        Point::new(
            (self.start.x() + self.end.x()) / 2.0,
            (self.start.y() + self.end.y()) / 2.0,
        )
    }

    /// Same two endpoints, in either direction.
    pub fn same_endpoints(&self, other: &Line) -> bool {
        (self.start.coincides(other.start) && self.end.coincides(other.end))
            || (self.start.coincides(other.end) && self.end.coincides(other.start))
    }

    pub fn orientation(&self, p: Point) -> Orientation {
        if self.end.coincides(p) {
            return Orientation::Colinear;
        }

        let point_slope = self.end.slope_to(p);

        if self.slope.is_nan() {
            // The segment is vertical; the slope sentinel cannot be compared
            // arithmetically.
            if point_slope.is_nan() {
                Orientation::Colinear
            } else if (p.x() > self.end.x()) == (self.end.y() > self.start.y()) {
                Orientation::Clockwise
            } else {
                Orientation::CounterClockwise
            }
        } else if point_slope.is_nan() {
            // Only the segment end -> point direction is vertical.
            if (self.start.x() > p.x()) == (self.end.y() < p.y()) {
                Orientation::Clockwise
            } else {
                Orientation::CounterClockwise
            }
        } else if approx_eq(self.slope, point_slope) {
            Orientation::Colinear
        } else {
            let direction = self.end.x() - self.start.x();
            if (direction > 0.0) == ((self.slope > point_slope) == (p.x() > self.end.x())) {
                Orientation::Clockwise
            } else {
                Orientation::CounterClockwise
            }
        }
    }

    /// A point lies on the segment iff its distances to both endpoints sum to
    /// the segment length; this also rejects colinear points outside the span.
    pub fn contains(&self, p: Point) -> bool {
        approx_eq(p.distance(self.start) + p.distance(self.end), self.length())
    }

    pub fn intersects(&self, other: &Line) -> bool {
        let this_start = self.orientation(other.start);
        let this_end = self.orientation(other.end);
        let other_start = other.orientation(self.start);
        let other_end = other.orientation(self.end);

        if this_start != this_end && other_start != other_end {
            // The endpoints of each segment fall on opposite sides of the
            // other: a strict crossing.
            return true;
        }
        if this_start == Orientation::Colinear && this_end == Orientation::Colinear {
            // All four points share one line; the segments intersect iff the
            // spans touch.
            return self.contains(other.start)
                || self.contains(other.end)
                || other.contains(self.start)
                || other.contains(self.end);
        }
        false
    }

    /// The unique intersection point of two segments, or `None` when they do
    /// not intersect at all or overlap in more than one point.
    pub fn intersection_with(&self, other: &Line) -> Option<Point> {
        if !self.intersects(other) {
            return None;
        }

        // A zero-length segment intersects in its single point.
        if self.start.coincides(self.end) {
            return Some(self.start);
        }
        if other.start.coincides(other.end) {
            return Some(other.start);
        }

        if self.orientation(other.start) == Orientation::Colinear
            && self.orientation(other.end) == Orientation::Colinear
        {
            // Colinear overlap. A unique point exists only when exactly one
            // endpoint pair coincides and neither remaining endpoint lies
            // inside the opposite segment.
            return if self.start.coincides(other.start)
                && !other.contains(self.end)
                && !self.contains(other.end)
            {
                Some(self.start)
            } else if self.start.coincides(other.end)
                && !other.contains(self.end)
                && !self.contains(other.start)
            {
                Some(self.start)
            } else if self.end.coincides(other.end)
                && !other.contains(self.start)
                && !self.contains(other.start)
            {
                Some(self.end)
            } else if self.end.coincides(other.start)
                && !other.contains(self.start)
                && !self.contains(other.end)
            {
                Some(self.end)
            } else {
                None
            };
        }

        if self.slope.is_nan() {
            // This segment is vertical: its x pins the solution.
            Some(Point::new(
                self.start.x(),
                other.slope * self.start.x() + other.intercept,
            ))
        } else if other.slope.is_nan() {
            Some(Point::new(
                other.start.x(),
                self.slope * other.start.x() + self.intercept,
            ))
        } else {
            let x = (other.intercept - self.intercept) / (self.slope - other.slope);
            Some(Point::new(x, self.slope * x + self.intercept))
        }
    }

    /// Closest crossing between this segment and the rectangle's boundary,
    /// measured from the segment start. `None` when the start is strictly
    /// inside the rectangle: an already-overlapping segment makes no new
    /// crossing.
    pub fn closest_intersection_to_start(&self, rect: &Rect) -> Option<Point> {
        if rect.is_point_inside(self.start) {
            return None;
        }

        let mut closest = None;
        let mut min_distance = f64::MAX;
        for p in rect.intersection_points(self) {
            let distance = self.start.distance(p);
            if distance <= min_distance {
                min_distance = distance;
                closest = Some(p);
            }
        }
        closest
    }

    /// Point at proportion `t` of the way from the end towards the start (on
    /// the carrying line, not clamped to the segment).
    pub fn point_from_proportion(&self, t: f64) -> Point {
        Point::new(
            self.start.x() * t + self.end.x() * (1.0 - t),
            self.start.y() * t + self.end.y() * (1.0 - t),
        )
    }
}

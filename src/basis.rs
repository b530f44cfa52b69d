//! Basic building blocks: tolerant float comparisons, points, angles and
//! motion vectors.

use std::f64::consts::PI;

/// Tolerance applied to every coordinate, slope and distance comparison.
pub const EPSILON: f64 = 1e-9;

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Strict `a > b`, where values within [`EPSILON`] of each other are never
/// "greater".
pub fn approx_gt(a: f64, b: f64) -> bool {
    a - EPSILON > b
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn distance(&self, other: Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn same_x(&self, other: Self) -> bool {
        approx_eq(self.x, other.x)
    }

    pub fn same_y(&self, other: Self) -> bool {
        approx_eq(self.y, other.y)
    }

    /// Tolerant equality, unlike the derived exact `PartialEq`.
    pub fn coincides(&self, other: Self) -> bool {
        self.same_x(other) && self.same_y(other)
    }

    /// Slope of the line through both points, or the NaN sentinel when that
    /// line is vertical.
    pub fn slope_to(&self, other: Self) -> f64 {
        if self.same_x(other) {
            return f64::NAN;
        }
        (self.y - other.y) / (self.x - other.x)
    }

    pub fn move_x(&self, dx: f64) -> Self {
        Self::new(self.x + dx, self.y)
    }

    pub fn move_y(&self, dy: f64) -> Self {
        Self::new(self.x, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    pub fn new(radians: f64) -> Self {
        Self(radians)
    }

    pub fn from_deg(degree: f64) -> Self {
        Self(degree * PI / 180.0)
    }

    pub fn to_deg(self) -> f64 {
        (self.0 * (180.0 / PI) + 360.0) % 360.0
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

/// Change in position per simulation tick on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Angle 0° points straight up and grows clockwise.
    pub fn from_angle_and_speed(angle: Angle, speed: f64) -> Self {
        let radians = f64::from(angle);
        Self::new(speed * radians.sin(), -speed * radians.cos())
    }

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dy(&self) -> f64 {
        self.dy
    }

    pub fn speed(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }

    pub fn apply_to(&self, p: Point) -> Point {
        Point::new(p.x() + self.dx, p.y() + self.dy)
    }

    pub fn coincides(&self, other: Self) -> bool {
        approx_eq(self.dx, other.dx) && approx_eq(self.dy, other.dy)
    }
}

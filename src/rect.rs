//! Axis-aligned rectangles used as hit-boxes.

use crate::basis::{approx_gt, Point};
use crate::line::Line;

const UPPER: usize = 0;
const LEFT: usize = 1;
const RIGHT: usize = 2;
const LOWER: usize = 3;

/// Box normalized so that width and height are never negative. The four
/// boundary segments are derived once at construction and never change.
#[derive(Clone, Debug)]
pub struct Rect {
    upper_left: Point,
    width: f64,
    height: f64,
    edges: [Line; 4],
}

impl Rect {
    pub fn new(upper_left: Point, width: f64, height: f64) -> Self {
        // Negative sizes flip the anchor so the stored extent is >= 0.
        let (x, width) = if width < 0.0 {
            (upper_left.x() + width, -width)
        } else {
            (upper_left.x(), width)
        };
        let (y, height) = if height < 0.0 {
            (upper_left.y() + height, -height)
        } else {
            (upper_left.y(), height)
        };

        let upper_left = Point::new(x, y);
        let upper_right = Point::new(x + width, y);
        let lower_left = Point::new(x, y + height);
        let lower_right = Point::new(x + width, y + height);

        Self {
            upper_left,
            width,
            height,
            edges: [
                Line::new(upper_left, upper_right),
                Line::new(upper_left, lower_left),
                Line::new(upper_right, lower_right),
                Line::new(lower_left, lower_right),
            ],
        }
    }

    pub fn from_corners(upper_left: Point, lower_right: Point) -> Self {
        Self::new(
            upper_left,
            lower_right.x() - upper_left.x(),
            lower_right.y() - upper_left.y(),
        )
    }

    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), width, height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn top(&self) -> f64 {
        self.upper_left.y()
    }

    pub fn left(&self) -> f64 {
        self.upper_left.x()
    }

    pub fn right(&self) -> f64 {
        self.left() + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top() + self.height
    }

    pub fn upper_left(&self) -> Point {
        self.upper_left
    }

    pub fn upper_right(&self) -> Point {
        self.edges[UPPER].end()
    }

    pub fn lower_left(&self) -> Point {
        self.edges[LEFT].end()
    }

    pub fn lower_right(&self) -> Point {
        self.edges[LOWER].end()
    }

    pub fn upper_edge(&self) -> &Line {
        &self.edges[UPPER]
    }

    pub fn left_edge(&self) -> &Line {
        &self.edges[LEFT]
    }

    pub fn right_edge(&self) -> &Line {
        &self.edges[RIGHT]
    }

    pub fn lower_edge(&self) -> &Line {
        &self.edges[LOWER]
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.left() + self.width / 2.0,
            self.top() + self.height / 2.0,
        )
    }

    /// Intersections between the given segment and the boundary, deduplicated
    /// so a crossing through a corner shared by two edges is reported once.
    pub fn intersection_points(&self, line: &Line) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::new();
        for edge in &self.edges {
            if let Some(p) = line.intersection_with(edge) {
                if !points.iter().any(|q| q.coincides(p)) {
                    points.push(p);
                }
            }
        }
        points
    }

    /// Strictly inside: points on the boundary itself do not count.
    pub fn is_point_inside(&self, p: Point) -> bool {
        approx_gt(self.right(), p.x())
            && approx_gt(p.x(), self.left())
            && approx_gt(self.bottom(), p.y())
            && approx_gt(p.y(), self.top())
    }

    pub fn move_x(&self, dx: f64) -> Self {
        Self::new(self.upper_left.move_x(dx), self.width, self.height)
    }

    pub fn move_y(&self, dy: f64) -> Self {
        Self::new(self.upper_left.move_y(dy), self.width, self.height)
    }

    /// Scaled copy, keeping the given point fixed in proportion.
    pub fn scale_about(&self, factor: f64, p: Point) -> Self {
        let anchor = Line::new(self.upper_left, p).point_from_proportion(factor);
        Self::new(anchor, self.width * factor, self.height * factor)
    }

    pub fn scale(&self, factor: f64) -> Self {
        self.scale_about(factor, self.center())
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.upper_left == other.upper_left
            && self.width == other.width
            && self.height == other.height
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::basis::EPSILON;

    #[rstest]
    #[case::negative_both(Rect::from_coords(10.0, 10.0, -5.0, -5.0))]
    #[case::negative_width(Rect::from_coords(10.0, 5.0, -5.0, 5.0))]
    #[case::negative_height(Rect::from_coords(5.0, 10.0, 5.0, -5.0))]
    #[case::corners(Rect::from_corners(Point::new(10.0, 10.0), Point::new(5.0, 5.0)))]
    fn test_normalizes_to_positive_extent(#[case] rect: Rect) {
        assert_eq!(rect, Rect::from_coords(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn test_corners_and_edges() {
        let rect = Rect::from_coords(1.0, 2.0, 3.0, 4.0);
        assert_abs_diff_eq!(rect.upper_left(), Point::new(1.0, 2.0));
        assert_abs_diff_eq!(rect.upper_right(), Point::new(4.0, 2.0));
        assert_abs_diff_eq!(rect.lower_left(), Point::new(1.0, 6.0));
        assert_abs_diff_eq!(rect.lower_right(), Point::new(4.0, 6.0));

        assert!(rect.upper_edge().contains(Point::new(2.0, 2.0)));
        assert!(rect.left_edge().contains(Point::new(1.0, 3.0)));
        assert!(rect.right_edge().contains(Point::new(4.0, 3.0)));
        assert!(rect.lower_edge().contains(Point::new(2.0, 6.0)));
    }

    #[rstest]
    #[case::inside(Point::new(5.0, 5.0), true)]
    #[case::on_upper_edge(Point::new(5.0, 0.0), false)]
    #[case::on_corner(Point::new(0.0, 0.0), false)]
    #[case::outside(Point::new(11.0, 5.0), false)]
    fn test_is_point_inside(#[case] point: Point, #[case] expected: bool) {
        let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rect.is_point_inside(point), expected);
    }

    #[test]
    fn test_intersection_points_through_both_corners() {
        let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        let diagonal = Line::from_coords(-5.0, -5.0, 15.0, 15.0);

        // Each corner is shared by two edges but must be reported once.
        let points = rect.intersection_points(&diagonal);
        assert_eq!(points.len(), 2);
        assert!(points.iter().any(|p| p.coincides(Point::new(0.0, 0.0))));
        assert!(points.iter().any(|p| p.coincides(Point::new(10.0, 10.0))));
    }

    #[test]
    fn test_intersection_points_crossing_two_edges() {
        let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        let through = Line::from_coords(5.0, -5.0, 5.0, 15.0);

        let points = rect.intersection_points(&through);
        assert_eq!(points.len(), 2);
        assert!(points.iter().any(|p| p.coincides(Point::new(5.0, 0.0))));
        assert!(points.iter().any(|p| p.coincides(Point::new(5.0, 10.0))));
    }

    #[test]
    fn test_move_along_axes() {
        let rect = Rect::from_coords(1.0, 1.0, 2.0, 2.0);
        assert_eq!(rect.move_x(3.0), Rect::from_coords(4.0, 1.0, 2.0, 2.0));
        assert_eq!(rect.move_y(-1.0), Rect::from_coords(1.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn test_scale_about_center() {
        let rect = Rect::from_coords(0.0, 0.0, 10.0, 10.0);
        let scaled = rect.scale(0.5);
        assert_eq!(scaled, Rect::from_coords(2.5, 2.5, 5.0, 5.0));
        assert_abs_diff_eq!(scaled.center(), rect.center(), epsilon = EPSILON);
    }
}

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A point in a 2D plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    /// The x coordinate.
    pub x: f64,
    /// The y coordinate.
    pub y: f64,
}

impl Point2 {
    /// Creates a new point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point2) -> f64 {
        DVec2::from(*self).distance(DVec2::from(*other))
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for (f64, f64) {
    fn from(p: Point2) -> Self {
        (p.x, p.y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl From<DVec2> for Point2 {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2> for DVec2 {
    fn from(p: Point2) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// A rectangle described by its four corners.
///
/// `corner2` and `corner3` share an edge with `corner1`, while `corner4` is
/// diagonally opposite `corner1`. The edge `corner1 -> corner2` is the
/// primary edge (the rectangle length) and `corner1 -> corner3` is the
/// adjacent edge (the rectangle width).
///
/// Two rectangles used together in a [`crate::RectangleTransformer`] must be
/// listed with the same winding order, otherwise the mapping is mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// The reference corner.
    pub corner1: Point2,
    /// The corner at the end of the primary edge.
    pub corner2: Point2,
    /// The corner at the end of the adjacent edge.
    pub corner3: Point2,
    /// The corner opposite to `corner1`.
    pub corner4: Point2,
}

impl Rectangle {
    /// Creates a rectangle from its four corners.
    pub fn new(
        corner1: impl Into<Point2>,
        corner2: impl Into<Point2>,
        corner3: impl Into<Point2>,
        corner4: impl Into<Point2>,
    ) -> Self {
        Self {
            corner1: corner1.into(),
            corner2: corner2.into(),
            corner3: corner3.into(),
            corner4: corner4.into(),
        }
    }

    /// Creates a rectangle from an ordered array of corners.
    pub fn from_corners(corners: [Point2; 4]) -> Self {
        let [corner1, corner2, corner3, corner4] = corners;
        Self {
            corner1,
            corner2,
            corner3,
            corner4,
        }
    }

    /// Returns the corners in order.
    pub fn corners(&self) -> [Point2; 4] {
        [self.corner1, self.corner2, self.corner3, self.corner4]
    }

    /// Length of the primary edge `corner1 -> corner2`.
    pub fn length(&self) -> f64 {
        self.corner1.distance(&self.corner2)
    }

    /// Length of the adjacent edge `corner1 -> corner3`.
    pub fn width(&self) -> f64 {
        self.corner1.distance(&self.corner3)
    }
}

impl From<[(f64, f64); 4]> for Rectangle {
    fn from(corners: [(f64, f64); 4]) -> Self {
        Self::from_corners(corners.map(Point2::from))
    }
}

impl From<[Point2; 4]> for Rectangle {
    fn from(corners: [Point2; 4]) -> Self {
        Self::from_corners(corners)
    }
}

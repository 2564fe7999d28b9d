use glam::DMat3;

use crate::error::RectMapError;
use crate::matrix::{transform_point, RectangleFrame};
use crate::point::{Point2, Rectangle};
use crate::validation::{validate_pair, ValidationConfig};

/// Maps points between the local frames of two rectangles.
///
/// The transformer is built from a rectangle in grid 1 and the matching
/// rectangle in grid 2. Every point of grid 1 is mapped so that the corners of
/// the first rectangle land on the corners of the second, in order.
///
/// All matrices are computed once at construction and never change.
///
/// NOTE: no check is made that the corners form a rectangle. Degenerate input
/// yields NaN or meaningless output; use [`RectangleTransformer::try_new`] to
/// reject it instead.
///
/// Example:
///
/// ```
/// use kornia_rectmap::{Point2, Rectangle, RectangleTransformer};
///
/// let grid1 = Rectangle::from([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
/// let grid2 = Rectangle::from([(10.0, 10.0), (30.0, 10.0), (10.0, 20.0), (30.0, 20.0)]);
/// let transformer = RectangleTransformer::new(grid1, grid2);
///
/// let p = transformer.transform_from_grid1_to_grid2(Point2::new(0.5, 0.5));
/// assert!((p.x - 20.0).abs() < 1e-9 && (p.y - 15.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleTransformer {
    rect1: Rectangle,
    rect2: Rectangle,
    frame1: RectangleFrame,
    frame2: RectangleFrame,
    matrix_1_to_2: DMat3,
    matrix_2_to_1: DMat3,
}

impl RectangleTransformer {
    /// Creates a transformer from a rectangle in grid 1 and one in grid 2.
    ///
    /// # Arguments
    ///
    /// * `rect1` - The rectangle expressed in grid 1.
    /// * `rect2` - The same rectangle expressed in grid 2, with the same winding.
    pub fn new(rect1: Rectangle, rect2: Rectangle) -> Self {
        let frame1 = RectangleFrame::from_rectangle(&rect1);
        let frame2 = RectangleFrame::from_rectangle(&rect2);

        let matrix_1_to_2 = frame2.canonical_to_rect() * frame1.rect_to_canonical();
        let matrix_2_to_1 = matrix_1_to_2.inverse();

        log::debug!(
            "rectangle transformer built, determinant {}",
            matrix_1_to_2.determinant()
        );

        Self {
            rect1,
            rect2,
            frame1,
            frame2,
            matrix_1_to_2,
            matrix_2_to_1,
        }
    }

    /// Creates a transformer after checking both rectangles.
    ///
    /// # Errors
    ///
    /// Returns an error if either rectangle is degenerate or not rectangular
    /// within `config.tolerance`, or if the rectangles have different winding.
    pub fn try_new(
        rect1: Rectangle,
        rect2: Rectangle,
        config: &ValidationConfig,
    ) -> Result<Self, RectMapError> {
        if let Err(e) = validate_pair(&rect1, &rect2, config) {
            log::warn!("rejecting rectangles: {e}");
            return Err(e);
        }
        Ok(Self::new(rect1, rect2))
    }

    /// Maps a point from grid 1 into grid 2.
    pub fn transform_from_grid1_to_grid2(&self, point: Point2) -> Point2 {
        transform_point(point, &self.matrix_1_to_2)
    }

    /// Maps a point from grid 2 into grid 1.
    pub fn transform_from_grid2_to_grid1(&self, point: Point2) -> Point2 {
        transform_point(point, &self.matrix_2_to_1)
    }

    /// Maps a set of points from grid 1 into grid 2.
    ///
    /// PRECONDITION: `dst_points` is pre-allocated with the length of `src_points`.
    pub fn transform_points_from_grid1_to_grid2(
        &self,
        src_points: &[Point2],
        dst_points: &mut [Point2],
    ) -> Result<(), RectMapError> {
        transform_points(src_points, &self.matrix_1_to_2, dst_points)
    }

    /// Maps a set of points from grid 2 into grid 1.
    ///
    /// PRECONDITION: `dst_points` is pre-allocated with the length of `src_points`.
    pub fn transform_points_from_grid2_to_grid1(
        &self,
        src_points: &[Point2],
        dst_points: &mut [Point2],
    ) -> Result<(), RectMapError> {
        transform_points(src_points, &self.matrix_2_to_1, dst_points)
    }

    /// The composed grid 1 to grid 2 matrix.
    pub fn matrix_1_to_2(&self) -> DMat3 {
        self.matrix_1_to_2
    }

    /// The composed grid 2 to grid 1 matrix.
    pub fn matrix_2_to_1(&self) -> DMat3 {
        self.matrix_2_to_1
    }

    /// The rectangle in grid 1.
    pub fn rect1(&self) -> &Rectangle {
        &self.rect1
    }

    /// The rectangle in grid 2.
    pub fn rect2(&self) -> &Rectangle {
        &self.rect2
    }

    /// The elementary matrices of the grid 1 rectangle.
    pub fn frame1(&self) -> &RectangleFrame {
        &self.frame1
    }

    /// The elementary matrices of the grid 2 rectangle.
    pub fn frame2(&self) -> &RectangleFrame {
        &self.frame2
    }

    /// Returns the transformer going the other way, from grid 2 to grid 1.
    ///
    /// The stored matrices are swapped, nothing is recomputed from the corners.
    pub fn inverse(&self) -> Self {
        Self {
            rect1: self.rect2,
            rect2: self.rect1,
            frame1: self.frame2,
            frame2: self.frame1,
            matrix_1_to_2: self.matrix_2_to_1,
            matrix_2_to_1: self.matrix_1_to_2,
        }
    }
}

fn transform_points(
    src_points: &[Point2],
    matrix: &DMat3,
    dst_points: &mut [Point2],
) -> Result<(), RectMapError> {
    if src_points.len() != dst_points.len() {
        return Err(RectMapError::InvalidPointsLength(
            src_points.len(),
            dst_points.len(),
        ));
    }

    dst_points
        .iter_mut()
        .zip(src_points.iter())
        .for_each(|(dst, src)| *dst = transform_point(*src, matrix));

    Ok(())
}

use glam::{DMat3, DVec3};

use crate::point::{Point2, Rectangle};

// glam stores matrices by columns; the builders below read row by row.
fn from_rows(rows: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols_array_2d(&rows).transpose()
}

// Zero maps to +1.
#[inline]
fn sign(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Applies a 3x3 homogeneous matrix to a point.
///
/// The point is lifted to `(x, y, 1)`, multiplied by `matrix` and the first
/// two components of the result are returned. The matrices built in this
/// crate are affine, so the homogeneous component is not renormalized.
///
/// # Arguments
///
/// * `point` - The point to transform.
/// * `matrix` - The homogeneous transformation matrix.
///
/// # Returns
///
/// The transformed point.
///
/// Example:
///
/// ```
/// use glam::DMat3;
/// use kornia_rectmap::matrix::transform_point;
/// use kornia_rectmap::Point2;
///
/// let p = transform_point(Point2::new(1.0, 2.0), &DMat3::IDENTITY);
/// assert_eq!(p, Point2::new(1.0, 2.0));
/// ```
pub fn transform_point(point: Point2, matrix: &DMat3) -> Point2 {
    let transformed = *matrix * DVec3::new(point.x, point.y, 1.0);
    Point2::new(transformed.x, transformed.y)
}

/// Translation that moves the canonical origin onto `corner1`.
///
/// ```text
/// | 1 0 cx |
/// | 0 1 cy |
/// | 0 0 1  |
/// ```
pub fn translation_from_origin(rect: &Rectangle) -> DMat3 {
    let c = rect.corner1;
    from_rows([
        [1.0, 0.0, c.x], //
        [0.0, 1.0, c.y], //
        [0.0, 0.0, 1.0], //
    ])
}

/// Rotation that aligns the canonical x axis with the edge `corner1 -> corner2`.
///
/// PRECONDITION: `corner1 != corner2`, otherwise the result is NaN.
pub fn rotation_from_canonical(rect: &Rectangle) -> DMat3 {
    let run = rect.corner2.x - rect.corner1.x;
    let rise = rect.corner2.y - rect.corner1.y;
    let distance = rect.corner1.distance(&rect.corner2);

    let cos = run / distance;
    let sin = rise / distance;

    from_rows([
        [cos, -sin, 0.0], //
        [sin, cos, 0.0],  //
        [0.0, 0.0, 1.0],  //
    ])
}

/// Scale that stretches the unit square to the rectangle length and width.
pub fn scale_from_unit_size(rect: &Rectangle) -> DMat3 {
    let length = rect.length();
    let width = rect.width();

    from_rows([
        [length, 0.0, 0.0], //
        [0.0, width, 0.0],  //
        [0.0, 0.0, 1.0],    //
    ])
}

/// Axis flips that bring `corner4` into the positive quadrant.
///
/// `corner4` is taken back through the inverse rotation and translation of
/// the rectangle and the sign of each resulting coordinate becomes the
/// diagonal of the matrix.
///
/// # Arguments
///
/// * `rect` - The rectangle.
/// * `translation` - The output of [`translation_from_origin`] for `rect`.
/// * `rotation` - The output of [`rotation_from_canonical`] for `rect`.
pub fn reflection(rect: &Rectangle, translation: &DMat3, rotation: &DMat3) -> DMat3 {
    let partial = rotation.inverse() * translation.inverse();
    let corner4 = transform_point(rect.corner4, &partial);

    from_rows([
        [sign(corner4.x), 0.0, 0.0], //
        [0.0, sign(corner4.y), 0.0], //
        [0.0, 0.0, 1.0],             //
    ])
}

/// The elementary matrices that place the canonical unit square onto a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleFrame {
    /// See [`translation_from_origin`].
    pub translation: DMat3,
    /// See [`rotation_from_canonical`].
    pub rotation: DMat3,
    /// See [`scale_from_unit_size`].
    pub scale: DMat3,
    /// See [`reflection`].
    pub reflection: DMat3,
}

impl RectangleFrame {
    /// Builds the four elementary matrices of `rect`.
    pub fn from_rectangle(rect: &Rectangle) -> Self {
        let translation = translation_from_origin(rect);
        let rotation = rotation_from_canonical(rect);
        let scale = scale_from_unit_size(rect);
        let reflection = reflection(rect, &translation, &rotation);
        Self {
            translation,
            rotation,
            scale,
            reflection,
        }
    }

    /// Maps the canonical unit square onto the rectangle: `T * R * S * F`.
    pub fn canonical_to_rect(&self) -> DMat3 {
        self.translation * self.rotation * self.scale * self.reflection
    }

    /// Maps the rectangle onto the canonical unit square: `F⁻¹ * S⁻¹ * R⁻¹ * T⁻¹`.
    pub fn rect_to_canonical(&self) -> DMat3 {
        self.reflection.inverse()
            * self.scale.inverse()
            * self.rotation.inverse()
            * self.translation.inverse()
    }
}

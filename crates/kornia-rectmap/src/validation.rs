use glam::DVec2;

use crate::error::RectMapError;
use crate::point::Rectangle;

/// Configuration for the optional rectangle checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationConfig {
    /// Relative tolerance, scaled by the rectangle edge lengths.
    pub tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self { tolerance: 1e-9 }
    }
}

impl ValidationConfig {
    /// Creates a new `ValidationConfig` with the given relative tolerance.
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

// z component of the cross product of the two edges leaving corner 1
fn winding(rect: &Rectangle) -> f64 {
    let c1 = DVec2::from(rect.corner1);
    let e1 = DVec2::from(rect.corner2) - c1;
    let e2 = DVec2::from(rect.corner3) - c1;
    e1.perp_dot(e2)
}

/// Checks that the four corners describe a non-degenerate rectangle.
///
/// The checks run in order: finite coordinates, non-zero primary edge,
/// non-zero adjacent edge, perpendicular edges and `corner4` lying at
/// `corner2 + corner3 - corner1`.
///
/// # Arguments
///
/// * `rect` - The rectangle to check.
/// * `config` - The tolerance configuration.
///
/// Example:
///
/// ```
/// use kornia_rectmap::validation::{validate_rectangle, ValidationConfig};
/// use kornia_rectmap::Rectangle;
///
/// let rect = Rectangle::from([(0.0, 0.0), (2.0, 0.0), (0.0, 1.0), (2.0, 1.0)]);
/// assert!(validate_rectangle(&rect, &ValidationConfig::default()).is_ok());
/// ```
pub fn validate_rectangle(rect: &Rectangle, config: &ValidationConfig) -> Result<(), RectMapError> {
    if let Some(i) = rect.corners().iter().position(|c| !c.is_finite()) {
        return Err(RectMapError::NonFiniteCoordinate(i + 1));
    }

    let c1 = DVec2::from(rect.corner1);
    let e1 = DVec2::from(rect.corner2) - c1;
    let e2 = DVec2::from(rect.corner3) - c1;

    let length = e1.length();
    let width = e2.length();
    let scale = length.max(width);

    if length <= config.tolerance * scale {
        return Err(RectMapError::ZeroLengthEdge(2));
    }
    if width <= config.tolerance * scale {
        return Err(RectMapError::ZeroLengthEdge(3));
    }

    let cosine = e1.dot(e2) / (length * width);
    if cosine.abs() > config.tolerance {
        return Err(RectMapError::NotRectangular(cosine));
    }

    let expected = c1 + e1 + e2;
    let offset = expected.distance(DVec2::from(rect.corner4));
    if offset > config.tolerance * scale {
        return Err(RectMapError::CornerNotOpposite(offset));
    }

    Ok(())
}

/// Checks both rectangles and that they share the same winding order.
pub fn validate_pair(
    rect1: &Rectangle,
    rect2: &Rectangle,
    config: &ValidationConfig,
) -> Result<(), RectMapError> {
    validate_rectangle(rect1, config)?;
    validate_rectangle(rect2, config)?;

    if winding(rect1).signum() != winding(rect2).signum() {
        return Err(RectMapError::WindingMismatch);
    }

    Ok(())
}

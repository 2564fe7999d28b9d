/// An error type for the rectmap module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RectMapError {
    /// Error when a corner coordinate is NaN or infinite.
    #[error("Corner {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),

    /// Error when an edge adjacent to corner 1 has zero length.
    #[error("Edge from corner 1 to corner {0} has zero length")]
    ZeroLengthEdge(usize),

    /// Error when the edges adjacent to corner 1 are not perpendicular.
    #[error("Edges adjacent to corner 1 are not perpendicular (cosine {0})")]
    NotRectangular(f64),

    /// Error when corner 4 is not diagonally opposite corner 1.
    #[error("Corner 4 is not opposite corner 1 (off by {0})")]
    CornerNotOpposite(f64),

    /// Error when the two rectangles are listed with different winding order.
    #[error("Rectangles have mismatched winding order")]
    WindingMismatch,

    /// Error when the source and destination point buffers differ in length.
    #[error("Source points length ({0}) does not match destination points length ({1})")]
    InvalidPointsLength(usize, usize),
}

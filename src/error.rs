use thiserror::Error;

use crate::geometry::Point;

/// Errors raised when constructing geometric values.
///
/// Construction is the only fallible step: once a [`Vector`](crate::Vector)
/// or [`Segment`](crate::Segment) exists, every operation on it is total.
#[derive(Debug, Clone, Copy, Error)]
pub enum GeometryError {
    #[error("degenerate vector: both components are zero")]
    DegenerateVector,

    #[error("degenerate segment: endpoints coincide at {at}")]
    DegenerateSegment { at: Point },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

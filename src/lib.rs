//! 2D points, vectors and line segments with tolerance-based comparison.
//!
//! ```
//! use planar::{Point, Segment, Vector};
//!
//! let seg = Segment::new(Point::new(0.0, 4.0), Point::new(4.0, 0.0))?;
//! let hit = seg.intersect(&Vector::new(4.0, 4.0)?);
//! assert!(hit.is_some_and(|p| p.approx_eq(&Point::new(2.0, 2.0))));
//! assert_eq!(seg.to_string(), "sr((4.00,0.00); (0.00,4.00))");
//! # Ok::<(), planar::GeometryError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{Point, Segment, Vector};

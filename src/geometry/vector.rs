use crate::error::{GeometryError, Result};
use crate::math::Vector2;

use super::{Point, Segment};

/// A non-zero 2D vector.
///
/// The zero vector is rejected at construction, so [`Vector::magnitude`] is
/// always positive and [`Vector::cosine_similarity`] never divides by zero.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    coords: Vector2,
}

impl Vector {
    /// Creates a new vector from its components.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateVector`] if both components are zero.
    #[allow(clippy::float_cmp)]
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if x == 0.0 && y == 0.0 {
            tracing::debug!(x, y, "rejected zero vector");
            return Err(GeometryError::DegenerateVector);
        }
        Ok(Self {
            coords: Vector2::new(x, y),
        })
    }

    /// Creates the position vector of `p`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateVector`] if `p` is exactly the origin.
    pub fn from_point(p: Point) -> Result<Self> {
        Self::new(p.x(), p.y())
    }

    /// Returns the x component of the vector.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the y component of the vector.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.coords.norm()
    }

    /// Dot product with `other`.
    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.coords.dot(&other.coords)
    }

    /// Cosine of the angle between `self` and `other`, in `[-1, 1]` up to rounding.
    #[must_use]
    pub fn cosine_similarity(&self, other: &Vector) -> f64 {
        self.dot(other) / (self.magnitude() * other.magnitude())
    }

    /// Intersects the origin-anchored segment `(0,0) -> self` with `segment`.
    ///
    /// See [`Segment::intersect`].
    #[must_use]
    pub fn intersect(&self, segment: &Segment) -> Option<Point> {
        segment.intersect(self)
    }
}

impl TryFrom<Point> for Vector {
    type Error = GeometryError;

    fn try_from(p: Point) -> Result<Self> {
        Self::from_point(p)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn zero_vector_is_rejected() {
        assert!(matches!(
            Vector::new(0.0, 0.0),
            Err(GeometryError::DegenerateVector)
        ));
        assert!(matches!(
            Vector::from_point(Point::origin()),
            Err(GeometryError::DegenerateVector)
        ));
        assert!(Vector::try_from(Point::new(-0.0, 0.0)).is_err());
    }

    #[test]
    fn non_zero_vectors_are_accepted() {
        assert!(Vector::new(1.0, 0.0).is_ok());
        assert!(Vector::new(0.0, -1.0).is_ok());
        // Only exact zero is degenerate.
        assert!(Vector::new(1e-12, 0.0).is_ok());
        let v = Vector::try_from(Point::new(2.0, 3.0)).unwrap();
        assert_relative_eq!(v.x(), 2.0);
        assert_relative_eq!(v.y(), 3.0);
    }

    #[test]
    fn error_message() {
        let err = Vector::new(0.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "degenerate vector: both components are zero");
    }

    #[test]
    fn magnitude() {
        assert_relative_eq!(Vector::new(3.0, 4.0).unwrap().magnitude(), 5.0);
        assert_relative_eq!(Vector::new(0.0, -2.0).unwrap().magnitude(), 2.0);
    }

    #[test]
    fn dot_product() {
        let a = Vector::new(1.0, 2.0).unwrap();
        let b = Vector::new(3.0, -4.0).unwrap();
        assert_relative_eq!(a.dot(&b), -5.0);
        assert_relative_eq!(a.dot(&a), 5.0);
    }

    #[test]
    fn cosine_similarity_known_angles() {
        let x = Vector::new(2.0, 0.0).unwrap();
        let y = Vector::new(0.0, 5.0).unwrap();
        let neg_x = Vector::new(-1.0, 0.0).unwrap();
        let diag = Vector::new(1.0, 1.0).unwrap();

        assert_relative_eq!(x.cosine_similarity(&x), 1.0);
        assert_abs_diff_eq!(x.cosine_similarity(&y), 0.0);
        assert_relative_eq!(x.cosine_similarity(&neg_x), -1.0);
        assert_relative_eq!(
            x.cosine_similarity(&diag),
            std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn intersect_forwards_to_segment() {
        let seg = Segment::new(Point::new(0.0, 2.0), Point::new(4.0, 2.0)).unwrap();
        let v = Vector::new(2.0, 4.0).unwrap();
        let hit = v.intersect(&seg).unwrap();
        let expected = seg.intersect(&v).unwrap();
        assert!(hit.approx_eq(&expected));
        assert!(hit.approx_eq(&Point::new(1.0, 2.0)));
    }

    proptest! {
        #[test]
        fn cosine_similarity_in_range(
            ax in -100.0..100.0f64,
            ay in 0.1..100.0f64,
            bx in 0.1..100.0f64,
            by in -100.0..100.0f64,
        ) {
            let a = Vector::new(ax, ay).unwrap();
            let b = Vector::new(bx, by).unwrap();
            let c = a.cosine_similarity(&b);
            prop_assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&c), "c={}", c);
            prop_assert!((c - b.cosine_similarity(&a)).abs() < 1e-12);
        }
    }
}

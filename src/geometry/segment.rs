use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::near_zero;

use super::{Point, Vector};

/// A line segment between two distinct points.
///
/// The parametric form is: `P(t) = a + t * (b - a)`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Creates a segment from two endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] if the endpoints are equal
    /// under [`Point::approx_eq`].
    pub fn new(a: Point, b: Point) -> Result<Self> {
        if a.approx_eq(&b) {
            tracing::debug!(%a, %b, "rejected zero-length segment");
            return Err(GeometryError::DegenerateSegment { at: a });
        }
        Ok(Self { a, b })
    }

    /// Creates the segment from `p` to `p + v`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSegment`] if `v` is shorter than the
    /// tolerance, so that both endpoints coincide.
    pub fn from_point_vector(p: Point, v: Vector) -> Result<Self> {
        Self::new(p, p + v)
    }

    /// The segment `(0,0) -> v`.
    ///
    /// Skips the degenerate check: a vector below tolerance is still a valid
    /// [`Vector`], and the intersection routine copes with a near-zero
    /// direction through its collinear and parallel branches.
    fn anchored_at_origin(v: &Vector) -> Self {
        Self {
            a: Point::origin(),
            b: Point::new(v.x(), v.y()),
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn b(&self) -> Point {
        self.b
    }

    /// Closed bounding-box membership. Does not test collinearity.
    fn within_bounds(&self, p: &Point) -> bool {
        let (min_x, max_x) = (self.a.x().min(self.b.x()), self.a.x().max(self.b.x()));
        let (min_y, max_y) = (self.a.y().min(self.b.y()), self.a.y().max(self.b.y()));
        p.x() >= min_x && p.x() <= max_x && p.y() >= min_y && p.y() <= max_y
    }

    /// Intersects this segment with the origin-anchored segment `(0,0) -> v`.
    ///
    /// Returns `None` when the segments are parallel, disjoint, or their
    /// supporting lines cross outside either segment.
    #[must_use]
    pub fn intersect(&self, v: &Vector) -> Option<Point> {
        self.intersect_segment(&Self::anchored_at_origin(v))
    }

    /// Bounded segment-segment intersection.
    ///
    /// With `self = a + t * r` and `other = c + u * s`, solves for `(t, u)` using
    /// 2D cross products. Collinear segments resolve to the first of `c`, `d`
    /// (tested against `self`'s bounds), then `a`, `b` (tested against
    /// `other`'s bounds) that lies inside the opposite bounding box.
    #[must_use]
    pub fn intersect_segment(&self, other: &Segment) -> Option<Point> {
        let r = self.b - self.a;
        let s = other.b - other.a;
        let k = other.a - self.a;

        let numerator = k.cross(&r);
        let denominator = r.cross(&s);

        if near_zero(numerator) && near_zero(denominator) {
            let hit = [
                (self, other.a),
                (self, other.b),
                (other, self.a),
                (other, self.b),
            ]
            .into_iter()
            .find(|(seg, p)| seg.within_bounds(p))
            .map(|(_, p)| p);
            tracing::trace!(numerator, denominator, hit = ?hit, "collinear");
            return hit;
        }

        if near_zero(denominator) {
            tracing::trace!(numerator, denominator, "parallel");
            return None;
        }

        let u = numerator / denominator;
        let t = k.cross(&s) / denominator;

        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            tracing::trace!(t, u, "crossing");
            Some(Point::new(
                self.a.x() + t * r.x(),
                self.a.y() + t * r.y(),
            ))
        } else {
            tracing::trace!(t, u, "lines cross outside the segments");
            None
        }
    }
}

/// Formats as `sr(P1; P2)`, nearest-to-origin endpoint first. On a tie `b` comes first.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = if self.a.distance_from_origin() < self.b.distance_from_origin() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        write!(f, "sr({first}; {second})")
    }
}

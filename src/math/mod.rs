/// 2D vector type used as coordinate storage.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// 2D cross product (determinant) `a.x * b.y - a.y * b.x`.
#[must_use]
pub fn cross_2d(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` if `value` is strictly within [`TOLERANCE`] of zero.
#[must_use]
pub fn near_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}

use std::fmt;
use std::ops::{Add, Sub};

use crate::math::{cross_2d, Vector2, TOLERANCE};

use super::Vector;

/// An immutable point in the 2D Cartesian plane.
///
/// Points compare by tolerance through [`Point::approx_eq`]. There is no
/// `PartialEq` impl: tolerance equality is not transitive.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    coords: Vector2,
}

impl Point {
    /// Creates a new point at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            coords: Vector2::new(x, y),
        }
    }

    /// The point `(0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Returns the x coordinate of the point.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the y coordinate of the point.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Euclidean distance from this point to the origin.
    #[must_use]
    pub fn distance_from_origin(&self) -> f64 {
        self.coords.norm()
    }

    /// Returns `true` if both coordinate deltas are strictly below [`TOLERANCE`].
    #[must_use]
    pub fn approx_eq(&self, other: &Point) -> bool {
        let d = self.coords - other.coords;
        d.x.abs() < TOLERANCE && d.y.abs() < TOLERANCE
    }

    /// 2D cross product, treating both points as position vectors.
    #[must_use]
    pub fn cross(&self, other: &Point) -> f64 {
        cross_2d(&self.coords, &other.coords)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Componentwise difference, i.e. the displacement from `rhs` to `self`.
impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point {
            coords: self.coords - rhs.coords,
        }
    }
}

/// Translation of a point by a vector.
impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})",
            round_half_up_2(self.x()),
            round_half_up_2(self.y())
        )
    }
}

/// Formats `value` with two decimals, rounding half away from zero on its
/// shortest round-trip decimal form (`0.125` gives `0.13`, `1.005` gives `1.01`).
fn round_half_up_2(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }
    // f64 `Display` never uses exponent notation.
    let repr = value.to_string();
    let (sign, magnitude) = match repr.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", repr.as_str()),
    };
    let (int_part, frac_part) = magnitude.split_once('.').unwrap_or((magnitude, ""));
    let frac: Vec<u8> = frac_part
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(3)
        .collect();

    let mut digits: Vec<u8> = int_part.bytes().chain(frac[..2].iter().copied()).collect();
    if frac[2] >= b'5' {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let digits: String = digits.into_iter().map(char::from).collect();
    let (whole, cents) = digits.split_at(digits.len() - 2);
    format!("{sign}{whole}.{cents}")
}

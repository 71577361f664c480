pub mod point;
pub mod segment;
pub mod vector;

pub use point::Point;
pub use segment::Segment;
pub use vector::Vector;

//! Floating-point geometric primitives and predicates.

mod circle2;
mod edge2;
mod point2;
mod triangle2;

pub use circle2::Circle2;
pub use edge2::{Edge2, EdgeKey};
pub use point2::Point2;
pub use triangle2::Triangle2;

pub(crate) use point2::cross;

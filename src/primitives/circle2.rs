//! 2D circle type.

use super::Point2;
use num_traits::Float;

/// A 2D circle defined by center and radius.
///
/// Circumcircles produced from degenerate triangles may carry a NaN or
/// infinite center; containment tests on such circles are meaningless.
///
/// # Example
///
/// ```
/// use bowyer_watson::primitives::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point2::new(1.0, 0.0)));
/// assert!(!circle.contains(Point2::new(1.5, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Checks if a point is inside the circle (including boundary).
    ///
    /// Compares Euclidean distances rather than squared distances so that a
    /// vertex used to derive the radius tests exactly on the boundary.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Returns the signed distance from a point to the circle boundary.
    ///
    /// Negative inside, positive outside.
    #[inline]
    pub fn signed_distance(&self, point: Point2<F>) -> F {
        self.center.distance(point) - self.radius
    }

    /// Returns `true` if center and radius are all finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.radius.is_finite()
    }
}

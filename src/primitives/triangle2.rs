//! 2D triangle type and its circumcircle predicates.

use super::point2::cross;
use super::{Circle2, Edge2, Point2};
use num_traits::Float;

/// A triangle stored as three vertex positions.
///
/// Vertices keep the order they were given in; no orientation is enforced.
/// Triangles are values: two triangles with the same vertices in the same
/// order compare equal.
///
/// # Example
///
/// ```
/// use bowyer_watson::primitives::{Point2, Triangle2};
///
/// let tri = Triangle2::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(0.0, 2.0),
/// );
///
/// assert!(tri.circumcircle_contains(Point2::new(1.0, 1.0)));
/// assert!(!tri.circumcircle_contains(Point2::new(3.0, 3.0)));
/// assert!(tri.contains_point(Point2::new(2.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a new triangle.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the three vertices in storage order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three edges: A–B, A–C, B–C.
    #[inline]
    pub fn edges(&self) -> [Edge2<F>; 3] {
        [
            Edge2::new(self.a, self.b),
            Edge2::new(self.a, self.c),
            Edge2::new(self.b, self.c),
        ]
    }

    /// Returns `true` if `p` is exactly one of the three vertices.
    #[inline]
    pub fn contains_point(&self, p: Point2<F>) -> bool {
        self.a == p || self.b == p || self.c == p
    }

    /// Returns `true` if the two triangles have at least one vertex in common.
    pub fn shares_vertex_with(&self, other: &Self) -> bool {
        other.vertices().iter().any(|&v| self.contains_point(v))
    }

    /// Twice the signed area; positive for counter-clockwise vertex order.
    #[inline]
    fn doubled_signed_area(&self) -> F {
        cross(self.a, self.b, self.c)
    }

    /// Signed area; positive when the vertices run counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> F {
        self.doubled_signed_area() / (F::one() + F::one())
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Shared denominator of the circumcenter formula:
    /// `A.x·(C.y−B.y) + B.x·(A.y−C.y) + C.x·(B.y−A.y)`.
    ///
    /// Equal to minus twice the signed area. Zero for collinear vertices.
    #[inline]
    pub fn circumcircle_denominator(&self) -> F {
        let (a, b, c) = (self.a, self.b, self.c);
        a.x * (c.y - b.y) + b.x * (a.y - c.y) + c.x * (b.y - a.y)
    }

    /// Computes the circumscribed circle.
    ///
    /// The center comes from the closed-form circumcenter formula and the
    /// radius is the distance from vertex A to that center. Nothing guards
    /// against collinear vertices: the denominator then vanishes and the
    /// center becomes infinite or NaN. Use [`Triangle2::try_circumcircle`]
    /// for a checked version.
    pub fn circumcircle(&self) -> Circle2<F> {
        let (a, b, c) = (self.a, self.b, self.c);
        let two = F::one() + F::one();

        let sq_a = a.norm_squared();
        let sq_b = b.norm_squared();
        let sq_c = c.norm_squared();

        let cx = (sq_a * (c.y - b.y) + sq_b * (a.y - c.y) + sq_c * (b.y - a.y))
            / (a.x * (c.y - b.y) + b.x * (a.y - c.y) + c.x * (b.y - a.y))
            / two;
        let cy = (sq_a * (c.x - b.x) + sq_b * (a.x - c.x) + sq_c * (b.x - a.x))
            / (a.y * (c.x - b.x) + b.y * (a.x - c.x) + c.y * (b.x - a.x))
            / two;

        let center = Point2::new(cx, cy);
        Circle2::new(center, a.distance(center))
    }

    /// Computes the circumscribed circle, or `None` when the triangle is
    /// degenerate: `|denominator| <= eps`.
    pub fn try_circumcircle(&self, eps: F) -> Option<Circle2<F>> {
        if self.is_degenerate(eps) {
            None
        } else {
            Some(self.circumcircle())
        }
    }

    /// Returns `true` if the circumcenter denominator is within `eps` of
    /// zero, or is NaN.
    #[inline]
    pub fn is_degenerate(&self, eps: F) -> bool {
        let d = self.circumcircle_denominator();
        d.is_nan() || d.abs() <= eps
    }

    /// Returns `true` if `p` lies inside or on the circumcircle.
    #[inline]
    pub fn circumcircle_contains(&self, p: Point2<F>) -> bool {
        self.circumcircle().contains(p)
    }
}

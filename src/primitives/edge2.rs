//! Undirected 2D edge type.

use super::Point2;
use num_traits::Float;

/// An undirected edge between two points.
///
/// `Edge2::new(a, b)` and `Edge2::new(b, a)` describe the same edge and
/// compare equal. Endpoints are compared with exact point equality.
#[derive(Debug, Clone, Copy)]
pub struct Edge2<F> {
    /// First endpoint
    pub a: Point2<F>,
    /// Second endpoint
    pub b: Point2<F>,
}

impl<F: Float> Edge2<F> {
    /// Creates a new edge.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        Self { a, b }
    }

    /// Returns `true` if both edges join the same pair of points, in either order.
    #[inline]
    pub fn is_equal(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }

    /// Returns a hashable identity for this edge.
    ///
    /// Edges that are equal under [`Edge2::is_equal`] produce equal keys.
    #[inline]
    pub fn key(&self) -> EdgeKey {
        let ka = point_key(self.a);
        let kb = point_key(self.b);
        if ka <= kb {
            EdgeKey(ka, kb)
        } else {
            EdgeKey(kb, ka)
        }
    }
}

impl<F: Float> PartialEq for Edge2<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

/// Bit-level identity of one coordinate: mantissa, exponent, sign.
type CoordKey = (u64, i16, i8);

/// Canonical, order-independent identity of an [`Edge2`].
///
/// Built from the exact bit patterns of both endpoints, with the endpoints
/// put in a fixed order, so it can key a `HashMap` when counting how often an
/// edge occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey([CoordKey; 2], [CoordKey; 2]);

#[inline]
fn coord_key<F: Float>(v: F) -> CoordKey {
    // -0.0 and 0.0 are the same coordinate value
    if v == F::zero() {
        F::zero().integer_decode()
    } else {
        v.integer_decode()
    }
}

#[inline]
fn point_key<F: Float>(p: Point2<F>) -> [CoordKey; 2] {
    [coord_key(p.x), coord_key(p.y)]
}

//! Convex hull of a point set.
//!
//! A Delaunay triangulation exactly tiles the convex hull of its points, so
//! the hull gives a cheap cross-check on a triangulation's total area and
//! triangle count.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::hull::{convex_hull, convex_hull_area};
//! use bowyer_watson::primitives::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(2.0, 0.0),
//!     Point2::new(1.0, 1.0), // Interior point
//!     Point2::new(2.0, 2.0),
//!     Point2::new(0.0, 2.0),
//! ];
//!
//! let hull = convex_hull(&points);
//! assert_eq!(hull.len(), 4);
//! assert!((convex_hull_area(&hull) - 4.0).abs() < 1e-10);
//! ```

use crate::primitives::{cross, Point2};
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull using Andrew's monotone chain algorithm.
///
/// Returns the hull vertices in counter-clockwise order, starting from the
/// lowest-leftmost point. Points lying on a hull edge are not included, and
/// the first vertex is not repeated at the end.
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
///
/// Returns the input unchanged when it has fewer than three points.
pub fn convex_hull<F: Float>(points: &[Point2<F>]) -> Vec<Point2<F>> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted: Vec<Point2<F>> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let mut lower = half_hull(sorted.iter().copied());
    let mut upper = half_hull(sorted.iter().rev().copied());

    // Each chain ends where the other begins
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// One monotone chain, keeping only strict left turns.
fn half_hull<F: Float>(points: impl Iterator<Item = Point2<F>>) -> Vec<Point2<F>> {
    let mut chain: Vec<Point2<F>> = Vec::new();
    for p in points {
        while chain.len() >= 2
            && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= F::zero()
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// Computes the area enclosed by hull vertices with the shoelace formula.
///
/// Works for either winding. Returns 0 for fewer than 3 vertices.
pub fn convex_hull_area<F: Float>(hull: &[Point2<F>]) -> F {
    if hull.len() < 3 {
        return F::zero();
    }

    let doubled = hull
        .iter()
        .zip(hull.iter().cycle().skip(1))
        .fold(F::zero(), |acc, (p, q)| acc + p.x * q.y - q.x * p.y);

    doubled.abs() / (F::one() + F::one())
}

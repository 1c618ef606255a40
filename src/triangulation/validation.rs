//! Checks on finished triangulations.

use crate::primitives::{Point2, Triangle2};
use num_traits::Float;

/// A point found inside the circumcircle of a triangle it does not belong to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayViolation<F> {
    /// Index of the offending triangle.
    pub triangle: usize,
    /// Index of the point inside its circumcircle.
    pub point: usize,
    /// How far inside the circle the point lies (radius minus distance).
    pub depth: F,
}

/// Returns `true` if `triangle` uses any vertex of `super_triangle`.
#[inline]
pub fn touches_super_triangle<F: Float>(
    triangle: &Triangle2<F>,
    super_triangle: &Triangle2<F>,
) -> bool {
    triangle.shares_vertex_with(super_triangle)
}

/// Finds every (triangle, point) pair breaking the empty-circumcircle rule.
///
/// A point counts as a violation only if it is not a vertex of the triangle
/// and lies more than `eps` inside the circumcircle, so co-circular points
/// (four corners of a square, say) are accepted. Degenerate triangles give a
/// NaN circle and report nothing.
///
/// Runs in O(triangles × points); meant for tests and debugging.
///
/// # Example
///
/// ```
/// use bowyer_watson::primitives::{Point2, Triangle2};
/// use bowyer_watson::triangulation::find_delaunay_violations;
///
/// let tri = Triangle2::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(0.0, 4.0),
/// );
/// let points = [tri.a, tri.b, tri.c, Point2::new(1.0, 1.0)];
///
/// let violations = find_delaunay_violations(&[tri], &points, 1e-9);
/// assert_eq!(violations.len(), 1);
/// assert_eq!(violations[0].point, 3);
/// ```
pub fn find_delaunay_violations<F: Float>(
    triangles: &[Triangle2<F>],
    points: &[Point2<F>],
    eps: F,
) -> Vec<DelaunayViolation<F>> {
    let mut violations = Vec::new();

    for (ti, tri) in triangles.iter().enumerate() {
        let circle = tri.circumcircle();
        for (pi, &p) in points.iter().enumerate() {
            if tri.contains_point(p) {
                continue;
            }
            let depth = -circle.signed_distance(p);
            if depth > eps {
                violations.push(DelaunayViolation {
                    triangle: ti,
                    point: pi,
                    depth,
                });
            }
        }
    }

    if !violations.is_empty() {
        tracing::debug!(
            violations = violations.len(),
            triangles = triangles.len(),
            "found Delaunay violations"
        );
    }
    violations
}

/// Returns `true` if no point lies more than `eps` inside the circumcircle
/// of a triangle it is not a vertex of.
pub fn is_delaunay<F: Float>(triangles: &[Triangle2<F>], points: &[Point2<F>], eps: F) -> bool {
    find_delaunay_violations(triangles, points, eps).is_empty()
}

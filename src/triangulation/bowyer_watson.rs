//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Start with a caller-supplied super triangle containing all points
//! 2. For each point, remove every triangle whose circumcircle contains it
//! 3. Fan new triangles from the point to the boundary of the removed region
//! 4. Remove triangles connected to the super triangle vertices
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, every insertion scans all current triangles
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use bowyer_watson::triangulation::delaunay_triangulation;
//! use bowyer_watson::primitives::{Point2, Triangle2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(0.5, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//! let super_triangle = Triangle2::new(
//!     Point2::new(-100.0, -100.0),
//!     Point2::new(100.0, -100.0),
//!     Point2::new(0.0, 100.0),
//! );
//!
//! let triangles = delaunay_triangulation(&points, super_triangle);
//!
//! // Interior point splits the outer triangle in three
//! assert_eq!(triangles.len(), 3);
//! for tri in &triangles {
//!     assert!(tri.contains_point(Point2::new(0.5, 0.3)));
//! }
//! ```

use super::config::TriangulationConfig;
use super::validation::touches_super_triangle;
use crate::error::{TriangulationError, TriangulationResult};
use crate::primitives::{Edge2, EdgeKey, Point2, Triangle2};
use num_traits::Float;
use std::collections::HashMap;

/// What a single insertion did to the working triangle set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionStats {
    /// Triangles whose circumcircle contained the point, now removed.
    pub bad_triangles: usize,
    /// Edges bounding the removed region.
    pub boundary_edges: usize,
    /// Triangles fanned from the point to the boundary edges.
    pub created_triangles: usize,
}

/// Incremental Bowyer-Watson triangulator.
///
/// Owns the working set of triangles, seeded with the super triangle. Each
/// call to [`insert`](Self::insert) commits one point before returning, so
/// the state is always a triangulation of the super triangle and every point
/// inserted so far. [`finish`](Self::finish) strips the triangles that touch
/// a super triangle vertex.
///
/// The caller must supply a non-degenerate super triangle that strictly
/// encloses every point to be inserted, and must not insert the same point
/// twice. These preconditions are not checked by [`insert`](Self::insert);
/// [`try_insert`](Self::try_insert) checks what its configuration asks for.
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::BowyerWatson;
/// use bowyer_watson::primitives::{Point2, Triangle2};
///
/// let mut bw = BowyerWatson::new(Triangle2::new(
///     Point2::new(-10.0_f64, -10.0),
///     Point2::new(10.0, -10.0),
///     Point2::new(0.0, 10.0),
/// ));
///
/// let stats = bw.insert(Point2::new(0.0, 0.0));
/// assert_eq!(stats.bad_triangles, 1);
/// assert_eq!(stats.created_triangles, 3);
///
/// bw.extend([Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)]);
/// assert_eq!(bw.inserted_count(), 3);
///
/// let triangles = bw.finish();
/// assert_eq!(triangles.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BowyerWatson<F> {
    super_triangle: Triangle2<F>,
    triangles: Vec<Triangle2<F>>,
    config: TriangulationConfig<F>,
    inserted: usize,
}

impl<F: Float> BowyerWatson<F> {
    /// Creates a triangulator seeded with `super_triangle`, using the
    /// default (check-free) configuration.
    pub fn new(super_triangle: Triangle2<F>) -> Self {
        Self {
            super_triangle,
            triangles: vec![super_triangle],
            config: TriangulationConfig::default(),
            inserted: 0,
        }
    }

    /// Creates a triangulator whose [`try_insert`](Self::try_insert) applies
    /// the checks in `config`.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::InvalidConfiguration`] if `config` fails validation
    /// - [`TriangulationError::DegenerateSuperTriangle`] if a degeneracy
    ///   tolerance is set and the super triangle is degenerate under it, or if
    ///   non-finite points are rejected and a super vertex is not finite
    pub fn with_config(
        super_triangle: Triangle2<F>,
        config: TriangulationConfig<F>,
    ) -> TriangulationResult<Self> {
        config.validate()?;

        let finite = super_triangle.vertices().iter().all(|v| v.is_finite());
        if config.reject_non_finite && !finite {
            tracing::warn!("super triangle has a non-finite vertex");
            return Err(TriangulationError::DegenerateSuperTriangle);
        }
        if let Some(eps) = config.degeneracy_tolerance {
            if super_triangle.is_degenerate(eps) {
                tracing::warn!("super triangle is degenerate within tolerance");
                return Err(TriangulationError::DegenerateSuperTriangle);
            }
        }

        let mut bw = Self::new(super_triangle);
        bw.config = config;
        Ok(bw)
    }

    /// The triangle the triangulation was seeded with.
    #[inline]
    pub fn super_triangle(&self) -> Triangle2<F> {
        self.super_triangle
    }

    /// The current working triangles, including those touching super vertices.
    #[inline]
    pub fn triangles(&self) -> &[Triangle2<F>] {
        &self.triangles
    }

    /// Number of working triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` if there are no working triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Number of points inserted so far.
    #[inline]
    pub fn inserted_count(&self) -> usize {
        self.inserted
    }

    /// The checks applied by [`try_insert`](Self::try_insert).
    #[inline]
    pub fn config(&self) -> &TriangulationConfig<F> {
        &self.config
    }

    /// Inserts a point, without any checks.
    ///
    /// Degenerate geometry is not detected: a zero circumcircle denominator
    /// yields a NaN or infinite circumcenter and the containment test simply
    /// answers whatever the comparison gives.
    pub fn insert(&mut self, p: Point2<F>) -> InsertionStats {
        let bad: Vec<usize> = self
            .triangles
            .iter()
            .enumerate()
            .filter(|(_, tri)| tri.circumcircle_contains(p))
            .map(|(i, _)| i)
            .collect();

        self.replace_cavity(p, &bad)
    }

    /// Inserts a point, applying the checks enabled in the configuration.
    ///
    /// On error the working triangles are left exactly as they were.
    ///
    /// # Errors
    ///
    /// - [`TriangulationError::NonFinitePoint`] if `reject_non_finite` is set
    ///   and `p` has a NaN or infinite coordinate
    /// - [`TriangulationError::DegenerateTriangle`] if a degeneracy tolerance
    ///   is set and a working triangle's circumcircle denominator is within it
    pub fn try_insert(&mut self, p: Point2<F>) -> TriangulationResult<InsertionStats> {
        if self.config.reject_non_finite && !p.is_finite() {
            tracing::warn!(index = self.inserted, "rejecting non-finite point");
            return Err(TriangulationError::NonFinitePoint {
                index: self.inserted,
            });
        }

        let Some(eps) = self.config.degeneracy_tolerance else {
            return Ok(self.insert(p));
        };
        let bad = self.checked_bad_triangles(p, eps)?;

        Ok(self.replace_cavity(p, &bad))
    }

    /// Finds the triangles whose circumcircle contains `p`, refusing to test
    /// against degenerate ones.
    fn checked_bad_triangles(&self, p: Point2<F>, eps: F) -> TriangulationResult<Vec<usize>> {
        let mut bad = Vec::new();

        for (index, tri) in self.triangles.iter().enumerate() {
            let Some(circle) = tri.try_circumcircle(eps) else {
                tracing::warn!(
                    index,
                    point = self.inserted,
                    "degenerate triangle in working set"
                );
                return Err(TriangulationError::DegenerateTriangle { index });
            };
            if circle.contains(p) {
                bad.push(index);
            }
        }

        Ok(bad)
    }

    /// Removes the bad triangles and re-triangulates the hole around `p`.
    ///
    /// `bad` holds indices into the working set in ascending order.
    fn replace_cavity(&mut self, p: Point2<F>, bad: &[usize]) -> InsertionStats {
        let mut edges: Vec<Edge2<F>> = Vec::with_capacity(bad.len() * 3);
        for &i in bad {
            edges.extend(self.triangles[i].edges());
        }

        let mut is_bad = vec![false; self.triangles.len()];
        for &i in bad {
            is_bad[i] = true;
        }
        let mut index = 0;
        self.triangles.retain(|_| {
            let keep = !is_bad[index];
            index += 1;
            keep
        });

        let boundary = boundary_edges(&edges);
        self.triangles
            .extend(boundary.iter().map(|e| Triangle2::new(e.a, e.b, p)));

        let stats = InsertionStats {
            bad_triangles: bad.len(),
            boundary_edges: boundary.len(),
            created_triangles: boundary.len(),
        };
        tracing::trace!(
            point = self.inserted,
            bad = stats.bad_triangles,
            boundary = stats.boundary_edges,
            total = self.triangles.len(),
            "inserted point"
        );
        self.inserted += 1;

        stats
    }

    /// Drops every triangle touching a super triangle vertex and returns the
    /// rest, in the order they were created.
    pub fn finish(self) -> Vec<Triangle2<F>> {
        let super_triangle = self.super_triangle;
        let mut triangles = self.triangles;
        let before = triangles.len();

        triangles.retain(|tri| !touches_super_triangle(tri, &super_triangle));

        tracing::debug!(
            points = self.inserted,
            kept = triangles.len(),
            pruned = before - triangles.len(),
            "finished triangulation"
        );
        triangles
    }
}

impl<F: Float> Extend<Point2<F>> for BowyerWatson<F> {
    /// Inserts each point in turn, without checks.
    fn extend<I: IntoIterator<Item = Point2<F>>>(&mut self, points: I) {
        for p in points {
            self.insert(p);
        }
    }
}

/// Returns the edges that occur exactly once in `edges`.
///
/// Edges are grouped by identity ([`Edge2::key`]), so `a–b` and `b–a` count
/// as the same edge no matter where they sit in the list. Any edge seen two
/// or more times is dropped entirely. Survivors keep their original order.
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::boundary_edges;
/// use bowyer_watson::primitives::{Edge2, Point2};
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.0, 1.0);
///
/// let edges = [Edge2::new(a, b), Edge2::new(a, c), Edge2::new(b, a)];
/// assert_eq!(boundary_edges(&edges), vec![Edge2::new(a, c)]);
/// ```
pub fn boundary_edges<F: Float>(edges: &[Edge2<F>]) -> Vec<Edge2<F>> {
    let keys: Vec<EdgeKey> = edges.iter().map(Edge2::key).collect();

    let mut counts: HashMap<EdgeKey, usize> = HashMap::with_capacity(keys.len());
    for &key in &keys {
        *counts.entry(key).or_insert(0) += 1;
    }

    edges
        .iter()
        .zip(&keys)
        .filter(|(_, key)| counts.get(*key) == Some(&1))
        .map(|(edge, _)| *edge)
        .collect()
}

/// Computes the Delaunay triangulation of `points` inside `super_triangle`.
///
/// Points are inserted in the given order. The result holds every triangle
/// of the final triangulation that does not touch a super triangle vertex,
/// in creation order.
///
/// Zero or one input point always gives an empty result, since every
/// triangle then uses a super vertex.
///
/// # Arguments
///
/// * `points` - The points to triangulate, pairwise distinct
/// * `super_triangle` - A non-degenerate triangle enclosing every point
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::delaunay_triangulation;
/// use bowyer_watson::primitives::{Point2, Triangle2};
///
/// // Square with center point
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
/// let super_triangle = Triangle2::new(
///     Point2::new(-100.0, -100.0),
///     Point2::new(100.0, -100.0),
///     Point2::new(0.0, 100.0),
/// );
///
/// let triangles = delaunay_triangulation(&points, super_triangle);
/// assert_eq!(triangles.len(), 4);
/// ```
pub fn delaunay_triangulation<F: Float>(
    points: &[Point2<F>],
    super_triangle: Triangle2<F>,
) -> Vec<Triangle2<F>> {
    tracing::debug!(points = points.len(), "starting triangulation");

    let mut bw = BowyerWatson::new(super_triangle);
    bw.extend(points.iter().copied());
    bw.finish()
}

/// Like [`delaunay_triangulation`], but applies the checks in `config` and
/// reports degenerate or non-finite input as an error.
///
/// # Errors
///
/// See [`BowyerWatson::with_config`] and [`BowyerWatson::try_insert`].
///
/// # Example
///
/// ```
/// use bowyer_watson::error::TriangulationError;
/// use bowyer_watson::primitives::{Point2, Triangle2};
/// use bowyer_watson::triangulation::{try_delaunay_triangulation, TriangulationConfig};
///
/// let collinear = Triangle2::new(
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// );
/// let config = TriangulationConfig::strict(1e-12);
///
/// let result = try_delaunay_triangulation(&[Point2::new(1.0, 0.5)], collinear, &config);
/// assert_eq!(result, Err(TriangulationError::DegenerateSuperTriangle));
/// ```
pub fn try_delaunay_triangulation<F: Float>(
    points: &[Point2<F>],
    super_triangle: Triangle2<F>,
    config: &TriangulationConfig<F>,
) -> TriangulationResult<Vec<Triangle2<F>>> {
    tracing::debug!(points = points.len(), "starting checked triangulation");

    let mut bw = BowyerWatson::with_config(super_triangle, *config)?;
    for &p in points {
        bw.try_insert(p)?;
    }
    Ok(bw.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::{convex_hull, convex_hull_area};
    use crate::triangulation::validation::is_delaunay;
    use approx::assert_relative_eq;

    fn super_triangle() -> Triangle2<f64> {
        Triangle2::new(
            Point2::new(-100.0, -100.0),
            Point2::new(100.0, -100.0),
            Point2::new(0.0, 100.0),
        )
    }

    fn scattered_points() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.1, 0.2),
            Point2::new(0.8, 0.1),
            Point2::new(0.9, 0.9),
            Point2::new(0.2, 0.85),
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.3),
            Point2::new(0.7, 0.6),
            Point2::new(0.4, 0.8),
        ]
    }

    /// Sorted vertex triples, for comparing triangulations as sets.
    fn canonical(triangles: &[Triangle2<f64>]) -> Vec<[(f64, f64); 3]> {
        let mut out: Vec<[(f64, f64); 3]> = triangles
            .iter()
            .map(|t| {
                let mut v = t.vertices().map(|p| (p.x, p.y));
                v.sort_by(|a, b| a.partial_cmp(b).unwrap());
                v
            })
            .collect();
        out.sort_by(|a, b| a.partial_cmp(b).unwrap());
        out
    }

    #[test]
    fn test_new_seeds_super_triangle() {
        let bw = BowyerWatson::new(super_triangle());
        assert_eq!(bw.triangles(), &[super_triangle()]);
        assert_eq!(bw.len(), 1);
        assert!(!bw.is_empty());
        assert_eq!(bw.inserted_count(), 0);
        assert_eq!(bw.super_triangle(), super_triangle());
    }

    #[test]
    fn test_empty_input() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(delaunay_triangulation(&points, super_triangle()).is_empty());
    }

    #[test]
    fn test_one_point() {
        let mut bw = BowyerWatson::new(super_triangle());
        let stats = bw.insert(Point2::new(0.0, 0.0));
        assert_eq!(
            stats,
            InsertionStats {
                bad_triangles: 1,
                boundary_edges: 3,
                created_triangles: 3,
            }
        );
        // Fan of three, every one touching the super triangle
        assert_eq!(bw.len(), 3);
        assert!(bw.finish().is_empty());

        let triangles = delaunay_triangulation(&[Point2::new(0.0, 0.0)], super_triangle());
        assert!(triangles.is_empty());
    }

    #[test]
    fn test_first_insertion_fans_in_edge_order() {
        let st = super_triangle();
        let p = Point2::new(0.0, 0.0);
        let mut bw = BowyerWatson::new(st);
        bw.insert(p);
        assert_eq!(
            bw.triangles(),
            &[
                Triangle2::new(st.a, st.b, p),
                Triangle2::new(st.a, st.c, p),
                Triangle2::new(st.b, st.c, p),
            ]
        );
    }

    #[test]
    fn test_two_points() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(delaunay_triangulation(&points, super_triangle()).is_empty());
    }

    #[test]
    fn test_three_points() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let triangles = delaunay_triangulation(&points, super_triangle());
        assert_eq!(triangles.len(), 1);
        for p in &points {
            assert!(triangles[0].contains_point(*p));
        }
    }

    #[test]
    fn test_unit_square_either_diagonal() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let triangles = delaunay_triangulation(&points, super_triangle());
        assert_eq!(triangles.len(), 2);

        for tri in &triangles {
            let corners = points.iter().filter(|p| tri.contains_point(**p)).count();
            assert_eq!(corners, 3);
        }

        // The two triangles share exactly one diagonal
        let shared: Vec<Point2<f64>> = points
            .iter()
            .copied()
            .filter(|p| triangles[0].contains_point(*p) && triangles[1].contains_point(*p))
            .collect();
        assert_eq!(shared.len(), 2);
        let diagonal_a = shared.contains(&points[0]) && shared.contains(&points[2]);
        let diagonal_b = shared.contains(&points[1]) && shared.contains(&points[3]);
        assert!(diagonal_a || diagonal_b);

        let total: f64 = triangles.iter().map(|t| t.area()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert!(is_delaunay(&triangles, &points, 1e-9));
    }

    #[test]
    fn test_square_with_center() {
        let center = Point2::new(0.5, 0.5);
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            center,
        ];
        let triangles = delaunay_triangulation(&points, super_triangle());
        assert_eq!(triangles.len(), 4);
        for tri in &triangles {
            assert!(tri.contains_point(center));
            assert_relative_eq!(tri.area(), 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_scattered_points_count_and_coverage() {
        let points = scattered_points();
        let triangles = delaunay_triangulation(&points, super_triangle());

        // 2n - 2 - h with n = 8 and four hull points
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert_eq!(triangles.len(), 2 * points.len() - 2 - hull.len());

        let total: f64 = triangles.iter().map(|t| t.area()).sum();
        assert_relative_eq!(total, convex_hull_area(&hull), epsilon = 1e-9);

        assert!(is_delaunay(&triangles, &points, 1e-9));
    }

    #[test]
    fn test_every_point_is_used() {
        let points = scattered_points();
        let triangles = delaunay_triangulation(&points, super_triangle());
        for p in &points {
            assert!(
                triangles.iter().any(|t| t.contains_point(*p)),
                "point {:?} not used in triangulation",
                p
            );
        }
    }

    #[test]
    fn test_no_super_vertex_leaks() {
        let st = super_triangle();
        let triangles = delaunay_triangulation(&scattered_points(), st);
        for tri in &triangles {
            for v in st.vertices() {
                assert!(!tri.contains_point(v));
            }
        }
    }

    #[test]
    fn test_working_set_tiles_super_triangle() {
        // After every insertion the working triangles exactly cover the
        // super triangle: no gaps, no overlaps.
        let st = super_triangle();
        let mut bw = BowyerWatson::new(st);
        for p in scattered_points() {
            bw.insert(p);
            let total: f64 = bw.triangles().iter().map(|t| t.area()).sum();
            assert_relative_eq!(total, st.area(), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_stats_track_triangle_count() {
        let mut bw = BowyerWatson::new(super_triangle());
        let mut expected = 1;
        for p in scattered_points() {
            let stats = bw.insert(p);
            assert!(stats.bad_triangles >= 1);
            assert_eq!(stats.created_triangles, stats.boundary_edges);
            // Star-shaped cavity: boundary edges = removed triangles + 2
            assert_eq!(stats.boundary_edges, stats.bad_triangles + 2);
            expected = expected - stats.bad_triangles + stats.created_triangles;
            assert_eq!(bw.len(), expected);
        }

        let st = bw.super_triangle();
        let touching = bw
            .triangles()
            .iter()
            .filter(|t| touches_super_triangle(*t, &st))
            .count();
        let after_loop = bw.len();
        assert_eq!(bw.finish().len(), after_loop - touching);
    }

    #[test]
    fn test_deterministic() {
        let points = scattered_points();
        let first = delaunay_triangulation(&points, super_triangle());
        let second = delaunay_triangulation(&points, super_triangle());
        assert_eq!(first, second);
    }

    #[test]
    fn test_insertion_order_does_not_change_result() {
        let points = scattered_points();
        let mut reversed = points.clone();
        reversed.reverse();

        let forward = delaunay_triangulation(&points, super_triangle());
        let backward = delaunay_triangulation(&reversed, super_triangle());
        assert_eq!(canonical(&forward), canonical(&backward));
    }

    #[test]
    fn test_extend_matches_insert() {
        let points = scattered_points();
        let mut a = BowyerWatson::new(super_triangle());
        let mut b = BowyerWatson::new(super_triangle());
        a.extend(points.iter().copied());
        for &p in &points {
            b.insert(p);
        }
        assert_eq!(a.triangles(), b.triangles());
        assert_eq!(a.inserted_count(), points.len());
    }

    #[test]
    fn test_boundary_edges_non_adjacent_duplicates() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        let d = Point2::new(1.0, 1.0);

        // Shared edge b–c appears at positions 2 and 5, not next to each other
        let edges = [
            Edge2::new(a, b),
            Edge2::new(a, c),
            Edge2::new(b, c),
            Edge2::new(b, d),
            Edge2::new(d, c),
            Edge2::new(c, b),
        ];
        let boundary = boundary_edges(&edges);
        assert_eq!(
            boundary,
            vec![
                Edge2::new(a, b),
                Edge2::new(a, c),
                Edge2::new(b, d),
                Edge2::new(d, c),
            ]
        );
    }

    #[test]
    fn test_boundary_edges_drops_any_repeat() {
        let a = Point2::new(0.0_f64, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);

        let edges = [
            Edge2::new(a, b),
            Edge2::new(b, a),
            Edge2::new(a, b),
            Edge2::new(b, c),
        ];
        assert_eq!(boundary_edges(&edges), vec![Edge2::new(b, c)]);
        assert!(boundary_edges::<f64>(&[]).is_empty());
    }

    #[test]
    fn test_try_insert_without_checks_matches_insert() {
        let points = scattered_points();
        let checked =
            try_delaunay_triangulation(&points, super_triangle(), &TriangulationConfig::default())
                .unwrap();
        assert_eq!(checked, delaunay_triangulation(&points, super_triangle()));
    }

    #[test]
    fn test_strict_config_accepts_general_position() {
        let points = scattered_points();
        let checked = try_delaunay_triangulation(
            &points,
            super_triangle(),
            &TriangulationConfig::strict(1e-12),
        )
        .unwrap();
        assert_eq!(checked, delaunay_triangulation(&points, super_triangle()));
    }

    #[test]
    fn test_with_config_rejects_degenerate_super_triangle() {
        let flat = Triangle2::new(
            Point2::new(-1.0_f64, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
        );
        let err = BowyerWatson::with_config(flat, TriangulationConfig::strict(0.0)).unwrap_err();
        assert_eq!(err, TriangulationError::DegenerateSuperTriangle);

        // Without a tolerance the reference behavior accepts it
        assert!(BowyerWatson::with_config(flat, TriangulationConfig::default()).is_ok());
    }

    #[test]
    fn test_with_config_rejects_invalid_config() {
        let config = TriangulationConfig::new().with_degeneracy_tolerance(-1.0);
        let err = BowyerWatson::with_config(super_triangle(), config).unwrap_err();
        assert!(matches!(
            err,
            TriangulationError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_try_insert_rejects_non_finite_point() {
        let config = TriangulationConfig::new().with_reject_non_finite(true);
        let mut bw = BowyerWatson::with_config(super_triangle(), config).unwrap();
        bw.try_insert(Point2::new(0.0, 0.0)).unwrap();
        let before = bw.triangles().to_vec();

        let err = bw.try_insert(Point2::new(f64::NAN, 1.0)).unwrap_err();
        assert_eq!(err, TriangulationError::NonFinitePoint { index: 1 });
        assert_eq!(bw.triangles(), before.as_slice());
        assert_eq!(bw.inserted_count(), 1);
    }

    #[test]
    fn test_try_insert_rejects_degenerate_working_triangle() {
        let st = Triangle2::new(
            Point2::new(-10.0_f64, -10.0),
            Point2::new(10.0, -10.0),
            Point2::new(0.0, 10.0),
        );
        let mut bw = BowyerWatson::with_config(st, TriangulationConfig::strict(1e-12)).unwrap();

        // On the super triangle's bottom edge: the first fan triangle is flat
        bw.try_insert(Point2::new(0.0, -10.0)).unwrap();
        assert!(bw.triangles()[0].is_degenerate(1e-12));
        let before = bw.triangles().to_vec();

        let err = bw.try_insert(Point2::new(1.0, 1.0)).unwrap_err();
        assert_eq!(err, TriangulationError::DegenerateTriangle { index: 0 });
        assert_eq!(bw.triangles(), before.as_slice());
    }

    #[test]
    fn test_unchecked_insert_tolerates_degenerate_triangle() {
        let st = Triangle2::new(
            Point2::new(-10.0_f64, -10.0),
            Point2::new(10.0, -10.0),
            Point2::new(0.0, 10.0),
        );
        let mut bw = BowyerWatson::new(st);
        bw.insert(Point2::new(0.0, -10.0));
        bw.insert(Point2::new(1.0, 1.0));
        assert_eq!(bw.inserted_count(), 2);
    }

    #[test]
    fn test_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 1.0),
        ];
        let st = Triangle2::new(
            Point2::new(-100.0, -100.0),
            Point2::new(100.0, -100.0),
            Point2::new(0.0, 100.0),
        );
        let triangles = delaunay_triangulation(&points, st);
        assert_eq!(triangles.len(), 1);
    }
}

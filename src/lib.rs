//! bowyer_watson - Incremental Delaunay triangulation in the plane
//!
//! Triangulates a set of 2D points with the Bowyer-Watson algorithm, starting
//! from a caller-supplied super triangle that encloses every point. Points
//! are inserted one at a time; each insertion removes the triangles whose
//! circumcircle contains the new point and re-fans the hole from it.
//!
//! The default path uses the plain floating-point circumcircle formula and
//! never fails. The `try_*` entry points can reject degenerate geometry and
//! non-finite input, see [`TriangulationConfig`].
//!
//! ```
//! use bowyer_watson::{delaunay_triangulation, Point2, Triangle2};
//!
//! let points = [
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ];
//! let super_triangle = Triangle2::new(
//!     Point2::new(-10.0, -10.0),
//!     Point2::new(10.0, -10.0),
//!     Point2::new(0.0, 10.0),
//! );
//!
//! let triangles = delaunay_triangulation(&points, super_triangle);
//! assert_eq!(triangles.len(), 2);
//! ```

pub mod error;
pub mod hull;
pub mod primitives;
pub mod triangulation;

pub use error::{TriangulationError, TriangulationResult};
pub use primitives::{Circle2, Edge2, Point2, Triangle2};
pub use triangulation::{
    delaunay_triangulation, try_delaunay_triangulation, BowyerWatson, InsertionStats,
    TriangulationConfig,
};

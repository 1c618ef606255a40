//! Delaunay triangulation of point sets.
//!
//! This module provides the incremental Bowyer-Watson triangulator, its
//! one-shot entry points, and helpers for checking the result.

mod bowyer_watson;
mod config;
mod validation;

pub use bowyer_watson::{
    boundary_edges, delaunay_triangulation, try_delaunay_triangulation, BowyerWatson,
    InsertionStats,
};
pub use config::TriangulationConfig;
pub use validation::{
    find_delaunay_violations, is_delaunay, touches_super_triangle, DelaunayViolation,
};

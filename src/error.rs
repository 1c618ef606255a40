//! Error types for checked triangulation.

use thiserror::Error;

/// Errors reported by the checked (`try_*`) triangulation entry points.
///
/// The unchecked path never produces these: it lets degenerate geometry
/// flow through the floating-point formulas instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// The super triangle's vertices are collinear within tolerance.
    #[error("degenerate super triangle: vertices are collinear within tolerance")]
    DegenerateSuperTriangle,

    /// A working triangle has a vanishing circumcircle denominator.
    #[error("degenerate triangle at index {index}: circumcircle is undefined")]
    DegenerateTriangle {
        /// Position of the triangle in the working collection.
        index: usize,
    },

    /// An input point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinitePoint {
        /// Insertion index of the point.
        index: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        message: String,
    },
}

/// Convenience alias for results of checked triangulation.
pub type TriangulationResult<T> = Result<T, TriangulationError>;

//! Options for checked triangulation.

use crate::error::{TriangulationError, TriangulationResult};
use num_traits::Float;

/// Controls the checks performed by [`BowyerWatson::try_insert`] and
/// [`try_delaunay_triangulation`].
///
/// The default configuration performs no checks, so the checked path
/// behaves exactly like the unchecked one.
///
/// [`BowyerWatson::try_insert`]: super::BowyerWatson::try_insert
/// [`try_delaunay_triangulation`]: super::try_delaunay_triangulation
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::TriangulationConfig;
///
/// let config = TriangulationConfig::new()
///     .with_degeneracy_tolerance(1e-12)
///     .with_reject_non_finite(true);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationConfig<F> {
    /// Reject triangles whose circumcircle denominator has magnitude at or
    /// below this value. `None` disables the check.
    pub degeneracy_tolerance: Option<F>,
    /// Reject input points with NaN or infinite coordinates.
    pub reject_non_finite: bool,
}

impl<F: Float> Default for TriangulationConfig<F> {
    fn default() -> Self {
        Self {
            degeneracy_tolerance: None,
            reject_non_finite: false,
        }
    }
}

impl<F: Float> TriangulationConfig<F> {
    /// Creates a configuration with every check disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with every check enabled, using `tolerance` for the
    /// degeneracy test.
    pub fn strict(tolerance: F) -> Self {
        Self {
            degeneracy_tolerance: Some(tolerance),
            reject_non_finite: true,
        }
    }

    /// Rejects triangles whose circumcircle denominator is within `tolerance` of zero.
    pub fn with_degeneracy_tolerance(mut self, tolerance: F) -> Self {
        self.degeneracy_tolerance = Some(tolerance);
        self
    }

    /// Disables the degeneracy check.
    pub fn without_degeneracy_check(mut self) -> Self {
        self.degeneracy_tolerance = None;
        self
    }

    /// Sets whether points with NaN or infinite coordinates are rejected.
    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    /// Checks that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::InvalidConfiguration`] if the degeneracy
    /// tolerance is NaN, infinite or negative.
    pub fn validate(&self) -> TriangulationResult<()> {
        if let Some(eps) = self.degeneracy_tolerance {
            if !eps.is_finite() {
                return Err(TriangulationError::InvalidConfiguration {
                    message: "degeneracy tolerance must be finite".to_string(),
                });
            }
            if eps < F::zero() {
                return Err(TriangulationError::InvalidConfiguration {
                    message: "degeneracy tolerance must be non-negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

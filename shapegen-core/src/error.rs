/// Error taxonomy for shape construction
use thiserror::Error;

/// Errors reported when a shape builder rejects its inputs.
///
/// Every builder validates before generating any geometry, so a
/// successfully constructed shape never contains NaN or infinite
/// coordinates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A vector that must define a direction has (near-)zero length.
    #[error("{context}: vector has near-zero length")]
    DegenerateVector { context: &'static str },

    /// Two control points that must differ coincide.
    #[error("{context}: control points coincide")]
    CoincidentPoints { context: &'static str },

    /// The square's corner does not lie in the plane through the center
    /// orthogonal to the normal.
    #[error("square corner does not lie in the plane of the square")]
    CornerOutOfPlane,

    /// The cube's two defining normals are (anti-)parallel, so no frame
    /// can be derived from them.
    #[error("cube normals are parallel, cannot derive an orthogonal frame")]
    ParallelNormals,

    /// Radius must be a positive, finite number.
    #[error("radius must be positive and finite, got {radius}")]
    NonPositiveRadius { radius: f32 },

    /// A round shape needs at least three segments to close.
    #[error("at least 3 segments required, got {segments}")]
    TooFewSegments { segments: usize },

    /// Subdivision depth beyond the supported bound; triangle count grows
    /// as 20 * 4^depth.
    #[error("subdivision depth {depth} exceeds maximum {max}")]
    DepthLimit { depth: u32, max: u32 },
}

/// Validate a radius parameter shared by several builders.
pub(crate) fn check_radius(radius: f32) -> Result<(), ShapeError> {
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        Err(ShapeError::NonPositiveRadius { radius })
    }
}

/// Validate a segment count shared by the round builders.
pub(crate) fn check_segments(segments: usize) -> Result<(), ShapeError> {
    if segments >= 3 {
        Ok(())
    } else {
        Err(ShapeError::TooFewSegments { segments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_validation() {
        assert!(check_radius(1.0).is_ok());
        assert_eq!(
            check_radius(0.0),
            Err(ShapeError::NonPositiveRadius { radius: 0.0 })
        );
        assert!(check_radius(-2.0).is_err());
        assert!(check_radius(f32::NAN).is_err());
        assert!(check_radius(f32::INFINITY).is_err());
    }

    #[test]
    fn test_segment_validation() {
        assert!(check_segments(3).is_ok());
        assert_eq!(
            check_segments(2),
            Err(ShapeError::TooFewSegments { segments: 2 })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ShapeError::DepthLimit { depth: 12, max: 8 };
        assert_eq!(err.to_string(), "subdivision depth 12 exceeds maximum 8");
    }
}

use thiserror::Error;

/// Top-level error for clipping and offsetting calls.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipperError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Caller-correctable input problems, reported before any sweep state exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("open paths can only be added as subject paths")]
    OpenClipPath,

    #[error("coordinate ({x}, {y}) is outside the supported range")]
    CoordinateOutOfRange { x: i64, y: i64 },

    #[error("unknown clip type code {0}")]
    UnknownClipType(u8),

    #[error("unknown fill type code {0}")]
    UnknownFillType(u8),

    #[error("unknown join type code {0}")]
    UnknownJoinType(u8),

    #[error("unknown end type code {0}")]
    UnknownEndType(u8),

    #[error("arc tolerance {0} must be a finite non-negative number")]
    InvalidArcTolerance(f64),

    #[error("miter limit {0} must be a finite number of at least 1")]
    InvalidMiterLimit(f64),

    #[error("offset delta {0} must be finite")]
    InvalidDelta(f64),

    #[error("packed path buffer is malformed")]
    MalformedBuffer,
}

/// Broken sweep invariants. Not caller-correctable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("intersection edges are not adjacent in the active edge list")]
    EdgesNotAdjacent,

    #[error("merging output contours would create an owner cycle")]
    OwnerCycle,

    #[error("edge {0} was expected to carry an output contour")]
    EdgeNotHot(usize),

    #[error("both edges closing a contour sit on the same side")]
    MismatchedSides,

    #[error("output contour {0} lost its point ring")]
    DanglingIndex(usize),
}

pub type Result<T> = std::result::Result<T, ClipperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_keeps_category() {
        let err: ClipperError = ConfigurationError::OpenClipPath.into();
        assert!(matches!(err, ClipperError::Configuration(_)));

        let err: ClipperError = InvariantViolation::OwnerCycle.into();
        assert!(matches!(err, ClipperError::Invariant(_)));
        assert_eq!(
            err.to_string(),
            "merging output contours would create an owner cycle"
        );
    }
}

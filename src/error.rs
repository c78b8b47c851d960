use thiserror::Error;

/// Errors raised by shape constructors with structural preconditions.
///
/// Geometric queries (containment, projection, intersection) never
/// return errors: degenerate inputs resolve to empty or fallback
/// results instead.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

use thiserror::Error;

/// Errors reported by the fixture layer.
///
/// Graph-level misuse (incompatible broadcast shapes, arity mismatches) is
/// validated by the graph core itself and panics there; it is not
/// re-interpreted here.
#[derive(Debug, Error, PartialEq)]
pub enum FixtureError {
    /// The facade was constructed with the wrong number of input shapes.
    #[error("expected {expected} input shapes, got {actual}")]
    InputShapeCount { expected: usize, actual: usize },
    /// A retrieval path that is intentionally not implemented.
    #[error("{0} graphs are not implemented")]
    Unsupported(&'static str),
}

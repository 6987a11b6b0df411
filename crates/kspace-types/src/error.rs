use thiserror::Error;

#[derive(Error, Debug)]
pub enum KSpaceError {
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Index out of range on axis {axis}: {index} not in [0, {len})")]
    OutOfRange { axis: char, index: isize, len: usize },

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Empty shape: ({nx}, {ny}) has a zero-length axis")]
    EmptyShape { nx: usize, ny: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type KSpaceResult<T> = Result<T, KSpaceError>;

/// Fails with `ShapeMismatch` unless `found == expected`.
pub fn ensure_same_shape(expected: (usize, usize), found: (usize, usize)) -> KSpaceResult<()> {
    if expected != found {
        return Err(KSpaceError::ShapeMismatch { expected, found });
    }
    Ok(())
}

/// Fails with `EmptyShape` if either axis has length zero.
pub fn ensure_non_empty(shape: (usize, usize)) -> KSpaceResult<()> {
    if shape.0 == 0 || shape.1 == 0 {
        return Err(KSpaceError::EmptyShape {
            nx: shape.0,
            ny: shape.1,
        });
    }
    Ok(())
}

use thiserror::Error;

use crate::Shape;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    #[error("expected two 2x2 matrices, got {left} and {right}")]
    DimensionMismatch { left: Shape, right: Shape },
}

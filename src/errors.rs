//! Error types with diagnostics using miette
//!
//! The geometry kernel itself asserts its preconditions. Only grid storage
//! reports recoverable lookup failures.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Coord, Dimen, Rect};

/// Errors from bounds-checked grid access
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinate {coord} is outside grid of {dimen}")]
    #[diagnostic(
        code(int2d::grid::out_of_bounds),
        help("valid coordinates lie in [0, w) x [0, h)")
    )]
    OutOfBounds { coord: Coord, dimen: Dimen },

    #[error("index {index} is out of range for grid of {len} cells")]
    #[diagnostic(code(int2d::grid::index_out_of_range))]
    IndexOutOfRange { index: usize, len: usize },

    #[error("rectangle {rect} does not fit inside grid of {dimen}")]
    #[diagnostic(
        code(int2d::grid::rect_out_of_bounds),
        help("crop the rectangle to the grid extent first")
    )]
    RectOutOfBounds { rect: Rect, dimen: Dimen },
}

/// Convenience alias for grid results
pub type GridResult<T> = Result<T, GridError>;

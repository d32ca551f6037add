//! Error types for the ndlerp library.
//!
//! All fallible operations return `Result<T, LerpError>` rather than panicking.
//! Every variant maps onto one of the closed [`Status`] codes consumed by a
//! binding layer, see [`LerpError::status`].

use thiserror::Error;

use crate::status::Status;

/// Convenience type alias for results in this crate.
pub type Result<T> = std::result::Result<T, LerpError>;

/// Errors that can occur during table construction and evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LerpError {
    /// The query lies outside the grid on `axis` and extrapolation is disabled.
    #[error("requested value {value} is outside the range [{lower}, {upper}] of axis {axis}")]
    OutOfBounds {
        axis: usize,
        value: f64,
        /// First breakpoint of the axis.
        lower: f64,
        /// Last breakpoint of the axis.
        upper: f64,
    },

    /// The point (or delta) vector does not match the table's dimensionality.
    #[error("wrong number of parameters: expected {expected}, got {got}")]
    WrongNParams { expected: usize, got: usize },

    /// No table was supplied to an entry point that requires one.
    #[error("dataset not found: {message}")]
    DatasetNotFound { message: String },

    /// An interpolation or extrapolation tag outside the closed set.
    #[error("unknown method: {message}")]
    UnknownMethod { message: String },

    /// Table buffers are inconsistent (shape, coordinate lengths, ordering).
    #[error("invalid table: {message}")]
    InvalidTable { message: String },

    /// A query argument is unusable (e.g. NaN coordinate).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl LerpError {
    /// The status code reported across the binding boundary for this error.
    ///
    /// `InvalidTable` has no code of its own and reports `DatasetNotFound`;
    /// `InvalidInput` reports `WrongNParams`.
    pub fn status(&self) -> Status {
        match self {
            LerpError::OutOfBounds { .. } => Status::OutOfBounds,
            LerpError::WrongNParams { .. } | LerpError::InvalidInput { .. } => Status::WrongNParams,
            LerpError::DatasetNotFound { .. } | LerpError::InvalidTable { .. } => {
                Status::DatasetNotFound
            }
            LerpError::UnknownMethod { .. } => Status::UnknownMethod,
        }
    }
}

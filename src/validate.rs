//! Input validation helpers.
//!
//! Standardizes validation across the crate using `!is_finite()` to reject
//! NaN, +Inf, and -Inf uniformly.

use crate::error::LerpError;

/// Validate that every query coordinate is finite.
pub(crate) fn validate_point(point: &[f64], name: &str) -> crate::error::Result<()> {
    if let Some((axis, value)) = point.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(LerpError::InvalidInput {
            message: format!("{name}[{axis}] must be finite, got {value}"),
        });
    }
    Ok(())
}

/// Validate that a vector has one entry per table axis.
pub(crate) fn validate_len(len: usize, ndim: usize) -> crate::error::Result<()> {
    if len != ndim {
        return Err(LerpError::WrongNParams {
            expected: ndim,
            got: len,
        });
    }
    Ok(())
}

/// Validate that a breakpoint array is finite and strictly increasing, with every
/// interval width representable as a finite `f64`.
pub(crate) fn validate_breakpoints(coords: &[f64], axis: usize) -> crate::error::Result<()> {
    for c in coords {
        if !c.is_finite() {
            return Err(LerpError::InvalidTable {
                message: format!("coordinates of axis {axis} must be finite, got {c}"),
            });
        }
    }
    for (i, w) in coords.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(LerpError::InvalidTable {
                message: format!(
                    "coordinates of axis {axis} must be strictly increasing, but coords[{}]={} >= coords[{}]={}",
                    i,
                    w[0],
                    i + 1,
                    w[1]
                ),
            });
        }
        if !(w[1] - w[0]).is_finite() {
            return Err(LerpError::InvalidTable {
                message: format!(
                    "coordinates of axis {axis} span a non-representable interval between coords[{}]={} and coords[{}]={}",
                    i,
                    w[0],
                    i + 1,
                    w[1]
                ),
            });
        }
    }
    Ok(())
}

//! Rectilinear N-dimensional lookup tables.
//!
//! A [`GridTable`] is a read-only view over caller-owned buffers: one dense
//! sample array in row-major order (last axis fastest) plus one strictly
//! increasing breakpoint array per axis. Nothing is copied and nothing is
//! mutated, so a table can be shared freely between threads for as long as
//! the buffers live.
//!
//! All consistency checks happen once, in [`GridTable::new`]. The evaluation
//! hot path ([`GridTable::sub2ind`], [`GridTable::value_at`]) relies on them
//! and does no bounds checking of its own beyond slice indexing.

use crate::config::EvalConfig;
use crate::error::{self, LerpError};
use crate::eval::{self, Evaluation};
use crate::method::{ExtrapMethod, InterpMethod};
use crate::validate::validate_breakpoints;

/// Largest supported axis count.
///
/// Evaluation cost grows as `stencil^ndim`, so tables past a handful of axes
/// are impractical long before this limit is reached.
pub const MAX_NDIM: usize = 32;

/// Read-only N-dimensional lookup table over borrowed buffers.
///
/// # Examples
/// ```
/// use ndlerp::GridTable;
///
/// let x = [0.0, 1.0];
/// let y = [0.0, 1.0];
/// let data = [0.0, 1.0, 1.0, 2.0]; // f(x, y) = x + y, row-major
/// let table = GridTable::new(&data, &[2, 2], vec![&x[..], &y[..]])?;
///
/// assert_eq!(table.ndim(), 2);
/// assert_eq!(table.value_at(&[1, 0]), 1.0);
/// # Ok::<(), ndlerp::LerpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GridTable<'a> {
    shape: Vec<usize>,
    strides: Vec<usize>,
    data: &'a [f64],
    coords: Vec<&'a [f64]>,
    interp_method: InterpMethod,
}

impl<'a> GridTable<'a> {
    /// Create a table from a dense sample buffer and per-axis breakpoints.
    ///
    /// # Arguments
    /// * `data` — Samples in row-major order, `product(shape)` entries
    /// * `shape` — Number of breakpoints per axis (each at least 1)
    /// * `coords` — One finite, strictly increasing breakpoint array per axis
    ///
    /// # Errors
    /// Returns [`LerpError::InvalidTable`] if the axis count exceeds
    /// [`MAX_NDIM`], an axis is empty, the buffer length does not match the
    /// shape, a breakpoint array has the wrong length, or breakpoints are not
    /// finite and strictly increasing.
    pub fn new(data: &'a [f64], shape: &[usize], coords: Vec<&'a [f64]>) -> error::Result<Self> {
        let ndim = shape.len();
        if ndim > MAX_NDIM {
            return Err(LerpError::InvalidTable {
                message: format!("at most {MAX_NDIM} axes are supported, got {ndim}"),
            });
        }
        if coords.len() != ndim {
            return Err(LerpError::InvalidTable {
                message: format!(
                    "expected one coordinate array per axis ({ndim}), got {}",
                    coords.len()
                ),
            });
        }
        if let Some(axis) = shape.iter().position(|&n| n == 0) {
            return Err(LerpError::InvalidTable {
                message: format!("axis {axis} has no breakpoints"),
            });
        }
        let size = shape
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| LerpError::InvalidTable {
                message: format!("shape {shape:?} overflows the addressable size"),
            })?;
        if data.len() != size {
            return Err(LerpError::InvalidTable {
                message: format!(
                    "data has {} samples but shape {shape:?} requires {size}",
                    data.len()
                ),
            });
        }
        for (axis, (c, &n)) in coords.iter().zip(shape).enumerate() {
            if c.len() != n {
                return Err(LerpError::InvalidTable {
                    message: format!(
                        "axis {axis} has {} coordinates but shape requires {n}",
                        c.len()
                    ),
                });
            }
            validate_breakpoints(c, axis)?;
        }

        let mut strides = vec![1usize; ndim];
        for d in (0..ndim.saturating_sub(1)).rev() {
            strides[d] = strides[d + 1] * shape[d + 1];
        }

        #[cfg(feature = "logging")]
        tracing::debug!(ndim, size, shape = ?shape, "grid table constructed");

        Ok(Self {
            shape: shape.to_vec(),
            strides,
            data,
            coords,
            interp_method: InterpMethod::default(),
        })
    }

    /// Zero-dimensional table holding a single value.
    ///
    /// # Errors
    /// Returns [`LerpError::InvalidTable`] unless `data` has exactly one entry.
    pub fn scalar(data: &'a [f64]) -> error::Result<Self> {
        Self::new(data, &[], Vec::new())
    }

    /// Replace the table's default interpolation method.
    pub fn with_interp_method(mut self, interp_method: InterpMethod) -> Self {
        self.interp_method = interp_method;
        self
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major strides in elements (not bytes).
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Total number of samples.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &'a [f64] {
        self.data
    }

    /// Breakpoints of `axis`.
    ///
    /// # Panics
    /// Panics if `axis >= self.ndim()`.
    pub fn coords(&self, axis: usize) -> &'a [f64] {
        self.coords[axis]
    }

    /// Default interpolation method used by [`GridTable::eval`].
    pub fn interp_method(&self) -> InterpMethod {
        self.interp_method
    }

    /// Flat offset of the sample at `subs`.
    ///
    /// The caller guarantees `subs.len() == ndim` and `subs[d] < shape[d]`.
    #[inline]
    pub fn sub2ind(&self, subs: &[usize]) -> usize {
        debug_assert_eq!(subs.len(), self.ndim());
        debug_assert!(subs.iter().zip(&self.shape).all(|(s, n)| s < n));
        subs.iter().zip(&self.strides).map(|(s, st)| s * st).sum()
    }

    /// Sample at the subscript vector `subs`.
    ///
    /// # Panics
    /// Panics if the resulting offset is outside the data buffer.
    #[inline]
    pub fn value_at(&self, subs: &[usize]) -> f64 {
        self.data[self.sub2ind(subs)]
    }

    /// Evaluate with the table's default interpolation method.
    ///
    /// # Errors
    /// See [`eval::eval`].
    pub fn eval(&self, point: &[f64], extrap: ExtrapMethod) -> error::Result<Evaluation> {
        eval::eval(self, point, self.interp_method, extrap)
    }

    /// Interpolated value at `point` using `config`, without the gradient.
    ///
    /// # Errors
    /// See [`eval::eval`].
    pub fn value(&self, point: &[f64], config: &EvalConfig) -> error::Result<f64> {
        eval::eval(self, point, config.interp, config.extrap).map(|e| e.value)
    }
}

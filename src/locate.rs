//! Breakpoint search along a single axis.

use serde::{Deserialize, Serialize};

/// Bracketing interval of a query value on one axis.
///
/// The query satisfies `value ≈ (1 - t) * coords[index] + t * coords[index + 1]`.
/// A `t` outside `[0, 1]` means the value lies beyond the breakpoints and
/// must be extrapolated; it is not an error by itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Lower breakpoint of the interval, in `0..=len-2` (0 for a single-point axis).
    pub index: usize,
    /// Normalized position inside the interval.
    pub t: f64,
}

impl Location {
    pub fn is_inside(&self) -> bool {
        (0.0..=1.0).contains(&self.t)
    }

    pub fn is_below(&self) -> bool {
        self.t < 0.0
    }

    pub fn is_above(&self) -> bool {
        self.t > 1.0
    }
}

/// Find the interval of `coords` containing `value`.
///
/// `coords` must be non-empty and strictly increasing (guaranteed for the
/// axes of a [`GridTable`](crate::GridTable)). Interior breakpoints resolve to
/// the interval they start (`t = 0`); the last breakpoint resolves to the last
/// interval with `t = 1`. A single-point axis always yields `index 0, t 0`.
///
/// # Examples
/// ```
/// use ndlerp::locate;
///
/// let x = [0.0, 1.0, 3.0];
/// let loc = locate(2.0, &x);
/// assert_eq!(loc.index, 1);
/// assert_eq!(loc.t, 0.5);
///
/// assert!(locate(-1.0, &x).is_below());
/// assert!(locate(4.0, &x).is_above());
/// ```
pub fn locate(value: f64, coords: &[f64]) -> Location {
    let n = coords.len();
    if n < 2 {
        return Location { index: 0, t: 0.0 };
    }

    let index = if value < coords[0] {
        0
    } else if value >= coords[n - 1] {
        n - 2
    } else {
        // First breakpoint strictly greater than value, minus one.
        coords.partition_point(|&c| c <= value) - 1
    };

    let lo = coords[index];
    let hi = coords[index + 1];
    Location {
        index,
        t: (value - lo) / (hi - lo),
    }
}

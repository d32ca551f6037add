//! One-dimensional blending kernels.
//!
//! A [`Kernel`] turns the samples of one axis around a located interval into
//! a value, the slope along the axis (per unit of the axis coordinate, not of
//! `t`), and the weight each sample carries in the value. Selection is a pure
//! function of the methods, the axis length and the [`Location`].
//!
//! ## Cubic slope rules
//!
//! The cubic kernels are Hermite cubics on the located interval; they differ
//! only in how the node slopes are estimated from neighbouring secants `d`:
//!
//! - **Akima**: weighted mean of the two secants around the node, with weights
//!   `|d[k+1] - d[k]|` and `|d[k-1] - d[k-2]|`. Missing secants past the ends
//!   of the axis are extended linearly. Not monotone; suppresses wiggles.
//! - **Fritsch–Butland**: `3·d0·d1 / (d_big + 2·d_small)` when the secants
//!   agree in sign, else 0. End nodes take the adjacent secant.
//! - **Steffen**: `(sgn d0 + sgn d1) · min(|d0|, |d1|, |p|/2)` with `p` the
//!   slope of the parabola through the three nodes; end nodes use Steffen's
//!   one-sided parabola, clipped to `2·d0` and zeroed on a sign change.
//!
//! Fritsch–Butland and Steffen keep every node slope within `3·min(|d|)` of
//! the adjacent secants, which is sufficient for the Hermite cubic to stay
//! monotone on monotone data.
//!
//! # References
//! - Akima, H. "A New Method of Interpolation and Smooth Curve Fitting Based
//!   on Local Procedures", J. ACM 17(4), 1970
//! - Fritsch, F.N., Butland, J. "A Method for Constructing Local Monotone
//!   Piecewise Cubic Interpolants", SIAM J. Sci. Stat. Comput. 5(2), 1984
//! - Steffen, M. "A simple method for monotonic interpolation in one
//!   dimension", Astron. Astrophys. 239, 1990

use std::ops::Range;

use crate::dual::{Dual, STENCIL};
use crate::locate::Location;
use crate::method::{ExtrapMethod, InterpMethod};

/// Node-slope estimator of a cubic kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlopeRule {
    Akima,
    FritschButland,
    Steffen,
}

impl SlopeRule {
    fn for_method(method: InterpMethod) -> Option<SlopeRule> {
        match method {
            InterpMethod::Akima => Some(SlopeRule::Akima),
            InterpMethod::FritschButland => Some(SlopeRule::FritschButland),
            InterpMethod::Steffen => Some(SlopeRule::Steffen),
            InterpMethod::Hold | InterpMethod::Nearest | InterpMethod::Linear => None,
        }
    }

    /// Samples needed before and after the lower node of the interval.
    fn reach(self) -> (usize, usize) {
        match self {
            SlopeRule::Akima => (2, 3),
            SlopeRule::FritschButland | SlopeRule::Steffen => (1, 2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kernel {
    /// Single-breakpoint axis: constant along the axis.
    Pinned,
    Hold,
    Nearest,
    Linear,
    Cubic(SlopeRule),
    ExtrapHold,
    /// Continue the boundary segment.
    ExtrapLinear,
    /// Continue the boundary tangent of the cubic.
    ExtrapCubic(SlopeRule),
}

/// Result of applying a kernel to the samples of its stencil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Blend {
    pub value: f64,
    /// Derivative along the axis.
    pub slope: f64,
    /// `∂value / ∂samples[j]`, zero past the stencil length.
    pub weights: [f64; STENCIL],
}

impl Kernel {
    /// Kernel for an axis of `len` breakpoints at `loc`.
    ///
    /// Returns `None` when `loc` is outside the axis and `extrap` is
    /// [`ExtrapMethod::None`]. Cubic methods degrade to linear on two-point
    /// axes.
    pub fn select(
        interp: InterpMethod,
        extrap: ExtrapMethod,
        len: usize,
        loc: Location,
    ) -> Option<Kernel> {
        if len < 2 {
            return Some(Kernel::Pinned);
        }
        let rule = if len >= 3 {
            SlopeRule::for_method(interp)
        } else {
            None
        };

        if loc.is_inside() {
            return Some(match interp {
                InterpMethod::Hold => Kernel::Hold,
                InterpMethod::Nearest => Kernel::Nearest,
                _ => rule.map_or(Kernel::Linear, Kernel::Cubic),
            });
        }

        match extrap {
            ExtrapMethod::Hold => Some(Kernel::ExtrapHold),
            ExtrapMethod::Linear => Some(rule.map_or(Kernel::ExtrapLinear, Kernel::ExtrapCubic)),
            ExtrapMethod::None => None,
        }
    }

    /// Subscripts along the axis whose samples the kernel reads.
    pub fn stencil(self, loc: Location, len: usize) -> Range<usize> {
        let i = loc.index;
        match self {
            Kernel::Pinned => 0..1,
            Kernel::Hold if loc.t >= 1.0 => i + 1..i + 2,
            Kernel::Hold => i..i + 1,
            Kernel::Nearest if loc.t < 0.5 => i..i + 1,
            Kernel::Nearest => i + 1..i + 2,
            Kernel::ExtrapHold if loc.is_below() => i..i + 1,
            Kernel::ExtrapHold => i + 1..i + 2,
            Kernel::Linear | Kernel::ExtrapLinear => i..i + 2,
            Kernel::Cubic(rule) | Kernel::ExtrapCubic(rule) => {
                let (before, after) = rule.reach();
                i.saturating_sub(before)..(i + after + 1).min(len)
            }
        }
    }

    /// Blend `samples`, read at the subscripts `stencil` of an axis with
    /// breakpoints `coords`, for a query `x` located at `loc`.
    pub fn apply(
        self,
        coords: &[f64],
        stencil: Range<usize>,
        loc: Location,
        x: f64,
        samples: &[f64],
    ) -> Blend {
        debug_assert_eq!(stencil.len(), samples.len());
        let mut seeded = [Dual::constant(0.0); STENCIL];
        for (j, &v) in samples.iter().enumerate() {
            seeded[j] = Dual::variable(v, j);
        }
        let ys = &seeded[..samples.len()];
        let xs = &coords[stencil.clone()];

        let (value, slope) = match self {
            Kernel::Pinned | Kernel::Hold | Kernel::Nearest | Kernel::ExtrapHold => {
                (ys[0], Dual::constant(0.0))
            }
            Kernel::Linear | Kernel::ExtrapLinear => {
                let t = loc.t;
                let value = ys[0] * (1.0 - t) + ys[1] * t;
                (value, (ys[1] - ys[0]) / (xs[1] - xs[0]))
            }
            Kernel::Cubic(rule) => {
                let k = loc.index - stencil.start;
                let m0 = node_slope(rule, xs, ys, k);
                let m1 = node_slope(rule, xs, ys, k + 1);
                hermite(xs[k], xs[k + 1], ys[k], ys[k + 1], m0, m1, loc.t)
            }
            Kernel::ExtrapCubic(rule) => {
                let k = if loc.is_below() { 0 } else { ys.len() - 1 };
                let s = node_slope(rule, xs, ys, k);
                (ys[k] + s * (x - xs[k]), s)
            }
        };

        Blend {
            value: value.value,
            slope: slope.value,
            weights: value.partials,
        }
    }
}

/// Cubic Hermite on `[x0, x1]` at normalized position `t`: value and slope.
fn hermite(
    x0: f64,
    x1: f64,
    y0: Dual,
    y1: Dual,
    m0: Dual,
    m1: Dual,
    t: f64,
) -> (Dual, Dual) {
    let h = x1 - x0;
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    let value = y0 * h00 + m0 * (h10 * h) + y1 * h01 + m1 * (h11 * h);

    let d00 = 6.0 * t2 - 6.0 * t;
    let d10 = 3.0 * t2 - 4.0 * t + 1.0;
    let d11 = 3.0 * t2 - 2.0 * t;
    let slope = (y0 - y1) * (d00 / h) + m0 * d10 + m1 * d11;

    (value, slope)
}

fn secant(xs: &[f64], ys: &[Dual], j: usize) -> Dual {
    (ys[j + 1] - ys[j]) / (xs[j + 1] - xs[j])
}

/// Slope at local node `k` of the stencil.
///
/// `k == 0` or `k == ys.len() - 1` only occur when the stencil was clipped by
/// the end of the axis, so those nodes are true end nodes.
fn node_slope(rule: SlopeRule, xs: &[f64], ys: &[Dual], k: usize) -> Dual {
    match rule {
        SlopeRule::Akima => akima_slope(xs, ys, k),
        SlopeRule::FritschButland | SlopeRule::Steffen => {
            let last = ys.len() - 1;
            if k == 0 || k == last {
                // Secant at the end, then the one next to it.
                let (j0, j1) = if k == 0 { (0, 1) } else { (last - 1, last - 2) };
                let d0 = secant(xs, ys, j0);
                if rule == SlopeRule::FritschButland {
                    return d0;
                }
                let h0 = xs[j0 + 1] - xs[j0];
                let h1 = xs[j1 + 1] - xs[j1];
                steffen_end(d0, secant(xs, ys, j1), h0, h1)
            } else {
                let d0 = secant(xs, ys, k - 1);
                let d1 = secant(xs, ys, k);
                match rule {
                    SlopeRule::FritschButland => fritsch_butland(d0, d1),
                    _ => steffen(d0, d1, xs[k] - xs[k - 1], xs[k + 1] - xs[k]),
                }
            }
        }
    }
}

fn akima_slope(xs: &[f64], ys: &[Dual], k: usize) -> Dual {
    // ext[j + 2] holds secant j; two linearly extended secants on each side.
    let ns = ys.len() - 1;
    let mut ext = [Dual::constant(0.0); STENCIL + 3];
    for j in 0..ns {
        ext[j + 2] = secant(xs, ys, j);
    }
    ext[1] = ext[2] * 2.0 - ext[3];
    ext[0] = ext[1] * 2.0 - ext[2];
    ext[ns + 2] = ext[ns + 1] * 2.0 - ext[ns];
    ext[ns + 3] = ext[ns + 2] * 2.0 - ext[ns + 1];

    let (m1, m2, m3, m4) = (ext[k], ext[k + 1], ext[k + 2], ext[k + 3]);
    let w1 = (m4 - m3).abs();
    let w2 = (m2 - m1).abs();
    let denom = w1 + w2;
    if denom.value == 0.0 {
        (m2 + m3) * 0.5
    } else {
        (w1 * m2 + w2 * m3) / denom
    }
}

fn fritsch_butland(d0: Dual, d1: Dual) -> Dual {
    if d0.value * d1.value <= 0.0 {
        return Dual::constant(0.0);
    }
    let (big, small) = if d0.abs().value >= d1.abs().value {
        (d0, d1)
    } else {
        (d1, d0)
    };
    d0 * d1 * 3.0 / (big + small * 2.0)
}

fn steffen(d0: Dual, d1: Dual, h0: f64, h1: f64) -> Dual {
    let sign = d0.signum() + d1.signum();
    if sign == 0.0 {
        return Dual::constant(0.0);
    }
    let p = (d0 * h1 + d1 * h0) / (h0 + h1);
    d0.abs().min(d1.abs()).min(p.abs() * 0.5) * sign
}

fn steffen_end(d0: Dual, d1: Dual, h0: f64, h1: f64) -> Dual {
    let r = h0 / (h0 + h1);
    let p = d0 * (1.0 + r) - d1 * r;
    if p.value * d0.value <= 0.0 {
        Dual::constant(0.0)
    } else if p.abs().value > 2.0 * d0.abs().value {
        d0 * 2.0
    } else {
        p
    }
}

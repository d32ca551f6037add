//! N-dimensional evaluation and total differentials.
//!
//! Evaluation reduces the table one axis at a time: for axis `d` the kernel
//! chosen for that axis names the subscripts it needs, the sub-table over the
//! remaining axes is evaluated at each of them, and the kernel blends the
//! results. The kernel's slope is the partial derivative along `d`; the
//! partials along the later axes are the sub-gradients weighted by each
//! sample's share in the blended value (chain rule through the tensor
//! product).
//!
//! Every axis is located before any sample is read, so a query outside the
//! grid with [`ExtrapMethod::None`] fails without doing any work.

use serde::{Deserialize, Serialize};

use crate::config::EvalConfig;
use crate::dual::STENCIL;
use crate::error::{self, LerpError};
use crate::kernel::Kernel;
use crate::locate::{Location, locate};
use crate::method::{ExtrapMethod, InterpMethod};
use crate::table::GridTable;
use crate::validate::{validate_len, validate_point};

/// Value and partial derivatives of a table at a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: f64,
    /// `∂value / ∂point[d]` for every axis `d`.
    pub gradient: Vec<f64>,
}

impl Evaluation {
    /// First-order change of the value for a displacement `deltas`.
    ///
    /// # Errors
    /// Returns [`LerpError::WrongNParams`] if `deltas` and the gradient differ
    /// in length.
    pub fn directional(&self, deltas: &[f64]) -> error::Result<f64> {
        validate_len(deltas.len(), self.gradient.len())?;
        Ok(self
            .gradient
            .iter()
            .zip(deltas)
            .map(|(g, d)| g * d)
            .sum::<f64>())
    }
}

/// Per-axis plan: where the query sits and how the axis is reduced.
#[derive(Debug, Clone)]
struct AxisPlan {
    kernel: Kernel,
    loc: Location,
    x: f64,
    stencil: std::ops::Range<usize>,
}

struct Reducer<'t, 'a> {
    table: &'t GridTable<'a>,
    plans: Vec<AxisPlan>,
}

impl Reducer<'_, '_> {
    /// Value and gradient over axes `axis..ndim` with the earlier axes fixed in `subs`.
    fn reduce(&self, axis: usize, subs: &mut [usize]) -> Evaluation {
        let ndim = self.table.ndim();
        if axis == ndim {
            return Evaluation {
                value: self.table.value_at(subs),
                gradient: Vec::new(),
            };
        }

        let plan = &self.plans[axis];
        let mut samples = [0.0; STENCIL];
        let mut children = Vec::with_capacity(plan.stencil.len());
        for (j, s) in plan.stencil.clone().enumerate() {
            subs[axis] = s;
            let child = self.reduce(axis + 1, subs);
            samples[j] = child.value;
            children.push(child.gradient);
        }

        let n = plan.stencil.len();
        let blend = plan.kernel.apply(
            self.table.coords(axis),
            plan.stencil.clone(),
            plan.loc,
            plan.x,
            &samples[..n],
        );

        let mut gradient = Vec::with_capacity(ndim - axis);
        gradient.push(blend.slope);
        for r in 0..ndim - axis - 1 {
            let partial = children
                .iter()
                .zip(blend.weights)
                .map(|(g, w)| w * g[r])
                .sum::<f64>();
            gradient.push(partial);
        }

        Evaluation {
            value: blend.value,
            gradient,
        }
    }
}

/// Evaluate `table` at `point`.
///
/// # Arguments
/// * `point` — One coordinate per axis
/// * `interp` — Method used inside the breakpoint range
/// * `extrap` — Method used on axes where `point` lies outside the range
///
/// # Errors
/// - [`LerpError::WrongNParams`] if `point.len() != table.ndim()`
/// - [`LerpError::InvalidInput`] if a coordinate is NaN or infinite
/// - [`LerpError::OutOfBounds`] for the first axis outside its range when
///   `extrap` is [`ExtrapMethod::None`]
///
/// # Examples
/// ```
/// use ndlerp::{eval, ExtrapMethod, GridTable, InterpMethod};
///
/// let x = [0.0, 1.0, 2.0];
/// let data = [0.0, 10.0, 0.0];
/// let table = GridTable::new(&data, &[3], vec![&x[..]])?;
///
/// let e = eval(&table, &[0.5], InterpMethod::Linear, ExtrapMethod::Hold)?;
/// assert_eq!(e.value, 5.0);
/// assert_eq!(e.gradient, vec![10.0]);
///
/// let e = eval(&table, &[-1.0], InterpMethod::Linear, ExtrapMethod::Linear)?;
/// assert_eq!(e.value, -10.0);
///
/// assert!(eval(&table, &[-1.0], InterpMethod::Linear, ExtrapMethod::None).is_err());
/// # Ok::<(), ndlerp::LerpError>(())
/// ```
pub fn eval(
    table: &GridTable<'_>,
    point: &[f64],
    interp: InterpMethod,
    extrap: ExtrapMethod,
) -> error::Result<Evaluation> {
    validate_len(point.len(), table.ndim())?;
    validate_point(point, "point")?;

    let mut plans = Vec::with_capacity(point.len());
    for (axis, &x) in point.iter().enumerate() {
        let coords = table.coords(axis);
        let loc = locate(x, coords);
        let Some(kernel) = Kernel::select(interp, extrap, coords.len(), loc) else {
            #[cfg(feature = "logging")]
            tracing::trace!(axis, value = x, "query outside table range");
            return Err(LerpError::OutOfBounds {
                axis,
                value: x,
                lower: coords[0],
                upper: coords[coords.len() - 1],
            });
        };
        let stencil = kernel.stencil(loc, coords.len());
        plans.push(AxisPlan {
            kernel,
            loc,
            x,
            stencil,
        });
    }

    let reducer = Reducer { table, plans };
    let mut subs = vec![0usize; table.ndim()];
    Ok(reducer.reduce(0, &mut subs))
}

/// Total differential of `table` at `point` for the displacement `deltas`:
/// `Σ ∂f/∂x_d · deltas[d]`.
///
/// # Errors
/// Returns [`LerpError::WrongNParams`] if `deltas` does not have one entry
/// per axis, and otherwise any error of [`eval`].
pub fn total_differential(
    table: &GridTable<'_>,
    point: &[f64],
    deltas: &[f64],
    interp: InterpMethod,
    extrap: ExtrapMethod,
) -> error::Result<f64> {
    validate_len(deltas.len(), table.ndim())?;
    validate_point(deltas, "deltas")?;
    eval(table, point, interp, extrap)?.directional(deltas)
}

/// Sum of all partial derivatives at `point` (total differential along the
/// unit diagonal).
///
/// # Errors
/// Any error of [`eval`].
pub fn derivative_sum(
    table: &GridTable<'_>,
    point: &[f64],
    config: &EvalConfig,
) -> error::Result<f64> {
    let e = eval(table, point, config.interp, config.extrap)?;
    Ok(e.gradient.iter().sum::<f64>())
}

/// Interpolate a single series `ys` sampled at `xs` at `x`.
///
/// Returns the value and the slope. Validates the series on every call;
/// build a [`GridTable`] once for repeated lookups.
///
/// # Errors
/// [`LerpError::InvalidTable`] for inconsistent `xs` / `ys`, otherwise any
/// error of [`eval`].
///
/// # Examples
/// ```
/// use ndlerp::{interpolate_1d, EvalConfig, InterpMethod};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 1.0, 4.0, 9.0];
/// let config = EvalConfig::default().with_interp(InterpMethod::Steffen);
/// let (y, dy) = interpolate_1d(&xs, &ys, 1.0, &config)?;
/// assert_eq!(y, 1.0);
/// assert!(dy > 0.0);
/// # Ok::<(), ndlerp::LerpError>(())
/// ```
pub fn interpolate_1d(
    xs: &[f64],
    ys: &[f64],
    x: f64,
    config: &EvalConfig,
) -> error::Result<(f64, f64)> {
    let table = GridTable::new(ys, &[xs.len()], vec![xs])?;
    let e = eval(&table, &[x], config.interp, config.extrap)?;
    Ok((e.value, e.gradient[0]))
}

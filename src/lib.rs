//! # ndlerp
//!
//! Interpolation and extrapolation on rectilinear N-dimensional lookup tables.
//!
//! A table is a dense row-major sample buffer plus one strictly increasing
//! breakpoint array per axis. Queries return the interpolated value together
//! with its exact partial derivatives, and the total differential for a given
//! displacement.
//!
//! ## Architecture
//!
//! - **`table`** — [`GridTable`], a validated read-only view over caller buffers
//! - **`locate`** — Breakpoint search returning the bracketing interval
//! - **`method`** — Interpolation / extrapolation method tags
//! - **`eval`** — Recursive axis-by-axis evaluation and differentials
//! - **`status`** — Integer status codes and the last-error message slot for
//!   foreign-function callers
//!
//! ## Methods
//!
//! | interpolation     | extrapolation |
//! |-------------------|---------------|
//! | `hold`            | `hold`        |
//! | `nearest`         | `linear`      |
//! | `linear`          | `none`        |
//! | `akima`           |               |
//! | `fritsch_butland` |               |
//! | `steffen`         |               |
//!
//! ## Design
//!
//! - **Borrowed, immutable tables.** A [`GridTable`] never copies or mutates
//!   its buffers and is `Send + Sync`; share it across evaluation threads.
//! - **No panics.** Every fallible operation returns [`Result`]. Library code
//!   never calls `unwrap()` or `expect()`.
//! - **Exact gradients.** Partials along later axes are carried through each
//!   kernel's nonlinear slope rule with forward-mode derivatives, so the
//!   gradient is the derivative of the value actually returned.
//! - **Serializable.** Method tags and [`EvalConfig`] implement Serde
//!   `Serialize` / `Deserialize`.
//!
//! ## Quick start
//!
//! ```
//! use ndlerp::{eval, ExtrapMethod, GridTable, InterpMethod};
//!
//! let x = [0.0, 1.0];
//! let y = [0.0, 1.0];
//! let data = [0.0, 1.0, 1.0, 2.0];
//! let table = GridTable::new(&data, &[2, 2], vec![&x[..], &y[..]])?;
//!
//! let e = eval(&table, &[0.5, 0.5], InterpMethod::Linear, ExtrapMethod::None)?;
//! assert!((e.value - 1.0).abs() < 1e-12);
//! assert_eq!(e.gradient.len(), 2);
//! # Ok::<(), ndlerp::LerpError>(())
//! ```

pub mod config;
mod dual;
pub mod error;
pub mod eval;
mod kernel;
pub mod locate;
pub mod method;
pub mod status;
pub mod table;
mod validate;

#[doc(inline)]
pub use config::EvalConfig;
#[doc(inline)]
pub use error::{LerpError, Result};
#[doc(inline)]
pub use eval::{Evaluation, derivative_sum, eval, interpolate_1d, total_differential};
#[doc(inline)]
pub use locate::{Location, locate};
#[doc(inline)]
pub use method::{ExtrapMethod, InterpMethod};
#[doc(inline)]
pub use status::Status;
#[doc(inline)]
pub use table::{GridTable, MAX_NDIM};

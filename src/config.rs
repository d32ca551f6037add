//! Per-call evaluation settings.
//!
//! [`EvalConfig`] bundles the interpolation and extrapolation methods so they
//! can be stored, serialized alongside a model, or parsed from user-facing
//! names. Presets mirror the common lookup-table modes: plain interpolation
//! with clamped ends, step tables, and fully linear extension.

use serde::{Deserialize, Serialize};

use crate::error;
use crate::method::{ExtrapMethod, InterpMethod};

/// Interpolation and extrapolation methods for an evaluation.
///
/// # Examples
/// ```
/// use ndlerp::{EvalConfig, ExtrapMethod, InterpMethod};
///
/// let config = EvalConfig::default().with_interp(InterpMethod::Steffen);
/// assert_eq!(config.extrap, ExtrapMethod::Hold);
///
/// let parsed = EvalConfig::from_tags("akima", "linear")?;
/// assert_eq!(parsed.interp, InterpMethod::Akima);
/// # Ok::<(), ndlerp::LerpError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub interp: InterpMethod,
    pub extrap: ExtrapMethod,
}

impl EvalConfig {
    pub fn new(interp: InterpMethod, extrap: ExtrapMethod) -> Self {
        Self { interp, extrap }
    }

    /// Step table: hold inside the grid and at its ends.
    pub fn step() -> Self {
        Self::new(InterpMethod::Hold, ExtrapMethod::Hold)
    }

    /// Linear interpolation continued linearly beyond the grid.
    pub fn extrapolating() -> Self {
        Self::new(InterpMethod::Linear, ExtrapMethod::Linear)
    }

    /// Strict lookups: queries outside the grid are errors.
    pub fn bounded(interp: InterpMethod) -> Self {
        Self::new(interp, ExtrapMethod::None)
    }

    pub fn with_interp(mut self, interp: InterpMethod) -> Self {
        self.interp = interp;
        self
    }

    pub fn with_extrap(mut self, extrap: ExtrapMethod) -> Self {
        self.extrap = extrap;
        self
    }

    /// Parse both methods from their names.
    ///
    /// # Errors
    /// Returns [`LerpError::UnknownMethod`](crate::LerpError::UnknownMethod)
    /// if either name is not recognized.
    pub fn from_tags(interp: &str, extrap: &str) -> error::Result<Self> {
        Ok(Self::new(interp.parse()?, extrap.parse()?))
    }
}

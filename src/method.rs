//! Interpolation and extrapolation method tags.
//!
//! Both enumerations are closed. Tags arrive either as names
//! (`"fritsch_butland"`, via [`FromStr`] or serde) or as the integer codes of
//! the C ABI (via `TryFrom<i32>`); anything else is
//! [`LerpError::UnknownMethod`], never a silent default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LerpError;

/// Interpolation used between breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMethod {
    /// Value of the lower breakpoint of the interval (step function).
    Hold,
    /// Value of the closer breakpoint.
    Nearest,
    /// Piecewise linear.
    #[default]
    Linear,
    /// Akima cubic: local slopes weighted to suppress wiggles near extrema.
    Akima,
    /// Monotone cubic Hermite with the Fritsch–Butland slope limiter.
    FritschButland,
    /// Monotone cubic Hermite with Steffen's slope formula.
    Steffen,
}

impl InterpMethod {
    pub const ALL: [InterpMethod; 6] = [
        InterpMethod::Hold,
        InterpMethod::Nearest,
        InterpMethod::Linear,
        InterpMethod::Akima,
        InterpMethod::FritschButland,
        InterpMethod::Steffen,
    ];

    /// Integer code used at the binding boundary (1-based).
    pub fn code(self) -> i32 {
        match self {
            InterpMethod::Hold => 1,
            InterpMethod::Nearest => 2,
            InterpMethod::Linear => 3,
            InterpMethod::Akima => 4,
            InterpMethod::FritschButland => 5,
            InterpMethod::Steffen => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InterpMethod::Hold => "hold",
            InterpMethod::Nearest => "nearest",
            InterpMethod::Linear => "linear",
            InterpMethod::Akima => "akima",
            InterpMethod::FritschButland => "fritsch_butland",
            InterpMethod::Steffen => "steffen",
        }
    }
}

impl TryFrom<i32> for InterpMethod {
    type Error = LerpError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        InterpMethod::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or_else(|| LerpError::UnknownMethod {
                message: format!("interpolation method code {code} is not in 1..=6"),
            })
    }
}

impl FromStr for InterpMethod {
    type Err = LerpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterpMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| LerpError::UnknownMethod {
                message: format!("unknown interpolation method '{s}'"),
            })
    }
}

impl fmt::Display for InterpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavior for query coordinates outside the breakpoint range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrapMethod {
    /// Clamp to the boundary sample.
    #[default]
    Hold,
    /// Continue the boundary segment or boundary spline tangent.
    Linear,
    /// Reject the query with [`LerpError::OutOfBounds`].
    None,
}

impl ExtrapMethod {
    pub const ALL: [ExtrapMethod; 3] = [
        ExtrapMethod::Hold,
        ExtrapMethod::Linear,
        ExtrapMethod::None,
    ];

    /// Integer code used at the binding boundary (1-based).
    pub fn code(self) -> i32 {
        match self {
            ExtrapMethod::Hold => 1,
            ExtrapMethod::Linear => 2,
            ExtrapMethod::None => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtrapMethod::Hold => "hold",
            ExtrapMethod::Linear => "linear",
            ExtrapMethod::None => "none",
        }
    }
}

impl TryFrom<i32> for ExtrapMethod {
    type Error = LerpError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ExtrapMethod::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .ok_or_else(|| LerpError::UnknownMethod {
                message: format!("extrapolation method code {code} is not in 1..=3"),
            })
    }
}

impl FromStr for ExtrapMethod {
    type Err = LerpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtrapMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| LerpError::UnknownMethod {
                message: format!("unknown extrapolation method '{s}'"),
            })
    }
}

impl fmt::Display for ExtrapMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

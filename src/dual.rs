//! Forward-mode dual numbers over a kernel stencil.
//!
//! A kernel blends at most [`STENCIL`] samples along one axis. Seeding sample
//! `j` as `Dual::variable(v, j)` and running the kernel arithmetic on duals
//! yields, next to the blended value, the partial derivative of that value
//! with respect to every sample. The evaluator uses those partials to carry
//! the gradients of the remaining axes through nonlinear slope limiters.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Maximum number of samples a kernel reads along one axis (Akima).
pub(crate) const STENCIL: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Dual {
    pub value: f64,
    /// `∂value / ∂sample[j]`.
    pub partials: [f64; STENCIL],
}

impl Dual {
    pub fn constant(value: f64) -> Self {
        Self {
            value,
            partials: [0.0; STENCIL],
        }
    }

    pub fn variable(value: f64, index: usize) -> Self {
        let mut partials = [0.0; STENCIL];
        partials[index] = 1.0;
        Self { value, partials }
    }

    pub fn abs(self) -> Self {
        if self.value < 0.0 { -self } else { self }
    }

    /// Sign of the primal value; 0 for zero.
    pub fn signum(self) -> f64 {
        if self.value > 0.0 {
            1.0
        } else if self.value < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// The operand with the smaller primal value.
    pub fn min(self, other: Self) -> Self {
        if other.value < self.value {
            other
        } else {
            self
        }
    }

    fn map_partials(self, f: impl Fn(f64) -> f64) -> [f64; STENCIL] {
        self.partials.map(f)
    }
}

impl Add for Dual {
    type Output = Dual;

    fn add(self, rhs: Dual) -> Dual {
        let mut partials = self.partials;
        for (p, r) in partials.iter_mut().zip(rhs.partials) {
            *p += r;
        }
        Dual {
            value: self.value + rhs.value,
            partials,
        }
    }
}

impl Sub for Dual {
    type Output = Dual;

    fn sub(self, rhs: Dual) -> Dual {
        self + (-rhs)
    }
}

impl Neg for Dual {
    type Output = Dual;

    fn neg(self) -> Dual {
        Dual {
            value: -self.value,
            partials: self.map_partials(|p| -p),
        }
    }
}

impl Mul for Dual {
    type Output = Dual;

    fn mul(self, rhs: Dual) -> Dual {
        let mut partials = [0.0; STENCIL];
        for j in 0..STENCIL {
            partials[j] = self.partials[j] * rhs.value + self.value * rhs.partials[j];
        }
        Dual {
            value: self.value * rhs.value,
            partials,
        }
    }
}

impl Div for Dual {
    type Output = Dual;

    fn div(self, rhs: Dual) -> Dual {
        let inv = 1.0 / rhs.value;
        let value = self.value * inv;
        let mut partials = [0.0; STENCIL];
        for j in 0..STENCIL {
            partials[j] = (self.partials[j] - value * rhs.partials[j]) * inv;
        }
        Dual { value, partials }
    }
}

impl Mul<f64> for Dual {
    type Output = Dual;

    fn mul(self, rhs: f64) -> Dual {
        Dual {
            value: self.value * rhs,
            partials: self.map_partials(|p| p * rhs),
        }
    }
}

impl Div<f64> for Dual {
    type Output = Dual;

    fn div(self, rhs: f64) -> Dual {
        Dual {
            value: self.value / rhs,
            partials: self.map_partials(|p| p / rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn product_rule() {
        let x = Dual::variable(3.0, 0);
        let y = Dual::variable(4.0, 1);
        let f = x * x + x * y;
        assert_abs_diff_eq!(f.value, 21.0);
        assert_abs_diff_eq!(f.partials[0], 10.0);
        assert_abs_diff_eq!(f.partials[1], 3.0);
    }

    #[test]
    fn quotient_rule() {
        let x = Dual::variable(2.0, 0);
        let y = Dual::variable(4.0, 1);
        let f = x / y;
        assert_abs_diff_eq!(f.value, 0.5);
        assert_abs_diff_eq!(f.partials[0], 0.25);
        assert_abs_diff_eq!(f.partials[1], -0.125);
    }

    #[test]
    fn abs_and_min_follow_primal() {
        let a = Dual::variable(-2.0, 0);
        let b = Dual::variable(1.0, 1);
        assert_abs_diff_eq!(a.abs().partials[0], -1.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.signum(), -1.0);
        assert_eq!(Dual::constant(0.0).signum(), 0.0);
    }

    #[test]
    fn scalar_ops() {
        let x = Dual::variable(2.0, 2) * 3.0 / 2.0;
        assert_abs_diff_eq!(x.value, 3.0);
        assert_abs_diff_eq!(x.partials[2], 1.5);
    }
}

//! Second-order centered finite differences on the structured grid.
//!
//! For a field f stored in a flat array and a neighbour stride s along an
//! axis with spacing h:
//!
//! ∂f/∂x_i ≈ (f[c + s] - f[c - s]) / (2h)
//!
//! The factor 1/(2h) is formed as `1 / h / 2` and applied by multiplication
//! so every stencil in the crate rounds identically.

use crate::solver::GridGeometry;
use crate::solver::state::{FluidVelocity, FourVelocity};
use crate::types::{Axis, CellIndex, PerAxis, Real};

/// Multiplier 1/(2h) of a centered difference with spacing `h`.
#[inline(always)]
pub fn centered_factor(h: Real) -> Real {
    1.0 / h / 2.0
}

/// Centered difference of `field` at `cell` with neighbour stride `stride`.
#[inline(always)]
pub fn centered_difference(field: &[Real], cell: CellIndex, stride: usize, h: Real) -> Real {
    (field[cell.forward(stride)] - field[cell.backward(stride)]) * centered_factor(h)
}

/// Centered gradient of a scalar field along every axis.
#[inline]
pub fn scalar_gradient(field: &[Real], cell: CellIndex, grid: &GridGeometry) -> PerAxis<Real> {
    PerAxis::from_fn(|axis| centered_difference(field, cell, grid.stride(axis), grid.spacing(axis)))
}

/// Spatial derivatives of the four-velocity: `dx.ux` is ∂u^x/∂x, `deta.ut`
/// is ∂u^τ/∂η_s, and so on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityGradient {
    /// ∂u^μ/∂x
    pub dx: FourVelocity,
    /// ∂u^μ/∂y
    pub dy: FourVelocity,
    /// ∂u^μ/∂η_s
    pub deta: FourVelocity,
}

impl Default for VelocityGradient {
    fn default() -> Self {
        Self::zero()
    }
}

impl VelocityGradient {
    /// Gradient of a uniform field.
    pub fn zero() -> Self {
        Self {
            dx: FourVelocity::zero(),
            dy: FourVelocity::zero(),
            deta: FourVelocity::zero(),
        }
    }

    /// Centered differences of `u` around `cell`.
    pub fn centered(u: &FluidVelocity, cell: CellIndex, grid: &GridGeometry) -> Self {
        let along = |axis: Axis| {
            let stride = grid.stride(axis);
            let h = grid.spacing(axis);
            FourVelocity {
                ut: centered_difference(&u.ut, cell, stride, h),
                ux: centered_difference(&u.ux, cell, stride, h),
                uy: centered_difference(&u.uy, cell, stride, h),
                un: centered_difference(&u.un, cell, stride, h),
            }
        };
        Self {
            dx: along(Axis::X),
            dy: along(Axis::Y),
            deta: along(Axis::Eta),
        }
    }

    /// Derivatives along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> FourVelocity {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
            Axis::Eta => self.deta,
        }
    }

    /// Divergence ∂_i v^i of the coordinate velocity v^i = u^i/u^τ.
    ///
    /// Each term uses ∂_i v^i = (∂_i u^i - v^i ∂_i u^τ) / u^τ.
    #[inline]
    pub fn coordinate_velocity_divergence(&self, u: &FourVelocity) -> Real {
        let ut = u.ut;
        debug_assert!(ut != 0.0, "u^τ must be non-zero");
        let vx = u.ux / ut;
        let vy = u.uy / ut;
        let vn = u.un / ut;
        let dxvx = (self.dx.ux - vx * self.dx.ut) / ut;
        let dyvy = (self.dy.uy - vy * self.dy.ut) / ut;
        let dnvn = (self.deta.un - vn * self.deta.ut) / ut;
        dxvx + dyvy + dnvn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Real = 1e-12;

    fn grid() -> GridGeometry {
        GridGeometry::new(5, 5, 5, 0.1, 0.2, 0.05, 0.01).unwrap()
    }

    #[test]
    fn test_linear_field_exact() {
        let g = grid();
        // f = 2x - 3y + 4η
        let field: Vec<Real> = (0..g.n_cells())
            .map(|s| {
                let (i, j, k) = g.coordinates(CellIndex::new(s));
                2.0 * i as Real * g.dx - 3.0 * j as Real * g.dy + 4.0 * k as Real * g.dz
            })
            .collect();
        let grad = scalar_gradient(&field, g.linear_index(2, 2, 2), &g);
        assert!((grad.x - 2.0).abs() < TOL);
        assert!((grad.y + 3.0).abs() < TOL);
        assert!((grad.eta - 4.0).abs() < TOL);
    }

    #[test]
    fn test_uniform_velocity_zero_gradient() {
        let g = grid();
        let u = FluidVelocity::uniform(g.n_cells(), FourVelocity::from_spatial(0.4, 0.1, 0.2, 1.0));
        let grad = VelocityGradient::centered(&u, g.linear_index(2, 2, 2), &g);
        assert_eq!(grad, VelocityGradient::zero());
        let dkvk = grad.coordinate_velocity_divergence(&u.get(g.linear_index(2, 2, 2)));
        assert_eq!(dkvk, 0.0);
    }

    #[test]
    fn test_coordinate_velocity_divergence_hubble_like() {
        // u^x = a·x with u^τ held at 1: ∂_x v^x = a
        let g = grid();
        let a = 0.3;
        let u = FluidVelocity::from_fn(g.n_cells(), |c| {
            let (i, _, _) = g.coordinates(c);
            FourVelocity::new(1.0, a * i as Real * g.dx, 0.0, 0.0)
        });
        let cell = g.linear_index(2, 2, 2);
        let grad = VelocityGradient::centered(&u, cell, &g);
        assert!((grad.dx.ux - a).abs() < TOL);
        assert!((grad.coordinate_velocity_divergence(&u.get(cell)) - a).abs() < TOL);
        assert_eq!(grad.along(Axis::Y), FourVelocity::zero());
    }
}

//! Fluid four-velocity at a cell and over the whole grid.
//!
//! The four-velocity u^μ = (u^τ, u^x, u^y, u^η) is normalized under the
//! Milne metric diag(1, -1, -1, -τ²):
//!
//! (u^τ)² - (u^x)² - (u^y)² - τ² (u^η)² = 1
//!
//! The kernels assume, but never enforce, this normalization.

use crate::types::{Axis, CellIndex, Real};

/// Contravariant four-velocity at a single cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourVelocity {
    /// Timelike component u^τ (must be non-zero)
    pub ut: Real,
    /// Transverse component u^x
    pub ux: Real,
    /// Transverse component u^y
    pub uy: Real,
    /// Rapidity component u^η
    pub un: Real,
}

impl Default for FourVelocity {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl FourVelocity {
    /// Create from all four components.
    #[inline(always)]
    pub fn new(ut: Real, ux: Real, uy: Real, un: Real) -> Self {
        Self { ut, ux, uy, un }
    }

    /// Fluid at rest in the Milne frame, u = (1, 0, 0, 0).
    #[inline(always)]
    pub fn at_rest() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// All components zero. Used for derivatives of the velocity field.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Normalized velocity from its spatial components at proper time `t`.
    pub fn from_spatial(ux: Real, uy: Real, un: Real, t: Real) -> Self {
        let ut = (1.0 + ux * ux + uy * uy + t * t * un * un).sqrt();
        Self::new(ut, ux, uy, un)
    }

    /// Spatial component along `axis`.
    #[inline]
    pub fn spatial(&self, axis: Axis) -> Real {
        match axis {
            Axis::X => self.ux,
            Axis::Y => self.uy,
            Axis::Eta => self.un,
        }
    }

    /// Coordinate velocity v^i = u^i / u^τ along `axis`.
    #[inline]
    pub fn coordinate_velocity(&self, axis: Axis) -> Real {
        debug_assert!(self.ut != 0.0, "u^τ must be non-zero");
        self.spatial(axis) / self.ut
    }

    /// Components as an array (τ, x, y, η).
    #[inline(always)]
    pub fn to_array(&self) -> [Real; 4] {
        [self.ut, self.ux, self.uy, self.un]
    }

    /// Deviation from unit norm at proper time `t`.
    pub fn normalization_error(&self, t: Real) -> Real {
        self.ut * self.ut - self.ux * self.ux - self.uy * self.uy - t * t * self.un * self.un - 1.0
    }
}

/// Four-velocity field stored as four flat arrays indexed by [`CellIndex`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FluidVelocity {
    /// u^τ per cell
    pub ut: Vec<Real>,
    /// u^x per cell
    pub ux: Vec<Real>,
    /// u^y per cell
    pub uy: Vec<Real>,
    /// u^η per cell
    pub un: Vec<Real>,
}

impl FluidVelocity {
    /// Field of `n_cells` cells at rest.
    pub fn new(n_cells: usize) -> Self {
        Self::uniform(n_cells, FourVelocity::at_rest())
    }

    /// Field with the same velocity in every cell.
    pub fn uniform(n_cells: usize, u: FourVelocity) -> Self {
        Self {
            ut: vec![u.ut; n_cells],
            ux: vec![u.ux; n_cells],
            uy: vec![u.uy; n_cells],
            un: vec![u.un; n_cells],
        }
    }

    /// Field evaluated cell by cell.
    pub fn from_fn(n_cells: usize, mut f: impl FnMut(CellIndex) -> FourVelocity) -> Self {
        let mut field = Self::new(n_cells);
        for cell in CellIndex::iter(n_cells) {
            field.set(cell, f(cell));
        }
        field
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.ut.len()
    }

    /// Whether the field has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ut.is_empty()
    }

    /// Whether all four arrays have the same length.
    pub fn is_consistent(&self) -> bool {
        let n = self.ut.len();
        self.ux.len() == n && self.uy.len() == n && self.un.len() == n
    }

    /// Velocity at `cell`.
    #[inline(always)]
    pub fn get(&self, cell: CellIndex) -> FourVelocity {
        FourVelocity {
            ut: self.ut[cell],
            ux: self.ux[cell],
            uy: self.uy[cell],
            un: self.un[cell],
        }
    }

    /// Overwrite the velocity at `cell`.
    #[inline(always)]
    pub fn set(&mut self, cell: CellIndex, u: FourVelocity) {
        let i = cell.get();
        self.ut[i] = u.ut;
        self.ux[i] = u.ux;
        self.uy[i] = u.uy;
        self.un[i] = u.un;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: Real = 1e-13;

    #[test]
    fn test_from_spatial_is_normalized() {
        let t = 1.5;
        let u = FourVelocity::from_spatial(0.3, -0.2, 0.1, t);
        assert!(u.normalization_error(t).abs() < TOL);
        assert!(FourVelocity::at_rest().normalization_error(t).abs() < TOL);
    }

    #[test]
    fn test_coordinate_velocity() {
        let u = FourVelocity::new(2.0, 1.0, 0.5, 0.25);
        assert!((u.coordinate_velocity(Axis::X) - 0.5).abs() < TOL);
        assert!((u.coordinate_velocity(Axis::Y) - 0.25).abs() < TOL);
        assert!((u.coordinate_velocity(Axis::Eta) - 0.125).abs() < TOL);
    }

    #[test]
    fn test_field_get_set() {
        let mut field = FluidVelocity::new(4);
        assert_eq!(field.len(), 4);
        assert!(field.is_consistent());

        let u = FourVelocity::new(1.1, 0.2, 0.3, 0.4);
        field.set(CellIndex::new(2), u);
        assert_eq!(field.get(CellIndex::new(2)), u);
        assert_eq!(field.get(CellIndex::new(1)), FourVelocity::at_rest());
    }

    #[test]
    fn test_field_from_fn() {
        let field = FluidVelocity::from_fn(3, |c| FourVelocity::new(1.0, c.get() as Real, 0.0, 0.0));
        assert_eq!(field.ux, vec![0.0, 1.0, 2.0]);
    }
}

//! Directional stencil windows of the packed state.
//!
//! A window holds `STENCIL_WIDTH` consecutive cells along one axis for
//! every variable of `Q`, variable-major:
//!
//! ```text
//! data[var * 5 + o] = Q[var] at cell + (o - 2) · stride
//! ```
//!
//! so the current cell sits at offset 2 and the centered difference of a
//! variable reads offsets 3 and 1.

use crate::operators::centered_factor;
use crate::physics::{STENCIL_WIDTH, ShearComponent, StateLayout};
use crate::solver::state::HydroState;
use crate::solver::{GridGeometry, SolverError};
use crate::types::{Axis, CellIndex, Real};

/// Offset of the current cell inside a window.
pub const STENCIL_CENTER: usize = STENCIL_WIDTH / 2;

/// Borrowed, typed view of a stencil window.
#[derive(Clone, Copy, Debug)]
pub struct StencilView<'a> {
    data: &'a [Real],
    layout: StateLayout,
}

impl<'a> StencilView<'a> {
    /// Wrap a raw window, checking its length against `layout`.
    pub fn new(data: &'a [Real], layout: StateLayout) -> Result<Self, SolverError> {
        let expected = layout.stencil_len();
        if data.len() != expected {
            return Err(SolverError::dimension_mismatch("stencil", expected, data.len()));
        }
        Ok(Self { data, layout })
    }

    /// Layout of the windowed variables.
    #[inline]
    pub fn layout(&self) -> StateLayout {
        self.layout
    }

    /// Value of variable `var` at window offset `offset` (0..5).
    #[inline(always)]
    pub fn value(&self, var: usize, offset: usize) -> Real {
        debug_assert!(offset < STENCIL_WIDTH);
        self.data[var * STENCIL_WIDTH + offset]
    }

    /// Centered difference of variable `var` with spacing `h`.
    #[inline(always)]
    pub fn centered_difference(&self, var: usize, h: Real) -> Real {
        let base = var * STENCIL_WIDTH + STENCIL_CENTER;
        (self.data[base + 1] - self.data[base - 1]) * centered_factor(h)
    }

    /// Centered difference of a shear component; zero when shear is absent.
    #[inline]
    pub fn shear_derivative(&self, component: ShearComponent, h: Real) -> Real {
        self.layout
            .shear_offset(component)
            .map_or(0.0, |var| self.centered_difference(var, h))
    }

    /// Centered difference of Π; `None` when bulk is absent.
    #[inline]
    pub fn bulk_derivative(&self, h: Real) -> Option<Real> {
        self.layout
            .bulk_offset()
            .map(|var| self.centered_difference(var, h))
    }
}

/// Owned stencil window, reusable across cells.
#[derive(Clone, Debug, PartialEq)]
pub struct StencilBuffer {
    data: Vec<Real>,
    layout: StateLayout,
}

impl StencilBuffer {
    /// Zeroed window for `layout`.
    pub fn new(layout: StateLayout) -> Self {
        Self {
            data: vec![0.0; layout.stencil_len()],
            layout,
        }
    }

    /// Window of `state` around `cell` along `axis`.
    ///
    /// `cell` must be at least two cells away from the grid edge along
    /// `axis`; every interior cell is.
    pub fn gather(state: &HydroState, cell: CellIndex, axis: Axis, grid: &GridGeometry) -> Self {
        let mut buffer = Self::new(state.layout);
        buffer.fill_from(state, cell, axis, grid);
        buffer
    }

    /// Refill this window in place.
    pub fn fill_from(&mut self, state: &HydroState, cell: CellIndex, axis: Axis, grid: &GridGeometry) {
        debug_assert_eq!(self.layout, state.layout);
        let stride = grid.stride(axis);
        let n_vars = self.layout.n_conserved();
        let lo = cell.backward(STENCIL_CENTER * stride);
        for o in 0..STENCIL_WIDTH {
            let neighbour = lo.forward(o * stride);
            let q = state.cell(neighbour);
            for var in 0..n_vars {
                self.data[var * STENCIL_WIDTH + o] = q[var];
            }
        }
    }

    /// Typed view of the window.
    #[inline]
    pub fn view(&self) -> StencilView<'_> {
        StencilView {
            data: &self.data,
            layout: self.layout,
        }
    }

    /// Raw window data, variable-major.
    pub fn as_slice(&self) -> &[Real] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::N_ENERGY_MOMENTUM;

    #[test]
    fn test_view_length_checked() {
        let layout = StateLayout::new(true, false);
        let data = vec![0.0; 10];
        assert!(matches!(
            StencilView::new(&data, layout),
            Err(SolverError::DimensionMismatch { expected: 70, actual: 10, .. })
        ));
    }

    #[test]
    fn test_linear_slope() {
        let layout = StateLayout::new(true, true);
        let h = 0.1;
        let m = 3.0;
        let mut data = vec![0.0; layout.stencil_len()];
        let var = N_ENERGY_MOMENTUM + ShearComponent::Xy.index();
        for o in 0..STENCIL_WIDTH {
            data[var * STENCIL_WIDTH + o] = 1.0 + m * h * (o as Real - 2.0);
        }
        let view = StencilView::new(&data, layout).unwrap();
        assert!((view.shear_derivative(ShearComponent::Xy, h) - m).abs() < 1e-12);
        assert_eq!(view.shear_derivative(ShearComponent::Tt, h), 0.0);
        assert_eq!(view.bulk_derivative(h), Some(0.0));
    }

    #[test]
    fn test_absent_currents() {
        let layout = StateLayout::new(false, false);
        let data = vec![1.0; layout.stencil_len()];
        let view = StencilView::new(&data, layout).unwrap();
        assert_eq!(view.shear_derivative(ShearComponent::Tx, 0.5), 0.0);
        assert_eq!(view.bulk_derivative(0.5), None);
    }

    #[test]
    fn test_gather_along_each_axis() {
        let grid = GridGeometry::new(5, 6, 7, 0.1, 0.2, 0.3, 0.01).unwrap();
        let layout = StateLayout::new(true, true);
        let mut state = HydroState::new(layout, grid.n_cells());
        let n = layout.n_conserved();
        for c in CellIndex::iter(grid.n_cells()) {
            for var in 0..n {
                state.cell_mut(c)[var] = (c.get() * 100 + var) as Real;
            }
        }

        let cell = grid.linear_index(2, 3, 3);
        for axis in Axis::ALL {
            let buffer = StencilBuffer::gather(&state, cell, axis, &grid);
            let view = buffer.view();
            let stride = grid.stride(axis);
            for var in 0..n {
                assert_eq!(view.value(var, STENCIL_CENTER), state.get_var(cell, var));
                assert_eq!(view.value(var, 0), state.get_var(cell.backward(2 * stride), var));
                assert_eq!(view.value(var, 4), state.get_var(cell.forward(2 * stride), var));
            }
        }
    }
}

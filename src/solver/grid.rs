//! Structured grid geometry: cell counts, strides and spacings.
//!
//! Cells are stored x-fastest, so the stride is 1 along x, `ncx` along y
//! and `ncx * ncy` along η_s. Every axis is padded with [`N_GHOST_CELLS`]
//! ghost cells on each side; the source sweep only visits interior cells,
//! whose ±2 neighbours always exist.

use crate::solver::SolverError;
use crate::types::{Axis, CellIndex, PerAxis, Real};

/// Ghost cells on each side of every axis.
pub const N_GHOST_CELLS: usize = 2;

/// Geometry of the flattened 3-D grid.
///
/// # Example
///
/// ```
/// use vh_rs::solver::GridGeometry;
/// use vh_rs::types::Axis;
///
/// let grid = GridGeometry::new(8, 6, 5, 0.1, 0.1, 0.2, 0.02).unwrap();
/// assert_eq!(grid.stride(Axis::Y), 8);
/// assert_eq!(grid.stride(Axis::Eta), 48);
/// assert_eq!(grid.interior_cells().count(), 4 * 2 * 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Cells along x, ghosts included
    pub ncx: usize,
    /// Cells along y, ghosts included
    pub ncy: usize,
    /// Cells along η_s, ghosts included
    pub ncz: usize,
    /// Spacing along x
    pub dx: Real,
    /// Spacing along y
    pub dy: Real,
    /// Spacing along η_s
    pub dz: Real,
    /// Time step, used for the backward time derivative of u^μ
    pub dt: Real,
}

impl GridGeometry {
    /// Validate and create a grid.
    pub fn new(
        ncx: usize,
        ncy: usize,
        ncz: usize,
        dx: Real,
        dy: Real,
        dz: Real,
        dt: Real,
    ) -> Result<Self, SolverError> {
        let min_cells = 2 * N_GHOST_CELLS + 1;
        for (name, n) in [("ncx", ncx), ("ncy", ncy), ("ncz", ncz)] {
            if n < min_cells {
                return Err(SolverError::InvalidGrid(format!(
                    "{name} = {n}, need at least {min_cells} cells including ghosts"
                )));
            }
        }
        for (name, d) in [("dx", dx), ("dy", dy), ("dz", dz), ("dt", dt)] {
            if !(d > 0.0 && d.is_finite()) {
                return Err(SolverError::InvalidGrid(format!(
                    "{name} = {d}, must be positive and finite"
                )));
            }
        }
        Ok(Self {
            ncx,
            ncy,
            ncz,
            dx,
            dy,
            dz,
            dt,
        })
    }

    /// Total number of cells, ghosts included.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.ncx * self.ncy * self.ncz
    }

    /// Distance in the flattened array between neighbours along `axis`.
    #[inline]
    pub fn stride(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => 1,
            Axis::Y => self.ncx,
            Axis::Eta => self.ncx * self.ncy,
        }
    }

    /// Strides of all axes.
    pub fn strides(&self) -> PerAxis<usize> {
        PerAxis::from_fn(|axis| self.stride(axis))
    }

    /// Grid spacing along `axis`.
    #[inline]
    pub fn spacing(&self, axis: Axis) -> Real {
        match axis {
            Axis::X => self.dx,
            Axis::Y => self.dy,
            Axis::Eta => self.dz,
        }
    }

    /// Spacings of all axes.
    pub fn spacings(&self) -> PerAxis<Real> {
        PerAxis::new(self.dx, self.dy, self.dz)
    }

    /// Linear index of cell (i, j, k).
    #[inline]
    pub fn linear_index(&self, i: usize, j: usize, k: usize) -> CellIndex {
        debug_assert!(i < self.ncx && j < self.ncy && k < self.ncz);
        CellIndex::new(i + self.ncx * (j + self.ncy * k))
    }

    /// (i, j, k) of a linear index.
    #[inline]
    pub fn coordinates(&self, cell: CellIndex) -> (usize, usize, usize) {
        let s = cell.get();
        let i = s % self.ncx;
        let j = (s / self.ncx) % self.ncy;
        let k = s / (self.ncx * self.ncy);
        (i, j, k)
    }

    /// Whether `cell` lies at least [`N_GHOST_CELLS`] away from every edge.
    pub fn is_interior(&self, cell: CellIndex) -> bool {
        let (i, j, k) = self.coordinates(cell);
        let inside = |c: usize, n: usize| c >= N_GHOST_CELLS && c + N_GHOST_CELLS < n;
        inside(i, self.ncx) && inside(j, self.ncy) && inside(k, self.ncz)
    }

    /// Interior cells in storage order.
    pub fn interior_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        let g = N_GHOST_CELLS;
        (g..self.ncz - g).flat_map(move |k| {
            (g..self.ncy - g)
                .flat_map(move |j| (g..self.ncx - g).map(move |i| self.linear_index(i, j, k)))
        })
    }
}

//! Packed hydrodynamic state at one cell and over the grid.

use crate::physics::{N_ENERGY_MOMENTUM, ShearComponent, StateLayout};
use crate::solver::SolverError;
use crate::types::{CellIndex, Real};

use super::tensor::SymmetricTensor;
use super::velocity::{FluidVelocity, FourVelocity};

/// Energy–momentum components T^{τμ} at the head of `Q`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EnergyMomentum {
    /// T^ττ
    pub ttt: Real,
    /// T^τx
    pub ttx: Real,
    /// T^τy
    pub tty: Real,
    /// T^τη
    pub ttn: Real,
}

impl EnergyMomentum {
    /// Unpack from the first four entries of a packed `Q`.
    #[inline(always)]
    pub fn from_conserved(q: &[Real]) -> Self {
        debug_assert!(q.len() >= N_ENERGY_MOMENTUM);
        Self {
            ttt: q[0],
            ttx: q[1],
            tty: q[2],
            ttn: q[3],
        }
    }

    /// Perfect-fluid T^{τμ} for energy density `e`, pressure `p` and velocity `u`.
    pub fn perfect_fluid(e: Real, p: Real, u: FourVelocity) -> Self {
        let w = e + p;
        Self {
            ttt: w * u.ut * u.ut - p,
            ttx: w * u.ut * u.ux,
            tty: w * u.ut * u.uy,
            ttn: w * u.ut * u.un,
        }
    }

    /// Components as an array in storage order.
    #[inline(always)]
    pub fn to_array(&self) -> [Real; N_ENERGY_MOMENTUM] {
        [self.ttt, self.ttx, self.tty, self.ttn]
    }
}

/// Dissipative currents at a cell: shear stress π^{μν} and bulk pressure Π.
///
/// Currents that are not enabled in the layout unpack as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DissipativeState {
    /// Shear stress tensor π^{μν}
    pub pi: SymmetricTensor,
    /// Bulk viscous pressure Π
    pub bulk: Real,
}

impl DissipativeState {
    /// Create from components.
    pub fn new(pi: SymmetricTensor, bulk: Real) -> Self {
        Self { pi, bulk }
    }

    /// Unpack the currents present in `layout` from a packed `Q`.
    #[inline]
    pub fn from_conserved(q: &[Real], layout: &StateLayout) -> Self {
        debug_assert!(q.len() >= layout.n_conserved());
        let pi = if layout.has_shear() {
            SymmetricTensor::from_fn(|c| layout.shear_offset(c).map_or(0.0, |i| q[i]))
        } else {
            SymmetricTensor::zero()
        };
        let bulk = layout.bulk_offset().map_or(0.0, |i| q[i]);
        Self { pi, bulk }
    }

    /// Pack the enabled currents into `q` at the offsets of `layout`.
    pub fn write_to(&self, q: &mut [Real], layout: &StateLayout) {
        for c in ShearComponent::ALL {
            if let Some(i) = layout.shear_offset(c) {
                q[i] = self.pi[c];
            }
        }
        if let Some(i) = layout.bulk_offset() {
            q[i] = self.bulk;
        }
    }
}

/// Grid-wide hydrodynamic state read by the source-term sweep.
///
/// `q` is cell-major: `q[cell * n_conserved + var]`. The sweep only ever
/// reads this struct, so it can serve as the read-only snapshot of a stage.
#[derive(Clone, Debug)]
pub struct HydroState {
    /// Layout of the packed conserved variables
    pub layout: StateLayout,
    /// Packed conserved variables, cell-major
    pub q: Vec<Real>,
    /// Energy density per cell
    pub energy_density: Vec<Real>,
    /// Equilibrium pressure per cell
    pub pressure: Vec<Real>,
    /// Four-velocity at the current stage
    pub velocity: FluidVelocity,
    /// Four-velocity at the previous time step
    pub previous_velocity: FluidVelocity,
    /// Number of cells
    pub n_cells: usize,
}

impl HydroState {
    /// Zero state of `n_cells` cells at rest.
    pub fn new(layout: StateLayout, n_cells: usize) -> Self {
        Self {
            layout,
            q: vec![0.0; n_cells * layout.n_conserved()],
            energy_density: vec![0.0; n_cells],
            pressure: vec![0.0; n_cells],
            velocity: FluidVelocity::new(n_cells),
            previous_velocity: FluidVelocity::new(n_cells),
            n_cells,
        }
    }

    /// Assemble from existing arrays, checking every length.
    pub fn from_parts(
        layout: StateLayout,
        q: Vec<Real>,
        energy_density: Vec<Real>,
        pressure: Vec<Real>,
        velocity: FluidVelocity,
        previous_velocity: FluidVelocity,
    ) -> Result<Self, SolverError> {
        let n_cells = energy_density.len();
        let n_q = n_cells * layout.n_conserved();
        if q.len() != n_q {
            return Err(SolverError::dimension_mismatch("q", n_q, q.len()));
        }
        if pressure.len() != n_cells {
            return Err(SolverError::dimension_mismatch("pressure", n_cells, pressure.len()));
        }
        for (name, field) in [("velocity", &velocity), ("previous_velocity", &previous_velocity)] {
            if !field.is_consistent() || field.len() != n_cells {
                return Err(SolverError::dimension_mismatch(name, n_cells, field.len()));
            }
        }
        Ok(Self {
            layout,
            q,
            energy_density,
            pressure,
            velocity,
            previous_velocity,
            n_cells,
        })
    }

    /// Packed `Q` of a cell.
    #[inline(always)]
    pub fn cell(&self, cell: CellIndex) -> &[Real] {
        let n = self.layout.n_conserved();
        let base = cell.get() * n;
        &self.q[base..base + n]
    }

    /// Mutable packed `Q` of a cell.
    #[inline(always)]
    pub fn cell_mut(&mut self, cell: CellIndex) -> &mut [Real] {
        let n = self.layout.n_conserved();
        let base = cell.get() * n;
        &mut self.q[base..base + n]
    }

    /// Single conserved variable of a cell.
    #[inline(always)]
    pub fn get_var(&self, cell: CellIndex, var: usize) -> Real {
        self.q[cell.get() * self.layout.n_conserved() + var]
    }

    /// Set the primary variables of a cell and the matching perfect-fluid
    /// energy–momentum plus the given dissipative currents.
    pub fn set_cell(
        &mut self,
        cell: CellIndex,
        e: Real,
        p: Real,
        u: FourVelocity,
        dissipative: DissipativeState,
    ) {
        self.energy_density[cell.get()] = e;
        self.pressure[cell.get()] = p;
        self.velocity.set(cell, u);
        self.previous_velocity.set(cell, u);

        let layout = self.layout;
        let q = self.cell_mut(cell);
        q[..N_ENERGY_MOMENTUM].copy_from_slice(&EnergyMomentum::perfect_fluid(e, p, u).to_array());
        dissipative.write_to(q, &layout);
    }
}

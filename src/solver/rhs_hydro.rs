//! Source-term sweep for viscous hydrodynamics in Milne coordinates.
//!
//! For every interior cell:
//!   S = S_ideal(T^{τμ}, p, ∂p, ∂_k v^k)            (4 components)
//!     ⊕ S_dissipative(π^{μν}, Π, ∂u, u_prev)       (10, 1 or 11 components)
//!
//! Optionally the gradient terms of π^{μν} and Π along each axis are added
//! to the energy–momentum slots, for flux schemes that do not carry the
//! viscous stress themselves.
//!
//! The sweep reads [`HydroState`] immutably and writes a separate
//! [`SourceField`], so it can run on a stage snapshot from any number of
//! threads.

use log::{debug, trace, warn};

use crate::equations::{EquationOfState, TransportCoefficients};
use crate::flux::{StencilBuffer, directional_source};
use crate::operators::{VelocityGradient, scalar_gradient};
use crate::physics::{N_ENERGY_MOMENTUM, PhysicsConfig, StateLayout};
use crate::solver::GridGeometry;
use crate::solver::SolverError;
use crate::solver::state::{DissipativeState, EnergyMomentum, HydroState};
use crate::source::{DissipativeSource, IdealSource, SourceContext, SourceTerm};
use crate::types::{Axis, CellIndex, Real};

/// Configuration of the source sweep.
pub struct HydroSourceConfig<'a, E: EquationOfState> {
    /// Equation of state
    pub eos: &'a E,
    /// Grid geometry (strides, spacings, time step)
    pub grid: &'a GridGeometry,
    /// Enabled physics
    pub physics: PhysicsConfig,
    /// Transport coefficients
    pub transport: TransportCoefficients,
    /// Add the π^{μν}/Π gradient terms to the energy–momentum sources
    pub gradient_terms: bool,
}

impl<'a, E: EquationOfState> HydroSourceConfig<'a, E> {
    /// Viscous Milne-coordinate configuration with default transport.
    pub fn new(eos: &'a E, grid: &'a GridGeometry) -> Self {
        debug!(
            "source config: eos={}, grid={}x{}x{}, dt={}",
            eos.name(),
            grid.ncx,
            grid.ncy,
            grid.ncz,
            grid.dt
        );
        Self {
            eos,
            grid,
            physics: PhysicsConfig::default(),
            transport: TransportCoefficients::default(),
            gradient_terms: false,
        }
    }

    /// Set the enabled physics.
    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        debug!(
            "source physics: shear={}, bulk={}, coordinates={:?}",
            physics.shear, physics.bulk, physics.coordinates
        );
        self.physics = physics;
        self
    }

    /// Set the transport coefficients.
    pub fn with_transport(mut self, transport: TransportCoefficients) -> Self {
        debug!("source transport: eta/s={}", transport.eta_over_s);
        self.transport = transport;
        self
    }

    /// Enable the π^{μν}/Π gradient terms.
    pub fn with_gradient_terms(mut self, enabled: bool) -> Self {
        self.gradient_terms = enabled;
        self
    }

    /// Layout implied by the physics.
    #[inline]
    pub fn layout(&self) -> StateLayout {
        self.physics.layout()
    }

    /// Source components per cell.
    #[inline]
    pub fn n_components(&self) -> usize {
        self.layout().n_conserved()
    }

    /// Check that `state` matches this configuration.
    pub fn validate(&self, state: &HydroState) -> Result<(), SolverError> {
        let layout = self.layout();
        if state.layout != layout {
            return Err(SolverError::LayoutMismatch {
                expected: layout.n_conserved(),
                actual: state.layout.n_conserved(),
            });
        }
        if state.n_cells != self.grid.n_cells() {
            return Err(SolverError::dimension_mismatch(
                "state",
                self.grid.n_cells(),
                state.n_cells,
            ));
        }
        if !(self.transport.eta_over_s > 0.0) && layout.has_shear() {
            return Err(SolverError::InvalidConfig(format!(
                "eta/s = {} must be positive when shear is evolved",
                self.transport.eta_over_s
            )));
        }
        Ok(())
    }
}

/// Per-cell source vectors, cell-major.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceField {
    /// Source values, `data[cell * n_components + var]`
    pub data: Vec<Real>,
    /// Number of cells
    pub n_cells: usize,
    /// Components per cell
    pub n_components: usize,
}

impl SourceField {
    /// Zero field.
    pub fn new(n_cells: usize, n_components: usize) -> Self {
        Self {
            data: vec![0.0; n_cells * n_components],
            n_cells,
            n_components,
        }
    }

    /// Source vector of a cell.
    #[inline]
    pub fn cell(&self, cell: CellIndex) -> &[Real] {
        let base = cell.get() * self.n_components;
        &self.data[base..base + self.n_components]
    }

    /// Mutable source vector of a cell.
    #[inline]
    pub fn cell_mut(&mut self, cell: CellIndex) -> &mut [Real] {
        let base = cell.get() * self.n_components;
        &mut self.data[base..base + self.n_components]
    }

    /// Largest absolute source value.
    pub fn max_abs(&self) -> Real {
        self.data.iter().fold(0.0, |m: Real, v| m.max(v.abs()))
    }

    /// Fail on the first NaN or infinity.
    pub fn check_finite(&self) -> Result<(), SolverError> {
        let bad = self.data.iter().position(|v| !v.is_finite());
        match bad {
            None => Ok(()),
            Some(i) => {
                let cell = CellIndex::new(i / self.n_components);
                let component = i % self.n_components;
                let value = self.data[i];
                warn!(
                    "non-finite source {} in component {} at cell {}",
                    value, component, cell
                );
                Err(SolverError::NonFinite {
                    cell,
                    component,
                    value,
                })
            }
        }
    }
}

/// Reduce the neighbourhood of `cell` to a [`SourceContext`].
pub fn cell_context(
    state: &HydroState,
    cell: CellIndex,
    time: Real,
    grid: &GridGeometry,
) -> SourceContext {
    let u = state.velocity.get(cell);
    let velocity_gradient = VelocityGradient::centered(&state.velocity, cell, grid);
    let dkvk = velocity_gradient.coordinate_velocity_divergence(&u);
    let q = state.cell(cell);

    SourceContext {
        time,
        dt: grid.dt,
        energy_density: state.energy_density[cell.get()],
        pressure: state.pressure[cell.get()],
        velocity: u,
        previous_velocity: state.previous_velocity.get(cell),
        velocity_gradient,
        pressure_gradient: scalar_gradient(&state.pressure, cell, grid),
        dkvk,
        energy_momentum: EnergyMomentum::from_conserved(q),
        dissipative: DissipativeState::from_conserved(q, &state.layout),
    }
}

/// Sum of the π^{μν}/Π gradient terms along every axis at `cell`.
pub fn compute_gradient_source(
    state: &HydroState,
    cell: CellIndex,
    time: Real,
    grid: &GridGeometry,
    buffer: &mut StencilBuffer,
) -> [Real; N_ENERGY_MOMENTUM] {
    let u = state.velocity.get(cell);
    let mut total = [0.0; N_ENERGY_MOMENTUM];
    for axis in Axis::ALL {
        buffer.fill_from(state, cell, axis, grid);
        let s = directional_source(axis, &buffer.view(), &u, grid.spacing(axis), time);
        for (acc, v) in total.iter_mut().zip(s) {
            *acc += v;
        }
    }
    total
}

/// Full source vector of one interior cell.
///
/// `out` must hold `config.n_components()` values. `buffer` is scratch
/// space for the gradient terms; sweeps reuse one per worker.
pub fn compute_cell_source<E: EquationOfState>(
    state: &HydroState,
    cell: CellIndex,
    time: Real,
    config: &HydroSourceConfig<E>,
    buffer: &mut StencilBuffer,
    out: &mut [Real],
) {
    debug_assert_eq!(out.len(), config.n_components());
    debug_assert!(config.grid.is_interior(cell), "cell {} is not interior", cell);

    let ctx = cell_context(state, cell, time, config.grid);
    debug_assert!(ctx.velocity.ut != 0.0, "u^τ = 0 at cell {}", cell);
    debug_assert!(ctx.energy_density > 0.0, "e <= 0 at cell {}", cell);

    let (em, dissipative) = out.split_at_mut(N_ENERGY_MOMENTUM);
    IdealSource::new(config.eos, config.physics.coordinates).evaluate(&ctx, em);

    if !config.physics.is_ideal() {
        DissipativeSource::new(config.eos, &config.transport, config.layout())
            .evaluate(&ctx, dissipative);
    }

    if config.gradient_terms && !config.physics.is_ideal() {
        let g = compute_gradient_source(state, cell, time, config.grid, buffer);
        for (s, v) in em.iter_mut().zip(g) {
            *s += v;
        }
    }
}

/// Sources of every interior cell; ghost cells stay zero.
pub fn compute_sources<E: EquationOfState>(
    state: &HydroState,
    time: Real,
    config: &HydroSourceConfig<E>,
) -> Result<SourceField, SolverError> {
    config.validate(state)?;
    let grid = config.grid;
    let mut field = SourceField::new(grid.n_cells(), config.n_components());
    trace!("source sweep at tau={} over {} cells", time, grid.n_cells());

    let mut buffer = StencilBuffer::new(state.layout);
    for cell in grid.interior_cells() {
        compute_cell_source(state, cell, time, config, &mut buffer, field.cell_mut(cell));
    }
    Ok(field)
}

/// Parallel version of [`compute_sources`].
///
/// Cells are independent, so the result is bit-identical to the serial
/// sweep for any number of threads.
#[cfg(feature = "parallel")]
pub fn compute_sources_parallel<E: EquationOfState>(
    state: &HydroState,
    time: Real,
    config: &HydroSourceConfig<E>,
) -> Result<SourceField, SolverError> {
    use rayon::prelude::*;

    config.validate(state)?;
    let grid = config.grid;
    let n_components = config.n_components();
    let mut field = SourceField::new(grid.n_cells(), n_components);
    trace!(
        "parallel source sweep at tau={} over {} cells",
        time,
        grid.n_cells()
    );

    field
        .data
        .par_chunks_mut(n_components)
        .enumerate()
        .for_each_init(
            || StencilBuffer::new(state.layout),
            |buffer, (s, out)| {
                let cell = CellIndex::new(s);
                if grid.is_interior(cell) {
                    compute_cell_source(state, cell, time, config, buffer, out);
                }
            },
        );
    Ok(field)
}

//! Grid-level driver of the source-term kernels.
//!
//! # Submodules
//!
//! - [`state`]: physical state types (four-velocity, tensors, packed `Q`)
//! - grid geometry, errors and the source sweep are re-exported here

mod error;
mod grid;
mod rhs_hydro;
pub mod state;

pub use error::SolverError;
pub use grid::{GridGeometry, N_GHOST_CELLS};
#[cfg(feature = "parallel")]
pub use rhs_hydro::compute_sources_parallel;
pub use rhs_hydro::{
    HydroSourceConfig, SourceField, cell_context, compute_cell_source, compute_gradient_source,
    compute_sources,
};
pub use state::{
    DissipativeState, EnergyMomentum, FluidVelocity, FourVelocity, HydroState, SymmetricTensor,
    Vorticity,
};

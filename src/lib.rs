//! # vh-rs
//!
//! Source terms of second-order viscous relativistic hydrodynamics in
//! Milne coordinates (τ, x, y, η_s).
//!
//! This crate provides the local, per-cell part of the right-hand side
//! consumed by an external finite-volume scheme:
//! - Equation of state and temperature-dependent transport coefficients
//! - Kinematic decomposition of the velocity gradient (θ, σ^{μν}, ω^{μν})
//! - Relaxation equations for the shear stress π^{μν} and bulk pressure Π
//! - Ideal-fluid energy–momentum sources with Milne or flat geometry
//! - Directional gradient terms of the dissipative currents
//! - Serial and parallel sweeps over a structured grid

pub mod equations;
pub mod flux;
pub mod operators;
pub mod physics;
pub mod solver;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use equations::{
    BulkViscosityFit, ConformalEos, EquationOfState, TransportCoefficients,
};
pub use flux::{
    StencilBuffer, StencilView, directional_source, directional_source_x, directional_source_y,
    directional_source_z,
};
pub use operators::{Kinematics, VelocityGradient};
pub use physics::{CoordinateSystem, PhysicsConfig, ShearComponent, StateLayout};
#[cfg(feature = "parallel")]
pub use solver::compute_sources_parallel;
pub use solver::{
    DissipativeState, FluidVelocity, FourVelocity, GridGeometry, HydroSourceConfig, HydroState,
    SolverError, SourceField, SymmetricTensor, compute_cell_source, compute_sources,
};
pub use source::{DissipativeSource, IdealSource, SourceContext, SourceTerm};
pub use types::{Axis, CellIndex, Real};

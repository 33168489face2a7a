//! Physical state types for relativistic viscous hydrodynamics.
//!
//! - [`FourVelocity`], [`FluidVelocity`]: four-velocity at a cell and on the grid
//! - [`SymmetricTensor`], [`Vorticity`]: rank-2 tensors in Milne coordinates
//! - [`EnergyMomentum`], [`DissipativeState`]: unpacked parts of `Q`
//! - [`HydroState`]: grid-wide packed state read by the source sweep

mod hydro;
mod tensor;
mod velocity;

pub use hydro::{DissipativeState, EnergyMomentum, HydroState};
pub use tensor::{MixedVorticity, SymmetricTensor, Vorticity};
pub use velocity::{FluidVelocity, FourVelocity};

//! Enabled-physics configuration and the packed state layout it implies.
//!
//! # Submodules
//!
//! - [`config`]: [`PhysicsConfig`] and [`CoordinateSystem`]
//! - [`layout`]: [`StateLayout`] and the fixed [`ShearComponent`] ordering
//!
//! The configuration decides at run time which dissipative currents are
//! evolved, and therefore how long the conserved and source vectors are.

mod config;
mod layout;

pub use config::{CoordinateSystem, PhysicsConfig};
pub use layout::{N_ENERGY_MOMENTUM, N_SHEAR_COMPONENTS, STENCIL_WIDTH, ShearComponent, StateLayout};

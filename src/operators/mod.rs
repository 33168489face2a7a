//! Finite-difference and kinematic operators on the cell grid.
//!
//! This module provides:
//! - centered differences of cell fields (`centered_difference`, `scalar_gradient`)
//! - the spatial velocity gradient at a cell (`VelocityGradient`)
//! - the kinematic decomposition into θ, σ^{μν} and ω^{μν} (`Kinematics`)

mod differentiation;
mod kinematics;

pub use differentiation::{VelocityGradient, centered_difference, centered_factor, scalar_gradient};
pub use kinematics::{ComovingDerivative, KinematicInput, Kinematics, backward_time_derivative};

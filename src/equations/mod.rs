//! Thermodynamics and transport properties of the fluid.
//!
//! - [`EquationOfState`]: temperature, sound speed and pressure as functions
//!   of energy density; [`ConformalEos`] is the massless-gas reference
//! - [`TransportCoefficients`]: second-order transport constants and the
//!   relaxation rates derived from them

mod equation_of_state;
mod transport;

pub use equation_of_state::{CONFORMAL_EOS_FACTOR, ConformalEos, EquationOfState};
pub use transport::{BulkTransport, BulkViscosityFit, ShearTransport, TransportCoefficients};

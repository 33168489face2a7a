//! Local source terms of the viscous hydrodynamic equations.
//!
//! - [`traits`]: the [`SourceTerm`] trait and its per-cell [`SourceContext`]
//! - [`ideal`]: energy–momentum source with Milne or Cartesian geometry
//! - [`dissipative`]: relaxation of the shear stress and bulk pressure

pub mod dissipative;
pub mod ideal;
pub mod traits;

pub use dissipative::{DissipativeRhs, DissipativeSource};
pub use ideal::IdealSource;
pub use traits::{SourceContext, SourceTerm};

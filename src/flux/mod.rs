//! Dissipative-current gradient terms consumed by the flux scheme.
//!
//! The external flux scheme advects T^{τμ} with the ideal part of the
//! stress; the divergence of π^{μν} and Π is handed back as local sources
//! computed from a 5-cell window along each axis.
//!
//! - [`StencilBuffer`], [`StencilView`]: window of the packed state
//! - [`directional_source`] and its per-axis wrappers

mod directional;
mod stencil;

pub use directional::{
    directional_source, directional_source_x, directional_source_y, directional_source_z,
};
pub use stencil::{STENCIL_CENTER, StencilBuffer, StencilView};

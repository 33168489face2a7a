//! Energy–momentum sources from gradients of the dissipative currents.
//!
//! Splitting T^{μν} into its ideal and viscous parts moves the spatial
//! divergence of π^{μν} out of the flux. Along axis a with coordinate
//! velocity v^a = u^a/u^τ this contributes
//!
//! S^μ = v^a ∂_a π^{τμ} - ∂_a π^{μa}
//!
//! plus, with bulk pressure, -v^a ∂_a Π in S^τ and -g^{aa}∂_a Π in S^a
//! (with g^{ηη} = 1/τ²).

use crate::physics::{N_ENERGY_MOMENTUM, ShearComponent};
use crate::solver::state::FourVelocity;
use crate::types::{Axis, Real};

use super::stencil::StencilView;

/// Contribution of the window `stencil` along `axis` to the four
/// energy–momentum sources.
///
/// `h` is the grid spacing along `axis`; `t` is the proper time, used
/// only along η_s.
pub fn directional_source(
    axis: Axis,
    stencil: &StencilView<'_>,
    u: &FourVelocity,
    h: Real,
    t: Real,
) -> [Real; N_ENERGY_MOMENTUM] {
    let a = axis.spacetime_index();
    let v = u.coordinate_velocity(axis);
    let d = |mu: usize, nu: usize| stencil.shear_derivative(ShearComponent::from_indices(mu, nu), h);

    let mut s = [0.0; N_ENERGY_MOMENTUM];
    for (mu, slot) in s.iter_mut().enumerate() {
        *slot = d(0, mu) * v - d(mu, a);
    }

    if let Some(dbulk) = stencil.bulk_derivative(h) {
        s[0] -= v * dbulk;
        s[a] -= match axis {
            Axis::X | Axis::Y => dbulk,
            Axis::Eta => dbulk / (t * t),
        };
    }
    s
}

/// [`directional_source`] along x.
#[inline]
pub fn directional_source_x(stencil: &StencilView<'_>, u: &FourVelocity, dx: Real) -> [Real; N_ENERGY_MOMENTUM] {
    directional_source(Axis::X, stencil, u, dx, 1.0)
}

/// [`directional_source`] along y.
#[inline]
pub fn directional_source_y(stencil: &StencilView<'_>, u: &FourVelocity, dy: Real) -> [Real; N_ENERGY_MOMENTUM] {
    directional_source(Axis::Y, stencil, u, dy, 1.0)
}

/// [`directional_source`] along η_s at proper time `t`.
#[inline]
pub fn directional_source_z(
    stencil: &StencilView<'_>,
    u: &FourVelocity,
    t: Real,
    dz: Real,
) -> [Real; N_ENERGY_MOMENTUM] {
    directional_source(Axis::Eta, stencil, u, dz, t)
}

//! Relaxation equations for π^{μν} and Π.
//!
//! Shear: u^τ ∂_τ π^{μν} = 2β_π σ^{μν} - π^{μν}/τ_π - I^{μν} - G^{μν},
//! where G^{μν} collects the Christoffel terms of the comoving derivative
//! (non-zero only for components with a τ or η index).
//!
//! Bulk: u^τ ∂_τ Π = -β_Π θ - Π/τ_Π - δ_ΠΠ Π θ + λ_Ππ π^{μν}σ_{μν}.

use crate::equations::{BulkTransport, ShearTransport};
use crate::solver::state::{FourVelocity, SymmetricTensor};
use crate::types::Real;

/// Comoving rate of change u^τ ∂_τ π^{μν} of every shear component.
pub fn shear_relaxation(
    pi: &SymmetricTensor,
    sigma: &SymmetricTensor,
    coupling: &SymmetricTensor,
    transport: &ShearTransport,
    u: &FourVelocity,
    t: Real,
) -> SymmetricTensor {
    let beta_pi = transport.beta;
    let taupi_inv = transport.relaxation_rate;
    let ut = u.ut;
    let un = u.un;
    let SymmetricTensor {
        tt: pitt,
        tx: pitx,
        ty: pity,
        tn: pitn,
        xx: pixx,
        xy: pixy,
        xn: pixn,
        yy: piyy,
        yn: piyn,
        nn: pinn,
    } = *pi;
    let s = sigma;
    let i = coupling;

    SymmetricTensor {
        tt: 2.0 * beta_pi * s.tt - pitt * taupi_inv - i.tt - 2.0 * un * t * pitn,
        tx: 2.0 * beta_pi * s.tx - pitx * taupi_inv - i.tx - un * t * pixn,
        ty: 2.0 * beta_pi * s.ty - pity * taupi_inv - i.ty - un * t * piyn,
        tn: 2.0 * beta_pi * s.tn - pitn * taupi_inv - i.tn - un * t * pinn
            - (ut * pitn + un * pitt) / t,
        xx: 2.0 * beta_pi * s.xx - pixx * taupi_inv - i.xx,
        xy: 2.0 * beta_pi * s.xy - pixy * taupi_inv - i.xy,
        xn: 2.0 * beta_pi * s.xn - pixn * taupi_inv - i.xn - (ut * pixn + un * pitx) / t,
        yy: 2.0 * beta_pi * s.yy - piyy * taupi_inv - i.yy,
        yn: 2.0 * beta_pi * s.yn - piyn * taupi_inv - i.yn - (ut * piyn + un * pity) / t,
        nn: 2.0 * beta_pi * s.nn - pinn * taupi_inv - i.nn - 2.0 * (ut * pinn + un * pitn) / t,
    }
}

/// Comoving rate of change u^τ ∂_τ Π of the bulk pressure.
#[inline]
pub fn bulk_relaxation(
    bulk: Real,
    theta: Real,
    ps: Real,
    transport: &BulkTransport,
    delta_bulk: Real,
) -> Real {
    -transport.beta * theta - bulk * transport.relaxation_rate - delta_bulk * bulk * theta
        + transport.lambda_shear * ps
}

/// Convert a comoving rate into the source of the conserved current:
/// `rate / u^τ + value · ∂_k v^k`.
#[inline(always)]
pub fn to_coordinate_time(rate: Real, value: Real, ut: Real, dkvk: Real) -> Real {
    rate / ut + value * dkvk
}

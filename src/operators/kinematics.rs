//! Kinematic decomposition of the velocity gradient in Milne coordinates.
//!
//! From u^μ, its spatial derivatives and its value at the previous time
//! step this module builds:
//!
//! - the backward time derivative ∂_τ u^μ ≈ (u^μ - u^μ_prev) / Δτ
//! - the expansion rate θ = u^τ/τ + ∂_τ u^τ + ∂_x u^x + ∂_y u^y + ∂_η u^η
//! - the shear tensor σ^{μν}, transverse to u and traceless by construction
//! - the vorticity ω^{μν}
//! - the comoving derivative D u_μ = u^ν ∇_ν u_μ (lower index, with
//!   Christoffel terms), used by the frame coupling I₁
//!
//! The curvature terms come from the non-vanishing Christoffel symbols
//! Γ^τ_ηη = τ and Γ^η_τη = 1/τ.
//!
//! Term order inside each expression is fixed;
//! several of them cancel large near-equal terms and are sensitive to
//! reassociation.

use crate::solver::state::{FourVelocity, SymmetricTensor, Vorticity};
use crate::types::Real;

use super::differentiation::VelocityGradient;

/// Inputs of the kinematic decomposition at one cell.
#[derive(Clone, Copy, Debug)]
pub struct KinematicInput {
    /// Proper time τ
    pub t: Real,
    /// Time step Δτ of the backward difference
    pub dt: Real,
    /// Velocity at the current stage
    pub u: FourVelocity,
    /// Velocity at the previous time step
    pub u_prev: FourVelocity,
    /// Spatial derivatives of u^μ
    pub grad: VelocityGradient,
}

/// Comoving derivative D u_μ with the index lowered by the Milne metric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ComovingDerivative {
    /// D u_τ
    pub t: Real,
    /// D u_x
    pub x: Real,
    /// D u_y
    pub y: Real,
    /// D u_η
    pub n: Real,
}

/// Kinematic quantities at one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    /// Backward time derivatives ∂_τ u^μ
    pub dt_u: FourVelocity,
    /// u^ν ∂_ν u^μ without Christoffel terms
    pub convective: FourVelocity,
    /// Comoving derivative D u_μ
    pub comoving: ComovingDerivative,
    /// Expansion rate θ
    pub theta: Real,
    /// Shear tensor σ^{μν}
    pub sigma: SymmetricTensor,
    /// Vorticity tensor ω^{μν}
    pub omega: Vorticity,
}

impl Kinematics {
    /// Decompose the velocity gradient at one cell.
    pub fn compute(input: &KinematicInput) -> Self {
        let t = input.t;
        let FourVelocity { ut, ux, uy, un } = input.u;
        let g = &input.grad;
        debug_assert!(t > 0.0, "proper time must be positive, got {}", t);
        debug_assert!(ut != 0.0, "u^τ must be non-zero");

        let (dxut, dxux, dxuy, dxun) = (g.dx.ut, g.dx.ux, g.dx.uy, g.dx.un);
        let (dyut, dyux, dyuy, dyun) = (g.dy.ut, g.dy.ux, g.dy.uy, g.dy.un);
        let (dnut, dnux, dnuy, dnun) = (g.deta.ut, g.deta.ux, g.deta.uy, g.deta.un);

        let ut2 = ut * ut;
        let un2 = un * un;
        let t2 = t * t;
        let t3 = t * t2;

        let dt_u = backward_time_derivative(&input.u, &input.u_prev, input.dt);
        let (dtut, dtux, dtuy, dtun) = (dt_u.ut, dt_u.ux, dt_u.uy, dt_u.un);

        // Comoving derivatives
        let d_ut = ut * dtut + ux * dxut + uy * dyut + un * dnut + t * un * un;
        let dux_upper = ut * dtux + ux * dxux + uy * dyux + un * dnux;
        let d_ux = -dux_upper;
        let duy_upper = ut * dtuy + ux * dxuy + uy * dyuy + un * dnuy;
        let d_uy = -duy_upper;
        let dun_upper = ut * dtun + ux * dxun + uy * dyun + un * dnun + 2.0 * ut * un / t;
        let d_un = -t2 * dun_upper;

        let dut = d_ut - t * un * un;
        let dux = ut * dtux + ux * dxux + uy * dyux + un * dnux;
        let duy = ut * dtuy + ux * dxuy + uy * dyuy + un * dnuy;
        let dun = ut * dtun + ux * dxun + uy * dyun + un * dnun;

        let theta = ut / t + dtut + dxux + dyuy + dnun;

        let sigma = SymmetricTensor {
            tt: -t * ut * un2 + (dtut - ut * dut) + (ut2 - 1.0) * theta / 3.0,
            tx: -(t * un2 * ux) / 2.0 + (dtux - dxut) / 2.0 - (ux * dut + ut * dux) / 2.0
                + ut * ux * theta / 3.0,
            ty: -(t * un2 * uy) / 2.0 + (dtuy - dyut) / 2.0 - (uy * dut + ut * duy) / 2.0
                + ut * uy * theta / 3.0,
            tn: -un * (2.0 * ut2 + t2 * un2) / (2.0 * t) + (dtun - dnut / t2) / 2.0
                - (un * dut + ut * dun) / 2.0
                + ut * un * theta / 3.0,
            xx: -(dxux + ux * dux) + (1.0 + ux * ux) * theta / 3.0,
            xy: -(dxuy + dyux) / 2.0 - (uy * dux + ux * duy) / 2.0 + ux * uy * theta / 3.0,
            xn: -ut * ux * un / t - (dxun + dnux / t2) / 2.0 - (un * dux + ux * dun) / 2.0
                + ux * un * theta / 3.0,
            yy: -(dyuy + uy * duy) + (1.0 + uy * uy) * theta / 3.0,
            yn: -ut * uy * un / t - (dyun + dnuy / t2) / 2.0 - (un * duy + uy * dun) / 2.0
                + uy * un * theta / 3.0,
            nn: -ut * (1.0 + 2.0 * t2 * un2) / t3 - dnun / t2 - un * dun
                + (1.0 / t2 + un2) * theta / 3.0,
        };

        let omega = Vorticity {
            tx: (dtux + dxut) / 2.0 + (ux * dut - ut * dux) / 2.0 + t * un2 * ux / 2.0,
            ty: (dtuy + dyut) / 2.0 + (uy * dut - ut * duy) / 2.0 + t * un2 * uy / 2.0,
            tn: (t2 * dtun + 2.0 * t * un + dnut) / 2.0 + (t2 * un * dut - ut * d_un)
                + t3 * un * un2 / 2.0,
            xy: (dyux - dxuy) / 2.0 + (uy * dux - ux * duy) / 2.0,
            xn: (dnux - t2 * dxun) / 2.0 + (t2 * un * dux - ux * d_un) / 2.0,
            yn: (dnuy - t2 * dyun) / 2.0 + (t2 * un * duy - uy * d_un) / 2.0,
        };

        Self {
            dt_u,
            convective: FourVelocity::new(dut, dux, duy, dun),
            comoving: ComovingDerivative {
                t: d_ut,
                x: d_ux,
                y: d_uy,
                n: d_un,
            },
            theta,
            sigma,
            omega,
        }
    }
}

/// First-order backward difference (u - u_prev) / dt per component.
#[inline]
pub fn backward_time_derivative(u: &FourVelocity, u_prev: &FourVelocity, dt: Real) -> FourVelocity {
    FourVelocity {
        ut: (u.ut - u_prev.ut) / dt,
        ux: (u.ux - u_prev.ux) / dt,
        uy: (u.uy - u_prev.uy) / dt,
        un: (u.un - u_prev.un) / dt,
    }
}

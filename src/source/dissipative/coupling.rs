//! Second-order coupling terms of the shear relaxation equation.
//!
//! For each independent component of π^{μν}:
//!
//! - I₁ couples π to the comoving derivative D u_μ
//! - I₂ = θ π^{μν}
//! - I₃ couples π to the vorticity ω^{μν}
//! - I₄ = π^{λ⟨μ} σ^{ν⟩}_λ, the traceless transverse part of π·σ
//!
//! and the scalar invariant ps = π^{μν} σ_{μν} shared by I₄ and the bulk
//! equation. The combination is
//!
//! I^{μν} = I₁ + δ_ππ I₂ - I₃ + τ_ππ I₄ - λ_πΠ Π σ^{μν}

use crate::operators::Kinematics;
use crate::solver::state::{FourVelocity, SymmetricTensor};
use crate::types::Real;

/// Scalar coefficients of the coupling combination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CouplingCoefficients {
    /// δ_ππ
    pub delta_pipi: Real,
    /// τ_ππ
    pub tau_pipi: Real,
    /// λ_πΠ
    pub lambda_pibulk: Real,
}

/// Coupling terms at one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coupling {
    /// Combined coupling I^{μν}
    pub total: SymmetricTensor,
    /// π^{μν} σ_{μν}
    pub ps: Real,
}

/// Double contraction π^{μν} σ_{μν} with the Milne metric diag(1, -1, -1, -τ²).
#[inline]
pub fn shear_contraction(pi: &SymmetricTensor, sigma: &SymmetricTensor, t: Real) -> Real {
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
    let SymmetricTensor {
        tt: stt,
        tx: stx,
        ty: sty,
        tn: stn,
        xx: sxx,
        xy: sxy,
        xn: sxn,
        yy: syy,
        yn: syn,
        nn: snn,
    } = *sigma;
    let t2 = t * t;
    pitt * stt - 2.0 * pitx * stx - 2.0 * pity * sty + pixx * sxx + 2.0 * pixy * sxy + piyy * syy
        - 2.0 * pitn * stn * t2
        + 2.0 * pixn * sxn * t2
        + 2.0 * piyn * syn * t2
        + pinn * snn * t2 * t2
}

/// Frame coupling I₁^{μν} = u^μ π^{νλ} D u_λ + u^ν π^{μλ} D u_λ.
pub fn frame_coupling(pi: &SymmetricTensor, u: &FourVelocity, k: &Kinematics) -> SymmetricTensor {
    let FourVelocity { ut, ux, uy, un } = *u;
    let (d_ut, d_ux, d_uy, d_un) = (k.comoving.t, k.comoving.x, k.comoving.y, k.comoving.n);
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

    SymmetricTensor {
        tt: 2.0 * ut * (pitt * d_ut + pitx * d_ux + pity * d_uy + pitn * d_un),
        tx: (pitt * ux + pitx * ut) * d_ut
            + (pitx * ux + pixx * ut) * d_ux
            + (pity * ux + pixy * ut) * d_uy
            + (pitn * ux + pixn * ut) * d_un,
        ty: (pitt * uy + pity * ut) * d_ut
            + (pitx * uy + pixy * ut) * d_ux
            + (pity * uy + piyy * ut) * d_uy
            + (pitn * uy + piyn * ut) * d_un,
        tn: (pitt * un + pitn * ut) * d_ut
            + (pitx * un + pixn * ut) * d_ux
            + (pity * un + piyn * ut) * d_uy
            + (pitn * un + pinn * ut) * d_un,
        xx: 2.0 * ux * (pitx * d_ut + pixx * d_ux + pixy * d_uy + pixn * d_un),
        xy: (pitx * uy + pity * ux) * d_ut
            + (pixx * uy + pixy * ux) * d_ux
            + (pixy * uy + piyy * ux) * d_uy
            + (pixn * uy + piyn * ux) * d_un,
        xn: (pitx * un + pitn * ux) * d_ut
            + (pixx * un + pixn * ux) * d_ux
            + (pixy * un + piyn * ux) * d_uy
            + (pixn * un + pinn * ux) * d_un,
        yy: 2.0 * uy * (pity * d_ut + pixy * d_ux + piyy * d_uy + piyn * d_un),
        yn: (pity * un + pitn * uy) * d_ut
            + (pixy * un + pixn * uy) * d_ux
            + (piyy * un + piyn * uy) * d_uy
            + (piyn * un + pinn * uy) * d_un,
        nn: 2.0 * un * (pitn * d_ut + pixn * d_ux + piyn * d_uy + pinn * d_un),
    }
}

/// Rotation coupling I₃^{μν} = π^{μλ} ω^ν_λ + π^{νλ} ω^μ_λ.
pub fn rotation_coupling(pi: &SymmetricTensor, k: &Kinematics, t: Real) -> SymmetricTensor {
    let w = &k.omega;
    let (wtx, wty, wtn, wxy, wxn, wyn) = (w.tx, w.ty, w.tn, w.xy, w.xn, w.yn);
    let m = w.mixed(t);
    let (wxt, wyt, wnt, wyx, wnx, wny) = (m.xt, m.yt, m.nt, m.yx, m.nx, m.ny);
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

    SymmetricTensor {
        tt: 2.0 * (pitx * wtx + pity * wty + pitn * wtn),
        tx: pitt * wxt + pity * wxy + pitn * wxn + pixx * wtx + pixy * wty + pixn * wtn,
        ty: pitt * wyt + pitx * wyx + pitn * wyn + pixy * wtx + piyy * wty + piyn * wtn,
        tn: pitt * wnt + pitx * wnx + pity * wny + pixn * wtx + piyn * wty + pinn * wtn,
        xx: 2.0 * (pitx * wxt + pixy * wxy + pixn * wxn),
        xy: pitx * wyt + pity * wxt + pixx * wyx + piyy * wxy + pixn * wyn + piyn * wxn,
        xn: pitx * wnt + pitn * wxt + pixx * wnx + pixy * wny + piyn * wxy + pinn * wxn,
        yy: 2.0 * (pity * wyt + pixy * wyx + piyn * wyn),
        yn: pity * wnt + pitn * wyt + pixy * wnx + pixn * wyx + piyy * wny + pinn * wyn,
        nn: 2.0 * (pitn * wnt + pixn * wnx + piyn * wny),
    }
}

/// Shear coupling I₄^{μν} given the precomputed invariant `ps`.
pub fn shear_coupling(
    pi: &SymmetricTensor,
    sigma: &SymmetricTensor,
    u: &FourVelocity,
    ps: Real,
    t: Real,
) -> SymmetricTensor {
    let FourVelocity { ut, ux, uy, un } = *u;
    let t2 = t * t;
    let ut2 = ut * ut;
    let ux2 = ux * ux;
    let uy2 = uy * uy;
    let un2 = un * un;
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
    let SymmetricTensor {
        tt: stt,
        tx: stx,
        ty: sty,
        tn: stn,
        xx: sxx,
        xy: sxy,
        xn: sxn,
        yy: syy,
        yn: syn,
        nn: snn,
    } = *sigma;

    SymmetricTensor {
        tt: (pitt * stt - pitx * stx - pity * sty - t2 * pitn * stn) - (1.0 - ut2) * ps / 3.0,
        tx: (pitt * stx + pitx * stt) / 2.0
            - (pitx * sxx + pixx * stx) / 2.0
            - (pity * sxy + pixy * sty) / 2.0
            - t2 * (pitn * sxn + pixn * stn) / 2.0
            + (ut * ux) * ps / 3.0,
        ty: (pitt * sty + pity * stt) / 2.0
            - (pitx * sxy + pixy * stx) / 2.0
            - (pity * syy + piyy * sty) / 2.0
            - t2 * (pitn * syn + piyn * stn) / 2.0
            + (ut * uy) * ps / 3.0,
        tn: (pitt * stn + pitn * stt) / 2.0
            - (pitx * sxn + pixn * stx) / 2.0
            - (pity * syn + piyn * sty) / 2.0
            - t2 * (pitn * snn + pinn * stn) / 2.0
            + (ut * un) * ps / 3.0,
        xx: (pitx * stx - pixx * sxx - pixy * sxy - t2 * pixn * sxn) + (1.0 + ux2) * ps / 3.0,
        xy: (pitx * sty + pity * stx) / 2.0
            - (pixx * sxy + pixy * sxx) / 2.0
            - (pixy * syy + piyy * sxy) / 2.0
            - t2 * (pixn * syn + piyn * sxn) / 2.0
            + (ux * uy) * ps / 3.0,
        xn: (pitx * stn + pitn * stx) / 2.0
            - (pixx * sxn + pixn * sxx) / 2.0
            - (pixy * syn + piyn * sxy) / 2.0
            - t2 * (pixn * snn + pinn * sxn) / 2.0
            + (ux * un) * ps / 3.0,
        yy: (pity * sty - pixy * sxy - piyy * syy - t2 * piyn * syn) + (1.0 + uy2) * ps / 3.0,
        yn: (pity * stn + pitn * sty) / 2.0
            - (pixy * sxn + pixn * sxy) / 2.0
            - (piyy * syn + piyn * syy) / 2.0
            - t2 * (piyn * snn + pinn * syn) / 2.0
            + (uy * un) * ps / 3.0,
        nn: (pitn * stn - pixn * sxn - piyn * syn - t2 * pinn * snn) + (1.0 / t2 + un2) * ps / 3.0,
    }
}

impl Coupling {
    /// All coupling terms for shear stress `pi`, bulk pressure `bulk`,
    /// velocity `u` and the kinematics `k` at proper time `t`.
    pub fn compute(
        pi: &SymmetricTensor,
        bulk: Real,
        u: &FourVelocity,
        k: &Kinematics,
        t: Real,
        coeffs: &CouplingCoefficients,
    ) -> Self {
        let sigma = &k.sigma;
        let i1 = frame_coupling(pi, u, k);
        let i3 = rotation_coupling(pi, k, t);
        let ps = shear_contraction(pi, sigma, t);
        let i4 = shear_coupling(pi, sigma, u, ps, t);

        let CouplingCoefficients {
            delta_pipi,
            tau_pipi,
            lambda_pibulk,
        } = *coeffs;
        let total = SymmetricTensor::from_fn(|c| {
            i1[c] + delta_pipi * (k.theta * pi[c]) - i3[c] + tau_pipi * i4[c]
                - lambda_pibulk * bulk * sigma[c]
        });
        Self { total, ps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::{KinematicInput, VelocityGradient};
    use crate::physics::ShearComponent;
    use approx::assert_relative_eq;

    const COEFFS: CouplingCoefficients = CouplingCoefficients {
        delta_pipi: 1.33333,
        tau_pipi: 1.42857,
        lambda_pibulk: 1.2,
    };

    fn sample_pi() -> SymmetricTensor {
        SymmetricTensor::from_array([0.3, 0.1, -0.05, 0.02, 0.4, 0.07, -0.03, 0.25, 0.01, 0.09])
    }

    fn sample_kinematics(t: Real, u: FourVelocity) -> Kinematics {
        Kinematics::compute(&KinematicInput {
            t,
            dt: 0.05,
            u,
            u_prev: FourVelocity::new(u.ut, 0.9 * u.ux, 1.1 * u.uy, u.un),
            grad: VelocityGradient {
                dx: FourVelocity::new(0.02, 0.05, -0.01, 0.003),
                dy: FourVelocity::new(-0.01, 0.02, 0.04, 0.0),
                deta: FourVelocity::new(0.0, 0.01, 0.0, 0.06),
            },
        })
    }

    #[cfg(not(feature = "single-precision"))]
    const GOLDEN_TOL: Real = 1e-12;
    #[cfg(feature = "single-precision")]
    const GOLDEN_TOL: Real = 1e-3;

    /// Generic expanding, rotating cell with every π component populated.
    fn generic_cell() -> (Real, FourVelocity, Kinematics, SymmetricTensor) {
        let t = 0.75;
        let u = FourVelocity::from_spatial(0.3, -0.2, 0.15, t);
        let k = Kinematics::compute(&KinematicInput {
            t,
            dt: 0.05,
            u,
            u_prev: FourVelocity::from_spatial(0.28, -0.19, 0.16, 0.7),
            grad: VelocityGradient {
                dx: FourVelocity::new(0.04, 0.11, -0.03, 0.02),
                dy: FourVelocity::new(-0.02, 0.05, 0.09, -0.01),
                deta: FourVelocity::new(0.03, -0.06, 0.07, 0.12),
            },
        });
        let pi = SymmetricTensor::from_array([
            0.21, -0.07, 0.05, 0.03, 0.18, -0.04, 0.02, 0.12, -0.015, 0.09,
        ]);
        (t, u, k, pi)
    }

    #[test]
    fn test_generic_cell_coupling_values() {
        let (t, u, k, pi) = generic_cell();
        let coupling = Coupling::compute(&pi, -0.35, &u, &k, t, &COEFFS);

        let expected = [
            0.7389118177270708,
            -0.18642197936868574,
            0.10841398411671832,
            -0.09946332140753744,
            0.5251896770096272,
            -0.023523850474515797,
            0.0782482844298752,
            0.46762705548461003,
            -0.06849699060102632,
            -0.2731633480877411,
        ];
        for (comp, want) in ShearComponent::ALL.into_iter().zip(expected) {
            assert_relative_eq!(coupling.total[comp], want, max_relative = GOLDEN_TOL);
        }
        assert_relative_eq!(coupling.ps, 0.130124677657514, max_relative = GOLDEN_TOL);
    }

    #[test]
    fn test_ps_independent_recomputation() {
        let t = 1.4;
        let u = FourVelocity::from_spatial(0.2, 0.15, 0.05, t);
        let k = sample_kinematics(t, u);
        let pi = sample_pi();
        let coupling = Coupling::compute(&pi, 0.01, &u, &k, t, &COEFFS);

        // Σ g_μα g_νβ π^{μν} σ^{αβ} over all sixteen pairs
        let g = [1.0, -1.0, -1.0, -t * t];
        let mut ps = 0.0;
        for mu in 0..4 {
            for nu in 0..4 {
                let c = ShearComponent::from_indices(mu, nu);
                ps += g[mu] * g[nu] * pi[c] * k.sigma[c];
            }
        }
        assert!((coupling.ps - ps).abs() <= 1e-12 * ps.abs().max(1.0));
        assert_eq!(coupling.ps, shear_contraction(&pi, &k.sigma, t));
    }

    #[test]
    fn test_zero_shear_stress_only_bulk_couples() {
        let t = 0.9;
        let u = FourVelocity::from_spatial(0.1, 0.0, 0.02, t);
        let k = sample_kinematics(t, u);
        let bulk = -0.02;
        let c = Coupling::compute(&SymmetricTensor::zero(), bulk, &u, &k, t, &COEFFS);
        assert_eq!(c.ps, 0.0);
        for comp in ShearComponent::ALL {
            let expected = -COEFFS.lambda_pibulk * bulk * k.sigma[comp];
            assert!((c.total[comp] - expected).abs() < 1e-15, "{}", comp.name());
        }
    }

    #[test]
    fn test_frame_and_rotation_vanish_without_gradients() {
        let t = 1.0;
        let u = FourVelocity::from_spatial(0.3, -0.2, 0.0, t);
        let k = Kinematics::compute(&KinematicInput {
            t,
            dt: 0.1,
            u,
            u_prev: u,
            grad: VelocityGradient::zero(),
        });
        let pi = sample_pi();
        assert_eq!(frame_coupling(&pi, &u, &k).max_abs(), 0.0);
        assert_eq!(rotation_coupling(&pi, &k, t).max_abs(), 0.0);
    }

    #[test]
    fn test_shear_coupling_diagonal_at_rest() {
        let t = 1.0;
        let u = FourVelocity::at_rest();
        let pi = SymmetricTensor {
            xx: 0.2,
            yy: -0.1,
            nn: -0.1,
            ..SymmetricTensor::zero()
        };
        let sigma = SymmetricTensor {
            xx: 1.0,
            yy: 1.0,
            nn: -2.0,
            ..SymmetricTensor::zero()
        };
        let ps = shear_contraction(&pi, &sigma, t);
        assert!((ps - 0.3).abs() < 1e-15);
        let i4 = shear_coupling(&pi, &sigma, &u, ps, t);
        assert_eq!(i4.tt, 0.0);
        assert_eq!(i4.xy, 0.0);
        assert_eq!(i4.tx, 0.0);
        // xx: -π^xx σ^xx + ps/3
        assert!((i4.xx - (-0.2 + 0.1)).abs() < 1e-15);
    }
}

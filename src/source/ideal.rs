//! Ideal-fluid part of the energy–momentum source.
//!
//! In Milne coordinates the conservation law ∇_μ T^{μν} = 0 written for
//! T^{τν} picks up Christoffel terms:
//!
//! - S^τ = -(T^ττ/τ + τ T^ηη) + ∂_k v^k (π^ττ - p - Π) - v^k ∂_k p
//! - S^x = -T^τx/τ - ∂_x p + ∂_k v^k π^τx
//! - S^y = -T^τy/τ - ∂_y p + ∂_k v^k π^τy
//! - S^η = -3 T^τη/τ - ∂_η p / τ² + ∂_k v^k π^τη
//!
//! With [`CoordinateSystem::Cartesian`] the 1/τ curvature terms are dropped
//! and ∂_η p enters without the τ² metric factor.

use crate::equations::EquationOfState;
use crate::physics::{CoordinateSystem, N_ENERGY_MOMENTUM};
use crate::types::Real;

use super::traits::{SourceContext, SourceTerm};

/// Energy–momentum source of a (possibly viscous) fluid.
///
/// Only the ideal-fluid pressure gradients and geometric terms live here;
/// the viscous stress enters through π^{τμ}, Π and the ∂_k v^k terms.
#[derive(Clone, Copy, Debug)]
pub struct IdealSource<'a, E: EquationOfState> {
    eos: &'a E,
    coordinates: CoordinateSystem,
}

impl<'a, E: EquationOfState> IdealSource<'a, E> {
    /// Source in the given coordinate system.
    pub fn new(eos: &'a E, coordinates: CoordinateSystem) -> Self {
        Self { eos, coordinates }
    }

    /// Milne-coordinate source.
    pub fn milne(eos: &'a E) -> Self {
        Self::new(eos, CoordinateSystem::Milne)
    }

    /// Coordinate system this source was built for.
    pub fn coordinates(&self) -> CoordinateSystem {
        self.coordinates
    }

    /// Evaluate the four components directly.
    #[inline]
    pub fn compute(&self, ctx: &SourceContext) -> [Real; N_ENERGY_MOMENTUM] {
        let t = ctx.time;
        let p = ctx.pressure;
        let pi = &ctx.dissipative.pi;
        let bulk = ctx.dissipative.bulk;
        let dkvk = ctx.dkvk;
        let (vx, vy, vn) = ctx.coordinate_velocity();
        let dxp = ctx.pressure_gradient.x;
        let dyp = ctx.pressure_gradient.y;
        let dnp = ctx.pressure_gradient.eta;

        match self.coordinates {
            CoordinateSystem::Milne => {
                let tm = &ctx.energy_momentum;
                let tnn = self
                    .eos
                    .tnn(ctx.energy_density, p + bulk, ctx.velocity.un, pi.nn, t);
                [
                    -(tm.ttt / t + t * tnn) + dkvk * (pi.tt - p - bulk) - vx * dxp - vy * dyp - vn * dnp,
                    -tm.ttx / t - dxp + dkvk * pi.tx,
                    -tm.tty / t - dyp + dkvk * pi.ty,
                    -3.0 * tm.ttn / t - dnp / (t * t) + dkvk * pi.tn,
                ]
            }
            CoordinateSystem::Cartesian => [
                dkvk * (pi.tt - p - bulk) - vx * dxp - vy * dyp - vn * dnp,
                -dxp + dkvk * pi.tx,
                -dyp + dkvk * pi.ty,
                -dnp + dkvk * pi.tn,
            ],
        }
    }
}

impl<E: EquationOfState> SourceTerm for IdealSource<'_, E> {
    fn evaluate(&self, ctx: &SourceContext, out: &mut [Real]) {
        out.copy_from_slice(&self.compute(ctx));
    }

    fn n_components(&self) -> usize {
        N_ENERGY_MOMENTUM
    }

    fn name(&self) -> &'static str {
        match self.coordinates {
            CoordinateSystem::Milne => "ideal_milne",
            CoordinateSystem::Cartesian => "ideal_cartesian",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::ConformalEos;
    use crate::solver::state::{DissipativeState, FourVelocity};
    use crate::types::PerAxis;
    use approx::assert_relative_eq;

    const TOL: Real = 1e-12;

    fn context(t: Real, e: Real, u: FourVelocity) -> SourceContext {
        SourceContext::homogeneous(t, 0.01, e, e / 3.0, u, DissipativeState::default())
    }

    #[test]
    fn test_bjorken_fluid_at_rest() {
        let eos = ConformalEos::new();
        let source = IdealSource::milne(&eos);
        let (t, e) = (0.6, 30.0);
        let s = source.compute(&context(t, e, FourVelocity::at_rest()));
        let p = e / 3.0;
        assert_relative_eq!(s[0], -(e + p) / t, max_relative = 1e-14);
        assert_eq!(&s[1..], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_boosted_homogeneous_fluid() {
        let eos = ConformalEos::new();
        let source = IdealSource::milne(&eos);
        let t = 1.2;
        let e = 12.0;
        let u = FourVelocity::from_spatial(0.4, -0.2, 0.0, t);
        let ctx = context(t, e, u);
        let s = source.compute(&ctx);
        let tm = ctx.energy_momentum;
        let p = ctx.pressure;
        assert_relative_eq!(s[0], -(tm.ttt / t + p / t), max_relative = 1e-14);
        assert_relative_eq!(s[1], -tm.ttx / t, max_relative = 1e-14);
        assert_relative_eq!(s[2], -tm.tty / t, max_relative = 1e-14);
        assert_eq!(s[3], 0.0);
    }

    #[test]
    fn test_cartesian_drops_curvature_terms() {
        let eos = ConformalEos::new();
        let source = IdealSource::new(&eos, CoordinateSystem::Cartesian);
        let u = FourVelocity::from_spatial(0.4, -0.2, 0.1, 1.0);
        let s = source.compute(&context(1.0, 5.0, u));
        assert!(s.iter().all(|v| v.abs() < TOL));
        assert_eq!(source.name(), "ideal_cartesian");
    }

    #[test]
    fn test_pressure_gradient_drives_momentum() {
        let eos = ConformalEos::new();
        let t = 2.0;
        let mut ctx = context(t, 5.0, FourVelocity::at_rest());
        ctx.pressure_gradient = PerAxis::new(0.5, -0.25, 4.0);

        let milne = IdealSource::milne(&eos).compute(&ctx);
        let base = IdealSource::milne(&eos).compute(&context(t, 5.0, FourVelocity::at_rest()));
        assert_eq!(milne[0], base[0]);
        assert_eq!(milne[1], -0.5);
        assert_eq!(milne[2], 0.25);
        assert_eq!(milne[3], -4.0 / (t * t));

        let flat = IdealSource::new(&eos, CoordinateSystem::Cartesian).compute(&ctx);
        assert_eq!(flat[3], -4.0);
    }

    #[test]
    fn test_evaluate_matches_compute() {
        let eos = ConformalEos::new();
        let source = IdealSource::milne(&eos);
        let ctx = context(0.8, 9.0, FourVelocity::from_spatial(0.1, 0.2, 0.05, 0.8));
        let mut out = [0.0; N_ENERGY_MOMENTUM];
        source.evaluate(&ctx, &mut out);
        assert_eq!(out, source.compute(&ctx));
        assert_eq!(source.n_components(), 4);
        assert!(!source.is_stiff());
    }
}

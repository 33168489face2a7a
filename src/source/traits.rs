//! Source-term abstraction for the hydrodynamic equations.
//!
//! The equations of motion are written as
//!
//! ∂_τ Q = -∂_i F^i(Q) + S(Q, ∂Q, τ)
//!
//! where the flux part is owned by the external scheme and the local part
//! S is assembled here from independent [`SourceTerm`]s evaluated on a
//! [`SourceContext`].

use crate::operators::VelocityGradient;
use crate::solver::state::{DissipativeState, EnergyMomentum, FourVelocity};
use crate::types::{PerAxis, Real};

/// Per-cell inputs of a source-term evaluation.
///
/// Every field is already reduced to cell-local scalars: neighbour access
/// happens while building the context, not inside a source term.
#[derive(Clone, Copy, Debug)]
pub struct SourceContext {
    /// Proper time τ
    pub time: Real,
    /// Time step used by the backward velocity derivative
    pub dt: Real,
    /// Energy density
    pub energy_density: Real,
    /// Equilibrium pressure
    pub pressure: Real,
    /// Four-velocity at the current stage
    pub velocity: FourVelocity,
    /// Four-velocity at the previous time step
    pub previous_velocity: FourVelocity,
    /// Centered spatial derivatives of u^μ
    pub velocity_gradient: VelocityGradient,
    /// Centered spatial derivatives of the pressure
    pub pressure_gradient: PerAxis<Real>,
    /// ∂_i v^i of the coordinate velocity
    pub dkvk: Real,
    /// T^{τμ} from the packed state
    pub energy_momentum: EnergyMomentum,
    /// π^{μν} and Π from the packed state (zero when not evolved)
    pub dissipative: DissipativeState,
}

impl SourceContext {
    /// Context of a homogeneous cell: no gradients, no history.
    ///
    /// T^{τμ} is the perfect-fluid value; the dissipative currents are not
    /// folded into it.
    pub fn homogeneous(
        time: Real,
        dt: Real,
        energy_density: Real,
        pressure: Real,
        velocity: FourVelocity,
        dissipative: DissipativeState,
    ) -> Self {
        Self {
            time,
            dt,
            energy_density,
            pressure,
            velocity,
            previous_velocity: velocity,
            velocity_gradient: VelocityGradient::zero(),
            pressure_gradient: PerAxis::uniform(0.0),
            dkvk: 0.0,
            energy_momentum: EnergyMomentum::perfect_fluid(energy_density, pressure, velocity),
            dissipative,
        }
    }

    /// Coordinate velocity v^i = u^i / u^τ as (v^x, v^y, v^η).
    #[inline]
    pub fn coordinate_velocity(&self) -> (Real, Real, Real) {
        let u = &self.velocity;
        (u.ux / u.ut, u.uy / u.ut, u.un / u.ut)
    }
}

/// A local contribution to the right-hand side.
///
/// Implementations must be thread-safe (`Send + Sync`) so one instance can
/// be shared by every worker of a parallel sweep.
pub trait SourceTerm: Send + Sync {
    /// Write this term's components into `out`.
    ///
    /// `out` has exactly [`SourceTerm::n_components`] entries.
    fn evaluate(&self, ctx: &SourceContext, out: &mut [Real]);

    /// Number of components written by [`SourceTerm::evaluate`].
    fn n_components(&self) -> usize;

    /// Name of this source term for debugging and logging.
    fn name(&self) -> &'static str;

    /// Whether this term relaxes on a time scale that may require implicit
    /// or semi-implicit integration.
    fn is_stiff(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantSource {
        value: Real,
        n: usize,
    }

    impl SourceTerm for ConstantSource {
        fn evaluate(&self, _ctx: &SourceContext, out: &mut [Real]) {
            out.fill(self.value);
        }

        fn n_components(&self) -> usize {
            self.n
        }

        fn name(&self) -> &'static str {
            "constant"
        }
    }

    fn make_test_context() -> SourceContext {
        SourceContext::homogeneous(
            1.0,
            0.01,
            10.0,
            10.0 / 3.0,
            FourVelocity::from_spatial(0.3, 0.0, 0.0, 1.0),
            DissipativeState::default(),
        )
    }

    #[test]
    fn test_trait_object_evaluation() {
        let source = ConstantSource { value: 2.5, n: 3 };
        let dyn_source: &dyn SourceTerm = &source;
        let mut out = vec![0.0; dyn_source.n_components()];
        dyn_source.evaluate(&make_test_context(), &mut out);
        assert_eq!(out, vec![2.5; 3]);
        assert_eq!(dyn_source.name(), "constant");
        assert!(!dyn_source.is_stiff());
    }

    #[test]
    fn test_coordinate_velocity() {
        let ctx = make_test_context();
        let (vx, vy, vn) = ctx.coordinate_velocity();
        assert!((vx - 0.3 / ctx.velocity.ut).abs() < 1e-15);
        assert_eq!(vy, 0.0);
        assert_eq!(vn, 0.0);
    }

    #[test]
    fn test_homogeneous_context_is_perfect_fluid() {
        let ctx = make_test_context();
        let u = ctx.velocity;
        let w = ctx.energy_density + ctx.pressure;
        assert_eq!(ctx.energy_momentum.ttx, w * u.ut * u.ux);
        assert_eq!(ctx.previous_velocity, u);
        assert_eq!(ctx.dkvk, 0.0);
    }
}

//! Viscous part of the source: relaxation of π^{μν} and Π.
//!
//! Per cell:
//! 1. transport coefficients from the local temperature
//! 2. kinematics (θ, σ^{μν}, ω^{μν}, D u_μ) from the velocity gradient
//! 3. coupling terms I^{μν} and the invariant π^{μν}σ_{μν}
//! 4. relaxation right-hand sides, converted to ∂_τ of the conserved currents
//!
//! - [`coupling`]: I₁…I₄ and their combination
//! - [`relaxation`]: shear and bulk relaxation equations

pub mod coupling;
pub mod relaxation;

pub use coupling::{Coupling, CouplingCoefficients, shear_contraction};
pub use relaxation::{bulk_relaxation, shear_relaxation, to_coordinate_time};

use crate::equations::{EquationOfState, TransportCoefficients};
use crate::operators::{KinematicInput, Kinematics};
use crate::physics::{N_ENERGY_MOMENTUM, ShearComponent, StateLayout};
use crate::solver::state::SymmetricTensor;
use crate::types::Real;

use super::traits::{SourceContext, SourceTerm};

/// Source of the dissipative currents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DissipativeRhs {
    /// ∂_τ π^{μν}
    pub shear: SymmetricTensor,
    /// ∂_τ Π
    pub bulk: Real,
}

/// Second-order viscous relaxation source.
///
/// Writes the enabled currents of `layout` in storage order: ten shear
/// components, then Π.
#[derive(Clone, Copy, Debug)]
pub struct DissipativeSource<'a, E: EquationOfState> {
    eos: &'a E,
    transport: &'a TransportCoefficients,
    layout: StateLayout,
}

impl<'a, E: EquationOfState> DissipativeSource<'a, E> {
    /// Source for the currents present in `layout`.
    pub fn new(eos: &'a E, transport: &'a TransportCoefficients, layout: StateLayout) -> Self {
        Self {
            eos,
            transport,
            layout,
        }
    }

    /// Layout this source writes.
    pub fn layout(&self) -> StateLayout {
        self.layout
    }

    /// Kinematic decomposition at the cell described by `ctx`.
    #[inline]
    pub fn kinematics(ctx: &SourceContext) -> Kinematics {
        Kinematics::compute(&KinematicInput {
            t: ctx.time,
            dt: ctx.dt,
            u: ctx.velocity,
            u_prev: ctx.previous_velocity,
            grad: ctx.velocity_gradient,
        })
    }

    /// Sources of both currents, whether or not they are evolved.
    pub fn compute(&self, ctx: &SourceContext) -> DissipativeRhs {
        let t = ctx.time;
        let e = ctx.energy_density;
        let p = ctx.pressure;
        let u = &ctx.velocity;
        let ut = u.ut;
        let dkvk = ctx.dkvk;
        let pi = &ctx.dissipative.pi;
        let bulk = ctx.dissipative.bulk;
        debug_assert!(e > 0.0, "energy density must be positive, got {}", e);
        debug_assert!(ut != 0.0, "u^τ must be non-zero");

        let temperature = self.eos.effective_temperature(e);
        let shear_transport = self.transport.shear(temperature, e, p);

        let k = Self::kinematics(ctx);
        let coupling = Coupling::compute(
            pi,
            bulk,
            u,
            &k,
            t,
            &CouplingCoefficients {
                delta_pipi: self.transport.delta_pipi,
                tau_pipi: self.transport.tau_pipi,
                lambda_pibulk: self.transport.lambda_pibulk,
            },
        );

        let dpi = shear_relaxation(pi, &k.sigma, &coupling.total, &shear_transport, u, t);
        let shear = SymmetricTensor::from_fn(|c| to_coordinate_time(dpi[c], pi[c], ut, dkvk));

        let bulk_rhs = if self.layout.has_bulk() {
            let cs2 = self.eos.speed_of_sound_squared(e);
            let bulk_transport = self.transport.bulk(temperature, e, p, cs2);
            let dbulk = bulk_relaxation(bulk, k.theta, coupling.ps, &bulk_transport, self.transport.delta_bulk);
            to_coordinate_time(dbulk, bulk, ut, dkvk)
        } else {
            0.0
        };

        DissipativeRhs {
            shear,
            bulk: bulk_rhs,
        }
    }
}

impl<E: EquationOfState> SourceTerm for DissipativeSource<'_, E> {
    fn evaluate(&self, ctx: &SourceContext, out: &mut [Real]) {
        debug_assert_eq!(out.len(), self.n_components());
        let rhs = self.compute(ctx);
        for c in ShearComponent::ALL {
            if let Some(i) = self.layout.shear_offset(c) {
                out[i - N_ENERGY_MOMENTUM] = rhs.shear[c];
            }
        }
        if let Some(i) = self.layout.bulk_offset() {
            out[i - N_ENERGY_MOMENTUM] = rhs.bulk;
        }
    }

    fn n_components(&self) -> usize {
        self.layout.n_dissipative()
    }

    fn name(&self) -> &'static str {
        "dissipative_relaxation"
    }

    fn is_stiff(&self) -> bool {
        true
    }
}

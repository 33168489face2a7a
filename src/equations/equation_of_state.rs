//! Equation of state for the QCD fluid.
//!
//! The source kernels need three thermodynamic maps of the energy density
//! e (fm⁻⁴): the effective temperature T(e) (fm⁻¹), the squared speed of
//! sound c_s²(e) and the equilibrium pressure p(e). They also need the
//! ηη-component of the energy–momentum tensor, which depends only on the
//! metric and is therefore provided by the trait.
//!
//! # Conformal gas
//!
//! [`ConformalEos`] is the massless gas with p = e/3 and
//! e = (π²/30)·g·T⁴, where the degeneracy of gluons plus three light quark
//! flavours gives the prefactor [`CONFORMAL_EOS_FACTOR`].

use crate::types::Real;

/// e/T⁴ for a massless gas of gluons and three quark flavours.
pub const CONFORMAL_EOS_FACTOR: Real = 15.6269980754;

/// Thermodynamic collaborator of the source kernels.
///
/// Implementations must be monotonic and defined over the full range of
/// energy densities reached by the simulation.
pub trait EquationOfState: Send + Sync {
    /// Effective temperature T(e).
    fn effective_temperature(&self, e: Real) -> Real;

    /// Squared speed of sound c_s²(e).
    fn speed_of_sound_squared(&self, e: Real) -> Real;

    /// Equilibrium pressure p(e).
    fn equilibrium_pressure(&self, e: Real) -> Real;

    /// T^{ηη} = (e + p) (u^η)² + p/τ² + π^{ηη}.
    ///
    /// `p` is the effective pressure, i.e. equilibrium plus bulk pressure.
    #[inline]
    fn tnn(&self, e: Real, p: Real, un: Real, pinn: Real, t: Real) -> Real {
        (e + p) * un * un + p / t / t + pinn
    }

    /// Name of this equation of state for logging.
    fn name(&self) -> &'static str;
}

/// Conformal (massless) equation of state.
///
/// # Example
///
/// ```
/// use vh_rs::equations::{ConformalEos, EquationOfState};
///
/// let eos = ConformalEos::new();
/// let e = 30.0;
/// assert!((eos.equilibrium_pressure(e) - 10.0).abs() < 1e-12);
/// assert!((eos.speed_of_sound_squared(e) - 1.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConformalEos {
    /// e/T⁴
    pub factor: Real,
}

impl Default for ConformalEos {
    fn default() -> Self {
        Self::new()
    }
}

impl ConformalEos {
    /// Gluons plus three light quark flavours.
    pub fn new() -> Self {
        Self {
            factor: CONFORMAL_EOS_FACTOR,
        }
    }

    /// Custom degeneracy prefactor e/T⁴.
    pub fn with_factor(factor: Real) -> Self {
        debug_assert!(factor > 0.0, "EOS factor must be positive, got {}", factor);
        Self { factor }
    }

    /// Energy density at temperature `t` (inverse of [`effective_temperature`]).
    ///
    /// [`effective_temperature`]: EquationOfState::effective_temperature
    pub fn energy_density(&self, t: Real) -> Real {
        self.factor * t * t * t * t
    }
}

impl EquationOfState for ConformalEos {
    #[inline]
    fn effective_temperature(&self, e: Real) -> Real {
        (e / self.factor).powf(0.25)
    }

    #[inline]
    fn speed_of_sound_squared(&self, _e: Real) -> Real {
        1.0 / 3.0
    }

    #[inline]
    fn equilibrium_pressure(&self, e: Real) -> Real {
        e / 3.0
    }

    fn name(&self) -> &'static str {
        "conformal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_temperature_roundtrip() {
        let eos = ConformalEos::new();
        for t in [0.2, 0.5, 1.0, 2.5] {
            let e = eos.energy_density(t);
            assert_relative_eq!(eos.effective_temperature(e), t, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_temperature_monotonic() {
        let eos = ConformalEos::new();
        let mut last = 0.0;
        for i in 1..100 {
            let t = eos.effective_temperature(i as Real * 0.5);
            assert!(t > last);
            last = t;
        }
    }

    #[test]
    fn test_tnn_at_rest() {
        let eos = ConformalEos::new();
        // Fluid at rest, no shear: T^ηη = p / τ²
        let tnn = eos.tnn(3.0, 1.0, 0.0, 0.0, 2.0);
        assert_relative_eq!(tnn, 0.25, max_relative = 1e-14);
    }

    #[test]
    fn test_tnn_moving() {
        let eos = ConformalEos::new();
        let tnn = eos.tnn(3.0, 1.0, 0.5, 0.1, 1.0);
        assert_relative_eq!(tnn, 4.0 * 0.25 + 1.0 + 0.1, max_relative = 1e-14);
    }
}

//! Second-order transport coefficients.
//!
//! Relaxation rates and couplings of the 14-moment closure for a fluid
//! with shear viscosity η/s = const and a temperature-dependent bulk
//! viscosity ζ/s(T). All fixed constants live in the immutable
//! [`TransportCoefficients`] value object; the rates are closed-form
//! functions of T, e, p and c_s².
//!
//! # Shear
//!
//! - 1/τ_π = T / (5 η/s)
//! - β_π = (e + p) / 5
//!
//! # Bulk
//!
//! With a = 1/3 - c_s²:
//!
//! - 1/τ_Π = 15 a² T / (ζ/s)
//! - β_Π = 15 a² (e + p)
//! - λ_Ππ = 8a / 5

use crate::types::Real;

/// Three-regime parameterization of ζ/s(T).
///
/// With x = T / `temperature_scale`:
///
/// - x > `upper_threshold`: λ₁ e^{-(x-1)/σ₁} + λ₂ e^{-(x-1)/σ₂} + `high_offset`
/// - x < `lower_threshold`: λ₃ e^{(x-1)/σ₃} + λ₄ e^{(x-1)/σ₄} + `low_offset`
/// - otherwise: A₁ x² + A₂ x - A₃
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulkViscosityFit {
    pub a1: Real,
    pub a2: Real,
    pub a3: Real,
    pub lambda1: Real,
    pub lambda2: Real,
    pub lambda3: Real,
    pub lambda4: Real,
    pub sigma1: Real,
    pub sigma2: Real,
    pub sigma3: Real,
    pub sigma4: Real,
    /// Temperature at which x = 1
    pub temperature_scale: Real,
    /// Start of the high-temperature regime in x
    pub upper_threshold: Real,
    /// End of the low-temperature regime in x
    pub lower_threshold: Real,
    /// Constant floor above the peak
    pub high_offset: Real,
    /// Constant floor below the peak
    pub low_offset: Real,
}

impl Default for BulkViscosityFit {
    fn default() -> Self {
        Self {
            a1: -13.77,
            a2: 27.55,
            a3: 13.45,
            lambda1: 0.9,
            lambda2: 0.25,
            lambda3: 0.9,
            lambda4: 0.22,
            sigma1: 0.025,
            sigma2: 0.13,
            sigma3: 0.0025,
            sigma4: 0.022,
            temperature_scale: 1.01355,
            upper_threshold: 1.05,
            lower_threshold: 0.995,
            high_offset: 0.001,
            low_offset: 0.03,
        }
    }
}

impl BulkViscosityFit {
    /// ζ/s at temperature `t`.
    ///
    /// Strictly positive for every non-negative temperature with the
    /// default constants.
    #[inline]
    pub fn evaluate(&self, t: Real) -> Real {
        let x = t / self.temperature_scale;
        if x > self.upper_threshold {
            self.lambda1 * (-(x - 1.0) / self.sigma1).exp()
                + self.lambda2 * (-(x - 1.0) / self.sigma2).exp()
                + self.high_offset
        } else if x < self.lower_threshold {
            self.lambda3 * ((x - 1.0) / self.sigma3).exp()
                + self.lambda4 * ((x - 1.0) / self.sigma4).exp()
                + self.low_offset
        } else {
            self.a1 * x * x + self.a2 * x - self.a3
        }
    }
}

/// Fixed second-order transport constants.
///
/// # Example
///
/// ```
/// use vh_rs::equations::TransportCoefficients;
///
/// let coeffs = TransportCoefficients::default().with_eta_over_s(0.08);
/// assert_eq!(coeffs.eta_over_s, 0.08);
/// assert_eq!(coeffs.delta_pipi, 1.33333);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransportCoefficients {
    /// Shear viscosity to entropy density ratio η/s
    pub eta_over_s: Real,
    /// δ_ππ: expansion coupling of π
    pub delta_pipi: Real,
    /// τ_ππ: shear-shear coupling of π
    pub tau_pipi: Real,
    /// λ_πΠ: bulk-shear coupling of π
    pub lambda_pibulk: Real,
    /// δ_ΠΠ: expansion coupling of Π
    pub delta_bulk: Real,
    /// ζ/s(T) parameterization
    pub bulk_fit: BulkViscosityFit,
}

impl Default for TransportCoefficients {
    fn default() -> Self {
        Self {
            eta_over_s: 0.2,
            delta_pipi: 1.33333,
            tau_pipi: 1.42857,
            lambda_pibulk: 1.2,
            delta_bulk: 0.666667,
            bulk_fit: BulkViscosityFit::default(),
        }
    }
}

/// Shear relaxation coefficients at a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShearTransport {
    /// 1/τ_π
    pub relaxation_rate: Real,
    /// β_π
    pub beta: Real,
}

/// Bulk relaxation coefficients at a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulkTransport {
    /// 1/τ_Π
    pub relaxation_rate: Real,
    /// β_Π
    pub beta: Real,
    /// λ_Ππ
    pub lambda_shear: Real,
}

impl TransportCoefficients {
    /// Set η/s.
    pub fn with_eta_over_s(mut self, eta_over_s: Real) -> Self {
        self.eta_over_s = eta_over_s;
        self
    }

    /// Replace the ζ/s(T) parameterization.
    pub fn with_bulk_fit(mut self, bulk_fit: BulkViscosityFit) -> Self {
        self.bulk_fit = bulk_fit;
        self
    }

    /// ζ/s at temperature `t`.
    #[inline]
    pub fn bulk_viscosity_to_entropy_density(&self, t: Real) -> Real {
        self.bulk_fit.evaluate(t)
    }

    /// Shear coefficients at temperature `t`, energy density `e`, pressure `p`.
    #[inline]
    pub fn shear(&self, t: Real, e: Real, p: Real) -> ShearTransport {
        debug_assert!(t > 0.0, "temperature must be positive, got {}", t);
        ShearTransport {
            relaxation_rate: t / 5.0 / self.eta_over_s,
            beta: (e + p) / 5.0,
        }
    }

    /// Bulk coefficients at temperature `t`, energy density `e`, pressure
    /// `p` and squared speed of sound `cs2`.
    #[inline]
    pub fn bulk(&self, t: Real, e: Real, p: Real, cs2: Real) -> BulkTransport {
        let a = 1.0 / 3.0 - cs2;
        let a2 = a * a;
        let zetabar = self.bulk_viscosity_to_entropy_density(t);
        debug_assert!(zetabar > 0.0, "ζ/s must be positive, got {}", zetabar);
        BulkTransport {
            relaxation_rate: 15.0 * a2 * t / zetabar,
            beta: 15.0 * a2 * (e + p),
            lambda_shear: 8.0 * a / 5.0,
        }
    }
}

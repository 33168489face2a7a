//! Physics selection for the source-term kernels.

use super::layout::StateLayout;

/// Metric of the coordinate system used for the ideal-fluid source terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinateSystem {
    /// Milne coordinates (τ, x, y, η_s) with curvature source terms.
    #[default]
    Milne,
    /// Flat metric: the curvature source terms are dropped.
    Cartesian,
}

/// Which dissipative currents are evolved, and in which metric.
///
/// With neither shear nor bulk enabled the system is ideal: the source
/// vector has only the four energy–momentum components.
///
/// # Example
///
/// ```
/// use vh_rs::physics::{CoordinateSystem, PhysicsConfig};
///
/// let physics = PhysicsConfig::viscous().with_coordinates(CoordinateSystem::Cartesian);
/// assert_eq!(physics.layout().n_conserved(), 15);
///
/// assert!(PhysicsConfig::ideal().is_ideal());
/// assert_eq!(PhysicsConfig::ideal().layout().n_conserved(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhysicsConfig {
    /// Evolve the shear stress tensor π^{μν}
    pub shear: bool,
    /// Evolve the bulk viscous pressure Π
    pub bulk: bool,
    /// Metric used for the ideal-fluid source terms
    pub coordinates: CoordinateSystem,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self::viscous()
    }
}

impl PhysicsConfig {
    /// Shear and bulk viscosity in Milne coordinates.
    pub fn viscous() -> Self {
        Self {
            shear: true,
            bulk: true,
            coordinates: CoordinateSystem::Milne,
        }
    }

    /// Ideal fluid: no dissipative currents.
    pub fn ideal() -> Self {
        Self {
            shear: false,
            bulk: false,
            coordinates: CoordinateSystem::Milne,
        }
    }

    /// Shear viscosity only.
    pub fn shear_only() -> Self {
        Self {
            shear: true,
            bulk: false,
            coordinates: CoordinateSystem::Milne,
        }
    }

    /// Bulk viscosity only.
    pub fn bulk_only() -> Self {
        Self {
            shear: false,
            bulk: true,
            coordinates: CoordinateSystem::Milne,
        }
    }

    /// Enable or disable shear stress evolution.
    pub fn with_shear(mut self, enable: bool) -> Self {
        self.shear = enable;
        self
    }

    /// Enable or disable bulk pressure evolution.
    pub fn with_bulk(mut self, enable: bool) -> Self {
        self.bulk = enable;
        self
    }

    /// Select the metric of the ideal-fluid source terms.
    pub fn with_coordinates(mut self, coordinates: CoordinateSystem) -> Self {
        self.coordinates = coordinates;
        self
    }

    /// True when no dissipative current is evolved.
    #[inline]
    pub fn is_ideal(&self) -> bool {
        !self.shear && !self.bulk
    }

    /// Packed layout of the conserved and source vectors.
    #[inline]
    pub fn layout(&self) -> StateLayout {
        StateLayout::new(self.shear, self.bulk)
    }
}

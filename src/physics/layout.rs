//! Packed layout of the conserved-variable vector `Q` and source vector `S`.
//!
//! Both vectors share one layout:
//!
//! ```text
//! [ T^ττ T^τx T^τy T^τη | π^ττ π^τx π^τy π^τη π^xx π^xy π^xη π^yy π^yη π^ηη | Π ]
//!   energy-momentum       shear (optional)                                  bulk (optional)
//! ```
//!
//! Every offset used by the kernels and stencil loaders is derived here.

/// Number of energy–momentum components at the head of `Q`.
pub const N_ENERGY_MOMENTUM: usize = 4;

/// Number of independent components of the symmetric shear tensor.
pub const N_SHEAR_COMPONENTS: usize = 10;

/// Cells per variable in a directional stencil window (centre at offset 2).
pub const STENCIL_WIDTH: usize = 5;

/// Independent component of a symmetric rank-2 tensor, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShearComponent {
    Tt,
    Tx,
    Ty,
    Tn,
    Xx,
    Xy,
    Xn,
    Yy,
    Yn,
    Nn,
}

impl ShearComponent {
    /// All components in storage order.
    pub const ALL: [ShearComponent; N_SHEAR_COMPONENTS] = [
        ShearComponent::Tt,
        ShearComponent::Tx,
        ShearComponent::Ty,
        ShearComponent::Tn,
        ShearComponent::Xx,
        ShearComponent::Xy,
        ShearComponent::Xn,
        ShearComponent::Yy,
        ShearComponent::Yn,
        ShearComponent::Nn,
    ];

    /// Position within the ten shear slots.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Component for the spacetime index pair (μ, ν), with 0 = τ, 1 = x,
    /// 2 = y, 3 = η_s. Symmetric in its arguments.
    ///
    /// # Panics
    ///
    /// Panics if either index is above 3.
    pub const fn from_indices(mu: usize, nu: usize) -> Self {
        let (a, b) = if mu <= nu { (mu, nu) } else { (nu, mu) };
        match (a, b) {
            (0, 0) => ShearComponent::Tt,
            (0, 1) => ShearComponent::Tx,
            (0, 2) => ShearComponent::Ty,
            (0, 3) => ShearComponent::Tn,
            (1, 1) => ShearComponent::Xx,
            (1, 2) => ShearComponent::Xy,
            (1, 3) => ShearComponent::Xn,
            (2, 2) => ShearComponent::Yy,
            (2, 3) => ShearComponent::Yn,
            (3, 3) => ShearComponent::Nn,
            _ => panic!("spacetime index out of range"),
        }
    }

    /// Spacetime index pair (μ ≤ ν) of this component.
    pub const fn indices(self) -> (usize, usize) {
        match self {
            ShearComponent::Tt => (0, 0),
            ShearComponent::Tx => (0, 1),
            ShearComponent::Ty => (0, 2),
            ShearComponent::Tn => (0, 3),
            ShearComponent::Xx => (1, 1),
            ShearComponent::Xy => (1, 2),
            ShearComponent::Xn => (1, 3),
            ShearComponent::Yy => (2, 2),
            ShearComponent::Yn => (2, 3),
            ShearComponent::Nn => (3, 3),
        }
    }

    /// Short name used in diagnostics ("pitt", "pixn", ...).
    pub const fn name(self) -> &'static str {
        match self {
            ShearComponent::Tt => "pitt",
            ShearComponent::Tx => "pitx",
            ShearComponent::Ty => "pity",
            ShearComponent::Tn => "pitn",
            ShearComponent::Xx => "pixx",
            ShearComponent::Xy => "pixy",
            ShearComponent::Xn => "pixn",
            ShearComponent::Yy => "piyy",
            ShearComponent::Yn => "piyn",
            ShearComponent::Nn => "pinn",
        }
    }
}

/// Offsets of every variable inside a packed `Q`/`S` vector.
///
/// # Example
///
/// ```
/// use vh_rs::physics::{ShearComponent, StateLayout};
///
/// let layout = StateLayout::new(true, true);
/// assert_eq!(layout.shear_offset(ShearComponent::Tt), Some(4));
/// assert_eq!(layout.bulk_offset(), Some(14));
///
/// let bulk_only = StateLayout::new(false, true);
/// assert_eq!(bulk_only.bulk_offset(), Some(4));
/// assert_eq!(bulk_only.n_conserved(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateLayout {
    shear: bool,
    bulk: bool,
}

impl StateLayout {
    /// Layout with the given optional currents present.
    pub const fn new(shear: bool, bulk: bool) -> Self {
        Self { shear, bulk }
    }

    /// Whether the ten shear slots are present.
    #[inline]
    pub const fn has_shear(&self) -> bool {
        self.shear
    }

    /// Whether the bulk slot is present.
    #[inline]
    pub const fn has_bulk(&self) -> bool {
        self.bulk
    }

    /// Number of dissipative slots after the energy–momentum block.
    #[inline]
    pub const fn n_dissipative(&self) -> usize {
        (if self.shear { N_SHEAR_COMPONENTS } else { 0 }) + (if self.bulk { 1 } else { 0 })
    }

    /// Total length of `Q` (and of `S`).
    #[inline]
    pub const fn n_conserved(&self) -> usize {
        N_ENERGY_MOMENTUM + self.n_dissipative()
    }

    /// Offset of a shear component, if shear is present.
    #[inline]
    pub const fn shear_offset(&self, component: ShearComponent) -> Option<usize> {
        if self.shear {
            Some(N_ENERGY_MOMENTUM + component.index())
        } else {
            None
        }
    }

    /// Offset of the bulk pressure, if bulk is present.
    #[inline]
    pub const fn bulk_offset(&self) -> Option<usize> {
        if !self.bulk {
            None
        } else if self.shear {
            Some(N_ENERGY_MOMENTUM + N_SHEAR_COMPONENTS)
        } else {
            Some(N_ENERGY_MOMENTUM)
        }
    }

    /// Length of a directional stencil buffer for this layout.
    #[inline]
    pub const fn stencil_len(&self) -> usize {
        STENCIL_WIDTH * self.n_conserved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_order() {
        let names: Vec<_> = ShearComponent::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["pitt", "pitx", "pity", "pitn", "pixx", "pixy", "pixn", "piyy", "piyn", "pinn"]
        );
        for (i, c) in ShearComponent::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_from_indices_roundtrip_and_symmetry() {
        for c in ShearComponent::ALL {
            let (mu, nu) = c.indices();
            assert_eq!(ShearComponent::from_indices(mu, nu), c);
            assert_eq!(ShearComponent::from_indices(nu, mu), c);
        }
        assert_eq!(ShearComponent::from_indices(3, 1), ShearComponent::Xn);
    }

    #[test]
    fn test_full_layout() {
        let layout = StateLayout::new(true, true);
        assert_eq!(layout.n_dissipative(), 11);
        assert_eq!(layout.n_conserved(), 15);
        assert_eq!(layout.shear_offset(ShearComponent::Nn), Some(13));
        assert_eq!(layout.bulk_offset(), Some(14));
        assert_eq!(layout.stencil_len(), 75);
    }

    #[test]
    fn test_partial_layouts() {
        let shear = StateLayout::new(true, false);
        assert_eq!(shear.n_conserved(), 14);
        assert_eq!(shear.bulk_offset(), None);

        let bulk = StateLayout::new(false, true);
        assert_eq!(bulk.shear_offset(ShearComponent::Tt), None);
        assert_eq!(bulk.bulk_offset(), Some(4));

        let ideal = StateLayout::new(false, false);
        assert_eq!(ideal.n_conserved(), 4);
        assert_eq!(ideal.stencil_len(), 20);
    }
}

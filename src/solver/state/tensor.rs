//! Rank-2 tensor types in Milne coordinates.
//!
//! - [`SymmetricTensor`]: ten independent components, used both for the
//!   shear stress π^{μν} and for the shear tensor σ^{μν}
//! - [`Vorticity`]: six independent components of the antisymmetric
//!   vorticity ω^{μν}, plus the mixed-index view [`MixedVorticity`]

use std::ops::Index;

use crate::physics::{N_SHEAR_COMPONENTS, ShearComponent};
use crate::types::Real;

/// Symmetric rank-2 tensor with contravariant components (τ, x, y, η_s).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SymmetricTensor {
    pub tt: Real,
    pub tx: Real,
    pub ty: Real,
    pub tn: Real,
    pub xx: Real,
    pub xy: Real,
    pub xn: Real,
    pub yy: Real,
    pub yn: Real,
    pub nn: Real,
}

impl SymmetricTensor {
    /// Create a zero tensor.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Convert to array representation in storage order.
    #[inline(always)]
    pub fn to_array(&self) -> [Real; N_SHEAR_COMPONENTS] {
        [
            self.tt, self.tx, self.ty, self.tn, self.xx, self.xy, self.xn, self.yy, self.yn,
            self.nn,
        ]
    }

    /// Create from array representation in storage order.
    #[inline(always)]
    pub fn from_array(arr: [Real; N_SHEAR_COMPONENTS]) -> Self {
        let [tt, tx, ty, tn, xx, xy, xn, yy, yn, nn] = arr;
        Self {
            tt,
            tx,
            ty,
            tn,
            xx,
            xy,
            xn,
            yy,
            yn,
            nn,
        }
    }

    /// Build by evaluating `f` for each component.
    pub fn from_fn(mut f: impl FnMut(ShearComponent) -> Real) -> Self {
        Self::from_array(ShearComponent::ALL.map(&mut f))
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> Real {
        self.to_array().iter().fold(0.0, |m: Real, v| m.max(v.abs()))
    }
}

impl Index<ShearComponent> for SymmetricTensor {
    type Output = Real;

    #[inline]
    fn index(&self, c: ShearComponent) -> &Real {
        match c {
            ShearComponent::Tt => &self.tt,
            ShearComponent::Tx => &self.tx,
            ShearComponent::Ty => &self.ty,
            ShearComponent::Tn => &self.tn,
            ShearComponent::Xx => &self.xx,
            ShearComponent::Xy => &self.xy,
            ShearComponent::Xn => &self.xn,
            ShearComponent::Yy => &self.yy,
            ShearComponent::Yn => &self.yn,
            ShearComponent::Nn => &self.nn,
        }
    }
}

/// Vorticity ω^{μν} with one index lowered as produced by the kinematics:
/// the six independent components (tx, ty, tn, xy, xn, yn).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vorticity {
    pub tx: Real,
    pub ty: Real,
    pub tn: Real,
    pub xy: Real,
    pub xn: Real,
    pub yn: Real,
}

/// Sign-flipped and metric-raised counterparts of [`Vorticity`] used by
/// the rotation coupling: ω_{xτ}, ω_{yτ}, ω_{ητ}, ω_{yx}, ω_{ηx}, ω_{ηy}.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MixedVorticity {
    pub xt: Real,
    pub yt: Real,
    pub nt: Real,
    pub yx: Real,
    pub nx: Real,
    pub ny: Real,
}

impl Vorticity {
    /// Create a zero vorticity.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Mixed-index counterparts at proper time `t`.
    #[inline]
    pub fn mixed(&self, t: Real) -> MixedVorticity {
        let t2 = t * t;
        MixedVorticity {
            xt: self.tx,
            yt: self.ty,
            nt: self.tn / t2,
            yx: -self.xy,
            nx: -self.xn / t2,
            ny: -self.yn / t2,
        }
    }
}

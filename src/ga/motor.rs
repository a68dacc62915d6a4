//! Motors: rigid motions as even-grade multivectors
//!
//! A motor `M` moves a blade `X` by conjugation, `M X ~M`. Motors compose by
//! the geometric product and `M * N` applies `N` first, then `M`.

use serde::{Deserialize, Serialize};
use std::ops::Mul;

use super::blades::{Bivector, Blade};
use super::multivector::{Multivector, basis};

/// Even-grade element: scalar, six bivector terms and the pseudoscalar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motor {
    pub s: f32,
    pub e01: f32,
    pub e02: f32,
    pub e03: f32,
    pub e23: f32,
    pub e31: f32,
    pub e12: f32,
    pub e0123: f32,
}

impl Default for Motor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Motor {
    pub const IDENTITY: Self = Self {
        s: 1.0,
        e01: 0.0,
        e02: 0.0,
        e03: 0.0,
        e23: 0.0,
        e31: 0.0,
        e12: 0.0,
        e0123: 0.0,
    };

    /// Translation by `distance` along the ideal part `(e01, e02, e03)` of
    /// `direction`, which is normalized first
    ///
    /// A zero distance or a direction without an ideal part gives the identity.
    pub fn translation(distance: f32, direction: Bivector) -> Self {
        let len = direction.ideal_norm();
        if distance == 0.0 || len == 0.0 {
            return Self::IDENTITY;
        }
        let k = -0.5 * distance / len;
        Self {
            e01: k * direction.e01,
            e02: k * direction.e02,
            e03: k * direction.e03,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `angle` radians about the Euclidean part `(e23, e31, e12)`
    /// of `axis`, through the origin
    ///
    /// With a positive `e12` a positive angle turns counter-clockwise in the
    /// (y-up) play field. A zero axis gives the identity.
    pub fn rotation(angle: f32, axis: Bivector) -> Self {
        let len = axis.euclidean_norm();
        if angle == 0.0 || len == 0.0 {
            return Self::IDENTITY;
        }
        let (sin, cos) = (0.5 * angle).sin_cos();
        let k = -sin / len;
        Self {
            s: cos,
            e23: k * axis.e23,
            e31: k * axis.e31,
            e12: k * axis.e12,
            ..Self::IDENTITY
        }
    }

    /// `self * other`: the motion of `other` followed by the motion of `self`
    pub fn compose(self, other: Motor) -> Motor {
        self * other
    }

    /// The inverse motion (for normalized motors)
    pub fn reverse(self) -> Self {
        Self {
            s: self.s,
            e01: -self.e01,
            e02: -self.e02,
            e03: -self.e03,
            e23: -self.e23,
            e31: -self.e31,
            e12: -self.e12,
            e0123: self.e0123,
        }
    }

    /// Norm of the rotational part, or of the ideal part when that vanishes
    pub fn norm(self) -> f32 {
        let bulk =
            (self.s * self.s + self.e23 * self.e23 + self.e31 * self.e31 + self.e12 * self.e12)
                .sqrt();
        if bulk != 0.0 {
            return bulk;
        }
        (self.e01 * self.e01 + self.e02 * self.e02 + self.e03 * self.e03 + self.e0123 * self.e0123)
            .sqrt()
    }

    /// Rescale so the rotational part has unit norm
    pub fn normalized(self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            return self;
        }
        let inv = 1.0 / n;
        Self {
            s: self.s * inv,
            e01: self.e01 * inv,
            e02: self.e02 * inv,
            e03: self.e03 * inv,
            e23: self.e23 * inv,
            e31: self.e31 * inv,
            e12: self.e12 * inv,
            e0123: self.e0123 * inv,
        }
    }

    /// Conjugate `blade` by this motor and project back onto its grade
    ///
    /// The projection discards the odd-grade residue that rounding leaves
    /// behind, so repeated application stays on the blade's subspace.
    pub fn apply<B: Blade>(&self, blade: B) -> B {
        let m = Multivector::from(*self);
        let sandwich = m * blade.into() * m.reverse();
        B::project(&sandwich)
    }

    /// Keep the even-grade part of a multivector
    fn project(mv: &Multivector) -> Self {
        Self {
            s: mv.get(basis::S),
            e01: mv.get(basis::E01),
            e02: mv.get(basis::E02),
            e03: mv.get(basis::E03),
            e23: mv.get(basis::E23),
            e31: -mv.get(basis::E13),
            e12: mv.get(basis::E12),
            e0123: mv.get(basis::E0123),
        }
    }
}

impl From<Motor> for Multivector {
    fn from(m: Motor) -> Self {
        let mut mv = Multivector::ZERO;
        mv.set(basis::S, m.s);
        mv.set(basis::E01, m.e01);
        mv.set(basis::E02, m.e02);
        mv.set(basis::E03, m.e03);
        mv.set(basis::E23, m.e23);
        mv.set(basis::E13, -m.e31);
        mv.set(basis::E12, m.e12);
        mv.set(basis::E0123, m.e0123);
        mv
    }
}

impl Mul for Motor {
    type Output = Motor;

    fn mul(self, rhs: Motor) -> Motor {
        Motor::project(&(Multivector::from(self) * Multivector::from(rhs)))
    }
}

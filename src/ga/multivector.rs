//! Dense multivector for 3D projective geometric algebra R(3,0,1)
//!
//! Basis blades are indexed by bitmask: bit 0 is the degenerate `e0` (squares
//! to zero), bits 1-3 are `e1`, `e2`, `e3` (square to one). Each coefficient
//! belongs to the blade with its indices in ascending order, so `e31` is stored
//! as `-e13` and the point basis `e032` as `-e023`. The typed blades in
//! [`super::blades`] handle those sign conversions.

use std::ops::{Add, Mul, Neg, Sub};

/// Number of basis blades in the algebra
pub const BLADE_COUNT: usize = 16;

/// Basis blade indices (bitmasks)
pub mod basis {
    pub const S: usize = 0b0000;
    pub const E0: usize = 0b0001;
    pub const E1: usize = 0b0010;
    pub const E2: usize = 0b0100;
    pub const E3: usize = 0b1000;
    pub const E01: usize = E0 | E1;
    pub const E02: usize = E0 | E2;
    pub const E03: usize = E0 | E3;
    pub const E12: usize = E1 | E2;
    pub const E13: usize = E1 | E3;
    pub const E23: usize = E2 | E3;
    pub const E012: usize = E0 | E1 | E2;
    pub const E013: usize = E0 | E1 | E3;
    pub const E023: usize = E0 | E2 | E3;
    pub const E123: usize = E1 | E2 | E3;
    pub const E0123: usize = E0 | E1 | E2 | E3;
}

/// Grade (number of basis vectors) of a basis blade
#[inline]
pub fn grade(blade: usize) -> u32 {
    blade.count_ones()
}

/// Sign picked up when reordering the product `e_a * e_b` into ascending order
fn reorder_sign(a: usize, b: usize) -> f32 {
    let mut a = a >> 1;
    let mut swaps = 0;
    while a != 0 {
        swaps += (a & b).count_ones();
        a >>= 1;
    }
    if swaps % 2 == 0 { 1.0 } else { -1.0 }
}

/// Sign `s` such that `e_a ∧ s·e_(!a) = e0123` (right complement)
fn complement_sign(blade: usize) -> f32 {
    reorder_sign(blade, basis::E0123 ^ blade)
}

/// Sign applied to a blade of the given grade by reversion
fn reverse_sign(grade: u32) -> f32 {
    if (grade * grade.saturating_sub(1) / 2) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// A general multivector with one coefficient per basis blade
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Multivector {
    coeffs: [f32; BLADE_COUNT],
}

impl Multivector {
    pub const ZERO: Self = Self {
        coeffs: [0.0; BLADE_COUNT],
    };

    pub fn scalar(s: f32) -> Self {
        Self::from_blade(basis::S, s)
    }

    /// A single basis blade scaled by `coef`
    pub fn from_blade(blade: usize, coef: f32) -> Self {
        let mut mv = Self::ZERO;
        mv.coeffs[blade] = coef;
        mv
    }

    #[inline]
    pub fn get(&self, blade: usize) -> f32 {
        self.coeffs[blade]
    }

    #[inline]
    pub fn set(&mut self, blade: usize, value: f32) {
        self.coeffs[blade] = value;
    }

    /// Geometric product
    pub fn geometric(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0.0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                // e0 * e0 = 0
                if b == 0.0 || i & j & basis::E0 != 0 {
                    continue;
                }
                out.coeffs[i ^ j] += reorder_sign(i, j) * a * b;
            }
        }
        out
    }

    /// Outer (wedge) product
    pub fn wedge(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0.0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                if b == 0.0 || i & j != 0 {
                    continue;
                }
                out.coeffs[i | j] += reorder_sign(i, j) * a * b;
            }
        }
        out
    }

    /// Right complement: maps every blade `e_a` to the blade completing it to `e0123`
    pub fn complement(&self) -> Self {
        let mut out = Self::ZERO;
        for (i, &a) in self.coeffs.iter().enumerate() {
            out.coeffs[basis::E0123 ^ i] = complement_sign(i) * a;
        }
        out
    }

    /// Inverse of [`Multivector::complement`]
    pub fn uncomplement(&self) -> Self {
        let mut out = Self::ZERO;
        for (i, &a) in self.coeffs.iter().enumerate() {
            let source = basis::E0123 ^ i;
            out.coeffs[source] = complement_sign(source) * a;
        }
        out
    }

    /// Regressive (meet / join-of-points) product: `J⁻¹(J(a) ∧ J(b))`
    pub fn regressive(&self, rhs: &Self) -> Self {
        self.complement().wedge(&rhs.complement()).uncomplement()
    }

    /// Reversion: reverses the order of basis vectors in every blade
    pub fn reverse(&self) -> Self {
        let mut out = *self;
        for (i, c) in out.coeffs.iter_mut().enumerate() {
            *c *= reverse_sign(grade(i));
        }
        out
    }

    /// Keep only the coefficients of grade `k`
    pub fn grade_part(&self, k: u32) -> Self {
        let mut out = Self::ZERO;
        for (i, &a) in self.coeffs.iter().enumerate() {
            if grade(i) == k {
                out.coeffs[i] = a;
            }
        }
        out
    }

    /// Largest absolute coefficient
    pub fn max_abs(&self) -> f32 {
        self.coeffs.iter().fold(0.0_f32, |acc, c| acc.max(c.abs()))
    }
}

impl Add for Multivector {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.coeffs.iter_mut().zip(rhs.coeffs) {
            *a += b;
        }
        self
    }
}

impl Sub for Multivector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Multivector {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in self.coeffs.iter_mut() {
            *c = -*c;
        }
        self
    }
}

impl Mul<f32> for Multivector {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self {
        for c in self.coeffs.iter_mut() {
            *c *= rhs;
        }
        self
    }
}

impl Mul for Multivector {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.geometric(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::basis::*;
    use super::*;

    fn blade(b: usize) -> Multivector {
        Multivector::from_blade(b, 1.0)
    }

    #[test]
    fn test_basis_squares() {
        assert_eq!(blade(E0) * blade(E0), Multivector::ZERO);
        assert_eq!(blade(E1) * blade(E1), Multivector::scalar(1.0));
        assert_eq!(blade(E3) * blade(E3), Multivector::scalar(1.0));
        assert_eq!(blade(E12) * blade(E12), Multivector::scalar(-1.0));
        assert_eq!(blade(E123) * blade(E123), Multivector::scalar(-1.0));
        assert_eq!(blade(E01) * blade(E01), Multivector::ZERO);
    }

    #[test]
    fn test_vectors_anticommute() {
        let ab = blade(E1) * blade(E2);
        let ba = blade(E2) * blade(E1);
        assert_eq!(ab, -ba);
        assert_eq!(ab, blade(E12));
        // e3 * e1 = -e13
        assert_eq!(blade(E3) * blade(E1), -blade(E13));
    }

    #[test]
    fn test_reverse_is_involution() {
        let mut mv = Multivector::ZERO;
        for i in 0..BLADE_COUNT {
            mv.set(i, i as f32 + 1.0);
        }
        assert_eq!(mv.reverse().reverse(), mv);
        assert_eq!(mv.reverse().get(E12), -mv.get(E12));
        assert_eq!(mv.reverse().get(E123), -mv.get(E123));
        assert_eq!(mv.reverse().get(E0123), mv.get(E0123));
        assert_eq!(mv.reverse().get(E1), mv.get(E1));
    }

    #[test]
    fn test_complement_round_trip() {
        let mut mv = Multivector::ZERO;
        for i in 0..BLADE_COUNT {
            mv.set(i, (i as f32) * 0.5 - 3.0);
        }
        assert_eq!(mv.complement().uncomplement(), mv);
        // Every blade wedged with its complement gives +e0123
        for i in 0..BLADE_COUNT {
            let b = blade(i);
            assert_eq!(b.wedge(&b.complement()), blade(E0123), "blade {i:#06b}");
        }
    }

    #[test]
    fn test_wedge_of_shared_vectors_vanishes() {
        assert_eq!(blade(E1).wedge(&blade(E12)), Multivector::ZERO);
        assert_eq!(blade(E0).wedge(&blade(E1)), blade(E01));
    }

    #[test]
    fn test_geometric_product_is_associative() {
        let mut a = Multivector::ZERO;
        let mut b = Multivector::ZERO;
        let mut c = Multivector::ZERO;
        for i in 0..BLADE_COUNT {
            a.set(i, (i % 3) as f32 - 1.0);
            b.set(i, (i % 5) as f32 * 0.5);
            c.set(i, 2.0 - (i % 4) as f32);
        }
        let left = (a * b) * c;
        let right = a * (b * c);
        assert!((left - right).max_abs() < 1e-4);
    }

    #[test]
    fn test_regressive_plane_point_is_signed_distance() {
        // Plane x + 2 = 0 (d = 2, nx = 1)
        let plane = blade(E0) * 2.0 + blade(E1);
        // Point (3, 0, 0): x e032 + w e123 = -3 e023 + e123
        let point = blade(E023) * -3.0 + blade(E123);
        let d = plane.regressive(&point);
        assert!((d.get(S) - 5.0).abs() < 1e-6);
        assert!((d - Multivector::scalar(d.get(S))).max_abs() < 1e-6);
    }
}

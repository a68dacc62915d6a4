//! Typed blades: points, lines and bivectors
//!
//! Each blade is a fixed-size slice of [`Multivector`]. Converting into a
//! multivector is lossless; converting back is a grade projection that drops
//! every coefficient outside the blade's grade.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

use super::multivector::{Multivector, basis};

/// A blade of a single grade that can be recovered from a multivector
pub trait Blade: Copy + Into<Multivector> {
    /// Grade of the blade in the algebra
    const GRADE: u32;

    /// Grade projection: keep this blade's coefficients, discard the rest
    fn project(mv: &Multivector) -> Self;
}

/// Regressive product between two blades
///
/// Point-point yields the joining [`Bivector`], whose norm is the distance
/// between the points. Line-point yields the signed perpendicular distance.
pub trait Incidence<Rhs> {
    type Output;

    fn incidence(self, rhs: Rhs) -> Self::Output;
}

/// Implements component-wise sum, difference, negation and scaling
macro_rules! impl_linear_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }
    };
}

/// Below this weight a point is treated as ideal (at infinity)
pub const WEIGHT_EPSILON: f32 = 1e-6;

/// A point: `x e032 + y e013 + z e021 + w e123`
///
/// The game keeps `w = 1` and uses `z` as a payload slot (the player's energy)
/// rather than a third spatial axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl_linear_ops!(Point { x, y, z, w });

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// A finite point with unit weight
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    /// A finite point in the play field carrying `payload` in z
    pub fn from_vec2(pos: Vec2, payload: f32) -> Self {
        Self::new(pos.x, pos.y, payload)
    }

    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The same position with the payload coordinate zeroed
    pub fn planar(self) -> Self {
        Self { z: 0.0, ..self }
    }

    /// The same position with `payload` stored in z
    pub fn with_payload(self, payload: f32) -> Self {
        Self { z: payload, ..self }
    }

    /// Rescale so that `w = 1`
    pub fn unitized(self) -> Self {
        debug_assert!(self.w.abs() > WEIGHT_EPSILON, "cannot unitize an ideal point");
        let inv = 1.0 / self.w;
        Self {
            x: self.x * inv,
            y: self.y * inv,
            z: self.z * inv,
            w: 1.0,
        }
    }

    pub fn reverse(self) -> Self {
        -self
    }

    /// Weight norm `|w|`, or the ideal norm for points at infinity
    pub fn norm(self) -> f32 {
        if self.w != 0.0 {
            self.w.abs()
        } else {
            (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
        }
    }

    /// Point reflection through `pivot`: `Q X Q`, re-unitized
    ///
    /// The payload coordinate is reflected too; callers that store data there
    /// must restore it.
    pub fn reflect_through(self, pivot: Point) -> Point {
        let q = Multivector::from(pivot.unitized());
        let sandwich = q * Multivector::from(self) * q;
        Point::project(&sandwich).unitized()
    }

    /// Euclidean distance to another finite point (payload included)
    pub fn distance(self, other: Point) -> f32 {
        self.incidence(other).norm()
    }
}

impl From<Point> for Multivector {
    fn from(p: Point) -> Self {
        let mut mv = Multivector::ZERO;
        mv.set(basis::E023, -p.x);
        mv.set(basis::E013, p.y);
        mv.set(basis::E012, -p.z);
        mv.set(basis::E123, p.w);
        mv
    }
}

impl Blade for Point {
    const GRADE: u32 = 3;

    fn project(mv: &Multivector) -> Self {
        Self {
            x: -mv.get(basis::E023),
            y: mv.get(basis::E013),
            z: -mv.get(basis::E012),
            w: mv.get(basis::E123),
        }
    }
}

/// A grade-1 blade: `d e0 + nx e1 + ny e2 + nz e3`
///
/// In the algebra this is the plane `nx·x + ny·y + nz·z + d = 0`. With
/// `nz = 0` it stands perpendicular to the play field and acts as a line there,
/// which is how the window edges are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub d: f32,
    pub nx: f32,
    pub ny: f32,
    pub nz: f32,
}

impl_linear_ops!(Line { d, nx, ny, nz });

impl Line {
    pub const fn new(d: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self { d, nx, ny, nz }
    }

    /// Line in the play field through `point` with the given normal
    pub fn through(point: Vec2, normal: Vec2) -> Self {
        let n = normal.normalize_or_zero();
        Self::new(-n.dot(point), n.x, n.y, 0.0)
    }

    /// In-plane normal direction
    pub fn normal(self) -> Vec2 {
        Vec2::new(self.nx, self.ny)
    }

    pub fn reverse(self) -> Self {
        self
    }

    /// `|n|`, or `|d|` for the ideal plane
    pub fn norm(self) -> f32 {
        let n = (self.nx * self.nx + self.ny * self.ny + self.nz * self.nz).sqrt();
        if n != 0.0 { n } else { self.d.abs() }
    }

    /// Rescale to a unit normal
    pub fn normalized(self) -> Self {
        let n = self.norm();
        if n == 0.0 { self } else { self * (1.0 / n) }
    }
}

impl From<Line> for Multivector {
    fn from(l: Line) -> Self {
        let mut mv = Multivector::ZERO;
        mv.set(basis::E0, l.d);
        mv.set(basis::E1, l.nx);
        mv.set(basis::E2, l.ny);
        mv.set(basis::E3, l.nz);
        mv
    }
}

impl Blade for Line {
    const GRADE: u32 = 1;

    fn project(mv: &Multivector) -> Self {
        Self {
            d: mv.get(basis::E0),
            nx: mv.get(basis::E1),
            ny: mv.get(basis::E2),
            nz: mv.get(basis::E3),
        }
    }
}

/// A bivector: `e01, e02, e03` (ideal / translation part) and `e23, e31, e12`
/// (Euclidean / rotation part)
///
/// Used as the motion generator handed to motor constructors and as the result
/// of joining two points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bivector {
    pub e01: f32,
    pub e02: f32,
    pub e03: f32,
    pub e23: f32,
    pub e31: f32,
    pub e12: f32,
}

impl_linear_ops!(Bivector { e01, e02, e03, e23, e31, e12 });

impl Bivector {
    pub const fn new(e01: f32, e02: f32, e03: f32, e23: f32, e31: f32, e12: f32) -> Self {
        Self {
            e01,
            e02,
            e03,
            e23,
            e31,
            e12,
        }
    }

    /// Translation direction in the play field
    pub const fn direction(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 0.0, 0.0, 0.0)
    }

    /// Rotation about the axis perpendicular to the play field
    pub const fn spin(e12: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, e12)
    }

    /// Translation direction as a plain vector
    pub fn direction_xy(self) -> Vec2 {
        Vec2::new(self.e01, self.e02)
    }

    pub fn reverse(self) -> Self {
        -self
    }

    /// Norm of the Euclidean part `(e23, e31, e12)`
    pub fn euclidean_norm(self) -> f32 {
        (self.e23 * self.e23 + self.e31 * self.e31 + self.e12 * self.e12).sqrt()
    }

    /// Norm of the ideal part `(e01, e02, e03)`
    pub fn ideal_norm(self) -> f32 {
        (self.e01 * self.e01 + self.e02 * self.e02 + self.e03 * self.e03).sqrt()
    }

    /// Euclidean norm, falling back to the ideal norm for ideal lines
    pub fn norm(self) -> f32 {
        let n = self.euclidean_norm();
        if n != 0.0 { n } else { self.ideal_norm() }
    }
}

impl From<Bivector> for Multivector {
    fn from(b: Bivector) -> Self {
        let mut mv = Multivector::ZERO;
        mv.set(basis::E01, b.e01);
        mv.set(basis::E02, b.e02);
        mv.set(basis::E03, b.e03);
        mv.set(basis::E23, b.e23);
        mv.set(basis::E13, -b.e31);
        mv.set(basis::E12, b.e12);
        mv
    }
}

impl Blade for Bivector {
    const GRADE: u32 = 2;

    fn project(mv: &Multivector) -> Self {
        Self {
            e01: mv.get(basis::E01),
            e02: mv.get(basis::E02),
            e03: mv.get(basis::E03),
            e23: mv.get(basis::E23),
            e31: -mv.get(basis::E13),
            e12: mv.get(basis::E12),
        }
    }
}

impl Incidence<Point> for Point {
    type Output = Bivector;

    fn incidence(self, rhs: Point) -> Bivector {
        debug_assert!(
            self.w.abs() > WEIGHT_EPSILON && rhs.w.abs() > WEIGHT_EPSILON,
            "distance query on an ideal point"
        );
        let join = Multivector::from(self).regressive(&Multivector::from(rhs));
        Bivector::project(&join)
    }
}

impl Incidence<Point> for Line {
    type Output = f32;

    fn incidence(self, rhs: Point) -> f32 {
        debug_assert!(rhs.w.abs() > WEIGHT_EPSILON, "distance query on an ideal point");
        Multivector::from(self)
            .regressive(&Multivector::from(rhs))
            .get(basis::S)
    }
}

impl Incidence<Line> for Point {
    type Output = f32;

    fn incidence(self, rhs: Line) -> f32 {
        debug_assert!(self.w.abs() > WEIGHT_EPSILON, "distance query on an ideal point");
        Multivector::from(self)
            .regressive(&Multivector::from(rhs))
            .get(basis::S)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_round_trip_through_multivector() {
        let p = Point::new(3.0, -4.0, 50.0);
        assert_eq!(Point::project(&Multivector::from(p)), p);
        let b = Bivector::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(Bivector::project(&Multivector::from(b)), b);
        let l = Line::new(1.0, 0.0, -1.0, 0.0);
        assert_eq!(Line::project(&Multivector::from(l)), l);
    }

    #[test]
    fn test_projection_drops_foreign_grades() {
        let mut mv = Multivector::from(Point::new(1.0, 2.0, 0.0));
        mv.set(basis::E1, 7.0);
        mv.set(basis::E12, 3.0);
        assert_eq!(Point::project(&mv), Point::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_reverse_is_involution() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p.reverse().reverse(), p);
        let b = Bivector::new(1.0, -2.0, 0.5, 0.0, 3.0, -1.0);
        assert_eq!(b.reverse().reverse(), b);
        let l = Line::new(4.0, 1.0, 0.0, 0.0);
        assert_eq!(l.reverse().reverse(), l);
    }

    #[test]
    fn test_norm_zero_only_for_zero_blade() {
        assert_eq!(Bivector::default().norm(), 0.0);
        assert!(Bivector::direction(0.0, 2.0).norm() > 0.0);
        assert!(Bivector::spin(-1.0).norm() > 0.0);
        assert_eq!(Line::new(0.0, 0.0, 0.0, 0.0).norm(), 0.0);
        assert_eq!(Line::new(3.0, 0.0, 0.0, 0.0).norm(), 3.0);
        assert_eq!(Point::new(1.0, 1.0, 0.0).norm(), 1.0);
    }

    #[test]
    fn test_point_point_incidence_is_distance() {
        let a = Point::new(100.0, 100.0, 0.0);
        let b = Point::new(103.0, 104.0, 0.0);
        assert!((a.incidence(b).norm() - 5.0).abs() < 1e-4);
        assert!((b.incidence(a).norm() - 5.0).abs() < 1e-4);
        assert!(a.incidence(a).norm() < 1e-6);
    }

    #[test]
    fn test_payload_counts_in_raw_distance() {
        let a = Point::new(0.0, 0.0, 50.0);
        let b = Point::new(3.0, 4.0, 0.0);
        assert!(a.distance(b) > 50.0);
        assert!((a.planar().distance(b) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_line_point_incidence_is_signed_distance() {
        // Right window edge at x = 800 with an inward (-x) normal
        let edge = Line::through(Vec2::new(800.0, 0.0), Vec2::new(-1.0, 0.0));
        let inside = Point::new(790.0, 300.0, 0.0);
        let outside = Point::new(810.0, 300.0, 0.0);
        assert!((edge.incidence(inside) - 10.0).abs() < 1e-4);
        assert!((edge.incidence(outside) + 10.0).abs() < 1e-4);
        assert!((inside.incidence(edge) + 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_reflect_through_point() {
        let p = Point::new(300.0, 120.0, 0.0);
        let pivot = Point::new(100.0, 100.0, 0.0);
        let r = p.reflect_through(pivot);
        assert!((r.x - (-100.0)).abs() < 1e-3);
        assert!((r.y - 80.0).abs() < 1e-3);
        assert!((r.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_flips_payload() {
        let p = Point::new(10.0, 10.0, 40.0);
        let r = p.reflect_through(Point::new(20.0, 10.0, 0.0));
        assert!((r.z + 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_linear_ops() {
        let a = Point::new(1.0, 2.0, 3.0);
        let b = Point::new(1.0, 1.0, 1.0);
        assert_eq!(a - b, Point { x: 0.0, y: 1.0, z: 2.0, w: 0.0 });
        assert_eq!((a + b) * 0.5, Point { x: 1.0, y: 1.5, z: 2.0, w: 1.0 });
    }
}

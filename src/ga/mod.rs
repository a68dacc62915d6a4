//! Projective geometric algebra kernel
//!
//! Everything that moves or collides in the game goes through here:
//! - `multivector`: dense R(3,0,1) multivector and its products
//! - `blades`: points, lines and bivectors, plus the incidence queries
//! - `motor`: rigid motions and the sandwich transform

pub mod blades;
pub mod motor;
pub mod multivector;

pub use blades::{Bivector, Blade, Incidence, Line, Point};
pub use motor::Motor;
pub use multivector::Multivector;

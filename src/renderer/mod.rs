//! Render export
//!
//! The window and GPU pipeline live outside the crate. This module flattens the
//! game state into plain instance data the external renderer can upload as is.

pub mod instance;
pub mod shapes;

pub use instance::{DrawInstance, Shape};
pub use shapes::{as_bytes, collect_instances};

//! Pillar Orbit - an arcade game on a projective geometric-algebra kernel
//!
//! Core modules:
//! - `ga`: Points, lines, bivectors and motors in R(3,0,1)
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `renderer`: Draw instance export for an external renderer
//! - `settings`: Window configuration loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod ga;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest frame time a single tick will simulate (seconds)
    pub const MAX_ELAPSED_SECONDS: f32 = 0.1;
    /// Frame time used by the native driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}

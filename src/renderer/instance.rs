//! Instance type handed to the external 2D renderer

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// Primitive used to draw an instance
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    Rect = 0,
    Ellipse = 1,
}

/// One axis-aligned primitive: bottom-left corner, size, colour and shape
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    pub shape: u32,
}

impl DrawInstance {
    /// Instance for a box of `extent` centred at `center`
    pub fn centered(center: Vec2, extent: Vec2, color: Vec4, shape: Shape) -> Self {
        Self {
            position: (center - extent * 0.5).to_array(),
            size: extent.to_array(),
            color: color.to_array(),
            shape: shape as u32,
        }
    }
}

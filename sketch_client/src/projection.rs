//! Screen projection: logical pixels (origin top-left, y down) to clip space

use glam::{Mat4, Vec2};

/// Projection uniform data (matches WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionUniform {
    view_proj: [[f32; 4]; 4],
}

impl ProjectionUniform {
    /// Orthographic projection for a viewport of `size` logical pixels
    pub fn screen(size: Vec2) -> Self {
        let projection = Mat4::orthographic_rh(0.0, size.x.max(1.0), size.y.max(1.0), 0.0, -1.0, 1.0);
        Self {
            view_proj: projection.to_cols_array_2d(),
        }
    }
}

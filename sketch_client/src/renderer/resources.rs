use crate::projection::ProjectionUniform;
use glam::Vec2;
use wgpu::util::DeviceExt;
use wgpu::*;

pub fn create_projection_buffer(device: &Device, logical_size: Vec2) -> Buffer {
    let uniform = ProjectionUniform::screen(logical_size);
    device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Projection Buffer"),
        contents: bytemuck::cast_slice(&[uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    })
}

/// Multisampled color target the frame is drawn into before resolving onto
/// the surface. `None` when drawing straight to the surface.
pub fn create_msaa_view(
    device: &Device,
    config: &SurfaceConfiguration,
    sample_count: u32,
) -> Option<TextureView> {
    if sample_count <= 1 {
        return None;
    }

    let texture = device.create_texture(&TextureDescriptor {
        label: Some("MSAA Texture"),
        size: Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count,
        dimension: TextureDimension::D2,
        format: config.format,
        usage: TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    Some(texture.create_view(&TextureViewDescriptor::default()))
}

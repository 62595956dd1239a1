pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::error::ClientError;
use crate::projection::ProjectionUniform;
use glam::Vec2;
use lyon::tessellation::StrokeTessellator;
use sketch_core::Frame;
use std::sync::Arc;
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub scale_factor: f64,
    pub sample_count: u32,

    pub stroke_pipeline: RenderPipeline,
    pub projection_buffer: Buffer,
    pub projection_bind_group: BindGroup,
    pub msaa_view: Option<TextureView>,

    pub tessellator: StrokeTessellator,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ClientError> {
        let scale_factor = window.scale_factor();
        let ctx = init::init_wgpu(window, vsync).await?;
        let size = (ctx.config.width, ctx.config.height);

        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format, ctx.sample_count);
        let projection_buffer = resources::create_projection_buffer(
            &ctx.device,
            logical_size(size, scale_factor),
        );
        let msaa_view = resources::create_msaa_view(&ctx.device, &ctx.config, ctx.sample_count);

        let projection_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Projection Bind Group"),
            layout: &pipes.projection_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: projection_buffer.as_entire_binding(),
            }],
        });

        log::info!(
            "Renderer ready: {}x{} @ {:.2}x, {:?}, {} samples",
            size.0,
            size.1,
            scale_factor,
            ctx.config.format,
            ctx.sample_count
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size,
            scale_factor,
            sample_count: ctx.sample_count,
            stroke_pipeline: pipes.stroke_pipeline,
            projection_buffer,
            projection_bind_group,
            msaa_view,
            tessellator: StrokeTessellator::new(),
        })
    }

    /// Size of the viewport in logical pixels
    pub fn logical_size(&self) -> Vec2 {
        logical_size(self.size, self.scale_factor)
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Reconfigure for a new physical size. Zero sizes (minimized windows)
    /// are ignored.
    pub fn resize(&mut self, size: (u32, u32)) {
        if size.0 == 0 || size.1 == 0 {
            return;
        }

        self.size = size;
        self.surface_config.width = size.0;
        self.surface_config.height = size.1;
        self.surface.configure(&self.device, &self.surface_config);
        self.msaa_view =
            resources::create_msaa_view(&self.device, &self.surface_config, self.sample_count);
        self.write_projection();

        log::debug!("Surface resized to {}x{}", size.0, size.1);
    }

    pub fn change_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
        self.write_projection();
    }

    pub fn draw(&mut self, frame: &Frame) -> Result<(), ClientError> {
        draw::draw_frame(self, frame)
    }

    fn write_projection(&self) {
        let uniform = ProjectionUniform::screen(self.logical_size());
        self.queue
            .write_buffer(&self.projection_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }
}

fn logical_size(size: (u32, u32), scale_factor: f64) -> Vec2 {
    Vec2::new(
        (size.0 as f64 / scale_factor) as f32,
        (size.1 as f64 / scale_factor) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_size_divides_by_scale() {
        assert_eq!(logical_size((2000, 1200), 2.0), Vec2::new(1000.0, 600.0));
        assert_eq!(logical_size((1000, 600), 1.0), Vec2::new(1000.0, 600.0));
    }
}

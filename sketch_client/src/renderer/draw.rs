use super::Renderer;
use crate::error::ClientError;
use crate::mesh::{tessellate_frame, Mesh};
use sketch_core::Frame;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, frame: &Frame) -> Result<(), ClientError> {
    let buffers = tessellate_frame(frame, &mut renderer.tessellator)?;
    let mesh = (!buffers.indices.is_empty())
        .then(|| Mesh::new(&renderer.device, &buffers.vertices, &buffers.indices));

    let output = renderer.surface.get_current_texture()?;
    let surface_view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    // With MSAA, draw into the multisampled target and resolve onto the surface
    let (view, resolve_target) = match &renderer.msaa_view {
        Some(msaa_view) => (msaa_view, Some(&surface_view)),
        None => (&surface_view, None),
    };

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Stroke Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view,
                resolve_target,
                ops: Operations {
                    load: LoadOp::Clear(Color::TRANSPARENT),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        if let Some(mesh) = &mesh {
            pass.set_pipeline(&renderer.stroke_pipeline);
            pass.set_bind_group(0, &renderer.projection_bind_group, &[]);
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint32);
            pass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    log::trace!(
        "frame: {} vertices, {} birds drawn, {} culled",
        buffers.vertices.len(),
        frame.stats.visible_birds,
        frame.stats.culled_birds
    );

    Ok(())
}

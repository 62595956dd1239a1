//! Stroke tessellation and GPU meshes

use crate::error::ClientError;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor,
    VertexBuffers,
};
use sketch_core::{Frame, Params, PathCmd};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Vertex data for stroked paths, positions in logical pixels
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [VertexAttribute; 2] = vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Stamps every vertex of one stroke with its color
struct StrokeColor([f32; 4]);

impl StrokeVertexConstructor<Vertex> for StrokeColor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> Vertex {
        let position = vertex.position();
        Vertex {
            position: [position.x, position.y],
            color: self.0,
        }
    }
}

/// Convert path commands into a lyon path. A command that needs a current
/// point when none is open starts a new sub-path at its end point.
pub fn build_path(cmds: &[PathCmd]) -> Path {
    let mut builder = Path::builder();
    let mut open = false;

    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => {
                if open {
                    builder.end(false);
                }
                builder.begin(point(p.x, p.y));
                open = true;
            }
            PathCmd::LineTo(p) => {
                if open {
                    builder.line_to(point(p.x, p.y));
                } else {
                    builder.begin(point(p.x, p.y));
                    open = true;
                }
            }
            PathCmd::CubicTo { ctrl1, ctrl2, to } => {
                if open {
                    builder.cubic_bezier_to(
                        point(ctrl1.x, ctrl1.y),
                        point(ctrl2.x, ctrl2.y),
                        point(to.x, to.y),
                    );
                } else {
                    builder.begin(point(to.x, to.y));
                    open = true;
                }
            }
            PathCmd::Close => {
                if open {
                    builder.end(true);
                    open = false;
                }
            }
        }
    }

    if open {
        builder.end(false);
    }

    builder.build()
}

/// Stroke every path of the frame into one set of buffers
pub fn tessellate_frame(
    frame: &Frame,
    tessellator: &mut StrokeTessellator,
) -> Result<VertexBuffers<Vertex, u32>, ClientError> {
    let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();

    for stroke in &frame.paths {
        if stroke.width <= 0.0 || stroke.color.0[3] == 0 {
            continue;
        }

        let path = build_path(&stroke.cmds);
        let options = StrokeOptions::default()
            .with_line_width(stroke.width)
            .with_miter_limit(Params::MITER_LIMIT);
        tessellator.tessellate_path(
            &path,
            &options,
            &mut BuffersBuilder::new(&mut buffers, StrokeColor(stroke.color.normalize())),
        )?;
    }

    Ok(buffers)
}

/// Mesh data with GPU buffers
pub struct Mesh {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub index_count: u32,
}

impl Mesh {
    pub fn new(device: &Device, vertices: &[Vertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Stroke Vertex Buffer"),
            contents: bytemuck::cast_slice(vertices),
            usage: BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
            label: Some("Stroke Index Buffer"),
            contents: bytemuck::cast_slice(indices),
            usage: BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }
}

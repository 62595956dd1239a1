use super::shaders::STROKE_SHADER;
use crate::mesh::Vertex;
use wgpu::*;

pub struct PipelineState {
    pub stroke_pipeline: RenderPipeline,
    pub projection_layout: BindGroupLayout,
}

pub fn create_pipelines(device: &Device, format: TextureFormat, sample_count: u32) -> PipelineState {
    let projection_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
        label: Some("Projection Bind Group Layout"),
        entries: &[BindGroupLayoutEntry {
            binding: 0,
            visibility: ShaderStages::VERTEX,
            ty: BindingType::Buffer {
                ty: BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let shader = device.create_shader_module(ShaderModuleDescriptor {
        label: Some("Stroke Shader"),
        source: ShaderSource::Wgsl(STROKE_SHADER.into()),
    });

    let layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
        label: Some("Stroke Pipeline Layout"),
        bind_group_layouts: &[&projection_layout],
        push_constant_ranges: &[],
    });

    let stroke_pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
        label: Some("Stroke Pipeline"),
        layout: Some(&layout),
        vertex: VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: Default::default(),
        },
        fragment: Some(FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(ColorTargetState {
                format,
                blend: Some(BlendState::ALPHA_BLENDING),
                write_mask: ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: PrimitiveState {
            topology: PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: FrontFace::Ccw,
            // Stroke triangles come out in either winding
            cull_mode: None,
            unclipped_depth: false,
            polygon_mode: PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: None,
        multisample: MultisampleState {
            count: sample_count,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    });

    PipelineState {
        stroke_pipeline,
        projection_layout,
    }
}

//! Render pipelines and their bind group layouts.
//!
//! Three shader programs cover everything the scenes draw:
//!
//! - `mesh.wgsl`: lit (metallic-roughness) or unlit triangle meshes, built
//!   twice: opaque with depth writes and alpha-blended without
//! - `points.wgsl`: instanced screen-facing quads, one per point
//! - `gradient.wgsl`: fullscreen vertical background gradient

use std::borrow::Cow;

use crate::resources::Vertex;

const MESH_SHADER: &str = include_str!("shaders/mesh.wgsl");
const POINTS_SHADER: &str = include_str!("shaders/points.wgsl");
const GRADIENT_SHADER: &str = include_str!("shaders/gradient.wgsl");

/// Which pipeline draws an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineKind {
    Opaque,
    Transparent,
    Points,
}

pub struct Pipelines {
    pub frame_layout: wgpu::BindGroupLayout,
    pub object_layout: wgpu::BindGroupLayout,
    pub gradient_layout: wgpu::BindGroupLayout,

    opaque: wgpu::RenderPipeline,
    transparent: wgpu::RenderPipeline,
    points: wgpu::RenderPipeline,
    pub gradient: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
    ) -> Self {
        let frame_layout = uniform_layout(
            device,
            "Frame Uniforms Layout",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let object_layout = uniform_layout(
            device,
            "Object Uniforms Layout",
            wgpu::ShaderStages::VERTEX_FRAGMENT,
        );
        let gradient_layout =
            uniform_layout(device, "Gradient Layout", wgpu::ShaderStages::FRAGMENT);

        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[Some(&frame_layout), Some(&object_layout)],
            immediate_size: 0,
        });

        let mesh_shader = shader(device, "Mesh Shader", MESH_SHADER);
        let points_shader = shader(device, "Points Shader", POINTS_SHADER);
        let gradient_shader = shader(device, "Gradient Shader", GRADIENT_SHADER);

        let opaque = scene_pipeline(
            device,
            &SceneTarget {
                label: "Opaque Mesh Pipeline",
                layout: &scene_layout,
                shader: &mesh_shader,
                color_format,
                depth_format,
                step_mode: wgpu::VertexStepMode::Vertex,
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: wgpu::BlendState::REPLACE,
                depth_write: true,
            },
        );

        let transparent = scene_pipeline(
            device,
            &SceneTarget {
                label: "Transparent Mesh Pipeline",
                layout: &scene_layout,
                shader: &mesh_shader,
                color_format,
                depth_format,
                step_mode: wgpu::VertexStepMode::Vertex,
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: wgpu::BlendState::ALPHA_BLENDING,
                depth_write: false,
            },
        );

        let points = scene_pipeline(
            device,
            &SceneTarget {
                label: "Points Pipeline",
                layout: &scene_layout,
                shader: &points_shader,
                color_format,
                depth_format,
                step_mode: wgpu::VertexStepMode::Instance,
                topology: wgpu::PrimitiveTopology::TriangleList,
                blend: wgpu::BlendState::ALPHA_BLENDING,
                depth_write: false,
            },
        );

        let gradient_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Gradient Pipeline Layout"),
                bind_group_layouts: &[Some(&gradient_layout)],
                immediate_size: 0,
            });

        let gradient = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Gradient Pipeline"),
            layout: Some(&gradient_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &gradient_shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &gradient_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: color_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState::default(),
            // Shares the scene pass, so it must tolerate the depth attachment
            depth_stencil: Some(wgpu::DepthStencilState {
                format: depth_format,
                depth_write_enabled: Some(false),
                depth_compare: Some(wgpu::CompareFunction::Always),
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Self {
            frame_layout,
            object_layout,
            gradient_layout,
            opaque,
            transparent,
            points,
            gradient,
        }
    }

    #[must_use]
    pub fn get(&self, kind: PipelineKind) -> &wgpu::RenderPipeline {
        match kind {
            PipelineKind::Opaque => &self.opaque,
            PipelineKind::Transparent => &self.transparent,
            PipelineKind::Points => &self.points,
        }
    }
}

struct SceneTarget<'a> {
    label: &'a str,
    layout: &'a wgpu::PipelineLayout,
    shader: &'a wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    step_mode: wgpu::VertexStepMode,
    topology: wgpu::PrimitiveTopology,
    blend: wgpu::BlendState,
    depth_write: bool,
}

fn scene_pipeline(device: &wgpu::Device, target: &SceneTarget<'_>) -> wgpu::RenderPipeline {
    let mut vertex_layout = Vertex::layout();
    vertex_layout.step_mode = target.step_mode;

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(target.label),
        layout: Some(target.layout),
        vertex: wgpu::VertexState {
            module: target.shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: target.shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target.color_format,
                blend: Some(target.blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: target.topology,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: target.depth_format,
            depth_write_enabled: Some(target.depth_write),
            depth_compare: Some(wgpu::CompareFunction::Less),
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview_mask: None,
        cache: None,
    })
}

fn uniform_layout(
    device: &wgpu::Device,
    label: &str,
    visibility: wgpu::ShaderStages,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

fn shader(device: &wgpu::Device, label: &str, source: &'static str) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
    })
}

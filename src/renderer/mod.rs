//! Rendering
//!
//! [`FrameRenderer`] is the seam between [`Engine`](crate::engine::Engine)
//! and the GPU. [`Renderer`] draws through wgpu onto a window surface;
//! [`HeadlessRenderer`] records what it was asked to draw, for tests and
//! tooling without a display.
//!
//! # Pass layout
//!
//! A single forward pass per frame:
//!
//! 1. clear (solid background) or fullscreen gradient
//! 2. opaque meshes
//! 3. points and transparent meshes, far to near

pub mod context;
pub mod headless;
pub mod pipeline;
pub mod settings;
pub mod uniforms;

use glam::Mat4;
use rustc_hash::FxHashMap;
use wgpu::util::DeviceExt;

use crate::errors::Result;
use crate::resources::{Geometry, Mesh, Shape, Topology};
use crate::scene::{Camera, NodeHandle, Scene};

pub use context::WgpuContext;
pub use headless::{FrameRecord, HeadlessRenderer};
pub use pipeline::{PipelineKind, Pipelines};
pub use settings::RenderSettings;
pub use uniforms::{FrameUniforms, GradientUniforms, ObjectUniforms};

/// Consumer of per-frame scene state.
pub trait FrameRenderer {
    /// Called when the drawable area changes size.
    fn resize(&mut self, width: u32, height: u32);

    /// Draws one frame. World and camera matrices are already up to date.
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()>;
}

/// Which pipeline draws a mesh.
#[must_use]
pub fn pipeline_kind(mesh: &Mesh) -> PipelineKind {
    match mesh.geometry.topology {
        Topology::Points => PipelineKind::Points,
        Topology::Triangles if mesh.material.transparent || mesh.material.opacity < 1.0 => {
            PipelineKind::Transparent
        }
        Topology::Triangles => PipelineKind::Opaque,
    }
}

/// GPU resources of one mesh node.
struct GpuObject {
    shape: Shape,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_buffer: Option<(wgpu::Buffer, u32)>,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl GpuObject {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, geometry: &Geometry) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = geometry.is_indexed().then(|| {
            let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            (buffer, geometry.index_count())
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Object Uniforms"),
            size: std::mem::size_of::<ObjectUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Object Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            shape: geometry.shape,
            vertex_buffer,
            vertex_count: geometry.vertex_count(),
            index_buffer,
            uniform_buffer,
            bind_group,
        }
    }

    fn matches(&self, geometry: &Geometry) -> bool {
        self.shape == geometry.shape && self.vertex_count == geometry.vertex_count()
    }

    fn draw(&self, pass: &mut wgpu::RenderPass<'_>, kind: PipelineKind) {
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match (kind, &self.index_buffer) {
            (PipelineKind::Points, _) => pass.draw(0..6, 0..self.vertex_count),
            (_, Some((indices, count))) => {
                pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..*count, 0, 0..1);
            }
            (_, None) => pass.draw(0..self.vertex_count, 0..1),
        }
    }
}

/// Per-frame draw entry.
struct DrawItem {
    node: NodeHandle,
    kind: PipelineKind,
    /// Squared distance to the camera.
    depth: f32,
}

/// GPU state that only exists once a surface is available.
struct GpuState {
    ctx: WgpuContext,
    pipelines: Pipelines,

    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    gradient_buffer: wgpu::Buffer,
    gradient_bind_group: wgpu::BindGroup,

    objects: FxHashMap<NodeHandle, GpuObject>,
    draw_items: Vec<DrawItem>,
}

impl GpuState {
    fn new(ctx: WgpuContext) -> Self {
        let pipelines = Pipelines::new(&ctx.device, ctx.color_format(), ctx.depth_format);

        let (frame_buffer, frame_bind_group) = uniform_binding(
            &ctx.device,
            &pipelines.frame_layout,
            "Frame Uniforms",
            std::mem::size_of::<FrameUniforms>(),
        );
        let (gradient_buffer, gradient_bind_group) = uniform_binding(
            &ctx.device,
            &pipelines.gradient_layout,
            "Gradient Uniforms",
            std::mem::size_of::<GradientUniforms>(),
        );

        Self {
            ctx,
            pipelines,
            frame_buffer,
            frame_bind_group,
            gradient_buffer,
            gradient_bind_group,
            objects: FxHashMap::default(),
            draw_items: Vec::new(),
        }
    }

    fn prepare(&mut self, scene: &Scene, camera: &Camera) {
        let (width, height) = self.ctx.size();
        let frame = FrameUniforms::new(scene, camera, width, height);
        self.ctx
            .queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&frame));

        if let Some(gradient) = GradientUniforms::from_background(&scene.background) {
            self.ctx
                .queue
                .write_buffer(&self.gradient_buffer, 0, bytemuck::bytes_of(&gradient));
        }

        // Drop GPU objects of removed nodes
        self.objects.retain(|&handle, _| scene.mesh(handle).is_some());

        let camera_position = camera.position();
        self.draw_items.clear();

        for (handle, world, mesh) in scene.iter_meshes() {
            let stale = self
                .objects
                .get(&handle)
                .is_none_or(|object| !object.matches(&mesh.geometry));
            if stale {
                log::debug!("Uploading geometry for {handle:?}");
                let object =
                    GpuObject::new(&self.ctx.device, &self.pipelines.object_layout, &mesh.geometry);
                self.objects.insert(handle, object);
            }

            let Some(object) = self.objects.get(&handle) else {
                continue;
            };
            let uniforms = ObjectUniforms::new(Mat4::from(*world), &mesh.material);
            self.ctx
                .queue
                .write_buffer(&object.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

            self.draw_items.push(DrawItem {
                node: handle,
                kind: pipeline_kind(mesh),
                depth: camera_position.distance_squared(world.translation.into()),
            });
        }

        // Opaque first, then blended geometry back to front
        self.draw_items.sort_by(|a, b| {
            let a_blended = a.kind != PipelineKind::Opaque;
            let b_blended = b.kind != PipelineKind::Opaque;
            a_blended.cmp(&b_blended).then_with(|| {
                if a_blended {
                    b.depth.total_cmp(&a.depth)
                } else {
                    a.depth.total_cmp(&b.depth)
                }
            })
        });
    }

    fn draw(&mut self, scene: &Scene) {
        let output = match self.ctx.surface.get_current_texture() {
            wgpu::CurrentSurfaceTexture::Success(output)
            | wgpu::CurrentSurfaceTexture::Suboptimal(output) => output,
            wgpu::CurrentSurfaceTexture::Lost | wgpu::CurrentSurfaceTexture::Outdated => {
                log::warn!("Surface lost or outdated, reconfiguring");
                self.ctx.reconfigure();
                return;
            }
            e => {
                log::error!("Render error: {e:?}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(scene.background.clear_color().to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if scene.background.is_gradient() {
                pass.set_pipeline(&self.pipelines.gradient);
                pass.set_bind_group(0, &self.gradient_bind_group, &[]);
                pass.draw(0..3, 0..1);
            }

            pass.set_bind_group(0, &self.frame_bind_group, &[]);
            let mut current = None;
            for item in &self.draw_items {
                let Some(object) = self.objects.get(&item.node) else {
                    continue;
                };
                if current != Some(item.kind) {
                    pass.set_pipeline(self.pipelines.get(item.kind));
                    current = Some(item.kind);
                }
                object.draw(&mut pass, item.kind);
            }
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

fn uniform_binding(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    label: &str,
    size: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: size as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    (buffer, bind_group)
}

/// Window renderer.
///
/// Created without GPU state; [`Renderer::init`] attaches it to a window
/// once the platform hands one out. Frames rendered before that are no-ops.
pub struct Renderer {
    settings: RenderSettings,
    state: Option<GpuState>,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            state: None,
        }
    }

    /// Creates the device, surface and pipelines for `window`.
    pub async fn init(
        &mut self,
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<()> {
        let ctx = WgpuContext::new(window, &self.settings, width, height).await?;
        self.state = Some(GpuState::new(ctx));
        log::info!("Renderer initialized");
        Ok(())
    }

}

impl FrameRenderer for Renderer {
    fn resize(&mut self, width: u32, height: u32) {
        if let Some(state) = &mut self.state {
            state.ctx.resize(width, height);
        }
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        let Some(state) = &mut self.state else {
            return Ok(());
        };
        state.prepare(scene, camera);
        state.draw(scene);
        Ok(())
    }
}

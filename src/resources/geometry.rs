use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::resources::primitives;

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    #[must_use]
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }

    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Points are expanded to instanced quads by the renderer, so only
/// triangle lists ever reach the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Points,
}

/// Analytic description of a geometry in its local space.
///
/// Picking intersects rays against this instead of the triangle soup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned box centered at the origin.
    Box { half_extents: Vec3 },
    /// Sphere centered at the origin.
    Sphere { radius: f32 },
    /// Capped cone centered at the origin, apex on +Y.
    Cone { radius: f32, height: f32 },
    /// Unstructured point cloud.
    Points,
}

/// CPU-side geometry: interleaved vertices, optional indices, and the
/// shape they were tessellated from.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub shape: Shape,
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    #[must_use]
    pub fn new_box(width: f32, height: f32, depth: f32) -> Self {
        primitives::create_box(width, height, depth)
    }

    #[must_use]
    pub fn new_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        primitives::create_sphere(&primitives::SphereOptions {
            radius,
            width_segments,
            height_segments,
        })
    }

    #[must_use]
    pub fn new_cone(radius: f32, height: f32, radial_segments: u32) -> Self {
        primitives::create_cone(radius, height, radial_segments)
    }

    #[must_use]
    pub fn new_points(positions: &[Vec3]) -> Self {
        primitives::create_points(positions)
    }

    #[must_use]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    #[must_use]
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }
}

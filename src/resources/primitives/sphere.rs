use std::f32::consts::PI;

use crate::resources::geometry::{Geometry, Shape, Topology, Vertex};

pub struct SphereOptions {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 32,
            height_segments: 16,
        }
    }
}

#[must_use]
pub fn create_sphere(options: &SphereOptions) -> Geometry {
    let radius = options.radius;
    let width_segments = options.width_segments.max(3);
    let height_segments = options.height_segments.max(2);

    let mut vertices = Vec::with_capacity(((width_segments + 1) * (height_segments + 1)) as usize);
    let mut indices = Vec::with_capacity((width_segments * height_segments * 6) as usize);

    for y in 0..=height_segments {
        // Latitude angle: 0 at the north pole, PI at the south pole
        let theta = y as f32 / height_segments as f32 * PI;
        let py = radius * theta.cos();
        let ring_radius = radius * theta.sin();

        for x in 0..=width_segments {
            let phi = x as f32 / width_segments as f32 * 2.0 * PI;
            let px = -ring_radius * phi.cos();
            let pz = ring_radius * phi.sin();

            let normal = if radius > 0.0 {
                [px / radius, py / radius, pz / radius]
            } else {
                [0.0, 1.0, 0.0]
            };
            vertices.push(Vertex::new([px, py, pz], normal));
        }
    }

    // Two triangles per grid cell; the pole rows produce degenerate
    // triangles, which the rasterizer discards.
    let stride = width_segments + 1;
    for y in 0..height_segments {
        for x in 0..width_segments {
            let a = y * stride + x + 1;
            let b = y * stride + x;
            let c = (y + 1) * stride + x;
            let d = (y + 1) * stride + x + 1;

            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Geometry {
        shape: Shape::Sphere { radius },
        topology: Topology::Triangles,
        vertices,
        indices,
    }
}

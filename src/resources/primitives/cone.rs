use std::f32::consts::PI;

use glam::Vec3;

use crate::resources::geometry::{Geometry, Shape, Topology, Vertex};

/// Capped cone centered at the origin with its apex on +Y.
///
/// The side uses one apex vertex per segment so each column keeps its own
/// slanted normal.
#[must_use]
pub fn create_cone(radius: f32, height: f32, radial_segments: u32) -> Geometry {
    let segments = radial_segments.max(3);
    let half_height = height * 0.5;
    let slope = if height > 0.0 { radius / height } else { 0.0 };

    let mut vertices = Vec::with_capacity(((segments + 1) * 3 + 1) as usize);
    let mut indices = Vec::with_capacity((segments * 6) as usize);

    let ring = |x: u32| {
        let theta = x as f32 / segments as f32 * 2.0 * PI;
        (theta.sin(), theta.cos())
    };

    // === Side ===
    // Rows: apex (y = +h/2), then base ring (y = -h/2)
    for row in 0..2 {
        for x in 0..=segments {
            let (sin, cos) = ring(x);
            let r = if row == 0 { 0.0 } else { radius };
            let y = if row == 0 { half_height } else { -half_height };
            let normal = Vec3::new(sin, slope, cos).normalize();
            vertices.push(Vertex::new([r * sin, y, r * cos], normal.to_array()));
        }
    }

    let stride = segments + 1;
    for x in 0..segments {
        let bottom = stride + x;
        let bottom_next = stride + x + 1;
        let apex_next = x + 1;
        indices.extend_from_slice(&[bottom, bottom_next, apex_next]);
    }

    // === Base cap ===
    let center = vertices.len() as u32;
    vertices.push(Vertex::new([0.0, -half_height, 0.0], [0.0, -1.0, 0.0]));
    let cap_start = vertices.len() as u32;
    for x in 0..=segments {
        let (sin, cos) = ring(x);
        vertices.push(Vertex::new(
            [radius * sin, -half_height, radius * cos],
            [0.0, -1.0, 0.0],
        ));
    }
    for x in 0..segments {
        let i = cap_start + x;
        indices.extend_from_slice(&[i + 1, i, center]);
    }

    Geometry {
        shape: Shape::Cone { radius, height },
        topology: Topology::Triangles,
        vertices,
        indices,
    }
}

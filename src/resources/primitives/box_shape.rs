use glam::Vec3;

use crate::resources::geometry::{Geometry, Shape, Topology, Vertex};

/// Unit face directions with their in-plane axes, ordered so that
/// `u × v == normal` (counter-clockwise when viewed from outside).
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    // Front (+Z)
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    // Back (-Z)
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    // Top (+Y)
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    // Bottom (-Y)
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    // Right (+X)
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    // Left (-X)
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
];

#[must_use]
pub fn create_box(width: f32, height: f32, depth: f32) -> Geometry {
    let half = Vec3::new(width, height, depth) * 0.5;

    // 24 vertices (4 per face), all 4 sharing the face normal
    let mut vertices = Vec::with_capacity(24);
    for (normal, u, v) in FACES {
        let (n, u, v) = (Vec3::from(normal), Vec3::from(u), Vec3::from(v));
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let p = (n + u * su + v * sv) * half;
            vertices.push(Vertex::new(p.to_array(), normal));
        }
    }

    // 2 triangles per face, CCW: 0, 1, 2,  0, 2, 3
    let indices = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    Geometry {
        shape: Shape::Box { half_extents: half },
        topology: Topology::Triangles,
        vertices,
        indices,
    }
}

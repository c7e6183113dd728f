use glam::Vec3;

use crate::resources::geometry::{Geometry, Shape, Topology, Vertex};

/// Non-indexed point cloud. Normals are unused by the points pipeline.
#[must_use]
pub fn create_points(positions: &[Vec3]) -> Geometry {
    let vertices = positions
        .iter()
        .map(|p| Vertex::new(p.to_array(), [0.0, 0.0, 0.0]))
        .collect();

    Geometry {
        shape: Shape::Points,
        topology: Topology::Points,
        vertices,
        indices: Vec::new(),
    }
}

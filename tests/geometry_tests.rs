//! Geometry Tests
//!
//! Tests for:
//! - Primitive tessellation (box, sphere, cone, points)
//! - Vertex and index counts, index bounds
//! - Normals and analytic shapes

use glam::Vec3;

use scene_tween::resources::geometry::{Geometry, Shape, Topology, Vertex};

const EPSILON: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_indices_in_bounds(geometry: &Geometry) {
    let count = geometry.vertex_count();
    assert!(geometry.indices.iter().all(|&i| i < count));
    assert_eq!(geometry.index_count() % 3, 0);
}

fn assert_unit_normals(geometry: &Geometry) {
    for v in &geometry.vertices {
        let n = Vec3::from(v.normal);
        assert!(approx(n.length(), 1.0), "normal {n} is not unit length");
    }
}

// ============================================================================
// Vertex Layout
// ============================================================================

#[test]
fn vertex_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    let layout = Vertex::layout();
    assert_eq!(layout.array_stride, 24);
    assert_eq!(layout.attributes.len(), 2);
    assert_eq!(layout.attributes[1].offset, 12);
}

// ============================================================================
// Box
// ============================================================================

#[test]
fn box_has_four_vertices_per_face() {
    let geometry = Geometry::new_box(0.7, 0.7, 0.7);
    assert_eq!(geometry.vertex_count(), 24);
    assert_eq!(geometry.index_count(), 36);
    assert_eq!(geometry.topology, Topology::Triangles);
    assert!(geometry.is_indexed());
    assert_indices_in_bounds(&geometry);
    assert_unit_normals(&geometry);
}

#[test]
fn box_spans_its_extents() {
    let geometry = Geometry::new_box(1.0, 2.0, 3.0);
    assert_eq!(
        geometry.shape,
        Shape::Box {
            half_extents: Vec3::new(0.5, 1.0, 1.5)
        }
    );

    let max = geometry
        .vertices
        .iter()
        .fold(Vec3::splat(f32::NEG_INFINITY), |acc, v| acc.max(Vec3::from(v.position)));
    let min = geometry
        .vertices
        .iter()
        .fold(Vec3::splat(f32::INFINITY), |acc, v| acc.min(Vec3::from(v.position)));
    assert_eq!(max, Vec3::new(0.5, 1.0, 1.5));
    assert_eq!(min, Vec3::new(-0.5, -1.0, -1.5));
}

#[test]
fn box_normals_point_outwards() {
    let geometry = Geometry::new_box(1.0, 1.0, 1.0);
    for v in &geometry.vertices {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        // Each face normal is the axis on which the vertex sits at the extent
        assert!(approx(p.dot(n), 0.5));
    }
}

// ============================================================================
// Sphere
// ============================================================================

#[test]
fn sphere_grid_counts() {
    let geometry = Geometry::new_sphere(0.7, 32, 32);
    assert_eq!(geometry.vertex_count(), 33 * 33);
    assert_eq!(geometry.index_count(), 32 * 32 * 6);
    assert_eq!(geometry.shape, Shape::Sphere { radius: 0.7 });
    assert_indices_in_bounds(&geometry);
}

#[test]
fn sphere_vertices_lie_on_surface() {
    let geometry = Geometry::new_sphere(0.7, 16, 12);
    for v in &geometry.vertices {
        let p = Vec3::from(v.position);
        assert!(approx(p.length(), 0.7));
        assert!((Vec3::from(v.normal) - p / 0.7).length() < EPSILON);
    }
}

#[test]
fn sphere_segments_are_clamped() {
    let geometry = Geometry::new_sphere(1.0, 1, 1);
    assert_eq!(geometry.vertex_count(), 4 * 3);
    assert_eq!(geometry.index_count(), 3 * 2 * 6);
}

// ============================================================================
// Cone
// ============================================================================

#[test]
fn cone_counts() {
    let geometry = Geometry::new_cone(0.7, 1.4, 32);
    // Apex row + base row, then cap center + cap ring
    assert_eq!(geometry.vertex_count(), 33 * 2 + 1 + 33);
    assert_eq!(geometry.index_count(), 32 * 3 * 2);
    assert_indices_in_bounds(&geometry);
    assert_unit_normals(&geometry);
}

#[test]
fn cone_is_centered_with_apex_up() {
    let geometry = Geometry::new_cone(0.7, 1.4, 8);
    assert_eq!(
        geometry.shape,
        Shape::Cone {
            radius: 0.7,
            height: 1.4
        }
    );

    let top = geometry
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::NEG_INFINITY, f32::max);
    let bottom = geometry
        .vertices
        .iter()
        .map(|v| v.position[1])
        .fold(f32::INFINITY, f32::min);
    assert!(approx(top, 0.7));
    assert!(approx(bottom, -0.7));

    // Every vertex at the apex height is on the axis
    for v in geometry.vertices.iter().filter(|v| approx(v.position[1], 0.7)) {
        assert!(approx(v.position[0], 0.0) && approx(v.position[2], 0.0));
    }
}

#[test]
fn cone_side_normals_tilt_upwards() {
    let geometry = Geometry::new_cone(1.0, 1.0, 16);
    let side_normals = geometry
        .vertices
        .iter()
        .map(|v| Vec3::from(v.normal))
        .filter(|n| n.y > 0.0);
    for n in side_normals {
        // slope = radius / height = 1, so 45 degrees
        assert!(approx(n.y, std::f32::consts::FRAC_1_SQRT_2));
    }
}

// ============================================================================
// Points
// ============================================================================

#[test]
fn points_keep_positions_and_skip_indices() {
    let positions = [Vec3::ZERO, Vec3::ONE, Vec3::new(-3.0, 2.0, 1.0)];
    let geometry = Geometry::new_points(&positions);

    assert_eq!(geometry.topology, Topology::Points);
    assert_eq!(geometry.shape, Shape::Points);
    assert!(!geometry.is_indexed());
    assert_eq!(geometry.vertex_count(), 3);
    assert_eq!(geometry.index_count(), 0);

    let stored: Vec<Vec3> = geometry.vertices.iter().map(|v| Vec3::from(v.position)).collect();
    assert_eq!(stored, positions);
}

#[test]
fn empty_point_cloud_is_valid() {
    let geometry = Geometry::new_points(&[]);
    assert_eq!(geometry.vertex_count(), 0);
    assert!(!geometry.is_indexed());
}

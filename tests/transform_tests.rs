//! Transform and TransformSystem tests
//!
//! Tests for:
//! - Transform TRS operations and dirty checking
//! - Euler angle round-trip
//! - look_at orientation
//! - Hierarchical matrix propagation
//! - Camera matrices and ray construction

use std::f32::consts::FRAC_PI_2;

use glam::{Affine3A, Quat, Vec2, Vec3};
use scene_tween::scene::transform::Transform;
use scene_tween::scene::{Camera, NodeHandle, Scene};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// ============================================================================
// Transform Unit Tests
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
}

#[test]
fn transform_update_local_matrix_dirty_check() {
    let mut t = Transform::new();

    // First call always rebuilds
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.position = Vec3::new(1.0, 2.0, 3.0);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.rotation = Quat::from_rotation_y(FRAC_PI_2);
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    // Tweened scales go through the same path
    t.scale = Vec3::ZERO;
    assert!(t.update_local_matrix());
    assert!(!t.update_local_matrix());

    t.mark_dirty();
    assert!(t.update_local_matrix());
}

#[test]
fn transform_local_matrix_reflects_trs() {
    let mut t = Transform::from_position(Vec3::new(10.0, 20.0, 30.0));
    t.scale = Vec3::splat(2.0);
    t.update_local_matrix();

    let point = t.local_matrix().transform_point3(Vec3::ONE);
    assert!(vec3_approx(point, Vec3::new(12.0, 22.0, 32.0)));
}

#[test]
fn transform_euler_round_trip() {
    let mut t = Transform::new();
    t.set_rotation_euler(0.3, -0.5, 0.7);
    assert!(vec3_approx(t.rotation_euler(), Vec3::new(0.3, -0.5, 0.7)));
}

#[test]
fn transform_look_at_points_negative_z_at_target() {
    let mut t = Transform::from_position(Vec3::new(0.0, 0.0, 5.0));
    t.look_at(Vec3::new(5.0, 0.0, 5.0), Vec3::Y);

    let forward = t.rotation * Vec3::NEG_Z;
    assert!(vec3_approx(forward, Vec3::X));
}

#[test]
fn transform_look_at_along_up_is_ignored() {
    let mut t = Transform::new();
    t.rotation = Quat::from_rotation_x(0.25);
    t.look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::Y);
    assert_eq!(t.rotation, Quat::from_rotation_x(0.25));
}

// ============================================================================
// Hierarchy Propagation
// ============================================================================

fn chain(scene: &mut Scene, depth: usize) -> Vec<NodeHandle> {
    let mut handles: Vec<NodeHandle> = Vec::with_capacity(depth);
    for i in 0..depth {
        let mut builder = scene.build_node(&format!("n{i}")).with_position(1.0, 0.0, 0.0);
        if let Some(&parent) = handles.last() {
            builder = builder.with_parent(parent);
        }
        handles.push(builder.build());
    }
    handles
}

fn world(scene: &Scene, handle: NodeHandle) -> Affine3A {
    *scene.get_node(handle).unwrap().transform.world_matrix()
}

#[test]
fn hierarchy_accumulates_translations() {
    let mut scene = Scene::new();
    let handles = chain(&mut scene, 4);
    scene.update_transforms();

    for (depth, &h) in handles.iter().enumerate() {
        assert!(vec3_approx(
            Vec3::from(world(&scene, h).translation),
            Vec3::new((depth + 1) as f32, 0.0, 0.0)
        ));
    }
}

#[test]
fn hierarchy_propagates_parent_change_to_unchanged_children() {
    let mut scene = Scene::new();
    let handles = chain(&mut scene, 3);
    scene.update_transforms();

    scene.get_node_mut(handles[0]).unwrap().transform.scale = Vec3::splat(2.0);
    scene.update_transforms();

    // 1 + 2 * 1 + 2 * 1
    let leaf = world(&scene, handles[2]);
    assert!(vec3_approx(Vec3::from(leaf.translation), Vec3::new(5.0, 0.0, 0.0)));
}

#[test]
fn hierarchy_zero_scale_collapses_subtree() {
    let mut scene = Scene::new();
    let handles = chain(&mut scene, 2);
    scene.get_node_mut(handles[0]).unwrap().transform.scale = Vec3::ZERO;
    scene.update_transforms();

    let leaf = world(&scene, handles[1]);
    assert!(approx_eq(leaf.matrix3.determinant(), 0.0));
}

#[test]
fn hierarchy_update_after_subtree_removal() {
    let mut scene = Scene::new();
    let handles = chain(&mut scene, 2);
    let detached = scene.build_node("detached").with_position(3.0, 0.0, 0.0).build();
    scene.update_transforms();

    // Removing the root drops the whole chain; the remaining root still updates
    scene.remove_node(handles[0]);
    scene.get_node_mut(detached).unwrap().transform.position.y = 1.0;
    scene.update_transforms();
    assert_eq!(scene.world_position(detached), Some(Vec3::new(3.0, 1.0, 0.0)));
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn camera_aspect_ignores_zero_size() {
    let mut camera = Camera::default();
    camera.set_aspect(1600, 800);
    assert!(approx_eq(camera.aspect, 2.0));

    camera.set_aspect(0, 800);
    assert!(approx_eq(camera.aspect, 2.0));
}

#[test]
fn camera_projects_target_to_center() {
    let mut camera = Camera::new_perspective(75.0, 1.5, 0.1, 1000.0);
    camera.transform.position = Vec3::new(0.0, 0.0, 5.0);
    camera.update_matrices();

    let clip = *camera.view_projection_matrix() * Vec3::ZERO.extend(1.0);
    assert!(approx_eq(clip.x / clip.w, 0.0));
    assert!(approx_eq(clip.y / clip.w, 0.0));
    let depth = clip.z / clip.w;
    assert!((0.0..=1.0).contains(&depth));
}

#[test]
fn camera_center_ray_points_forward() {
    let mut camera = Camera::default();
    camera.transform.position = Vec3::new(0.0, 0.0, 5.0);

    let ray = camera.ray_from_ndc(Vec2::ZERO);
    assert!(vec3_approx(ray.origin, Vec3::new(0.0, 0.0, 5.0)));
    assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn camera_edge_ray_matches_field_of_view() {
    let mut camera = Camera::new_perspective(90.0, 1.0, 0.1, 100.0);
    camera.transform.position = Vec3::new(0.0, 0.0, 5.0);

    // Top edge of a 90 degree frustum is 45 degrees up
    let ray = camera.ray_from_ndc(Vec2::new(0.0, 1.0));
    let expected = Vec3::new(0.0, 1.0, -1.0).normalize();
    assert!((ray.direction - expected).length() < 1e-4);
}

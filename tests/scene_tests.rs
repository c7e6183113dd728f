//! Scene Integration Tests
//!
//! Tests for:
//! - Node creation and removal, including descendants and components
//! - Attach/detach hierarchy bookkeeping
//! - Component queries (meshes, lights) and visibility filtering
//! - Backgrounds

use glam::Vec3;
use scene_tween::resources::{Color, Geometry, Material, Mesh};
use scene_tween::scene::light::LightKind;
use scene_tween::scene::{Background, Light, Node, Scene};

fn box_mesh() -> Mesh {
    Mesh::new(
        Geometry::new_box(1.0, 1.0, 1.0),
        Material::new_basic(Color::WHITE),
    )
}

// ============================================================================
// Node Creation & Removal
// ============================================================================

#[test]
fn add_node_registers_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::with_name("root"));

    assert!(scene.contains(handle));
    assert_eq!(scene.root_nodes(), &[handle]);
    assert_eq!(scene.get_node(handle).unwrap().name, "root");
    assert_eq!(scene.node_count(), 1);
}

#[test]
fn builder_sets_transform_and_mesh() {
    let mut scene = Scene::new();
    let handle = scene
        .build_node("button")
        .with_position(1.0, 2.0, 3.0)
        .with_scale(0.0)
        .with_mesh(box_mesh())
        .build();

    let node = scene.get_node(handle).unwrap();
    assert_eq!(node.transform.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(node.transform.scale, Vec3::ZERO);
    assert!(scene.mesh(handle).is_some());
    assert_eq!(scene.find_node_by_name("button"), Some(handle));
}

#[test]
fn remove_node_drops_descendants_and_components() {
    let mut scene = Scene::new();
    let parent = scene.add_mesh("parent", box_mesh());
    let child = scene.build_node("child").with_parent(parent).build();
    let grandchild = scene
        .build_node("grandchild")
        .with_parent(child)
        .with_mesh(box_mesh())
        .build();
    let sibling = scene.add_mesh("sibling", box_mesh());

    scene.remove_node(parent);

    assert!(!scene.contains(parent));
    assert!(!scene.contains(child));
    assert!(!scene.contains(grandchild));
    assert!(scene.mesh(parent).is_none());
    assert!(scene.mesh(grandchild).is_none());
    assert!(scene.contains(sibling));
    assert_eq!(scene.root_nodes(), &[sibling]);
    assert_eq!(scene.iter_meshes().count(), 1);
}

#[test]
fn remove_missing_node_is_noop() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new());
    scene.remove_node(handle);
    scene.remove_node(handle);
    assert_eq!(scene.node_count(), 0);
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn attach_moves_node_between_parents() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::with_name("a"));
    let b = scene.add_node(Node::with_name("b"));
    let child = scene.add_node(Node::with_name("child"));

    scene.attach(child, a);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(a));
    assert_eq!(scene.get_node(a).unwrap().children(), &[child]);
    assert!(!scene.root_nodes().contains(&child));

    scene.attach(child, b);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(b));
    assert!(scene.get_node(a).unwrap().children().is_empty());
    assert_eq!(scene.get_node(b).unwrap().children(), &[child]);
}

#[test]
fn attach_to_self_is_rejected() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new());
    scene.attach(a, a);
    assert_eq!(scene.get_node(a).unwrap().parent(), None);
    assert_eq!(scene.root_nodes(), &[a]);
}

#[test]
fn attach_under_descendant_is_rejected() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::with_name("a"));
    let b = scene.build_node("b").with_parent(a).build();
    let c = scene.build_node("c").with_parent(b).build();

    scene.attach(a, c);
    assert_eq!(scene.get_node(a).unwrap().parent(), None);
    assert!(scene.get_node(c).unwrap().children().is_empty());
    scene.update_transforms();
}

#[test]
fn child_world_position_follows_parent() {
    let mut scene = Scene::new();
    let parent = scene.build_node("parent").with_position(1.0, 0.0, 0.0).build();
    let child = scene
        .build_node("child")
        .with_position(0.0, 2.0, 0.0)
        .with_parent(parent)
        .build();

    scene.update_transforms();
    assert_eq!(scene.world_position(child), Some(Vec3::new(1.0, 2.0, 0.0)));

    scene.get_node_mut(parent).unwrap().transform.position.x = 5.0;
    scene.update_transforms();
    assert_eq!(scene.world_position(child), Some(Vec3::new(5.0, 2.0, 0.0)));
}

// ============================================================================
// Components
// ============================================================================

#[test]
fn invisible_nodes_are_skipped() {
    let mut scene = Scene::new();
    let shown = scene.add_mesh("shown", box_mesh());
    let hidden = scene.add_mesh("hidden", box_mesh());
    scene.add_light(Light::new_ambient(Color::WHITE, 1.0));
    let hidden_light = scene.add_light(Light::new_ambient(Color::WHITE, 1.0));

    scene.get_node_mut(hidden).unwrap().visible = false;
    scene.get_node_mut(hidden_light).unwrap().visible = false;

    let meshes: Vec<_> = scene.iter_meshes().map(|(h, _, _)| h).collect();
    assert_eq!(meshes, vec![shown]);
    assert_eq!(scene.iter_lights().count(), 1);
}

#[test]
fn directional_light_direction_is_normalized() {
    let light = Light::new_directional(Color::WHITE, 1.0, Vec3::new(0.0, 1.0, 1.0));
    let LightKind::Directional { direction } = light.kind else {
        panic!("expected a directional light");
    };
    assert!((direction.length() - 1.0).abs() < 1e-6);
    assert!((direction.y - direction.z).abs() < 1e-6);
}

#[test]
fn light_radiance_scales_color() {
    let light = Light::new_ambient(Color::new(0.5, 0.25, 1.0), 2.0);
    assert_eq!(light.radiance(), Color::new(1.0, 0.5, 2.0));
}

// ============================================================================
// Background
// ============================================================================

#[test]
fn default_background_is_black() {
    let scene = Scene::new();
    assert_eq!(scene.background, Background::Color(Color::BLACK));
    assert!(!scene.background.is_gradient());
}

#[test]
fn gradient_samples_between_stops() {
    let top = Color::new(0.0, 0.0, 1.0);
    let middle = Color::new(1.0, 0.0, 0.0);
    let bottom = Color::new(1.0, 1.0, 0.0);
    let background = Background::gradient([(1.0, bottom), (0.0, top), (0.5, middle)]);

    assert!(background.is_gradient());
    assert_eq!(background.sample(0.0), top);
    assert_eq!(background.sample(0.5), middle);
    assert_eq!(background.sample(1.0), bottom);
    assert_eq!(background.sample(-1.0), top);
    assert_eq!(background.clear_color(), top);

    // Blended in sRGB: halfway is sRGB 0.5, not linear 0.5
    let quarter = background.sample(0.25);
    assert!((quarter.r - 0.214_041).abs() < 1e-4);
    assert!((quarter.b - 0.214_041).abs() < 1e-4);
}

#[test]
fn gradient_blends_hex_stops_like_a_canvas() {
    let background = Background::gradient([
        (0.0, Color::from_hex(0x1a2a6c)),
        (0.5, Color::from_hex(0xb21f1f)),
        (1.0, Color::from_hex(0xfdbb2d)),
    ]);

    // Halfway between #1a2a6c and #b21f1f in sRGB is about #662446
    let expected = Color::from_hex(0x662446);
    let sampled = background.sample(0.25);
    assert!((sampled.r - expected.r).abs() < 2e-3);
    assert!((sampled.g - expected.g).abs() < 2e-3);
    assert!((sampled.b - expected.b).abs() < 2e-3);
}

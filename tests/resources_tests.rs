//! Resource Component Tests
//!
//! Tests for:
//! - Color: sRGB hex conversion, string parsing, interpolation
//! - Material: constructors, clamping, PBR parameters
//! - Mesh: pickability and pipeline selection
//! - GPU uniform layouts

use glam::{Mat4, Vec3};

use scene_tween::renderer::uniforms::{FrameUniforms, GradientUniforms, ObjectUniforms};
use scene_tween::renderer::{PipelineKind, pipeline_kind};
use scene_tween::resources::{Color, Geometry, Material, MaterialKind, Mesh};
use scene_tween::scene::{Background, Camera, Light, Scene};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// Color
// ============================================================================

#[test]
fn hex_channels_are_linearized() {
    let c = Color::from_hex(0x0077ff);
    assert_eq!(c.r, 0.0);
    assert!(approx(c.b, 1.0));
    // sRGB 0x77 is roughly 0.184 linear
    assert!((c.g - 0.184).abs() < 1e-3);
}

#[test]
fn hex_dark_channels_use_linear_segment() {
    let c = Color::from_hex(0x010101);
    assert!(approx(c.r, 1.0 / 255.0 / 12.92));
}

#[test]
fn hex_string_matches_packed_value() {
    assert_eq!(Color::from_hex_str("#0077ff"), Some(Color::from_hex(0x0077ff)));
    assert_eq!(Color::from_hex_str("#FF0000"), Some(Color::RED));
    assert_eq!(Color::from_hex_str(""), None);
    assert_eq!(Color::from_hex_str("#0077ff00"), None);
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = Color::from_hex(0x0077ff);
    let b = Color::RED;
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);

    let mid = Color::BLACK.lerp(Color::WHITE, 0.25);
    assert_eq!(mid, Color::new(0.25, 0.25, 0.25));
}

#[test]
fn color_conversions() {
    let c = Color::new(0.1, 0.2, 0.3);
    assert_eq!(c.to_vec3(), Vec3::new(0.1, 0.2, 0.3));
    assert_eq!(c.to_vec4(0.5).w, 0.5);
    assert_eq!(Color::from(Vec3::new(0.1, 0.2, 0.3)), c);
    assert_eq!(c.scaled(2.0), Color::new(0.2, 0.4, 0.6));

    let wgpu_color = Color::WHITE.to_wgpu();
    assert_eq!(wgpu_color.a, 1.0);
    assert_eq!(wgpu_color.r, 1.0);
}

// ============================================================================
// Material
// ============================================================================

#[test]
fn standard_material_clamps_parameters() {
    let m = Material::new_standard(Color::WHITE, 1.5, -0.2);
    assert_eq!(m.pbr_params(), Some((1.0, 0.0)));
    assert_eq!(m.opacity, 1.0);
    assert!(!m.transparent);
}

#[test]
fn unlit_materials_have_no_pbr_params() {
    assert_eq!(Material::new_basic(Color::WHITE).pbr_params(), None);
    let points = Material::new_points(Color::WHITE, 0.1);
    assert_eq!(points.pbr_params(), None);
    assert_eq!(points.kind, MaterialKind::Points { size: 0.1 });
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(Material::default().with_opacity(2.0).opacity, 1.0);
    assert_eq!(Material::default().with_opacity(-1.0).opacity, 0.0);
}

// ============================================================================
// Mesh
// ============================================================================

#[test]
fn only_triangle_meshes_are_pickable() {
    let cube = Mesh::new(Geometry::new_box(1.0, 1.0, 1.0), Material::default());
    let stars = Mesh::new(
        Geometry::new_points(&[Vec3::ZERO]),
        Material::new_points(Color::WHITE, 0.1),
    );
    assert!(cube.is_pickable());
    assert!(!stars.is_pickable());
}

#[test]
fn pipeline_follows_topology_and_blending() {
    let opaque = Mesh::new(Geometry::new_box(1.0, 1.0, 1.0), Material::default());
    let faded = Mesh::new(
        Geometry::new_box(1.0, 1.0, 1.0),
        Material::default().with_opacity(0.5),
    );
    let flagged = Mesh::new(
        Geometry::new_sphere(1.0, 8, 8),
        Material::default().with_transparent(true),
    );
    let stars = Mesh::new(
        Geometry::new_points(&[Vec3::ZERO]),
        Material::new_points(Color::WHITE, 0.1).with_transparent(true),
    );

    assert_eq!(pipeline_kind(&opaque), PipelineKind::Opaque);
    assert_eq!(pipeline_kind(&faded), PipelineKind::Transparent);
    assert_eq!(pipeline_kind(&flagged), PipelineKind::Transparent);
    assert_eq!(pipeline_kind(&stars), PipelineKind::Points);
}

// ============================================================================
// Uniform Layouts
// ============================================================================

#[test]
fn uniform_sizes_are_16_byte_aligned() {
    assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<ObjectUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<GradientUniforms>() % 16, 0);
}

#[test]
fn frame_uniforms_collect_lights() {
    let mut scene = Scene::new();
    scene.add_light(Light::new_ambient(Color::WHITE, 0.5));
    scene.add_light(Light::new_ambient(Color::WHITE, 0.25));
    scene.add_light(Light::new_directional(Color::WHITE, 1.0, Vec3::Y));

    let uniforms = FrameUniforms::new(&scene, &Camera::default(), 800, 600);
    assert_eq!(uniforms.light_count[0], 1);
    assert!(approx(uniforms.ambient.x, 0.75));
}

#[test]
fn object_uniforms_flag_lit_materials() {
    let lit = ObjectUniforms::new(
        Mat4::IDENTITY,
        &Material::new_standard(Color::WHITE, 0.5, 0.8),
    );
    let unlit = ObjectUniforms::new(Mat4::IDENTITY, &Material::new_basic(Color::WHITE));
    assert_eq!(lit.params.w, 1.0);
    assert_eq!(unlit.params.w, 0.0);
    assert!(approx(lit.params.x, 0.5));

    // Zero-scale models keep a usable normal matrix
    let collapsed = ObjectUniforms::new(Mat4::ZERO, &Material::default());
    assert_eq!(collapsed.normal_matrix, Mat4::IDENTITY);
}

#[test]
fn gradient_uniforms_only_for_gradients() {
    assert!(GradientUniforms::from_background(&Background::Color(Color::BLACK)).is_none());

    let gradient = Background::gradient([(0.0, Color::BLACK), (1.0, Color::WHITE)]);
    let uniforms = GradientUniforms::from_background(&gradient).unwrap();
    assert_eq!(uniforms.count[0], 2);
}

#[test]
fn gradient_uniforms_upload_srgb_stops() {
    let gradient = Background::gradient([
        (0.0, Color::from_hex(0x1a2a6c)),
        (1.0, Color::from_hex(0xfdbb2d)),
    ]);
    let uniforms = GradientUniforms::from_background(&gradient).unwrap();
    assert!((uniforms.colors[0].x - 26.0 / 255.0).abs() < 1e-4);
    assert!((uniforms.colors[1].y - 187.0 / 255.0).abs() < 1e-4);
    assert_eq!(uniforms.colors[1].w, 1.0);
}

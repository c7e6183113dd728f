//! Demo Scene Tests
//!
//! Drives both demo scenes through the render loop with a headless renderer.
//!
//! Tests for:
//! - Floating buttons layout, entry and float animations, click handling
//! - Starfield population, seeding and star rotation
//! - Frame bookkeeping

use glam::{Vec2, Vec3};
use scene_tween::demos::floating_buttons::{self, FloatingButtonsConfig};
use scene_tween::demos::starfield::{self, StarSpin, StarfieldConfig};
use scene_tween::renderer::FrameRenderer;
use scene_tween::{Color, Engine, HeadlessRenderer, Property, TweenSpec};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn run_until(engine: &mut Engine, renderer: &mut HeadlessRenderer, end_ms: f64) {
    let mut t = engine.time_ms();
    while t < end_ms {
        t = (t + FRAME_MS).min(end_ms);
        engine.frame(renderer, t).unwrap();
    }
}

fn floating_engine() -> (Engine, Vec<scene_tween::NodeHandle>) {
    let mut engine = Engine::new();
    engine.resize(800, 600);
    let buttons = floating_buttons::build(&mut engine, &FloatingButtonsConfig::default()).unwrap();
    (engine, buttons)
}

// ============================================================================
// Floating Buttons
// ============================================================================

#[test]
fn floating_buttons_are_laid_out_and_hidden() {
    let (engine, buttons) = floating_engine();

    assert_eq!(buttons.len(), 3);
    let xs = [-1.5, 0.0, 1.5];
    for (i, (&button, &x)) in buttons.iter().zip(xs.iter()).enumerate() {
        let node = engine.scene.get_node(button).unwrap();
        assert_eq!(node.name, format!("button_{i}"));
        assert!((node.transform.position.x - x).abs() < 1e-6);
        assert_eq!(node.transform.scale, Vec3::ZERO);
    }

    assert_eq!(engine.scene.iter_lights().count(), 2);
    assert_eq!(engine.camera.position(), Vec3::new(0.0, 0.0, 5.0));

    // One entry tween and one float leg per button
    assert_eq!(engine.tweens.len(), 6);
}

#[test]
fn floating_button_entries_are_staggered() {
    let (mut engine, buttons) = floating_engine();
    let mut renderer = HeadlessRenderer::new(800, 600);

    run_until(&mut engine, &mut renderer, 300.0);
    let scale = |engine: &Engine, i: usize| engine.scene.get_node(buttons[i]).unwrap().transform.scale;
    assert_ne!(scale(&engine, 0), Vec3::ZERO);
    assert_ne!(scale(&engine, 1), Vec3::ZERO);
    // Third button waits 400ms
    assert_eq!(scale(&engine, 2), Vec3::ZERO);

    run_until(&mut engine, &mut renderer, 1400.0);
    for i in 0..3 {
        assert_eq!(scale(&engine, i), Vec3::ONE);
    }

    // Only the float legs remain
    assert_eq!(engine.tweens.len(), 3);
}

#[test]
fn floating_buttons_bob_within_bounds_forever() {
    let (mut engine, buttons) = floating_engine();
    let mut renderer = HeadlessRenderer::new(800, 600);

    let mut highest = f32::NEG_INFINITY;
    let mut lowest = f32::INFINITY;
    let mut t = 0.0;
    while t < 12_000.0 {
        t += FRAME_MS;
        engine.frame(&mut renderer, t).unwrap();
        for &button in &buttons {
            let y = engine.scene.get_node(button).unwrap().transform.position.y;
            assert!(y.abs() <= 0.2 + 1e-5, "y = {y} at {t}ms");
            highest = highest.max(y);
            lowest = lowest.min(y);
        }
    }

    assert!(highest > 0.19);
    assert!(lowest < -0.19);
    assert_eq!(engine.tweens.len(), 3);
}

#[test]
fn floating_buttons_render_as_opaque_meshes() {
    let (mut engine, _) = floating_engine();
    let mut renderer = HeadlessRenderer::new(800, 600);
    engine.frame(&mut renderer, 0.0).unwrap();

    let frame = renderer.last_frame().unwrap();
    assert_eq!(frame.opaque, 3);
    assert_eq!(frame.points, 0);
    assert!(!frame.gradient_background);
}

#[test]
fn fading_button_moves_to_transparent_pass() {
    let (mut engine, buttons) = floating_engine();
    let mut renderer = HeadlessRenderer::new(800, 600);
    engine
        .schedule(TweenSpec::new(buttons[0], Property::OPACITY, 0.5_f32).duration(100.0))
        .unwrap();

    run_until(&mut engine, &mut renderer, 200.0);
    let frame = renderer.last_frame().unwrap();
    assert_eq!(frame.opaque, 2);
    assert_eq!(frame.transparent, 1);
}

#[test]
fn clicked_button_flashes_during_float() {
    let (mut engine, buttons) = floating_engine();
    let mut renderer = HeadlessRenderer::new(800, 600);
    let config = FloatingButtonsConfig::default();
    run_until(&mut engine, &mut renderer, 2000.0);

    let flash = config
        .click
        .handle_click(&mut engine, Vec2::ZERO, &buttons)
        .unwrap()
        .expect("middle button is under the cursor");
    assert_eq!(flash.node, buttons[1]);

    run_until(&mut engine, &mut renderer, 2300.0);
    assert_eq!(engine.scene.mesh(buttons[1]).unwrap().material.color, Color::RED);

    run_until(&mut engine, &mut renderer, 2800.0);
    assert_eq!(engine.scene.mesh(buttons[1]).unwrap().material.color, config.color);
}

#[test]
fn click_during_entry_misses_invisible_buttons() {
    let (mut engine, buttons) = floating_engine();
    let config = FloatingButtonsConfig::default();

    let flash = config
        .click
        .handle_click(&mut engine, Vec2::ZERO, &buttons)
        .unwrap();
    assert!(flash.is_none());
}

// ============================================================================
// Starfield
// ============================================================================

#[test]
fn starfield_is_populated() {
    let mut engine = Engine::new();
    let config = StarfieldConfig::default();
    let handles = starfield::build(&mut engine, &config);

    let stars = engine.scene.mesh(handles.stars).unwrap();
    assert_eq!(stars.geometry.vertex_count(), 1000);
    assert!(!stars.geometry.is_indexed());
    assert!(!stars.is_pickable());
    assert!(stars.material.transparent);
    assert!((stars.material.opacity - 0.8).abs() < 1e-6);

    assert_eq!(engine.scene.find_node_by_name("cube"), Some(handles.cube));
    assert_eq!(engine.scene.find_node_by_name("sphere"), Some(handles.sphere));
    assert_eq!(engine.scene.find_node_by_name("cone"), Some(handles.cone));
    assert_eq!(
        engine.scene.get_node(handles.cube).unwrap().transform.position,
        Vec3::new(-2.0, 0.0, 0.0)
    );
    assert_eq!(
        engine.scene.get_node(handles.cone).unwrap().transform.position,
        Vec3::new(2.0, 0.0, 0.0)
    );
    assert!(engine.scene.background.is_gradient());
}

#[test]
fn star_positions_are_seeded_and_bounded() {
    let config = StarfieldConfig::default();
    let a = starfield::star_positions(&config);
    let b = starfield::star_positions(&config);
    assert_eq!(a, b);
    assert!(a.iter().all(|p| p.abs().max_element() <= 25.0));

    let other = starfield::star_positions(&StarfieldConfig {
        seed: 7,
        ..config
    });
    assert_ne!(a, other);
}

#[test]
fn star_count_follows_config() {
    let config = StarfieldConfig {
        star_count: 10,
        ..StarfieldConfig::default()
    };
    assert_eq!(starfield::star_positions(&config).len(), 10);
}

#[test]
fn starfield_renders_gradient_points_and_meshes() {
    let mut engine = Engine::new();
    let handles = starfield::build(&mut engine, &StarfieldConfig::default());
    let mut renderer = HeadlessRenderer::new(800, 600);
    renderer.resize(1024, 768);
    engine.resize(1024, 768);

    engine.frame(&mut renderer, 0.0).unwrap();
    let frame = renderer.last_frame().unwrap();
    assert_eq!(frame.opaque, 3);
    assert_eq!(frame.points, 1);
    assert_eq!(frame.point_count, 1000);
    assert!(frame.gradient_background);
    assert_eq!(frame.draw_count(), 4);
    assert_eq!(frame.view_projection, *engine.camera.view_projection_matrix());
    assert_eq!(renderer.size(), (1024, 768));

    // Hidden stars are not drawn
    engine.scene.get_node_mut(handles.stars).unwrap().visible = false;
    engine.frame(&mut renderer, 16.0).unwrap();
    assert_eq!(renderer.last_frame().unwrap().points, 0);
}

#[test]
fn stars_spin_around_y() {
    let mut engine = Engine::new();
    let config = StarfieldConfig::default();
    let handles = starfield::build(&mut engine, &config);
    let mut spin = StarSpin::default();

    for _ in 0..100 {
        spin.step(&mut engine, handles.stars, config.star_rotation);
    }

    let rotation = engine.scene.get_node(handles.stars).unwrap().transform.rotation;
    let (axis, angle) = rotation.to_axis_angle();
    assert!((rotation.length() - 1.0).abs() < 1e-6);
    assert!((axis - Vec3::Y).length() < 1e-4);
    assert!((angle - config.star_rotation * 100.0).abs() < 1e-4);
}

#[test]
fn star_spin_stays_a_pure_rotation_over_long_runs() {
    let mut engine = Engine::new();
    let config = StarfieldConfig::default();
    let handles = starfield::build(&mut engine, &config);
    let mut spin = StarSpin::default();

    // About an hour at 60 fps
    let frames = 216_000;
    for _ in 0..frames {
        spin.step(&mut engine, handles.stars, config.star_rotation);
    }

    let expected = (f64::from(config.star_rotation) * f64::from(frames))
        .rem_euclid(std::f64::consts::TAU) as f32;
    assert!((spin.yaw() - expected).abs() < 1e-4);

    let rotation = engine.scene.get_node(handles.stars).unwrap().transform.rotation;
    assert!((rotation.length() - 1.0).abs() < 1e-6);
    let (axis, angle) = rotation.to_axis_angle();
    assert!((axis - Vec3::Y).length() < 1e-4);
    assert!((angle - expected).abs() < 1e-4);

    // Star cloud keeps its size
    engine.scene.update_transforms();
    let world = *engine.scene.get_node(handles.stars).unwrap().transform.world_matrix();
    assert!((world.transform_vector3(Vec3::X).length() - 1.0).abs() < 1e-5);
}

// ============================================================================
// Frame Loop
// ============================================================================

#[test]
fn frames_are_counted_and_timestamped() {
    let mut engine = Engine::new();
    let mut renderer = HeadlessRenderer::new(800, 600);

    for i in 1..=5 {
        engine.frame(&mut renderer, f64::from(i) * FRAME_MS).unwrap();
    }
    assert_eq!(engine.frame_count(), 5);
    assert_eq!(renderer.frames().len(), 5);
    assert!((engine.time_ms() - 5.0 * FRAME_MS).abs() < 1e-9);
}

#[test]
fn empty_scene_renders_nothing() {
    let mut engine = Engine::new();
    let mut renderer = HeadlessRenderer::new(800, 600);
    engine.frame(&mut renderer, 0.0).unwrap();

    let frame = renderer.last_frame().unwrap();
    assert_eq!(frame.draw_count(), 0);
    assert_eq!(frame.point_count, 0);
}

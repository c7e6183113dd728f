//! Starfield with three primitives under orbit controls.

use std::sync::Arc;

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use winit::window::Window;

use crate::app::AppHandler;
use crate::engine::Engine;
use crate::resources::{Color, Geometry, Material, Mesh};
use crate::scene::{Background, NodeHandle};
use crate::utils::{FrameState, OrbitControls};

#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub star_count: usize,
    /// Stars are spread uniformly over a cube of this edge length.
    pub spread: f32,
    pub star_size: f32,
    pub star_opacity: f32,
    /// Radians per frame around +Y.
    pub star_rotation: f32,
    /// Seed of the star placement.
    pub seed: u64,
    pub damping_factor: f32,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: 1000,
            spread: 50.0,
            star_size: 0.1,
            star_opacity: 0.8,
            star_rotation: 0.0005,
            seed: 0x5eed,
            damping_factor: 0.05,
        }
    }
}

/// Handles of the populated scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarfieldHandles {
    pub stars: NodeHandle,
    pub cube: NodeHandle,
    pub sphere: NodeHandle,
    pub cone: NodeHandle,
}

/// Star positions for `config`. The same seed always yields the same sky.
#[must_use]
pub fn star_positions(config: &StarfieldConfig) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let half = config.spread * 0.5;
    (0..config.star_count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            )
        })
        .collect()
}

pub fn build(engine: &mut Engine, config: &StarfieldConfig) -> StarfieldHandles {
    let scene = &mut engine.scene;

    scene.background = Background::gradient([
        (0.0, Color::from_hex(0x1a2a6c)),
        (0.5, Color::from_hex(0xb21f1f)),
        (1.0, Color::from_hex(0xfdbb2d)),
    ]);

    let stars = scene.add_mesh(
        "stars",
        Mesh::new(
            Geometry::new_points(&star_positions(config)),
            Material::new_points(Color::WHITE, config.star_size)
                .with_opacity(config.star_opacity)
                .with_transparent(true),
        ),
    );

    let cube = scene
        .build_node("cube")
        .with_position(-2.0, 0.0, 0.0)
        .with_mesh(Mesh::new(
            Geometry::new_box(1.0, 1.0, 1.0),
            Material::new_basic(Color::from_hex(0x00ff00)),
        ))
        .build();

    let sphere = scene
        .build_node("sphere")
        .with_mesh(Mesh::new(
            Geometry::new_sphere(0.7, 32, 32),
            Material::new_basic(Color::from_hex(0xff00ff)),
        ))
        .build();

    let cone = scene
        .build_node("cone")
        .with_position(2.0, 0.0, 0.0)
        .with_mesh(Mesh::new(
            Geometry::new_cone(0.7, 1.4, 32),
            Material::new_basic(Color::from_hex(0x0000ff)),
        ))
        .build();

    engine.camera.transform.position = Vec3::new(0.0, 0.0, 5.0);
    engine.camera.update_matrices();

    log::info!("Starfield ready: {} stars", config.star_count);

    StarfieldHandles {
        stars,
        cube,
        sphere,
        cone,
    }
}

/// Accumulated rotation of the star cloud about +Y.
///
/// The node rotation is rebuilt from the yaw every step. Composing small
/// quaternions frame after frame drifts off unit length, which the world
/// matrix would turn into a slow shrink of the cloud.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StarSpin {
    yaw: f64,
}

impl StarSpin {
    /// Current yaw in radians, wrapped to [0, 2π).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw as f32
    }

    /// Turns the star cloud `stars` by `angle` radians.
    pub fn step(&mut self, engine: &mut Engine, stars: NodeHandle, angle: f32) {
        self.yaw = (self.yaw + f64::from(angle)).rem_euclid(std::f64::consts::TAU);
        if let Some(node) = engine.scene.get_node_mut(stars) {
            node.transform.rotation = Quat::from_rotation_y(self.yaw());
        }
    }
}

/// Window handler of the starfield demo.
pub struct Starfield {
    config: StarfieldConfig,
    handles: StarfieldHandles,
    controls: OrbitControls,
    spin: StarSpin,
}

impl Starfield {
    #[must_use]
    pub fn handles(&self) -> StarfieldHandles {
        self.handles
    }
}

impl AppHandler for Starfield {
    fn init(engine: &mut Engine, _window: &Arc<Window>) -> Self {
        let config = StarfieldConfig::default();
        let handles = build(engine, &config);
        let controls =
            OrbitControls::from_camera(&engine.camera, Vec3::ZERO).with_damping(config.damping_factor);
        Self {
            config,
            handles,
            controls,
            spin: StarSpin::default(),
        }
    }

    fn update(&mut self, engine: &mut Engine, _window: &Arc<Window>, frame: &FrameState) {
        self.controls
            .update(&mut engine.camera, &engine.input, frame.dt);
        self.spin
            .step(engine, self.handles.stars, self.config.star_rotation);
    }
}

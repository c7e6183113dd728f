//! Three floating buttons.
//!
//! The buttons pop in one after another with an elastic scale, then bob up
//! and down forever. Clicking one flashes it red and back.

use std::sync::Arc;

use glam::Vec3;
use winit::window::Window;

use crate::animation::{EaseMode, Easing, Oscillation, Property, TweenSpec};
use crate::app::AppHandler;
use crate::engine::Engine;
use crate::errors::Result;
use crate::interaction::ClickFlash;
use crate::resources::{Color, Geometry, Material, Mesh};
use crate::scene::{Light, NodeHandle};
use crate::utils::FrameState;

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingButtonsConfig {
    pub count: usize,
    /// Edge length of each box.
    pub size: f32,
    /// Horizontal distance between button centers.
    pub spacing: f32,
    pub color: Color,
    pub roughness: f32,
    pub metalness: f32,

    pub entry_duration: f64,
    /// Extra entry delay per button index.
    pub entry_stagger: f64,
    pub entry_easing: Easing,

    /// Vertical distance from the resting height to either extreme.
    pub float_amount: f32,
    /// Leg duration of the first button.
    pub float_duration: f64,
    /// Extra leg duration per button index.
    pub float_stagger: f64,
    pub float_easing: Easing,

    pub click: ClickFlash,
}

impl Default for FloatingButtonsConfig {
    fn default() -> Self {
        Self {
            count: 3,
            size: 0.7,
            spacing: 1.5,
            color: Color::from_hex(0x0077ff),
            roughness: 0.5,
            metalness: 0.8,

            entry_duration: 1000.0,
            entry_stagger: 200.0,
            entry_easing: Easing::Elastic(EaseMode::Out),

            float_amount: 0.2,
            float_duration: 1800.0,
            float_stagger: 200.0,
            float_easing: Easing::Sinusoidal(EaseMode::InOut),

            click: ClickFlash::default(),
        }
    }
}

impl FloatingButtonsConfig {
    /// Resting x coordinate of button `index`, centered around the origin.
    #[must_use]
    pub fn button_x(&self, index: usize) -> f32 {
        (index as f32 - (self.count as f32 - 1.0) * 0.5) * self.spacing
    }
}

/// Populates `engine` with the camera, lights and buttons, and schedules
/// their entry and float animations at the engine's current time.
///
/// Returns the button handles in left-to-right order.
pub fn build(engine: &mut Engine, config: &FloatingButtonsConfig) -> Result<Vec<NodeHandle>> {
    engine.camera.transform.position = Vec3::new(0.0, 0.0, 5.0);
    engine.camera.update_matrices();

    engine
        .scene
        .add_light(Light::new_ambient(Color::from_hex(0x404040), 2.0));
    engine
        .scene
        .add_light(Light::new_directional(Color::WHITE, 1.0, Vec3::new(0.0, 1.0, 1.0)));

    let mut buttons = Vec::with_capacity(config.count);
    for i in 0..config.count {
        let geometry = Geometry::new_box(config.size, config.size, config.size);
        let material = Material::new_standard(config.color, config.roughness, config.metalness);
        let node = engine
            .scene
            .build_node(&format!("button_{i}"))
            .with_position(config.button_x(i), 0.0, 0.0)
            .with_scale(0.0)
            .with_mesh(Mesh::new(geometry, material))
            .build();

        let entry = TweenSpec::new(node, Property::SCALE, Vec3::ONE)
            .duration(config.entry_duration)
            .easing(config.entry_easing)
            .delay(i as f64 * config.entry_stagger);
        engine.schedule(entry)?;

        let float = Oscillation::new(
            Property::POSITION_Y,
            -config.float_amount,
            config.float_amount,
            config.float_duration + i as f64 * config.float_stagger,
        )
        .with_easing(config.float_easing);
        engine.schedule(float.leg(node))?;

        buttons.push(node);
    }

    log::info!("Floating buttons ready: {} buttons", buttons.len());
    Ok(buttons)
}

/// Window handler of the floating buttons demo.
pub struct FloatingButtons {
    config: FloatingButtonsConfig,
    buttons: Vec<NodeHandle>,
}

impl FloatingButtons {
    #[must_use]
    pub fn buttons(&self) -> &[NodeHandle] {
        &self.buttons
    }
}

impl AppHandler for FloatingButtons {
    fn init(engine: &mut Engine, _window: &Arc<Window>) -> Self {
        let config = FloatingButtonsConfig::default();
        let buttons = build(engine, &config).unwrap_or_else(|e| {
            log::error!("Failed to build floating buttons: {e}");
            Vec::new()
        });
        Self { config, buttons }
    }

    fn update(&mut self, engine: &mut Engine, _window: &Arc<Window>, _frame: &FrameState) {
        if let Err(e) = self.config.click.handle_pending_clicks(engine, &self.buttons) {
            log::warn!("Click handling failed: {e}");
        }
    }
}

//! # scene-tween
//!
//! Tween-driven interactive 3D scenes on a compact wgpu scene graph.
//!
//! - [`animation`]: tween driver, easing curves, property accessors
//! - [`scene`]: node arena, transforms, camera, lights, background
//! - [`interaction`]: click picking that triggers color flashes
//! - [`engine`]: the per-frame context tying everything together
//! - [`renderer`]: wgpu forward renderer and a headless stand-in
//! - [`app`]: winit runner
//! - [`demos`]: the floating buttons and starfield scenes

pub mod animation;
pub mod app;
pub mod demos;
pub mod engine;
pub mod errors;
pub mod input;
pub mod interaction;
pub mod picking;
pub mod renderer;
pub mod resources;
pub mod scene;
pub mod utils;

pub use animation::{EaseMode, Easing, OnComplete, Property, PropertyValue, TweenDriver, TweenSpec};
pub use app::{App, AppHandler};
pub use engine::Engine;
pub use errors::{Error, Result};
pub use interaction::ClickFlash;
pub use renderer::{FrameRenderer, HeadlessRenderer, RenderSettings, Renderer};
pub use resources::{Color, Geometry, Material, Mesh};
pub use scene::{Camera, Light, Node, NodeHandle, Scene};
pub use utils::orbit_control::OrbitControls;

//! Engine Context
//!
//! [`Engine`] is the explicit context object shared by scene bootstrap, the
//! click bridge and the render loop. It holds no window or GPU state, so it
//! can be driven by the winit runner or by tests with a
//! [`HeadlessRenderer`](crate::renderer::HeadlessRenderer).
//!
//! # Frame order
//!
//! Each [`Engine::frame`] call:
//!
//! 1. advances the tween driver to the frame timestamp
//! 2. propagates world matrices
//! 3. refreshes the camera matrices
//! 4. hands the scene and camera to the renderer
//! 5. clears per-frame input

use crate::animation::{TweenDriver, TweenId, TweenSpec};
use crate::errors::Result;
use crate::input::Input;
use crate::renderer::FrameRenderer;
use crate::scene::{Camera, Scene};
use crate::utils::FrameClock;

pub struct Engine {
    pub scene: Scene,
    pub camera: Camera,
    pub tweens: TweenDriver,
    pub input: Input,
    pub clock: FrameClock,

    time_ms: f64,
    frame_count: u64,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera::default(),
            tweens: TweenDriver::new(),
            input: Input::new(),
            clock: FrameClock::new(),
            time_ms: 0.0,
            frame_count: 0,
        }
    }

    /// Timestamp of the last frame, in milliseconds.
    #[inline]
    #[must_use]
    pub fn time_ms(&self) -> f64 {
        self.time_ms
    }

    /// Frames rendered since startup.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Schedules a tween against this engine's scene.
    pub fn schedule(&mut self, spec: TweenSpec) -> Result<TweenId> {
        self.tweens.schedule(&self.scene, spec)
    }

    /// Handles a viewport resize. Zero-sized viewports only update input.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.input.inject_resize(width, height);
        self.camera.set_aspect(width, height);
    }

    /// Advances animation and scene state to `now_ms` without rendering.
    pub fn update(&mut self, now_ms: f64) {
        self.tweens.advance(now_ms, &mut self.scene);
        self.time_ms = self.tweens.now();
        self.scene.update_transforms();
        self.camera.update_matrices();
    }

    /// Runs one iteration of the render loop.
    ///
    /// Per-frame input is cleared even when rendering fails.
    pub fn frame<R: FrameRenderer + ?Sized>(&mut self, renderer: &mut R, now_ms: f64) -> Result<()> {
        self.update(now_ms);
        let result = renderer.render(&self.scene, &self.camera);
        self.input.start_frame();
        self.frame_count += 1;
        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

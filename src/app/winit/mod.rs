//! Winit-based Application Framework
//!
//! - [`App`]: builder for configuring and launching a window
//! - [`AppHandler`]: trait that demos implement to define behavior
//! - `AppRunner`: internal winit event loop handler
//!
//! # Frame loop
//!
//! On every redraw the runner ticks the frame clock, lets the handler react
//! to the frame's input, then runs [`Engine::frame`], which advances tweens
//! and renders.
//!
//! # Example
//!
//! ```rust,ignore
//! use scene_tween::app::{App, AppHandler};
//!
//! struct Demo;
//!
//! impl AppHandler for Demo {
//!     fn init(engine: &mut Engine, window: &Arc<Window>) -> Self {
//!         Demo
//!     }
//! }
//!
//! fn main() -> scene_tween::errors::Result<()> {
//!     App::new().with_title("Demo").run::<Demo>()
//! }
//! ```

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
pub use winit::window::{Window, WindowId};

use crate::engine::Engine;
use crate::errors::{Error, Result};
use crate::renderer::{FrameRenderer, RenderSettings, Renderer};
use crate::utils::FrameState;

pub mod input_adapter;

/// Application behavior.
///
/// # Lifecycle
///
/// 1. [`init`](Self::init): once, after the window and renderer exist
/// 2. [`on_event`](Self::on_event): for each window event
/// 3. [`update`](Self::update): each frame, before tweens advance and the
///    frame is rendered
pub trait AppHandler: Sized + 'static {
    /// Builds the scene. The engine's viewport already matches the window.
    fn init(engine: &mut Engine, window: &Arc<Window>) -> Self;

    /// Handles a window event after it was fed into the engine input.
    ///
    /// Return `true` to consume the event and skip the default handling.
    #[allow(unused_variables)]
    fn on_event(&mut self, engine: &mut Engine, window: &Arc<Window>, event: &WindowEvent) -> bool {
        false
    }

    /// Per-frame logic. Clicks and pointer motion of this frame are still
    /// available in `engine.input`.
    #[allow(unused_variables)]
    fn update(&mut self, engine: &mut Engine, window: &Arc<Window>, frame: &FrameState) {}
}

/// Application builder.
///
/// ```rust,ignore
/// App::new()
///     .with_title("Floating Buttons")
///     .with_settings(RenderSettings {
///         vsync: true,
///         ..Default::default()
///     })
///     .run::<MyHandler>()?;
/// ```
pub struct App {
    title: String,
    width: f64,
    height: f64,
    render_settings: RenderSettings,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Scene Tween".into(),
            width: 1280.0,
            height: 720.0,
            render_settings: RenderSettings::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial logical window size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: RenderSettings) -> Self {
        self.render_settings = settings;
        self
    }

    /// Runs the event loop until the window closes. Blocks the current
    /// thread.
    pub fn run<H: AppHandler>(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::<H>::new(self);
        event_loop.run_app(&mut runner).map_err(Error::from)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

struct AppRunner<H: AppHandler> {
    config: App,
    window: Option<Arc<Window>>,
    engine: Engine,
    renderer: Renderer,
    user_state: Option<H>,
}

impl<H: AppHandler> AppRunner<H> {
    fn new(config: App) -> Self {
        let renderer = Renderer::new(config.render_settings.clone());
        Self {
            config,
            window: None,
            engine: Engine::new(),
            renderer,
            user_state: None,
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(user_state)) = (&self.window, &mut self.user_state) else {
            return;
        };

        let frame = self.engine.clock.tick();
        user_state.update(&mut self.engine, window, &frame);

        if let Err(e) = self.engine.frame(&mut self.renderer, frame.time_ms) {
            log::error!("Frame {} failed: {e}", frame.frame_count);
        }
    }
}

impl<H: AppHandler> ApplicationHandler for AppRunner<H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        log::info!("Initializing Renderer Backend...");

        let size = window.inner_size();
        if let Err(e) =
            pollster::block_on(self.renderer.init(window.clone(), size.width, size.height))
        {
            log::error!("Fatal Renderer Error: {e}");
            event_loop.exit();
            return;
        }

        self.engine.resize(size.width, size.height);
        self.user_state = Some(H::init(&mut self.engine, &window));

        // Tween timestamps start at zero once the scene exists
        self.engine.clock.reset();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        input_adapter::process_window_event(&mut self.engine.input, &event);

        if let (Some(window), Some(user_state)) = (&self.window, &mut self.user_state)
            && user_state.on_event(&mut self.engine, window, &event)
        {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
                self.renderer.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

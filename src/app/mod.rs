//! Application Framework
//!
//! Windowing and the event loop live behind the `winit` module; everything
//! the application logic touches goes through [`Engine`](crate::engine::Engine)
//! so it stays platform independent.

pub mod winit;

pub use self::winit::{App, AppHandler};

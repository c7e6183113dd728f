//! Demo scenes.
//!
//! Each demo splits into a pure bootstrap (`build`), which populates an
//! [`Engine`](crate::engine::Engine) and can run headless, and an
//! [`AppHandler`](crate::app::AppHandler) that wires it to a window.

pub mod floating_buttons;
pub mod starfield;

pub use floating_buttons::{FloatingButtons, FloatingButtonsConfig};
pub use starfield::{StarSpin, Starfield, StarfieldConfig};

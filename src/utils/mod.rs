//! Utility Module
//!
//! - [`OrbitControls`]: damped orbit camera controller
//! - [`FrameClock`]: monotonic frame timer producing [`FrameState`]

pub mod orbit_control;
pub mod time;

pub use orbit_control::OrbitControls;
pub use time::{FrameClock, FrameState};

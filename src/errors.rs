//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`Error`] covers:
//! - Rejected tween scheduling requests (bad timing, bad target, bad value)
//! - GPU initialization failures
//! - Windowing / event loop failures
//!
//! A pointer pick that hits nothing is not an error; picking APIs return
//! `Option` for that case.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, Error>`.
//!
//! ```rust,ignore
//! use scene_tween::errors::Result;
//!
//! fn bootstrap() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::animation::values::ValueKind;
use crate::scene::NodeHandle;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Tween Scheduling Errors
    // ========================================================================
    /// Tween duration must be finite and strictly positive.
    #[error("Invalid tween duration: {0} ms (must be finite and > 0)")]
    InvalidDuration(f64),

    /// Tween delay must be finite and non-negative.
    #[error("Invalid tween delay: {0} ms (must be finite and >= 0)")]
    InvalidDelay(f64),

    /// The tween target is not (or no longer) part of the scene.
    #[error("Node not found in scene: {0:?}")]
    NodeNotFound(NodeHandle),

    /// The target node lacks the component the property lives on.
    #[error("Node {node:?} has no {component} component")]
    MissingComponent {
        /// The node that was targeted
        node: NodeHandle,
        /// Name of the missing component
        component: &'static str,
    },

    /// The end value does not match the kind of the animated property.
    #[error("Value kind mismatch: property expects {expected:?}, got {found:?}")]
    ValueKindMismatch {
        /// Kind required by the property
        expected: ValueKind,
        /// Kind of the supplied value
        found: ValueKind,
    },

    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create the presentation surface.
    #[error("Failed to create surface: {0}")]
    SurfaceCreateFailed(String),

    // ========================================================================
    // Windowing Errors
    // ========================================================================
    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),
}

/// Alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

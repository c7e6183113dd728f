//! Tweening
//!
//! - [`TweenDriver`]: owns active tweens, advanced once per frame
//! - [`TweenSpec`]: builder for a scheduling request
//! - [`Property`]: tagged accessors for what a tween writes
//! - [`Easing`]: easing curve catalogue
//! - [`Oscillation`]: back-and-forth cycle driven by completion events

pub mod driver;
pub mod easing;
pub mod oscillation;
pub mod property;
pub mod tween;
pub mod values;

pub use driver::TweenDriver;
pub use easing::{EaseMode, Easing};
pub use oscillation::{Oscillation, OscillationPhase};
pub use property::{ColorProperty, Property, ScalarProperty, VectorProperty};
pub use tween::{CompletionFn, OnComplete, Tween, TweenId, TweenSpec};
pub use values::{Interpolatable, PropertyValue, ValueKind};

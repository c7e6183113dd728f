//! Scene Graph
//!
//! Manages the hierarchy and components of a scene:
//! - [`Node`]: scene node (parent/child links and a transform)
//! - [`Transform`]: position, rotation, scale with cached matrices
//! - [`Scene`]: node arena plus mesh and light component maps
//! - [`Camera`]: perspective camera owned by the engine context
//! - [`Light`]: ambient and directional lights
//! - [`Background`]: solid color or vertical gradient

pub mod background;
pub mod camera;
pub mod light;
pub mod node;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use background::{Background, GradientStop};
pub use camera::Camera;
pub use light::{Light, LightKind};
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    /// Stable, non-owning reference to a node in a [`Scene`].
    pub struct NodeHandle;
}

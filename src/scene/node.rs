use glam::Affine3A;

use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A minimal scene node containing only essential hot data.
///
/// Meshes and lights are stored in the [`Scene`](crate::scene::Scene)
/// component maps, keyed by the node's handle.
#[derive(Debug, Clone)]
pub struct Node {
    /// Debug name, also used by [`Scene::find_node_by_name`](crate::scene::Scene::find_node_by_name)
    pub name: String,

    // === Core Hierarchy ===
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    // === Core Spatial Data ===
    pub transform: Transform,

    // === Core State ===
    /// Invisible nodes are skipped by the renderer and by picking.
    pub visible: bool,
}

impl Node {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
        }
    }

    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// World matrix as of the last [`Scene::update_transforms`](crate::scene::Scene::update_transforms).
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}

use glam::{Affine3A, Vec3};
use slotmap::{SecondaryMap, SlotMap};

use crate::resources::mesh::Mesh;
use crate::scene::NodeHandle;
use crate::scene::background::Background;
use crate::scene::light::Light;
use crate::scene::node::Node;
use crate::scene::transform_system;

/// Scene graph
///
/// Pure data layer: the node hierarchy plus mesh and light components keyed
/// by node handle. The camera lives outside the scene, in the engine context.
#[derive(Debug, Default)]
pub struct Scene {
    pub(crate) nodes: SlotMap<NodeHandle, Node>,
    pub(crate) root_nodes: Vec<NodeHandle>,

    // ==== Components ====
    pub(crate) meshes: SecondaryMap<NodeHandle, Mesh>,
    pub(crate) lights: SecondaryMap<NodeHandle, Light>,

    pub background: Background,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a node.
    pub fn build_node(&mut self, name: &str) -> NodeBuilder<'_> {
        NodeBuilder::new(self, name)
    }

    /// Adds a node to the scene as a root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a root node carrying `mesh`.
    pub fn add_mesh(&mut self, name: &str, mesh: Mesh) -> NodeHandle {
        let handle = self.add_node(Node::with_name(name));
        self.meshes.insert(handle, mesh);
        handle
    }

    /// Adds a root node carrying `light`.
    pub fn add_light(&mut self, light: Light) -> NodeHandle {
        let handle = self.add_node(Node::with_name("Light"));
        self.lights.insert(handle, light);
        handle
    }

    /// Moves `child` under `parent`, detaching it from its previous parent.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself");
            return;
        }
        if !self.nodes.contains_key(child) {
            return;
        }
        if !self.nodes.contains_key(parent) {
            log::error!("Parent node not found during attach");
            return;
        }
        if self.is_ancestor(child, parent) {
            log::warn!("Cannot attach node under its own descendant");
            return;
        }

        self.detach_from_parent(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Removes a node, its components, and all of its descendants.
    ///
    /// Handles held elsewhere (pending tweens, renderer caches) become stale
    /// and are detected by their owners via [`contains`](Self::contains).
    pub fn remove_node(&mut self, handle: NodeHandle) {
        if !self.nodes.contains_key(handle) {
            return;
        }
        self.detach_from_parent(handle);

        let mut stack = vec![handle];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                stack.extend(node.children);
            }
            self.meshes.remove(current);
            self.lights.remove(current);
        }
    }

    fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = self.nodes.get(node).and_then(Node::parent);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(Node::parent);
        }
        false
    }

    fn detach_from_parent(&mut self, handle: NodeHandle) {
        let parent = self.nodes.get(handle).and_then(Node::parent);
        if let Some(p) = parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == handle)
            {
                n.children.remove(i);
            }
            if let Some(n) = self.nodes.get_mut(handle) {
                n.parent = None;
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == handle) {
            self.root_nodes.remove(i);
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(handle)
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn mesh(&self, handle: NodeHandle) -> Option<&Mesh> {
        self.meshes.get(handle)
    }

    #[inline]
    pub fn mesh_mut(&mut self, handle: NodeHandle) -> Option<&mut Mesh> {
        self.meshes.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn light(&self, handle: NodeHandle) -> Option<&Light> {
        self.lights.get(handle)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    /// First node with the given name, in insertion order of the arena.
    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find_map(|(handle, node)| (node.name == name).then_some(handle))
    }

    /// Visible mesh nodes with their world matrices.
    pub fn iter_meshes(&self) -> impl Iterator<Item = (NodeHandle, &Affine3A, &Mesh)> {
        self.meshes.iter().filter_map(|(handle, mesh)| {
            let node = self.nodes.get(handle)?;
            node.visible
                .then_some((handle, &node.transform.world_matrix, mesh))
        })
    }

    pub fn iter_lights(&self) -> impl Iterator<Item = &Light> {
        self.lights
            .iter()
            .filter(|(handle, _)| self.nodes.get(*handle).is_some_and(|n| n.visible))
            .map(|(_, light)| light)
    }

    /// World-space position as of the last [`update_transforms`](Self::update_transforms).
    #[must_use]
    pub fn world_position(&self, handle: NodeHandle) -> Option<Vec3> {
        self.nodes
            .get(handle)
            .map(|n| Vec3::from(n.transform.world_matrix.translation))
    }

    // ========================================================================
    // Matrix update pipeline
    // ========================================================================

    /// Updates the world matrices of the whole scene.
    ///
    /// Must run after tweens have written transforms and before picking or
    /// rendering.
    pub fn update_transforms(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }
}

pub struct NodeBuilder<'a> {
    scene: &'a mut Scene,
    node: Node,
    parent: Option<NodeHandle>,
    mesh: Option<Mesh>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(scene: &'a mut Scene, name: &str) -> Self {
        Self {
            scene,
            node: Node::with_name(name),
            parent: None,
            mesh: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.node.transform.position = Vec3::new(x, y, z);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, s: f32) -> Self {
        self.node.transform.scale = Vec3::splat(s);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: NodeHandle) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Inserts the node and returns its handle.
    pub fn build(self) -> NodeHandle {
        let handle = self.scene.add_node(self.node);
        if let Some(parent) = self.parent {
            self.scene.attach(handle, parent);
        }
        if let Some(mesh) = self.mesh {
            self.scene.meshes.insert(handle, mesh);
        }
        handle
    }
}

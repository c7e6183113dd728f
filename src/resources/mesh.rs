use crate::resources::geometry::{Geometry, Topology};
use crate::resources::material::Material;

/// Renderable component: geometry plus material, attached to a scene node.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub geometry: Geometry,
    pub material: Material,
}

impl Mesh {
    #[must_use]
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }

    /// Point clouds are drawn but never hit by picking rays.
    #[must_use]
    pub fn is_pickable(&self) -> bool {
        self.geometry.topology == Topology::Triangles
    }
}

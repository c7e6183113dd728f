//! Core resource definitions
//!
//! CPU-side data the renderer consumes, with no GPU handles:
//! - [`Color`]: linear RGB color with sRGB hex constructors
//! - [`Geometry`]: tessellated primitives (box, sphere, cone, point cloud)
//! - [`Material`]: shading model, color and opacity
//! - [`Mesh`]: geometry + material component

pub mod color;
pub mod geometry;
pub mod material;
pub mod mesh;
pub mod primitives;

pub use color::Color;
pub use geometry::{Geometry, Shape, Topology, Vertex};
pub use material::{Material, MaterialKind};
pub use mesh::Mesh;

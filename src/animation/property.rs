//! Animated property accessors.
//!
//! A closed set of tagged accessors instead of string property paths. Each
//! variant knows which component it reads from and writes to, and which
//! [`ValueKind`] it carries.

use glam::Vec3;

use crate::animation::values::{PropertyValue, ValueKind};
use crate::scene::{NodeHandle, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarProperty {
    /// `transform.position.x`
    PositionX,
    /// `transform.position.y`
    PositionY,
    /// `transform.position.z`
    PositionZ,
    /// Mesh material opacity.
    Opacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorProperty {
    /// `transform.position`
    Position,
    /// `transform.scale`
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProperty {
    /// Mesh material color (linear RGB).
    MaterialColor,
}

/// Target property of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Scalar(ScalarProperty),
    Vector3(VectorProperty),
    Color(ColorProperty),
}

impl Property {
    pub const POSITION_X: Self = Self::Scalar(ScalarProperty::PositionX);
    pub const POSITION_Y: Self = Self::Scalar(ScalarProperty::PositionY);
    pub const POSITION_Z: Self = Self::Scalar(ScalarProperty::PositionZ);
    pub const OPACITY: Self = Self::Scalar(ScalarProperty::Opacity);
    pub const POSITION: Self = Self::Vector3(VectorProperty::Position);
    pub const SCALE: Self = Self::Vector3(VectorProperty::Scale);
    pub const COLOR: Self = Self::Color(ColorProperty::MaterialColor);

    #[must_use]
    pub fn kind(self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Vector3(_) => ValueKind::Vector3,
            Self::Color(_) => ValueKind::Color,
        }
    }

    /// Name of the scene component the property lives on.
    #[must_use]
    pub fn component(self) -> &'static str {
        match self {
            Self::Scalar(ScalarProperty::Opacity) | Self::Color(_) => "mesh",
            _ => "transform",
        }
    }

    /// Reads the current value.
    ///
    /// `None` if the node is gone or lacks the component.
    #[must_use]
    pub fn read(self, scene: &Scene, node: NodeHandle) -> Option<PropertyValue> {
        match self {
            Self::Scalar(prop) => {
                let value = match prop {
                    ScalarProperty::PositionX => scene.get_node(node)?.transform.position.x,
                    ScalarProperty::PositionY => scene.get_node(node)?.transform.position.y,
                    ScalarProperty::PositionZ => scene.get_node(node)?.transform.position.z,
                    ScalarProperty::Opacity => scene.mesh(node)?.material.opacity,
                };
                Some(PropertyValue::Scalar(value))
            }
            Self::Vector3(prop) => {
                let transform = &scene.get_node(node)?.transform;
                Some(PropertyValue::Vector3(match prop {
                    VectorProperty::Position => transform.position,
                    VectorProperty::Scale => transform.scale,
                }))
            }
            Self::Color(ColorProperty::MaterialColor) => {
                Some(PropertyValue::Color(scene.mesh(node)?.material.color))
            }
        }
    }

    /// Writes `value`, returning `false` if the node or component is gone
    /// or the value kind does not match.
    pub fn write(self, scene: &mut Scene, node: NodeHandle, value: PropertyValue) -> bool {
        match (self, value) {
            (Self::Scalar(prop), PropertyValue::Scalar(v)) => match prop {
                ScalarProperty::Opacity => match scene.mesh_mut(node) {
                    Some(mesh) => {
                        mesh.material.opacity = v;
                        true
                    }
                    None => false,
                },
                axis => match scene.get_node_mut(node) {
                    Some(n) => {
                        let p = &mut n.transform.position;
                        match axis {
                            ScalarProperty::PositionX => p.x = v,
                            ScalarProperty::PositionY => p.y = v,
                            _ => p.z = v,
                        }
                        true
                    }
                    None => false,
                },
            },
            (Self::Vector3(prop), PropertyValue::Vector3(v)) => {
                let Some(n) = scene.get_node_mut(node) else {
                    return false;
                };
                let slot: &mut Vec3 = match prop {
                    VectorProperty::Position => &mut n.transform.position,
                    VectorProperty::Scale => &mut n.transform.scale,
                };
                *slot = v;
                true
            }
            (Self::Color(ColorProperty::MaterialColor), PropertyValue::Color(c)) => {
                match scene.mesh_mut(node) {
                    Some(mesh) => {
                        mesh.material.color = c;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }
}

use glam::Vec3;

use crate::resources::Color;

/// Linear interpolation for animatable value types.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Color {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

/// Shape of a [`PropertyValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    Vector3,
    Color,
}

/// A snapshot of an animated property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Scalar(f32),
    Vector3(Vec3),
    Color(Color),
}

impl PropertyValue {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Scalar(_) => ValueKind::Scalar,
            PropertyValue::Vector3(_) => ValueKind::Vector3,
            PropertyValue::Color(_) => ValueKind::Color,
        }
    }

    /// Component-wise interpolation between two values of the same kind.
    ///
    /// `t` is not clamped, so overshooting easings extrapolate past either
    /// end. Mismatched kinds yield `None`.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, t: f32) -> Option<Self> {
        Some(match (start, end) {
            (PropertyValue::Scalar(a), PropertyValue::Scalar(b)) => {
                PropertyValue::Scalar(f32::interpolate_linear(a, b, t))
            }
            (PropertyValue::Vector3(a), PropertyValue::Vector3(b)) => {
                PropertyValue::Vector3(Vec3::interpolate_linear(a, b, t))
            }
            (PropertyValue::Color(a), PropertyValue::Color(b)) => {
                PropertyValue::Color(Color::interpolate_linear(a, b, t))
            }
            _ => return None,
        })
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<f32> {
        match *self {
            PropertyValue::Scalar(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_vec3(&self) -> Option<Vec3> {
        match *self {
            PropertyValue::Vector3(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_color(&self) -> Option<Color> {
        match *self {
            PropertyValue::Color(c) => Some(c),
            _ => None,
        }
    }
}

impl From<f32> for PropertyValue {
    fn from(v: f32) -> Self {
        PropertyValue::Scalar(v)
    }
}

impl From<Vec3> for PropertyValue {
    fn from(v: Vec3) -> Self {
        PropertyValue::Vector3(v)
    }
}

impl From<Color> for PropertyValue {
    fn from(c: Color) -> Self {
        PropertyValue::Color(c)
    }
}

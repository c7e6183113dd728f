use glam::Vec3;

use crate::resources::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform contribution, no direction.
    Ambient,
    /// Parallel rays. `direction` points from the surface towards the light.
    Directional { direction: Vec3 },
}

/// Light component in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub color: Color,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Color, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Ambient,
        }
    }

    /// Zero directions fall back to a light straight above.
    #[must_use]
    pub fn new_directional(color: Color, intensity: f32, direction: Vec3) -> Self {
        let direction = direction.try_normalize().unwrap_or(Vec3::Y);
        Self {
            color,
            intensity,
            kind: LightKind::Directional { direction },
        }
    }

    /// Color premultiplied by intensity, as uploaded to the GPU.
    #[must_use]
    pub fn radiance(&self) -> Color {
        self.color.scaled(self.intensity)
    }
}

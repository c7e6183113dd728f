use crate::resources::color::Color;

/// Shading model. Selects the pipeline the renderer draws a mesh with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    /// Unlit, flat color.
    Basic,
    /// Lit by the scene's ambient and directional lights.
    Standard { roughness: f32, metalness: f32 },
    /// Screen-facing square sprites, `size` in world units.
    Points { size: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Color,
    pub opacity: f32,
    /// Transparent materials are alpha blended and skip depth writes.
    pub transparent: bool,
}

impl Material {
    #[must_use]
    pub fn new_basic(color: Color) -> Self {
        Self::with_kind(MaterialKind::Basic, color)
    }

    #[must_use]
    pub fn new_standard(color: Color, roughness: f32, metalness: f32) -> Self {
        Self::with_kind(
            MaterialKind::Standard {
                roughness: roughness.clamp(0.0, 1.0),
                metalness: metalness.clamp(0.0, 1.0),
            },
            color,
        )
    }

    #[must_use]
    pub fn new_points(color: Color, size: f32) -> Self {
        Self::with_kind(MaterialKind::Points { size }, color)
    }

    fn with_kind(kind: MaterialKind, color: Color) -> Self {
        Self {
            kind,
            color,
            opacity: 1.0,
            transparent: false,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    /// Roughness and metalness, or `None` for unlit materials.
    #[must_use]
    pub fn pbr_params(&self) -> Option<(f32, f32)> {
        match self.kind {
            MaterialKind::Standard {
                roughness,
                metalness,
            } => Some((roughness, metalness)),
            _ => None,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new_basic(Color::WHITE)
    }
}

use glam::{Vec3, Vec4};

/// Linear RGB color.
///
/// Hex constructors treat their input as sRGB and convert to linear, so a
/// color built from `0x0077ff` holds the same channel values a color-managed
/// scene graph would store for it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Creates a color from linear channel values.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` sRGB value.
    #[must_use]
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Parses a `#rrggbb` (or `rrggbb`) sRGB string.
    #[must_use]
    pub fn from_hex_str(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Interpolates in sRGB space and returns the linear result, the way a
    /// 2D canvas gradient blends its stops.
    #[must_use]
    pub fn lerp_srgb(self, other: Self, t: f32) -> Self {
        Self::from_srgb(self.to_srgb().lerp(other.to_srgb(), t))
    }

    /// sRGB-encoded channels.
    #[must_use]
    pub fn to_srgb(self) -> Vec3 {
        Vec3::new(
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
        )
    }

    /// Decodes sRGB-encoded channels.
    #[must_use]
    pub fn from_srgb(srgb: Vec3) -> Self {
        Self::new(
            srgb_to_linear(srgb.x),
            srgb_to_linear(srgb.y),
            srgb_to_linear(srgb.z),
        )
    }

    /// Scales every channel, e.g. to fold a light intensity into its color.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    #[must_use]
    pub fn to_vec4(self, alpha: f32) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, alpha)
    }

    #[must_use]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
            a: 1.0,
        }
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c >= 1.0 {
        1.0
    } else if c < 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c >= 1.0 {
        1.0
    } else if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

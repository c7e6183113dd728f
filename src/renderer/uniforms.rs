//! GPU uniform layouts. Field order and padding mirror the WGSL structs in
//! `shaders/`.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::resources::{Material, MaterialKind};
use crate::scene::background::{Background, MAX_GRADIENT_STOPS};
use crate::scene::{Camera, LightKind, Scene};

pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

/// Group 0 for mesh and point pipelines.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view_projection: Mat4,
    /// xyz: camera world position
    pub camera_position: Vec4,
    /// rgb: summed ambient radiance
    pub ambient: Vec4,
    /// xyz: direction towards the light
    pub light_directions: [Vec4; MAX_DIRECTIONAL_LIGHTS],
    /// rgb: radiance
    pub light_colors: [Vec4; MAX_DIRECTIONAL_LIGHTS],
    /// x: directional light count
    pub light_count: [u32; 4],
    /// x: width, y: height, z: aspect
    pub viewport: Vec4,
}

impl FrameUniforms {
    #[must_use]
    pub fn new(scene: &Scene, camera: &Camera, width: u32, height: u32) -> Self {
        let mut ambient = Vec3::ZERO;
        let mut light_directions = [Vec4::ZERO; MAX_DIRECTIONAL_LIGHTS];
        let mut light_colors = [Vec4::ZERO; MAX_DIRECTIONAL_LIGHTS];
        let mut count = 0;

        for light in scene.iter_lights() {
            let radiance = light.radiance().to_vec3();
            match light.kind {
                LightKind::Ambient => ambient += radiance,
                LightKind::Directional { direction } => {
                    if count == MAX_DIRECTIONAL_LIGHTS {
                        log::warn!(
                            "More than {MAX_DIRECTIONAL_LIGHTS} directional lights, extra lights ignored"
                        );
                        continue;
                    }
                    light_directions[count] = direction.extend(0.0);
                    light_colors[count] = radiance.extend(1.0);
                    count += 1;
                }
            }
        }

        Self {
            view_projection: *camera.view_projection_matrix(),
            camera_position: camera.position().extend(1.0),
            ambient: ambient.extend(1.0),
            light_directions,
            light_colors,
            light_count: [count as u32, 0, 0, 0],
            viewport: Vec4::new(width as f32, height as f32, camera.aspect, 0.0),
        }
    }
}

/// Group 1 for mesh and point pipelines, one per node.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ObjectUniforms {
    pub model: Mat4,
    /// Inverse transpose of the model matrix.
    pub normal_matrix: Mat4,
    /// rgb: linear color, a: opacity
    pub color: Vec4,
    /// x: roughness, y: metalness, z: point size, w: 1 if lit
    pub params: Vec4,
}

impl ObjectUniforms {
    #[must_use]
    pub fn new(model: Mat4, material: &Material) -> Self {
        let params = match material.kind {
            MaterialKind::Basic => Vec4::ZERO,
            MaterialKind::Standard {
                roughness,
                metalness,
            } => Vec4::new(roughness, metalness, 0.0, 1.0),
            MaterialKind::Points { size } => Vec4::new(0.0, 0.0, size, 0.0),
        };

        // Zero-scale models are not invertible; their normals are irrelevant
        let normal_matrix = if model.determinant().abs() > f32::EPSILON {
            model.inverse().transpose()
        } else {
            Mat4::IDENTITY
        };

        Self {
            model,
            normal_matrix,
            color: material.color.to_vec4(material.opacity),
            params,
        }
    }
}

/// Bind group of the background gradient pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GradientUniforms {
    /// sRGB-encoded, blended by the shader before linearizing
    pub colors: [Vec4; MAX_GRADIENT_STOPS],
    pub offsets: Vec4,
    /// x: stop count
    pub count: [u32; 4],
}

impl GradientUniforms {
    /// `None` for solid backgrounds, which use the hardware clear.
    #[must_use]
    pub fn from_background(background: &Background) -> Option<Self> {
        let Background::Gradient(stops) = background else {
            return None;
        };
        let mut colors = [Vec4::ZERO; MAX_GRADIENT_STOPS];
        let mut offsets = [0.0; MAX_GRADIENT_STOPS];
        for (i, stop) in stops.iter().take(MAX_GRADIENT_STOPS).enumerate() {
            colors[i] = stop.color.to_srgb().extend(1.0);
            offsets[i] = stop.offset;
        }
        Some(Self {
            colors,
            offsets: Vec4::from_array(offsets),
            count: [stops.len().min(MAX_GRADIENT_STOPS) as u32, 0, 0, 0],
        })
    }
}

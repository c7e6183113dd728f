use glam::{Affine3A, Mat4, Vec2, Vec3, Vec4Swizzles};

use crate::picking::Ray;
use crate::scene::transform::Transform;

/// Perspective camera.
///
/// Unlike meshes and lights, the camera is not a scene node: it is owned by
/// the [`Engine`](crate::engine::Engine) context next to the scene and keeps
/// its own transform.
#[derive(Debug, Clone)]
pub struct Camera {
    pub transform: Transform,

    // === Projection ===
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,

    // Cached matrices, read-only for the renderer
    pub(crate) view_matrix: Mat4,
    pub(crate) projection_matrix: Mat4,
    pub(crate) view_projection_matrix: Mat4,
}

impl Camera {
    /// `fov_degrees` is the vertical field of view.
    #[must_use]
    pub fn new_perspective(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            transform: Transform::new(),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection_matrix: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// Updates the aspect ratio after a viewport resize.
    ///
    /// Zero-sized viewports (minimized windows) are ignored.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.update_projection_matrix();
    }

    pub fn update_projection_matrix(&mut self) {
        // glam's perspective_rh targets a [0, 1] depth range, matching wgpu
        self.projection_matrix = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    /// Rebuilds the view and view-projection matrices from the transform.
    pub fn update_matrices(&mut self) {
        self.transform.update_local_matrix();
        let world = *self.transform.local_matrix();
        self.transform.set_world_matrix(world);

        self.view_matrix = Self::view_from_world(&world);
        self.view_projection_matrix = self.projection_matrix * self.view_matrix;
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.transform.look_at(target, Vec3::Y);
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    #[inline]
    #[must_use]
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    #[inline]
    #[must_use]
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    #[inline]
    #[must_use]
    pub fn view_projection_matrix(&self) -> &Mat4 {
        &self.view_projection_matrix
    }

    /// Builds a world-space ray from the camera through a point given in
    /// normalized device coordinates (x right, y up, both in [-1, 1]).
    ///
    /// Uses the current transform, so it is valid even if
    /// [`update_matrices`](Self::update_matrices) has not run this frame.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let world = Affine3A::from_scale_rotation_translation(
            self.transform.scale,
            self.transform.rotation,
            self.transform.position,
        );
        let view_projection = self.projection_matrix * Self::view_from_world(&world);
        let unprojected = view_projection.inverse() * ndc.extend(0.5).extend(1.0);
        let point = unprojected.xyz() / unprojected.w;

        let origin = Vec3::from(world.translation);
        Ray::new(origin, point - origin)
    }

    fn view_from_world(world: &Affine3A) -> Mat4 {
        Mat4::from(world.inverse())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new_perspective(75.0, 1.0, 0.1, 1000.0)
    }
}

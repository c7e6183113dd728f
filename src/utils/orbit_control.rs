use glam::{Vec2, Vec3};

use crate::input::{Input, MouseButton};
use crate::scene::Camera;

/// Orbit camera controls.
///
/// Left drag rotates around `center`, the wheel dollies, right drag pans.
/// With damping enabled, rotation keeps easing out after the pointer stops.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub center: Vec3,
    pub radius: f32,
    /// Azimuth around +Y, 0 looking down -Z.
    pub theta: f32,
    /// Polar angle from +Y.
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            pan_speed: 1.0,
            damping_factor: 0.05,
            enable_damping: false,
            min_distance: 0.0,
            max_distance: f32::INFINITY,

            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Controls orbiting `center` from the camera's current position.
    #[must_use]
    pub fn from_camera(camera: &Camera, center: Vec3) -> Self {
        let offset = camera.position() - center;
        let radius = offset.length();
        let mut controls = Self::new(center, radius);
        if radius > 0.0 {
            controls.theta = offset.x.atan2(offset.z);
            controls.phi = (offset.y / radius).clamp(-1.0, 1.0).acos();
        }
        controls
    }

    #[must_use]
    pub fn with_damping(mut self, factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Applies this frame's input and places the camera.
    ///
    /// `dt` is in seconds; damping is normalized to 60 frames per second.
    pub fn update(&mut self, camera: &mut Camera, input: &Input, dt: f32) {
        let screen_height = input.screen_size().y.max(1.0);

        if input.get_mouse_button(MouseButton::Left) {
            let rotate_per_pixel = 2.0 * std::f32::consts::PI / screen_height;
            self.rotate_delta -= input.mouse_delta() * rotate_per_pixel * self.rotate_speed;
        }

        if self.enable_damping {
            let retention = (1.0 - self.damping_factor).powf(dt * 60.0);
            let applied = self.rotate_delta * (1.0 - retention);
            self.theta += applied.x;
            self.phi += applied.y;
            self.rotate_delta *= retention;
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        const EPS: f32 = 0.0001;
        self.phi = self.phi.clamp(EPS, std::f32::consts::PI - EPS);

        let scroll = input.scroll_delta().y;
        if scroll != 0.0 {
            let scale = (1.0 - self.zoom_speed).powf(scroll.abs());
            if scroll > 0.0 {
                self.radius *= scale;
            } else {
                self.radius /= scale;
            }
            self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        }

        if input.get_mouse_button(MouseButton::Right) {
            let half_fov = camera.fov / 2.0;
            let world_height = 2.0 * self.radius * half_fov.tan();
            let pixels_to_world = world_height / screen_height;

            let forward = -self.direction();
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward).normalize_or_zero();

            let delta = input.mouse_delta();
            self.center += (right * -delta.x + up * delta.y) * pixels_to_world * self.pan_speed;
        }

        camera.transform.position = self.center + self.direction() * self.radius;
        camera.look_at(self.center);
    }

    /// Unit vector from `center` towards the camera.
    fn direction(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta)
    }
}

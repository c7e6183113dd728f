//! Renderer Settings
//!
//! ```rust,ignore
//! use scene_tween::renderer::RenderSettings;
//!
//! let settings = RenderSettings {
//!     vsync: false,
//!     power_preference: wgpu::PowerPreference::LowPower,
//!     ..Default::default()
//! };
//!
//! App::new().with_settings(settings).run::<MyApp>()?;
//! ```

/// Renderer configuration.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Enable vertical synchronization (VSync).
    ///
    /// When `true`, the frame rate is capped to the display refresh rate,
    /// which is what a display-refresh driven render loop expects.
    pub vsync: bool,

    /// GPU adapter selection preference.
    pub power_preference: wgpu::PowerPreference,

    /// Required wgpu features that must be supported by the adapter.
    pub required_features: wgpu::Features,

    /// Required wgpu limits.
    pub required_limits: wgpu::Limits,

    /// Depth buffer texture format.
    pub depth_format: wgpu::TextureFormat,

    /// Prefer an sRGB surface format so linear shader output is encoded
    /// for display.
    pub prefer_srgb_surface: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            depth_format: wgpu::TextureFormat::Depth32Float,
            prefer_srgb_surface: true,
        }
    }
}

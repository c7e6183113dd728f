//! Display-less renderer.
//!
//! Records a summary of every frame instead of drawing it. Used by tests and
//! by anything that needs to run the render loop without a window.

use glam::Mat4;

use crate::errors::Result;
use crate::renderer::{FrameRenderer, PipelineKind, pipeline_kind};
use crate::scene::{Camera, Scene};

/// What one frame would have drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub opaque: usize,
    pub transparent: usize,
    pub points: usize,
    /// Total instanced points across all point clouds.
    pub point_count: u32,
    pub gradient_background: bool,
    pub view_projection: Mat4,
}

impl FrameRecord {
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.opaque + self.transparent + self.points
    }
}

#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    width: u32,
    height: u32,
    frames: Vec<FrameRecord>,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn frames(&self) -> &[FrameRecord] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl FrameRenderer for HeadlessRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        let mut record = FrameRecord {
            opaque: 0,
            transparent: 0,
            points: 0,
            point_count: 0,
            gradient_background: scene.background.is_gradient(),
            view_projection: *camera.view_projection_matrix(),
        };

        for (_, _, mesh) in scene.iter_meshes() {
            match pipeline_kind(mesh) {
                PipelineKind::Opaque => record.opaque += 1,
                PipelineKind::Transparent => record.transparent += 1,
                PipelineKind::Points => {
                    record.points += 1;
                    record.point_count += mesh.geometry.vertex_count();
                }
            }
        }

        self.frames.push(record);
        Ok(())
    }
}

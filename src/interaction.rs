//! Click-to-flash interaction.
//!
//! Turns a pointer click into at most one color tween: the nearest picked
//! object flashes to a highlight color, then returns to the color it had
//! when it was clicked.

use glam::Vec2;

use crate::animation::{EaseMode, Easing, OnComplete, Property, PropertyValue, TweenId, TweenSpec};
use crate::engine::Engine;
use crate::errors::Result;
use crate::picking;
use crate::resources::Color;
use crate::scene::NodeHandle;

/// Configuration of the flash-and-revert feedback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickFlash {
    pub highlight: Color,
    /// Milliseconds to reach the highlight.
    pub flash_ms: f64,
    /// Milliseconds to return to the original color.
    pub revert_ms: f64,
    pub easing: Easing,
}

impl Default for ClickFlash {
    fn default() -> Self {
        Self {
            highlight: Color::RED,
            flash_ms: 300.0,
            revert_ms: 500.0,
            easing: Easing::Quadratic(EaseMode::Out),
        }
    }
}

/// Outcome of a handled click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    pub node: NodeHandle,
    pub tween: TweenId,
    /// Color captured at click time, restored by the revert leg.
    pub original: Color,
    /// World-space distance to the hit.
    pub distance: f32,
}

impl ClickFlash {
    #[must_use]
    pub fn with_highlight(mut self, color: Color) -> Self {
        self.highlight = color;
        self
    }

    /// Picks under `ndc` among `candidates` and schedules the flash on the
    /// nearest hit.
    ///
    /// Returns `Ok(None)` on a miss. World matrices are refreshed before
    /// picking, so tweens written earlier this frame are taken into account.
    pub fn handle_click(
        &self,
        engine: &mut Engine,
        ndc: Vec2,
        candidates: &[NodeHandle],
    ) -> Result<Option<Flash>> {
        engine.scene.update_transforms();

        let Some(hit) = picking::pick(&engine.scene, &engine.camera, ndc, candidates) else {
            log::trace!("Click at {ndc} hit nothing");
            return Ok(None);
        };

        // Nodes returned by picking always carry a mesh
        let Some(PropertyValue::Color(original)) = Property::COLOR.read(&engine.scene, hit.node)
        else {
            return Ok(None);
        };

        let spec = TweenSpec::new(hit.node, Property::COLOR, self.highlight)
            .duration(self.flash_ms)
            .easing(self.easing)
            .on_complete(OnComplete::Revert {
                value: PropertyValue::Color(original),
                duration: self.revert_ms,
                easing: self.easing,
            });
        let tween = engine.tweens.schedule(&engine.scene, spec)?;

        log::debug!(
            "Picked {:?} at distance {:.3}, flashing",
            hit.node,
            hit.distance
        );

        Ok(Some(Flash {
            node: hit.node,
            tween,
            original,
            distance: hit.distance,
        }))
    }

    /// Handles every click recorded by the engine's input this frame.
    pub fn handle_pending_clicks(
        &self,
        engine: &mut Engine,
        candidates: &[NodeHandle],
    ) -> Result<Vec<Flash>> {
        let clicks: Vec<Vec2> = engine
            .input
            .clicks()
            .iter()
            .filter_map(|&px| engine.input.to_ndc(px))
            .collect();

        let mut flashes = Vec::new();
        for ndc in clicks {
            if let Some(flash) = self.handle_click(engine, ndc, candidates)? {
                flashes.push(flash);
            }
        }
        Ok(flashes)
    }
}

//! Background Mode
//!
//! Describes what is drawn behind the scene:
//!
//! - [`Background::Color`]: solid clear color (uses the hardware clear, no draw call)
//! - [`Background::Gradient`]: vertical screen-space gradient, drawn as a
//!   fullscreen triangle before any geometry

use smallvec::SmallVec;

use crate::resources::Color;

/// Maximum number of stops the gradient pass uploads.
pub const MAX_GRADIENT_STOPS: usize = 4;

/// One color stop. `offset` runs from 0 (top of the screen) to 1 (bottom).
///
/// Neighbouring stops are blended in sRGB space, as CSS and canvas
/// gradients do; `color` itself is linear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    #[must_use]
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Color(Color),
    /// Stops are kept sorted by offset.
    Gradient(SmallVec<[GradientStop; MAX_GRADIENT_STOPS]>),
}

impl Default for Background {
    fn default() -> Self {
        Self::Color(Color::BLACK)
    }
}

impl Background {
    /// Builds a vertical gradient from `(offset, color)` pairs.
    ///
    /// Stops beyond [`MAX_GRADIENT_STOPS`] are discarded after sorting.
    #[must_use]
    pub fn gradient(stops: impl IntoIterator<Item = (f32, Color)>) -> Self {
        let mut stops: SmallVec<[GradientStop; MAX_GRADIENT_STOPS]> = stops
            .into_iter()
            .map(|(offset, color)| GradientStop::new(offset, color))
            .collect();
        stops.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        if stops.len() > MAX_GRADIENT_STOPS {
            log::warn!(
                "Gradient has {} stops, only the first {MAX_GRADIENT_STOPS} are used",
                stops.len()
            );
            stops.truncate(MAX_GRADIENT_STOPS);
        }
        Self::Gradient(stops)
    }

    /// Color at vertical position `t` (0 = top, 1 = bottom).
    ///
    /// Matches what the gradient shader computes per pixel.
    #[must_use]
    pub fn sample(&self, t: f32) -> Color {
        match self {
            Self::Color(color) => *color,
            Self::Gradient(stops) => sample_stops(stops, t.clamp(0.0, 1.0)),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }

    /// Clear color used for the frame. Gradients clear to their top stop.
    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.sample(0.0)
    }
}

fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Color::BLACK;
    };
    if t <= first.offset {
        return first.color;
    }
    if t >= last.offset {
        return last.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            if span <= f32::EPSILON || t >= b.offset {
                return b.color;
            }
            return a.color.lerp_srgb(b.color, (t - a.offset) / span);
        }
    }
    last.color
}

//! Platform-agnostic pointer input
//!
//! State container that does not depend on any windowing library. The
//! winit adapter in [`input_adapter`](crate::app::winit::input_adapter)
//! translates platform events into calls on [`Input`].

use glam::Vec2;
use rustc_hash::FxHashSet;

/// Mouse button enumeration
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Pointer state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pressed_mouse: FxHashSet<MouseButton>,

    // Position and movement, in physical pixels
    mouse_position: Vec2,
    mouse_delta: Vec2,
    scroll_delta: Vec2,
    has_cursor: bool,

    /// Left-button releases since the last frame, in pixels.
    clicks: Vec<Vec2>,

    screen_size: Vec2,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== System API (called by Engine/Adapter) ==========

    /// Clears per-frame state: deltas and pending clicks.
    pub fn start_frame(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
        self.clicks.clear();
    }

    /// Injects a mouse button event. Releasing the left button records a
    /// click at the current cursor position.
    pub fn inject_mouse_button(&mut self, button: MouseButton, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                self.pressed_mouse.insert(button);
            }
            ButtonState::Released => {
                if self.pressed_mouse.remove(&button) && button == MouseButton::Left {
                    self.clicks.push(self.mouse_position);
                }
            }
        }
    }

    /// Injects a cursor position. The first position after the cursor
    /// enters does not produce a delta.
    pub fn inject_mouse_position(&mut self, x: f32, y: f32) {
        let new_pos = Vec2::new(x, y);
        if self.has_cursor {
            self.mouse_delta += new_pos - self.mouse_position;
        }
        self.mouse_position = new_pos;
        self.has_cursor = true;
    }

    pub fn inject_cursor_left(&mut self) {
        self.has_cursor = false;
    }

    pub fn inject_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_delta += Vec2::new(delta_x, delta_y);
    }

    pub fn inject_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    // ========== User API ==========

    #[must_use]
    pub fn get_mouse_button(&self, button: MouseButton) -> bool {
        self.pressed_mouse.contains(&button)
    }

    #[must_use]
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    #[must_use]
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    #[must_use]
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }

    #[must_use]
    pub fn screen_size(&self) -> Vec2 {
        self.screen_size
    }

    /// Click positions recorded since the last frame, in pixels.
    #[must_use]
    pub fn clicks(&self) -> &[Vec2] {
        &self.clicks
    }

    /// Converts a pixel position (origin top-left, y down) to normalized
    /// device coordinates (x right, y up, both in [-1, 1]).
    ///
    /// `None` while the screen size is unknown or zero.
    #[must_use]
    pub fn to_ndc(&self, pixel: Vec2) -> Option<Vec2> {
        if self.screen_size.x <= 0.0 || self.screen_size.y <= 0.0 {
            return None;
        }
        Some(Vec2::new(
            pixel.x / self.screen_size.x * 2.0 - 1.0,
            -(pixel.y / self.screen_size.y) * 2.0 + 1.0,
        ))
    }
}

//! The drawable area, passed explicitly to every per-frame call.
//!
//! Points live in a bottom-left-origin pixel coordinate frame; the window
//! reports cursor positions with a top-left origin, so the cursor needs a
//! y-flip before it can be compared against point positions.

use glam::Vec2;

/// Current drawable width and height in pixels.
///
/// A plain value object: the orchestrator replaces it on resize events and
/// hands copies to the motion and graph code, so the simulation never reads
/// window state directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_physical(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }

    /// Convert a cursor position from window coordinates (origin top-left,
    /// y down) into the point coordinate frame (origin bottom-left, y up).
    pub fn cursor_to_scene(&self, cursor: Vec2) -> Vec2 {
        Vec2::new(cursor.x, self.height - cursor.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_y_flip() {
        let viewport = Viewport::new(640.0, 480.0);
        let scene = viewport.cursor_to_scene(Vec2::new(100.0, 30.0));
        assert_eq!(scene, Vec2::new(100.0, 450.0));
    }

    #[test]
    fn test_cursor_corners() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.cursor_to_scene(Vec2::ZERO), Vec2::new(0.0, 600.0));
        assert_eq!(
            viewport.cursor_to_scene(Vec2::new(800.0, 600.0)),
            Vec2::new(800.0, 0.0)
        );
    }

    #[test]
    fn test_from_physical() {
        let viewport = Viewport::from_physical(winit::dpi::PhysicalSize::new(640, 480));
        assert_eq!(viewport, Viewport::new(640.0, 480.0));
    }
}

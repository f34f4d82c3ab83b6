use crate::{Size, VisualState};

/// Hand-drawn rendering backend. Coordinates are host-local pixels.
pub trait SketchRenderer {
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn draw_ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32);
    /// Shift everything drawn until the matching `pop_translate` by `dx`.
    fn push_translate_x(&mut self, dx: f32);
    fn pop_translate(&mut self);
    fn apply_visual_state(&mut self, state: VisualState);
}

/// Synchronous measurement of the host box. `None` until attached.
pub trait LayoutSource {
    fn measured_size(&self) -> Option<Size>;
}

impl LayoutSource for Size {
    fn measured_size(&self) -> Option<Size> {
        Some(*self)
    }
}

impl LayoutSource for Option<Size> {
    fn measured_size(&self) -> Option<Size> {
        *self
    }
}

/// Visible region of the logical coordinate space, in pixels.
///
/// The engine keeps this equal to `(0, 0, surface_width, surface_height)` so
/// that content keeps a 1:1 pixel mapping after a resize instead of being
/// stretched or clipped.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport anchored at the origin covering `width x height` pixels.
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width as f32, height as f32)
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_size_is_anchored_at_origin() {
        let v = Viewport::from_size(800, 600);
        assert_eq!(v, Viewport::new(0.0, 0.0, 800.0, 600.0));
        assert!(v.is_valid());
    }

    #[test]
    fn zero_extent_is_invalid() {
        assert!(!Viewport::from_size(0, 600).is_valid());
    }
}

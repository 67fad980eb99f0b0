use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::Surface;

/// Uploaded background image with its fixed scale.
#[derive(Debug)]
pub struct BackgroundImage<T> {
    pub texture: T,
    /// Native pixel size of the decoded image.
    pub image_size: (u32, u32),
    /// Per-axis factor mapping the image onto the surface size at load time.
    pub scale: Vec2,
}

impl<T> BackgroundImage<T> {
    /// Scale stretching `image_size` over `surface_size`, independently per axis.
    pub fn cover_scale(surface_size: (u32, u32), image_size: (u32, u32)) -> Vec2 {
        Vec2::new(
            surface_size.0 as f32 / image_size.0.max(1) as f32,
            surface_size.1 as f32 / image_size.1.max(1) as f32,
        )
    }
}

/// What is drawn before the render hook: a solid color or a scaled image.
///
/// The color is always kept as the fallback; while an image is loaded it takes
/// priority.
#[derive(Debug)]
pub struct BackgroundFill<T> {
    color: Color,
    image: Option<BackgroundImage<T>>,
}

impl<T> BackgroundFill<T> {
    pub fn new(color: Color) -> Self {
        Self { color, image: None }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn image(&self) -> Option<&BackgroundImage<T>> {
        self.image.as_ref()
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Switches to solid color; any active image is dropped.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.image = None;
    }

    pub fn set_image(&mut self, image: BackgroundImage<T>) {
        self.image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Starts a frame on `surface` with this background.
    pub fn paint<S>(&self, surface: &mut S)
    where
        S: Surface<Texture = T>,
    {
        match &self.image {
            Some(image) => {
                surface.clear(Color::BLACK);
                surface.draw_texture(&image.texture, Vec2::zero(), image.scale);
            }
            None => surface.clear(self.color),
        }
    }
}

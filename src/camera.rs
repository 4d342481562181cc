use crate::errors::RenderError;
use crate::math::*;

/// Pinhole camera looking down +Z with +Y up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    // tilts every ray up (positive) or down (negative)
    pub vertical_offset: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            origin: Vec3::new(0.0, 2.0, 0.0),
            vertical_offset: 0.0,
        }
    }
}

impl Camera {
    pub fn new(origin: Vec3, vertical_offset: f32) -> Self {
        Camera {
            origin,
            vertical_offset,
        }
    }

    /// Maps a pixel to normalized device coordinates.
    ///
    /// `x` grows to the right and `y` grows upward from the bottom row. Both
    /// axes are divided by the height, so the horizontal extent widens with
    /// the aspect ratio instead of stretching the image.
    pub fn ndc(x: usize, y: usize, width: usize, height: usize) -> (f32, f32) {
        let (w, h) = (width as f32, height as f32);
        let u = (x as f32 - 0.5 * w) / h;
        let v = (y as f32 - 0.5 * h) / h;
        (u, v)
    }

    pub fn ray_through(&self, u: f32, v: f32) -> Result<Ray, RenderError> {
        Ray::new(self.origin, Vec3::new(u, v + self.vertical_offset, 1.0))
    }

    pub fn get_ray(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Ray, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyViewport { width, height });
        }
        let (u, v) = Camera::ndc(x, y, width, height);
        self.ray_through(u, v)
    }
}

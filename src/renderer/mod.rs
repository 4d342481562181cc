mod vec2d;

pub use vec2d::Vec2D;

use crate::camera::Camera;
use crate::errors::RenderError;
use crate::march::{march, MarchSettings};
use crate::math::*;
use crate::profile::Profile;
use crate::scene::Scene;
use crate::shading::{shade, ShadingSettings};

use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;
use serde::Deserialize;

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

pub fn u32_to_rgb(packed: u32) -> [u8; 3] {
    [(packed >> 16) as u8, (packed >> 8) as u8, packed as u8]
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Normal,
    // lit surfaces dark, unlit surfaces bright
    Inverted,
}

/// Converts a shading intensity to an 8 bit channel value.
pub fn intensity_to_channel(intensity: f32, mode: RenderMode) -> u8 {
    let value = (255.0 * clamp01(intensity)).round() as u8;
    match mode {
        RenderMode::Normal => value,
        RenderMode::Inverted => 255 - value,
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub march: MarchSettings,
    pub shading: ShadingSettings,
    pub mode: RenderMode,
    // color of pixels whose ray escapes the scene, unaffected by the mode
    pub background: [u8; 3],
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            march: MarchSettings::default(),
            shading: ShadingSettings::default(),
            mode: RenderMode::Normal,
            background: [0, 0, 0],
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), RenderError> {
        self.march.validate()?;
        self.shading.validate()
    }
}

/// Turns a scene into pixels. Holds no per-frame state, so the same renderer
/// can draw any number of frames at any viewport size.
#[derive(Copy, Clone, Debug, Default)]
pub struct FrameRenderer {
    pub camera: Camera,
    pub settings: RenderSettings,
}

impl FrameRenderer {
    pub fn new(camera: Camera, settings: RenderSettings) -> Result<Self, RenderError> {
        settings.validate()?;
        if !(camera.origin.is_finite() && camera.vertical_offset.is_finite()) {
            return Err(RenderError::InvalidSettings(format!(
                "camera must be finite, got {:?}",
                camera
            )));
        }
        Ok(FrameRenderer { camera, settings })
    }

    /// Color of the pixel at (`x`, `y`), with `y` counted from the bottom row.
    pub fn render_pixel(
        &self,
        scene: &Scene,
        light_position: Vec3,
        (x, y): (usize, usize),
        (width, height): (usize, usize),
        profile: &mut Profile,
    ) -> Result<u32, RenderError> {
        let ray = self.camera.get_ray(x, y, width, height)?;
        let result = march(scene, ray, &self.settings.march);
        profile.record_camera_ray(&result);
        match result.hit_point(ray) {
            Some(point) => {
                let intensity = shade(
                    scene,
                    point,
                    light_position,
                    &self.settings.march,
                    &self.settings.shading,
                    profile,
                );
                let value = intensity_to_channel(intensity, self.settings.mode);
                Ok(rgb_to_u32(value, value, value))
            }
            None => {
                let [r, g, b] = self.settings.background;
                Ok(rgb_to_u32(r, g, b))
            }
        }
    }

    /// Renders one frame at simulated `time` into `film`, one rayon task per pixel.
    ///
    /// Row 0 of the film is the top of the image.
    pub fn render(
        &self,
        scene: &Scene,
        time: f32,
        film: &mut Vec2D<u32>,
    ) -> Result<Profile, RenderError> {
        let (width, height) = (film.width, film.height);
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyViewport { width, height });
        }
        let light_position = scene.light.position_at(time);
        trace!(
            "rendering {} pixels ({}x{}) at t = {}, light at {:?}",
            film.total_pixels(),
            width,
            height,
            time,
            light_position
        );

        film.buffer
            .par_iter_mut()
            .enumerate()
            .map(|(idx, pixel)| -> Result<Profile, RenderError> {
                let (x, row) = (idx % width, idx / width);
                let mut profile = Profile::default();
                *pixel = self.render_pixel(
                    scene,
                    light_position,
                    (x, height - 1 - row),
                    (width, height),
                    &mut profile,
                )?;
                Ok(profile)
            })
            .try_reduce(Profile::default, |a, b| Ok(a.combine(b)))
    }
}

pub fn output_film(film: &Vec2D<u32>, path: &Path) -> anyhow::Result<()> {
    let mut img = image::RgbImage::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb(u32_to_rgb(film.at(x as usize, y as usize)));
    }
    info!("saving image to {}", path.to_string_lossy());
    img.save(path)
        .with_context(|| format!("failed to write {}", path.to_string_lossy()))?;
    Ok(())
}

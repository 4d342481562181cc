pub mod config;
pub mod primitives;

pub use config::{CameraSettings, TOMLConfig, TOMLRenderSettings, WindowSettings};
pub use primitives::{LightData, PrimitiveData};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];

pub fn parse_config(input: &str) -> anyhow::Result<TOMLConfig> {
    let mut settings: TOMLConfig = toml::from_str(input).context("failed to parse config")?;
    if settings.render.threads.is_none() {
        settings.render.threads = Some(num_cpus::get() as u16);
    }
    Ok(settings)
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    info!("loading config file at {}", filepath.to_string_lossy());
    let mut input = String::new();
    let read_count = File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.to_string_lossy()))?;
    debug!("done: {} bytes", read_count);
    parse_config(&input).with_context(|| format!("in {}", filepath.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use crate::light::Light;
    use crate::math::Vec3;
    use crate::renderer::{RenderMode, RenderSettings};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.window, WindowSettings::default());
        assert!(config.render.threads.unwrap() > 0);
        assert_eq!(
            RenderSettings::from(config.render.clone()),
            RenderSettings::default()
        );
        let scene = config.build_scene().unwrap();
        assert_eq!(scene.primitives().len(), 4);
        assert_eq!(scene.light, Light::default());
    }

    #[test]
    fn test_parsing_full_config() {
        let config = parse_config(
            r#"
            [window]
            title = "test"
            width = 640
            height = 480
            target_fps = 30

            [render]
            threads = 2
            mode = "Inverted"
            max_steps = 80
            surface_epsilon = 0.02
            background = [0, 0, 64]

            [camera]
            origin = [0.0, 1.0, -1.0]
            vertical_offset = -0.1

            [light]
            type = "Fixed"
            position = [1.0, 5.0, 2.0]

            [[primitives]]
            type = "Plane"

            [[primitives]]
            type = "Sphere"
            center = [0.0, 1.0, 6.0]
            radius = 1.0

            [[primitives]]
            type = "Cuboid"
            center = [2.0, 0.5, 5.0]
            half_extents = [0.5, 0.5, 0.5]

            [[primitives]]
            type = "Capsule"
            a = [-2.0, 0.5, 5.0]
            b = [-2.0, 2.0, 5.0]
            radius = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.window.title, "test");
        assert_eq!((config.window.width, config.window.height), (640, 480));
        assert_eq!(config.render.threads, Some(2));

        let settings = RenderSettings::from(config.render.clone());
        assert_eq!(settings.mode, RenderMode::Inverted);
        assert_eq!(settings.march.max_steps, 80);
        assert_eq!(settings.march.surface_epsilon, 0.02);
        assert_eq!(settings.march.max_distance, 50.0);
        assert_eq!(settings.background, [0, 0, 64]);

        let camera = crate::camera::Camera::from(config.camera);
        assert_eq!(camera.origin, Vec3::new(0.0, 1.0, -1.0));
        assert_eq!(camera.vertical_offset, -0.1);

        let scene = config.build_scene().unwrap();
        assert_eq!(
            scene.light,
            Light::Fixed {
                position: Vec3::new(1.0, 5.0, 2.0)
            }
        );
        let names: Vec<&str> = scene.primitives().iter().map(Primitive::name).collect();
        assert_eq!(names, vec!["plane", "sphere", "box", "capsule"]);
    }

    #[test]
    fn test_invalid_primitive_fails_scene_build() {
        let config = parse_config(
            r#"
            [[primitives]]
            type = "Sphere"
            center = [0.0, 1.0, 6.0]
            radius = -1.0
            "#,
        )
        .unwrap();
        assert!(config.build_scene().is_err());
    }

    #[test]
    fn test_unknown_primitive_is_a_parse_error() {
        assert!(parse_config(
            r#"
            [[primitives]]
            type = "Torus"
            "#
        )
        .is_err());
    }

    #[test]
    fn test_parsing_shipped_config() {
        let config = get_settings("data/config.toml").unwrap();
        assert!(config.render.threads.unwrap() > 0);
        assert!(config.build_scene().is_ok());
        assert!(RenderSettings::from(config.render).validate().is_ok());
    }
}

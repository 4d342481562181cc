use crate::camera::Camera;
use crate::errors::RenderError;
use crate::light::Light;
use crate::march::MarchSettings;
use crate::math::Vec3;
use crate::parsing::primitives::{LightData, PrimitiveData};
use crate::parsing::Point3Data;
use crate::renderer::{RenderMode, RenderSettings};
use crate::scene::Scene;
use crate::shading::ShadingSettings;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: usize,
    pub height: usize,
    pub target_fps: usize,
}

impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            title: String::from("ray_marching"),
            width: 300,
            height: 400,
            target_fps: 60,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TOMLRenderSettings {
    pub threads: Option<u16>,
    pub mode: Option<RenderMode>,
    pub max_steps: Option<usize>,
    pub max_distance: Option<f32>,
    pub surface_epsilon: Option<f32>,
    pub normal_epsilon: Option<f32>,
    pub shadow_factor: Option<f32>,
    pub shadow_offset_scale: Option<f32>,
    pub background: Option<[u8; 3]>,
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        let march = MarchSettings::default();
        let shading = ShadingSettings::default();
        RenderSettings {
            march: MarchSettings {
                max_steps: data.max_steps.unwrap_or(march.max_steps),
                max_distance: data.max_distance.unwrap_or(march.max_distance),
                surface_epsilon: data.surface_epsilon.unwrap_or(march.surface_epsilon),
            },
            shading: ShadingSettings {
                normal_epsilon: data.normal_epsilon.unwrap_or(shading.normal_epsilon),
                shadow_factor: data.shadow_factor.unwrap_or(shading.shadow_factor),
                shadow_offset_scale: data
                    .shadow_offset_scale
                    .unwrap_or(shading.shadow_offset_scale),
            },
            mode: data.mode.unwrap_or_default(),
            background: data.background.unwrap_or([0, 0, 0]),
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraSettings {
    pub origin: Option<Point3Data>,
    pub vertical_offset: Option<f32>,
}

impl From<CameraSettings> for Camera {
    fn from(data: CameraSettings) -> Self {
        let default = Camera::default();
        Camera::new(
            data.origin.map(Vec3::from).unwrap_or(default.origin),
            data.vertical_offset.unwrap_or(default.vertical_offset),
        )
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TOMLConfig {
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub render: TOMLRenderSettings,
    #[serde(default)]
    pub camera: CameraSettings,
    pub light: Option<LightData>,
    // empty means the built in demo scene
    #[serde(default)]
    pub primitives: Vec<PrimitiveData>,
}

impl TOMLConfig {
    pub fn build_scene(&self) -> Result<Scene, RenderError> {
        let light = self.light.map(Light::from).unwrap_or_default();
        if self.primitives.is_empty() {
            info!("no primitives configured, using the demo scene");
            let demo = Scene::default_scene();
            return Scene::new(demo.primitives().to_vec(), light);
        }
        Scene::new(self.primitives.iter().map(|&e| e.into()).collect(), light)
    }
}

use crate::errors::RenderError;
use crate::march::{march, MarchSettings, Termination};
use crate::math::*;
use crate::profile::Profile;
use crate::scene::Scene;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadingSettings {
    // step used by the finite difference normal
    pub normal_epsilon: f32,
    // multiplier applied to the diffuse term of occluded points
    pub shadow_factor: f32,
    // shadow rays start this many surface epsilons off the surface
    pub shadow_offset_scale: f32,
}

impl Default for ShadingSettings {
    fn default() -> Self {
        ShadingSettings {
            normal_epsilon: 0.001,
            shadow_factor: 0.1,
            shadow_offset_scale: 2.0,
        }
    }
}

impl ShadingSettings {
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.normal_epsilon.is_finite() && self.normal_epsilon > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "normal_epsilon must be positive, got {}",
                self.normal_epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.shadow_factor) {
            return Err(RenderError::InvalidSettings(format!(
                "shadow_factor must be within [0, 1], got {}",
                self.shadow_factor
            )));
        }
        if !(self.shadow_offset_scale.is_finite() && self.shadow_offset_scale >= 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "shadow_offset_scale must be non-negative, got {}",
                self.shadow_offset_scale
            )));
        }
        Ok(())
    }
}

/// Whether the segment from `point` to `light_position` is blocked by the scene.
///
/// A shadow ray that stops short of the light blocks it, including one that
/// ran out of steps skimming a surface. A ray that escaped past
/// `max_distance` never does, so lights farther away than that still reach
/// the scene.
pub fn occluded(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    light_position: Vec3,
    march_settings: &MarchSettings,
    shading_settings: &ShadingSettings,
    profile: &mut Profile,
) -> bool {
    let to_light = light_position - point;
    let light_distance = to_light.norm();
    let Ok(light_dir) = to_light.try_normalized() else {
        return false;
    };
    // start off the surface so the ray does not immediately hit its own origin
    let origin =
        point + normal * (march_settings.surface_epsilon * shading_settings.shadow_offset_scale);
    let shadow_ray = Ray {
        origin,
        direction: light_dir,
    };
    let result = march(scene, shadow_ray, march_settings);
    profile.record_shadow_ray(&result);
    result.termination != Termination::ExceededMaxDistance && result.traveled < light_distance
}

/// Diffuse intensity in [0, 1] of a surface point lit by the point light at
/// `light_position`.
pub fn shade(
    scene: &Scene,
    point: Vec3,
    light_position: Vec3,
    march_settings: &MarchSettings,
    shading_settings: &ShadingSettings,
    profile: &mut Profile,
) -> f32 {
    let normal = scene.normal(point, shading_settings.normal_epsilon);
    let light_dir = match (light_position - point).try_normalized() {
        Ok(dir) => dir,
        // the light sits on the surface
        Err(_) => return 1.0,
    };
    let diffuse = clamp01(normal.dot(light_dir));
    if diffuse == 0.0 {
        // facing away, nothing to attenuate
        return 0.0;
    }
    if occluded(
        scene,
        point,
        normal,
        light_position,
        march_settings,
        shading_settings,
        profile,
    ) {
        diffuse * shading_settings.shadow_factor
    } else {
        diffuse
    }
}

use crate::errors::RenderError;
use crate::math::*;
use crate::sdf::SDF;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarchSettings {
    pub max_steps: usize,
    pub max_distance: f32,
    // a step shorter than this counts as touching the surface
    pub surface_epsilon: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        MarchSettings {
            max_steps: 50,
            max_distance: 50.0,
            surface_epsilon: 0.01,
        }
    }
}

impl MarchSettings {
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.max_steps == 0 {
            return Err(RenderError::InvalidSettings(String::from(
                "max_steps must be at least 1",
            )));
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "max_distance must be positive, got {}",
                self.max_distance
            )));
        }
        if !(self.surface_epsilon.is_finite() && self.surface_epsilon > 0.0) {
            return Err(RenderError::InvalidSettings(format!(
                "surface_epsilon must be positive, got {}",
                self.surface_epsilon
            )));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    Hit,
    ExceededMaxDistance,
    // ran out of iterations without converging, shaded as a miss
    ExceededMaxSteps,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarchResult {
    pub traveled: f32,
    pub steps: usize,
    pub termination: Termination,
}

impl MarchResult {
    pub fn is_hit(&self) -> bool {
        self.termination == Termination::Hit
    }

    pub fn hit_point(&self, ray: Ray) -> Option<Vec3> {
        if self.is_hit() {
            Some(ray.point_at_parameter(self.traveled))
        } else {
            None
        }
    }
}

/// Sphere traces `ray` through `sdf`, stepping by the reported distance each
/// iteration.
pub fn march<S: SDF + ?Sized>(sdf: &S, ray: Ray, settings: &MarchSettings) -> MarchResult {
    let mut traveled = 0.0;
    for step in 0..settings.max_steps {
        let p = ray.point_at_parameter(traveled);
        let distance = sdf.distance(p);
        traveled += distance;
        if distance < settings.surface_epsilon {
            return MarchResult {
                traveled,
                steps: step + 1,
                termination: Termination::Hit,
            };
        }
        if traveled > settings.max_distance {
            return MarchResult {
                traveled,
                steps: step + 1,
                termination: Termination::ExceededMaxDistance,
            };
        }
    }
    MarchResult {
        traveled,
        steps: settings.max_steps,
        termination: Termination::ExceededMaxSteps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Plane, Sphere};
    use crate::light::Light;
    use crate::scene::Scene;

    fn single_sphere() -> Scene {
        Scene::new(
            vec![Sphere::new(1.0, Vec3::new(0.0, 1.0, 6.0)).into()],
            Light::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_hit_sphere_head_on() {
        let scene = single_sphere();
        let settings = MarchSettings::default();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z).unwrap();
        let result = march(&scene, ray, &settings);
        assert_eq!(result.termination, Termination::Hit);
        assert!(
            (result.traveled - 5.0).abs() < settings.surface_epsilon,
            "{:?}",
            result
        );
        let p = result.hit_point(ray).unwrap();
        assert!((p.z - 5.0).abs() < settings.surface_epsilon);
    }

    #[test]
    fn test_miss_runs_out_of_distance() {
        let scene = single_sphere();
        let settings = MarchSettings::default();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y).unwrap();
        let result = march(&scene, ray, &settings);
        assert_eq!(result.termination, Termination::ExceededMaxDistance);
        assert!(result.traveled > settings.max_distance);
        // moving straight away from a sphere 5 units ahead, no step exceeds traveled + 5
        assert!(result.traveled < 2.0 * settings.max_distance + 5.0, "{:?}", result);
        assert!(result.steps < settings.max_steps);
        assert!(result.hit_point(ray).is_none());
    }

    #[test]
    fn test_grazing_ray_exhausts_steps() {
        // skimming parallel to the ground converges neither way
        let scene = Scene::new(vec![Plane::new(0.0).into()], Light::default()).unwrap();
        let settings = MarchSettings {
            max_steps: 10,
            max_distance: 50.0,
            surface_epsilon: 0.01,
        };
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::Z).unwrap();
        let result = march(&scene, ray, &settings);
        assert_eq!(result.termination, Termination::ExceededMaxSteps);
        assert_eq!(result.steps, 10);
        assert!(approx_eq(result.traveled, 5.0, 1e-4));
        assert!(!result.is_hit());
    }

    #[test]
    fn test_empty_scene_misses_immediately() {
        let scene = Scene::new(vec![], Light::default()).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
        let result = march(&scene, ray, &MarchSettings::default());
        assert_eq!(result.termination, Termination::ExceededMaxDistance);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_settings_validation() {
        assert!(MarchSettings::default().validate().is_ok());
        let bad = MarchSettings {
            max_steps: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = MarchSettings {
            surface_epsilon: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}

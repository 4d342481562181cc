use crate::errors::RenderError;
use crate::geometry::{Capsule, Cuboid, Plane, Primitive, Sphere};
use crate::light::Light;
use crate::math::*;
use crate::sdf::SDF;

/// Primitives combined by a union (pointwise minimum) plus the light.
#[derive(Clone, Debug)]
pub struct Scene {
    primitives: Vec<Primitive>,
    pub light: Light,
}

impl Scene {
    pub fn new(primitives: Vec<Primitive>, light: Light) -> Result<Scene, RenderError> {
        for (index, primitive) in primitives.iter().enumerate() {
            primitive
                .validate()
                .map_err(|reason| RenderError::InvalidPrimitive { index, reason })?;
        }
        light.validate().map_err(RenderError::InvalidSettings)?;
        Ok(Scene { primitives, light })
    }

    /// Ground plane, a sphere, a box and an upright capsule lit by an orbiting light.
    pub fn default_scene() -> Scene {
        Scene {
            primitives: vec![
                Plane::new(0.0).into(),
                Sphere::new(1.0, Vec3::new(0.0, 1.0, 6.0)).into(),
                Cuboid::new(Vec3::new(-3.0, 0.75, 6.0), Vec3::from(0.75)).into(),
                Capsule::new(Vec3::new(3.0, 0.5, 6.0), Vec3::new(3.0, 2.5, 6.0), 0.4).into(),
            ],
            light: Light::default(),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Index and distance of the nearest primitive, `None` for an empty scene.
    pub fn closest(&self, p: Vec3) -> Option<(usize, f32)> {
        let mut selected = None;
        let mut min_distance = INFINITY;
        for (index, primitive) in self.primitives.iter().enumerate() {
            let distance = primitive.distance(p);
            if distance < min_distance || selected.is_none() {
                min_distance = distance;
                selected = Some(index);
            }
        }
        selected.map(|index| (index, min_distance))
    }

    /// Forward difference gradient of the scene distance.
    ///
    /// Falls back to +Y where the gradient vanishes, e.g. exactly on a medial axis.
    pub fn normal(&self, p: Vec3, epsilon: f32) -> Vec3 {
        let d0 = self.distance(p);
        let gradient = Vec3::new(
            d0 - self.distance(p - Vec3::X * epsilon),
            d0 - self.distance(p - Vec3::Y * epsilon),
            d0 - self.distance(p - Vec3::Z * epsilon),
        );
        gradient.try_normalized().unwrap_or(Vec3::Y)
    }
}

impl SDF for Scene {
    fn distance(&self, p: Vec3) -> f32 {
        self.primitives
            .iter()
            .map(|primitive| primitive.distance(p))
            .fold(INFINITY, f32::min)
    }
}

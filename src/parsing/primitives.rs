use crate::geometry::*;
use crate::light::Light;
use crate::math::*;
use crate::parsing::{Point3Data, Vec3Data};

use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: Point3Data,
        radius: f32,
    },
    // axis aligned, sized by half extents along each axis
    Cuboid {
        center: Point3Data,
        half_extents: Vec3Data,
    },
    Capsule {
        a: Point3Data,
        b: Point3Data,
        radius: f32,
    },
    Plane {
        #[serde(default)]
        height: f32,
    },
}

impl From<PrimitiveData> for Primitive {
    fn from(data: PrimitiveData) -> Self {
        match data {
            PrimitiveData::Sphere { center, radius } => {
                Sphere::new(radius, Vec3::from(center)).into()
            }
            PrimitiveData::Cuboid {
                center,
                half_extents,
            } => Cuboid::new(Vec3::from(center), Vec3::from(half_extents)).into(),
            PrimitiveData::Capsule { a, b, radius } => {
                Capsule::new(Vec3::from(a), Vec3::from(b), radius).into()
            }
            PrimitiveData::Plane { height } => Plane::new(height).into(),
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum LightData {
    Fixed {
        position: Point3Data,
    },
    Orbit {
        center: Point3Data,
        radius: f32,
        // radians per second
        angular_speed: Option<f32>,
    },
}

impl From<LightData> for Light {
    fn from(data: LightData) -> Self {
        match data {
            LightData::Fixed { position } => Light::Fixed {
                position: Vec3::from(position),
            },
            LightData::Orbit {
                center,
                radius,
                angular_speed,
            } => Light::Orbit {
                center: Vec3::from(center),
                radius,
                angular_speed: angular_speed.unwrap_or(1.0),
            },
        }
    }
}

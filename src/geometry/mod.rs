mod capsule;
mod cuboid;
mod plane;
mod sphere;

pub use capsule::Capsule;
pub use cuboid::Cuboid;
pub use plane::Plane;
pub use sphere::Sphere;

use crate::math::*;
use crate::sdf::SDF;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Cuboid(Cuboid),
    Capsule(Capsule),
    Plane(Plane),
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Sphere(_) => "sphere",
            Primitive::Cuboid(_) => "box",
            Primitive::Capsule(_) => "capsule",
            Primitive::Plane(_) => "plane",
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(data: Sphere) -> Self {
        Primitive::Sphere(data)
    }
}

impl From<Cuboid> for Primitive {
    fn from(data: Cuboid) -> Self {
        Primitive::Cuboid(data)
    }
}

impl From<Capsule> for Primitive {
    fn from(data: Capsule) -> Self {
        Primitive::Capsule(data)
    }
}

impl From<Plane> for Primitive {
    fn from(data: Plane) -> Self {
        Primitive::Plane(data)
    }
}

impl SDF for Primitive {
    fn distance(&self, p: Vec3) -> f32 {
        match self {
            Primitive::Sphere(sphere) => sphere.distance(p),
            Primitive::Cuboid(cuboid) => cuboid.distance(p),
            Primitive::Capsule(capsule) => capsule.distance(p),
            Primitive::Plane(plane) => plane.distance(p),
        }
    }
    fn validate(&self) -> Result<(), String> {
        match self {
            Primitive::Sphere(sphere) => sphere.validate(),
            Primitive::Cuboid(cuboid) => cuboid.validate(),
            Primitive::Capsule(capsule) => capsule.validate(),
            Primitive::Plane(plane) => plane.validate(),
        }
    }
}

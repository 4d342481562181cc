use crate::math::*;
use crate::sdf::{check_finite, check_radius, SDF};

/// Segment from `a` to `b` swept by a sphere of `radius`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Capsule {
    pub a: Vec3,
    pub b: Vec3,
    pub radius: f32,
}

impl Capsule {
    pub fn new(a: Vec3, b: Vec3, radius: f32) -> Capsule {
        Capsule { a, b, radius }
    }
}

impl SDF for Capsule {
    fn distance(&self, p: Vec3) -> f32 {
        let ab = self.b - self.a;
        let ap = p - self.a;
        let len2 = ab.norm_squared();
        // a == b degenerates to a sphere around a
        let t = if len2 > 0.0 {
            (ap.dot(ab) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let closest = self.a + ab * t;
        (p - closest).norm() - self.radius
    }

    fn validate(&self) -> Result<(), String> {
        check_finite("capsule endpoint a", self.a)?;
        check_finite("capsule endpoint b", self.b)?;
        check_radius(self.radius)
    }
}

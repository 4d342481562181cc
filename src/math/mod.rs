mod misc;
mod vec;
pub use misc::*;
pub use std::f32::consts::{PI, TAU};
pub use std::f32::INFINITY;
pub use vec::Vec3;

use crate::errors::RenderError;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    // always unit length
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, RenderError> {
        Ok(Ray {
            origin,
            direction: direction.try_normalized()?,
        })
    }
    pub fn point_at_parameter(self, time: f32) -> Vec3 {
        self.origin + self.direction * time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_direction_is_normalized() {
        let ray = Ray::new(Vec3::Y, Vec3::new(0.0, 0.0, 4.0)).unwrap();
        assert_eq!(ray.direction, Vec3::Z);
        assert_eq!(ray.point_at_parameter(2.0), Vec3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_ray_rejects_degenerate_direction() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_err());
    }
}

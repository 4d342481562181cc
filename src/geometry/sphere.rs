use crate::math::*;
use crate::sdf::{check_finite, check_radius, SDF};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Vec3,
}

impl Sphere {
    pub fn new(radius: f32, origin: Vec3) -> Sphere {
        Sphere { radius, origin }
    }
}

impl SDF for Sphere {
    fn distance(&self, p: Vec3) -> f32 {
        (p - self.origin).norm() - self.radius
    }

    fn validate(&self) -> Result<(), String> {
        check_finite("sphere origin", self.origin)?;
        check_radius(self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_sdf() {
        let sphere = Sphere::new(1.0, Vec3::new(0.0, 1.0, 6.0));
        // on the surface
        assert!(sphere.distance(Vec3::new(1.0, 1.0, 6.0)).abs() < 1e-6);
        assert!(sphere.distance(Vec3::new(0.0, 1.0, 5.0)).abs() < 1e-6);
        // outside
        assert!((sphere.distance(Vec3::new(0.0, 1.0, 0.0)) - 5.0).abs() < 1e-6);
        // inside
        assert!((sphere.distance(Vec3::new(0.0, 1.0, 6.0)) + 1.0).abs() < 1e-6);
        assert!(sphere.distance(Vec3::new(0.3, 1.2, 6.1)) < 0.0);
    }

    #[test]
    fn test_sphere_validate() {
        assert!(Sphere::new(1.0, Vec3::ZERO).validate().is_ok());
        assert!(Sphere::new(-1.0, Vec3::ZERO).validate().is_err());
        assert!(Sphere::new(1.0, Vec3::new(f32::NAN, 0.0, 0.0))
            .validate()
            .is_err());
    }
}

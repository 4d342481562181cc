use crate::math::*;
use crate::sdf::{check_finite, SDF};

/// Axis aligned box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Cuboid {
    pub fn new(center: Vec3, half_extents: Vec3) -> Cuboid {
        Cuboid {
            center,
            half_extents,
        }
    }
}

impl SDF for Cuboid {
    fn distance(&self, p: Vec3) -> f32 {
        let q = (p - self.center).abs() - self.half_extents;
        // exterior term is exact, interior term makes points inside negative
        q.max_scalar(0.0).norm() + q.component_max().min(0.0)
    }

    fn validate(&self) -> Result<(), String> {
        check_finite("box center", self.center)?;
        check_finite("box half extents", self.half_extents)?;
        if self.half_extents.x < 0.0 || self.half_extents.y < 0.0 || self.half_extents.z < 0.0 {
            return Err(format!(
                "box half extents must be non-negative, got {:?}",
                self.half_extents
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_sdf() {
        let cuboid = Cuboid::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        // face
        assert!(cuboid.distance(Vec3::new(1.0, 1.0, 0.0)).abs() < 1e-6);
        assert!((cuboid.distance(Vec3::new(3.0, 1.0, 0.0)) - 2.0).abs() < 1e-6);
        // corner region
        let d = cuboid.distance(Vec3::new(2.0, 3.0, 0.0));
        assert!((d - 2.0f32.sqrt()).abs() < 1e-5);
        // inside
        assert!((cuboid.distance(Vec3::new(0.0, 1.0, 0.0)) + 1.0).abs() < 1e-6);
        assert!((cuboid.distance(Vec3::new(0.5, 1.0, 0.0)) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_cuboid_validate() {
        assert!(Cuboid::new(Vec3::ZERO, Vec3::from(1.0)).validate().is_ok());
        assert!(Cuboid::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 1.0))
            .validate()
            .is_err());
    }
}

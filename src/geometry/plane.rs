use crate::math::*;
use crate::sdf::SDF;

/// Infinite ground plane facing +Y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    pub height: f32,
}

impl Plane {
    pub fn new(height: f32) -> Plane {
        Plane { height }
    }
}

impl SDF for Plane {
    fn distance(&self, p: Vec3) -> f32 {
        p.y - self.height
    }

    fn validate(&self) -> Result<(), String> {
        if self.height.is_finite() {
            Ok(())
        } else {
            Err(format!("plane height must be finite, got {}", self.height))
        }
    }
}

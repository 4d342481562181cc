use crate::math::Vec3;

pub trait SDF {
    /// Signed distance from `p` to the surface, negative inside.
    ///
    /// Must never overestimate the true distance, otherwise the marcher can
    /// step through thin geometry.
    fn distance(&self, p: Vec3) -> f32;

    /// Checks that the shape parameters describe a real surface.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

pub(crate) fn check_finite(name: &str, v: Vec3) -> Result<(), String> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be finite, got {:?}", name, v))
    }
}

pub(crate) fn check_radius(radius: f32) -> Result<(), String> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(format!("radius must be finite and non-negative, got {}", radius))
    }
}

use crate::math::*;

/// Point light. Its position is a pure function of the simulated time, so a
/// frame rendered twice at the same time is identical.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Light {
    Fixed {
        position: Vec3,
    },
    /// Circles `center` in the XZ plane, starting on the +X side at `t = 0`.
    Orbit {
        center: Vec3,
        radius: f32,
        // radians per second
        angular_speed: f32,
    },
}

impl Light {
    pub fn position_at(&self, time: f32) -> Vec3 {
        match *self {
            Light::Fixed { position } => position,
            Light::Orbit {
                center,
                radius,
                angular_speed,
            } => {
                let (sin, cos) = (time * angular_speed).sin_cos();
                center + Vec3::new(cos * radius, 0.0, sin * radius)
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Light::Fixed { position } => {
                if position.is_finite() {
                    Ok(())
                } else {
                    Err(format!("light position must be finite, got {:?}", position))
                }
            }
            Light::Orbit {
                center,
                radius,
                angular_speed,
            } => {
                if center.is_finite() && radius.is_finite() && angular_speed.is_finite() {
                    Ok(())
                } else {
                    Err(String::from("orbiting light parameters must be finite"))
                }
            }
        }
    }
}

impl Default for Light {
    fn default() -> Self {
        Light::Orbit {
            center: Vec3::new(0.0, 5.0, 6.0),
            radius: 4.0,
            angular_speed: 1.0,
        }
    }
}

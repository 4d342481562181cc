use crate::errors::RenderError;

use std::ops::{Add, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);
}

impl Vec3 {
    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn add_scalar(self, s: f32) -> Vec3 {
        Vec3::new(self.x + s, self.y + s, self.z + s)
    }

    pub fn sub_scalar(self, s: f32) -> Vec3 {
        Vec3::new(self.x - s, self.y - s, self.z - s)
    }

    pub fn scale(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn dot(&self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Sum of squared components. Cheaper than `norm` when only comparing lengths.
    pub fn norm_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Euclidean length.
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// The caller guarantees a non-zero length, otherwise the result is NaN.
    /// Use `try_normalized` for vectors that can degenerate.
    pub fn normalized(&self) -> Vec3 {
        let norm = self.norm();
        debug_assert!(norm > 0.0, "normalizing zero length vector {:?}", self);
        Vec3::new(self.x / norm, self.y / norm, self.z / norm)
    }

    pub fn try_normalized(&self) -> Result<Vec3, RenderError> {
        let norm = self.norm();
        if norm > 0.0 && norm.is_finite() {
            Ok(Vec3::new(self.x / norm, self.y / norm, self.z / norm))
        } else {
            Err(RenderError::DegenerateVector)
        }
    }

    pub fn abs(&self) -> Vec3 {
        Vec3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Component-wise `max(self, s)`.
    pub fn max_scalar(&self, s: f32) -> Vec3 {
        Vec3::new(self.x.max(s), self.y.max(s), self.z.max(s))
    }

    /// Largest of the three components.
    pub fn component_max(&self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, other: Vec3) -> Vec3 {
        Vec3::add(self, other)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::sub(self, other)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, other: f32) -> Vec3 {
        self.scale(other)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, other: Vec3) -> Vec3 {
        other.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl From<f32> for Vec3 {
    fn from(s: f32) -> Vec3 {
        Vec3::new(s, s, s)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(other: [f32; 3]) -> Vec3 {
        Vec3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(v: Vec3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

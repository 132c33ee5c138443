use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use super::vector::Vec3;

/// A point in 3D world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3d {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
            z: self.z + t * (other.z - self.z),
        }
    }

    /// Position vector of this point (relative to the origin).
    pub fn to_vec3(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Radial projection onto the unit sphere. `None` at the origin.
    pub fn on_unit_sphere(&self) -> Option<Self> {
        self.to_vec3().normalized().map(Self::from_vec3)
    }
}

impl Add<Vec3> for Point3d {
    type Output = Point3d;
    fn add(self, rhs: Vec3) -> Self::Output {
        Point3d::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3d {
    type Output = Vec3;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<Vec3> for Point3d {
    type Output = Point3d;
    fn sub(self, rhs: Vec3) -> Self::Output {
        Point3d::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// A point in 2D camera space (the result of projecting a [`Point3d`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when neither coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point2d {
    type Output = Point2d;
    fn sub(self, rhs: Self) -> Self::Output {
        Point2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Point2d {
    type Output = Point2d;
    fn add(self, rhs: Self) -> Self::Output {
        Point2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point3d::new(1.0, 0.0, 0.0);
        let b = Point3d::new(4.0, 0.0, 0.0);
        assert!((a.distance_to(&b) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_sub_gives_vector() {
        let a = Point3d::new(3.0, 4.0, 5.0);
        let b = Point3d::new(1.0, 1.0, 1.0);
        let v = a - b;
        assert!((v.x - 2.0).abs() < 1e-12);
        assert!((v.y - 3.0).abs() < 1e-12);
        assert!((v.z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_add_vector() {
        let p = Point3d::new(1.0, 2.0, 3.0);
        let result = p + Vec3::new(10.0, 20.0, 30.0);
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp() {
        let mid = Point3d::ORIGIN.lerp(&Point3d::new(10.0, 0.0, 0.0), 0.5);
        assert!((mid.x - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_on_unit_sphere() {
        let p = Point3d::new(0.0, 3.0, 4.0).on_unit_sphere().unwrap();
        assert!((p.to_vec3().length() - 1.0).abs() < 1e-12);
        assert!((p.y - 0.6).abs() < 1e-12);
        assert!(Point3d::ORIGIN.on_unit_sphere().is_none());
    }

    #[test]
    fn test_point2d_finite() {
        assert!(Point2d::new(1.0, -2.0).is_finite());
        assert!(!Point2d::new(f64::NAN, 0.0).is_finite());
    }
}

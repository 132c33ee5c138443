use serde::{Deserialize, Serialize};

use super::point::Point3d;
use super::vector::Vec3;

/// One of the three world coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// Component of `p` along this axis.
    pub fn along(self, p: &Point3d) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
            Axis::Z => p.z,
        }
    }

    /// Right-handed basis `(u, w)` of the plane perpendicular to this axis,
    /// with `u × w == self.unit()`.
    pub fn perpendicular_basis(self) -> (Vec3, Vec3) {
        match self {
            Axis::X => (Vec3::Y, Vec3::Z),
            Axis::Y => (Vec3::Z, Vec3::X),
            Axis::Z => (Vec3::X, Vec3::Y),
        }
    }

    /// Coordinates of `p` in the perpendicular basis.
    pub fn perpendicular(self, p: &Point3d) -> (f64, f64) {
        let (u, w) = self.perpendicular_basis();
        let v = p.to_vec3();
        (v.dot(&u), v.dot(&w))
    }

    /// Rebuild a point from perpendicular coordinates and an axial component.
    pub fn compose(self, u_coord: f64, w_coord: f64, along: f64) -> Point3d {
        let (u, w) = self.perpendicular_basis();
        Point3d::from_vec3(u * u_coord + w * w_coord + self.unit() * along)
    }
}

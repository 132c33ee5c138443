pub mod camera;
pub mod error;
pub mod geometry;

pub use camera::{Camera, Frame};
pub use error::KernelError;
pub use geometry::{Axis, BoundingBox2d, Point2d, Point3d, Vec3};

/// Global tolerance configuration for geometric checks.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Observer and look-at points closer than this leave the frame undefined.
    pub frame: f64,
    /// Perpendicular magnitudes below this are treated as zero by cylinder maps.
    pub perpendicular: f64,
    /// Allowed deviation from unit length / zero dot product in a frame.
    pub orthonormal: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            frame: 1e-5,
            perpendicular: 1e-6,
            orthonormal: 1e-4,
        }
    }
}

impl Tolerance {
    pub fn is_unit(&self, length: f64) -> bool {
        (length - 1.0).abs() < self.orthonormal
    }

    pub fn is_orthogonal(&self, dot: f64) -> bool {
        dot.abs() < self.orthonormal
    }

    pub fn is_zero_perpendicular(&self, magnitude: f64) -> bool {
        magnitude < self.perpendicular
    }
}

/// Default tolerance shared by the kernel and the drawable builders.
pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}

//! Orthonormal camera frames and parallel projection.
//!
//! The camera frame is built from a look-at point, an observer position and
//! an up hint. Its z axis points from the look-at point towards the observer;
//! projecting a point keeps its x/y coordinates in that frame and discards
//! depth (orthographic, no perspective divide).

use nalgebra::{Matrix2x3, Vector3};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::KernelError;
use crate::geometry::{Point2d, Point3d, Vec3};

/// Orthonormal reference frame with its origin at the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub origin: Point3d,
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl Frame {
    #[instrument]
    pub fn new(look_at: Point3d, observer: Point3d, up: Vec3) -> Result<Self, KernelError> {
        let tol = crate::default_tolerance();

        let view = observer - look_at;
        let distance = view.length();
        if distance < tol.frame {
            return Err(KernelError::CoincidentObserver { distance });
        }
        let z_axis = view / distance;

        if up.is_parallel_to(&z_axis, tol.frame) {
            return Err(KernelError::ParallelUpVector { up, view: z_axis });
        }
        let x_axis = up
            .cross(&z_axis)
            .normalized()
            .ok_or(KernelError::ParallelUpVector { up, view: z_axis })?;
        let y_axis = z_axis.cross(&x_axis).normalized().ok_or_else(|| {
            KernelError::DegenerateFrame {
                reason: "y axis has zero length".to_string(),
            }
        })?;

        let frame = Self {
            origin: observer,
            x_axis,
            y_axis,
            z_axis,
        };
        frame.check_orthonormal()?;
        debug!(x = ?frame.x_axis, y = ?frame.y_axis, z = ?frame.z_axis, "camera frame built");
        Ok(frame)
    }

    fn check_orthonormal(&self) -> Result<(), KernelError> {
        let tol = crate::default_tolerance();
        for (name, axis) in [("x", self.x_axis), ("y", self.y_axis), ("z", self.z_axis)] {
            if !tol.is_unit(axis.length()) {
                return Err(KernelError::DegenerateFrame {
                    reason: format!("{name} axis has length {}", axis.length()),
                });
            }
        }
        let pairs = [
            ("x.y", self.x_axis.dot(&self.y_axis)),
            ("y.z", self.y_axis.dot(&self.z_axis)),
            ("z.x", self.z_axis.dot(&self.x_axis)),
        ];
        for (name, dot) in pairs {
            if !tol.is_orthogonal(dot) {
                return Err(KernelError::DegenerateFrame {
                    reason: format!("{name} = {dot}"),
                });
            }
        }
        Ok(())
    }

    /// Rows are the frame's x and y axes.
    pub fn projection_matrix(&self) -> Matrix2x3<f64> {
        Matrix2x3::from_rows(&[
            self.x_axis.to_nalgebra().transpose(),
            self.y_axis.to_nalgebra().transpose(),
        ])
    }

    /// Camera-space coordinates of a world point.
    pub fn world_to_camera(&self, p: &Point3d) -> Point2d {
        let v: Vector3<f64> = (*p - self.origin).to_nalgebra();
        let r = self.projection_matrix() * v;
        Point2d::new(r[0], r[1])
    }
}

/// Parallel-projection camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    frame: Frame,
}

impl Camera {
    pub fn new(look_at: Point3d, observer: Point3d, up: Vec3) -> Result<Self, KernelError> {
        Ok(Self {
            frame: Frame::new(look_at, observer, up)?,
        })
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Unit vector from the look-at point towards the observer.
    pub fn view_axis(&self) -> Vec3 {
        self.frame.z_axis
    }

    pub fn project(&self, p: &Point3d) -> Point2d {
        self.frame.world_to_camera(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn standard() -> Camera {
        Camera::new(Point3d::ORIGIN, Point3d::new(0.4, 0.5, 1.0), Vec3::Y).unwrap()
    }

    #[test]
    fn test_frame_axes_orthonormal() {
        let f = *standard().frame();
        assert_relative_eq!(f.x_axis.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.y_axis.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(f.z_axis.length(), 1.0, epsilon = 1e-12);
        assert!(f.x_axis.dot(&f.y_axis).abs() < 1e-12);
        assert!(f.y_axis.dot(&f.z_axis).abs() < 1e-12);
        assert!(f.z_axis.dot(&f.x_axis).abs() < 1e-12);
    }

    #[test]
    fn test_z_axis_points_to_observer() {
        let cam = standard();
        let expected = Vec3::new(0.4, 0.5, 1.0).normalized().unwrap();
        assert!((cam.view_axis() - expected).length() < 1e-12);
    }

    #[test]
    fn test_front_view_projection() {
        let cam = Camera::new(Point3d::ORIGIN, Point3d::new(0.0, 0.0, 5.0), Vec3::Y).unwrap();
        let p = cam.project(&Point3d::new(1.0, 2.0, -3.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coincident_observer_rejected() {
        let err = Camera::new(Point3d::ORIGIN, Point3d::ORIGIN, Vec3::Y).unwrap_err();
        assert!(matches!(err, KernelError::CoincidentObserver { .. }));
    }

    #[test]
    fn test_parallel_up_rejected() {
        let err = Camera::new(Point3d::ORIGIN, Point3d::new(0.0, 3.0, 0.0), Vec3::Y).unwrap_err();
        assert!(matches!(err, KernelError::ParallelUpVector { .. }));
    }

    #[test]
    fn test_observer_projects_to_origin() {
        let cam = standard();
        let p = cam.project(&Point3d::new(0.4, 0.5, 1.0));
        assert!(p.distance_to(&Point2d::ORIGIN) < 1e-12);
    }
}

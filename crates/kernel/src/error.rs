use thiserror::Error;

use crate::geometry::Vec3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("observer and look-at point coincide (distance {distance})")]
    CoincidentObserver { distance: f64 },
    #[error("up vector {up:?} is parallel to the view direction {view:?}")]
    ParallelUpVector { up: Vec3, view: Vec3 },
    #[error("camera frame is not orthonormal: {reason}")]
    DegenerateFrame { reason: String },
}

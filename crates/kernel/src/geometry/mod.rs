pub mod axis;
pub mod bounds;
pub mod point;
pub mod vector;

pub use axis::Axis;
pub use bounds::BoundingBox2d;
pub use point::{Point2d, Point3d};
pub use vector::Vec3;

use fig_kernel::{Point3d, Vec3};

use crate::drawable::{Composite, Drawable, PathShape, PointMarker};
use crate::style::{Color, Style};

/// Default width of a plain black segment.
pub const SEGMENT_WIDTH: f64 = 0.007;

/// Black two-point polyline from `p0` to `p1`.
pub fn segment(p0: Point3d, p1: Point3d) -> PathShape {
    PathShape::new(vec![p0, p1], Style::polyline(Color::BLACK, SEGMENT_WIDTH))
}

/// Segment starting at `p0` and spanning `direction`.
pub fn segment_along(p0: Point3d, direction: Vec3, color: Color, width: f64) -> PathShape {
    PathShape::new(vec![p0, p0 + direction], Style::polyline(color, width))
}

/// Segment joining two markers, drawn in the colour of the first.
pub fn segment_between(m0: &PointMarker, m1: &PointMarker, width: f64) -> PathShape {
    PathShape::new(vec![m0.position, m1.position], Style::polyline(m0.color, width))
}

/// Filled quadrilateral with vertex order `p00, p01, p11, p10`.
pub fn quad(p00: Point3d, p01: Point3d, p10: Point3d, p11: Point3d) -> PathShape {
    PathShape::new(vec![p00, p01, p11, p10], Style::solid(Color::RED, 0.2).open())
}

/// Unit coordinate axes from the origin: X red, Y dark green, Z blue.
pub fn axes(line_width: f64) -> Composite {
    [(Vec3::X, Color::RED), (Vec3::Y, Color::DARK_GREEN), (Vec3::Z, Color::BLUE)]
        .into_iter()
        .map(|(dir, color)| Drawable::from(segment_along(Point3d::ORIGIN, dir, color, line_width)))
        .collect()
}

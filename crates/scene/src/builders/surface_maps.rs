//! Maps from arbitrary polygons onto the unit sphere, unit cylinders and
//! the horizontal plane.
//!
//! Every map keeps the input order. Points the map is undefined for are
//! dropped with a warning instead of producing non-finite coordinates.

use fig_kernel::{Axis, Point3d, default_tolerance};
use tracing::{debug, instrument, warn};

use crate::drawable::{PathShape, PointMarker};
use crate::error::SceneError;
use crate::style::{Color, Style};

fn sphere_style() -> Style {
    Style::outline(Color::BLUE, 0.007).with_fill(Color::BLUE, 0.2)
}

fn cylinder_style() -> Style {
    Style::outline(Color::RED, 0.015).with_fill(Color::RED, 0.2)
}

fn plane_style() -> Style {
    Style::outline(Color::gray(0.35), 0.004).with_fill(Color::gray(0.6), 0.3)
}

fn onto_sphere(p: &Point3d) -> Option<Point3d> {
    let s = p.on_unit_sphere();
    if s.is_none() {
        warn!(point = ?p, "point at the origin has no spherical image, skipped");
    }
    s
}

/// Sphere image of `p` rescaled so its distance to `axis` is 1.
fn onto_cylinder(axis: Axis, p: &Point3d) -> Option<Point3d> {
    let s = onto_sphere(p)?;
    let (u, w) = axis.perpendicular(&s);
    let len = u.hypot(w);
    if default_tolerance().is_zero_perpendicular(len) {
        warn!(point = ?p, ?axis, len, "point lies on the cylinder axis, skipped");
        return None;
    }
    Some(axis.compose(u / len, w / len, axis.along(&s)))
}

/// Radial projection of every point onto the unit sphere.
#[instrument(level = "debug", skip(polygon), fields(points = polygon.len()))]
pub fn spherical_projection(polygon: &PathShape) -> PathShape {
    let points = polygon.points.iter().filter_map(onto_sphere).collect();
    PathShape::new(points, sphere_style())
}

/// Spherical projection restricted to the upper hemisphere: images below
/// the equator are pushed horizontally onto it.
#[instrument(level = "debug", skip(polygon), fields(points = polygon.len()))]
pub fn spherical_projection_clipped(polygon: &PathShape) -> PathShape {
    let points = polygon
        .points
        .iter()
        .filter_map(onto_sphere)
        .filter_map(|s| {
            if s.y >= 0.0 {
                return Some(s);
            }
            let flat = Point3d::new(s.x, 0.0, s.z).on_unit_sphere();
            if flat.is_none() {
                warn!(point = ?s, "point below the pole has no equator image, skipped");
            }
            flat
        })
        .collect();
    PathShape::new(points, sphere_style())
}

/// Project every point onto the unit-radius cylinder around `axis`.
#[instrument(level = "debug", skip(polygon), fields(points = polygon.len()))]
pub fn cylinder_projection(axis: Axis, polygon: &PathShape) -> PathShape {
    let points = polygon.points.iter().filter_map(|p| onto_cylinder(axis, p)).collect();
    PathShape::new(points, cylinder_style())
}

/// [`cylinder_projection`] followed by the unrolled boundary of the sector
/// `[angle0, angle1]` of the ellipse with semi-axes `lon_x`, `lon_y`,
/// traced at height 1 from `angle1` back to `angle0`.
///
/// The sector angles are re-measured with `atan2` on the ellipse endpoints,
/// since ellipse parameters are not polar angles when `lon_x != lon_y`.
/// The arc uses as many steps as the projected polygon has points.
#[instrument(level = "debug", skip(polygon), fields(points = polygon.len()))]
pub fn cylinder_projection_with_sector(
    axis: Axis,
    polygon: &PathShape,
    angle0: f64,
    angle1: f64,
    lon_x: f64,
    lon_y: f64,
) -> PathShape {
    let mut shape = cylinder_projection(axis, polygon);
    let steps = shape.len();
    if steps == 0 {
        warn!("cylinder projection is empty, sector boundary skipped");
        return shape;
    }

    let polar = |angle: f64| (lon_y * angle.sin()).atan2(lon_x * angle.cos());
    let start = polar(angle0);
    let mut end = polar(angle1);
    if end < start {
        end += 2.0 * std::f64::consts::PI;
    }
    debug!(angle0, angle1, start, end, "re-measured sector angles");

    shape.points.extend((0..=steps).rev().map(|i| {
        let angle = start + (end - start) * i as f64 / steps as f64;
        axis.compose(angle.cos(), angle.sin(), 1.0)
    }));
    shape
}

/// Drop every point vertically onto the plane `y = 0`. With
/// `clip_negative`, points below that plane are omitted.
#[instrument(level = "debug", skip(polygon), fields(points = polygon.len()))]
pub fn horizontal_plane_projection(polygon: &PathShape, clip_negative: bool) -> PathShape {
    let points = polygon
        .points
        .iter()
        .filter(|p| !(clip_negative && p.y < 0.0))
        .map(|p| Point3d::new(p.x, 0.0, p.z))
        .collect();
    PathShape::new(points, plane_style())
}

/// Red marker at the cylinder image of `marker`.
pub fn cylinder_point(axis: Axis, marker: &PointMarker) -> Result<PointMarker, SceneError> {
    onto_cylinder(axis, &marker.position)
        .map(|p| PointMarker::new(p, Color::RED))
        .ok_or(SceneError::DegenerateDirection {
            what: "marker on the cylinder axis",
        })
}

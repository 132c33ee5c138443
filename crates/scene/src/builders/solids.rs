use std::f64::consts::PI;

use fig_kernel::{Axis, Camera, Point3d, Vec3};
use tracing::{instrument, warn};

use crate::builders::conics::{ELLIPSE_WIDTH, ellipse};
use crate::builders::primitives::{axes, segment_along};
use crate::drawable::{Composite, PathShape};
use crate::error::SceneError;
use crate::style::{Color, HEMISPHERE_GRADIENT, Style};

const RIM_POINTS: usize = 64;
const HEMISPHERE_POINTS: usize = 128;

/// Unit cylinder around `axis` between -1 and +1: bottom, equator and top
/// rims, plus the two generators on the silhouette seen from `camera`.
#[instrument(level = "debug", skip(camera))]
pub fn cylinder_wireframe(camera: &Camera, axis: Axis) -> Composite {
    let a = axis.unit();
    let (u, w) = axis.perpendicular_basis();
    let rim = |height: f64| ellipse(RIM_POINTS, Point3d::from_vec3(a * height), u, w);

    let mut out = Composite::new()
        .with(rim(-1.0).with_style(Style::outline(Color::RED, ELLIPSE_WIDTH)))
        .with(rim(0.0).with_style(Style::outline(Color::gray(0.4), 0.002)))
        .with(rim(1.0).with_style(Style::outline(Color::RED, ELLIPSE_WIDTH)));

    match camera.view_axis().reject_from(&a).normalized() {
        Some(d) => {
            let t = a.cross(&d);
            for side in [t, -t] {
                out.push(segment_along(Point3d::from_vec3(side - a), a * 2.0, Color::RED, ELLIPSE_WIDTH));
            }
        }
        None => warn!(?axis, "view direction is parallel to the cylinder axis, silhouettes skipped"),
    }
    out
}

/// Hemisphere above the horizontal plane through `center`, as seen along
/// `view_dir`: coordinate axes, the dashed hidden half of the equator and
/// the gradient-filled silhouette.
#[instrument(level = "debug")]
pub fn hemisphere(center: Point3d, radius: f64, view_dir: Vec3) -> Result<Composite, SceneError> {
    let axis_z = Vec3::new(view_dir.x, 0.0, view_dir.z)
        .normalized()
        .ok_or(SceneError::DegenerateDirection {
            what: "hemisphere view direction (vertical)",
        })?;
    let axis_x = Vec3::new(-axis_z.z, 0.0, axis_z.x);
    let axis_y = view_dir
        .normalized()
        .and_then(|v| axis_x.cross(&v).normalized())
        .ok_or(SceneError::DegenerateDirection {
            what: "hemisphere view direction",
        })?;

    let np = HEMISPHERE_POINTS;
    let angle = |i: usize| PI * i as f64 / np as f64;
    let at = |dir: Vec3| center + dir * radius;

    let mut contour: Vec<Point3d> = (0..np)
        .map(|i| at(axis_x * -angle(i).cos() + axis_z * angle(i).sin()))
        .collect();
    contour.extend((0..np).map(|i| at(axis_x * angle(i).cos() + axis_y * angle(i).sin())));

    let equator: Vec<Point3d> = (0..=np)
        .map(|i| at(axis_x * -angle(i).cos() - axis_z * angle(i).sin()))
        .collect();

    let line = Color::gray(0.5);
    let width = 0.0035;
    Ok(Composite::new()
        .with(axes(0.005))
        .with(PathShape::new(equator, Style::polyline(line, width).dashed()))
        .with(PathShape::new(
            contour,
            Style::outline(line, width).with_gradient(HEMISPHERE_GRADIENT),
        )))
}
